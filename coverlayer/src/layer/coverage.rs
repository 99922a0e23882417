//! CoverageLayer: a dataset, its index and its appearance, bound to a host.

use std::sync::Arc;

use parking_lot::RwLock;

use super::error::LayerError;
use super::host::MapHost;
use crate::coord::{GeoBounds, TileCoord, DEFAULT_TILE_SIZE};
use crate::dataset::{Dataset, DatasetEntry};
use crate::geo_index::{IndexConfig, SpatialIndex};
use crate::log::{Logger, TracingLogger};
use crate::render::{
    render_tile, MaskMode, RasterSurface, RasterTile, RenderConfig, RenderError, Rgba,
};
use crate::{log_debug, log_info, log_trace, log_warn};

/// Index and bounds of the current dataset, swapped as one unit.
#[derive(Debug)]
struct CoverageData {
    index: SpatialIndex,
    bounds: Option<GeoBounds>,
}

/// A tiled coverage overlay.
///
/// The layer owns its render configuration and the spatial index of the
/// current dataset. Hosts call [`create_tile`](Self::create_tile) (or
/// [`render_into`](Self::render_into)) for every visible tile; the layer asks
/// the host to redraw whenever the dataset or appearance changes.
///
/// Replacing the dataset builds the new index before taking any lock, then
/// swaps it in. A render running concurrently sees either the old or the new
/// index in full, so tiles may be rendered from any number of threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use coverlayer::coord::{Projection, TileCoord, WebMercator};
/// use coverlayer::dataset::DatasetEntry;
/// use coverlayer::layer::{CoverageLayer, MapHost};
/// use coverlayer::render::RenderConfig;
///
/// struct Map(WebMercator);
///
/// impl MapHost for Map {
///     fn projection(&self) -> &dyn Projection {
///         &self.0
///     }
///     fn request_redraw(&self) {}
/// }
///
/// let layer = CoverageLayer::new(RenderConfig::default().with_radius(80.0));
/// layer.attach(Arc::new(Map(WebMercator::default())));
/// layer
///     .set_data(vec![DatasetEntry::Triple([48.21033, 16.3614, 80.0])])
///     .unwrap();
///
/// let tile = layer.create_tile(&TileCoord::new(17873, 11361, 15)).unwrap();
/// assert_eq!(tile.pixel(64, 246).unwrap().a, 0);
/// ```
pub struct CoverageLayer {
    config: RwLock<RenderConfig>,
    index_config: IndexConfig,
    data: RwLock<Option<Arc<CoverageData>>>,
    host: RwLock<Option<Arc<dyn MapHost>>>,
    logger: Arc<dyn Logger>,
}

impl CoverageLayer {
    /// Create a detached layer with no data.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config: RwLock::new(config),
            index_config: IndexConfig::default(),
            data: RwLock::new(None),
            host: RwLock::new(None),
            logger: Arc::new(TracingLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Tuning for indexes built by later `set_data` calls.
    pub fn with_index_config(mut self, index_config: IndexConfig) -> Self {
        self.index_config = index_config;
        self
    }

    // =========================================================================
    // Host
    // =========================================================================

    /// Bind the layer to a host map, replacing any previous host.
    pub fn attach(&self, host: Arc<dyn MapHost>) {
        *self.host.write() = Some(host);
        log_info!(self.logger, "Coverage layer attached");
        self.request_redraw();
    }

    /// Unbind from the host. Later renders leave tiles untouched.
    pub fn detach(&self) -> Option<Arc<dyn MapHost>> {
        let host = self.host.write().take();
        if host.is_some() {
            log_info!(self.logger, "Coverage layer detached");
        }
        host
    }

    pub fn is_attached(&self) -> bool {
        self.host.read().is_some()
    }

    // =========================================================================
    // Data
    // =========================================================================

    /// Replace the dataset with `entries`.
    pub fn set_data<I>(&self, entries: I) -> Result<(), LayerError>
    where
        I: IntoIterator<Item = DatasetEntry>,
    {
        let dataset = Dataset::from_entries(entries)?;
        self.set_dataset(&dataset)
    }

    /// Replace the dataset with entries parsed from a JSON array.
    pub fn set_data_json(&self, json: &str) -> Result<(), LayerError> {
        let dataset = Dataset::from_json(json)?;
        self.set_dataset(&dataset)
    }

    /// Index `dataset` and make it the layer's data.
    pub fn set_dataset(&self, dataset: &Dataset) -> Result<(), LayerError> {
        let index = dataset.build_index(&self.index_config)?;
        let data = Arc::new(CoverageData {
            bounds: dataset.bounds().copied(),
            index,
        });

        log_info!(
            self.logger,
            "Coverage dataset loaded: {} points, index depth {}, region {}",
            data.index.len(),
            data.index.depth(),
            data.index.region()
        );

        *self.data.write() = Some(data);
        self.request_redraw();
        Ok(())
    }

    /// Drop the dataset. Later renders leave tiles untouched.
    pub fn clear_data(&self) {
        if self.data.write().take().is_some() {
            log_info!(self.logger, "Coverage dataset cleared");
            self.request_redraw();
        }
    }

    pub fn has_data(&self) -> bool {
        self.data.read().is_some()
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.data.read().as_ref().map_or(0, |d| d.index.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounding box of the current dataset, for fitting the map view.
    pub fn bounds(&self) -> Option<GeoBounds> {
        self.data.read().as_ref().and_then(|d| d.bounds)
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Snapshot of the current render configuration.
    pub fn config(&self) -> RenderConfig {
        self.config.read().clone()
    }

    pub fn set_config(&self, config: RenderConfig) {
        self.update_config(|c| *c = config);
    }

    /// Set the default circle radius.
    pub fn set_radius(&self, radius: f64) -> Result<(), LayerError> {
        if !radius.is_finite() || radius <= 0.0 {
            log_warn!(self.logger, "Rejected radius {}", radius);
            return Err(LayerError::InvalidRadius(radius));
        }
        self.update_config(|c| c.radius = radius);
        Ok(())
    }

    pub fn set_use_absolute_radius(&self, use_absolute_radius: bool) {
        self.update_config(|c| c.use_absolute_radius = use_absolute_radius);
    }

    pub fn set_color(&self, color: Rgba) {
        self.update_config(|c| c.color = color);
    }

    /// Set the layer opacity, clamped to `0.0..=1.0`.
    pub fn set_opacity(&self, opacity: f32) {
        let clamped = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        if clamped != opacity {
            log_warn!(self.logger, "Opacity {} out of range, using {}", opacity, clamped);
        }
        self.update_config(|c| c.opacity = clamped);
    }

    pub fn set_mode(&self, mode: MaskMode) {
        self.update_config(|c| c.mode = mode);
    }

    /// Set or remove the circle outline.
    pub fn set_outline(&self, color: Option<Rgba>, width: f32) {
        self.update_config(|c| {
            c.outline_color = color;
            c.outline_width = width;
        });
    }

    pub fn set_debug(&self, debug: bool) {
        self.update_config(|c| c.debug = debug);
    }

    fn update_config(&self, f: impl FnOnce(&mut RenderConfig)) {
        f(&mut self.config.write());
        self.request_redraw();
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Allocate a tile raster and render coverage into it.
    ///
    /// The raster takes the host projection's tile size, or
    /// [`DEFAULT_TILE_SIZE`] while detached.
    pub fn create_tile(&self, tile: &TileCoord) -> Result<RasterTile, RenderError> {
        let tile_size = self
            .host
            .read()
            .as_ref()
            .map_or(DEFAULT_TILE_SIZE, |host| host.projection().tile_size());
        let mut raster = RasterTile::new(tile_size)?;
        self.render_into(tile, &mut raster);
        Ok(raster)
    }

    /// Render coverage for `tile` onto a caller-supplied surface.
    ///
    /// Returns the number of circles drawn; 0 with the surface untouched when
    /// the layer is detached or has no data.
    pub fn render_into<S: RasterSurface + ?Sized>(
        &self,
        tile: &TileCoord,
        surface: &mut S,
    ) -> usize {
        let Some(host) = self.host.read().clone() else {
            log_trace!(self.logger, "Tile {} skipped: layer not attached", tile);
            return 0;
        };
        let Some(data) = self.data.read().clone() else {
            log_trace!(self.logger, "Tile {} skipped: no data", tile);
            return 0;
        };
        let config = self.config();

        render_tile(tile, &config, Some(&data.index), host.projection(), surface)
    }

    fn request_redraw(&self) {
        let host = self.host.read().clone();
        if let Some(host) = host {
            log_debug!(self.logger, "Requesting coverage redraw");
            host.request_redraw();
        }
    }
}

impl std::fmt::Debug for CoverageLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoverageLayer")
            .field("config", &*self.config.read())
            .field("index_config", &self.index_config)
            .field("points", &self.len())
            .field("attached", &self.is_attached())
            .finish()
    }
}
