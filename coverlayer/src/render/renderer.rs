//! Per-tile coverage rendering.
//!
//! # Algorithm
//!
//! 1. Take the tile's pixel box at its zoom level and grow it on every side
//!    by the largest radius any point can be drawn with, so circles centred
//!    just outside the tile still contribute their overlapping part.
//! 2. Unproject the grown box's corners and query the spatial index with the
//!    resulting geographic rectangle. Padding happens in pixel space because
//!    meters per degree are not uniform.
//! 3. Prepare the surface for the layer mode and draw one full circle per
//!    candidate at its rounded tile-local position.
//! 4. Draw the debug overlay last so it is never cut out by the mask.

use super::config::{MaskMode, RenderConfig};
use super::debug::draw_debug_overlay;
use super::radius::meters_to_pixel_radius;
use super::surface::{CompositeMode, RasterSurface};
use crate::coord::{GeoBounds, LatLng, PixelPoint, Projection, TileCoord};
use crate::geo_index::{Region, SpatialIndex};

/// Pixel geometry of one tile render.
///
/// Every radius conversion in a render is measured at the tile center, so the
/// reference point is computed once here and passed along.
#[derive(Debug, Clone, Copy)]
struct TileFrame {
    tile: TileCoord,
    size: f64,
    origin: PixelPoint,
    reference: LatLng,
}

impl TileFrame {
    fn new(tile: TileCoord, projection: &dyn Projection) -> Self {
        let tile_size = projection.tile_size();
        Self {
            tile,
            size: tile_size as f64,
            origin: tile.origin(tile_size),
            reference: projection.unproject(tile.center(tile_size), tile.zoom),
        }
    }

    /// Radius in pixels for a configured radius value.
    fn pixel_radius(&self, radius: f64, config: &RenderConfig, projection: &dyn Projection) -> f64 {
        if config.use_absolute_radius {
            meters_to_pixel_radius(radius, self.reference, self.tile.zoom, projection) as f64
        } else {
            radius
        }
    }

    /// Geographic rectangle covering the tile grown by `padding` pixels.
    fn query_region(&self, padding: f64, projection: &dyn Projection) -> Region {
        let north_west = self.origin.offset(-padding, -padding);
        let south_east = self.origin.offset(self.size + padding, self.size + padding);

        let bounds = GeoBounds::from_corners(
            projection.unproject(north_west, self.tile.zoom),
            projection.unproject(south_east, self.tile.zoom),
        );
        Region::from_bounds(&bounds)
    }

    /// Tile-local pixel position, rounded half away from zero.
    fn local_position(&self, location: LatLng, projection: &dyn Projection) -> (f32, f32) {
        let pixel = projection.project(location, self.tile.zoom);
        (
            (pixel.x - self.origin.x).round() as f32,
            (pixel.y - self.origin.y).round() as f32,
        )
    }
}

/// Render coverage for `tile` onto `surface`.
///
/// Returns the number of circles drawn. With no index the surface is left
/// untouched, since coverage has not been set up yet.
///
/// Pixel geometry follows `projection.tile_size()`; the surface is expected
/// to have that size.
///
/// Circles are drawn in dataset insertion order, which fixes which outline
/// ends up on top where circles overlap.
///
/// # Example
///
/// ```
/// use coverlayer::coord::{Projection, TileCoord, WebMercator};
/// use coverlayer::dataset::Dataset;
/// use coverlayer::geo_index::IndexConfig;
/// use coverlayer::render::{render_tile, MaskMode, RasterTile, RenderConfig};
///
/// let dataset = Dataset::from_json("[[48.21033, 16.3614, 80]]").unwrap();
/// let index = dataset.build_index(&IndexConfig::default()).unwrap();
/// let config = RenderConfig::default().with_mode(MaskMode::Stamp);
///
/// let projection = WebMercator::default();
/// let mut raster = RasterTile::new(projection.tile_size()).unwrap();
/// let tile = TileCoord::new(17873, 11361, 15);
/// let drawn = render_tile(&tile, &config, Some(&index), &projection, &mut raster);
/// assert_eq!(drawn, 1);
/// ```
pub fn render_tile<S: RasterSurface + ?Sized>(
    tile: &TileCoord,
    config: &RenderConfig,
    index: Option<&SpatialIndex>,
    projection: &dyn Projection,
    surface: &mut S,
) -> usize {
    let Some(index) = index else {
        tracing::trace!(tile = %tile, "No index, skipping tile render");
        return 0;
    };

    let frame = TileFrame::new(*tile, projection);
    if surface.size() != projection.tile_size() {
        tracing::debug!(
            tile = %tile,
            surface = surface.size(),
            tile_size = projection.tile_size(),
            "Surface size differs from projection tile size"
        );
    }

    let max_radius = index
        .max_radius()
        .map_or(config.radius, |r| r.max(config.radius));
    let padding = frame.pixel_radius(max_radius, config, projection);
    let candidates = index.query_range(&frame.query_region(padding, projection));

    let cut = config.mode == MaskMode::Mask && !config.debug;
    let (fill, outline) = if cut {
        // destination-out removes by source alpha, so cut with the raw colors
        (config.color, config.outline_color)
    } else {
        (
            config.fill_color(),
            config.outline_color.map(|c| c.with_opacity(config.opacity)),
        )
    };

    surface.set_composite(CompositeMode::SourceOver);
    if cut {
        let size = frame.size as f32;
        surface.fill_rect(0.0, 0.0, size, size, config.fill_color());
        surface.set_composite(CompositeMode::DestinationOut);
    }

    // Most points share the layer radius; convert it once.
    let default_radius = frame.pixel_radius(config.radius, config, projection);

    for entry in &candidates {
        let (x, y) = frame.local_position(entry.point.location, projection);
        let radius = match entry.point.radius {
            Some(r) => frame.pixel_radius(r, config, projection),
            None => default_radius,
        } as f32;

        surface.fill_circle(x, y, radius, fill);
        if let Some(color) = outline {
            surface.stroke_circle(x, y, radius, color, config.outline_width);
        }
    }

    if config.debug {
        draw_debug_overlay(surface, tile);
    }

    tracing::trace!(
        tile = %tile,
        candidates = candidates.len(),
        padding_px = padding,
        "Rendered coverage tile"
    );

    candidates.len()
}
