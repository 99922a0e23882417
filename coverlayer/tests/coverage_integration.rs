//! Integration tests for the coverage layer.
//!
//! These tests drive the public API the way a host map would: load a config,
//! attach, feed a dataset, request tiles and inspect the produced rasters.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use coverlayer::config::ConfigFile;
use coverlayer::coord::{LatLng, Projection, TileCoord, WebMercator};
use coverlayer::dataset::{Dataset, DatasetEntry};
use coverlayer::geo_index::{Point, Region, SpatialIndex};
use coverlayer::layer::{CoverageLayer, MapHost};
use coverlayer::log::{CaptureLogger, LogLevel, NoOpLogger};
use coverlayer::render::{meters_to_pixel_radius, MaskMode, RenderConfig, Rgba};

/// A host map with a Web Mercator projection that counts redraw requests.
#[derive(Default)]
struct TestMap {
    projection: WebMercator,
    redraws: AtomicUsize,
}

impl MapHost for TestMap {
    fn projection(&self) -> &dyn Projection {
        &self.projection
    }

    fn request_redraw(&self) {
        self.redraws.fetch_add(1, Ordering::SeqCst);
    }
}

/// Tile containing `location` at `zoom`.
fn tile_at(location: LatLng, zoom: u8) -> TileCoord {
    let pixel = WebMercator::default().project(location, zoom);
    TileCoord::new((pixel.x / 256.0) as u32, (pixel.y / 256.0) as u32, zoom)
}

/// Tile-local pixel of `location` within `tile`.
fn local_pixel(location: LatLng, tile: &TileCoord) -> (u32, u32) {
    let pixel = WebMercator::default().project(location, tile.zoom);
    let origin = tile.origin(256);
    (
        (pixel.x - origin.x).round() as u32,
        (pixel.y - origin.y).round() as u32,
    )
}

// =============================================================================
// Index
// =============================================================================

#[test]
fn test_index_query_scenario() {
    let mut index = SpatialIndex::build(Region::new(0.0, 0.0, 10.0, 10.0), 2, 6).unwrap();
    for (x, y) in [(1.0, 1.0), (2.0, 2.0), (9.0, 9.0)] {
        index.insert(Point::new(y, x));
    }

    let mut hits: Vec<(f64, f64)> = index
        .query_range(&Region::new(0.0, 0.0, 3.0, 3.0))
        .iter()
        .map(|e| (e.x(), e.y()))
        .collect();
    hits.sort_by(|a, b| a.partial_cmp(b).unwrap());

    assert_eq!(hits, vec![(1.0, 1.0), (2.0, 2.0)]);
}

// =============================================================================
// Rendering through the layer
// =============================================================================

#[test]
fn test_vienna_circle_matches_projected_radius() {
    let location = LatLng::new(48.21033, 16.3614);
    let tile = tile_at(location, 15);
    assert_eq!(tile, TileCoord::new(17873, 11361, 15));

    let map = Arc::new(TestMap::default());
    let layer = CoverageLayer::new(
        RenderConfig::default()
            .with_mode(MaskMode::Stamp)
            .with_opacity(1.0),
    )
    .with_logger(Arc::new(NoOpLogger));
    layer.attach(map.clone());
    layer
        .set_data(vec![DatasetEntry::Triple([48.21033, 16.3614, 80.0])])
        .unwrap();

    let raster = layer.create_tile(&tile).unwrap();

    let reference = map.projection.unproject(tile.center(256), 15);
    let radius = meters_to_pixel_radius(80.0, reference, 15, &map.projection);
    assert_eq!(radius, 25);

    let (cx, cy) = local_pixel(location, &tile);
    assert_eq!((cx, cy), (64, 246));

    // painted well inside the radius, transparent well outside it
    assert_eq!(raster.pixel(cx, cy), Some(Rgba::BLACK));
    assert_eq!(raster.pixel(cx + radius - 3, cy), Some(Rgba::BLACK));
    assert_eq!(raster.pixel(cx + radius + 3, cy).unwrap().a, 0);
    assert_eq!(raster.pixel(cx, cy - radius - 3).unwrap().a, 0);

    // identical output on every request
    let again = layer.create_tile(&tile).unwrap();
    assert_eq!(raster.data(), again.data());
}

#[test]
fn test_mask_tile_is_opaque_except_hole() {
    let map = Arc::new(TestMap::default());
    let layer = CoverageLayer::new(
        RenderConfig::default()
            .with_absolute_radius(false)
            .with_radius(30.0)
            .with_opacity(1.0)
            .with_color(Rgba::rgb(0x20, 0x40, 0x60)),
    )
    .with_logger(Arc::new(NoOpLogger));
    layer.attach(map);
    layer.set_data_json("[[0.0, 0.0]]").unwrap();

    let raster = layer.create_tile(&TileCoord::new(0, 0, 0)).unwrap();
    let solid = Rgba::rgb(0x20, 0x40, 0x60);

    let mut holes = 0;
    for y in 0..256u32 {
        for x in 0..256u32 {
            let px = raster.pixel(x, y).unwrap();
            let dx = x as f64 + 0.5 - 128.0;
            let dy = y as f64 + 0.5 - 128.0;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance < 28.0 {
                assert_eq!(px.a, 0, "pixel ({}, {}) should be cut", x, y);
                holes += 1;
            } else if distance > 32.0 {
                assert_eq!(px, solid, "pixel ({}, {}) should be solid", x, y);
            }
        }
    }
    assert!(holes > 2000);
}

#[test]
fn test_neighbouring_tiles_share_a_circle() {
    // A point on the vertical border between two z1 tiles
    let map = Arc::new(TestMap::default());
    let layer = CoverageLayer::new(
        RenderConfig::default()
            .with_absolute_radius(false)
            .with_radius(20.0)
            .with_mode(MaskMode::Stamp),
    )
    .with_logger(Arc::new(NoOpLogger));
    layer.attach(map);
    layer.set_data_json("[[40.0, 0.0]]").unwrap();

    let west = layer.create_tile(&TileCoord::new(0, 0, 1)).unwrap();
    let east = layer.create_tile(&TileCoord::new(1, 0, 1)).unwrap();

    let (_, cy) = local_pixel(LatLng::new(40.0, 0.0), &TileCoord::new(0, 0, 1));
    assert!(west.pixel(250, cy).unwrap().a > 0);
    assert!(east.pixel(5, cy).unwrap().a > 0);
}

#[test]
fn test_empty_dataset_renders_blank_stamp_tile() {
    let map = Arc::new(TestMap::default());
    let layer = CoverageLayer::new(RenderConfig::default().with_mode(MaskMode::Stamp));
    layer.attach(map);
    layer.set_data(Vec::new()).unwrap();

    let raster = layer.create_tile(&TileCoord::new(3, 5, 4)).unwrap();
    assert!(raster.is_blank());
}

// =============================================================================
// Host interaction
// =============================================================================

#[test]
fn test_host_redraw_requests() {
    let map = Arc::new(TestMap::default());
    let logger = Arc::new(CaptureLogger::new());
    let layer = CoverageLayer::new(RenderConfig::default()).with_logger(logger.clone());

    layer.set_data_json("[[52.52, 13.405]]").unwrap();
    assert_eq!(map.redraws.load(Ordering::SeqCst), 0);

    layer.attach(map.clone());
    layer.set_radius(250.0).unwrap();
    layer.set_data_json("[[52.52, 13.405], [48.85, 2.35]]").unwrap();
    assert_eq!(map.redraws.load(Ordering::SeqCst), 3);

    assert!(logger.contains(LogLevel::Info, "Coverage layer attached"));
    assert!(logger.contains(LogLevel::Info, "2 points"));

    let bounds = layer.bounds().unwrap();
    assert_eq!(bounds.south_west(), LatLng::new(48.85, 2.35));
}

#[test]
fn test_layer_from_config_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("config.ini");
    std::fs::write(
        &path,
        "[layer]\nradius = 12\nabsolute_radius = false\nmode = stamp\nopacity = 1\n\n[index]\nmax_points_per_node = 2\n",
    )
    .unwrap();

    let config = ConfigFile::load_from(&path).unwrap();
    let layer = CoverageLayer::new(config.render.clone())
        .with_index_config(config.index)
        .with_logger(Arc::new(NoOpLogger));
    layer.attach(Arc::new(TestMap {
        projection: config.projection(),
        redraws: AtomicUsize::new(0),
    }));

    let dataset = Dataset::from_json("[[0,0],[1,1],[2,2],[3,3],[-1,-1]]").unwrap();
    layer.set_dataset(&dataset).unwrap();
    assert_eq!(layer.len(), 5);

    let raster = layer.create_tile(&TileCoord::new(0, 0, 0)).unwrap();
    assert_eq!(raster.pixel(128, 128), Some(Rgba::BLACK));
    assert_eq!(raster.pixel(128 + 16, 128).unwrap().a, 0);
}

#[test]
fn test_png_export() {
    let map = Arc::new(TestMap::default());
    let layer = CoverageLayer::new(RenderConfig::default().with_debug(true));
    layer.attach(map);
    layer.set_data_json("[[0.0, 0.0, 500000]]").unwrap();

    let raster = layer.create_tile(&TileCoord::new(0, 0, 0)).unwrap();
    let png = raster.encode_png().unwrap();

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (256, 256));
    assert_eq!(decoded.get_pixel(128, 128)[3], 128);
}
