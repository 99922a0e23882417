//! Coverage datasets.
//!
//! A [`Dataset`] is an already-materialized set of [`Point`]s plus the values
//! derived from it once: the bounding box (root region of the spatial index)
//! and the largest explicit radius (tile query padding).
//!
//! Entries can be given as `[lat, lng]`, `[lat, lng, radius]` or as
//! structured `{ "lat": .., "lng": .. }` objects, mirroring what web map
//! plugins commonly accept.
//!
//! # Example
//!
//! ```
//! use coverlayer::dataset::Dataset;
//!
//! let dataset = Dataset::from_json("[[48.21033, 16.3614, 80], [48.2, 16.37]]").unwrap();
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.max_radius(), Some(80.0));
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::coord::{GeoBounds, LatLng};
use crate::geo_index::{IndexConfig, IndexError, Point, Region, SpatialIndex};

/// Errors raised while building a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Input was not valid dataset JSON
    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A coordinate was NaN or infinite
    #[error("Invalid coordinate at entry {index}: lat={lat}, lng={lng}")]
    InvalidCoordinate { index: usize, lat: f64, lng: f64 },

    /// A radius override was not a positive finite number
    #[error("Invalid radius at entry {index}: {radius} (must be positive)")]
    InvalidRadius { index: usize, radius: f64 },
}

/// One raw dataset entry as accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DatasetEntry {
    /// `[lat, lng]`
    Pair([f64; 2]),
    /// `[lat, lng, radius]`
    Triple([f64; 3]),
    /// `{ "lat": .., "lng": .., "radius": .. }`
    Structured {
        lat: f64,
        #[serde(alias = "lon")]
        lng: f64,
        #[serde(default)]
        radius: Option<f64>,
    },
}

impl From<DatasetEntry> for Point {
    fn from(entry: DatasetEntry) -> Self {
        match entry {
            DatasetEntry::Pair([lat, lng]) => Point::new(lat, lng),
            DatasetEntry::Triple([lat, lng, radius]) => Point::new(lat, lng).with_radius(radius),
            DatasetEntry::Structured { lat, lng, radius } => Point {
                location: LatLng::new(lat, lng),
                radius,
            },
        }
    }
}

impl From<LatLng> for DatasetEntry {
    fn from(location: LatLng) -> Self {
        DatasetEntry::Structured {
            lat: location.lat,
            lng: location.lng,
            radius: None,
        }
    }
}

/// An immutable, validated point dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    points: Vec<Point>,
    bounds: Option<GeoBounds>,
    max_radius: Option<f64>,
}

impl Dataset {
    /// Validate `points` and derive bounds and maximum radius.
    pub fn new(points: Vec<Point>) -> Result<Self, DatasetError> {
        let mut max_radius: Option<f64> = None;

        for (index, point) in points.iter().enumerate() {
            if !point.location.is_finite() {
                return Err(DatasetError::InvalidCoordinate {
                    index,
                    lat: point.location.lat,
                    lng: point.location.lng,
                });
            }
            if let Some(radius) = point.radius {
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(DatasetError::InvalidRadius { index, radius });
                }
                max_radius = Some(max_radius.map_or(radius, |m| m.max(radius)));
            }
        }

        let bounds = GeoBounds::from_locations(points.iter().map(|p| p.location));

        Ok(Self {
            points,
            bounds,
            max_radius,
        })
    }

    /// Build a dataset from raw input entries.
    pub fn from_entries<I>(entries: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = DatasetEntry>,
    {
        Self::new(entries.into_iter().map(Point::from).collect())
    }

    /// Parse an in-memory JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let entries: Vec<DatasetEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest box containing every point, `None` for an empty dataset.
    pub fn bounds(&self) -> Option<&GeoBounds> {
        self.bounds.as_ref()
    }

    /// Largest explicit per-point radius, if any point carries one.
    pub fn max_radius(&self) -> Option<f64> {
        self.max_radius
    }

    /// Largest radius any point will be drawn with under `default_radius`.
    pub fn effective_max_radius(&self, default_radius: f64) -> f64 {
        self.max_radius
            .map_or(default_radius, |r| r.max(default_radius))
    }

    /// Root region for this dataset's index.
    pub fn index_region(&self) -> Region {
        Region::placeholder_for(self.bounds.as_ref())
    }

    /// Build a fresh spatial index holding every point.
    pub fn build_index(&self, config: &IndexConfig) -> Result<SpatialIndex, IndexError> {
        let mut index = SpatialIndex::with_config(self.index_region(), *config)?;
        index.extend(self.points.iter().copied());
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs_and_triples() {
        let dataset = Dataset::from_json("[[52.5, 13.4], [48.2, 16.3, 120.5]]").unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.points()[0], Point::new(52.5, 13.4));
        assert_eq!(dataset.points()[1].radius, Some(120.5));
        assert_eq!(dataset.max_radius(), Some(120.5));
    }

    #[test]
    fn test_parse_structured_points() {
        let json = r#"[{"lat": 52.5, "lng": 13.4}, {"lat": 48.2, "lon": 16.3, "radius": 10}]"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.points()[0].location, LatLng::new(52.5, 13.4));
        assert_eq!(dataset.points()[1].location, LatLng::new(48.2, 16.3));
        assert_eq!(dataset.points()[1].radius, Some(10.0));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = Dataset::from_json("[[52.5]]");
        assert!(matches!(result, Err(DatasetError::Json(_))));
    }

    #[test]
    fn test_bounds_cover_all_points() {
        let dataset = Dataset::new(vec![
            Point::new(52.5, 13.4),
            Point::new(48.2, 16.4),
            Point::new(50.1, 8.7),
        ])
        .unwrap();

        let bounds = dataset.bounds().unwrap();
        assert_eq!(bounds.south_west(), LatLng::new(48.2, 8.7));
        assert_eq!(bounds.north_east(), LatLng::new(52.5, 16.4));
        assert!(dataset.max_radius().is_none());
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::from_entries(Vec::new()).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.bounds().is_none());
        assert_eq!(dataset.index_region(), Region::new(0.0, 0.0, 0.1, 0.1));

        let index = dataset.build_index(&IndexConfig::default()).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_single_point_builds_valid_index() {
        let dataset = Dataset::from_json("[[48.21033, 16.3614, 80]]").unwrap();
        let index = dataset.build_index(&IndexConfig::default()).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.region().has_area());
    }

    #[test]
    fn test_build_index_keeps_edge_points() {
        let dataset = Dataset::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 5.0),
        ])
        .unwrap();
        let index = dataset
            .build_index(&IndexConfig::default().with_max_points_per_node(1))
            .unwrap();
        assert_eq!(index.len(), dataset.len());
    }

    #[test]
    fn test_build_index_keeps_inexact_edge_points() {
        let dataset =
            Dataset::new(vec![Point::new(0.0, -93.27559), Point::new(1.0, 12.94057)]).unwrap();
        let index = dataset.build_index(&IndexConfig::default()).unwrap();
        assert_eq!(index.len(), 2);

        let hits = index.query_range(&Region::from_corners(12.94057, 1.0, 12.94057, 1.0));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_build_index_keeps_every_decimal_point() {
        // decimal coordinates that are not exactly representable, deep enough
        // to split several times
        let points: Vec<Point> = (0..400)
            .map(|i| {
                let lat = -33.86785 + (i % 20) as f64 * 0.37171 + (i / 20) as f64 * 0.001;
                let lng = 151.20732 - (i / 20) as f64 * 0.91313 + (i % 7) as f64 * 0.003;
                Point::new(lat, lng)
            })
            .collect();
        let dataset = Dataset::new(points.clone()).unwrap();

        for config in [IndexConfig::new(1, 8), IndexConfig::default()] {
            let index = dataset.build_index(&config).unwrap();
            assert_eq!(index.len(), points.len(), "config {:?}", config);

            // every point is found by a query touching only that point
            for p in &points {
                let rect = Region::from_corners(p.x(), p.y(), p.x(), p.y());
                assert!(
                    index.query_range(&rect).iter().any(|e| e.point == *p),
                    "point {:?} not found",
                    p
                );
            }
        }
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let result = Dataset::new(vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0).with_radius(0.0)]);
        assert!(matches!(
            result,
            Err(DatasetError::InvalidRadius { index: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_nan_coordinate() {
        let result = Dataset::new(vec![Point::new(f64::NAN, 1.0)]);
        assert!(matches!(
            result,
            Err(DatasetError::InvalidCoordinate { index: 0, .. })
        ));
    }

    #[test]
    fn test_effective_max_radius() {
        let dataset = Dataset::new(vec![Point::new(1.0, 1.0).with_radius(30.0)]).unwrap();
        assert_eq!(dataset.effective_max_radius(5.0), 30.0);
        assert_eq!(dataset.effective_max_radius(50.0), 50.0);

        let plain = Dataset::new(vec![Point::new(1.0, 1.0)]).unwrap();
        assert_eq!(plain.effective_max_radius(5.0), 5.0);
    }

    #[test]
    fn test_latlng_entries() {
        let entries = vec![
            DatasetEntry::from(LatLng::new(1.0, 2.0)),
            DatasetEntry::from(LatLng::new(3.0, 4.0)),
        ];
        let dataset = Dataset::from_entries(entries).unwrap();
        assert_eq!(dataset.points()[1], Point::new(3.0, 4.0));
    }
}
