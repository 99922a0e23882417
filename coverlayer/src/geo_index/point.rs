//! Point entries stored in the [`SpatialIndex`](super::SpatialIndex).

use crate::coord::LatLng;

/// One dataset entry: a location with an optional radius override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub location: LatLng,
    /// Radius override in the layer's radius unit; `None` uses the layer default.
    pub radius: Option<f64>,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            location: LatLng::new(lat, lng),
            radius: None,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Index-space x coordinate (longitude).
    #[inline]
    pub fn x(&self) -> f64 {
        self.location.lng
    }

    /// Index-space y coordinate (latitude).
    #[inline]
    pub fn y(&self) -> f64 {
        self.location.lat
    }
}

impl From<LatLng> for Point {
    fn from(location: LatLng) -> Self {
        Self {
            location,
            radius: None,
        }
    }
}

/// A point as stored in the index, tagged with its insertion sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint {
    pub point: Point,
    /// Monotonic insertion counter, unique within one index.
    pub sequence: u64,
}

impl IndexedPoint {
    #[inline]
    pub fn x(&self) -> f64 {
        self.point.x()
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.point.y()
    }
}
