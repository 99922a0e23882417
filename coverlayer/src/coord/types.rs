//! Coordinate type definitions

use std::fmt;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Default raster tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// A geographic position in degrees.
///
/// `lat` is the y axis and `lng` the x axis of the spatial index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lng: f64,
}

impl LatLng {
    /// Create a new geographic position.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true if both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// A position in the projected pixel space of one zoom level.
///
/// The origin is the north-west corner of the world; `y` grows southwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift the point by the given pixel deltas.
    #[inline]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Tile coordinates in the host's Slippy Map pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// X coordinate (east-west), 0 at west
    pub col: u32,
    /// Y coordinate (north-south), 0 at north
    pub row: u32,
    /// Zoom level
    pub zoom: u8,
}

impl TileCoord {
    pub fn new(col: u32, row: u32, zoom: u8) -> Self {
        Self { col, row, zoom }
    }

    /// Pixel position of the tile's north-west corner.
    #[inline]
    pub fn origin(&self, tile_size: u32) -> PixelPoint {
        PixelPoint::new(
            self.col as f64 * tile_size as f64,
            self.row as f64 * tile_size as f64,
        )
    }

    /// Pixel position of the tile's center.
    #[inline]
    pub fn center(&self, tile_size: u32) -> PixelPoint {
        let half = tile_size as f64 / 2.0;
        self.origin(tile_size).offset(half, half)
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.col, self.row)
    }
}

/// Axis-aligned geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Degenerate bounds containing a single location.
    pub fn from_location(location: LatLng) -> Self {
        Self {
            south: location.lat,
            west: location.lng,
            north: location.lat,
            east: location.lng,
        }
    }

    /// Smallest bounds containing every location, or `None` when empty.
    pub fn from_locations<I>(locations: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = locations.into_iter();
        let mut bounds = Self::from_location(iter.next()?);
        for location in iter {
            bounds.extend(location);
        }
        Some(bounds)
    }

    /// Grow the bounds to include `location`.
    pub fn extend(&mut self, location: LatLng) {
        self.south = self.south.min(location.lat);
        self.north = self.north.max(location.lat);
        self.west = self.west.min(location.lng);
        self.east = self.east.max(location.lng);
    }

    /// Bounds spanned by two arbitrary corners.
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        let mut bounds = Self::from_location(a);
        bounds.extend(b);
        bounds
    }

    pub fn south_west(&self) -> LatLng {
        LatLng::new(self.south, self.west)
    }

    pub fn north_east(&self) -> LatLng {
        LatLng::new(self.north, self.east)
    }

    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    pub fn contains(&self, location: LatLng) -> bool {
        (self.south..=self.north).contains(&location.lat)
            && (self.west..=self.east).contains(&location.lng)
    }
}
