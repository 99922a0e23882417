//! Rectangular index region type.
//!
//! A [`Region`] is an axis-aligned rectangle in index space, stored by its
//! minimum and maximum corners. The x axis carries longitude and the y axis
//! latitude, so `(min_x, min_y)` is the south-west corner.
//!
//! Edges are stored rather than derived from a width, so a region built from
//! a bounding box ends exactly on the box's edges and quadrants share their
//! parent's edges bit for bit.

use std::fmt;

use crate::coord::GeoBounds;

/// Edge length used when the data does not span a usable area.
pub const PLACEHOLDER_EXTENT: f64 = 0.1;

/// An axis-aligned rectangle in index space.
///
/// # Examples
///
/// ```
/// use coverlayer::geo_index::Region;
///
/// let region = Region::new(0.0, 0.0, 10.0, 10.0);
/// assert!(region.contains(10.0, 0.0));
/// assert!(!region.contains(10.1, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// West edge.
    pub min_x: f64,
    /// South edge.
    pub min_y: f64,
    /// East edge.
    pub max_x: f64,
    /// North edge.
    pub max_y: f64,
}

impl Region {
    /// Region anchored at `(x, y)` with the given extent.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(x, y, x + width, y + height)
    }

    /// Region spanning the two corners exactly.
    pub fn from_corners(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Region covering the given geographic bounds exactly.
    pub fn from_bounds(bounds: &GeoBounds) -> Self {
        Self::from_corners(bounds.west, bounds.south, bounds.east, bounds.north)
    }

    /// Root region for a dataset with the given bounds.
    ///
    /// Empty data gets a `0.1 × 0.1` box at the origin. An axis with zero
    /// extent (a single point, or points on one line) is widened to
    /// [`PLACEHOLDER_EXTENT`] centred on the data so the region stays valid.
    pub fn placeholder_for(bounds: Option<&GeoBounds>) -> Self {
        let Some(bounds) = bounds else {
            return Self::from_corners(0.0, 0.0, PLACEHOLDER_EXTENT, PLACEHOLDER_EXTENT);
        };

        let mut region = Self::from_bounds(bounds);
        if region.width() <= 0.0 {
            region.min_x -= PLACEHOLDER_EXTENT / 2.0;
            region.max_x += PLACEHOLDER_EXTENT / 2.0;
        }
        if region.height() <= 0.0 {
            region.min_y -= PLACEHOLDER_EXTENT / 2.0;
            region.max_y += PLACEHOLDER_EXTENT / 2.0;
        }
        region
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    fn mid_x(&self) -> f64 {
        self.min_x + self.width() / 2.0
    }

    #[inline]
    fn mid_y(&self) -> f64 {
        self.min_y + self.height() / 2.0
    }

    /// True if every edge is finite and the extent is strictly positive.
    pub fn has_area(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
            && self.max_x > self.min_x
            && self.max_y > self.min_y
    }

    /// Inclusive containment test on both axes.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// True if the two regions overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Region) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// The four quadrants, ordered SW, SE, NW, NE.
    ///
    /// Children meet at the split lines used by [`Region::quadrant_of`] and
    /// keep the parent's outer edges unchanged.
    pub fn quadrants(&self) -> [Region; 4] {
        let mid_x = self.mid_x();
        let mid_y = self.mid_y();
        [
            Region::from_corners(self.min_x, self.min_y, mid_x, mid_y),
            Region::from_corners(mid_x, self.min_y, self.max_x, mid_y),
            Region::from_corners(self.min_x, mid_y, mid_x, self.max_y),
            Region::from_corners(mid_x, mid_y, self.max_x, self.max_y),
        ]
    }

    /// Index into [`Region::quadrants`] for a point inside this region.
    ///
    /// A point on a split line resolves to the lower-indexed quadrant.
    #[inline]
    pub fn quadrant_of(&self, x: f64, y: f64) -> usize {
        let east = x > self.mid_x();
        let north = y > self.mid_y();
        (north as usize) * 2 + east as usize
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] → [{}, {}]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::LatLng;

    #[test]
    fn test_contains_is_inclusive() {
        let region = Region::new(0.0, 0.0, 3.0, 3.0);
        assert!(region.contains(0.0, 0.0));
        assert!(region.contains(3.0, 3.0));
        assert!(region.contains(1.5, 2.0));
        assert!(!region.contains(3.0001, 1.0));
        assert!(!region.contains(1.0, -0.0001));
    }

    #[test]
    fn test_contains_rejects_nan() {
        let region = Region::new(0.0, 0.0, 3.0, 3.0);
        assert!(!region.contains(f64::NAN, 1.0));
    }

    #[test]
    fn test_intersects_touching_edges() {
        let a = Region::new(0.0, 0.0, 5.0, 5.0);
        let b = Region::new(5.0, 5.0, 1.0, 1.0);
        let c = Region::new(5.1, 0.0, 1.0, 1.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_quadrants_cover_region() {
        let region = Region::new(0.0, 0.0, 10.0, 4.0);
        let [sw, se, nw, ne] = region.quadrants();
        assert_eq!(sw, Region::new(0.0, 0.0, 5.0, 2.0));
        assert_eq!(se, Region::new(5.0, 0.0, 5.0, 2.0));
        assert_eq!(nw, Region::new(0.0, 2.0, 5.0, 2.0));
        assert_eq!(ne, Region::new(5.0, 2.0, 5.0, 2.0));
    }

    #[test]
    fn test_quadrant_of_split_lines_go_low() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(region.quadrant_of(1.0, 1.0), 0);
        assert_eq!(region.quadrant_of(9.0, 1.0), 1);
        assert_eq!(region.quadrant_of(1.0, 9.0), 2);
        assert_eq!(region.quadrant_of(9.0, 9.0), 3);
        // Exactly on the split lines
        assert_eq!(region.quadrant_of(5.0, 5.0), 0);
        assert_eq!(region.quadrant_of(5.0, 9.0), 2);
        assert_eq!(region.quadrant_of(9.0, 5.0), 1);
    }

    #[test]
    fn test_quadrant_of_matches_containing_quadrant() {
        let region = Region::new(-3.0, 2.0, 8.0, 6.0);
        let quadrants = region.quadrants();
        for (x, y) in [(-3.0, 2.0), (1.0, 5.0), (4.9, 7.9), (5.0, 8.0), (0.0, 3.0)] {
            let q = region.quadrant_of(x, y);
            assert!(
                quadrants[q].contains(x, y),
                "({}, {}) not inside quadrant {}",
                x,
                y,
                q
            );
        }
    }

    #[test]
    fn test_placeholder_for_empty() {
        let region = Region::placeholder_for(None);
        assert_eq!(region, Region::new(0.0, 0.0, 0.1, 0.1));
        assert!(region.has_area());
    }

    #[test]
    fn test_placeholder_for_single_point() {
        let bounds = GeoBounds::from_location(LatLng::new(48.0, 16.0));
        let region = Region::placeholder_for(Some(&bounds));
        assert!(region.has_area());
        assert!(region.contains(16.0, 48.0));
        assert!((region.width() - PLACEHOLDER_EXTENT).abs() < 1e-12);
        assert!((region.height() - PLACEHOLDER_EXTENT).abs() < 1e-12);
    }

    #[test]
    fn test_placeholder_for_regular_bounds_is_exact() {
        let bounds = GeoBounds::from_corners(LatLng::new(1.0, 2.0), LatLng::new(5.0, 10.0));
        let region = Region::placeholder_for(Some(&bounds));
        assert_eq!(region, Region::new(2.0, 1.0, 8.0, 4.0));
    }

    #[test]
    fn test_from_bounds_keeps_exact_edges() {
        // west + (east - west) rounds below east for this pair
        let bounds =
            GeoBounds::from_corners(LatLng::new(0.0, -93.27559), LatLng::new(1.0, 12.94057));
        let region = Region::from_bounds(&bounds);

        assert_eq!(region.max_x, 12.94057);
        assert!(region.contains(12.94057, 1.0));
        assert!(region.contains(-93.27559, 0.0));
    }

    #[test]
    fn test_quadrants_share_parent_edges() {
        let region = Region::from_corners(-93.27559, 0.3, 12.94057, 47.123456);
        let [sw, se, nw, ne] = region.quadrants();

        assert_eq!(se.max_x, region.max_x);
        assert_eq!(ne.max_x, region.max_x);
        assert_eq!(nw.max_y, region.max_y);
        assert_eq!(ne.max_y, region.max_y);
        assert_eq!(sw.max_x, se.min_x);
        assert_eq!(sw.max_y, nw.min_y);

        // the far corner is routed to a quadrant that contains it
        let q = region.quadrant_of(region.max_x, region.max_y);
        assert!(region.quadrants()[q].contains(region.max_x, region.max_y));
    }

    #[test]
    fn test_has_area() {
        assert!(Region::new(0.0, 0.0, 1.0, 1.0).has_area());
        assert!(!Region::new(0.0, 0.0, 0.0, 1.0).has_area());
        assert!(!Region::new(0.0, 0.0, 1.0, -1.0).has_area());
        assert!(!Region::new(0.0, 0.0, f64::INFINITY, 1.0).has_area());
        assert!(!Region::from_corners(0.0, 0.0, 1.0, f64::NAN).has_area());
    }

    #[test]
    fn test_display() {
        let region = Region::new(0.0, 1.0, 2.0, 3.0);
        assert_eq!(format!("{}", region), "[0, 1] → [2, 4]");
    }
}
