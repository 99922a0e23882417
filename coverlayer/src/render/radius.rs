//! Meter to pixel radius conversion.
//!
//! A radius in meters is converted to degrees of latitude along a meridian,
//! widened to degrees of longitude at the reference latitude, and measured as
//! a horizontal pixel distance in the zoom level's projected space.

use crate::coord::{LatLng, Projection, MAX_LAT, MIN_LAT};

/// Equatorial circumference of the Earth in meters.
pub const EARTH_CIRCUMFERENCE_METERS: f64 = 40_075_017.0;

/// Smallest radius a circle is ever drawn with.
pub const MIN_PIXEL_RADIUS: u32 = 1;

/// Convert a radius in meters to whole pixels at `zoom`, measured at `reference`.
///
/// The reference latitude is clamped to the Web Mercator range before the
/// cosine, so references at or beyond the poles still yield a finite radius.
/// The result is rounded half away from zero and never below
/// [`MIN_PIXEL_RADIUS`].
///
/// # Example
///
/// ```
/// use coverlayer::coord::{LatLng, WebMercator};
/// use coverlayer::render::meters_to_pixel_radius;
///
/// let projection = WebMercator::default();
/// let px = meters_to_pixel_radius(80.0, LatLng::new(48.21033, 16.3614), 15, &projection);
/// assert_eq!(px, 25);
/// ```
pub fn meters_to_pixel_radius(
    radius_m: f64,
    reference: LatLng,
    zoom: u8,
    projection: &dyn Projection,
) -> u32 {
    let lat = reference.lat.clamp(MIN_LAT, MAX_LAT);

    let lat_degrees = radius_m / EARTH_CIRCUMFERENCE_METERS * 360.0;
    let lng_degrees = lat_degrees / lat.to_radians().cos();

    let center = projection.project(reference, zoom);
    let shifted = projection.project(LatLng::new(reference.lat, reference.lng - lng_degrees), zoom);

    let pixels = (center.x - shifted.x).abs().round();
    if pixels.is_finite() && pixels >= MIN_PIXEL_RADIUS as f64 {
        pixels.min(u32::MAX as f64) as u32
    } else {
        MIN_PIXEL_RADIUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::WebMercator;

    #[test]
    fn test_known_radius() {
        let projection = WebMercator::default();
        let px = meters_to_pixel_radius(80.0, LatLng::new(48.21033, 16.3614), 15, &projection);
        assert_eq!(px, 25);
    }

    #[test]
    fn test_zooming_out_never_grows_radius() {
        let projection = WebMercator::default();
        let reference = LatLng::new(48.0, 11.0);

        let radii: Vec<u32> = (6..=18)
            .rev()
            .map(|zoom| meters_to_pixel_radius(5000.0, reference, zoom, &projection))
            .collect();

        for pair in radii.windows(2) {
            assert!(pair[1] <= pair[0], "radii not monotonic: {:?}", radii);
        }
        assert!(radii[0] > radii[radii.len() - 1]);
    }

    #[test]
    fn test_radius_doubles_per_zoom_level() {
        let projection = WebMercator::default();
        let reference = LatLng::new(0.0, 0.0);
        let z10 = meters_to_pixel_radius(10_000.0, reference, 10, &projection);
        let z11 = meters_to_pixel_radius(10_000.0, reference, 11, &projection);
        assert!((z11 as i64 - 2 * z10 as i64).abs() <= 1);
    }

    #[test]
    fn test_polar_reference_is_finite() {
        let projection = WebMercator::default();
        for lat in [90.0, -90.0, 89.9, MAX_LAT] {
            let px = meters_to_pixel_radius(1000.0, LatLng::new(lat, 0.0), 10, &projection);
            assert!(px >= MIN_PIXEL_RADIUS);
            assert!(px < 100_000);
        }
    }

    #[test]
    fn test_tiny_radius_floors_to_one() {
        let projection = WebMercator::default();
        assert_eq!(
            meters_to_pixel_radius(1.0, LatLng::new(48.0, 11.0), 0, &projection),
            1
        );
        assert_eq!(
            meters_to_pixel_radius(0.0, LatLng::new(48.0, 11.0), 18, &projection),
            1
        );
    }
}
