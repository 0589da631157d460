//! Normalization of out-of-range coordinates back into valid
//! geographic bounds.
//!
//! Offset math around the poles or the antimeridian can push a raw
//! latitude or longitude outside its valid range. Latitude "bounces"
//! at the poles (walking past the north pole puts you on the other
//! side, heading south), while longitude "wraps" at the antimeridian.
//!
//! Latitude goes from 90 to -90, and then from -90 to 90.
//! Longitude goes from 0 to 180, then -180 to 0.

use crate::journey::journey_types::location::Location;

/// Normalize a raw latitude/longitude pair into a valid [`Location`].
///
/// Total function: in-range values pass through unchanged, out-of-range
/// values are reflected (latitude) or wrapped (longitude). Non-finite
/// input is returned as-is; it has no meaningful position on the globe.
pub fn sanitize(latitude: f64, longitude: f64) -> Location {
    Location::new(fold_latitude(latitude), wrap_longitude(longitude))
}

/// Reflect an out-of-range latitude back into [-90, 90].
///
/// Values that overshoot by more than half a revolution are first
/// reduced modulo 360 so a single reflection suffices.
pub fn fold_latitude(mut latitude: f64) -> f64 {
    if !latitude.is_finite() {
        journey_warn!("(fold_latitude) non-finite latitude [{}].", latitude);
        return latitude;
    }

    if latitude.abs() > 270.0 {
        // lands in [-90, 270), one reflection away from valid
        latitude = (latitude + 90.0).rem_euclid(360.0) - 90.0;
    }

    if latitude > 90.0 {
        let overshoot = latitude - 90.0;
        latitude = 90.0 - overshoot;
    } else if latitude < -90.0 {
        let overshoot = -(latitude + 90.0);
        latitude = -(90.0 - overshoot);
    }

    latitude
}

/// Wrap an out-of-range longitude back into [-180, 180].
///
/// Values that overshoot by more than a full revolution are first
/// reduced modulo 360 so a single wrap suffices.
pub fn wrap_longitude(mut longitude: f64) -> f64 {
    if !longitude.is_finite() {
        journey_warn!("(wrap_longitude) non-finite longitude [{}].", longitude);
        return longitude;
    }

    if longitude.abs() > 540.0 {
        // lands in [-180, 180), already valid
        longitude = (longitude + 180.0).rem_euclid(360.0) - 180.0;
    }

    if longitude > 180.0 {
        let overshoot = longitude - 180.0;
        longitude = -(180.0 - overshoot);
    } else if longitude < -180.0 {
        let overshoot = -(longitude + 180.0);
        longitude = 180.0 - overshoot;
    }

    longitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_in_range_is_identity() {
        assert_eq!(sanitize(0.0, 0.0), Location::new(0.0, 0.0));
        assert_eq!(sanitize(0.0, 25.0), Location::new(0.0, 25.0));
        assert_eq!(sanitize(-25.0, 0.0), Location::new(-25.0, 0.0));
        assert_eq!(sanitize(45.0, -45.0), Location::new(45.0, -45.0));
        assert_eq!(sanitize(90.0, 180.0), Location::new(90.0, 180.0));
        assert_eq!(sanitize(-90.0, -180.0), Location::new(-90.0, -180.0));
        assert_eq!(sanitize(-0.25, -0.35), Location::new(-0.25, -0.35));
    }

    #[test]
    fn test_sanitize_out_of_range() {
        assert_eq!(sanitize(92.0, 180.5), Location::new(88.0, -179.5));
        assert_eq!(sanitize(-90.75, -180.5), Location::new(-89.25, 179.5));
        assert_eq!(sanitize(-90.15, -180.5), Location::new(-89.85, 179.5));
    }

    #[test]
    fn test_fold_latitude_large_overshoot() {
        // 360 degrees is a full revolution, back where we started
        assert_eq!(fold_latitude(45.0 + 360.0), 45.0);
        assert_eq!(fold_latitude(-45.0 - 360.0), -45.0);
        // half a revolution past the pole
        assert_eq!(fold_latitude(271.0), -89.0);
    }

    #[test]
    fn test_wrap_longitude_large_overshoot() {
        assert_eq!(wrap_longitude(90.0 + 360.0), 90.0);
        assert_eq!(wrap_longitude(-90.0 - 360.0), -90.0);
        assert_eq!(wrap_longitude(541.0), -179.0);
    }

    #[test]
    fn test_sanitize_always_valid_for_finite_input() {
        let mut value = -1000.0;
        while value <= 1000.0 {
            let location = sanitize(value, value);
            assert!(
                location.is_valid(),
                "sanitize({}) produced {:?}",
                value,
                location
            );
            value += 0.37;
        }
    }
}
