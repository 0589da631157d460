//! Random destination generation.
//!
//! Produces a destination coordinate at roughly the requested distance
//! from an origin, in a random direction. The travel distance is split
//! over the north-south and east-west axes with a Pythagorean triangle
//! and the metre offsets converted to degree deltas around the origin.
//! This is a flat-earth approximation; it drifts for large distances
//! but is good enough for the purpose of getting lost.

use crate::journey::journey_types::distance::DistanceRequest;
use crate::journey::journey_types::location::Location;
use crate::journey::journey_utils::sanitize;
use rand::Rng;

//-----------------------------------------------------
// Constants
//-----------------------------------------------------
/// WGS84 equatorial earth radius in meters, used to convert metre
/// offsets into degree deltas.
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Permitted deviation of the sampled travel distance from the
/// requested one, in percent.
pub const DISTANCE_DEVIATION_PERCENT: f64 = 30.0;

/// Generate a random destination roughly `request` away from `origin`.
///
/// # Arguments
/// * `rng` - The random number generator.
/// * `request` - The approximate travel distance (+/- 30%).
/// * `origin` - The start location of the journey.
///
/// # Returns
/// A sanitized location in a random direction from the origin, at a
/// distance within +/- 30% of the requested one.
///
/// # Notes
/// The direction draw covers one quadrant; two independent sign flips
/// on the axis deltas spread destinations over all four quadrants
/// around the origin. Origins at the poles get very large longitude
/// swings from the `cos(latitude)` denominator; that is accepted
/// degenerate behavior of the approximation, not an error.
pub fn random_destination<R: Rng>(
    rng: &mut R,
    request: &DistanceRequest,
    origin: &Location,
) -> Location {
    let travel_meters = random_travel_meters(rng, request.meters());
    let direction_degrees = random_direction_degrees(rng);

    let (north_south_meters, east_west_meters) = axis_offsets(direction_degrees, travel_meters);

    let delta_lat = (north_south_meters / EARTH_RADIUS_METERS).to_degrees();
    let delta_lng = (east_west_meters / EARTH_RADIUS_METERS).to_degrees()
        / origin.latitude.into_inner().to_radians().cos();

    // decide whether to move up or down the map
    let latitude = if rng.gen_bool(0.5) {
        origin.latitude.into_inner() + delta_lat
    } else {
        origin.latitude.into_inner() - delta_lat
    };
    let longitude = if rng.gen_bool(0.5) {
        origin.longitude.into_inner() + delta_lng
    } else {
        origin.longitude.into_inner() - delta_lng
    };

    let destination = sanitize::sanitize(latitude, longitude);
    journey_debug!(
        "(random_destination) {:?} + [{:.1} m @ {:.1} deg] -> {:?}.",
        origin,
        travel_meters,
        direction_degrees,
        destination
    );
    destination
}

/// Sample a travel distance within +/- 30% of the requested one.
///
/// # Arguments
/// * `rng` - The random number generator.
/// * `approx_meters` - The overall distance the user wants to travel.
///
/// # Returns
/// A distance in meters, uniform over `[0.7 * d, 1.3 * d]`.
pub fn random_travel_meters<R: Rng>(rng: &mut R, approx_meters: f64) -> f64 {
    let delta = (approx_meters / 100.0) * DISTANCE_DEVIATION_PERCENT;
    rng.gen_range((approx_meters - delta)..=(approx_meters + delta))
}

/// Sample a direction angle, uniform over `[0, 90)` degrees.
pub fn random_direction_degrees<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..90.0)
}

/// Split a travel distance over the north-south and east-west axes.
///
/// An angle of 0 sends the whole distance north-south, 90 sends it
/// east-west; anything between forms a Pythagorean triangle with the
/// travel distance as the hypotenuse. The angle is in degrees and is
/// converted to radians before the trig call.
pub fn axis_offsets(direction_degrees: f64, travel_meters: f64) -> (f64, f64) {
    if direction_degrees == 0.0 {
        (travel_meters, 0.0)
    } else if direction_degrees == 90.0 {
        (0.0, travel_meters)
    } else {
        let north_south = direction_degrees.to_radians().sin() * travel_meters;
        let east_west = (travel_meters.powi(2) - north_south.powi(2)).sqrt();
        (north_south, east_west)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_travel_meters_within_deviation() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let mut approx = 1000.0;
            while approx < 50000.0 {
                let sampled = random_travel_meters(&mut rng, approx);
                let lowest = approx - ((approx / 100.0) * 30.0);
                let highest = approx + ((approx / 100.0) * 30.0);
                assert!(
                    (lowest..=highest).contains(&sampled),
                    "sampled {} outside [{}, {}]",
                    sampled,
                    lowest,
                    highest
                );
                approx += 1000.0;
            }
        }
    }

    #[test]
    fn test_direction_range_and_spread() {
        let mut rng = rand::thread_rng();
        let mut near_zero = false;
        let mut near_ninety = false;

        for _ in 0..10000 {
            let direction = random_direction_degrees(&mut rng);
            assert!((0.0..90.0).contains(&direction));
            if direction < 1.0 {
                near_zero = true;
            }
            if direction > 89.0 {
                near_ninety = true;
            }
        }
        assert!(near_zero);
        assert!(near_ninety);
    }

    #[test]
    fn test_axis_offsets_axis_aligned() {
        assert_eq!(axis_offsets(0.0, 500.0), (500.0, 0.0));
        assert_eq!(axis_offsets(90.0, 500.0), (0.0, 500.0));
    }

    #[test]
    fn test_axis_offsets_form_a_right_triangle() {
        let (north_south, east_west) = axis_offsets(30.0, 1000.0);
        assert!(north_south > 0.0);
        assert!(east_west > 0.0);
        let hypotenuse = (north_south.powi(2) + east_west.powi(2)).sqrt();
        assert!((hypotenuse - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_destination_always_in_valid_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let request = DistanceRequest::from_kilometers(25.0).unwrap();
        let origins = [
            Location::new(0.0, 0.0),
            Location::new(51.5074, -0.1278),
            Location::new(89.9, 179.9),
            Location::new(-89.9, -179.9),
        ];

        for origin in &origins {
            for _ in 0..1000 {
                let destination = random_destination(&mut rng, &request, origin);
                assert!(
                    destination.is_valid(),
                    "invalid destination {:?} from origin {:?}",
                    destination,
                    origin
                );
            }
        }
    }

    #[test]
    fn test_destination_distance_near_requested_at_equator() {
        // the flat-earth approximation is near-exact at the equator, so
        // the measured distance should stay close to the sampled range
        let mut rng = StdRng::seed_from_u64(7);
        let origin = Location::new(0.0, 0.0);
        let request = DistanceRequest::from_kilometers(5.0).unwrap();

        for _ in 0..1000 {
            let destination = random_destination(&mut rng, &request, &origin);
            let measured = origin.distance_meters_to(&destination);
            assert!(
                (3250.0..=6750.0).contains(&measured),
                "measured {} m for a 5 km request",
                measured
            );
        }
    }

    #[test]
    fn test_same_seed_same_destination() {
        let origin = Location::new(48.8566, 2.3522);
        let request = DistanceRequest::from_meters(3000.0).unwrap();

        let mut first = StdRng::seed_from_u64(1234);
        let mut second = StdRng::seed_from_u64(1234);
        assert_eq!(
            random_destination(&mut first, &request, &origin),
            random_destination(&mut second, &request, &origin)
        );
    }
}
