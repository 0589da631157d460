//! Implementation of the Haversine formula for calculating the distance
//! between two points on a sphere.
//!
//! See [Wikipedia](https://en.wikipedia.org/wiki/Haversine_formula) for
//! more.
//!
//! **Distance is returned in meters**.

use crate::journey::journey_types::location::Location;

/// Mean earth radius in meters, used for great-circle distances.
const EARTH_RADIUS_MEAN_METERS: f64 = 6_371_000.0;

/// Calculate the distance between two points on a sphere.
///
/// # Notes
/// The formula does ***not*** take altitude into account; journeys are
/// measured along the ground.
pub fn distance(start: &Location, end: &Location) -> f64 {
    let d_lat: f64 = (end.latitude.into_inner() - start.latitude.into_inner()).to_radians();
    let d_lon: f64 = (end.longitude.into_inner() - start.longitude.into_inner()).to_radians();
    let lat1: f64 = (start.latitude.into_inner()).to_radians();
    let lat2: f64 = (end.latitude.into_inner()).to_radians();

    let a: f64 = ((d_lat / 2.0).sin()) * ((d_lat / 2.0).sin())
        + ((d_lon / 2.0).sin()) * ((d_lon / 2.0).sin()) * (lat1.cos()) * (lat2.cos());
    let c: f64 = 2.0 * ((a.sqrt()).atan2((1.0 - a).sqrt()));

    EARTH_RADIUS_MEAN_METERS * c
}
