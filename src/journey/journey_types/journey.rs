//! Struct definitions and implementations for [`Journey`].

use crate::journey::journey_types::location::Location;
use crate::journey::journey_types::route::Route;
use serde::{Deserialize, Serialize};

/// A journey from a start location towards a generated destination.
///
/// Owns the recorded [`Route`] and the current position. The journey is
/// the one stateful type in this crate; whoever receives location
/// updates should be its single writer.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Journey {
    start: Location,
    destination: Location,
    current: Location,
    route: Route,
}

impl Journey {
    /// Start a new journey at `start`, heading for `destination`.
    pub fn new(start: Location, destination: Location) -> Self {
        journey_info!(
            "(new) journey from {:?} towards {:?}.",
            start,
            destination
        );
        let mut route = Route::new();
        route.push(start);
        Journey {
            start,
            destination,
            current: start,
            route,
        }
    }

    /// Where the journey began.
    pub fn start(&self) -> &Location {
        &self.start
    }

    /// Where the journey is headed.
    pub fn destination(&self) -> &Location {
        &self.destination
    }

    /// The most recently recorded position.
    pub fn current(&self) -> &Location {
        &self.current
    }

    /// The recorded route so far.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Record a new position: updates the current position and appends
    /// it to the route.
    pub fn record_position(&mut self, position: Location) {
        journey_debug!("(record_position) {:?}.", position);
        self.current = position;
        self.route.push(position);
    }

    /// Total distance traveled along the recorded route, in meters.
    pub fn distance_traveled_meters(&self) -> f64 {
        self.route.total_distance_meters()
    }

    /// Great-circle distance from the current position to the
    /// destination, in meters.
    pub fn distance_to_destination_meters(&self) -> f64 {
        self.current.distance_meters_to(&self.destination)
    }
}
