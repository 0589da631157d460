//! Struct definitions and implementations for [`Route`].

use crate::journey::journey_types::location::Location;
use crate::journey::journey_utils::haversine;
use serde::{Deserialize, Serialize};

/// An ordered, append-only sequence of recorded positions.
///
/// The route only records positions; the writer (whoever receives
/// location updates) owns it and appends, readers take the totals.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    points: Vec<Location>,
}

impl Route {
    /// Create an empty route.
    pub fn new() -> Self {
        Route { points: Vec::new() }
    }

    /// Append a recorded position to the end of the route.
    pub fn push(&mut self, point: Location) {
        self.points.push(point);
    }

    /// The recorded positions, oldest first.
    pub fn points(&self) -> &[Location] {
        &self.points
    }

    /// Number of recorded positions.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no positions have been recorded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total distance walked along the route in meters: the sum of the
    /// great-circle distance over every consecutive pair of recorded
    /// positions. Routes with fewer than two positions have walked
    /// nowhere yet and total 0.
    pub fn total_distance_meters(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| haversine::distance(&pair[0], &pair[1]))
            .sum()
    }
}
