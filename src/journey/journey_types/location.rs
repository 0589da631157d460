//! Struct definitions and implementations for [`Location`].
//!
//! A `Location` is a plain (latitude, longitude) pair; altitude is not
//! tracked since journeys are walked on the ground.

use crate::journey::journey_utils::haversine;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Location`] represents a geographic position in degrees.
///
/// Values are stored as [`OrderedFloat`] doubles so locations can be
/// compared, hashed and serialized. A freshly constructed `Location`
/// may carry out-of-range values (e.g. an offset pushed past a pole);
/// pass it through
/// [`sanitize`](crate::journey::journey_utils::sanitize::sanitize)
/// before handing it to anything that expects valid coordinates.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct Location {
    /// The latitude of the location in degrees.
    pub latitude: OrderedFloat<f64>,

    /// The longitude of the location in degrees.
    pub longitude: OrderedFloat<f64>,
}

impl Location {
    /// Create a location from raw degree values.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Returns `true` if both coordinates are within valid geographic
    /// bounds: latitude in [-90, 90], longitude in [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude.into_inner())
            && (-180.0..=180.0).contains(&self.longitude.into_inner())
    }

    /// Returns the great-circle distance to another location in meters,
    /// using the Haversine formula.
    pub fn distance_meters_to(&self, other: &Location) -> f64 {
        haversine::distance(self, other)
    }
}
