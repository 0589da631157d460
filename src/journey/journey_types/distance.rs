//! Struct definitions and implementations for [`DistanceRequest`].

use crate::journey::JourneyError;
use serde::{Deserialize, Serialize};

/// Conversion factor applied when a travel distance is given in
/// kilometers. The crate works in meters everywhere else.
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// A validated approximate travel distance for a journey.
///
/// Canonical unit is meters. Construction is the only place a distance
/// can fail validation; once a `DistanceRequest` exists it is known to
/// be finite and positive, so the generator taking it never fails.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct DistanceRequest {
    meters: f64,
}

impl DistanceRequest {
    /// Create a request from a distance in meters.
    ///
    /// # Errors
    /// [`JourneyError::InvalidDistance`] if the value is zero, negative,
    /// NaN or infinite.
    pub fn from_meters(meters: f64) -> Result<Self, JourneyError> {
        if !meters.is_finite() || meters <= 0.0 {
            journey_warn!("(from_meters) rejected distance [{}].", meters);
            return Err(JourneyError::InvalidDistance);
        }
        Ok(DistanceRequest { meters })
    }

    /// Create a request from a distance in kilometers.
    ///
    /// The value is converted with [`METERS_PER_KILOMETER`] before
    /// validation; this is the one unit conversion at the API boundary.
    ///
    /// # Errors
    /// [`JourneyError::InvalidDistance`] if the value is zero, negative,
    /// NaN or infinite.
    pub fn from_kilometers(kilometers: f64) -> Result<Self, JourneyError> {
        Self::from_meters(kilometers * METERS_PER_KILOMETER)
    }

    /// The requested distance in meters.
    pub fn meters(&self) -> f64 {
        self.meters
    }
}
