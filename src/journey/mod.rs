//! Journey module
//!
//! Pure building blocks for "get lost" journeys: a random destination
//! generator, a coordinate sanitizer and route distance accumulation,
//! plus the [`Journey`](journey_types::journey::Journey) state holder
//! that composes them.

#[macro_use]
pub mod macros;
pub mod journey_types;
pub mod journey_utils;

/// Errors raised when constructing a journey request
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum JourneyError {
    /// The requested travel distance was zero, negative, NaN or infinite
    InvalidDistance,
}

impl std::fmt::Display for JourneyError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            JourneyError::InvalidDistance => write!(f, "Invalid travel distance"),
        }
    }
}
