//! Value types shared across the journey module.

pub mod distance;
pub mod journey;
pub mod location;
pub mod route;
