//! Stateless helper routines: distance math, coordinate sanitization
//! and random destination generation.

pub mod generator;
pub mod haversine;
pub mod sanitize;
