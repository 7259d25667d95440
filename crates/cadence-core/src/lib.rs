//! Core types shared by every Cadence crate: configuration, route constants,
//! the core error type, weekday numbering and wall-clock parsing.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
