//! Shared domain types for the Freezo inventory backend.
//!
//! Pure code only: id/timestamp aliases, the domain error enum, environment
//! parsing helpers and input validation. No I/O lives here.

pub mod config;
pub mod error;
pub mod types;
pub mod validation;
