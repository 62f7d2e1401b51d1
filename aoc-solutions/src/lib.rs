//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year. Each one exposes its core computation as
//! plain functions over input lines and registers a solver wrapper through
//! the `AutoRegisterSolver` derive.

pub mod malformed;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;

pub use malformed::{MalformedLineError, MalformedLinePolicy, MalformedReason};
