//! Gym Tracker Core - Domain entities, services, and traits.
//!
//! This crate contains the workout ledger, the exercise catalog and the
//! statistics derived from logged workouts. It is database-agnostic and
//! defines traits that are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod exercises;
pub mod stats;
pub mod workouts;

#[cfg(test)]
mod testing;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
