//! SQLite storage implementation for Gym Tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `gymtracker-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for the exercise catalog and the workout ledger
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod exercises;
pub mod workouts;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export repositories
pub use exercises::ExerciseTemplateRepository;
pub use workouts::WorkoutRepository;

// Re-export from gymtracker-core for convenience
pub use gymtracker_core::errors::{DatabaseError, Error, Result};
