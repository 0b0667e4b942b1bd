//! SQLite storage implementation for the workout ledger.

mod model;
mod repository;

pub use model::{ExerciseSetDB, WorkoutDB, WorkoutExerciseDB};
pub use repository::WorkoutRepository;
