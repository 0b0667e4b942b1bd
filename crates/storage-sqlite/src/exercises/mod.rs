//! SQLite storage implementation for the exercise catalog.

mod model;
mod repository;

pub use model::{ExerciseTemplateDB, NewExerciseTemplateDB};
pub use repository::ExerciseTemplateRepository;
