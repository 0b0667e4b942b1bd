//! Exercises module - catalog models, seeding service, and traits.

mod exercises_catalog;
mod exercises_constants;
mod exercises_model;
mod exercises_service;
mod exercises_traits;

pub use exercises_catalog::{default_catalog, DEFAULT_CATALOG_SIZE};
pub use exercises_constants::*;
pub use exercises_model::{ExerciseTemplate, MuscleGroup, NewExerciseTemplate};
pub use exercises_service::ExerciseService;
pub use exercises_traits::{ExerciseServiceTrait, ExerciseTemplateRepositoryTrait};
