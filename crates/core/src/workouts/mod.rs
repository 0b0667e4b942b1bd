//! Workouts module - session ledger, personal bests, models, and traits.

mod personal_best;
mod session_service;
mod workouts_errors;
mod workouts_model;
mod workouts_traits;

pub use personal_best::personal_best_updates;
pub use session_service::{SessionService, SessionState};
pub use workouts_errors::SessionError;
pub use workouts_model::{
    ExerciseSet, NewExerciseSet, PersonalBestUpdate, Workout, WorkoutExercise,
};
pub use workouts_traits::{SessionServiceTrait, WorkoutRepositoryTrait};
