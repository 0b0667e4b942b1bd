use crate::errors::Result;
use crate::stats::{LiveSessionStats, WorkoutSummary};
use crate::workouts::workouts_model::{
    ExerciseSet, NewExerciseSet, PersonalBestUpdate, Workout, WorkoutExercise,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Trait for workout repository operations
#[async_trait]
pub trait WorkoutRepositoryTrait: Send + Sync {
    /// Loads every workout newest first, exercises and sets in logged order.
    fn load_workouts(&self) -> Result<Vec<Workout>>;
    fn get_workout(&self, workout_id: &str) -> Result<Workout>;
    async fn insert_workout(&self, workout: Workout) -> Result<Workout>;
    /// Stores a set, creating its workout exercise first when `new_exercise`
    /// is given. Both rows are written in one transaction.
    async fn save_set(
        &self,
        new_exercise: Option<WorkoutExercise>,
        set: ExerciseSet,
    ) -> Result<ExerciseSet>;
    /// Marks a workout as ended and stores the personal bests it raised, in
    /// one transaction.
    async fn close_workout(
        &self,
        workout_id: String,
        ended_at: NaiveDateTime,
        personal_bests: Vec<PersonalBestUpdate>,
    ) -> Result<()>;
    /// Deletes a workout together with its exercises and sets.
    async fn delete_workout(&self, workout_id: String) -> Result<usize>;
}

/// Trait for session ledger operations
#[async_trait]
pub trait SessionServiceTrait: Send + Sync {
    async fn initialize(&self) -> Result<()>;
    async fn start_session(&self, now: NaiveDateTime) -> Result<Workout>;
    async fn record_set(&self, new_set: NewExerciseSet) -> Result<ExerciseSet>;
    async fn end_session(&self, now: NaiveDateTime) -> Result<Option<Workout>>;
    async fn active_workout(&self) -> Option<Workout>;
    async fn active_summary(&self) -> Option<WorkoutSummary>;
    async fn live_exercise_stats(&self, template_id: &str) -> Option<LiveSessionStats>;
    async fn delete_workout(&self, workout_id: &str) -> Result<usize>;
}
