//! Database models for workouts, their exercises and sets.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use gymtracker_core::workouts::{ExerciseSet, Workout, WorkoutExercise};

/// Database model for workouts
#[derive(
    Insertable,
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::workouts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDB {
    pub id: String,
    pub started_at: NaiveDateTime,
    pub ended_at: Option<NaiveDateTime>,
}

/// Database model for an exercise performed within a workout
#[derive(
    Insertable,
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(WorkoutDB, foreign_key = workout_id))]
#[diesel(table_name = crate::schema::workout_exercises)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExerciseDB {
    pub id: String,
    pub workout_id: String,
    pub template_id: String,
    pub position: i32,
}

/// Database model for a logged set
#[derive(
    Insertable,
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(WorkoutExerciseDB, foreign_key = workout_exercise_id))]
#[diesel(table_name = crate::schema::exercise_sets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSetDB {
    pub id: String,
    pub workout_exercise_id: String,
    pub position: i32,
    pub reps: i32,
    pub weight: f64,
    pub completed: bool,
}

impl WorkoutDB {
    /// Builds the domain workout from its row and already ordered exercises.
    pub fn into_domain(self, exercises: Vec<WorkoutExercise>) -> Workout {
        Workout {
            id: self.id,
            started_at: self.started_at,
            ended_at: self.ended_at,
            exercises,
        }
    }
}

impl WorkoutExerciseDB {
    pub fn into_domain(self, sets: Vec<ExerciseSet>) -> WorkoutExercise {
        WorkoutExercise {
            id: self.id,
            workout_id: self.workout_id,
            template_id: self.template_id,
            position: self.position,
            sets,
        }
    }
}

impl From<&Workout> for WorkoutDB {
    fn from(domain: &Workout) -> Self {
        Self {
            id: domain.id.clone(),
            started_at: domain.started_at,
            ended_at: domain.ended_at,
        }
    }
}

impl From<&WorkoutExercise> for WorkoutExerciseDB {
    fn from(domain: &WorkoutExercise) -> Self {
        Self {
            id: domain.id.clone(),
            workout_id: domain.workout_id.clone(),
            template_id: domain.template_id.clone(),
            position: domain.position,
        }
    }
}

impl From<ExerciseSetDB> for ExerciseSet {
    fn from(db: ExerciseSetDB) -> Self {
        Self {
            id: db.id,
            workout_exercise_id: db.workout_exercise_id,
            position: db.position,
            reps: db.reps,
            weight: db.weight,
            completed: db.completed,
        }
    }
}

impl From<&ExerciseSet> for ExerciseSetDB {
    fn from(domain: &ExerciseSet) -> Self {
        Self {
            id: domain.id.clone(),
            workout_exercise_id: domain.workout_exercise_id.clone(),
            position: domain.position,
            reps: domain.reps,
            weight: domain.weight,
            completed: domain.completed,
        }
    }
}
