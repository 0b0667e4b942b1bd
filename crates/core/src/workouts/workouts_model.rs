//! Workout ledger domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};

/// One logged block of repetitions at a given weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
    pub id: String,
    pub workout_exercise_id: String,
    pub position: i32,
    pub reps: i32,
    /// Weight in pounds.
    pub weight: f64,
    pub completed: bool,
}

impl ExerciseSet {
    pub fn new(workout_exercise_id: &str, position: i32, reps: i32, weight: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            workout_exercise_id: workout_exercise_id.to_string(),
            position,
            reps,
            weight,
            completed: true,
        }
    }

    /// Volume contributed by this set (weight x reps).
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// Input model for logging a set against a catalog exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewExerciseSet {
    pub template_id: String,
    pub reps: i32,
    pub weight: f64,
}

impl NewExerciseSet {
    pub fn validate(&self) -> Result<()> {
        if self.template_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "templateId".to_string(),
            )));
        }
        if self.reps < 1 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Reps must be at least 1".to_string(),
            )));
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Weight must be a non-negative number".to_string(),
            )));
        }
        Ok(())
    }
}

/// The occurrence of one catalog exercise within one workout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub id: String,
    pub workout_id: String,
    pub template_id: String,
    pub position: i32,
    pub sets: Vec<ExerciseSet>,
}

impl WorkoutExercise {
    pub fn new(workout_id: &str, template_id: &str, position: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            workout_id: workout_id.to_string(),
            template_id: template_id.to_string(),
            position,
            sets: Vec::new(),
        }
    }

    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    pub fn total_reps(&self) -> i64 {
        self.sets.iter().map(|s| i64::from(s.reps)).sum()
    }

    /// Heaviest weight among the logged sets, 0 when nothing was logged.
    pub fn max_weight(&self) -> f64 {
        self.sets.iter().map(|s| s.weight).fold(0.0, f64::max)
    }
}

/// One training session and the exercises performed in it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub started_at: NaiveDateTime,
    pub ended_at: Option<NaiveDateTime>,
    /// Ordered by the moment each exercise was first logged.
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    pub fn new(started_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started_at,
            ended_at: None,
            exercises: Vec::new(),
        }
    }

    /// Display title such as "Monday Workout".
    pub fn title(&self) -> String {
        self.started_at.format("%A Workout").to_string()
    }

    pub fn is_closed(&self) -> bool {
        self.ended_at.is_some()
    }

    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    pub fn exercise_for_template(&self, template_id: &str) -> Option<&WorkoutExercise> {
        self.exercises.iter().find(|e| e.template_id == template_id)
    }

    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(WorkoutExercise::set_count).sum()
    }

    pub fn total_reps(&self) -> i64 {
        self.exercises.iter().map(WorkoutExercise::total_reps).sum()
    }

    /// Training volume: sum of weight x reps over every set.
    pub fn total_weight(&self) -> f64 {
        self.exercises
            .iter()
            .flat_map(|e| e.sets.iter())
            .map(ExerciseSet::volume)
            .sum()
    }
}

/// A template's personal best raised by a finished workout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalBestUpdate {
    pub template_id: String,
    pub previous: Option<f64>,
    pub personal_best: f64,
}
