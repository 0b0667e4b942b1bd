//! Exercise catalog domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::exercises_constants::{MUSCLE_GROUP_LEGS, MUSCLE_GROUP_PULL, MUSCLE_GROUP_PUSH};

/// Muscle category an exercise trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Legs,
    Push,
    Pull,
}

impl MuscleGroup {
    /// Groups in the order the exercise picker lists them.
    pub const ALL: [MuscleGroup; 3] = [MuscleGroup::Legs, MuscleGroup::Push, MuscleGroup::Pull];

    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Legs => MUSCLE_GROUP_LEGS,
            MuscleGroup::Push => MUSCLE_GROUP_PUSH,
            MuscleGroup::Pull => MUSCLE_GROUP_PULL,
        }
    }
}

impl FromStr for MuscleGroup {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            MUSCLE_GROUP_LEGS => Ok(MuscleGroup::Legs),
            MUSCLE_GROUP_PUSH => Ok(MuscleGroup::Push),
            MUSCLE_GROUP_PULL => Ok(MuscleGroup::Pull),
            _ => Err(format!("Unknown muscle group: {}", s)),
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing a catalog exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub muscle_group: MuscleGroup,
    pub rest_seconds: i32,
    /// Heaviest weight ever logged, unset until a workout containing the
    /// exercise has been ended.
    pub personal_best: Option<f64>,
}

/// Input model for inserting a catalog exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewExerciseTemplate {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub muscle_group: MuscleGroup,
    pub rest_seconds: i32,
}

impl NewExerciseTemplate {
    pub fn new(name: &str, description: &str, muscle_group: MuscleGroup, rest_seconds: i32) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            description: description.to_string(),
            muscle_group,
            rest_seconds,
        }
    }
}
