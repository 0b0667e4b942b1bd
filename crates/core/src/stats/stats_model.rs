//! Statistics read models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Headline numbers shown under the calendar.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStats {
    /// Workouts started within the last week (a count, not a rate).
    pub workouts_per_week: usize,
    /// Workouts started within the last calendar month.
    pub workouts_this_month: usize,
    /// Truncated average exercise count over all workouts ever logged.
    pub exercises_per_workout: usize,
    /// Exercises performed in workouts of the last calendar month.
    pub exercises_this_month: usize,
}

/// Running totals for one exercise of the active workout.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LiveSessionStats {
    pub sets: usize,
    pub reps: i64,
    /// Sum of per-set volumes, each truncated to whole pounds.
    pub lbs: i64,
}

/// Totals for a whole workout.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    pub exercises: usize,
    pub sets: usize,
    pub reps: i64,
    pub total_weight: f64,
}

/// One line of an exercise's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub workout_id: String,
    pub started_at: NaiveDateTime,
    /// Compact description such as "3 x 8-10 x 135 lbs".
    pub summary: String,
}
