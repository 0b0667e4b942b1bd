use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use super::stats_model::{HistoryEntry, WorkoutStats};
use crate::workouts::Workout;

/// Trait for statistics read operations.
///
/// Reads never fail: when workouts cannot be loaded the statistics are
/// computed over an empty collection.
pub trait StatsServiceTrait: Send + Sync {
    fn get_workouts(&self) -> Vec<Workout>;
    fn get_workout_stats(&self, now: NaiveDateTime) -> WorkoutStats;
    fn get_exercise_history(&self, template_id: &str, limit: usize) -> Vec<HistoryEntry>;
    fn get_workout_days(&self, year: i32, month: u32) -> BTreeSet<u32>;
}
