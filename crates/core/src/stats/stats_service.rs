use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDateTime;
use log::warn;

use super::stats_calculator::{
    exercise_history, format_history_entry, workout_days_in_month, workout_stats,
};
use super::stats_model::{HistoryEntry, WorkoutStats};
use super::stats_traits::StatsServiceTrait;
use crate::workouts::{Workout, WorkoutRepositoryTrait};

/// Service computing statistics from stored workouts.
pub struct StatsService {
    workout_repository: Arc<dyn WorkoutRepositoryTrait>,
}

impl StatsService {
    pub fn new(workout_repository: Arc<dyn WorkoutRepositoryTrait>) -> Self {
        StatsService { workout_repository }
    }

    fn load_workouts(&self) -> Vec<Workout> {
        self.workout_repository.load_workouts().unwrap_or_else(|e| {
            warn!("Failed to load workouts, using an empty history: {}", e);
            Vec::new()
        })
    }
}

impl StatsServiceTrait for StatsService {
    fn get_workouts(&self) -> Vec<Workout> {
        self.load_workouts()
    }

    fn get_workout_stats(&self, now: NaiveDateTime) -> WorkoutStats {
        workout_stats(&self.load_workouts(), now)
    }

    fn get_exercise_history(&self, template_id: &str, limit: usize) -> Vec<HistoryEntry> {
        let workouts = self.load_workouts();
        exercise_history(&workouts, template_id, limit)
            .filter_map(|exercise| {
                let workout = workouts.iter().find(|w| w.id == exercise.workout_id)?;
                Some(HistoryEntry {
                    workout_id: workout.id.clone(),
                    started_at: workout.started_at,
                    summary: format_history_entry(exercise),
                })
            })
            .collect()
    }

    fn get_workout_days(&self, year: i32, month: u32) -> BTreeSet<u32> {
        workout_days_in_month(&self.load_workouts(), year, month)
    }
}
