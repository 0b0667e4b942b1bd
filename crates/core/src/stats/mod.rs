//! Stats module - workout aggregation, history formatting, and read service.

mod stats_calculator;
mod stats_model;
mod stats_service;
mod stats_traits;

pub use stats_calculator::{
    exercise_history, format_history_entry, live_session_stats, workout_days_in_month,
    workout_stats, workout_summary,
};
pub use stats_model::{HistoryEntry, LiveSessionStats, WorkoutStats, WorkoutSummary};
pub use stats_service::StatsService;
pub use stats_traits::StatsServiceTrait;
