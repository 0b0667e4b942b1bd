//! Pure statistics over workouts.
//!
//! Functions taking a workout collection expect it newest first, the order
//! returned by `WorkoutRepositoryTrait::load_workouts`.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, Months, NaiveDateTime};

use super::stats_model::{LiveSessionStats, WorkoutStats, WorkoutSummary};
use crate::constants::WEIGHT_UNIT;
use crate::workouts::{Workout, WorkoutExercise};

/// Computes the calendar headline statistics relative to `now`.
///
/// Week and month windows are inclusive of their start instant. The exercises
/// per workout average deliberately spans every workout, not only the month.
pub fn workout_stats(workouts: &[Workout], now: NaiveDateTime) -> WorkoutStats {
    let week_ago = now
        .checked_sub_signed(Duration::weeks(1))
        .unwrap_or(NaiveDateTime::MIN);
    let month_ago = now
        .checked_sub_months(Months::new(1))
        .unwrap_or(NaiveDateTime::MIN);

    let workouts_per_week = workouts
        .iter()
        .filter(|w| w.started_at >= week_ago)
        .count();

    let (workouts_this_month, exercises_this_month) = workouts
        .iter()
        .filter(|w| w.started_at >= month_ago)
        .fold((0, 0), |(count, exercises), w| {
            (count + 1, exercises + w.exercise_count())
        });

    let exercises_per_workout = if workouts.is_empty() {
        0
    } else {
        let total: usize = workouts.iter().map(Workout::exercise_count).sum();
        total / workouts.len()
    };

    WorkoutStats {
        workouts_per_week,
        workouts_this_month,
        exercises_per_workout,
        exercises_this_month,
    }
}

/// Most recent occurrences of a template, one per workout, at most `limit`.
///
/// The iterator is lazy and can be cloned to replay it; call again to pick up
/// new data.
pub fn exercise_history<'a>(
    workouts: &'a [Workout],
    template_id: &'a str,
    limit: usize,
) -> impl Iterator<Item = &'a WorkoutExercise> + Clone + 'a {
    workouts
        .iter()
        .filter_map(move |w| w.exercise_for_template(template_id))
        .take(limit)
}

/// Describes an exercise's sets compactly, e.g. `"3 x 8-10 x 135 lbs"`.
///
/// Weights are truncated to whole pounds. When weights differ only the
/// smallest rep count is printed, even if reps differ as well.
pub fn format_history_entry(exercise: &WorkoutExercise) -> String {
    let sets = &exercise.sets;
    if sets.is_empty() {
        return "0 sets".to_string();
    }

    let reps = sets.iter().map(|s| s.reps);
    let weights = sets.iter().map(|s| s.weight as i64);
    let min_reps = reps.clone().min().unwrap_or_default();
    let max_reps = reps.max().unwrap_or_default();
    let min_weight = weights.clone().min().unwrap_or_default();
    let max_weight = weights.max().unwrap_or_default();
    let count = sets.len();

    if min_weight == max_weight {
        if min_reps == max_reps {
            format!("{count} x {min_reps} x {min_weight} {WEIGHT_UNIT}")
        } else {
            format!("{count} x {min_reps}-{max_reps} x {min_weight} {WEIGHT_UNIT}")
        }
    } else {
        format!("{count} x {min_reps} x {min_weight}-{max_weight} {WEIGHT_UNIT}")
    }
}

/// Running totals for one exercise. Each set's volume is truncated before
/// being added; the sums saturate instead of overflowing.
pub fn live_session_stats(exercise: &WorkoutExercise) -> LiveSessionStats {
    exercise
        .sets
        .iter()
        .fold(LiveSessionStats::default(), |mut stats, set| {
            stats.sets += 1;
            stats.reps = stats.reps.saturating_add(i64::from(set.reps));
            stats.lbs = stats.lbs.saturating_add(set.volume().floor() as i64);
            stats
        })
}

pub fn workout_summary(workout: &Workout) -> WorkoutSummary {
    WorkoutSummary {
        exercises: workout.exercise_count(),
        sets: workout.total_sets(),
        reps: workout.total_reps(),
        total_weight: workout.total_weight(),
    }
}

/// Days of the given month on which a workout was started.
pub fn workout_days_in_month(workouts: &[Workout], year: i32, month: u32) -> BTreeSet<u32> {
    workouts
        .iter()
        .filter(|w| w.started_at.year() == year && w.started_at.month() == month)
        .map(|w| w.started_at.day())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::workout_with;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn with_exercise_count(started_at: NaiveDateTime, count: usize) -> Workout {
        let names = ["a", "b", "c", "d", "e"];
        workout_with(
            started_at,
            names[..count].iter().map(|n| (*n, vec![(5, 50.0)])).collect(),
        )
    }

    fn exercise(sets: Vec<(i32, f64)>) -> WorkoutExercise {
        workout_with(at(2025, 6, 1), vec![("bench", sets)]).exercises.remove(0)
    }

    #[test]
    fn test_stats_on_empty_collection_are_zero() {
        assert_eq!(workout_stats(&[], at(2025, 6, 20)), WorkoutStats::default());
    }

    #[test]
    fn test_stats_windows() {
        let now = at(2025, 6, 20);
        let workouts = vec![
            with_exercise_count(at(2025, 6, 19), 2),
            with_exercise_count(at(2025, 6, 13), 3), // exactly one week ago
            with_exercise_count(at(2025, 6, 1), 1),
            with_exercise_count(at(2025, 5, 20), 4), // exactly one month ago
            with_exercise_count(at(2025, 4, 2), 5),
        ];

        let stats = workout_stats(&workouts, now);

        assert_eq!(stats.workouts_per_week, 2);
        assert_eq!(stats.workouts_this_month, 4);
        assert_eq!(stats.exercises_this_month, 10);
        assert_eq!(stats.exercises_per_workout, 3);
    }

    #[test]
    fn test_exercises_per_workout_truncates() {
        let now = at(2025, 6, 20);
        let workouts = vec![
            with_exercise_count(at(2025, 6, 19), 1),
            with_exercise_count(at(2025, 6, 18), 2),
            with_exercise_count(at(2025, 6, 17), 2),
        ];

        assert_eq!(workout_stats(&workouts, now).exercises_per_workout, 1);
    }

    #[test]
    fn test_exercises_per_workout_spans_all_workouts() {
        // Old workouts still weigh in on the average even though none of
        // them fall inside the monthly window.
        let now = at(2025, 6, 20);
        let workouts = vec![
            with_exercise_count(at(2025, 6, 19), 1),
            with_exercise_count(at(2024, 1, 5), 5),
        ];

        let stats = workout_stats(&workouts, now);
        assert_eq!(stats.exercises_this_month, 1);
        assert_eq!(stats.exercises_per_workout, 3);
    }

    #[test]
    fn test_month_window_clamps_at_month_end() {
        // March 31st minus one month is February 28th.
        let now = at(2025, 3, 31);
        let workouts = vec![
            with_exercise_count(at(2025, 2, 28), 1),
            with_exercise_count(at(2025, 2, 27), 1),
        ];

        assert_eq!(workout_stats(&workouts, now).workouts_this_month, 1);
    }

    #[test]
    fn test_format_uniform_sets() {
        let e = exercise(vec![(10, 50.0), (10, 50.0), (10, 50.0)]);
        assert_eq!(format_history_entry(&e), "3 x 10 x 50 lbs");
    }

    #[test]
    fn test_format_rep_range() {
        let e = exercise(vec![(8, 100.0), (10, 100.0)]);
        assert_eq!(format_history_entry(&e), "2 x 8-10 x 100 lbs");
    }

    #[test]
    fn test_format_weight_range() {
        let e = exercise(vec![(8, 90.0), (8, 110.0)]);
        assert_eq!(format_history_entry(&e), "2 x 8 x 90-110 lbs");
    }

    #[test]
    fn test_format_both_vary_prints_min_reps_only() {
        let e = exercise(vec![(12, 90.0), (6, 110.0)]);
        assert_eq!(format_history_entry(&e), "2 x 6 x 90-110 lbs");
    }

    #[test]
    fn test_format_truncates_weights_before_comparing() {
        let e = exercise(vec![(5, 100.2), (5, 100.9)]);
        assert_eq!(format_history_entry(&e), "2 x 5 x 100 lbs");
    }

    #[test]
    fn test_format_without_sets() {
        assert_eq!(format_history_entry(&exercise(vec![])), "0 sets");
    }

    #[test]
    fn test_history_newest_first_and_limited() {
        let workouts: Vec<Workout> = (0..6)
            .map(|i| {
                workout_with(
                    at(2025, 6, 20 - i),
                    vec![("row", vec![(5, 100.0 + f64::from(i))]), ("bench", vec![(5, 50.0)])],
                )
            })
            .collect();

        let history: Vec<f64> = exercise_history(&workouts, "bench", 4)
            .map(|e| e.sets[0].weight)
            .collect();
        assert_eq!(history.len(), 4);

        let rows: Vec<&WorkoutExercise> = exercise_history(&workouts, "row", 4).collect();
        let weights: Vec<f64> = rows.iter().map(|e| e.sets[0].weight).collect();
        assert_eq!(weights, vec![100.0, 101.0, 102.0, 103.0]);
    }

    #[test]
    fn test_history_skips_workouts_without_template() {
        let workouts = vec![
            workout_with(at(2025, 6, 20), vec![("squat", vec![(5, 200.0)])]),
            workout_with(at(2025, 6, 18), vec![("bench", vec![(5, 135.0)])]),
        ];

        let history: Vec<&WorkoutExercise> = exercise_history(&workouts, "bench", 4).collect();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].sets[0].weight, 135.0);
        assert_eq!(exercise_history(&workouts, "deadlift", 4).count(), 0);
    }

    #[test]
    fn test_history_takes_first_match_per_workout() {
        let workouts = vec![workout_with(
            at(2025, 6, 20),
            vec![("bench", vec![(5, 135.0)]), ("bench", vec![(3, 155.0)])],
        )];

        let history: Vec<&WorkoutExercise> = exercise_history(&workouts, "bench", 4).collect();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].sets[0].weight, 135.0);
    }

    #[test]
    fn test_history_is_restartable() {
        let workouts = vec![
            workout_with(at(2025, 6, 20), vec![("bench", vec![(5, 135.0)])]),
            workout_with(at(2025, 6, 18), vec![("bench", vec![(5, 130.0)])]),
        ];

        let history = exercise_history(&workouts, "bench", 4);
        let first: Vec<&str> = history.clone().map(|e| e.id.as_str()).collect();
        let second: Vec<&str> = history.map(|e| e.id.as_str()).collect();
        let again: Vec<&str> = exercise_history(&workouts, "bench", 4)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(first, second);
        assert_eq!(first, again);
    }

    #[test]
    fn test_live_stats_truncate_each_set() {
        let e = exercise(vec![(3, 33.5), (3, 33.5)]);
        let stats = live_session_stats(&e);

        assert_eq!(stats.sets, 2);
        assert_eq!(stats.reps, 6);
        // 100.5 truncated twice, not 201.0 once
        assert_eq!(stats.lbs, 200);
    }

    #[test]
    fn test_live_stats_saturate_on_huge_weights() {
        let e = exercise(vec![(1, 1e300), (1, 1e300), (2, 50.0)]);
        let stats = live_session_stats(&e);

        assert_eq!(stats.sets, 3);
        assert_eq!(stats.reps, 4);
        assert_eq!(stats.lbs, i64::MAX);
    }

    #[test]
    fn test_workout_summary() {
        let workout = workout_with(
            at(2025, 6, 20),
            vec![("bench", vec![(8, 100.0), (5, 120.0)]), ("squat", vec![])],
        );

        let summary = workout_summary(&workout);
        assert_eq!(summary.exercises, 2);
        assert_eq!(summary.sets, 2);
        assert_eq!(summary.reps, 13);
        assert_eq!(summary.total_weight, 1400.0);
    }

    #[test]
    fn test_workout_days_in_month() {
        let workouts = vec![
            with_exercise_count(at(2025, 6, 20), 1),
            with_exercise_count(at(2025, 6, 20), 1),
            with_exercise_count(at(2025, 6, 3), 1),
            with_exercise_count(at(2025, 5, 20), 1),
            with_exercise_count(at(2024, 6, 9), 1),
        ];

        let days: Vec<u32> = workout_days_in_month(&workouts, 2025, 6).into_iter().collect();
        assert_eq!(days, vec![3, 20]);
    }
}
