use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::{debug, info};
use tokio::sync::Mutex;

use super::personal_best::personal_best_updates;
use super::workouts_errors::SessionError;
use super::workouts_model::{ExerciseSet, NewExerciseSet, Workout, WorkoutExercise};
use super::workouts_traits::{SessionServiceTrait, WorkoutRepositoryTrait};
use crate::errors::Result;
use crate::exercises::{ExerciseServiceTrait, ExerciseTemplate};
use crate::stats::{live_session_stats, workout_summary, LiveSessionStats, WorkoutSummary};

/// Lifecycle of the single active workout.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    InProgress(Workout),
}

/// Service owning the in-progress workout.
///
/// Every mutation holds the state lock until its write has completed, so at
/// most one ledger mutation is in flight. The in-memory workout only changes
/// after the repository accepted the write.
pub struct SessionService {
    workout_repository: Arc<dyn WorkoutRepositoryTrait>,
    exercise_service: Arc<dyn ExerciseServiceTrait>,
    state: Mutex<SessionState>,
}

impl SessionService {
    pub fn new(
        workout_repository: Arc<dyn WorkoutRepositoryTrait>,
        exercise_service: Arc<dyn ExerciseServiceTrait>,
    ) -> Self {
        Self {
            workout_repository,
            exercise_service,
            state: Mutex::new(SessionState::Idle),
        }
    }

    fn templates_by_id(&self) -> Result<HashMap<String, ExerciseTemplate>> {
        Ok(self
            .exercise_service
            .get_templates()?
            .into_iter()
            .map(|t| (t.id.clone(), t))
            .collect())
    }
}

#[async_trait]
impl SessionServiceTrait for SessionService {
    /// Seeds the exercise catalog on first launch.
    async fn initialize(&self) -> Result<()> {
        self.exercise_service.seed_if_empty().await?;
        Ok(())
    }

    async fn start_session(&self, now: NaiveDateTime) -> Result<Workout> {
        let mut state = self.state.lock().await;
        if let SessionState::InProgress(active) = &*state {
            return Err(SessionError::AlreadyInProgress {
                workout_id: active.id.clone(),
            }
            .into());
        }

        let workout = self
            .workout_repository
            .insert_workout(Workout::new(now))
            .await?;
        info!("Started workout {} at {}", workout.id, workout.started_at);

        *state = SessionState::InProgress(workout.clone());
        Ok(workout)
    }

    async fn record_set(&self, new_set: NewExerciseSet) -> Result<ExerciseSet> {
        new_set.validate()?;
        let template = self.exercise_service.get_template(&new_set.template_id);

        let mut state = self.state.lock().await;
        let workout = match &mut *state {
            SessionState::InProgress(workout) => workout,
            SessionState::Idle => return Err(SessionError::NotInProgress.into()),
        };
        let template = template?;

        let existing = workout
            .exercises
            .iter()
            .position(|e| e.template_id == template.id);
        let (new_exercise, set) = match existing {
            Some(index) => {
                let exercise = &workout.exercises[index];
                let set = ExerciseSet::new(
                    &exercise.id,
                    exercise.sets.len() as i32,
                    new_set.reps,
                    new_set.weight,
                );
                (None, set)
            }
            None => {
                let exercise = WorkoutExercise::new(
                    &workout.id,
                    &template.id,
                    workout.exercises.len() as i32,
                );
                let set = ExerciseSet::new(&exercise.id, 0, new_set.reps, new_set.weight);
                (Some(exercise), set)
            }
        };

        let saved = self
            .workout_repository
            .save_set(new_exercise.clone(), set)
            .await?;

        let index = match existing {
            Some(index) => index,
            None => {
                debug!("Added {} to workout {}", template.name, workout.id);
                workout.exercises.extend(new_exercise);
                workout.exercises.len() - 1
            }
        };
        workout.exercises[index].sets.push(saved.clone());

        Ok(saved)
    }

    /// Ends the running session and records the personal bests it raised.
    ///
    /// Does nothing when no session is running.
    async fn end_session(&self, now: NaiveDateTime) -> Result<Option<Workout>> {
        let mut state = self.state.lock().await;
        let mut workout = match &*state {
            SessionState::InProgress(workout) => workout.clone(),
            SessionState::Idle => {
                debug!("end_session called without an active workout");
                return Ok(None);
            }
        };

        let templates = self.templates_by_id()?;
        let updates = personal_best_updates(&workout, &templates);
        self.workout_repository
            .close_workout(workout.id.clone(), now, updates.clone())
            .await?;

        for update in &updates {
            let name = templates
                .get(&update.template_id)
                .map(|t| t.name.as_str())
                .unwrap_or(update.template_id.as_str());
            info!("New personal best for {}: {} lbs", name, update.personal_best);
        }
        info!(
            "Ended workout {} with {} exercises and {} sets",
            workout.id,
            workout.exercise_count(),
            workout.total_sets()
        );

        workout.ended_at = Some(now);
        *state = SessionState::Idle;
        Ok(Some(workout))
    }

    async fn active_workout(&self) -> Option<Workout> {
        match &*self.state.lock().await {
            SessionState::InProgress(workout) => Some(workout.clone()),
            SessionState::Idle => None,
        }
    }

    async fn active_summary(&self) -> Option<WorkoutSummary> {
        match &*self.state.lock().await {
            SessionState::InProgress(workout) => Some(workout_summary(workout)),
            SessionState::Idle => None,
        }
    }

    async fn live_exercise_stats(&self, template_id: &str) -> Option<LiveSessionStats> {
        match &*self.state.lock().await {
            SessionState::InProgress(workout) => workout
                .exercise_for_template(template_id)
                .map(live_session_stats),
            SessionState::Idle => None,
        }
    }

    async fn delete_workout(&self, workout_id: &str) -> Result<usize> {
        let state = self.state.lock().await;
        if let SessionState::InProgress(active) = &*state {
            if active.id == workout_id {
                return Err(SessionError::WorkoutActive(workout_id.to_string()).into());
            }
        }

        let deleted = self
            .workout_repository
            .delete_workout(workout_id.to_string())
            .await?;
        info!("Deleted workout {}", workout_id);
        Ok(deleted)
    }
}
