//! In-memory repositories and builders shared by unit tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::errors::{DatabaseError, Error, Result};
use crate::exercises::{
    ExerciseTemplate, ExerciseTemplateRepositoryTrait, MuscleGroup, NewExerciseTemplate,
};
use crate::workouts::{
    ExerciseSet, PersonalBestUpdate, Workout, WorkoutExercise, WorkoutRepositoryTrait,
};

pub fn template(id: &str, group: MuscleGroup, personal_best: Option<f64>) -> ExerciseTemplate {
    ExerciseTemplate {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        muscle_group: group,
        rest_seconds: 90,
        personal_best,
    }
}

/// Builds a workout whose exercises carry the given (reps, weight) sets.
pub fn workout_with(started_at: NaiveDateTime, exercises: Vec<(&str, Vec<(i32, f64)>)>) -> Workout {
    let mut workout = Workout::new(started_at);
    for (position, (template_id, sets)) in exercises.into_iter().enumerate() {
        let mut exercise = WorkoutExercise::new(&workout.id, template_id, position as i32);
        for (index, (reps, weight)) in sets.into_iter().enumerate() {
            let set = ExerciseSet::new(&exercise.id, index as i32, reps, weight);
            exercise.sets.push(set);
        }
        workout.exercises.push(exercise);
    }
    workout
}

fn store_failure() -> Error {
    Error::Database(DatabaseError::QueryFailed("store unavailable".to_string()))
}

#[derive(Default)]
pub struct InMemoryTemplateRepository {
    templates: RwLock<Vec<ExerciseTemplate>>,
}

impl InMemoryTemplateRepository {
    pub fn put(&self, template: ExerciseTemplate) {
        self.templates.write().unwrap().push(template);
    }

    pub fn set_personal_best(&self, template_id: &str, best: f64) {
        if let Some(t) = self
            .templates
            .write()
            .unwrap()
            .iter_mut()
            .find(|t| t.id == template_id)
        {
            t.personal_best = Some(best);
        }
    }
}

#[async_trait]
impl ExerciseTemplateRepositoryTrait for InMemoryTemplateRepository {
    fn load_templates(&self) -> Result<Vec<ExerciseTemplate>> {
        let mut templates = self.templates.read().unwrap().clone();
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }

    fn get_template(&self, template_id: &str) -> Result<ExerciseTemplate> {
        self.templates
            .read()
            .unwrap()
            .iter()
            .find(|t| t.id == template_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Exercise template {}", template_id)))
    }

    fn count_templates(&self) -> Result<i64> {
        Ok(self.templates.read().unwrap().len() as i64)
    }

    async fn insert_templates(&self, templates: Vec<NewExerciseTemplate>) -> Result<usize> {
        let mut stored = self.templates.write().unwrap();
        let count = templates.len();
        for (i, new) in templates.into_iter().enumerate() {
            stored.push(ExerciseTemplate {
                id: new.id.unwrap_or_else(|| format!("template-{}", i)),
                name: new.name,
                description: new.description,
                muscle_group: new.muscle_group,
                rest_seconds: new.rest_seconds,
                personal_best: None,
            });
        }
        Ok(count)
    }
}

/// Workout store that can be told to fail reads or writes. Personal bests
/// are forwarded to the linked template repository.
#[derive(Default)]
pub struct InMemoryWorkoutRepository {
    workouts: RwLock<Vec<Workout>>,
    templates: Option<std::sync::Arc<InMemoryTemplateRepository>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryWorkoutRepository {
    pub fn with_templates(templates: std::sync::Arc<InMemoryTemplateRepository>) -> Self {
        Self {
            templates: Some(templates),
            ..Default::default()
        }
    }

    pub fn put(&self, workout: Workout) {
        self.workouts.write().unwrap().push(workout);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_write(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(store_failure());
        }
        Ok(())
    }
}

#[async_trait]
impl WorkoutRepositoryTrait for InMemoryWorkoutRepository {
    fn load_workouts(&self) -> Result<Vec<Workout>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(store_failure());
        }
        let mut workouts = self.workouts.read().unwrap().clone();
        workouts.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(workouts)
    }

    fn get_workout(&self, workout_id: &str) -> Result<Workout> {
        self.workouts
            .read()
            .unwrap()
            .iter()
            .find(|w| w.id == workout_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Workout {}", workout_id)))
    }

    async fn insert_workout(&self, workout: Workout) -> Result<Workout> {
        self.check_write()?;
        self.put(workout.clone());
        Ok(workout)
    }

    async fn save_set(
        &self,
        new_exercise: Option<WorkoutExercise>,
        set: ExerciseSet,
    ) -> Result<ExerciseSet> {
        self.check_write()?;
        let mut workouts = self.workouts.write().unwrap();
        if let Some(exercise) = new_exercise {
            let workout = workouts
                .iter_mut()
                .find(|w| w.id == exercise.workout_id)
                .ok_or_else(|| Error::NotFound(exercise.workout_id.clone()))?;
            workout.exercises.push(exercise);
        }
        let exercise = workouts
            .iter_mut()
            .flat_map(|w| w.exercises.iter_mut())
            .find(|e| e.id == set.workout_exercise_id)
            .ok_or_else(|| Error::NotFound(set.workout_exercise_id.clone()))?;
        exercise.sets.push(set.clone());
        Ok(set)
    }

    async fn close_workout(
        &self,
        workout_id: String,
        ended_at: NaiveDateTime,
        personal_bests: Vec<PersonalBestUpdate>,
    ) -> Result<()> {
        self.check_write()?;
        let mut workouts = self.workouts.write().unwrap();
        let workout = workouts
            .iter_mut()
            .find(|w| w.id == workout_id)
            .ok_or_else(|| Error::NotFound(workout_id.clone()))?;
        workout.ended_at = Some(ended_at);
        if let Some(templates) = &self.templates {
            for update in personal_bests {
                templates.set_personal_best(&update.template_id, update.personal_best);
            }
        }
        Ok(())
    }

    async fn delete_workout(&self, workout_id: String) -> Result<usize> {
        self.check_write()?;
        let mut workouts = self.workouts.write().unwrap();
        let before = workouts.len();
        workouts.retain(|w| w.id != workout_id);
        Ok(before - workouts.len())
    }
}
