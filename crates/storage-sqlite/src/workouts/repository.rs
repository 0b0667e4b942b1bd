use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use gymtracker_core::workouts::{
    ExerciseSet, PersonalBestUpdate, Workout, WorkoutExercise, WorkoutRepositoryTrait,
};
use gymtracker_core::{Error, Result};

use super::model::{ExerciseSetDB, WorkoutDB, WorkoutExerciseDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{exercise_sets, exercise_templates, workout_exercises, workouts};
use crate::utils::chunk_for_sqlite;

pub struct WorkoutRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl WorkoutRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        WorkoutRepository { pool, writer }
    }

    /// Attaches exercises and sets to the given workout rows. Workouts keep
    /// their row order, children are ordered by position.
    fn assemble_workouts(
        conn: &mut SqliteConnection,
        workouts_db: Vec<WorkoutDB>,
    ) -> Result<Vec<Workout>> {
        let workout_ids: Vec<String> = workouts_db.iter().map(|w| w.id.clone()).collect();
        let mut exercises_db: Vec<WorkoutExerciseDB> = Vec::new();
        for chunk in chunk_for_sqlite(&workout_ids) {
            exercises_db.extend(
                workout_exercises::table
                    .filter(workout_exercises::workout_id.eq_any(chunk))
                    .select(WorkoutExerciseDB::as_select())
                    .load::<WorkoutExerciseDB>(conn)
                    .map_err(StorageError::from)?,
            );
        }
        exercises_db.sort_by_key(|e| e.position);

        let exercise_ids: Vec<String> = exercises_db.iter().map(|e| e.id.clone()).collect();
        let mut sets_db: Vec<ExerciseSetDB> = Vec::new();
        for chunk in chunk_for_sqlite(&exercise_ids) {
            sets_db.extend(
                exercise_sets::table
                    .filter(exercise_sets::workout_exercise_id.eq_any(chunk))
                    .select(ExerciseSetDB::as_select())
                    .load::<ExerciseSetDB>(conn)
                    .map_err(StorageError::from)?,
            );
        }
        sets_db.sort_by_key(|s| s.position);

        let sets_by_exercise = sets_db.grouped_by(&exercises_db);
        let mut exercises_by_workout: HashMap<String, Vec<WorkoutExercise>> = HashMap::new();
        for (exercise_db, sets) in exercises_db.into_iter().zip(sets_by_exercise) {
            let sets = sets.into_iter().map(ExerciseSet::from).collect();
            let exercise = exercise_db.into_domain(sets);
            exercises_by_workout
                .entry(exercise.workout_id.clone())
                .or_default()
                .push(exercise);
        }

        Ok(workouts_db
            .into_iter()
            .map(|workout_db| {
                let exercises = exercises_by_workout
                    .remove(&workout_db.id)
                    .unwrap_or_default();
                workout_db.into_domain(exercises)
            })
            .collect())
    }
}

#[async_trait]
impl WorkoutRepositoryTrait for WorkoutRepository {
    fn load_workouts(&self) -> Result<Vec<Workout>> {
        let mut conn = get_connection(&self.pool)?;
        let workouts_db = workouts::table
            .order(workouts::started_at.desc())
            .select(WorkoutDB::as_select())
            .load::<WorkoutDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::assemble_workouts(&mut conn, workouts_db)
    }

    fn get_workout(&self, workout_id: &str) -> Result<Workout> {
        let mut conn = get_connection(&self.pool)?;
        let workout_db = workouts::table
            .find(workout_id)
            .select(WorkoutDB::as_select())
            .first::<WorkoutDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| Error::NotFound(format!("Workout {}", workout_id)))?;
        Self::assemble_workouts(&mut conn, vec![workout_db])?
            .pop()
            .ok_or_else(|| Error::NotFound(format!("Workout {}", workout_id)))
    }

    async fn insert_workout(&self, workout: Workout) -> Result<Workout> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Workout> {
                diesel::insert_into(workouts::table)
                    .values(WorkoutDB::from(&workout))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                for exercise in &workout.exercises {
                    diesel::insert_into(workout_exercises::table)
                        .values(WorkoutExerciseDB::from(exercise))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                    let sets: Vec<ExerciseSetDB> =
                        exercise.sets.iter().map(ExerciseSetDB::from).collect();
                    if !sets.is_empty() {
                        diesel::insert_into(exercise_sets::table)
                            .values(&sets)
                            .execute(conn)
                            .map_err(StorageError::from)?;
                    }
                }
                Ok(workout)
            })
            .await
    }

    async fn save_set(
        &self,
        new_exercise: Option<WorkoutExercise>,
        set: ExerciseSet,
    ) -> Result<ExerciseSet> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ExerciseSet> {
                if let Some(exercise) = &new_exercise {
                    diesel::insert_into(workout_exercises::table)
                        .values(WorkoutExerciseDB::from(exercise))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                    debug!(
                        "Added exercise {} to workout {}",
                        exercise.template_id, exercise.workout_id
                    );
                }
                let saved: ExerciseSetDB = diesel::insert_into(exercise_sets::table)
                    .values(ExerciseSetDB::from(&set))
                    .returning(ExerciseSetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(ExerciseSet::from(saved))
            })
            .await
    }

    async fn close_workout(
        &self,
        workout_id: String,
        ended_at: NaiveDateTime,
        personal_bests: Vec<PersonalBestUpdate>,
    ) -> Result<()> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let updated = diesel::update(workouts::table.find(workout_id.as_str()))
                    .set(workouts::ended_at.eq(Some(ended_at)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(Error::NotFound(format!("Workout {}", workout_id)));
                }

                for update in &personal_bests {
                    diesel::update(exercise_templates::table.find(update.template_id.as_str()))
                        .set(exercise_templates::personal_best.eq(Some(update.personal_best)))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(())
            })
            .await
    }

    async fn delete_workout(&self, workout_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(workouts::table.find(workout_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
