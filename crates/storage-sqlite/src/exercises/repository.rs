use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use gymtracker_core::exercises::{
    ExerciseTemplate, ExerciseTemplateRepositoryTrait, NewExerciseTemplate,
};
use gymtracker_core::{Error, Result};

use super::model::{ExerciseTemplateDB, NewExerciseTemplateDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::exercise_templates;

pub struct ExerciseTemplateRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ExerciseTemplateRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ExerciseTemplateRepository { pool, writer }
    }
}

#[async_trait]
impl ExerciseTemplateRepositoryTrait for ExerciseTemplateRepository {
    fn load_templates(&self) -> Result<Vec<ExerciseTemplate>> {
        let mut conn = get_connection(&self.pool)?;
        exercise_templates::table
            .select(ExerciseTemplateDB::as_select())
            .order(exercise_templates::name.asc())
            .load::<ExerciseTemplateDB>(&mut conn)
            .map_err(StorageError::from)?
            .into_iter()
            .map(ExerciseTemplate::try_from)
            .collect()
    }

    fn get_template(&self, template_id: &str) -> Result<ExerciseTemplate> {
        let mut conn = get_connection(&self.pool)?;
        let template_db = exercise_templates::table
            .find(template_id)
            .select(ExerciseTemplateDB::as_select())
            .first::<ExerciseTemplateDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| Error::NotFound(format!("Exercise template {}", template_id)))?;
        ExerciseTemplate::try_from(template_db)
    }

    fn count_templates(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(exercise_templates::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?)
    }

    async fn insert_templates(&self, templates: Vec<NewExerciseTemplate>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let rows: Vec<NewExerciseTemplateDB> =
                    templates.into_iter().map(NewExerciseTemplateDB::from).collect();
                let inserted = diesel::insert_into(exercise_templates::table)
                    .values(&rows)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                debug!("Inserted {} exercise templates", inserted);
                Ok(inserted)
            })
            .await
    }
}
