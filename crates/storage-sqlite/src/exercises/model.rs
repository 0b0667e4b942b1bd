//! Database models for exercise templates.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use gymtracker_core::errors::{DatabaseError, Error};
use gymtracker_core::exercises::{ExerciseTemplate, MuscleGroup, NewExerciseTemplate};

/// Database model for exercise templates
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::exercise_templates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTemplateDB {
    pub id: String,
    pub name: String,
    pub description: String,
    pub muscle_group: String,
    pub rest_seconds: i32,
    pub personal_best: Option<f64>,
}

/// Database model for seeding a catalog entry
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::exercise_templates)]
#[serde(rename_all = "camelCase")]
pub struct NewExerciseTemplateDB {
    pub id: String,
    pub name: String,
    pub description: String,
    pub muscle_group: String,
    pub rest_seconds: i32,
}

impl TryFrom<ExerciseTemplateDB> for ExerciseTemplate {
    type Error = Error;

    fn try_from(db: ExerciseTemplateDB) -> Result<Self, Self::Error> {
        let muscle_group = db
            .muscle_group
            .parse::<MuscleGroup>()
            .map_err(|e| Error::Database(DatabaseError::Internal(e)))?;
        Ok(Self {
            id: db.id,
            name: db.name,
            description: db.description,
            muscle_group,
            rest_seconds: db.rest_seconds,
            personal_best: db.personal_best,
        })
    }
}

impl From<NewExerciseTemplate> for NewExerciseTemplateDB {
    fn from(domain: NewExerciseTemplate) -> Self {
        Self {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: domain.name,
            description: domain.description,
            muscle_group: domain.muscle_group.as_str().to_string(),
            rest_seconds: domain.rest_seconds,
        }
    }
}
