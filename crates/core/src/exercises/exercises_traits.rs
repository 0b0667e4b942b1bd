use crate::errors::Result;
use crate::exercises::exercises_model::{ExerciseTemplate, MuscleGroup, NewExerciseTemplate};
use async_trait::async_trait;

/// Trait for exercise catalog repository operations
#[async_trait]
pub trait ExerciseTemplateRepositoryTrait: Send + Sync {
    /// Loads every template, sorted by name.
    fn load_templates(&self) -> Result<Vec<ExerciseTemplate>>;
    fn get_template(&self, template_id: &str) -> Result<ExerciseTemplate>;
    fn count_templates(&self) -> Result<i64>;
    async fn insert_templates(&self, templates: Vec<NewExerciseTemplate>) -> Result<usize>;
}

/// Trait for exercise catalog service operations
#[async_trait]
pub trait ExerciseServiceTrait: Send + Sync {
    fn get_templates(&self) -> Result<Vec<ExerciseTemplate>>;
    fn get_templates_by_group(&self, group: MuscleGroup) -> Result<Vec<ExerciseTemplate>>;
    fn get_template(&self, template_id: &str) -> Result<ExerciseTemplate>;
    async fn seed_if_empty(&self) -> Result<usize>;
}
