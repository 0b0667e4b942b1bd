use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::exercises_catalog::default_catalog;
use super::exercises_model::{ExerciseTemplate, MuscleGroup};
use super::exercises_traits::{ExerciseServiceTrait, ExerciseTemplateRepositoryTrait};
use crate::errors::Result;

/// Service for the exercise catalog.
pub struct ExerciseService {
    repository: Arc<dyn ExerciseTemplateRepositoryTrait>,
}

impl ExerciseService {
    pub fn new(repository: Arc<dyn ExerciseTemplateRepositoryTrait>) -> Self {
        ExerciseService { repository }
    }
}

#[async_trait]
impl ExerciseServiceTrait for ExerciseService {
    fn get_templates(&self) -> Result<Vec<ExerciseTemplate>> {
        self.repository.load_templates()
    }

    fn get_templates_by_group(&self, group: MuscleGroup) -> Result<Vec<ExerciseTemplate>> {
        Ok(self
            .repository
            .load_templates()?
            .into_iter()
            .filter(|t| t.muscle_group == group)
            .collect())
    }

    fn get_template(&self, template_id: &str) -> Result<ExerciseTemplate> {
        self.repository.get_template(template_id)
    }

    /// Inserts the built-in catalog when no template exists yet.
    ///
    /// Existing catalogs are left untouched, even if the built-in list has
    /// changed since they were seeded. Returns the number of inserted templates.
    async fn seed_if_empty(&self) -> Result<usize> {
        let existing = self.repository.count_templates()?;
        if existing > 0 {
            debug!("Exercise catalog already holds {} templates", existing);
            return Ok(0);
        }

        let inserted = self.repository.insert_templates(default_catalog()).await?;
        info!("Seeded exercise catalog with {} templates", inserted);
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::DEFAULT_CATALOG_SIZE;
    use crate::testing::InMemoryTemplateRepository;

    fn service() -> (ExerciseService, Arc<InMemoryTemplateRepository>) {
        let repository = Arc::new(InMemoryTemplateRepository::default());
        (ExerciseService::new(repository.clone()), repository)
    }

    #[tokio::test]
    async fn test_seed_inserts_catalog_into_empty_store() {
        let (service, repository) = service();

        let inserted = service.seed_if_empty().await.unwrap();

        assert_eq!(inserted, DEFAULT_CATALOG_SIZE);
        assert_eq!(repository.count_templates().unwrap(), 25);
        assert!(service
            .get_templates()
            .unwrap()
            .iter()
            .all(|t| t.personal_best.is_none()));
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let (service, repository) = service();

        service.seed_if_empty().await.unwrap();
        let second = service.seed_if_empty().await.unwrap();

        assert_eq!(second, 0);
        assert_eq!(repository.count_templates().unwrap(), 25);
    }

    #[tokio::test]
    async fn test_seed_never_merges_into_existing_catalog() {
        let (service, repository) = service();
        repository.put(crate::testing::template("custom", MuscleGroup::Legs, None));

        assert_eq!(service.seed_if_empty().await.unwrap(), 0);
        assert_eq!(repository.count_templates().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_templates_are_sorted_and_filterable() {
        let (service, _) = service();
        service.seed_if_empty().await.unwrap();

        let names: Vec<String> = service
            .get_templates()
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        let legs = service.get_templates_by_group(MuscleGroup::Legs).unwrap();
        assert!(!legs.is_empty());
        assert!(legs.iter().all(|t| t.muscle_group == MuscleGroup::Legs));
    }
}
