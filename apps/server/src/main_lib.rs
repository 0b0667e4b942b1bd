use std::sync::Arc;

use crate::config::Config;
use gymtracker_core::{
    exercises::{ExerciseService, ExerciseServiceTrait},
    stats::{StatsService, StatsServiceTrait},
    workouts::{SessionService, SessionServiceTrait},
};
use gymtracker_storage_sqlite::{
    db::{self, write_actor},
    exercises::ExerciseTemplateRepository,
    workouts::WorkoutRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub exercise_service: Arc<dyn ExerciseServiceTrait>,
    pub session_service: Arc<dyn SessionServiceTrait>,
    pub stats_service: Arc<dyn StatsServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("GYM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let template_repository = Arc::new(ExerciseTemplateRepository::new(
        pool.clone(),
        writer.clone(),
    ));
    let exercise_service: Arc<dyn ExerciseServiceTrait> =
        Arc::new(ExerciseService::new(template_repository));

    let workout_repository = Arc::new(WorkoutRepository::new(pool.clone(), writer.clone()));
    let session_service: Arc<dyn SessionServiceTrait> = Arc::new(SessionService::new(
        workout_repository.clone(),
        exercise_service.clone(),
    ));
    session_service.initialize().await?;

    let stats_service: Arc<dyn StatsServiceTrait> =
        Arc::new(StatsService::new(workout_repository));

    Ok(Arc::new(AppState {
        exercise_service,
        session_service,
        stats_service,
    }))
}
