use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use gymtracker_core::{
    constants::DEFAULT_HISTORY_LIMIT,
    exercises::{ExerciseTemplate, MuscleGroup},
    stats::HistoryEntry,
};
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct ExercisesQuery {
    group: Option<String>,
}

#[derive(Deserialize)]
struct HistoryQuery {
    limit: Option<usize>,
}

async fn list_exercises(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExercisesQuery>,
) -> ApiResult<Json<Vec<ExerciseTemplate>>> {
    let templates = match query.group {
        Some(group) => {
            let group = group.parse::<MuscleGroup>().map_err(ApiError::BadRequest)?;
            state.exercise_service.get_templates_by_group(group)?
        }
        None => state.exercise_service.get_templates()?,
    };
    Ok(Json(templates))
}

async fn get_exercise_history(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Json<Vec<HistoryEntry>>> {
    let template = state.exercise_service.get_template(&id)?;
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    Ok(Json(
        state.stats_service.get_exercise_history(&template.id, limit),
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/exercises", get(list_exercises))
        .route("/exercises/{id}/history", get(get_exercise_history))
}
