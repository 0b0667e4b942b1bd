use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use gymtracker_core::workouts::Workout;
use serde::Serialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Workout as listed in the history, with its display title.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkoutResponse {
    title: String,
    #[serde(flatten)]
    workout: Workout,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            title: workout.title(),
            workout,
        }
    }
}

async fn list_workouts(State(state): State<Arc<AppState>>) -> Json<Vec<WorkoutResponse>> {
    let workouts = state.stats_service.get_workouts();
    Json(workouts.into_iter().map(WorkoutResponse::from).collect())
}

async fn delete_workout(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let deleted = state.session_service.delete_workout(&id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound(format!("Workout {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/workouts", get(list_workouts))
        .route("/workouts/{id}", delete(delete_workout))
}
