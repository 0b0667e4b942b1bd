use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDateTime};
use gymtracker_core::{
    stats::{LiveSessionStats, WorkoutSummary},
    workouts::{ExerciseSet, NewExerciseSet, Workout},
};

use crate::{error::ApiResult, main_lib::AppState};

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

async fn get_session(State(state): State<Arc<AppState>>) -> Json<Option<Workout>> {
    Json(state.session_service.active_workout().await)
}

async fn start_session(State(state): State<Arc<AppState>>) -> ApiResult<Json<Workout>> {
    let workout = state.session_service.start_session(now()).await?;
    Ok(Json(workout))
}

async fn record_set(
    State(state): State<Arc<AppState>>,
    Json(new_set): Json<NewExerciseSet>,
) -> ApiResult<Json<ExerciseSet>> {
    let set = state.session_service.record_set(new_set).await?;
    Ok(Json(set))
}

async fn end_session(State(state): State<Arc<AppState>>) -> ApiResult<Json<Option<Workout>>> {
    let workout = state.session_service.end_session(now()).await?;
    Ok(Json(workout))
}

async fn get_session_summary(State(state): State<Arc<AppState>>) -> Json<Option<WorkoutSummary>> {
    Json(state.session_service.active_summary().await)
}

async fn get_live_exercise_stats(
    Path(template_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<Option<LiveSessionStats>> {
    Json(state.session_service.live_exercise_stats(&template_id).await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/session", get(get_session))
        .route("/session/start", post(start_session))
        .route("/session/sets", post(record_set))
        .route("/session/end", post(end_session))
        .route("/session/summary", get(get_session_summary))
        .route(
            "/session/exercises/{template_id}/stats",
            get(get_live_exercise_stats),
        )
}
