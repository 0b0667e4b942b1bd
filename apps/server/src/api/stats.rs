use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::Local;
use gymtracker_core::stats::WorkoutStats;
use serde::Serialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CalendarMonth {
    year: i32,
    month: u32,
    days: Vec<u32>,
}

async fn get_workout_stats(State(state): State<Arc<AppState>>) -> Json<WorkoutStats> {
    Json(
        state
            .stats_service
            .get_workout_stats(Local::now().naive_local()),
    )
}

async fn get_calendar_month(
    Path((year, month)): Path<(i32, u32)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CalendarMonth>> {
    if !(1..=12).contains(&month) {
        return Err(ApiError::BadRequest(format!("Invalid month: {}", month)));
    }
    let days = state.stats_service.get_workout_days(year, month);
    Ok(Json(CalendarMonth {
        year,
        month,
        days: days.into_iter().collect(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stats", get(get_workout_stats))
        .route("/calendar/{year}/{month}", get(get_calendar_month))
}
