use axum::{Json, extract::State};
use chrono::{NaiveDate, Utc};

use crate::api::AppState;
use crate::error::{CoachError, CoachResult};
use crate::models::common::{MealEntry, WorkoutRecord};
use crate::models::requests::{DashboardRequest, HistoryRequest, MealLogRequest, WorkoutLogRequest};
use crate::models::responses::{DashboardResponse, HistoryResponse};
use crate::services::dashboard::{DashboardInput, build_dashboard};
use crate::services::history::build_history;
use crate::services::{nutrition, workout_log};

/// Dates are calendar days in UTC, matching how entries are stamped.
fn resolve_day(date: Option<&str>) -> CoachResult<NaiveDate> {
    match date {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
            CoachError::InvalidArgument(format!("date '{}' is not YYYY-MM-DD: {}", value, e))
        }),
        None => Ok(Utc::now().date_naive()),
    }
}

pub async fn workout_log_handler(
    Json(request): Json<WorkoutLogRequest>,
) -> CoachResult<Json<WorkoutRecord>> {
    let day = resolve_day(request.date.as_deref())?;
    let workout = workout_log::build_workout(request.exercises, day)?;
    Ok(Json(workout))
}

pub async fn meal_log_handler(Json(request): Json<MealLogRequest>) -> CoachResult<Json<MealEntry>> {
    let meal = nutrition::log_meal(request, Utc::now().date_naive())?;
    tracing::info!(food = %meal.food, "meal.logged");
    Ok(Json(meal))
}

pub async fn dashboard_handler(
    State(state): State<AppState>,
    Json(request): Json<DashboardRequest>,
) -> CoachResult<Json<DashboardResponse>> {
    let today = resolve_day(request.date.as_deref())?;

    let input = DashboardInput {
        profile: request.profile.as_ref(),
        last_workout: request.last_workout.as_ref(),
        meals: &request.meals,
        today,
        default_calorie_target: state.config.default_calorie_target,
    };
    let dashboard = build_dashboard(input, &mut rand::thread_rng())?;

    tracing::info!(
        calories_today = dashboard.calories_today,
        calorie_target = dashboard.calorie_target,
        meals_today = dashboard.meals_today,
        has_workout = request.last_workout.is_some(),
        "dashboard.built"
    );

    Ok(Json(dashboard))
}

pub async fn history_handler(Json(request): Json<HistoryRequest>) -> Json<HistoryResponse> {
    let workouts = build_history(&request.workouts);
    tracing::info!(workouts = workouts.len(), "history.built");
    Json(HistoryResponse { workouts })
}
