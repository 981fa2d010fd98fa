use serde::Serialize;

use crate::models::common::{ChatTurn, Measure};
use crate::services::progressive_overload::RecommendedExercise;
use crate::services::workout_split::WorkoutSplit;

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub exercises: Vec<RecommendedExercise>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationInfoResponse {
    pub info: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub turns: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Everything the dashboard page renders, computed in one pass.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub current_weight: Option<Measure>,
    pub goal_weight: Option<Measure>,
    pub calories_today: f64,
    pub calorie_target: f64,
    pub meals_today: usize,
    pub last_workout: Vec<String>,
    pub recommendations: Vec<String>,
    pub suggested_split: WorkoutSplit,
}

/// One block of display lines per workout, newest first.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub workouts: Vec<Vec<String>>,
}
