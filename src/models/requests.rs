use serde::Deserialize;

use crate::models::common::{ExerciseRecord, MealEntry, UserProfile, WorkoutRecord};

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub workout: WorkoutRecord,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct WorkoutLogRequest {
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
    #[serde(default)]
    pub date: Option<String>,
}

pub type MealLogRequest = MealEntry;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRequest {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub last_workout: Option<WorkoutRecord>,
    #[serde(default)]
    pub meals: Vec<MealEntry>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryRequest {
    #[serde(default)]
    pub workouts: Vec<WorkoutRecord>,
}
