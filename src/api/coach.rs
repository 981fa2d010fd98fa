use axum::Json;

use crate::error::{CoachError, CoachResult};
use crate::models::common::{ChatTurn, Sender};
use crate::models::requests::{ChatRequest, RecommendationRequest};
use crate::models::responses::{ChatResponse, RecommendationInfoResponse, RecommendationResponse};
use crate::services::coach_chat::{self, GREETING};
use crate::services::progressive_overload::{self, RECOMMENDATION_INFO};
use crate::services::workout_split::{self, WorkoutSplit};

pub async fn recommendations_handler(
    Json(request): Json<RecommendationRequest>,
) -> CoachResult<Json<RecommendationResponse>> {
    let exercises = progressive_overload::recommend(&request.workout, request.profile.as_ref())?;

    let starter_count = exercises
        .iter()
        .filter(|exercise| exercise.suggestion.is_some())
        .count();
    tracing::info!(
        exercise_count = exercises.len(),
        starter_count,
        "recommendation.generated"
    );

    Ok(Json(RecommendationResponse { exercises }))
}

pub async fn recommendation_info_handler() -> Json<RecommendationInfoResponse> {
    Json(RecommendationInfoResponse {
        info: RECOMMENDATION_INFO,
    })
}

pub async fn split_handler() -> Json<WorkoutSplit> {
    let split = workout_split::next_split();
    tracing::info!(split = split.name, exercise_count = split.exercises.len(), "split.served");
    Json(split)
}

/// The coach speaks first when a chat opens.
pub async fn chat_opening_handler() -> Json<ChatResponse> {
    Json(ChatResponse {
        turns: vec![ChatTurn {
            from: Sender::Coach,
            text: GREETING.to_string(),
        }],
    })
}

pub async fn chat_handler(Json(request): Json<ChatRequest>) -> CoachResult<Json<ChatResponse>> {
    if request.text.is_empty() {
        return Err(CoachError::InvalidArgument(
            "chat message must not be empty".to_string(),
        ));
    }

    let turns = coach_chat::exchange(&request.text);
    tracing::info!(message_len = request.text.len(), "chat.responded");

    Ok(Json(ChatResponse {
        turns: turns.to_vec(),
    }))
}
