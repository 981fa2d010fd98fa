use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::config::Config;

pub mod coach;
pub mod logs;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

pub fn router(state: AppState) -> anyhow::Result<Router> {
    let cors = cors_layer(&state.config)?;

    Ok(Router::new()
        .route("/", get(|| async { "Hello, World!" }))
        .route("/recommendations", post(coach::recommendations_handler))
        .route("/recommendations/info", get(coach::recommendation_info_handler))
        .route("/split", get(coach::split_handler))
        .route(
            "/chat",
            get(coach::chat_opening_handler).post(coach::chat_handler),
        )
        .route("/workouts", post(logs::workout_log_handler))
        .route("/meals", post(logs::meal_log_handler))
        .route("/dashboard", post(logs::dashboard_handler))
        .route("/history", post(logs::history_handler))
        .layer(cors)
        .with_state(state))
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    match &config.cors_allowed_origin {
        Some(origin) => Ok(CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE])),
        None => Ok(CorsLayer::permissive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState {
            config: Config::default(),
        })
        .unwrap()
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_recommendations_endpoint() {
        let (status, body) = send(post_json(
            "/recommendations",
            json!({
                "workout": {
                    "date": "2025-01-06",
                    "exercises": [
                        {"name": "Barbell Squat", "sets": [{"weight": 100, "reps": 5}]},
                        {"name": "Cable Row", "sets": []}
                    ]
                },
                "profile": {"weight": "80", "experience": "beginner"}
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["exercises"][0]["weight"], json!(102.5));
        assert_eq!(body["exercises"][1]["weight"], json!(10.0));
        assert_eq!(
            body["exercises"][1]["suggestion"],
            "Start light and focus on form"
        );
    }

    #[tokio::test]
    async fn test_recommendations_without_exercises_is_bad_request() {
        let (status, body) = send(post_json(
            "/recommendations",
            json!({"workout": {"date": "2025-01-06"}}),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("invalid argument"));
    }

    #[tokio::test]
    async fn test_split_endpoint() {
        let (status, body) = send(get_request("/split")).await;

        assert_eq!(status, StatusCode::OK);
        let name = body["name"].as_str().unwrap();
        assert!(["Push Day", "Pull Day", "Leg Day"].contains(&name));
        let count = body["exercises"].as_array().unwrap().len();
        assert!((4..=6).contains(&count));
    }

    #[tokio::test]
    async fn test_info_endpoint() {
        let (status, body) = send(get_request("/recommendations/info")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["info"].as_str().unwrap().contains("progressive overload"));
    }

    #[tokio::test]
    async fn test_chat_endpoint() {
        let (status, body) = send(post_json("/chat", json!({"text": "asdf"}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["turns"][0], json!({"from": "user", "text": "asdf"}));
        assert_eq!(body["turns"][1]["from"], "coach");
        assert_eq!(
            body["turns"][1]["text"],
            "I'm here to help! Ask about your workout, nutrition, or how to progress."
        );
    }

    #[tokio::test]
    async fn test_chat_opening_and_empty_message() {
        let (status, body) = send(get_request("/chat")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["turns"][0]["from"], "coach");

        let (status, _) = send(post_json("/chat", json!({"text": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_workout_log_endpoint() {
        let (status, body) = send(post_json(
            "/workouts",
            json!({
                "date": "2025-02-01",
                "exercises": [{"name": "Leg Press", "weight": "140", "reps": "10", "sets": "3"}]
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date"], "2025-02-01");
        assert_eq!(body["exercises"][0]["weight"], "140");

        let (status, body) = send(post_json("/workouts", json!({"exercises": []}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Add at least one exercise"));

        let (status, body) = send(post_json(
            "/workouts",
            json!({"exercises": [{"name": "Leg Press", "weight": "140"}]}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Fill all fields");
    }

    #[tokio::test]
    async fn test_meal_log_endpoint() {
        let (status, body) = send(post_json("/meals", json!({"food": "Oats", "calories": "350"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["food"], "Oats");
        assert!(body["date"].is_string());

        let (status, _) = send(post_json("/meals", json!({"food": "Oats"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dashboard_endpoint() {
        let (status, body) = send(post_json(
            "/dashboard",
            json!({
                "date": "2025-04-01",
                "profile": {"weight": "82", "goalWeight": "78"},
                "lastWorkout": {
                    "date": "2025-03-31",
                    "exercises": [{"name": "Dumbbell Curl", "sets": [{"weight": 8, "reps": 10}]}]
                },
                "meals": [
                    {"food": "Eggs", "calories": "300", "date": "2025-04-01"},
                    {"food": "Cake", "calories": "500", "date": "2025-03-31"}
                ]
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["caloriesToday"], json!(300.0));
        assert_eq!(body["calorieTarget"], json!(2000.0));
        assert_eq!(body["mealsToday"], json!(1));
        assert_eq!(body["lastWorkout"][1], "Dumbbell Curl: 8kg x 10 x 1");
        assert_eq!(body["recommendations"][0], "Dumbbell Curl: 9kg x 10 x 1");
        assert_eq!(body["currentWeight"], "82");
        assert_eq!(body["goalWeight"], "78");
        assert!(body["suggestedSplit"]["name"].is_string());
    }

    #[tokio::test]
    async fn test_recommendations_accept_any_json_weight() {
        let (status, body) = send(post_json(
            "/recommendations",
            json!({
                "workout": {
                    "exercises": [
                        {"name": "Barbell Squat", "sets": [{"weight": {"kg": 100}, "reps": 5}]},
                        {"name": "Barbell Row", "sets": [100]},
                        {"name": "Barbell Curl", "sets": [{"weight": true, "reps": 5}]},
                        {"name": "Leg Press", "weight": [1], "reps": 10, "sets": 3}
                    ]
                }
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["exercises"][0]["weight"], json!(20.0));
        assert_eq!(body["exercises"][0]["suggestion"], "Start light and focus on form");
        assert_eq!(body["exercises"][1]["weight"], json!(20.0));
        assert_eq!(body["exercises"][2]["weight"], json!(3.5));
        assert_eq!(body["exercises"][3]["weight"], json!(2.0));
    }

    #[tokio::test]
    async fn test_history_endpoint() {
        let (status, body) = send(post_json(
            "/history",
            json!({
                "workouts": [
                    {"date": "2025-01-06", "exercises": [{"name": "Leg Press", "weight": "140", "reps": "10", "sets": "3"}]},
                    {"date": "2025-02-01", "exercises": [{"name": "Barbell Squat", "sets": [{"weight": 100, "reps": 5}]}]}
                ]
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["workouts"],
            json!([
                ["Date: 2025-02-01", "Barbell Squat: 100kg x 5 x 1"],
                ["Date: 2025-01-06", "Leg Press: 140kg x 10 x 3"]
            ])
        );
    }

    #[tokio::test]
    async fn test_dashboard_rejects_bad_date() {
        let (status, _) = send(post_json("/dashboard", json!({"date": "01/04/2025"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_cors_with_invalid_origin_fails() {
        let config = Config {
            cors_allowed_origin: Some("bad\norigin".to_string()),
            ..Config::default()
        };

        assert!(router(AppState { config }).is_err());
    }
}
