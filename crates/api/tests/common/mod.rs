#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use quizpair_core::clock::ManualClock;
use quizpair_core::rules::GameSettings;
use quizpair_db::models::question::CreateQuestion;
use quizpair_db::repositories::QuestionRepo;
use quizpair_game::GameService;
use sqlx::PgPool;
use tower::ServiceExt;

use quizpair_api::config::ServerConfig;
use quizpair_api::middleware::identity::USER_ID_HEADER;
use quizpair_api::router::build_app_router;
use quizpair_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: "postgres://unused".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        game: GameSettings::default(),
    }
}

/// Build the full application router on a fresh manual clock.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_clock(pool, Arc::new(ManualClock::at_epoch()))
}

/// Build the full application router on the given clock, so tests can share
/// one timeline across several requests.
pub fn build_test_app_with_clock(pool: PgPool, clock: Arc<ManualClock>) -> Router {
    let config = test_config();
    let games = GameService::new(pool.clone(), clock, config.game);
    let state = AppState { pool, games };
    build_app_router(state, &config)
}

/// Seed published questions; question `i` accepts `answer {i}`.
pub async fn seed_questions(pool: &PgPool, count: usize) {
    for i in 0..count {
        QuestionRepo::create(
            pool,
            &CreateQuestion {
                body: format!("Question {i}?"),
                correct_answers: vec![format!("answer {i}")],
                published: true,
            },
        )
        .await
        .unwrap();
    }
}

/// Send a request with no identity header.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET as the given user.
pub async fn get_as(app: Router, user_id: &str, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(USER_ID_HEADER, user_id)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an optional JSON body as the given user.
pub async fn post_as(
    app: Router,
    user_id: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(USER_ID_HEADER, user_id);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
