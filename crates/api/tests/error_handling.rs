//! Tests for `AppError` to HTTP response mapping.
//!
//! These call `IntoResponse` directly; no server or database is needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use quizpair_api::error::AppError;
use quizpair_core::error::CoreError;
use quizpair_game::GameError;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn already_in_game_is_forbidden() {
    let (status, json) = error_to_response(AppError::Core(CoreError::AlreadyInGame)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "ALREADY_IN_GAME");
}

#[tokio::test]
async fn not_in_active_game_is_forbidden() {
    let (status, json) = error_to_response(AppError::Core(CoreError::NotInActiveGame)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "NOT_IN_ACTIVE_GAME");
}

#[tokio::test]
async fn insufficient_questions_is_bad_request() {
    let err = AppError::Core(CoreError::InsufficientQuestions {
        required: 5,
        available: 2,
    });
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INSUFFICIENT_QUESTIONS");
}

#[tokio::test]
async fn duplicate_answer_is_bad_request() {
    let (status, json) = error_to_response(AppError::Core(CoreError::DuplicateAnswer)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "DUPLICATE_ANSWER");
}

#[tokio::test]
async fn validation_error_keeps_its_message() {
    let err = AppError::Core(CoreError::Validation("answer is too long".into()));
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "answer is too long");
}

#[tokio::test]
async fn not_found_names_the_entity() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "game",
        id: "42".into(),
    });
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "game with id 42 not found");
}

#[tokio::test]
async fn missing_question_slot_is_not_found() {
    let err = AppError::Core(CoreError::QuestionNotFound { game_id: 7 });
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "QUESTION_NOT_FOUND");
}

#[tokio::test]
async fn unauthorized_is_401() {
    let err = AppError::Core(CoreError::Unauthorized("Missing X-User-Id header".into()));
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn lost_race_is_sanitized_500() {
    let err = AppError::Core(CoreError::RaceLost { game_id: 3 });
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn internal_error_message_is_sanitized() {
    let err = AppError::InternalError("secret connection string".into());
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json["error"].as_str().unwrap().contains("secret"));
}

#[tokio::test]
async fn row_not_found_is_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn game_errors_convert_by_variant() {
    let err: AppError = GameError::Core(CoreError::DuplicateAnswer).into();
    let (status, _) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let err: AppError = GameError::Database(sqlx::Error::PoolTimedOut).into();
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}
