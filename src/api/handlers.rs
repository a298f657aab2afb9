/// API request handlers
use crate::api::models::*;
use crate::config::AppConfig;
use crate::content::ContentStore;
use crate::error::CoachError;
use crate::orientation::check_orientation as check_section;
use crate::placement::PlacementValidator;
use crate::quiz::{QuizScorer, QuizSubmission};
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        Form, Json, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentStore>,
    pub config: Arc<AppConfig>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(content: ContentStore, config: AppConfig) -> Self {
        Self {
            content: Arc::new(content),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }
}

/// Map an engine error onto a status code and `{error}` body
pub fn error_response(err: CoachError) -> Response {
    let status = if err.is_client_error() {
        tracing::warn!("Rejected request: {}", err);
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!("Request failed: {}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ErrorResponse::new(err.to_string()))).into_response()
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        quiz_questions: state.content.questions().len(),
        orientation_sections: state.content.sections().len(),
    })
}

/// Validate a simulator room layout
pub async fn validate_placement(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return error_response(CoachError::MalformedRequest(rejection.body_text()));
        }
    };

    let validator = PlacementValidator::new(state.config.placement.strict_bounds);
    match validator.evaluate(&payload) {
        Ok(result) => Json(result).into_response(),
        Err(e) => error_response(e),
    }
}

/// Score a submitted quiz form
pub async fn submit_quiz(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    let Form(answers) = match form {
        Ok(form) => form,
        Err(rejection) => {
            return error_response(CoachError::MalformedRequest(rejection.body_text()));
        }
    };

    let submission = QuizSubmission::from(answers);
    let result = QuizScorer::new(&state.content)
        .with_pass_threshold(state.config.quiz.pass_threshold)
        .score(&submission);

    Json(result).into_response()
}

/// Check one answer of the orientation mini-game
pub async fn check_orientation(
    State(state): State<AppState>,
    form: Result<Form<OrientationForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            return error_response(CoachError::MalformedRequest(rejection.body_text()));
        }
    };

    let Some(section) = form.section else {
        return error_response(CoachError::InvalidSection(String::new()));
    };
    // An unknown section is reported before a missing choice.
    if state.content.section(&section).is_none() {
        return error_response(CoachError::InvalidSection(section));
    }
    let Some(choice) = form.choice else {
        return error_response(CoachError::MalformedRequest(
            "missing field `choice`".to_string(),
        ));
    };

    match check_section(&state.content, &section, &choice) {
        Ok(check) => Json(check).into_response(),
        Err(e) => error_response(e),
    }
}
