/// Request and response bodies for the HTTP API
use serde::{Deserialize, Serialize};

/// Error body returned with every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Form fields posted by the orientation mini-game
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrientationForm {
    pub section: Option<String>,
    pub choice: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub quiz_questions: usize,
    pub orientation_sections: usize,
}
