//! Error types shared by the rule engines, content loading and the HTTP layer.

/// Errors produced while handling a request or loading startup data.
///
/// A placement missing furniture and a quiz with unanswered questions are not
/// errors: both are reported back to the learner as feedback text.
#[derive(Debug, thiserror::Error)]
pub enum CoachError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Invalid section")]
    InvalidSection(String),

    #[error("Content error: {0}")]
    Content(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl CoachError {
    /// True for errors caused by the caller's input rather than by the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoachError::MalformedRequest(_) | CoachError::InvalidSection(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CoachError>;
