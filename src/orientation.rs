//! The orientation mini-game: one lettered question per lesson section.

use crate::content::ContentStore;
use crate::error::{CoachError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationCheck {
    pub correct: bool,
    pub explanation: String,
    pub correct_label: String,
}

/// Compare `choice` against the correct letter for `section`.
pub fn check_orientation(
    content: &ContentStore,
    section: &str,
    choice: &str,
) -> Result<OrientationCheck> {
    let entry = content
        .section(section)
        .ok_or_else(|| CoachError::InvalidSection(section.to_string()))?;

    Ok(OrientationCheck {
        correct: entry.key.is_correct(choice),
        explanation: entry.explanation.clone(),
        correct_label: entry.key.correct_label().to_string(),
    })
}
