//! Read-only learning content: the quiz question bank and the orientation
//! game's answer table.
//!
//! The default content is compiled into the binary from
//! `content/feng_shui.toml`. A replacement file with the same layout can be
//! supplied through configuration. Content is validated once on load and never
//! mutated afterwards.

use crate::answer_key::ChoiceSet;
use crate::error::{CoachError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const EMBEDDED_CONTENT: &str = include_str!("../content/feng_shui.toml");

/// A quiz question and its lettered answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(flatten)]
    pub key: ChoiceSet,
}

/// One part of the orientation mini-game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationSection {
    pub id: String,
    pub prompt: String,
    pub explanation: String,
    #[serde(flatten)]
    pub key: ChoiceSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStore {
    #[serde(default)]
    questions: Vec<Question>,
    #[serde(default, rename = "orientation")]
    sections: Vec<OrientationSection>,
}

impl ContentStore {
    /// Content bundled with the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONTENT)
    }

    /// Load from `path` when given, otherwise use the bundled content.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let store = Self::from_toml_str(&raw)?;
        tracing::info!(
            "Loaded {} quiz questions and {} orientation sections from {}",
            store.questions.len(),
            store.sections.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let store: ContentStore = toml::from_str(raw)?;
        store.check()?;
        Ok(store)
    }

    fn check(&self) -> Result<()> {
        if self.questions.is_empty() {
            return Err(CoachError::Content("no quiz questions defined".to_string()));
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id.as_str()) {
                return Err(CoachError::Content(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }
            question.key.check(&format!("question {}", question.id))?;
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(CoachError::Content(format!(
                    "duplicate orientation section {}",
                    section.id
                )));
            }
            section.key.check(&format!("orientation section {}", section.id))?;
        }

        Ok(())
    }

    /// Questions in answer-key order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn sections(&self) -> &[OrientationSection] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&OrientationSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}
