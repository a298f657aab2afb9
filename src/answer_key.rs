//! Lettered multiple-choice answers, shared by the quiz and the orientation game.

use crate::error::{CoachError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A correct letter together with the text shown for every letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSet {
    pub answer: String,
    pub choices: BTreeMap<String, String>,
}

impl ChoiceSet {
    pub fn new(answer: impl Into<String>, choices: BTreeMap<String, String>) -> Self {
        Self {
            answer: answer.into(),
            choices,
        }
    }

    pub fn is_correct(&self, letter: &str) -> bool {
        letter == self.answer
    }

    /// Text for `letter`, if it is one of the choices.
    pub fn label(&self, letter: &str) -> Option<&str> {
        self.choices.get(letter).map(String::as_str)
    }

    /// Text for `letter`, falling back to the letter itself.
    pub fn label_or_letter<'a>(&'a self, letter: &'a str) -> &'a str {
        self.label(letter).unwrap_or(letter)
    }

    pub fn correct_label(&self) -> &str {
        self.label_or_letter(&self.answer)
    }

    /// Reject a set whose answer letter is not one of its choices.
    pub fn check(&self, owner: &str) -> Result<()> {
        if self.choices.is_empty() {
            return Err(CoachError::Content(format!("{} has no choices", owner)));
        }
        if !self.choices.contains_key(&self.answer) {
            return Err(CoachError::Content(format!(
                "{} answer '{}' is not one of its choices",
                owner, self.answer
            )));
        }
        Ok(())
    }
}
