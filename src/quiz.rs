//! Quiz scoring against the fixed answer key.

use crate::content::ContentStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const INCOMPLETE_MSG: &str = "Please answer all questions to see your score.";
pub const MASTERY_MSG: &str = "Perfect score! You have mastered the basics of Feng Shui.";
pub const POSITIVE_MSG: &str = "Good job! You understand most of the Feng Shui principles.";
pub const REVIEW_MSG: &str = "Keep learning! Review the lessons and try again.";

/// Default minimum score for the positive message.
pub const DEFAULT_PASS_THRESHOLD: u32 = 3;

/// Answers submitted by the learner, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizSubmission {
    answers: HashMap<String, String>,
}

impl QuizSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, question: impl Into<String>, letter: impl Into<String>) -> Self {
        self.answers.insert(question.into(), letter.into());
        self
    }

    /// The chosen letter, treating an empty answer as unanswered.
    pub fn answer(&self, question: &str) -> Option<&str> {
        self.answers
            .get(question)
            .map(String::as_str)
            .filter(|letter| !letter.is_empty())
    }
}

impl From<HashMap<String, String>> for QuizSubmission {
    fn from(answers: HashMap<String, String>) -> Self {
        Self { answers }
    }
}

/// A question the learner got wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncorrectAnswer {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub message: String,
    pub incorrect: Vec<IncorrectAnswer>,
}

/// Scores submissions against the question bank of a [`ContentStore`].
#[derive(Debug, Clone, Copy)]
pub struct QuizScorer<'a> {
    content: &'a ContentStore,
    pass_threshold: u32,
}

impl<'a> QuizScorer<'a> {
    pub fn new(content: &'a ContentStore) -> Self {
        Self {
            content,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
        }
    }

    pub fn with_pass_threshold(mut self, pass_threshold: u32) -> Self {
        self.pass_threshold = pass_threshold;
        self
    }

    pub fn total(&self) -> u32 {
        self.content.questions().len() as u32
    }

    pub fn score(&self, submission: &QuizSubmission) -> QuizResult {
        let questions = self.content.questions();
        let total = self.total();

        if questions.iter().any(|q| submission.answer(&q.id).is_none()) {
            return QuizResult {
                score: 0,
                total,
                message: INCOMPLETE_MSG.to_string(),
                incorrect: Vec::new(),
            };
        }

        let mut score = 0;
        let mut incorrect = Vec::new();
        for question in questions {
            let letter = submission.answer(&question.id).unwrap_or_default();
            if question.key.is_correct(letter) {
                score += 1;
            } else {
                incorrect.push(IncorrectAnswer {
                    question: question.text.clone(),
                    user_answer: question.key.label_or_letter(letter).to_string(),
                    correct_answer: question.key.correct_label().to_string(),
                });
            }
        }

        tracing::debug!("Quiz scored {}/{}", score, total);

        QuizResult {
            score,
            total,
            message: self.message_for(score).to_string(),
            incorrect,
        }
    }

    fn message_for(&self, score: u32) -> &'static str {
        if score == self.total() {
            MASTERY_MSG
        } else if score >= self.pass_threshold {
            POSITIVE_MSG
        } else {
            REVIEW_MSG
        }
    }
}
