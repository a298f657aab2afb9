//! Feng Shui room-layout rule engine and quiz scoring.
//!
//! The [`placement`] module checks furniture on an 8x8 room grid against a
//! small set of spatial rules. [`quiz`] and [`orientation`] score answers
//! against the read-only question bank in [`content`]. With the `api`
//! feature (on by default) the [`api`] module exposes all three over HTTP.

pub mod answer_key;
pub mod config;
pub mod content;
pub mod error;
pub mod grid;
pub mod orientation;
pub mod placement;
pub mod predicates;
pub mod quiz;

#[cfg(feature = "api")]
pub mod api;

pub use config::AppConfig;
pub use content::ContentStore;
pub use error::{CoachError, Result};
pub use grid::{Item, Position, COLS, ROWS};
pub use orientation::{check_orientation, OrientationCheck};
pub use placement::{validate, PlacementRequest, PlacementValidator, ValidationResult};
pub use quiz::{IncorrectAnswer, QuizResult, QuizScorer, QuizSubmission};
