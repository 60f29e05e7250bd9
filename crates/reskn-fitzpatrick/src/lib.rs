//! reskn-fitzpatrick
//!
//! The Fitzpatrick skin-photosensitivity questionnaire and its scoring
//! rules: a fixed ten-question catalogue, a strongly-typed answer set, and
//! the deterministic classification into the six skin-type bands used to
//! set safe laser parameters.

pub mod answers;
pub mod error;
pub mod questions;
pub mod scoring;

pub use answers::AnswerSet;
pub use error::ScoringError;
pub use questions::{AnswerOption, Category, QUESTIONS, Question, QuestionId};
pub use scoring::{ClassificationResult, MAX_TOTAL_SCORE, SkinType, classify};
