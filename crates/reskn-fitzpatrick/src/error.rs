use thiserror::Error;

use crate::questions::QuestionId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("score {score} is not a selectable option for question {question:?}")]
    InvalidScore { question: QuestionId, score: u32 },

    #[error("total score {total} falls outside every classification band")]
    OutOfRange { total: u32 },
}
