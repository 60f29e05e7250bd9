use thiserror::Error;

use reskn_fitzpatrick::ScoringError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleError {
    #[error("skin assessment incomplete: {answered} of {expected} questions answered")]
    QuestionnaireIncomplete { answered: usize, expected: usize },

    #[error("classification failed: {0}")]
    Scoring(#[from] ScoringError),
}
