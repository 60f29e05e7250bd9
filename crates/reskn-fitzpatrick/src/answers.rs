use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoringError;
use crate::questions::{QUESTIONS, QuestionId, question};

/// The patient's selected scores, keyed by question. Never holds an entry
/// for an unanswered question; re-recording a question replaces the
/// earlier selection. Scores are validated against the question's options
/// on entry, so a stored score always corresponds to a selectable option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "BTreeMap<QuestionId, u32>")]
#[ts(export)]
pub struct AnswerSet(BTreeMap<QuestionId, u32>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected score for a question, replacing any previous
    /// selection. Rejects scores that are not one of the question's
    /// options.
    pub fn record(&mut self, id: QuestionId, score: u32) -> Result<(), ScoringError> {
        if question(id).option_label(score).is_none() {
            return Err(ScoringError::InvalidScore { question: id, score });
        }
        self.0.insert(id, score);
        Ok(())
    }

    pub fn score(&self, id: QuestionId) -> Option<u32> {
        self.0.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True once every question in the catalogue has an answer.
    pub fn is_complete(&self) -> bool {
        self.0.len() == QUESTIONS.len()
    }

    /// Arithmetic sum of all recorded scores.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, u32)> + '_ {
        self.0.iter().map(|(id, score)| (*id, *score))
    }
}

impl TryFrom<BTreeMap<QuestionId, u32>> for AnswerSet {
    type Error = ScoringError;

    fn try_from(map: BTreeMap<QuestionId, u32>) -> Result<Self, Self::Error> {
        let mut answers = AnswerSet::new();
        for (id, score) in map {
            answers.record(id, score)?;
        }
        Ok(answers)
    }
}
