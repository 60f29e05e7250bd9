use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::answers::AnswerSet;
use crate::error::ScoringError;

/// Highest total the catalogue can produce: ten questions, four points each.
pub const MAX_TOTAL_SCORE: u32 = 40;

/// The six Fitzpatrick skin-photosensitivity types, ordered from most to
/// least sun sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SkinType {
    TypeI,
    TypeII,
    TypeIII,
    TypeIV,
    TypeV,
    TypeVI,
}

impl SkinType {
    pub fn label(&self) -> &'static str {
        match self {
            SkinType::TypeI => "Type I",
            SkinType::TypeII => "Type II",
            SkinType::TypeIII => "Type III",
            SkinType::TypeIV => "Type IV",
            SkinType::TypeV => "Type V",
            SkinType::TypeVI => "Type VI",
        }
    }
}

struct Band {
    min: u32,
    max: u32,
    skin_type: SkinType,
    description: &'static str,
}

/// Ascending, non-overlapping, and jointly exhaustive over
/// [0, MAX_TOTAL_SCORE]. A total outside the table is a catalogue defect,
/// not user input.
static BANDS: [Band; 6] = [
    Band {
        min: 0,
        max: 6,
        skin_type: SkinType::TypeI,
        description: "Highly sensitive; always burns, never tans",
    },
    Band {
        min: 7,
        max: 13,
        skin_type: SkinType::TypeII,
        description: "Very sun sensitive; burns easily, tans minimally",
    },
    Band {
        min: 14,
        max: 20,
        skin_type: SkinType::TypeIII,
        description: "Sun sensitive; sometimes burns, slowly tans to light brown",
    },
    Band {
        min: 21,
        max: 27,
        skin_type: SkinType::TypeIV,
        description: "Minimally sun sensitive; burns minimally, always tans to moderate brown",
    },
    Band {
        min: 28,
        max: 34,
        skin_type: SkinType::TypeV,
        description: "Sun insensitive; rarely burns, tans well",
    },
    Band {
        min: 35,
        max: MAX_TOTAL_SCORE,
        skin_type: SkinType::TypeVI,
        description: "Sun insensitive; never burns, deeply pigmented",
    },
];

/// The outcome of classifying an answer set. Recomputed on every answer
/// change for the live preview; a copy is sealed into the submission
/// record at assembly time together with the answers that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationResult {
    pub total_score: u32,
    pub skin_type: SkinType,
    pub description: String,
}

/// Classify a (possibly partial) answer set. Pure and deterministic: the
/// total is the sum of recorded scores and the band is the unique entry
/// containing it.
pub fn classify(answers: &AnswerSet) -> Result<ClassificationResult, ScoringError> {
    let total = answers.total();
    let (skin_type, description) = band_for_total(total)?;
    Ok(ClassificationResult {
        total_score: total,
        skin_type,
        description: description.to_string(),
    })
}

/// The skin type and description for a given total.
pub fn band_for_total(total: u32) -> Result<(SkinType, &'static str), ScoringError> {
    BANDS
        .iter()
        .find(|b| b.min <= total && total <= b.max)
        .map(|b| (b.skin_type, b.description))
        .ok_or(ScoringError::OutOfRange { total })
}
