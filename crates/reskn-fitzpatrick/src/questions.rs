use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifier for each question in the fixed Fitzpatrick questionnaire.
/// A closed set: an answer for an unknown question is unrepresentable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionId {
    EyeColor,
    HairColor,
    SkinColor,
    Freckles,
    SunReaction,
    TanDepth,
    TanSpeed,
    FaceReaction,
    LastSunExposure,
    TreatedAreaExposure,
}

impl QuestionId {
    /// Every question id, in questionnaire order.
    pub const ALL: [QuestionId; 10] = [
        QuestionId::EyeColor,
        QuestionId::HairColor,
        QuestionId::SkinColor,
        QuestionId::Freckles,
        QuestionId::SunReaction,
        QuestionId::TanDepth,
        QuestionId::TanSpeed,
        QuestionId::FaceReaction,
        QuestionId::LastSunExposure,
        QuestionId::TreatedAreaExposure,
    ];
}

/// The section a question is grouped under on the assessment page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    GeneticDisposition,
    SunExposureReaction,
    TanningHabits,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::GeneticDisposition => "Genetic Disposition",
            Category::SunExposureReaction => "Reaction to Sun Exposure",
            Category::TanningHabits => "Tanning Habits",
        }
    }
}

/// One selectable answer and the points it contributes to the total.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub category: Category,
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

impl Question {
    /// The label of the option carrying `score`, if any.
    pub fn option_label(&self, score: u32) -> Option<&'static str> {
        self.options
            .iter()
            .find(|o| o.score == score)
            .map(|o| o.label)
    }

    pub fn max_score(&self) -> u32 {
        self.options.iter().map(|o| o.score).max().unwrap_or(0)
    }
}

const fn option(label: &'static str, score: u32) -> AnswerOption {
    AnswerOption { label, score }
}

/// The full questionnaire. Entry order matches `QuestionId` discriminant
/// order; `question()` relies on this.
pub static QUESTIONS: [Question; 10] = [
    Question {
        id: QuestionId::EyeColor,
        category: Category::GeneticDisposition,
        prompt: "What colour are your eyes?",
        options: &[
            option("Light blue, grey, or green", 0),
            option("Blue, grey, or green", 1),
            option("Blue", 2),
            option("Dark brown", 3),
            option("Brownish black", 4),
        ],
    },
    Question {
        id: QuestionId::HairColor,
        category: Category::GeneticDisposition,
        prompt: "What is your natural hair colour?",
        options: &[
            option("Sandy red", 0),
            option("Blond", 1),
            option("Chestnut or dark blond", 2),
            option("Dark brown", 3),
            option("Black", 4),
        ],
    },
    Question {
        id: QuestionId::SkinColor,
        category: Category::GeneticDisposition,
        prompt: "What is your skin colour (unexposed areas)?",
        options: &[
            option("Reddish", 0),
            option("Very pale", 1),
            option("Pale with beige tint", 2),
            option("Light brown", 3),
            option("Dark brown", 4),
        ],
    },
    Question {
        id: QuestionId::Freckles,
        category: Category::GeneticDisposition,
        prompt: "Do you have freckles on unexposed areas?",
        options: &[
            option("Many", 0),
            option("Several", 1),
            option("A few", 2),
            option("Incidental", 3),
            option("None", 4),
        ],
    },
    Question {
        id: QuestionId::SunReaction,
        category: Category::SunExposureReaction,
        prompt: "What happens when you stay in the sun too long?",
        options: &[
            option("Painful redness, blistering, peeling", 0),
            option("Blistering followed by peeling", 1),
            option("Burns sometimes followed by peeling", 2),
            option("Rare burns", 3),
            option("Never had burns", 4),
        ],
    },
    Question {
        id: QuestionId::TanDepth,
        category: Category::SunExposureReaction,
        prompt: "To what degree do you turn brown?",
        options: &[
            option("Hardly or not at all", 0),
            option("Light colour tan", 1),
            option("Reasonable tan", 2),
            option("Tan very easily", 3),
            option("Turn dark brown quickly", 4),
        ],
    },
    Question {
        id: QuestionId::TanSpeed,
        category: Category::SunExposureReaction,
        prompt: "Do you turn brown within several hours after sun exposure?",
        options: &[
            option("Never", 0),
            option("Seldom", 1),
            option("Sometimes", 2),
            option("Often", 3),
            option("Always", 4),
        ],
    },
    Question {
        id: QuestionId::FaceReaction,
        category: Category::SunExposureReaction,
        prompt: "How does your face react to the sun?",
        options: &[
            option("Very sensitive", 0),
            option("Sensitive", 1),
            option("Normal", 2),
            option("Very resistant", 3),
            option("Never had a problem", 4),
        ],
    },
    Question {
        id: QuestionId::LastSunExposure,
        category: Category::TanningHabits,
        prompt: "When did you last expose your body to the sun (or sunbed/tanning cream)?",
        options: &[
            option("More than 3 months ago", 0),
            option("2-3 months ago", 1),
            option("1-2 months ago", 2),
            option("Less than a month ago", 3),
            option("Less than 2 weeks ago", 4),
        ],
    },
    Question {
        id: QuestionId::TreatedAreaExposure,
        category: Category::TanningHabits,
        prompt: "Did you expose the area to be treated to the sun?",
        options: &[
            option("Never", 0),
            option("Hardly ever", 1),
            option("Sometimes", 2),
            option("Often", 3),
            option("Always", 4),
        ],
    },
];

/// Look up a question definition by id.
pub fn question(id: QuestionId) -> &'static Question {
    &QUESTIONS[id as usize]
}
