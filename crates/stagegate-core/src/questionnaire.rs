//! Guided scoring wizard: 20 questions, four per criterion, each answered
//! on the same 1..5 scale. Answers collapse into a regular [`Scoring`].

use crate::scoring::Scoring;
use crate::types::CriterionKey;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Question catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub criterion: CriterionKey,
    pub text: &'static str,
}

/// The fixed question catalog. Order is stable; ids are referenced by saved
/// wizard answers.
pub fn questions() -> &'static [Question] {
    use CriterionKey::*;
    &[
        Question {
            id: "ma1",
            criterion: MarketAttractiveness,
            text: "Is the target market large enough to sustain a meaningful business?",
        },
        Question {
            id: "ma2",
            criterion: MarketAttractiveness,
            text: "Is the market growing or expected to grow over the next three years?",
        },
        Question {
            id: "ma3",
            criterion: MarketAttractiveness,
            text: "Can the offering be clearly differentiated from existing alternatives?",
        },
        Question {
            id: "ma4",
            criterion: MarketAttractiveness,
            text: "Is the competitive intensity in the target market manageable?",
        },
        Question {
            id: "sf1",
            criterion: StrategicFit,
            text: "Does the opportunity align with the company's strategic priorities?",
        },
        Question {
            id: "sf2",
            criterion: StrategicFit,
            text: "Does it build on existing customer relationships or sales channels?",
        },
        Question {
            id: "sf3",
            criterion: StrategicFit,
            text: "Does it strengthen the current product or service portfolio?",
        },
        Question {
            id: "sf4",
            criterion: StrategicFit,
            text: "Would pursuing it create synergies with ongoing initiatives?",
        },
        Question {
            id: "fe1",
            criterion: Feasibility,
            text: "Are the required skills and competencies available in-house?",
        },
        Question {
            id: "fe2",
            criterion: Feasibility,
            text: "Is the necessary technology mature enough to build on today?",
        },
        Question {
            id: "fe3",
            criterion: Feasibility,
            text: "Can a first version be delivered with the available resources?",
        },
        Question {
            id: "fe4",
            criterion: Feasibility,
            text: "Are external partners available where capabilities are missing?",
        },
        Question {
            id: "cv1",
            criterion: CommercialViability,
            text: "Is there a clear willingness to pay among target customers?",
        },
        Question {
            id: "cv2",
            criterion: CommercialViability,
            text: "Can the offering reach an attractive margin at realistic volumes?",
        },
        Question {
            id: "cv3",
            criterion: CommercialViability,
            text: "Is the expected payback period acceptable?",
        },
        Question {
            id: "cv4",
            criterion: CommercialViability,
            text: "Are the upfront investments proportionate to the expected returns?",
        },
        Question {
            id: "ri1",
            criterion: Risk,
            text: "How exposed is the opportunity to regulatory or legal uncertainty?",
        },
        Question {
            id: "ri2",
            criterion: Risk,
            text: "How dependent is success on factors outside the company's control?",
        },
        Question {
            id: "ri3",
            criterion: Risk,
            text: "How severe would the impact of a failed market entry be?",
        },
        Question {
            id: "ri4",
            criterion: Risk,
            text: "How likely are competitors to respond aggressively?",
        },
    ]
}

// ---------------------------------------------------------------------------
// Answer reduction
// ---------------------------------------------------------------------------

/// Collapse wizard answers into a [`Scoring`].
///
/// For each criterion, the answered questions (value >= 1; 0 or absent means
/// unanswered) are averaged and rounded half-up to the nearest integer.
/// Criteria with no answered questions keep the base scoring's value and
/// comment unchanged. Pure: the same answers always produce the same result.
pub fn answers_to_scoring(answers: &HashMap<String, u8>, base: &Scoring) -> Scoring {
    let mut result = base.clone();
    for &key in CriterionKey::all() {
        let values: Vec<u32> = questions()
            .iter()
            .filter(|q| q.criterion == key)
            .filter_map(|q| answers.get(q.id).copied())
            .filter(|&v| v >= 1)
            .map(u32::from)
            .collect();
        if values.is_empty() {
            continue;
        }
        let avg = f64::from(values.iter().sum::<u32>()) / values.len() as f64;
        result.get_mut(key).score = avg.round() as u8;
    }
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
