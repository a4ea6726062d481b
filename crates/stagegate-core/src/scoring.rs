//! Scoring engine: five rated criteria collapse into one scalar in [1.0, 5.0].
//!
//! Both the rough (idea-stage) score and the detailed (business-plan) score
//! use the single weighted-average function in this module. Risk is the one
//! inverted criterion: a risk score of 5 (highest danger) contributes like a
//! 1 on the other dimensions.

use crate::error::{Result, StagegateError};
use crate::types::CriterionKey;
use serde::{Deserialize, Serialize};

/// Sum of all criterion weights (3+3+2+2+1).
pub const WEIGHT_SUM: u32 = 11;

/// Default score for a freshly created criterion.
pub const NEUTRAL_SCORE: u8 = 3;

// ---------------------------------------------------------------------------
// Criterion / Scoring
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub score: u8,
    #[serde(default)]
    pub comment: String,
}

impl Default for Criterion {
    fn default() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            comment: String::new(),
        }
    }
}

/// The rough five-criterion rating. All five criteria are always present;
/// the struct shape enforces it, so only range validation remains.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scoring {
    pub market_attractiveness: Criterion,
    pub strategic_fit: Criterion,
    pub feasibility: Criterion,
    pub commercial_viability: Criterion,
    pub risk: Criterion,
}

impl Scoring {
    pub fn get(&self, key: CriterionKey) -> &Criterion {
        match key {
            CriterionKey::MarketAttractiveness => &self.market_attractiveness,
            CriterionKey::StrategicFit => &self.strategic_fit,
            CriterionKey::Feasibility => &self.feasibility,
            CriterionKey::CommercialViability => &self.commercial_viability,
            CriterionKey::Risk => &self.risk,
        }
    }

    pub fn get_mut(&mut self, key: CriterionKey) -> &mut Criterion {
        match key {
            CriterionKey::MarketAttractiveness => &mut self.market_attractiveness,
            CriterionKey::StrategicFit => &mut self.strategic_fit,
            CriterionKey::CommercialViability => &mut self.commercial_viability,
            CriterionKey::Feasibility => &mut self.feasibility,
            CriterionKey::Risk => &mut self.risk,
        }
    }

    /// Fail on any score outside 1..=5. The source silently accepted such
    /// values; rejecting them here keeps corrupted documents from producing
    /// plausible-looking totals.
    pub fn validate(&self) -> Result<()> {
        for &key in CriterionKey::all() {
            let score = self.get(key).score;
            if !(1..=5).contains(&score) {
                return Err(StagegateError::ScoreOutOfRange {
                    criterion: key.to_string(),
                    value: score,
                });
            }
        }
        Ok(())
    }

    /// Weighted total score in [1.0, 5.0], rounded to one decimal.
    pub fn total(&self) -> Result<f64> {
        self.validate()?;
        Ok(weighted_total(|key| self.get(key).score))
    }
}

// ---------------------------------------------------------------------------
// DetailedScoring
// ---------------------------------------------------------------------------

/// One detailed-scoring dimension: the score plus the analysis behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedCriterion {
    pub score: u8,
    #[serde(default)]
    pub justification: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_points: Vec<String>,
}

impl Default for DetailedCriterion {
    fn default() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            justification: String::new(),
            data_points: Vec::new(),
        }
    }
}

/// The business-plan-stage rating over the same five dimensions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetailedScoring {
    pub market_attractiveness: DetailedCriterion,
    pub strategic_fit: DetailedCriterion,
    pub feasibility: DetailedCriterion,
    pub commercial_viability: DetailedCriterion,
    pub risk: DetailedCriterion,
}

impl DetailedScoring {
    pub fn get(&self, key: CriterionKey) -> &DetailedCriterion {
        match key {
            CriterionKey::MarketAttractiveness => &self.market_attractiveness,
            CriterionKey::StrategicFit => &self.strategic_fit,
            CriterionKey::Feasibility => &self.feasibility,
            CriterionKey::CommercialViability => &self.commercial_viability,
            CriterionKey::Risk => &self.risk,
        }
    }

    pub fn get_mut(&mut self, key: CriterionKey) -> &mut DetailedCriterion {
        match key {
            CriterionKey::MarketAttractiveness => &mut self.market_attractiveness,
            CriterionKey::StrategicFit => &mut self.strategic_fit,
            CriterionKey::Feasibility => &mut self.feasibility,
            CriterionKey::CommercialViability => &mut self.commercial_viability,
            CriterionKey::Risk => &mut self.risk,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for &key in CriterionKey::all() {
            let score = self.get(key).score;
            if !(1..=5).contains(&score) {
                return Err(StagegateError::ScoreOutOfRange {
                    criterion: key.to_string(),
                    value: score,
                });
            }
        }
        Ok(())
    }

    /// Straight (unweighted) mean of the five detailed scores, one decimal.
    /// Risk is NOT inverted here; inversion applies only in the weighted
    /// figure.
    pub fn average(&self) -> Result<f64> {
        self.validate()?;
        let sum: u32 = CriterionKey::all()
            .iter()
            .map(|&key| u32::from(self.get(key).score))
            .sum();
        Ok(round_tenths(f64::from(sum) / 5.0))
    }

    /// Weighted figure over the detailed scores, using the same formula as
    /// the rough score.
    pub fn weighted_total(&self) -> Result<f64> {
        self.validate()?;
        Ok(weighted_total(|key| self.get(key).score))
    }
}

// ---------------------------------------------------------------------------
// Shared arithmetic
// ---------------------------------------------------------------------------

/// The one weighted-average formula: `(MA*3 + SF*3 + FE*2 + CV*2 + (6-RI)*1) / 11`,
/// rounded to one decimal. Callers validate ranges before invoking.
pub(crate) fn weighted_total<F>(score_of: F) -> f64
where
    F: Fn(CriterionKey) -> u8,
{
    let sum: u32 = CriterionKey::all()
        .iter()
        .map(|&key| {
            let score = u32::from(score_of(key));
            let effective = if key == CriterionKey::Risk {
                6 - score
            } else {
                score
            };
            effective * key.weight()
        })
        .sum();
    round_tenths(f64::from(sum) / f64::from(WEIGHT_SUM))
}

/// Round half away from zero at the tenths digit (`Math.round(x*10)/10`
/// semantics).
pub(crate) fn round_tenths(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
