//! Strategic-analysis records collected alongside the pipeline: SWOT lists,
//! a BCG portfolio category, and an Ansoff growth strategy. Pure data; the
//! charts drawn from these live outside the core.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// BcgCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BcgCategory {
    QuestionMark,
    Star,
    CashCow,
    Dog,
}

impl BcgCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            BcgCategory::QuestionMark => "question_mark",
            BcgCategory::Star => "star",
            BcgCategory::CashCow => "cash_cow",
            BcgCategory::Dog => "dog",
        }
    }
}

impl fmt::Display for BcgCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BcgCategory {
    type Err = crate::error::StagegateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "question_mark" | "question-mark" => Ok(BcgCategory::QuestionMark),
            "star" => Ok(BcgCategory::Star),
            "cash_cow" | "cash-cow" => Ok(BcgCategory::CashCow),
            "dog" => Ok(BcgCategory::Dog),
            _ => Err(crate::error::StagegateError::InvalidBcgCategory(
                s.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// AnsoffStrategy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnsoffStrategy {
    MarketPenetration,
    MarketDevelopment,
    ProductDevelopment,
    Diversification,
}

impl AnsoffStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            AnsoffStrategy::MarketPenetration => "market_penetration",
            AnsoffStrategy::MarketDevelopment => "market_development",
            AnsoffStrategy::ProductDevelopment => "product_development",
            AnsoffStrategy::Diversification => "diversification",
        }
    }
}

impl fmt::Display for AnsoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnsoffStrategy {
    type Err = crate::error::StagegateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market_penetration" | "market-penetration" => Ok(AnsoffStrategy::MarketPenetration),
            "market_development" | "market-development" => Ok(AnsoffStrategy::MarketDevelopment),
            "product_development" | "product-development" => Ok(AnsoffStrategy::ProductDevelopment),
            "diversification" => Ok(AnsoffStrategy::Diversification),
            _ => Err(crate::error::StagegateError::InvalidAnsoffStrategy(
                s.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// SwotAnalysis / StrategicAnalysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SwotAnalysis {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weaknesses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub opportunities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub threats: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StrategicAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swot: Option<SwotAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcg: Option<BcgCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ansoff: Option<AnsoffStrategy>,
}

impl StrategicAnalysis {
    pub fn is_empty(&self) -> bool {
        self.swot.is_none() && self.bcg.is_none() && self.ansoff.is_none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
