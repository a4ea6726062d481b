use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// The canonical stage order. `Closed` is terminal except for revert;
/// everything else forms a strict linear chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Idea,
    RoughScoring,
    Gate1,
    DetailedScoring,
    Gate2,
    BusinessCase,
    Gate3,
    GoToMarket,
    Closed,
}

impl Stage {
    pub fn all() -> &'static [Stage] {
        &[
            Stage::Idea,
            Stage::RoughScoring,
            Stage::Gate1,
            Stage::DetailedScoring,
            Stage::Gate2,
            Stage::BusinessCase,
            Stage::Gate3,
            Stage::GoToMarket,
            Stage::Closed,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Stage> {
        Stage::all().get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<Stage> {
        let i = self.index().checked_sub(1)?;
        Stage::all().get(i).copied()
    }

    /// Stage boundaries crossed by plain user action, without a gate decision.
    /// Gate stages advance only through a `go` decision.
    pub fn advances_freely(self) -> bool {
        matches!(
            self,
            Stage::Idea | Stage::RoughScoring | Stage::DetailedScoring | Stage::BusinessCase
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Idea => "idea",
            Stage::RoughScoring => "rough_scoring",
            Stage::Gate1 => "gate1",
            Stage::DetailedScoring => "detailed_scoring",
            Stage::Gate2 => "gate2",
            Stage::BusinessCase => "business_case",
            Stage::Gate3 => "gate3",
            Stage::GoToMarket => "go_to_market",
            Stage::Closed => "closed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    Gate1,
    Gate2,
    Gate3,
}

impl Gate {
    pub fn all() -> &'static [Gate] {
        &[Gate::Gate1, Gate::Gate2, Gate::Gate3]
    }

    /// The stage an opportunity must be in for this gate to be decided.
    pub fn stage(self) -> Stage {
        match self {
            Gate::Gate1 => Stage::Gate1,
            Gate::Gate2 => Stage::Gate2,
            Gate::Gate3 => Stage::Gate3,
        }
    }

    /// The stage entered on a `go` decision at this gate.
    pub fn stage_on_go(self) -> Stage {
        match self {
            Gate::Gate1 => Stage::DetailedScoring,
            Gate::Gate2 => Stage::BusinessCase,
            Gate::Gate3 => Stage::GoToMarket,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gate::Gate1 => "gate1",
            Gate::Gate2 => "gate2",
            Gate::Gate3 => "gate3",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gate {
    type Err = crate::error::StagegateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gate1" | "1" => Ok(Gate::Gate1),
            "gate2" | "2" => Ok(Gate::Gate2),
            "gate3" | "3" => Ok(Gate::Gate3),
            _ => Err(crate::error::StagegateError::InvalidGate(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Gate decision values. Serialized kebab-case so `NoGo` reads as `no-go`,
/// matching the persisted document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decision {
    Go,
    Hold,
    NoGo,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Go => "go",
            Decision::Hold => "hold",
            Decision::NoGo => "no-go",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Decision {
    type Err = crate::error::StagegateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "go" => Ok(Decision::Go),
            "hold" => Ok(Decision::Hold),
            "no-go" | "no_go" => Ok(Decision::NoGo),
            _ => Err(crate::error::StagegateError::InvalidDecision(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// CriterionKey
// ---------------------------------------------------------------------------

/// The five fixed rating dimensions. Weights are process-wide constants;
/// `Risk` is the one inverted criterion (higher score = more dangerous).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKey {
    MarketAttractiveness,
    StrategicFit,
    Feasibility,
    CommercialViability,
    Risk,
}

impl CriterionKey {
    pub fn all() -> &'static [CriterionKey] {
        &[
            CriterionKey::MarketAttractiveness,
            CriterionKey::StrategicFit,
            CriterionKey::Feasibility,
            CriterionKey::CommercialViability,
            CriterionKey::Risk,
        ]
    }

    pub fn weight(self) -> u32 {
        match self {
            CriterionKey::MarketAttractiveness => 3,
            CriterionKey::StrategicFit => 3,
            CriterionKey::Feasibility => 2,
            CriterionKey::CommercialViability => 2,
            CriterionKey::Risk => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CriterionKey::MarketAttractiveness => "market_attractiveness",
            CriterionKey::StrategicFit => "strategic_fit",
            CriterionKey::Feasibility => "feasibility",
            CriterionKey::CommercialViability => "commercial_viability",
            CriterionKey::Risk => "risk",
        }
    }
}

impl fmt::Display for CriterionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CriterionKey {
    type Err = crate::error::StagegateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market_attractiveness" | "market-attractiveness" | "ma" => {
                Ok(CriterionKey::MarketAttractiveness)
            }
            "strategic_fit" | "strategic-fit" | "sf" => Ok(CriterionKey::StrategicFit),
            "feasibility" | "fe" => Ok(CriterionKey::Feasibility),
            "commercial_viability" | "commercial-viability" | "cv" => {
                Ok(CriterionKey::CommercialViability)
            }
            "risk" | "ri" => Ok(CriterionKey::Risk),
            _ => Err(crate::error::StagegateError::InvalidCriterion(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
