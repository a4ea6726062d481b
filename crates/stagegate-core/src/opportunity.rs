use crate::analysis::StrategicAnalysis;
use crate::business_case::BusinessCase;
use crate::error::{Result, StagegateError};
use crate::gate::GateRecord;
use crate::paths;
use crate::scoring::{DetailedScoring, Scoring};
use crate::types::{Decision, Gate, Stage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// OpportunityDetails
// ---------------------------------------------------------------------------

/// Optional descriptive fields captured at creation time.
#[derive(Debug, Clone, Default)]
pub struct OpportunityDetails {
    pub description: Option<String>,
    pub industry: Option<String>,
    pub geography: Option<String>,
    pub technology: Option<String>,
    pub owner: Option<String>,
}

// ---------------------------------------------------------------------------
// Opportunity
// ---------------------------------------------------------------------------

/// One tracked business idea moving through the pipeline.
///
/// All stage transitions are pure in-memory mutations; callers persist the
/// whole document afterwards with [`Opportunity::save`]. A transition that
/// fails leaves the record untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub stage: Stage,
    pub scoring: Scoring,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_scoring: Option<DetailedScoring>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_case: Option<BusinessCase>,
    #[serde(default, skip_serializing_if = "StrategicAnalysis::is_empty")]
    pub analysis: StrategicAnalysis,
    #[serde(default)]
    pub gates: Vec<GateRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Opportunity {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            slug: slug.into(),
            title: title.into(),
            description: None,
            industry: None,
            geography: None,
            technology: None,
            owner: None,
            stage: Stage::Idea,
            scoring: Scoring::default(),
            detailed_scoring: None,
            business_case: None,
            analysis: StrategicAnalysis::default(),
            gates: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    pub fn create(root: &Path, slug: impl Into<String>, title: impl Into<String>) -> Result<Self> {
        Self::create_with_details(root, slug, title, OpportunityDetails::default())
    }

    pub fn create_with_details(
        root: &Path,
        slug: impl Into<String>,
        title: impl Into<String>,
        details: OpportunityDetails,
    ) -> Result<Self> {
        let slug = slug.into();
        paths::validate_slug(&slug)?;

        if paths::opportunity_path(root, &slug).exists() {
            return Err(StagegateError::OpportunityExists(slug));
        }

        let mut opportunity = Self::new(slug, title);
        opportunity.description = details.description;
        opportunity.industry = details.industry;
        opportunity.geography = details.geography;
        opportunity.technology = details.technology;
        opportunity.owner = details.owner;
        opportunity.save(root)?;
        Ok(opportunity)
    }

    pub fn load(root: &Path, slug: &str) -> Result<Self> {
        paths::validate_slug(slug)?;
        let path = paths::opportunity_path(root, slug);
        if !path.exists() {
            return Err(StagegateError::OpportunityNotFound(slug.to_string()));
        }
        let data = std::fs::read_to_string(&path)?;
        let opportunity: Opportunity = serde_json::from_str(&data)?;
        Ok(opportunity)
    }

    /// Whole-document upsert, written atomically.
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::opportunity_path(root, &self.slug);
        let data = serde_json::to_vec_pretty(self)?;
        crate::io::atomic_write(&path, &data)
    }

    /// All opportunities, newest first.
    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let dir = paths::opportunities_dir(root);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut opportunities = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let data = std::fs::read_to_string(&path)?;
            let opportunity: Opportunity = serde_json::from_str(&data)?;
            opportunities.push(opportunity);
        }
        opportunities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(opportunities)
    }

    pub fn delete(root: &Path, slug: &str) -> Result<()> {
        paths::validate_slug(slug)?;
        let path = paths::opportunity_path(root, slug);
        if !path.exists() {
            return Err(StagegateError::OpportunityNotFound(slug.to_string()));
        }
        std::fs::remove_file(&path)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Stage machine
    // -----------------------------------------------------------------------

    /// Simple forward move across a non-gate boundary. Gate stages only
    /// advance through a `go` decision, and `go_to_market`/`closed` have no
    /// free successor.
    pub fn advance(&mut self) -> Result<Stage> {
        if !self.stage.advances_freely() {
            return Err(StagegateError::InvalidTransition {
                from: self.stage.to_string(),
                reason: "stage advances only through a gate decision".to_string(),
            });
        }
        let next = self.stage.next().ok_or_else(|| StagegateError::InvalidTransition {
            from: self.stage.to_string(),
            reason: "no successor stage".to_string(),
        })?;
        self.enter(next);
        Ok(next)
    }

    /// Record a go/hold/no-go decision at a gate. Always appends one fresh
    /// [`GateRecord`]; `hold` is a logged decision with no transition.
    /// Returns the new record's id.
    pub fn decide_gate(
        &mut self,
        gate: Gate,
        decision: Decision,
        decider: &str,
        comment: &str,
    ) -> Result<Uuid> {
        if self.stage != gate.stage() {
            return Err(StagegateError::InvalidTransition {
                from: self.stage.to_string(),
                reason: format!("{gate} decisions require stage {}", gate.stage()),
            });
        }
        let decider = decider.trim();
        if decider.is_empty() {
            return Err(StagegateError::MissingDecider);
        }

        let record = GateRecord::new(gate, decision, decider, comment);
        let id = record.id;
        self.gates.push(record);

        match decision {
            Decision::Go => self.enter(gate.stage_on_go()),
            Decision::NoGo => self.enter(Stage::Closed),
            Decision::Hold => self.touch(),
        }
        Ok(id)
    }

    /// Move one stage back and drop gate decisions that are now in the
    /// future relative to the new stage. Returns `false` (no-op) when
    /// already at the first stage.
    pub fn revert(&mut self) -> bool {
        let Some(prev) = self.stage.prev() else {
            return false;
        };
        let new_index = prev.index();
        self.gates
            .retain(|record| record.gate.stage().index() < new_index);
        self.stage = prev;
        self.touch();
        true
    }

    fn enter(&mut self, stage: Stage) {
        if stage == Stage::DetailedScoring && self.detailed_scoring.is_none() {
            self.detailed_scoring = Some(DetailedScoring::default());
        }
        if stage == Stage::BusinessCase && self.business_case.is_none() {
            self.business_case = Some(BusinessCase::default());
        }
        self.stage = stage;
        self.touch();
    }

    // -----------------------------------------------------------------------
    // Gate record maintenance
    // -----------------------------------------------------------------------
    //
    // Edits and deletes are plain list operations on `gates`; they never
    // recompute `stage`. A record edited from go to no-go therefore leaves
    // the stage where the original decision put it.

    pub fn edit_gate(
        &mut self,
        id: Uuid,
        decision: Option<Decision>,
        decider: Option<&str>,
        comment: Option<&str>,
    ) -> Result<()> {
        let decider = match decider {
            Some(d) => {
                let d = d.trim();
                if d.is_empty() {
                    return Err(StagegateError::MissingDecider);
                }
                Some(d.to_string())
            }
            None => None,
        };

        let record = self
            .gates
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StagegateError::GateRecordNotFound(id.to_string()))?;
        if let Some(d) = decision {
            record.decision = d;
        }
        if let Some(d) = decider {
            record.decider = d;
        }
        if let Some(c) = comment {
            record.comment = c.to_string();
        }
        self.touch();
        Ok(())
    }

    pub fn delete_gate(&mut self, id: Uuid) -> Result<()> {
        let before = self.gates.len();
        self.gates.retain(|r| r.id != id);
        if self.gates.len() == before {
            return Err(StagegateError::GateRecordNotFound(id.to_string()));
        }
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn opp() -> Opportunity {
        Opportunity::new("smart-valve", "Smart Valve Retrofit")
    }

    /// Walk a fresh opportunity to the given stage through the legal path.
    fn opp_at(stage: Stage) -> Opportunity {
        let mut o = opp();
        loop {
            if o.stage == stage {
                return o;
            }
            match o.stage {
                Stage::Idea | Stage::RoughScoring | Stage::DetailedScoring | Stage::BusinessCase => {
                    o.advance().unwrap();
                }
                Stage::Gate1 => {
                    o.decide_gate(Gate::Gate1, Decision::Go, "m.weber", "").unwrap();
                }
                Stage::Gate2 => {
                    o.decide_gate(Gate::Gate2, Decision::Go, "m.weber", "").unwrap();
                }
                Stage::Gate3 => {
                    o.decide_gate(Gate::Gate3, Decision::Go, "m.weber", "").unwrap();
                }
                other => panic!("cannot route to {stage} from {other}"),
            }
        }
    }

    #[test]
    fn new_opportunity_defaults() {
        let o = opp();
        assert_eq!(o.stage, Stage::Idea);
        assert_eq!(o.scoring.total().unwrap(), 3.0);
        assert!(o.detailed_scoring.is_none());
        assert!(o.business_case.is_none());
        assert!(o.gates.is_empty());
    }

    #[test]
    fn advance_follows_the_chain() {
        let mut o = opp();
        assert_eq!(o.advance().unwrap(), Stage::RoughScoring);
        assert_eq!(o.advance().unwrap(), Stage::Gate1);
        // Gate stages do not advance freely.
        assert!(matches!(
            o.advance(),
            Err(StagegateError::InvalidTransition { .. })
        ));
        assert_eq!(o.stage, Stage::Gate1);
    }

    #[test]
    fn go_at_gate1_enters_detailed_scoring() {
        let mut o = opp_at(Stage::Gate1);
        o.decide_gate(Gate::Gate1, Decision::Go, "m.weber", "solid rough score")
            .unwrap();
        assert_eq!(o.stage, Stage::DetailedScoring);
        assert!(o.detailed_scoring.is_some(), "lazily initialized");
        assert_eq!(o.gates.len(), 1);
        assert_eq!(o.gates[0].gate, Gate::Gate1);
        assert_eq!(o.gates[0].decision, Decision::Go);
    }

    #[test]
    fn go_at_gate2_initializes_business_case() {
        let mut o = opp_at(Stage::Gate2);
        assert!(o.business_case.is_none());
        o.decide_gate(Gate::Gate2, Decision::Go, "m.weber", "").unwrap();
        assert_eq!(o.stage, Stage::BusinessCase);
        assert_eq!(o.business_case, Some(BusinessCase::default()));
    }

    #[test]
    fn go_at_gate3_reaches_go_to_market() {
        let mut o = opp_at(Stage::Gate3);
        o.decide_gate(Gate::Gate3, Decision::Go, "m.weber", "").unwrap();
        assert_eq!(o.stage, Stage::GoToMarket);
    }

    #[test]
    fn no_go_closes_at_any_gate() {
        for &gate in Gate::all() {
            let mut o = opp_at(gate.stage());
            o.decide_gate(gate, Decision::NoGo, "m.weber", "no fit").unwrap();
            assert_eq!(o.stage, Stage::Closed, "no-go at {gate}");
        }
    }

    #[test]
    fn hold_logs_without_transition() {
        let mut o = opp_at(Stage::Gate1);
        o.decide_gate(Gate::Gate1, Decision::Hold, "m.weber", "awaiting pilot data")
            .unwrap();
        assert_eq!(o.stage, Stage::Gate1);
        assert_eq!(o.gates.len(), 1);
        assert_eq!(o.gates[0].decision, Decision::Hold);
    }

    #[test]
    fn decision_outside_gate_stage_rejected() {
        let mut o = opp();
        let err = o
            .decide_gate(Gate::Gate1, Decision::Go, "m.weber", "")
            .unwrap_err();
        assert!(matches!(err, StagegateError::InvalidTransition { .. }));
        assert!(o.gates.is_empty(), "no partial record");
        assert_eq!(o.stage, Stage::Idea);

        // Wrong gate for the current gate stage is also rejected.
        let mut o = opp_at(Stage::Gate1);
        assert!(o.decide_gate(Gate::Gate2, Decision::Go, "m.weber", "").is_err());
    }

    #[test]
    fn empty_decider_rejected_before_mutation() {
        let mut o = opp_at(Stage::Gate1);
        for decider in ["", "   ", "\t"] {
            let err = o.decide_gate(Gate::Gate1, Decision::Go, decider, "").unwrap_err();
            assert!(matches!(err, StagegateError::MissingDecider));
        }
        assert!(o.gates.is_empty());
        assert_eq!(o.stage, Stage::Gate1);
    }

    #[test]
    fn decider_is_trimmed() {
        let mut o = opp_at(Stage::Gate1);
        o.decide_gate(Gate::Gate1, Decision::Hold, "  m.weber  ", "").unwrap();
        assert_eq!(o.gates[0].decider, "m.weber");
    }

    #[test]
    fn revert_from_business_case_prunes_future_gates() {
        let mut o = opp_at(Stage::BusinessCase);
        // History so far: gate1 go, gate2 go.
        assert_eq!(o.gates.len(), 2);

        assert!(o.revert());
        assert_eq!(o.stage, Stage::Gate2);
        // gate2 records (stage index 4 >= 4) pruned; gate1 (index 2) kept.
        assert_eq!(o.gates.len(), 1);
        assert_eq!(o.gates[0].gate, Gate::Gate1);
    }

    #[test]
    fn revert_from_idea_is_a_no_op() {
        let mut o = opp();
        let before = o.clone();
        assert!(!o.revert());
        assert_eq!(o.stage, before.stage);
        assert_eq!(o.gates, before.gates);
    }

    #[test]
    fn revert_from_detailed_scoring_prunes_gate1() {
        let mut o = opp_at(Stage::DetailedScoring);
        assert_eq!(o.gates.len(), 1);
        assert!(o.revert());
        assert_eq!(o.stage, Stage::Gate1);
        // gate1's stage index (2) >= new index (2) → pruned.
        assert!(o.gates.is_empty());
    }

    #[test]
    fn revert_from_closed_returns_to_go_to_market() {
        let mut o = opp_at(Stage::Gate3);
        o.decide_gate(Gate::Gate3, Decision::NoGo, "m.weber", "").unwrap();
        assert_eq!(o.stage, Stage::Closed);

        assert!(o.revert());
        assert_eq!(o.stage, Stage::GoToMarket);
        // No gate maps to a stage at or beyond go_to_market; history survives.
        assert_eq!(o.gates.len(), 3);
    }

    #[test]
    fn edit_gate_preserves_identity_and_stage() {
        let mut o = opp_at(Stage::DetailedScoring);
        let id = o.gates[0].id;
        o.edit_gate(id, Some(Decision::Hold), Some("j.lang"), Some("revisited"))
            .unwrap();

        assert_eq!(o.gates[0].id, id);
        assert_eq!(o.gates[0].decision, Decision::Hold);
        assert_eq!(o.gates[0].decider, "j.lang");
        assert_eq!(o.gates[0].comment, "revisited");
        // Known inconsistency, preserved: the stage set by the original go
        // decision is not recomputed.
        assert_eq!(o.stage, Stage::DetailedScoring);
    }

    #[test]
    fn edit_gate_rejects_empty_decider_without_touching_record() {
        let mut o = opp_at(Stage::DetailedScoring);
        let id = o.gates[0].id;
        let err = o
            .edit_gate(id, Some(Decision::NoGo), Some("  "), None)
            .unwrap_err();
        assert!(matches!(err, StagegateError::MissingDecider));
        assert_eq!(o.gates[0].decision, Decision::Go);
    }

    #[test]
    fn edit_unknown_gate_record_fails() {
        let mut o = opp();
        assert!(matches!(
            o.edit_gate(Uuid::new_v4(), None, None, Some("x")),
            Err(StagegateError::GateRecordNotFound(_))
        ));
    }

    #[test]
    fn delete_gate_splices_without_stage_recompute() {
        let mut o = opp_at(Stage::DetailedScoring);
        let id = o.gates[0].id;
        o.delete_gate(id).unwrap();
        assert!(o.gates.is_empty());
        assert_eq!(o.stage, Stage::DetailedScoring);

        assert!(matches!(
            o.delete_gate(id),
            Err(StagegateError::GateRecordNotFound(_))
        ));
    }

    #[test]
    fn full_pipeline_walk() {
        let mut o = opp();
        o.advance().unwrap(); // rough_scoring
        o.advance().unwrap(); // gate1
        o.decide_gate(Gate::Gate1, Decision::Go, "m.weber", "").unwrap();
        o.advance().unwrap(); // gate2
        o.decide_gate(Gate::Gate2, Decision::Go, "m.weber", "").unwrap();
        o.advance().unwrap(); // gate3
        o.decide_gate(Gate::Gate3, Decision::Go, "m.weber", "").unwrap();
        assert_eq!(o.stage, Stage::GoToMarket);
        assert_eq!(o.gates.len(), 3);
        assert!(o.detailed_scoring.is_some());
        assert!(o.business_case.is_some());
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    #[test]
    fn create_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let details = OpportunityDetails {
            description: Some("Retrofit kit for industrial valves".to_string()),
            industry: Some("manufacturing".to_string()),
            owner: Some("m.weber".to_string()),
            ..Default::default()
        };
        Opportunity::create_with_details(dir.path(), "smart-valve", "Smart Valve", details)
            .unwrap();

        let loaded = Opportunity::load(dir.path(), "smart-valve").unwrap();
        assert_eq!(loaded.title, "Smart Valve");
        assert_eq!(loaded.owner.as_deref(), Some("m.weber"));
        assert_eq!(loaded.stage, Stage::Idea);
    }

    #[test]
    fn create_duplicate_fails() {
        let dir = TempDir::new().unwrap();
        Opportunity::create(dir.path(), "idea-x", "Idea X").unwrap();
        assert!(matches!(
            Opportunity::create(dir.path(), "idea-x", "Idea X again"),
            Err(StagegateError::OpportunityExists(_))
        ));
    }

    #[test]
    fn create_invalid_slug_fails() {
        let dir = TempDir::new().unwrap();
        assert!(Opportunity::create(dir.path(), "Bad Slug", "X").is_err());
    }

    #[test]
    fn load_missing_fails() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Opportunity::load(dir.path(), "nope"),
            Err(StagegateError::OpportunityNotFound(_))
        ));
    }

    #[test]
    fn list_is_newest_first() {
        let dir = TempDir::new().unwrap();
        let mut a = Opportunity::new("first", "First");
        let mut b = Opportunity::new("second", "Second");
        a.created_at = "2026-01-01T00:00:00Z".parse().unwrap();
        b.created_at = "2026-03-01T00:00:00Z".parse().unwrap();
        a.save(dir.path()).unwrap();
        b.save(dir.path()).unwrap();

        let all = Opportunity::list(dir.path()).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].slug, "second");
        assert_eq!(all[1].slug, "first");
    }

    #[test]
    fn list_on_uninitialized_root_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(Opportunity::list(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn delete_removes_document() {
        let dir = TempDir::new().unwrap();
        Opportunity::create(dir.path(), "gone", "Gone").unwrap();
        Opportunity::delete(dir.path(), "gone").unwrap();
        assert!(matches!(
            Opportunity::load(dir.path(), "gone"),
            Err(StagegateError::OpportunityNotFound(_))
        ));
        assert!(Opportunity::delete(dir.path(), "gone").is_err());
    }

    #[test]
    fn save_preserves_full_state() {
        let dir = TempDir::new().unwrap();
        let mut o = opp_at(Stage::BusinessCase);
        o.scoring.market_attractiveness.score = 5;
        if let Some(case) = o.business_case.as_mut() {
            case.investment = 50_000.0;
        }
        o.save(dir.path()).unwrap();

        let loaded = Opportunity::load(dir.path(), "smart-valve").unwrap();
        assert_eq!(loaded.stage, Stage::BusinessCase);
        assert_eq!(loaded.scoring.market_attractiveness.score, 5);
        assert_eq!(loaded.gates.len(), 2);
        assert_eq!(
            loaded.business_case.as_ref().map(|c| c.investment),
            Some(50_000.0)
        );
    }
}
