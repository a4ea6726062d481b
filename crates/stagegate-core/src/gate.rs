use crate::types::{Decision, Gate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// GateRecord
// ---------------------------------------------------------------------------

/// One logged gate decision. Immutable once created except through the
/// explicit edit/delete operations on [`crate::opportunity::Opportunity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateRecord {
    pub id: Uuid,
    pub gate: Gate,
    pub decision: Decision,
    #[serde(default)]
    pub comment: String,
    pub decider: String,
    pub date: DateTime<Utc>,
}

impl GateRecord {
    pub fn new(
        gate: Gate,
        decision: Decision,
        decider: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            gate,
            decision,
            comment: comment.into(),
            decider: decider.into(),
            date: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_records_get_distinct_ids() {
        let a = GateRecord::new(Gate::Gate1, Decision::Go, "m.weber", "");
        let b = GateRecord::new(Gate::Gate1, Decision::Go, "m.weber", "");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn record_json_roundtrip() {
        let record = GateRecord::new(Gate::Gate2, Decision::NoGo, "j.lang", "margin too thin");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"gate2\""));
        assert!(json.contains("\"no-go\""));
        let parsed: GateRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
