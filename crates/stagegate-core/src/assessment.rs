//! Narrative-assessment collaborator: a single request/response against an
//! external text-generation endpoint. No retry, no backoff, no partial
//! results — a failure surfaces as one error and the caller may try again.

use crate::config::Language;
use crate::error::{Result, StagegateError};
use crate::scoring::Scoring;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// OverallRating
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallRating {
    VeryPromising,
    Promising,
    Moderate,
    Challenging,
    Critical,
}

impl OverallRating {
    /// Band a total score into a rating. The thresholds are part of the
    /// endpoint contract and must not drift.
    pub fn from_score(score: f64) -> Self {
        if score >= 4.5 {
            OverallRating::VeryPromising
        } else if score >= 3.5 {
            OverallRating::Promising
        } else if score >= 2.5 {
            OverallRating::Moderate
        } else if score >= 1.5 {
            OverallRating::Challenging
        } else {
            OverallRating::Critical
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OverallRating::VeryPromising => "very_promising",
            OverallRating::Promising => "promising",
            OverallRating::Moderate => "moderate",
            OverallRating::Challenging => "challenging",
            OverallRating::Critical => "critical",
        }
    }
}

impl fmt::Display for OverallRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentRequest {
    pub scoring: Scoring,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub answers: HashMap<String, u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub language: Language,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub pitfalls: Vec<String>,
    pub overall_rating: OverallRating,
}

// ---------------------------------------------------------------------------
// AssessmentClient
// ---------------------------------------------------------------------------

pub struct AssessmentClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl AssessmentClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// POST the request and decode the structured summary. Transport and
    /// decode failures collapse into [`StagegateError::Assessment`].
    pub fn assess(&self, request: &AssessmentRequest) -> Result<Assessment> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| StagegateError::Assessment(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StagegateError::Assessment(format!(
                "endpoint returned {status}"
            )));
        }

        response
            .json::<Assessment>()
            .map_err(|e| StagegateError::Assessment(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
