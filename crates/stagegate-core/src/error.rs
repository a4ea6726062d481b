use thiserror::Error;

#[derive(Debug, Error)]
pub enum StagegateError {
    #[error("not initialized: run 'stagegate init'")]
    NotInitialized,

    #[error("opportunity not found: {0}")]
    OpportunityNotFound(String),

    #[error("opportunity already exists: {0}")]
    OpportunityExists(String),

    #[error("invalid slug '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidSlug(String),

    #[error("invalid gate: {0}")]
    InvalidGate(String),

    #[error("invalid decision '{0}': must be go, hold, or no-go")]
    InvalidDecision(String),

    #[error("invalid criterion: {0}")]
    InvalidCriterion(String),

    #[error("invalid language '{0}': must be en or de")]
    InvalidLanguage(String),

    #[error("invalid BCG category: {0}")]
    InvalidBcgCategory(String),

    #[error("invalid Ansoff strategy: {0}")]
    InvalidAnsoffStrategy(String),

    #[error("invalid transition from {from}: {reason}")]
    InvalidTransition { from: String, reason: String },

    #[error("score for {criterion} out of range: {value} (must be 1-5)")]
    ScoreOutOfRange { criterion: String, value: u8 },

    #[error("decider must not be empty")]
    MissingDecider,

    #[error("gate record not found: {0}")]
    GateRecordNotFound(String),

    #[error("assessment request failed: {0}")]
    Assessment(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StagegateError>;
