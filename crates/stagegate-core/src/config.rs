use crate::error::{Result, StagegateError};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Narrative-assessment output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = StagegateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            _ => Err(StagegateError::InvalidLanguage(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    pub project: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_endpoint: Option<String>,
}

fn default_version() -> u32 {
    1
}

impl Config {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            version: 1,
            project: project.into(),
            language: Language::default(),
            default_owner: None,
            assessment_endpoint: None,
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(StagegateError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
