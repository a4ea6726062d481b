use crate::error::{Result, StagegateError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const STAGEGATE_DIR: &str = ".stagegate";
pub const OPPORTUNITIES_DIR: &str = ".stagegate/opportunities";
pub const CONFIG_FILE: &str = ".stagegate/config.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn stagegate_dir(root: &Path) -> PathBuf {
    root.join(STAGEGATE_DIR)
}

pub fn opportunities_dir(root: &Path) -> PathBuf {
    root.join(OPPORTUNITIES_DIR)
}

pub fn opportunity_path(root: &Path, slug: &str) -> PathBuf {
    opportunities_dir(root).join(format!("{slug}.json"))
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// Slug validation
// ---------------------------------------------------------------------------

static SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn slug_re() -> &'static Regex {
    SLUG_RE.get_or_init(|| Regex::new(r"^[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?$").unwrap())
}

pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() || slug.len() > 64 || !slug_re().is_match(slug) {
        return Err(StagegateError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
