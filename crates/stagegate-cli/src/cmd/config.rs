use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use stagegate_core::config::{Config, Language};
use std::path::Path;
use std::str::FromStr;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the project configuration
    Show,

    /// Update configuration values
    Set {
        /// Assessment language (en|de)
        #[arg(long)]
        language: Option<String>,
        /// Default owner for new opportunities
        #[arg(long)]
        default_owner: Option<String>,
        /// Narrative-assessment endpoint URL
        #[arg(long)]
        endpoint: Option<String>,
    },
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Set {
            language,
            default_owner,
            endpoint,
        } => set(root, language, default_owner, endpoint, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config (run 'stagegate init')")?;

    if json {
        print_json(&config)?;
        return Ok(());
    }

    println!("Project:  {}", config.project);
    println!("Language: {}", config.language);
    if let Some(ref owner) = config.default_owner {
        println!("Owner:    {owner}");
    }
    if let Some(ref endpoint) = config.assessment_endpoint {
        println!("Endpoint: {endpoint}");
    }
    Ok(())
}

fn set(
    root: &Path,
    language: Option<String>,
    default_owner: Option<String>,
    endpoint: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = Config::load(root).context("failed to load config (run 'stagegate init')")?;

    if let Some(l) = language {
        config.language = Language::from_str(&l).with_context(|| format!("unknown language: {l}"))?;
    }
    if let Some(o) = default_owner {
        config.default_owner = Some(o);
    }
    if let Some(e) = endpoint {
        config.assessment_endpoint = Some(e);
    }
    config.save(root).context("failed to save config")?;

    if json {
        print_json(&config)?;
    } else {
        println!("Configuration updated.");
    }
    Ok(())
}
