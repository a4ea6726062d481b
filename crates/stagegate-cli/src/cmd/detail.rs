use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use stagegate_core::{opportunity::Opportunity, types::CriterionKey};
use std::path::Path;
use std::str::FromStr;

#[derive(Subcommand)]
pub enum DetailSubcommand {
    /// Set one detailed-scoring dimension
    Set {
        slug: String,
        /// Criterion name or short code (ma|sf|fe|cv|ri)
        #[arg(long)]
        criterion: String,
        /// Score value (1-5)
        #[arg(long)]
        score: u8,
        #[arg(long)]
        justification: Option<String>,
        /// Supporting data point, repeatable (replaces the existing list)
        #[arg(long = "data", value_name = "TEXT")]
        data_points: Vec<String>,
    },

    /// Show the detailed scoring with its average and weighted figure
    Show { slug: String },
}

pub fn run(root: &Path, subcmd: DetailSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        DetailSubcommand::Set {
            slug,
            criterion,
            score,
            justification,
            data_points,
        } => set(root, &slug, &criterion, score, justification, data_points, json),
        DetailSubcommand::Show { slug } => show(root, &slug, json),
    }
}

fn set(
    root: &Path,
    slug: &str,
    criterion: &str,
    score: u8,
    justification: Option<String>,
    data_points: Vec<String>,
    json: bool,
) -> anyhow::Result<()> {
    if !(1..=5).contains(&score) {
        anyhow::bail!("score value must be 1-5, got {score}");
    }
    let key = CriterionKey::from_str(criterion)
        .with_context(|| format!("unknown criterion: {criterion}"))?;

    let mut opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;
    let detailed = opportunity.detailed_scoring.as_mut().with_context(|| {
        format!("'{slug}' has no detailed scoring yet (it starts at the detailed_scoring stage)")
    })?;

    let entry = detailed.get_mut(key);
    entry.score = score;
    if let Some(j) = justification {
        entry.justification = j;
    }
    if !data_points.is_empty() {
        entry.data_points = data_points;
    }
    opportunity.save(root).context("failed to save opportunity")?;

    if json {
        print_json(&serde_json::json!({
            "slug": slug,
            "criterion": key.to_string(),
            "score": score,
        }))?;
    } else {
        println!("Detailed score set: {slug} [{key}] = {score}");
    }
    Ok(())
}

fn show(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;
    let detailed = opportunity.detailed_scoring.as_ref().with_context(|| {
        format!("'{slug}' has no detailed scoring yet (it starts at the detailed_scoring stage)")
    })?;

    if json {
        print_json(&serde_json::json!({
            "slug": slug,
            "detailed_scoring": detailed,
            "average": detailed.average()?,
            "weighted_total": detailed.weighted_total()?,
        }))?;
        return Ok(());
    }

    println!("Detailed scoring for '{slug}':");
    for &key in CriterionKey::all() {
        let criterion = detailed.get(key);
        println!("  {:<24} {}", key.to_string(), criterion.score);
        if !criterion.justification.is_empty() {
            println!("    {}", criterion.justification);
        }
        for point in &criterion.data_points {
            println!("    - {point}");
        }
    }
    println!("\nAverage:  {}", detailed.average()?);
    println!("Weighted: {}", detailed.weighted_total()?);
    Ok(())
}
