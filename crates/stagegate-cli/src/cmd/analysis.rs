use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use stagegate_core::{
    analysis::{AnsoffStrategy, BcgCategory, SwotAnalysis},
    opportunity::Opportunity,
};
use std::path::Path;
use std::str::FromStr;

#[derive(Subcommand)]
pub enum AnalysisSubcommand {
    /// Replace the SWOT lists
    Swot {
        slug: String,
        #[arg(long = "strength", value_name = "TEXT")]
        strengths: Vec<String>,
        #[arg(long = "weakness", value_name = "TEXT")]
        weaknesses: Vec<String>,
        #[arg(long = "opportunity", value_name = "TEXT")]
        opportunities: Vec<String>,
        #[arg(long = "threat", value_name = "TEXT")]
        threats: Vec<String>,
    },

    /// Set the BCG portfolio category (question_mark|star|cash_cow|dog)
    Bcg { slug: String, category: String },

    /// Set the Ansoff growth strategy
    Ansoff { slug: String, strategy: String },

    /// Show the strategic analysis
    Show { slug: String },
}

pub fn run(root: &Path, subcmd: AnalysisSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        AnalysisSubcommand::Swot {
            slug,
            strengths,
            weaknesses,
            opportunities,
            threats,
        } => {
            let swot = SwotAnalysis {
                strengths,
                weaknesses,
                opportunities,
                threats,
            };
            update(root, &slug, json, |o| o.analysis.swot = Some(swot))
        }
        AnalysisSubcommand::Bcg { slug, category } => {
            let category = BcgCategory::from_str(&category)
                .with_context(|| format!("unknown BCG category: {category}"))?;
            update(root, &slug, json, |o| o.analysis.bcg = Some(category))
        }
        AnalysisSubcommand::Ansoff { slug, strategy } => {
            let strategy = AnsoffStrategy::from_str(&strategy)
                .with_context(|| format!("unknown Ansoff strategy: {strategy}"))?;
            update(root, &slug, json, |o| o.analysis.ansoff = Some(strategy))
        }
        AnalysisSubcommand::Show { slug } => show(root, &slug, json),
    }
}

fn update(
    root: &Path,
    slug: &str,
    json: bool,
    apply: impl FnOnce(&mut Opportunity),
) -> anyhow::Result<()> {
    let mut opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;
    apply(&mut opportunity);
    opportunity.save(root).context("failed to save opportunity")?;

    if json {
        print_json(&opportunity.analysis)?;
    } else {
        println!("Analysis updated for '{slug}'");
    }
    Ok(())
}

fn show(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;

    if json {
        print_json(&opportunity.analysis)?;
        return Ok(());
    }

    if opportunity.analysis.is_empty() {
        println!("No strategic analysis for '{slug}' yet.");
        return Ok(());
    }

    if let Some(ref swot) = opportunity.analysis.swot {
        println!("SWOT:");
        for (label, items) in [
            ("strengths", &swot.strengths),
            ("weaknesses", &swot.weaknesses),
            ("opportunities", &swot.opportunities),
            ("threats", &swot.threats),
        ] {
            if !items.is_empty() {
                println!("  {label}:");
                for item in items {
                    println!("    - {item}");
                }
            }
        }
    }
    if let Some(bcg) = opportunity.analysis.bcg {
        println!("BCG:    {bcg}");
    }
    if let Some(ansoff) = opportunity.analysis.ansoff {
        println!("Ansoff: {ansoff}");
    }
    Ok(())
}
