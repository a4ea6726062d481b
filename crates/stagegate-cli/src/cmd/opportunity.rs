use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use stagegate_core::{
    assessment::OverallRating,
    config::Config,
    opportunity::{Opportunity, OpportunityDetails},
};
use std::path::Path;

#[derive(Subcommand)]
pub enum OpportunitySubcommand {
    /// Create a new opportunity (starts in stage 'idea' with a neutral scoring)
    Create {
        slug: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        geography: Option<String>,
        #[arg(long)]
        technology: Option<String>,
        /// Defaults to the configured default owner
        #[arg(long)]
        owner: Option<String>,
    },
    /// List all opportunities, newest first
    List,
    /// Show opportunity details
    Show { slug: String },
    /// Delete an opportunity
    Delete { slug: String },
}

pub fn run(root: &Path, subcmd: OpportunitySubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        OpportunitySubcommand::Create {
            slug,
            title,
            description,
            industry,
            geography,
            technology,
            owner,
        } => {
            let details = OpportunityDetails {
                description,
                industry,
                geography,
                technology,
                owner,
            };
            create(root, &slug, title, details, json)
        }
        OpportunitySubcommand::List => list(root, json),
        OpportunitySubcommand::Show { slug } => show(root, &slug, json),
        OpportunitySubcommand::Delete { slug } => delete(root, &slug, json),
    }
}

fn create(
    root: &Path,
    slug: &str,
    title: Option<String>,
    mut details: OpportunityDetails,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config (run 'stagegate init')")?;
    if details.owner.is_none() {
        details.owner = config.default_owner.clone();
    }

    let title = title.unwrap_or_else(|| slug.replace('-', " "));
    let opportunity = Opportunity::create_with_details(root, slug, &title, details)
        .with_context(|| format!("failed to create opportunity '{slug}'"))?;

    if json {
        print_json(&opportunity)?;
    } else {
        println!("Created opportunity: {slug} — {title}");
        println!("Next: stagegate score set {slug} --criterion ma --value <1-5>");
    }
    Ok(())
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let opportunities = Opportunity::list(root).context("failed to list opportunities")?;

    if json {
        let summaries: Vec<_> = opportunities
            .iter()
            .map(|o| {
                serde_json::json!({
                    "slug": o.slug,
                    "title": o.title,
                    "stage": o.stage.to_string(),
                    "owner": o.owner,
                    "created_at": o.created_at,
                })
            })
            .collect();
        print_json(&summaries)?;
        return Ok(());
    }

    if opportunities.is_empty() {
        println!("No opportunities yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = opportunities
        .iter()
        .map(|o| {
            vec![
                o.slug.clone(),
                o.stage.to_string(),
                o.owner.clone().unwrap_or_default(),
                o.title.clone(),
            ]
        })
        .collect();
    print_table(&["SLUG", "STAGE", "OWNER", "TITLE"], rows);
    Ok(())
}

fn show(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;

    if json {
        print_json(&opportunity)?;
        return Ok(());
    }

    println!("Opportunity: {} — {}", opportunity.slug, opportunity.title);
    if let Some(ref desc) = opportunity.description {
        println!("Desc:     {desc}");
    }
    for (label, value) in [
        ("Industry", &opportunity.industry),
        ("Geography", &opportunity.geography),
        ("Tech", &opportunity.technology),
        ("Owner", &opportunity.owner),
    ] {
        if let Some(v) = value {
            println!("{label}: {v}");
        }
    }
    println!("Stage:    {}", opportunity.stage);
    println!(
        "Created:  {}",
        opportunity.created_at.format("%Y-%m-%d %H:%M")
    );

    let total = opportunity.scoring.total()?;
    println!(
        "\nRough score: {total} ({})",
        OverallRating::from_score(total)
    );

    if let Some(ref detailed) = opportunity.detailed_scoring {
        println!(
            "Detailed:    avg {} / weighted {}",
            detailed.average()?,
            detailed.weighted_total()?
        );
    }
    if let Some(ref case) = opportunity.business_case {
        match case.payback_year() {
            Some(year) => println!("Case:        payback in year {year}"),
            None => println!("Case:        no payback within planning horizon"),
        }
    }

    if !opportunity.gates.is_empty() {
        println!("\nGate history:");
        for record in &opportunity.gates {
            println!(
                "  {} {} {} by {} ({})",
                record.date.format("%Y-%m-%d"),
                record.gate,
                record.decision,
                record.decider,
                record.id
            );
        }
    }

    Ok(())
}

fn delete(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    Opportunity::delete(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;
    if json {
        print_json(&serde_json::json!({ "slug": slug, "deleted": true }))?;
    } else {
        println!("Deleted opportunity: {slug}");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Stage transitions (top-level subcommands)
// ---------------------------------------------------------------------------

pub fn advance(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let mut opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;

    let stage = opportunity
        .advance()
        .with_context(|| format!("cannot advance '{slug}'"))?;
    opportunity.save(root).context("failed to save opportunity")?;

    if json {
        print_json(&serde_json::json!({ "slug": slug, "stage": stage.to_string() }))?;
    } else {
        println!("Advanced '{slug}' to {stage}");
    }
    Ok(())
}

pub fn revert(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let mut opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;

    let reverted = opportunity.revert();
    if reverted {
        opportunity.save(root).context("failed to save opportunity")?;
    }

    if json {
        print_json(&serde_json::json!({
            "slug": slug,
            "stage": opportunity.stage.to_string(),
            "reverted": reverted,
        }))?;
    } else if reverted {
        println!("Reverted '{slug}' to {}", opportunity.stage);
    } else {
        println!("'{slug}' is already at the first stage; nothing to revert.");
    }
    Ok(())
}
