use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use stagegate_core::{
    assessment::OverallRating,
    opportunity::Opportunity,
    questionnaire::{answers_to_scoring, questions},
    types::CriterionKey,
};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

#[derive(Subcommand)]
pub enum ScoreSubcommand {
    /// Set one criterion directly (slider entry)
    Set {
        slug: String,
        /// Criterion (market_attractiveness|strategic_fit|feasibility|commercial_viability|risk, or ma|sf|fe|cv|ri)
        #[arg(long)]
        criterion: String,
        /// Score value (1-5; for risk, 5 = highest danger)
        #[arg(long)]
        value: u8,
        #[arg(long)]
        comment: Option<String>,
    },

    /// Reduce wizard answers into the rough scoring
    Wizard {
        slug: String,
        /// Answer as <question-id>=<1-5>, repeatable; unanswered questions
        /// leave their criterion at its current value
        #[arg(long = "answer", value_name = "ID=VALUE")]
        answers: Vec<String>,
    },

    /// List the wizard question catalog
    Questions,

    /// Show the rough scoring and its total
    Show { slug: String },
}

pub fn run(root: &Path, subcmd: ScoreSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ScoreSubcommand::Set {
            slug,
            criterion,
            value,
            comment,
        } => set(root, &slug, &criterion, value, comment, json),
        ScoreSubcommand::Wizard { slug, answers } => wizard(root, &slug, &answers, json),
        ScoreSubcommand::Questions => list_questions(json),
        ScoreSubcommand::Show { slug } => show(root, &slug, json),
    }
}

// ---------------------------------------------------------------------------
// set
// ---------------------------------------------------------------------------

fn set(
    root: &Path,
    slug: &str,
    criterion: &str,
    value: u8,
    comment: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    if !(1..=5).contains(&value) {
        anyhow::bail!("score value must be 1-5, got {value}");
    }
    let key = CriterionKey::from_str(criterion)
        .with_context(|| format!("unknown criterion: {criterion}"))?;

    let mut opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;
    let entry = opportunity.scoring.get_mut(key);
    entry.score = value;
    if let Some(c) = comment {
        entry.comment = c;
    }
    opportunity.save(root).context("failed to save opportunity")?;

    let total = opportunity.scoring.total()?;
    if json {
        print_json(&serde_json::json!({
            "slug": slug,
            "criterion": key.to_string(),
            "value": value,
            "total": total,
        }))?;
    } else {
        println!("Score set: {slug} [{key}] = {value} (total {total})");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// wizard
// ---------------------------------------------------------------------------

pub(crate) fn parse_answers(raw: &[String]) -> anyhow::Result<HashMap<String, u8>> {
    let mut answers = HashMap::new();
    for pair in raw {
        let (id, value) = pair
            .split_once('=')
            .with_context(|| format!("expected <id>=<value>, got '{pair}'"))?;
        let value: u8 = value
            .parse()
            .with_context(|| format!("invalid answer value in '{pair}'"))?;
        answers.insert(id.to_string(), value);
    }
    Ok(answers)
}

fn wizard(root: &Path, slug: &str, raw: &[String], json: bool) -> anyhow::Result<()> {
    let answers = parse_answers(raw)?;
    for id in answers.keys() {
        if !questions().iter().any(|q| q.id == id.as_str()) {
            anyhow::bail!("unknown question id: {id} (see 'stagegate score questions')");
        }
    }

    let mut opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;
    opportunity.scoring = answers_to_scoring(&answers, &opportunity.scoring);
    opportunity.save(root).context("failed to save opportunity")?;

    if json {
        print_json(&serde_json::json!({
            "slug": slug,
            "scoring": opportunity.scoring,
            "total": opportunity.scoring.total()?,
        }))?;
        return Ok(());
    }

    println!("Wizard applied to '{slug}':");
    for &key in CriterionKey::all() {
        println!("  {:<24} {}", key.to_string(), opportunity.scoring.get(key).score);
    }
    println!("Total: {}", opportunity.scoring.total()?);
    Ok(())
}

fn list_questions(json: bool) -> anyhow::Result<()> {
    if json {
        let items: Vec<_> = questions()
            .iter()
            .map(|q| {
                serde_json::json!({
                    "id": q.id,
                    "criterion": q.criterion.to_string(),
                    "text": q.text,
                })
            })
            .collect();
        print_json(&items)?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = questions()
        .iter()
        .map(|q| {
            vec![
                q.id.to_string(),
                q.criterion.to_string(),
                q.text.to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "CRITERION", "QUESTION"], rows);
    Ok(())
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;
    let total = opportunity.scoring.total()?;
    let rating = OverallRating::from_score(total);

    if json {
        print_json(&serde_json::json!({
            "slug": slug,
            "scoring": opportunity.scoring,
            "total": total,
            "rating": rating.to_string(),
        }))?;
        return Ok(());
    }

    println!("Rough scoring for '{slug}':");
    for &key in CriterionKey::all() {
        let criterion = opportunity.scoring.get(key);
        let comment = if criterion.comment.is_empty() {
            String::new()
        } else {
            format!("  — {}", criterion.comment)
        };
        println!(
            "  {:<24} {} (weight {}){comment}",
            key.to_string(),
            criterion.score,
            key.weight()
        );
    }
    println!("\nTotal: {total} ({rating})");
    Ok(())
}
