use crate::output::print_json;
use anyhow::Context;
use stagegate_core::{
    assessment::{AssessmentClient, AssessmentRequest},
    config::{Config, Language},
    opportunity::Opportunity,
};
use std::path::Path;
use std::str::FromStr;

pub fn run(
    root: &Path,
    slug: &str,
    language: Option<&str>,
    endpoint: Option<&str>,
    raw_answers: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config (run 'stagegate init')")?;
    let answers = super::score::parse_answers(raw_answers)?;
    let opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;

    let language = match language {
        Some(l) => Language::from_str(l).with_context(|| format!("unknown language: {l}"))?,
        None => config.language,
    };
    let endpoint = endpoint
        .map(str::to_string)
        .or(config.assessment_endpoint)
        .context(
            "no assessment endpoint configured: pass --endpoint or set one with \
             'stagegate config set --endpoint <url>'",
        )?;

    let request = AssessmentRequest {
        scoring: opportunity.scoring.clone(),
        answers,
        title: Some(opportunity.title.clone()),
        description: opportunity.description.clone(),
        language,
    };

    let assessment = AssessmentClient::new(endpoint)
        .assess(&request)
        .context("assessment failed; try again")?;

    if json {
        print_json(&assessment)?;
        return Ok(());
    }

    println!("Assessment for '{slug}' ({}):", assessment.overall_rating);
    println!("\n{}", assessment.summary);
    for (label, items) in [
        ("Strengths", &assessment.strengths),
        ("Weaknesses", &assessment.weaknesses),
        ("Next steps", &assessment.next_steps),
        ("Pitfalls", &assessment.pitfalls),
    ] {
        if !items.is_empty() {
            println!("\n{label}:");
            for item in items {
                println!("  - {item}");
            }
        }
    }
    Ok(())
}
