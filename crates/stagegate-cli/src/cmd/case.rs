use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use stagegate_core::{business_case::PLANNING_YEARS, opportunity::Opportunity};
use std::path::Path;

#[derive(Subcommand)]
pub enum CaseSubcommand {
    /// Set the business-case financials
    Set {
        slug: String,
        #[arg(long)]
        investment: Option<f64>,
        /// Revenue per planning year, comma-separated (e.g. 0,180000,420000)
        #[arg(long)]
        revenue: Option<String>,
        /// Cost per planning year, comma-separated
        #[arg(long)]
        costs: Option<String>,
    },

    /// Show the business case and its payback year
    Show { slug: String },
}

pub fn run(root: &Path, subcmd: CaseSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        CaseSubcommand::Set {
            slug,
            investment,
            revenue,
            costs,
        } => set(root, &slug, investment, revenue, costs, json),
        CaseSubcommand::Show { slug } => show(root, &slug, json),
    }
}

fn parse_years(raw: &str) -> anyhow::Result<[f64; PLANNING_YEARS]> {
    let values: Vec<f64> = raw
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .with_context(|| format!("invalid yearly figures: '{raw}'"))?;
    if values.len() != PLANNING_YEARS {
        anyhow::bail!(
            "expected {PLANNING_YEARS} comma-separated figures, got {}",
            values.len()
        );
    }
    let mut out = [0.0; PLANNING_YEARS];
    out.copy_from_slice(&values);
    Ok(out)
}

fn set(
    root: &Path,
    slug: &str,
    investment: Option<f64>,
    revenue: Option<String>,
    costs: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;
    let case = opportunity.business_case.as_mut().with_context(|| {
        format!("'{slug}' has no business case yet (it starts at the business_case stage)")
    })?;

    if let Some(i) = investment {
        case.investment = i;
    }
    if let Some(r) = revenue {
        case.revenue = parse_years(&r)?;
    }
    if let Some(c) = costs {
        case.costs = parse_years(&c)?;
    }
    opportunity.save(root).context("failed to save opportunity")?;

    if json {
        print_json(&serde_json::json!({ "slug": slug, "business_case": opportunity.business_case }))?;
    } else {
        println!("Business case updated for '{slug}'");
    }
    Ok(())
}

fn show(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;
    let case = opportunity.business_case.as_ref().with_context(|| {
        format!("'{slug}' has no business case yet (it starts at the business_case stage)")
    })?;

    if json {
        print_json(&serde_json::json!({
            "slug": slug,
            "business_case": case,
            "profits": case.profits(),
            "payback_year": case.payback_year(),
        }))?;
        return Ok(());
    }

    println!("Business case for '{slug}':");
    println!("  Investment: {:.0}", case.investment);
    let profits = case.profits();
    for year in 0..PLANNING_YEARS {
        println!(
            "  Year {}: revenue {:.0}, costs {:.0}, profit {:.0}",
            year + 1,
            case.revenue[year],
            case.costs[year],
            profits[year]
        );
    }
    match case.payback_year() {
        Some(year) => println!("  Payback in year {year}"),
        None => println!("  No payback within the planning horizon"),
    }
    Ok(())
}
