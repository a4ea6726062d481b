use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use stagegate_core::{
    opportunity::Opportunity,
    types::{Decision, Gate},
};
use std::path::Path;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum GateSubcommand {
    /// Record a go/hold/no-go decision at the current gate
    Decide {
        slug: String,
        /// Gate (gate1|gate2|gate3)
        #[arg(long)]
        gate: String,
        /// Decision (go|hold|no-go)
        #[arg(long)]
        decision: String,
        /// Name of the person deciding (required)
        #[arg(long)]
        decider: String,
        #[arg(long, default_value = "")]
        comment: String,
    },

    /// List gate records
    List { slug: String },

    /// Edit an existing gate record in place (identity preserved)
    Edit {
        slug: String,
        /// Gate record id
        id: String,
        #[arg(long)]
        decision: Option<String>,
        #[arg(long)]
        decider: Option<String>,
        #[arg(long)]
        comment: Option<String>,
    },

    /// Delete a gate record by id
    Delete {
        slug: String,
        /// Gate record id
        id: String,
    },
}

pub fn run(root: &Path, subcmd: GateSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        GateSubcommand::Decide {
            slug,
            gate,
            decision,
            decider,
            comment,
        } => decide(root, &slug, &gate, &decision, &decider, &comment, json),
        GateSubcommand::List { slug } => list(root, &slug, json),
        GateSubcommand::Edit {
            slug,
            id,
            decision,
            decider,
            comment,
        } => edit(root, &slug, &id, decision, decider, comment, json),
        GateSubcommand::Delete { slug, id } => delete(root, &slug, &id, json),
    }
}

fn decide(
    root: &Path,
    slug: &str,
    gate: &str,
    decision: &str,
    decider: &str,
    comment: &str,
    json: bool,
) -> anyhow::Result<()> {
    let gate = Gate::from_str(gate).with_context(|| format!("unknown gate: {gate}"))?;
    let decision =
        Decision::from_str(decision).with_context(|| format!("unknown decision: {decision}"))?;

    let mut opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;
    let id = opportunity
        .decide_gate(gate, decision, decider, comment)
        .with_context(|| format!("cannot decide {gate} for '{slug}'"))?;
    opportunity.save(root).context("failed to save opportunity")?;

    if json {
        print_json(&serde_json::json!({
            "slug": slug,
            "gate": gate.to_string(),
            "decision": decision.to_string(),
            "record_id": id,
            "stage": opportunity.stage.to_string(),
        }))?;
    } else {
        println!("Recorded {decision} at {gate} for '{slug}' (stage: {})", opportunity.stage);
    }
    Ok(())
}

fn list(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;

    if json {
        print_json(&opportunity.gates)?;
        return Ok(());
    }

    if opportunity.gates.is_empty() {
        println!("No gate records for '{slug}'.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = opportunity
        .gates
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.gate.to_string(),
                r.decision.to_string(),
                r.decider.clone(),
                r.date.format("%Y-%m-%d %H:%M").to_string(),
                r.comment.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "GATE", "DECISION", "DECIDER", "DATE", "COMMENT"], rows);
    Ok(())
}

fn edit(
    root: &Path,
    slug: &str,
    id: &str,
    decision: Option<String>,
    decider: Option<String>,
    comment: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let id = Uuid::from_str(id).with_context(|| format!("invalid record id: {id}"))?;
    let decision = decision
        .as_deref()
        .map(Decision::from_str)
        .transpose()
        .context("unknown decision")?;

    let mut opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;
    opportunity
        .edit_gate(id, decision, decider.as_deref(), comment.as_deref())
        .with_context(|| format!("failed to edit gate record {id}"))?;
    opportunity.save(root).context("failed to save opportunity")?;

    if json {
        print_json(&serde_json::json!({ "slug": slug, "record_id": id, "edited": true }))?;
    } else {
        println!("Edited gate record {id}");
    }
    Ok(())
}

fn delete(root: &Path, slug: &str, id: &str, json: bool) -> anyhow::Result<()> {
    let id = Uuid::from_str(id).with_context(|| format!("invalid record id: {id}"))?;

    let mut opportunity =
        Opportunity::load(root, slug).with_context(|| format!("opportunity '{slug}' not found"))?;
    opportunity
        .delete_gate(id)
        .with_context(|| format!("failed to delete gate record {id}"))?;
    opportunity.save(root).context("failed to save opportunity")?;

    if json {
        print_json(&serde_json::json!({ "slug": slug, "record_id": id, "deleted": true }))?;
    } else {
        println!("Deleted gate record {id}");
    }
    Ok(())
}
