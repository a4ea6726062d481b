mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    analysis::AnalysisSubcommand, case::CaseSubcommand, config::ConfigSubcommand,
    detail::DetailSubcommand, gate::GateSubcommand, opportunity::OpportunitySubcommand,
    score::ScoreSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "stagegate",
    about = "Stage-gate opportunity tracker — manage ideas, scores, gates, and business cases",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .stagegate/ or .git/)
    #[arg(long, global = true, env = "STAGEGATE_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize stagegate in the current project
    Init,

    /// Manage opportunities
    Opportunity {
        #[command(subcommand)]
        subcommand: OpportunitySubcommand,
    },

    /// Rough scoring: sliders, wizard, and totals
    Score {
        #[command(subcommand)]
        subcommand: ScoreSubcommand,
    },

    /// Detailed scoring (business-plan phase)
    Detail {
        #[command(subcommand)]
        subcommand: DetailSubcommand,
    },

    /// Advance an opportunity across a non-gate stage boundary
    Advance { slug: String },

    /// Move an opportunity one stage back, pruning now-future gate decisions
    Revert { slug: String },

    /// Record and maintain gate decisions
    Gate {
        #[command(subcommand)]
        subcommand: GateSubcommand,
    },

    /// Business-case financials
    Case {
        #[command(subcommand)]
        subcommand: CaseSubcommand,
    },

    /// Strategic analysis (SWOT, BCG, Ansoff)
    Analysis {
        #[command(subcommand)]
        subcommand: AnalysisSubcommand,
    },

    /// Request a narrative assessment from the configured endpoint
    Assess {
        slug: String,

        /// Override the configured output language (en|de)
        #[arg(long)]
        language: Option<String>,

        /// Override the configured endpoint URL
        #[arg(long)]
        endpoint: Option<String>,

        /// Wizard answer as <question-id>=<1-5> to include, repeatable
        #[arg(long = "answer", value_name = "ID=VALUE")]
        answers: Vec<String>,
    },

    /// Project configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Opportunity { subcommand } => cmd::opportunity::run(&root, subcommand, cli.json),
        Commands::Score { subcommand } => cmd::score::run(&root, subcommand, cli.json),
        Commands::Detail { subcommand } => cmd::detail::run(&root, subcommand, cli.json),
        Commands::Advance { slug } => cmd::opportunity::advance(&root, &slug, cli.json),
        Commands::Revert { slug } => cmd::opportunity::revert(&root, &slug, cli.json),
        Commands::Gate { subcommand } => cmd::gate::run(&root, subcommand, cli.json),
        Commands::Case { subcommand } => cmd::case::run(&root, subcommand, cli.json),
        Commands::Analysis { subcommand } => cmd::analysis::run(&root, subcommand, cli.json),
        Commands::Assess {
            slug,
            language,
            endpoint,
            answers,
        } => cmd::assess::run(
            &root,
            &slug,
            language.as_deref(),
            endpoint.as_deref(),
            &answers,
            cli.json,
        ),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
