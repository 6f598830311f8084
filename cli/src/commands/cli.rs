use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Reasoning,
    Findings,
    Raw,
}

#[derive(Parser, Debug)]
#[command(name = "triage", about = "Structure investigation event logs into timelines")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the output format from config.
    #[arg(long, value_enum, global = true)]
    pub format: Option<Format>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct InputArgs {
    /// Event log: JSON array or JSONL.
    #[arg(long)]
    pub events: String,

    /// Breadcrumbs JSON array.
    #[arg(long)]
    pub breadcrumbs: Option<String>,

    /// Reasoning chain JSON array.
    #[arg(long)]
    pub reasoning: Option<String>,

    /// Fixed "now" in Unix milliseconds, for reproducible output.
    #[arg(long)]
    pub now_ms: Option<i64>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct StructureArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Layer filter for text output. Alerts are always shown.
    #[arg(long, value_enum)]
    pub filter: Option<Filter>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct WatchArgs {
    #[command(flatten)]
    pub structure: StructureArgs,

    /// Poll interval in milliseconds (overrides config).
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the phased, per-agent timeline.
    Structure(StructureArgs),
    /// Build the legacy flat timeline.
    Flat(InputArgs),
    /// Print only the filter counts.
    Counts(InputArgs),
    /// Re-read the inputs on an interval and print each recomputed timeline.
    Watch(WatchArgs),
}
