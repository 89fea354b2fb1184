use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Metamodel - facet-based domain metamodel engine
#[derive(Parser, Debug)]
#[command(name = "metamodel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project directory (defaults to the nearest directory with metamodel.toml)
    #[arg(short = 'C', long, global = true)]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Introspect the whole model and report validation failures
    Validate,

    /// List loaded object specifications
    Specs,

    /// Show how the facets of a class or member were ranked
    Explain {
        /// Class name or logical type name
        name: String,

        /// Narrow the report to one property, collection or action
        #[arg(short, long)]
        member: Option<String>,

        /// Object state as JSON; evaluates title, icon, CSS class and layout
        #[arg(long)]
        pojo: Option<String>,

        /// Trace UI events posted while evaluating --pojo
        #[arg(long, requires = "pojo")]
        trace_events: bool,
    },

    /// Print the effective menu bars
    Menubars {
        #[arg(long, value_enum, default_value_t = MenubarsFormat::Outline)]
        format: MenubarsFormat,
    },

    /// Rebuild the metamodel whenever model or layout files change
    Watch,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenubarsFormat {
    Outline,
    Toml,
}
