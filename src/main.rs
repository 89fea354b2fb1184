//! Metamodel CLI - inspect and validate a domain metamodel
//!
//! Usage: metamodel [-C <dir>] <COMMAND>
//!
//! Commands:
//!   validate  Introspect everything and report validation failures
//!   specs     List object specifications
//!   explain   Show facet rankings for a class or member
//!   menubars  Print the effective menu bars
//!   watch     Rebuild on model or layout changes

mod cli;
mod commands;
mod ui;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

/// `METAMODEL_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("METAMODEL_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let project = cli.project.as_deref();
    let result = match cli.command {
        None => {
            let _ = Cli::command().print_help();
            Ok(())
        }
        Some(Commands::Validate) => commands::validate::cmd_validate(project, cli.json),
        Some(Commands::Specs) => commands::specs::cmd_specs(project, cli.json),
        Some(Commands::Explain {
            name,
            member,
            pojo,
            trace_events,
        }) => commands::explain::cmd_explain(
            project,
            &name,
            member.as_deref(),
            pojo.as_deref(),
            trace_events,
            cli.json,
        ),
        Some(Commands::Menubars { format }) => {
            commands::menubars::cmd_menubars(project, format, cli.json)
        }
        Some(Commands::Watch) => commands::watch::cmd_watch(project, cli.json),
    };

    if let Err(err) = result {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}
