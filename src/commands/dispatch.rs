//! Command dispatch logic for wayfind
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use wayfind_core::error::{Result, WayfindError};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(WayfindError::UsageError(
            "no command given (see `wayfind --help`)".to_string(),
        )),

        Some(Commands::Path {
            from,
            to,
            strategy,
            graph,
        }) => commands::path::execute(cli, graph, from, to, *strategy, start),

        Some(Commands::Nodes { graph }) => commands::nodes::execute(cli, graph, start),

        Some(Commands::Links { of, graph }) => commands::links::execute(cli, graph, of, start),

        Some(Commands::Demo { strategy }) => commands::demo::execute(cli, *strategy, start),
    }
}
