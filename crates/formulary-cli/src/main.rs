//! Formulary CLI: the `formulary` command.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { category, json } => {
            commands::list::run(category.map(Into::into), json)
        }

        Commands::Describe { operation, json } => commands::describe::run(operation, json),

        Commands::Exec {
            operation,
            args,
            args_json,
            json,
        } => commands::exec::run(commands::exec::Args {
            operation,
            args,
            args_json,
            json,
        }),

        Commands::Registry { json } => commands::registry::run(json),

        Commands::RegistryCheck { json } => commands::registry_check::run(json),
    }
}
