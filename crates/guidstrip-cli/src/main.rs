//! guidstrip CLI - strips GUIDs from zipped solutions before they are
//! documented.

mod cli;
mod commands;
mod error;
mod generator;
mod logging;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logging::init(cli.verbose, cli.quiet);
    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Clean(args) => commands::clean::execute(args, &*formatter, cli.quiet),
        cli::Commands::Document(args) => {
            commands::document::execute(args, &*formatter, cli.quiet)
        }
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    }
}
