pub mod commands;
pub mod fixtures;
pub mod render;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "minimart",
    about = "MiniMart catalog and cart demo",
    after_help = "Examples:\n  minimart catalog\n  minimart demo --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Print the demo catalog, one product report per entry")]
    Catalog,
    #[command(about = "Run the cart walkthrough: fill the cart, overflow it, remove items, report")]
    Demo {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
        #[arg(
            long,
            default_value_t = 1970,
            help = "Release year at or after which a movie counts as a new release"
        )]
        year_threshold: i32,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Catalog => commands::catalog::run(),
        Command::Demo { json, year_threshold } => commands::demo::run(json, year_threshold),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
