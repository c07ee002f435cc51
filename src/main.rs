//! wpath - Cross-platform search-path assembler

use anyhow::Result;
use clap::Parser;

use wpath::cli::{commands, Cli, CommandContext};
use wpath::cli::args::Commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = CommandContext::from_cli(&cli)?;

    match &cli.command {
        Commands::Show { status, full } => commands::show::execute(&ctx, *status, *full),
        Commands::Assemble { report } => commands::assemble::execute(&ctx, *report),
        Commands::Check => commands::check::execute(&ctx),
        Commands::Add { dir } => commands::add::execute(&ctx, dir),
        Commands::Remove { dir } => commands::remove::execute(&ctx, dir),
        Commands::Run { command } => {
            let code = commands::run::execute(&ctx, command)?;
            std::process::exit(code);
        }
        Commands::Edit => commands::edit::execute(&ctx),
    }
}
