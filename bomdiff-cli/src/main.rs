mod cli;

use clap::Parser;
use colored::*;
use is_terminal::IsTerminal;

use bomdiff_cli::config::load_env_file;
use bomdiff_cli::error::truncate_chars;
use cli::commands::{env, negatives, probe, run, verify};
use cli::{Cli, Commands};

/// Longest error chain shown to the user
const ERROR_PREVIEW_CHARS: usize = 2000;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run_command(cli.command).await {
        eprintln!("{}", "Error".red().bold());
        eprintln!("{}", truncate_chars(&format!("{:#}", e), ERROR_PREVIEW_CHARS));
        std::process::exit(1);
    }
}

async fn run_command(command: Commands) -> anyhow::Result<()> {
    let env_file = load_env_file()?;

    match command {
        Commands::Run(args) => run::handle_run_command(args).await,
        Commands::Verify(args) => verify::handle_verify_command(args).await,
        Commands::Negatives(args) => negatives::handle_negatives_command(args).await,
        Commands::Probe => probe::handle_probe_command().await,
        Commands::Env => env::handle_env_command(env_file.as_deref()),
    }
}
