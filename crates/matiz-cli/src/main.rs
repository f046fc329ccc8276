//! matiz CLI - switch editor appearance presets from the command line.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "matiz")]
#[command(author, version, about = "Appearance preset switcher", long_about = None)]
struct Cli {
    /// Directory holding the preference documents (defaults to the
    /// platform config directory)
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Switch to the next or previous preset
    Cycle(commands::cycle::CycleArgs),

    /// Apply a stored preset
    Load(commands::load::LoadArgs),

    /// Capture the current settings as a named preset
    Save(commands::save::SaveArgs),

    /// Delete a stored preset
    Delete(commands::delete::DeleteArgs),

    /// List stored presets
    List(commands::list::ListArgs),

    /// Show preference document locations
    Paths(commands::paths::PathsArgs),
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_dir = cli
        .config_dir
        .unwrap_or_else(matiz_config::paths::user_config_dir);

    tracing::debug!(dir = %config_dir.display(), "using config directory");

    match cli.command {
        Commands::Cycle(args) => commands::cycle::run(&config_dir, args),
        Commands::Load(args) => commands::load::run(&config_dir, args),
        Commands::Save(args) => commands::save::run(&config_dir, args),
        Commands::Delete(args) => commands::delete::run(&config_dir, args),
        Commands::List(args) => commands::list::run(&config_dir, args),
        Commands::Paths(args) => commands::paths::run(&config_dir, args),
    }
}
