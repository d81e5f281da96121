use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::{generate, Shell};

/// Menu-driven, file-backed personal task manager.
/// Storage defaults to ./data.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "tasky", version, about = "Menu-driven personal task manager")]
pub struct Cli {
    /// Path to the JSON database file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Print a completion script for the given shell to stdout.
pub fn print_completions(shell: Shell) {
    use clap::CommandFactory;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
