//! # Tasky - Terminal Task Manager
//!
//! A menu-driven personal task manager for the terminal. Accounts register
//! and log in with a username-password pair, then create, view, sort,
//! update, complete and delete their own tasks.
//!
//! ## Key Features
//!
//! - **Accounts**: Register/login gate; each task belongs to the user who
//!   created it and listings never show anyone else's tasks.
//! - **Task Metadata**: Status, priority, validated start/due dates
//!   (`YYYY-MM-DD`) and comma-separated tags.
//! - **Filtered Views**: All tasks, grouped by status or priority, or
//!   sorted by either date field.
//! - **Local File Storage**: One flat JSON document, loaded at startup and
//!   written on exit.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run against ./data.json
//! tasky
//!
//! # Run against an explicit database file
//! tasky --db ~/tasks/data.json
//! ```
//!
//! All interaction happens through numbered menus; every prompt re-asks
//! until it gets valid input. Choosing Exit from the top menu saves the
//! database and ends the process.

use std::path::PathBuf;

use clap::Parser;

pub mod app;
pub mod cli;
pub mod console;
pub mod db;
pub mod error;
pub mod fields;
pub mod menu;
pub mod session;
pub mod task;
pub mod user;

use cli::{Cli, Commands};
use console::Console;
use db::Database;

fn main() {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        cli::print_completions(shell);
        return;
    }

    let db_path = cli.db.unwrap_or_else(|| PathBuf::from("data.json"));
    let mut db = Database::load(&db_path);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut con = Console::new(stdin.lock(), stdout.lock());
    app::run(&mut db, &mut con);

    if let Err(e) = db.save(&db_path) {
        eprintln!("Failed to save database {}: {}", db_path.display(), e);
        std::process::exit(1);
    }
}
