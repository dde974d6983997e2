//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `todolist_core` linkage without the mobile runtime.
//! - Optionally print the list stored in a database file.
//!
//! Usage: `todolist_cli [DB_PATH]`. Without a path, `TODOLIST_DB_PATH` or the
//! temp-dir default is used.

use std::process::ExitCode;
use todolist_core::{open_sqlite_session, StorageConfig, ValidationMode};

fn main() -> ExitCode {
    println!("todolist_core ping={}", todolist_core::ping());
    println!("todolist_core version={}", todolist_core::core_version());

    let config = match std::env::args().nth(1) {
        Some(path) => StorageConfig::new(path),
        None => StorageConfig::from_env(),
    };

    let session = match open_sqlite_session(&config, ValidationMode::Strict) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("failed to open {}: {err}", config.db_path().display());
            return ExitCode::FAILURE;
        }
    };

    let view = session.render();
    println!("{} ({})", view.title, config.db_path().display());
    if view.is_empty() {
        println!("  (no todos)");
    }
    for row in &view.rows {
        let mark = if row.finished { "x" } else { " " };
        println!("  [{mark}] {}  id={}", row.text, row.id);
    }
    ExitCode::SUCCESS
}
