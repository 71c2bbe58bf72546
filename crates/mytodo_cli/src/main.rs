//! Terminal front end for MyTodoList.
//!
//! # Responsibility
//! - Parse flags, start optional file logging, and run the screen loop on
//!   stdin/stdout.

mod app;
mod command;
mod render;

use clap::Parser;
use mytodo_core::{
    default_log_level, init_logging, SequentialIdGenerator, TodoList, TodoScreen,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "mytodo")]
#[command(about = "Single-screen in-memory to-do list")]
#[command(version)]
struct Cli {
    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "MYTODO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory for rolling log files; logging is off when unset
    #[arg(long, env = "MYTODO_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Issue ids 1, 2, 3, ... instead of random UUIDs
    #[arg(long, env = "MYTODO_SEQUENTIAL_IDS")]
    sequential_ids: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = start_logging(level, log_dir) {
            eprintln!("mytodo: {err}");
            return ExitCode::FAILURE;
        }
    }

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    let result = if cli.sequential_ids {
        let mut screen =
            TodoScreen::with_list(TodoList::with_id_generator(SequentialIdGenerator::new()));
        app::run(&mut screen, stdin, &mut stdout, &mut stderr)
    } else {
        app::run(&mut TodoScreen::new(), stdin, &mut stdout, &mut stderr)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mytodo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn start_logging(level: &str, log_dir: &std::path::Path) -> Result<(), String> {
    let absolute = if log_dir.is_absolute() {
        log_dir.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|err| format!("cannot resolve log dir: {err}"))?
            .join(log_dir)
    };
    let log_dir = absolute
        .to_str()
        .ok_or_else(|| format!("log dir is not valid UTF-8: {}", absolute.display()))?;
    init_logging(level, log_dir)
}
