//! Quill entrypoint.
use anyhow::Result;
use clap::Parser;
use core_terminal::{CrosstermBackend, TerminalBackend, TerminalGuard, restore_terminal};
use quill::{Session, bootstrap};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE: &str = "quill.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Quill text editor")]
struct Args {
    /// File to open. Omit to start with an empty buffer.
    pub path: Option<PathBuf>,
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE);
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(_) => Some(guard),
        // Global subscriber already installed; dropping the guard shuts the writer down.
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn run(args: &Args) -> Result<()> {
    let guard = TerminalGuard::acquire(CrosstermBackend::new())?;
    let (columns, rows) = guard.size()?;
    let model = bootstrap(args.path.as_deref(), columns, rows);
    let mut session = Session::new(model, guard);
    session.run()
}

/// Clear the screen so the diagnostic is not buried under the last frame.
fn report_fatal(err: &anyhow::Error) {
    restore_terminal();
    let mut out = std::io::stdout();
    let _ = crossterm::execute!(
        out,
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0)
    );
    let _ = out.flush();
    eprintln!("quill: {err:#}");
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    match run(&args) {
        Ok(()) => {
            info!(target: "runtime", "exit_ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(target: "runtime", error = %format!("{err:#}"), "fatal");
            report_fatal(&err);
            ExitCode::FAILURE
        }
    }
}
