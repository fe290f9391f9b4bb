//! tilde entrypoint.
//!
//! Startup order: CLI, config, path (argument or prompt), logging, load, then
//! the terminal is entered for the session. Logging starts after the path is
//! known so the log file can never replace the file being edited. On exit the
//! terminal is restored before the save so any error lands on a normal screen.
//! The buffer is saved even when the session ends on an input error.

mod prompt;
mod session;

use anyhow::Result;
use clap::Parser;
use core_actions::io_ops::{OpenStatus, open_file, write_file};
use core_config::{Config, load_from};
use core_input::CrosstermKeySource;
use core_model::EditorModel;
use core_state::EditorState;
use core_terminal::{CrosstermBackend, TerminalBackend};
use session::{Session, ShutdownReason};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Once;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

/// Exit status when no path was supplied (matches clap's usage-error code).
const EXIT_USAGE: u8 = 2;
/// Exit status when the save failed or the session ended on an error.
const EXIT_FAILURE: u8 = 1;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "tilde", version, about = "Minimal console text editor")]
struct Args {
    /// File to edit. Created on exit if it does not exist. Prompted for when omitted.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `tilde.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn configure_logging(&mut self, log_path: &Path) -> Result<()> {
        if log_path.exists() {
            let _ = std::fs::remove_file(log_path);
        }
        let log_dir = match log_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let Some(file_name) = log_path.file_name() else {
            return Ok(());
        };

        let file_appender = tracing_appender::rolling::never(log_dir, file_name);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

/// Absolute form of `path`; a missing file resolves through its parent directory.
fn normalize(path: &Path) -> Option<PathBuf> {
    if let Ok(full) = path.canonicalize() {
        return Some(full);
    }
    let name = path.file_name()?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    Some(dir.canonicalize().ok()?.join(name))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (normalize(a), normalize(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

/// Log file to open for this session, or `None` when it is the edited file.
fn log_target<'a>(log_path: &'a Path, edit_path: &Path) -> Option<&'a Path> {
    (!same_file(log_path, edit_path)).then_some(log_path)
}

fn resolve_path(args: &Args) -> Result<Option<PathBuf>> {
    if let Some(p) = args.path.clone() {
        return Ok(Some(p));
    }
    let stdin = std::io::stdin();
    prompt::prompt_for_path(stdin.lock(), &mut std::io::stdout())
}

fn load_model(path: &Path) -> EditorModel {
    let outcome = open_file(path);
    match &outcome.status {
        OpenStatus::Loaded {
            size_bytes,
            line_count,
        } => info!(target: "runtime.startup", path = %path.display(), size_bytes, line_count, "file_loaded"),
        OpenStatus::Missing => {
            info!(target: "runtime.startup", path = %path.display(), "new_file")
        }
        OpenStatus::Unreadable(reason) => {
            warn!(target: "runtime.startup", path = %path.display(), reason = reason.as_str(), "unreadable_empty_document")
        }
    }
    EditorModel::new(outcome.into_state())
}

/// Save the buffer after the session, whatever way it ended, and pick the
/// exit status.
fn finish_session(outcome: Result<ShutdownReason>, mut state: EditorState, path: &Path) -> u8 {
    let failed = match &outcome {
        Ok(_) => false,
        Err(e) => {
            error!(target: "runtime", ?e, "session_error");
            eprintln!("tilde: {e:#}; saving {}", path.display());
            true
        }
    };
    match write_file(&mut state, Some(path)) {
        Ok(bytes) => {
            let reason = outcome.map(|r| r.to_string()).unwrap_or_else(|_| "error".into());
            info!(target: "runtime", path = %path.display(), bytes, reason = reason.as_str(), "saved");
            if failed {
                EXIT_FAILURE
            } else {
                0
            }
        }
        Err(e) => {
            error!(target: "runtime", %e, "save_failed");
            eprintln!("tilde: {e}");
            EXIT_FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config: Config = load_from(args.config.clone())?;
    let Some(path) = resolve_path(&args)? else {
        eprintln!("tilde: no file path given");
        return Ok(ExitCode::from(EXIT_USAGE));
    };

    let mut startup = AppStartup::new();
    match log_target(config.log_file(), &path) {
        Some(log_path) => startup.configure_logging(log_path)?,
        None => eprintln!(
            "tilde: {} is the configured log file; logging is off for this session",
            path.display()
        ),
    }
    AppStartup::install_panic_hook();
    info!(
        target: "runtime",
        config = config.source.as_ref().map(|p| p.display().to_string()).as_deref(),
        "startup"
    );
    let model = load_model(&path);

    let mut backend = CrosstermBackend::new();
    backend.set_title(&format!("tilde - {}", path.display()))?;
    let guard = backend.enter_guard()?;
    let terminal_rows = guard.query_height();

    let mut session = Session::new(
        model,
        CrosstermKeySource::new(),
        std::io::stdout(),
        &config,
        terminal_rows,
    );
    let outcome = session.run();
    if let Err(e) = guard.leave() {
        error!(target: "runtime", ?e, "terminal_restore_failed");
        eprintln!("tilde: {e:#}");
    }

    let status = finish_session(outcome, session.into_state(), &path);
    Ok(ExitCode::from(status))
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error!(target: "runtime", ?e, "fatal");
            eprintln!("tilde: {e:#}");
            ExitCode::FAILURE
        }
    }
}
