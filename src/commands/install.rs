//! Install command implementation — the orchestration core
//!
//! One pass through `Start → ManifestLoaded → ActionResolved → Running →
//! Succeeded | Failed`:
//! 1. Publish the process-wide execution mode
//! 2. Load the install profile and reject unsupported schema revisions
//! 3. Resolve the client action for the profile's generation
//! 4. Run it against the target directory
//! 5. Map the outcome to stdout diagnostics and an exit code
//!
//! There is no retry and no state-specific recovery; every failure class
//! funnels into the same exit code and differs only in verbosity.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use console::Style;

use crate::actions::{self, ActionKind, InstallAction};
use crate::cli::InstallArgs;
use crate::error::{InstallerError, Result};
use crate::manifest::Manifest;
use crate::progress::ProgressReporter;

/// Process-wide execution mode flags, written once before any manifest I/O
///
/// Collaborators that could open a window or a socket consult these through
/// [`ExecutionMode::current`]; they are never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionMode {
    /// Forbid any graphical fallback
    pub headless: bool,
    /// Prefer IPv4 when a collaborator opens sockets
    pub prefer_ipv4: bool,
}

impl Default for ExecutionMode {
    fn default() -> Self {
        Self {
            headless: true,
            prefer_ipv4: true,
        }
    }
}

static MODE: OnceLock<ExecutionMode> = OnceLock::new();

impl ExecutionMode {
    /// Publish this mode process-wide; the first writer wins
    pub fn apply(self) {
        let _ = MODE.set(self);
    }

    /// Mode in effect, when one has been applied
    pub fn current() -> Option<ExecutionMode> {
        MODE.get().copied()
    }
}

/// Everything one orchestration pass needs, passed explicitly so tests can
/// run scenarios in isolation
#[derive(Debug)]
pub struct InstallSettings {
    /// Directory the install writes into
    pub target_dir: PathBuf,
    /// Install profile location
    pub manifest_path: PathBuf,
    /// This installer's own binary location, consumed by the v1 path
    pub installer_path: PathBuf,
    /// Execution mode to publish before loading anything
    pub mode: ExecutionMode,
}

/// Terminal outcome of one orchestration pass, consumed once to pick the
/// exit code and diagnostic verbosity
#[derive(Debug)]
pub enum RunOutcome {
    /// Install completed; carries the action's completion message
    Success(String),
    /// The action reported an expected, user-visible failure
    ActionFailure,
    /// The manifest declares a schema revision this installer rejects
    UnsupportedSchema(u64),
    /// Anything else that surfaced during load, resolve, or run
    UnexpectedFailure(InstallerError),
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Success(_) => 0,
            _ => 1,
        }
    }
}

/// Run one resolved action to completion
///
/// This CLI path never cancels interactively, so the predicate handed to the
/// action is unconditionally true.
fn drive(action: &dyn InstallAction, target_dir: &Path) -> Result<Option<String>> {
    let always = |_: &str| true;
    if !action.run(target_dir, &always)? {
        return Ok(None);
    }
    Ok(Some(action.success_message()))
}

fn execute(settings: &InstallSettings, reporter: &ProgressReporter) -> Result<Option<String>> {
    let manifest = Manifest::load(&settings.manifest_path)?;
    manifest.ensure_supported()?;
    let action = actions::resolve(
        ActionKind::Client,
        &manifest,
        reporter,
        &settings.installer_path,
    );
    drive(action.as_ref(), &settings.target_dir)
}

/// Perform one install pass and classify its outcome
pub fn run_install(settings: &InstallSettings, reporter: &ProgressReporter) -> RunOutcome {
    // Execution mode must be live before the loader or any network-capable
    // collaborator runs
    settings.mode.apply();

    match execute(settings, reporter) {
        Ok(Some(message)) => RunOutcome::Success(message),
        Ok(None) => RunOutcome::ActionFailure,
        Err(InstallerError::UnsupportedSchema { spec }) => RunOutcome::UnsupportedSchema(spec),
        Err(err) => RunOutcome::UnexpectedFailure(err),
    }
}

/// Print the outcome on stdout per its diagnostic class and return the exit
/// code
///
/// Expected failures get a plain message; unexpected ones get the full
/// diagnostic report. Stdout is the sole diagnostic channel here.
pub fn report_outcome(outcome: RunOutcome) -> i32 {
    let code = outcome.exit_code();
    match outcome {
        RunOutcome::Success(message) => {
            println!("{}", Style::new().green().apply_to(message));
        }
        RunOutcome::ActionFailure => {
            println!("Error");
        }
        RunOutcome::UnsupportedSchema(spec) => {
            println!("Bad launcher profile: {spec}");
        }
        RunOutcome::UnexpectedFailure(err) => {
            println!("{:?}", miette::Report::new(err));
        }
    }
    code
}

/// Run install command
pub fn run(args: InstallArgs) -> Result<i32> {
    let current_dir = std::env::current_dir()?;
    let target_dir = args.dir.unwrap_or_else(|| current_dir.clone());
    let manifest_path = args
        .manifest
        .unwrap_or_else(|| Manifest::locate(&current_dir));
    let installer_path = match args.installer {
        Some(path) => path,
        None => std::env::current_exe()?,
    };

    let settings = InstallSettings {
        target_dir,
        manifest_path,
        installer_path,
        mode: ExecutionMode::default(),
    };
    let reporter = ProgressReporter::stdout()?;

    Ok(report_outcome(run_install(&settings, &reporter)))
}
