//! Install actions and their resolver
//!
//! An [`InstallAction`] is the executable capability that performs the
//! actual install steps against a target directory. The resolver maps a
//! requested [`ActionKind`] and a manifest's schema generation to the
//! concrete action; dispatch is exhaustive over the generation tag and
//! never fails on its own.

pub mod client;

use std::path::Path;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::progress::ProgressReporter;

pub use client::{ClientInstall, ClientInstallV1};

/// Category of install being performed
///
/// Server and extract variants exist as siblings conceptually but are not
/// exercised by this binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Install the client into a launcher directory
    Client,
}

/// Cancellation predicate consulted by actions before optional steps
///
/// Receives the artifact or component name under consideration; returning
/// false skips that step without failing the install.
pub type ShouldContinue<'a> = &'a dyn Fn(&str) -> bool;

/// An executable install bound to a manifest and a progress reporter
pub trait InstallAction {
    /// Execute the install against `target_dir`
    ///
    /// Returns `Ok(false)` for an expected, user-visible failure and `Err`
    /// for anything unexpected. Consults `should_continue` at optional
    /// decision points.
    fn run(&self, target_dir: &Path, should_continue: ShouldContinue) -> Result<bool>;

    /// Human-readable completion message, valid after a successful run
    fn success_message(&self) -> String;
}

/// Resolve the concrete action for `kind` and the manifest's generation
///
/// `installer` is the installer's own binary location; only the v1 path
/// consumes it.
pub fn resolve<'a>(
    kind: ActionKind,
    manifest: &'a Manifest,
    reporter: &'a ProgressReporter,
    installer: &'a Path,
) -> Box<dyn InstallAction + 'a> {
    match (kind, manifest) {
        (ActionKind::Client, Manifest::Legacy(legacy)) => {
            Box::new(ClientInstall::new(legacy, reporter))
        }
        (ActionKind::Client, Manifest::V1(v1)) => {
            Box::new(ClientInstallV1::new(v1, reporter, installer))
        }
    }
}
