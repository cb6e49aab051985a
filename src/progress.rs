//! Progress reporting for install actions
//!
//! A [`ProgressReporter`] fans each message out to an ordered set of output
//! sinks, synchronously and unbuffered. It is constructed once at startup
//! and shared by handle with every component that reports progress.

use std::cell::RefCell;
use std::io::Write;

use crate::error::{InstallerError, Result};

/// Fan-out sink for textual progress messages
pub struct ProgressReporter {
    /// Output sinks, written in configuration order
    sinks: RefCell<Vec<Box<dyn Write>>>,
}

impl std::fmt::Debug for ProgressReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("sinks", &self.sinks.borrow().len())
            .finish()
    }
}

impl ProgressReporter {
    /// Create a reporter over an ordered, non-empty collection of sinks
    ///
    /// An empty collection is a configuration error caught at startup, not a
    /// runtime failure during install.
    pub fn with_outputs(sinks: Vec<Box<dyn Write>>) -> Result<Self> {
        if sinks.is_empty() {
            return Err(InstallerError::EmptyProgressOutputs);
        }
        Ok(Self {
            sinks: RefCell::new(sinks),
        })
    }

    /// Create a reporter writing to standard output only
    pub fn stdout() -> Result<Self> {
        Self::with_outputs(vec![Box::new(std::io::stdout())])
    }

    /// Write `message` to every sink in order, flushing each
    ///
    /// Sink write failures are swallowed: progress is advisory and must not
    /// fail an otherwise healthy install.
    pub fn report(&self, message: &str) {
        for sink in self.sinks.borrow_mut().iter_mut() {
            let _ = writeln!(sink, "{message}");
            let _ = sink.flush();
        }
    }
}
