//! Batch progress reporting.
//!
//! The orchestrators announce what they are doing through a
//! [`ProgressReporter`] so the console wording lives in one place and tests
//! can capture it.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Events that can be reported during a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Directory batch started
    BatchStarted {
        /// Directory being processed
        root: PathBuf,
        /// Number of assets found
        total: usize,
    },
    /// One asset failed; the batch continues
    AssetFailed {
        /// File name of the asset
        name: String,
        /// Human-readable cause
        message: String,
    },
    /// Something worth flagging that does not stop the batch
    Warning {
        message: String,
    },
    /// Directory batch finished
    BatchCompleted {
        succeeded: usize,
        failed: usize,
    },
}

/// Trait for progress reporters.
pub trait ProgressReporter {
    /// Report a progress event.
    fn report(&self, event: ProgressEvent);
}

/// A progress reporter that discards all events.
#[derive(Debug, Default)]
pub struct NullProgress;

impl NullProgress {
    /// Create a new null progress reporter.
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for NullProgress {
    fn report(&self, _event: ProgressEvent) {}
}

/// Console progress reporter.
///
/// Status lines go to `output` (stdout by default); failures and warnings go
/// to `errors` (stderr by default).
pub struct ConsoleProgress {
    output: Mutex<Box<dyn Write + Send>>,
    errors: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for ConsoleProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleProgress").finish_non_exhaustive()
    }
}

impl ConsoleProgress {
    /// Create a reporter writing to stdout and stderr.
    pub fn new() -> Self {
        Self::with_output(std::io::stdout(), std::io::stderr())
    }

    /// Create a reporter that writes to custom outputs.
    pub fn with_output<O, E>(output: O, errors: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self { output: Mutex::new(Box::new(output)), errors: Mutex::new(Box::new(errors)) }
    }

    fn writeln(target: &Mutex<Box<dyn Write + Send>>, line: &str) {
        if let Ok(mut out) = target.lock() {
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgress {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::BatchStarted { root, total } => Self::writeln(
                &self.output,
                &format!("Found {} image(s) in '{}'. Processing...", total, root.display()),
            ),
            ProgressEvent::AssetFailed { name, message } => {
                Self::writeln(&self.errors, &format!("Error processing {}: {}", name, message))
            }
            ProgressEvent::Warning { message } => {
                Self::writeln(&self.errors, &format!("Warning: {}", message))
            }
            ProgressEvent::BatchCompleted { succeeded, failed } => {
                tracing::debug!(succeeded, failed, "batch completed");
                Self::writeln(&self.output, "\nDone.");
            }
        }
    }
}

/// Reporter that keeps every event, for inspection after a run.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events reported so far, in order.
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl ProgressReporter for RecordingProgress {
    fn report(&self, event: ProgressEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
