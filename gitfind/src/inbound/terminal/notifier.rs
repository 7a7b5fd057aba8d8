//! Terminal implementation of the lookup notifier port.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tracing::warn;

use crate::domain::LookupError;
use crate::domain::ports::LookupNotifier;

/// Return the user-facing text for a failed lookup.
#[must_use]
pub const fn notice_text(error: &LookupError) -> &'static str {
    match error {
        LookupError::NotFound { .. } => "User not found",
        LookupError::Failed(_) => "Failed to fetch user",
    }
}

/// Writes one alert line per notification to the wrapped writer.
pub struct TerminalNotifier<W> {
    writer: Mutex<W>,
}

impl<W> TerminalNotifier<W> {
    /// Wrap `writer`, typically standard error.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W> LookupNotifier for TerminalNotifier<W>
where
    W: Write + Send,
{
    fn notify(&self, error: &LookupError) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(write_error) = writeln!(writer, "! {}", notice_text(error)) {
            warn!(error = %write_error, "failed to write lookup notice");
        }
    }
}
