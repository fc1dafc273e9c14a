//! Operator output.
//!
//! Alert lines, fetch diagnostics and the degraded notice go to an
//! [`OutputSink`], one line per call. Logs are a separate channel (stderr).

use std::io::{self, Write};

/// Destination for operator-facing lines.
pub trait OutputSink {
    /// Write one line. Implementations append the line terminator.
    fn line(&mut self, line: &str);
}

/// Writes lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn line(&mut self, line: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}").and_then(|()| stdout.flush()) {
            tracing::warn!(error = %e, "Failed to write to stdout");
        }
    }
}

/// Collects lines in memory.
impl OutputSink for Vec<String> {
    fn line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn line(&mut self, line: &str) {
        (**self).line(line);
    }
}
