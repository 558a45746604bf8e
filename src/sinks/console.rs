//! Console sink implementation

use crate::core::{Result, Sink};
use std::io::Write;

/// Writes messages to stdout, and optionally some types to stderr.
pub struct ConsoleSink {
    stderr_types: Vec<String>,
}

impl ConsoleSink {
    /// `error` messages go to stderr, everything else to stdout.
    pub fn new() -> Self {
        Self {
            stderr_types: vec!["error".to_string()],
        }
    }

    /// Everything goes to stdout.
    pub fn stdout_only() -> Self {
        Self {
            stderr_types: Vec::new(),
        }
    }

    /// Route the given log types to stderr instead of stdout
    ///
    /// # Example
    ///
    /// ```
    /// use scoped_logger::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::new().with_stderr_types(["error", "warn"]);
    /// assert!(sink.writes_to_stderr("warn"));
    /// ```
    #[must_use]
    pub fn with_stderr_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stderr_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn writes_to_stderr(&self, log_type: &str) -> bool {
        self.stderr_types.iter().any(|t| t == log_type)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, log_type: &str, message: &str) -> Result<()> {
        // Messages carry their own line ending
        if self.writes_to_stderr(log_type) {
            std::io::stderr().lock().write_all(message.as_bytes())?;
        } else {
            std::io::stdout().lock().write_all(message.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
