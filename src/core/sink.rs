//! Sink trait for pipe destinations

use super::error::Result;

/// A writable destination for formatted log messages.
///
/// Messages arrive fully formatted, including the trailing line ending, and
/// should be written verbatim.
pub trait Sink: Send {
    fn write(&mut self, log_type: &str, message: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, log_type: &str, message: &str) -> Result<()> {
        (**self).write(log_type, message)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
