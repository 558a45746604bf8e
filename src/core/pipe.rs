//! Level-filtered piping of log events into a sink
//!
//! A pipe registers one shared writer listener under every log type selected
//! by its level. Finishing the pipe (the sink's end of life) removes exactly
//! those registrations again. A sink that fails or panics ends the pipe the
//! same way.

use super::{
    emitter::{EventEmitter, Listener, ListenerId, LogEvent},
    error::{LoggerError, Result},
    log_level::LogLevel,
    metrics::PipeMetrics,
    sink::Sink,
};
use parking_lot::Mutex;
use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// Options for [`Logger::pipe`](crate::Logger::pipe).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipeOptions {
    /// Types up to and including this level are written. Defaults to `INFO`.
    pub log_level: LogLevel,
}

impl PipeOptions {
    pub fn level(log_level: impl Into<LogLevel>) -> Self {
        Self {
            log_level: log_level.into(),
        }
    }
}

impl Default for PipeOptions {
    fn default() -> Self {
        Self {
            log_level: LogLevel::INFO,
        }
    }
}

struct PipeState {
    // The emitter owns the listener that owns this state
    emitter: Weak<EventEmitter>,
    sink: Mutex<Box<dyn Sink>>,
    sink_name: String,
    subscriptions: Mutex<Vec<(String, ListenerId)>>,
    finished: AtomicBool,
    metrics: PipeMetrics,
}

impl PipeState {
    fn deliver(&self, event: &LogEvent<'_>) {
        if self.finished.load(Ordering::Acquire) {
            return;
        }

        let write_result = {
            let mut sink = self.sink.lock();
            // finish() may have flushed while this write waited for the sink
            if self.finished.load(Ordering::Acquire) {
                return;
            }
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                sink.write(event.log_type, event.message)
            }))
        };

        match write_result {
            Ok(Ok(())) => {
                self.metrics.record_written(event.message.len());
            }
            Ok(Err(e)) => {
                eprintln!(
                    "[LOGGER ERROR] Sink '{}' failed: {}. Pipe closed.",
                    self.sink_name, e
                );
                self.metrics.record_failed();
                self.unsubscribe();
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Sink '{}' panicked: {}. Pipe closed.",
                    self.sink_name,
                    panic_message(panic_info.as_ref())
                );
                self.metrics.record_failed();
                self.unsubscribe();
            }
        }
    }

    /// Remove every registration this pipe made. Returns `false` if the pipe
    /// was already finished.
    fn unsubscribe(&self) -> bool {
        if self.finished.swap(true, Ordering::AcqRel) {
            return false;
        }

        let subscriptions = std::mem::take(&mut *self.subscriptions.lock());
        if let Some(emitter) = self.emitter.upgrade() {
            for (log_type, id) in &subscriptions {
                emitter.remove_listener(log_type, *id);
            }
        }
        true
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Handle to an active pipe.
///
/// Dropping the handle does not end the pipe; call [`Pipe::finish`] for that.
pub struct Pipe {
    state: Arc<PipeState>,
    log_level: LogLevel,
    types: Vec<String>,
}

impl Pipe {
    pub(crate) fn attach<S: Sink + 'static>(
        emitter: &Arc<EventEmitter>,
        types: Vec<&str>,
        sink: S,
        options: PipeOptions,
    ) -> Self {
        let sink_name = sink.name().to_string();
        let state = Arc::new(PipeState {
            emitter: Arc::downgrade(emitter),
            sink: Mutex::new(Box::new(sink)),
            sink_name,
            subscriptions: Mutex::new(Vec::with_capacity(types.len())),
            finished: AtomicBool::new(false),
            metrics: PipeMetrics::new(),
        });

        let writer_state = Arc::clone(&state);
        let listener: Listener = Arc::new(move |event: &LogEvent<'_>| writer_state.deliver(event));

        {
            // Held while registering so a concurrent failure cannot miss any
            let mut subscriptions = state.subscriptions.lock();
            for log_type in &types {
                let id = emitter.add_listener(log_type, Arc::clone(&listener));
                subscriptions.push((log_type.to_string(), id));
            }
        }

        Self {
            state,
            log_level: options.log_level,
            types: types.into_iter().map(String::from).collect(),
        }
    }

    /// End the pipe: remove its listeners and flush the sink.
    ///
    /// Calling this on an already finished pipe does nothing.
    pub fn finish(&self) -> Result<()> {
        if self.state.unsubscribe() {
            self.state.sink.lock().flush()?;
        }
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished.load(Ordering::Acquire)
    }

    /// Flush the sink without ending the pipe.
    pub fn flush(&self) -> Result<()> {
        if self.is_finished() {
            return Err(LoggerError::PipeFinished);
        }
        self.state.sink.lock().flush()
    }

    pub fn metrics(&self) -> &PipeMetrics {
        &self.state.metrics
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// The log types this pipe subscribed to.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn sink_name(&self) -> &str {
        &self.state.sink_name
    }
}

impl std::fmt::Debug for Pipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipe")
            .field("sink", &self.state.sink_name)
            .field("log_level", &self.log_level)
            .field("types", &self.types)
            .field("finished", &self.is_finished())
            .finish()
    }
}
