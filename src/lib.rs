//! # Scoped Logger
//!
//! An event-driven console logger. Each log type (`error`, `warn`, `info`,
//! `debug` by default) is an event; logging formats the message with an
//! optional timestamp and scope prefix and emits it to whoever listens.
//!
//! ## Features
//!
//! - **Scoped children**: [`Logger::create_child`] adds a scope label and
//!   forwards everything to the parent
//! - **Level-filtered piping**: [`Logger::pipe`] writes the types selected by
//!   a level into any [`Sink`] until the pipe is finished
//! - **Shared instance**: [`shared`] returns a process-wide default logger
//!
//! ```
//! use scoped_logger::prelude::*;
//!
//! let logger = Logger::builder().timestamp(false).build()?;
//! let sink = MemorySink::new();
//! let pipe = logger.pipe(sink.clone(), PipeOptions::level(LogLevel::WARN));
//!
//! let db = logger.create_child("db");
//! db.warn("slow query");
//! db.info("connected");
//! pipe.finish()?;
//!
//! assert_eq!(sink.lines(), vec!["db slow query"]);
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

use once_cell::sync::Lazy;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::{MemorySink, WriterSink};
    pub use crate::core::{
        ListenerId, LogEvent, LogLevel, LogTypes, Logger, LoggerBuilder, LoggerError,
        LoggerOptions, Pipe, PipeMetrics, PipeOptions, Progress, Rendered, Result, Scope, Sink,
        TimestampFormat, DEFAULT_TYPES, LINE_ENDING,
    };
    pub use crate::shared;
}

#[cfg(feature = "console")]
pub use sinks::ConsoleSink;
#[cfg(feature = "file")]
pub use sinks::FileSink;
pub use sinks::{MemorySink, WriterSink};
pub use core::{
    EventEmitter, Listener, ListenerId, LogEvent, LogLevel, LogTypes, Logger, LoggerBuilder,
    LoggerError, LoggerOptions, Pipe, PipeMetrics, PipeOptions, Progress, Rendered, Result, Scope,
    Sink, TimestampFormat, DEFAULT_TYPES, LINE_ENDING,
};

static SHARED: Lazy<Logger> = Lazy::new(Logger::new);

/// The process-wide logger, created with default options on first use.
///
/// ```
/// let a = scoped_logger::shared();
/// let b = scoped_logger::shared();
/// assert!(std::ptr::eq(a, b));
/// ```
pub fn shared() -> &'static Logger {
    &SHARED
}
