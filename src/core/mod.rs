//! Core logger types and traits

pub mod emitter;
pub mod error;
pub mod format;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod pipe;
pub mod progress;
pub mod sink;

pub use emitter::{EventEmitter, Listener, ListenerId, LogEvent};
pub use error::{LoggerError, Result};
pub use format::{TimestampFormat, LINE_ENDING};
pub use log_level::{LogLevel, LogTypes, DEFAULT_TYPES};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::PipeMetrics;
pub use options::{LoggerOptions, Scope};
pub use pipe::{Pipe, PipeOptions};
pub use progress::{Progress, Rendered};
pub use sink::Sink;
