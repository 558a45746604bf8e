//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each expands to
//! [`Logger::log`](crate::Logger::log) and yields its `Result<bool>`.
//!
//! # Examples
//!
//! ```
//! use scoped_logger::prelude::*;
//! use scoped_logger::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message under any log type.
///
/// # Examples
///
/// ```
/// # use scoped_logger::prelude::*;
/// let logger = Logger::builder().types(["audit", "noise"]).build().unwrap();
/// use scoped_logger::log;
/// log!(logger, "audit", "user {} signed in", 42).unwrap();
/// assert!(log!(logger, "missing", "unknown type").is_err());
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $log_type:expr, $($arg:tt)+) => {
        $logger.log($log_type, ::std::format!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use scoped_logger::prelude::*;
/// # let logger = Logger::new();
/// use scoped_logger::error;
/// error!(logger, "Failed to connect to database").unwrap();
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "error", $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use scoped_logger::prelude::*;
/// # let logger = Logger::new();
/// use scoped_logger::warn;
/// warn!(logger, "Low disk space").unwrap();
/// warn!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "warn", $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "info", $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "debug", $($arg)+)
    };
}
