//! Main logger implementation

use super::{
    emitter::{EventEmitter, ListenerId, LogEvent},
    error::{LoggerError, Result},
    format::{self, TimestampFormat},
    log_level::{LogLevel, LogTypes},
    options::{LoggerOptions, Scope},
    pipe::{Pipe, PipeOptions},
    sink::Sink,
};
use std::fmt;
use std::sync::Arc;

/// An event-emitting logger.
///
/// Logging under a type formats the message once and emits it as an event
/// named after the type. Nothing is printed unless something listens, either
/// a listener added with [`Logger::on`] or a sink attached with
/// [`Logger::pipe`].
///
/// # Example
///
/// ```
/// use scoped_logger::prelude::*;
///
/// let logger = Logger::builder().scope("app").timestamp(false).build().unwrap();
/// let sink = MemorySink::new();
/// let _pipe = logger.pipe(sink.clone(), PipeOptions::default());
///
/// logger.info("started");
/// logger.debug("not piped at the default level");
///
/// assert_eq!(sink.contents(), format!("app started{}", LINE_ENDING));
/// ```
pub struct Logger {
    emitter: Arc<EventEmitter>,
    types: Arc<LogTypes>,
    scope: Scope,
    print_timestamp: bool,
    colors: bool,
    timestamp_format: TimestampFormat,
}

impl Logger {
    /// A logger with the default types, no scope and timestamps on.
    #[must_use]
    pub fn new() -> Self {
        Self::from_validated(LoggerOptions::default())
    }

    pub fn with_options(options: LoggerOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_validated(options))
    }

    fn from_validated(options: LoggerOptions) -> Self {
        Self {
            emitter: Arc::new(EventEmitter::new()),
            types: Arc::new(options.types),
            scope: options.scope,
            print_timestamp: options.timestamp,
            colors: options.colors,
            timestamp_format: options.timestamp_format,
        }
    }

    /// The log types this logger emits, most severe first.
    pub fn types(&self) -> &LogTypes {
        &self.types
    }

    pub fn scope(&self) -> &[String] {
        self.scope.labels()
    }

    pub fn prints_timestamp(&self) -> bool {
        self.print_timestamp
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// The options this logger was built from.
    pub fn options(&self) -> LoggerOptions {
        LoggerOptions {
            types: (*self.types).clone(),
            scope: self.scope.clone(),
            timestamp: self.print_timestamp,
            colors: self.colors,
            timestamp_format: self.timestamp_format.clone(),
        }
    }

    /// The level of `log_type`, e.g. `3` for `info` with the default types.
    pub fn level_of(&self, log_type: &str) -> Option<LogLevel> {
        self.types.level_of(log_type)
    }

    /// The log types handled at `level`.
    pub fn types_for_level(&self, level: LogLevel) -> Vec<&str> {
        self.types.types_for_level(level)
    }

    /// The current time as a bracketed prefix entry, e.g. `[09:41:07]`.
    pub fn timestamp(&self) -> String {
        format::bracketed_timestamp(&self.timestamp_format.now(), self.colors)
    }

    /// Timestamp (if enabled) followed by the scope labels.
    pub fn prefix(&self) -> Vec<String> {
        let mut prefix = Vec::with_capacity(self.scope.labels().len() + 1);
        if self.print_timestamp {
            prefix.push(self.timestamp());
        }
        prefix.extend(self.scope.labels().iter().cloned());
        prefix
    }

    /// Prefix and messages joined by spaces, terminated by [`LINE_ENDING`](crate::LINE_ENDING).
    pub fn format<M: fmt::Display>(&self, messages: &[M]) -> String {
        format::format_line(&self.prefix(), messages)
    }

    /// Format `message` and emit it under `log_type`.
    ///
    /// Returns whether anything was listening.
    pub fn log(&self, log_type: &str, message: impl fmt::Display) -> Result<bool> {
        self.log_parts(log_type, &[&message as &dyn fmt::Display])
    }

    /// Like [`Logger::log`], joining several message parts with spaces.
    pub fn log_parts(&self, log_type: &str, messages: &[&dyn fmt::Display]) -> Result<bool> {
        if !self.types.contains(log_type) {
            return Err(LoggerError::unknown_type(log_type, self.types.iter()));
        }

        let line = self.format(messages);
        Ok(self.emitter.emit(log_type, &line))
    }

    fn log_default(&self, log_type: &str, message: &dyn fmt::Display) -> &Self {
        if let Err(e) = self.log(log_type, message) {
            eprintln!("[LOGGER ERROR] {}", e);
        }
        self
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) -> &Self {
        self.log_default("error", &message)
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) -> &Self {
        self.log_default("warn", &message)
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) -> &Self {
        self.log_default("info", &message)
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) -> &Self {
        self.log_default("debug", &message)
    }

    /// Listen for messages of `log_type`.
    ///
    /// ```
    /// use scoped_logger::Logger;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let warnings = Arc::new(Mutex::new(Vec::new()));
    /// let seen = Arc::clone(&warnings);
    ///
    /// let logger = Logger::new();
    /// logger.on("warn", move |event| seen.lock().unwrap().push(event.message.to_string()));
    /// logger.warn("Test warning");
    ///
    /// assert!(warnings.lock().unwrap()[0].contains("Test warning"));
    /// ```
    pub fn on<F>(&self, log_type: &str, listener: F) -> ListenerId
    where
        F: Fn(&LogEvent<'_>) + Send + Sync + 'static,
    {
        self.emitter.on(log_type, listener)
    }

    pub fn once<F>(&self, log_type: &str, listener: F) -> ListenerId
    where
        F: Fn(&LogEvent<'_>) + Send + Sync + 'static,
    {
        self.emitter.once(log_type, listener)
    }

    pub fn remove_listener(&self, log_type: &str, id: ListenerId) -> bool {
        self.emitter.remove_listener(log_type, id)
    }

    pub fn remove_all_listeners(&self, log_type: &str) -> usize {
        self.emitter.remove_all_listeners(log_type)
    }

    pub fn listener_count(&self, log_type: &str) -> usize {
        self.emitter.listener_count(log_type)
    }

    /// Create a child logger whose scope is this logger's scope plus `name`.
    ///
    /// The child shares this logger's types and formatting settings. Every
    /// message it emits is re-emitted, already formatted, on this logger
    /// under the same type. The forwarding listeners are the child's first
    /// listeners.
    #[must_use]
    pub fn create_child(&self, name: impl Into<String>) -> Logger {
        let child = Logger {
            emitter: Arc::new(EventEmitter::new()),
            types: Arc::clone(&self.types),
            scope: self.scope.child(name),
            print_timestamp: self.print_timestamp,
            colors: self.colors,
            timestamp_format: self.timestamp_format.clone(),
        };

        for log_type in self.types.iter() {
            let parent = Arc::clone(&self.emitter);
            child.emitter.on(log_type, move |event| {
                parent.emit(event.log_type, event.message);
            });
        }

        child
    }

    /// Write every message selected by `options.log_level` to `sink`.
    ///
    /// The subscription lasts until [`Pipe::finish`] is called or the sink
    /// fails.
    ///
    /// ```
    /// use scoped_logger::prelude::*;
    ///
    /// let logger = Logger::builder().timestamp(false).build().unwrap();
    /// let sink = MemorySink::new();
    /// let pipe = logger.pipe(sink.clone(), PipeOptions::level(LogLevel::ERROR));
    ///
    /// logger.warn("ignored");
    /// logger.error("written");
    /// pipe.finish().unwrap();
    ///
    /// assert_eq!(sink.lines(), vec!["written"]);
    /// ```
    pub fn pipe<S: Sink + 'static>(&self, sink: S, options: PipeOptions) -> Pipe {
        let types = self.types.types_for_level(options.log_level);
        Pipe::attach(&self.emitter, types, sink, options)
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use scoped_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .types(["fatal", "error", "info"])
    ///     .scope(["worker", "7"])
    ///     .colors(false)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(logger.level_of("info"), Some(LogLevel(3)));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("types", &self.types)
            .field("scope", &self.scope)
            .field("timestamp", &self.print_timestamp)
            .field("colors", &self.colors)
            .field("timestamp_format", &self.timestamp_format)
            .field("emitter", &self.emitter)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    options: LoggerOptions,
    types: Option<Vec<String>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            options: LoggerOptions::default(),
            types: None,
        }
    }

    /// Start from existing options
    pub fn from_options(options: LoggerOptions) -> Self {
        Self {
            options,
            types: None,
        }
    }

    /// Set the log types, most severe first
    #[must_use = "builder methods return a new value"]
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Set the scope: a label, a list of labels, or `None`
    #[must_use = "builder methods return a new value"]
    pub fn scope(mut self, scope: impl Into<Scope>) -> Self {
        self.options.scope = scope.into();
        self
    }

    /// Enable or disable the timestamp prefix
    #[must_use = "builder methods return a new value"]
    pub fn timestamp(mut self, enabled: bool) -> Self {
        self.options.timestamp = enabled;
        self
    }

    /// Enable or disable gray timestamps
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.options.colors = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.options.timestamp_format = format;
        self
    }

    /// Build the Logger, validating the type list
    pub fn build(mut self) -> Result<Logger> {
        if let Some(types) = self.types.take() {
            self.options.types = LogTypes::new(types)?;
        }
        Logger::with_options(self.options)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use crate::LINE_ENDING;
    use parking_lot::Mutex;

    fn quiet(scope: impl Into<Scope>) -> Logger {
        Logger::builder()
            .scope(scope)
            .timestamp(false)
            .build()
            .expect("valid options")
    }

    fn capture(logger: &Logger, log_type: &str) -> Arc<Mutex<Vec<String>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        logger.on(log_type, move |event| seen_clone.lock().push(event.message.to_string()));
        seen
    }

    #[test]
    fn test_builder_default() {
        let logger = LoggerBuilder::default().build().unwrap();
        assert_eq!(logger.types(), &LogTypes::defaults());
        assert!(logger.scope().is_empty());
        assert!(logger.prints_timestamp());
        assert!(logger.colors_enabled());
    }

    #[test]
    fn test_builder_rejects_empty_types() {
        let err = Logger::builder().types(Vec::<String>::new()).build().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_levels_for_default_types() {
        let logger = Logger::new();
        assert_eq!(logger.level_of("error"), Some(LogLevel::ERROR));
        assert_eq!(logger.level_of("debug"), Some(LogLevel::DEBUG));
        assert_eq!(logger.types_for_level(LogLevel::WARN), vec!["error", "warn"]);
    }

    #[test]
    fn test_each_type_emits_its_own_event() {
        let logger = quiet(None::<&str>);
        for log_type in crate::DEFAULT_TYPES {
            let seen = capture(&logger, log_type);
            logger.log(log_type, format!("{} message", log_type)).unwrap();
            assert_eq!(
                *seen.lock(),
                vec![format!("{} message{}", log_type, LINE_ENDING)]
            );
        }
    }

    #[test]
    fn test_log_unknown_type() {
        let logger = Logger::new();
        let err = logger.log("trace", "nope").unwrap_err();
        assert!(matches!(err, LoggerError::UnknownType { .. }));
    }

    #[test]
    fn test_log_reports_listeners() {
        let logger = Logger::new();
        assert!(!logger.log("info", "unheard").unwrap());
        logger.on("info", |_| {});
        assert!(logger.log("info", "heard").unwrap());
    }

    #[test]
    fn test_convenience_methods_chain() {
        let logger = quiet("chain");
        let seen = capture(&logger, "warn");
        logger.warn("one").info("ignored").warn("two");
        assert_eq!(seen.lock().len(), 2);
    }

    #[test]
    fn test_convenience_method_for_missing_type_is_noop() {
        let logger = Logger::builder().types(["a", "b"]).build().unwrap();
        let seen = capture(&logger, "a");
        logger.info("no info type here");
        assert!(seen.lock().is_empty());
        assert!(logger.log("a", "ok").unwrap());
    }

    #[test]
    fn test_format_joins_messages() {
        let logger = quiet(None::<&str>);
        assert_eq!(
            logger.format(&["first", "second"]),
            format!("first second{}", LINE_ENDING)
        );
        assert!(logger.format(&["x"]).ends_with('\n'));
    }

    #[test]
    fn test_log_parts_mixed_display() {
        let logger = quiet("calc");
        let seen = capture(&logger, "info");
        logger.log_parts("info", &[&"sum", &42, &1.5]).unwrap();
        assert_eq!(*seen.lock(), vec![format!("calc sum 42 1.5{}", LINE_ENDING)]);
    }

    #[test]
    fn test_prefix_with_timestamp() {
        let logger = Logger::builder().colors(false).build().unwrap();
        let prefix = logger.prefix();
        assert_eq!(prefix.len(), 1);
        let stamp = &prefix[0];
        assert!(stamp.starts_with('[') && stamp.ends_with(']'));
        assert_eq!(stamp.len(), "[00:00:00]".len());
    }

    #[test]
    fn test_prefix_includes_scope() {
        let logger = Logger::builder()
            .scope(["scope", "another"])
            .colors(false)
            .build()
            .unwrap();
        let prefix = logger.prefix();
        assert_eq!(&prefix[1..], ["scope", "another"]);
    }

    #[test]
    fn test_child_inherits_options() {
        let parent = Logger::builder()
            .types(["a", "b"])
            .timestamp(false)
            .colors(false)
            .build()
            .unwrap();
        let child = parent.create_child("child");

        assert_eq!(child.types(), parent.types());
        assert_eq!(child.prints_timestamp(), parent.prints_timestamp());
        assert_eq!(child.colors_enabled(), parent.colors_enabled());
        assert_eq!(child.scope(), ["child"]);
    }

    #[test]
    fn test_child_forwards_formatted_message() {
        let parent = quiet("parent");
        let child = parent.create_child("child");
        let seen = capture(&parent, "info");

        child.info("Test message");
        assert_eq!(
            *seen.lock(),
            vec![format!("parent child Test message{}", LINE_ENDING)]
        );
    }

    #[test]
    fn test_forwarding_runs_before_child_listeners() {
        let parent = quiet(None::<&str>);
        let child = parent.create_child("c");
        let order = Arc::new(Mutex::new(Vec::new()));

        let o = Arc::clone(&order);
        child.on("warn", move |_| o.lock().push("child"));
        let o = Arc::clone(&order);
        parent.on("warn", move |_| o.lock().push("parent"));

        child.warn("w");
        assert_eq!(*order.lock(), vec!["parent", "child"]);
        assert_eq!(child.listener_count("warn"), 2);
    }

    #[test]
    fn test_grandchild_forwards_through_chain() {
        let root = quiet("root");
        let grandchild = root.create_child("mid").create_child("leaf");
        let seen = capture(&root, "error");

        grandchild.error("deep");
        assert_eq!(
            *seen.lock(),
            vec![format!("root mid leaf deep{}", LINE_ENDING)]
        );
    }

    #[test]
    fn test_pipe_respects_level() {
        let logger = quiet(None::<&str>);
        let sink = MemorySink::new();
        let pipe = logger.pipe(sink.clone(), PipeOptions::level(LogLevel::WARN));

        logger.info("Test info");
        logger.warn("Test warning");

        assert_eq!(sink.lines(), vec!["Test warning"]);
        assert_eq!(pipe.metrics().written_count(), 1);
    }

    #[test]
    fn test_pipe_finish_removes_listeners() {
        let logger = Logger::new();
        let pipe = logger.pipe(MemorySink::new(), PipeOptions::default());
        assert_eq!(logger.listener_count("info"), 1);
        assert_eq!(logger.listener_count("debug"), 0);

        pipe.finish().unwrap();
        for log_type in crate::DEFAULT_TYPES {
            assert_eq!(logger.listener_count(log_type), 0);
        }
    }

    #[test]
    fn test_pipe_boxed_sink() {
        let logger = quiet(None::<&str>);
        let sink = MemorySink::new();
        let boxed: Box<dyn Sink> = Box::new(sink.clone());
        let pipe = logger.pipe(boxed, PipeOptions::default());

        logger.error("boxed");
        assert_eq!(pipe.sink_name(), "memory");
        assert_eq!(sink.lines(), vec!["boxed"]);
    }

    #[test]
    fn test_silent_pipe_subscribes_nothing() {
        let logger = Logger::new();
        let pipe = logger.pipe(MemorySink::new(), PipeOptions::level(LogLevel::SILENT));
        assert!(pipe.types().is_empty());
        for log_type in crate::DEFAULT_TYPES {
            assert_eq!(logger.listener_count(log_type), 0);
        }
    }

    #[test]
    fn test_options_roundtrip() {
        let logger = Logger::builder().scope("db").timestamp(false).build().unwrap();
        let rebuilt = Logger::with_options(logger.options()).unwrap();
        assert_eq!(rebuilt.scope(), ["db"]);
        assert!(!rebuilt.prints_timestamp());
    }
}
