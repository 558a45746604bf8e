//! Message formatting
//!
//! A formatted message is its prefix (`[timestamp]` followed by the scope
//! labels) and the message parts, joined by single spaces and terminated by
//! the platform line ending.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// Line ending appended to every formatted message.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// How the timestamp inside the `[...]` prefix is rendered.
///
/// # Examples
///
/// ```
/// use scoped_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 7, 5, 9).unwrap();
/// assert_eq!(TimestampFormat::Clock.format(&at), "07:05:09");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// Wall clock time, `HH:MM:SS`, each field zero-padded
    #[default]
    Clock,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45+01:00`
    Rfc3339,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Clock => datetime.format("%H:%M:%S").to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => {
                // chrono reports bad specifiers through fmt::Error
                let mut out = String::new();
                match write!(out, "{}", datetime.format(format_str)) {
                    Ok(()) => out,
                    Err(_) => format_str.clone(),
                }
            }
        }
    }

    /// Format the current local time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}

/// Render `text` in gray when colors are on.
#[cfg(feature = "console")]
pub fn gray(text: &str, colors: bool) -> String {
    use colored::Colorize;
    if colors {
        text.bright_black().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(not(feature = "console"))]
pub fn gray(text: &str, _colors: bool) -> String {
    text.to_string()
}

/// The bracketed timestamp prefix entry, e.g. `[10:30:45]`.
pub fn bracketed_timestamp(stamp: &str, colors: bool) -> String {
    format!("[{}]", gray(stamp, colors))
}

/// Join prefix entries and message parts with spaces and terminate the line.
///
/// A part whose `Display` impl fails keeps whatever it wrote before failing;
/// the remaining parts and the line ending are still appended.
pub fn format_line<P, M>(prefix: &[P], parts: &[M]) -> String
where
    P: AsRef<str>,
    M: fmt::Display,
{
    let mut line = String::new();
    for entry in prefix {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(entry.as_ref());
    }
    for (i, part) in parts.iter().enumerate() {
        if i > 0 || !prefix.is_empty() {
            line.push(' ');
        }
        let _ = write!(line, "{}", part);
    }
    line.push_str(LINE_ENDING);
    line
}
