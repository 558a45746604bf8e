//! Log types and level definitions
//!
//! A logger is created with an ordered list of log types. The position of a
//! type in that list is its severity: the first type has level 1, the second
//! level 2 and so on. A level selects every type up to and including it.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The log types a logger has when none are configured.
pub const DEFAULT_TYPES: [&str; 4] = ["error", "warn", "info", "debug"];

/// Numeric verbosity threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(pub u8);

impl LogLevel {
    /// Nothing is selected at this level.
    pub const SILENT: LogLevel = LogLevel(0);
    pub const ERROR: LogLevel = LogLevel(1);
    pub const WARN: LogLevel = LogLevel(2);
    pub const INFO: LogLevel = LogLevel(3);
    pub const DEBUG: LogLevel = LogLevel(4);

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_silent(self) -> bool {
        self.0 == 0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::INFO
    }
}

impl From<u8> for LogLevel {
    fn from(value: u8) -> Self {
        LogLevel(value)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LogLevel::SILENT => write!(f, "SILENT"),
            LogLevel(n) if (n as usize) <= DEFAULT_TYPES.len() => {
                write!(f, "{}", DEFAULT_TYPES[n as usize - 1].to_uppercase())
            }
            LogLevel(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    /// Accepts a number, `silent`, or one of the default type names.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<u8>() {
            return Ok(LogLevel(n));
        }

        match trimmed.to_lowercase().as_str() {
            "silent" => Ok(LogLevel::SILENT),
            "error" => Ok(LogLevel::ERROR),
            "warn" | "warning" => Ok(LogLevel::WARN),
            "info" => Ok(LogLevel::INFO),
            "debug" => Ok(LogLevel::DEBUG),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

/// Ordered set of log type names, most severe first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogTypes(Vec<String>);

impl LogTypes {
    /// Build a type list, rejecting empty lists, blank or duplicate names,
    /// and lists too long to be addressed by a [`LogLevel`].
    pub fn new<I, S>(types: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let types: Vec<String> = types.into_iter().map(Into::into).collect();
        Self::validate(&types)?;
        Ok(Self(types))
    }

    pub fn defaults() -> Self {
        Self(DEFAULT_TYPES.iter().map(|t| t.to_string()).collect())
    }

    pub(crate) fn validate(types: &[String]) -> Result<()> {
        if types.is_empty() {
            return Err(LoggerError::config("log types", "at least one log type is required"));
        }
        if types.len() > u8::MAX as usize {
            return Err(LoggerError::config(
                "log types",
                format!("at most {} log types are supported, got {}", u8::MAX, types.len()),
            ));
        }
        for (i, name) in types.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(LoggerError::config("log types", "log type names must not be empty"));
            }
            if types[..i].contains(name) {
                return Err(LoggerError::config(
                    "log types",
                    format!("duplicate log type '{}'", name),
                ));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|t| t == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The level of `name`, i.e. its position in the list plus one.
    pub fn level_of(&self, name: &str) -> Option<LogLevel> {
        self.0
            .iter()
            .position(|t| t == name)
            .map(|i| LogLevel(i as u8 + 1))
    }

    /// The types handled at `level`: the first `level` entries.
    pub fn types_for_level(&self, level: LogLevel) -> Vec<&str> {
        self.iter().take(level.value() as usize).collect()
    }

    /// The least verbose level that still selects every type.
    pub fn max_level(&self) -> LogLevel {
        LogLevel(self.0.len() as u8)
    }
}

impl Default for LogTypes {
    fn default() -> Self {
        Self::defaults()
    }
}

impl AsRef<[String]> for LogTypes {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels() {
        let types = LogTypes::defaults();
        assert_eq!(types.level_of("error"), Some(LogLevel::ERROR));
        assert_eq!(types.level_of("warn"), Some(LogLevel::WARN));
        assert_eq!(types.level_of("info"), Some(LogLevel::INFO));
        assert_eq!(types.level_of("debug"), Some(LogLevel::DEBUG));
        assert_eq!(types.level_of("trace"), None);
    }

    #[test]
    fn test_types_for_level() {
        let types = LogTypes::defaults();
        assert!(types.types_for_level(LogLevel::SILENT).is_empty());
        assert_eq!(types.types_for_level(LogLevel::ERROR), vec!["error"]);
        assert_eq!(types.types_for_level(LogLevel::INFO), vec!["error", "warn", "info"]);
        assert_eq!(types.types_for_level(LogLevel(200)).len(), 4);
    }

    #[test]
    fn test_custom_types() {
        let types = LogTypes::new(["first", "second"]).unwrap();
        assert_eq!(types.level_of("second"), Some(LogLevel(2)));
        assert_eq!(types.max_level(), LogLevel(2));
        assert!(!types.contains("info"));
    }

    #[test]
    fn test_invalid_types() {
        assert!(LogTypes::new(Vec::<String>::new()).is_err());
        assert!(LogTypes::new(["a", ""]).is_err());
        assert!(LogTypes::new(["a", "b", "a"]).is_err());
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("silent".parse::<LogLevel>().unwrap(), LogLevel::SILENT);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::WARN);
        assert_eq!(" 7 ".parse::<LogLevel>().unwrap(), LogLevel(7));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_level_display() {
        assert_eq!(LogLevel::SILENT.to_string(), "SILENT");
        assert_eq!(LogLevel::WARN.to_string(), "WARN");
        assert_eq!(LogLevel(9).to_string(), "9");
        assert_eq!(LogLevel::default(), LogLevel::INFO);
    }
}
