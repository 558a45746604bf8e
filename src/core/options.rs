//! Logger options
//!
//! Options can be assembled in code (usually through
//! [`LoggerBuilder`](crate::LoggerBuilder)) or loaded from JSON:
//!
//! ```
//! use scoped_logger::LoggerOptions;
//!
//! let options = LoggerOptions::from_json(r#"{ "scope": "db", "timestamp": false }"#).unwrap();
//! assert_eq!(options.scope.labels(), ["db"]);
//! assert!(!options.timestamp);
//! ```

use super::error::Result;
use super::format::TimestampFormat;
use super::log_level::LogTypes;
use serde::{Deserialize, Serialize};

/// Ordered scope labels printed after the timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScopeRepr", into = "Vec<String>")]
pub struct Scope(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum ScopeRepr {
    Unset,
    Label(String),
    Labels(Vec<String>),
    Flag(bool),
}

impl TryFrom<ScopeRepr> for Scope {
    type Error = String;

    fn try_from(repr: ScopeRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            ScopeRepr::Unset | ScopeRepr::Flag(false) => Ok(Scope::none()),
            ScopeRepr::Label(label) => Ok(Scope::from(label)),
            ScopeRepr::Labels(labels) => Ok(Scope(labels)),
            ScopeRepr::Flag(true) => {
                Err("scope must be a label, a list of labels, false or null".to_string())
            }
        }
    }
}

impl From<Scope> for Vec<String> {
    fn from(scope: Scope) -> Self {
        scope.0
    }
}

impl Scope {
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A new scope with `label` appended.
    #[must_use]
    pub fn child(&self, label: impl Into<String>) -> Self {
        let mut labels = self.0.clone();
        labels.push(label.into());
        Self(labels)
    }
}

impl From<String> for Scope {
    /// A single label; the empty string means no scope.
    fn from(label: String) -> Self {
        if label.is_empty() {
            Self::none()
        } else {
            Self(vec![label])
        }
    }
}

impl From<&str> for Scope {
    fn from(label: &str) -> Self {
        Scope::from(label.to_string())
    }
}

impl From<Vec<String>> for Scope {
    fn from(labels: Vec<String>) -> Self {
        Self(labels)
    }
}

impl From<Vec<&str>> for Scope {
    fn from(labels: Vec<&str>) -> Self {
        Self(labels.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Scope {
    fn from(labels: [&str; N]) -> Self {
        Self(labels.iter().map(|l| l.to_string()).collect())
    }
}

impl<T: Into<Scope>> From<Option<T>> for Scope {
    fn from(scope: Option<T>) -> Self {
        scope.map_or_else(Scope::none, Into::into)
    }
}

/// Everything a [`Logger`](crate::Logger) is created from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerOptions {
    /// Log types, most severe first
    pub types: LogTypes,
    pub scope: Scope,
    /// Whether messages are prefixed with a timestamp
    pub timestamp: bool,
    /// Whether the timestamp is rendered in gray
    pub colors: bool,
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            types: LogTypes::defaults(),
            scope: Scope::none(),
            timestamp: true,
            colors: true,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl LoggerOptions {
    /// Parse options from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: LoggerOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        LogTypes::validate(self.types.as_ref())
    }
}
