//! Structured error types shared across seedrun crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`ConfigError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, line numbers, property keys).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for configuration loading.
///
/// Every variant is fatal at startup: the entry point reports it and exits
/// with a non-zero status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ConfigError {
    /// The configuration path does not exist or could not be read.
    #[error("file not found: {0}")]
    FileNotFound(ErrorInfo),
    /// A line of the property file is malformed.
    #[error("parse error: {0}")]
    Parse(ErrorInfo),
    /// A required property key is absent.
    #[error("missing key: {0}")]
    MissingKey(ErrorInfo),
    /// A property value cannot be coerced to its declared type.
    #[error("format error: {0}")]
    Format(ErrorInfo),
    /// Serialization of derived artefacts failed.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl ConfigError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            ConfigError::FileNotFound(info)
            | ConfigError::Parse(info)
            | ConfigError::MissingKey(info)
            | ConfigError::Format(info)
            | ConfigError::Serde(info) => info,
        }
    }

    /// Returns the property key the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        self.info().context.get("key").map(String::as_str)
    }
}
