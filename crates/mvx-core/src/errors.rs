//! Structured error types shared across MVX crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`MvxError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, row indices, sizes, etc.).
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

/// Canonical error type for the MVX dataset tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum MvxError {
    /// Column naming and record shape errors.
    #[error("schema error: {0}")]
    Schema(ErrorInfo),
    /// Numeric coercion errors on raw text fields.
    #[error("coerce error: {0}")]
    Coerce(ErrorInfo),
    /// Table alignment and padding errors.
    #[error("table error: {0}")]
    Table(ErrorInfo),
    /// Run configuration errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and export errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
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

impl MvxError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            MvxError::Schema(info)
            | MvxError::Coerce(info)
            | MvxError::Table(info)
            | MvxError::Config(info)
            | MvxError::Serde(info) => info,
        }
    }

    /// Adds a context entry to the payload, preserving the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            MvxError::Schema(info) => MvxError::Schema(info.with_context(key, value)),
            MvxError::Coerce(info) => MvxError::Coerce(info.with_context(key, value)),
            MvxError::Table(info) => MvxError::Table(info.with_context(key, value)),
            MvxError::Config(info) => MvxError::Config(info.with_context(key, value)),
            MvxError::Serde(info) => MvxError::Serde(info.with_context(key, value)),
        }
    }
}
