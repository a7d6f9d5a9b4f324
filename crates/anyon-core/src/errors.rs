//! Structured error types shared across the anyon chain crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`AnyonError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (model names, positions, sizes, etc.).
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

    /// Adds a context entry, rendering the value through its `Display`
    /// impl so call sites can pass positions, sizes and states directly.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.context.insert(key.into(), value.to_string());
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
        write!(f, "[{}] {}", self.code, self.message)?;
        for (key, value) in &self.context {
            write!(f, "; {key}={value}")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

/// Canonical error type for the anyon chain engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum AnyonError {
    /// Basis state and enumeration errors.
    #[error("basis error: {0}")]
    Basis(ErrorInfo),
    /// Bond operator construction and propagation errors.
    #[error("operator error: {0}")]
    Operator(ErrorInfo),
    /// Eigensolver errors.
    #[error("spectrum error: {0}")]
    Spectrum(ErrorInfo),
    /// Cache artifact errors.
    #[error("cache error: {0}")]
    Cache(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl AnyonError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            AnyonError::Basis(info)
            | AnyonError::Operator(info)
            | AnyonError::Spectrum(info)
            | AnyonError::Cache(info)
            | AnyonError::Serde(info) => info,
        }
    }

    /// The stable machine readable code of the payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// The subsystem the error originated in, as a short label.
    pub fn family(&self) -> &'static str {
        match self {
            AnyonError::Basis(_) => "basis",
            AnyonError::Operator(_) => "operator",
            AnyonError::Spectrum(_) => "spectrum",
            AnyonError::Cache(_) => "cache",
            AnyonError::Serde(_) => "serde",
        }
    }
}
