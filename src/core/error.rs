//! # Error Handling for SiteFrame
//!
//! This module defines the error types raised while loading, resolving and
//! validating a site configuration. The `thiserror` crate is used to keep
//! error creation consistent across the library.
//!
//! Every failure is reported before a record leaves the crate: callers either
//! receive a fully resolved [`SiteConfig`](crate::model::SiteConfig) or one of
//! these errors, never a partially valid record.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A unified result type for the SiteFrame library.
pub type Result<T> = std::result::Result<T, SiteFrameError>;

/// The main error type for SiteFrame.
#[derive(Error, Debug)]
pub enum SiteFrameError {
    /// A single configuration field is missing, malformed or refers to
    /// something that is not defined.
    #[error("Configuration error in `{field}`: {message}.")]
    ConfigError {
        /// Field path using the host's key names (e.g. `i18n.defaultLocale`).
        field: String,
        /// Description of the problem.
        message: String,
    },

    /// The record failed one or more invariants.
    ///
    /// Every violation found during validation is reported at once.
    #[error("Invalid site configuration:\n{0}")]
    Invalid(ConfigDiagnostics),

    /// A configuration file could not be parsed.
    #[error("Failed to parse {format} config file `{path:?}`: {message}.")]
    ParseError {
        /// Path of the offending file.
        path: PathBuf,
        /// Format the file was read as.
        format: &'static str,
        /// Parser message.
        message: String,
    },

    /// IO error encountered while reading a configuration file.
    #[error("File IO error at `{path:?}`: {source}")]
    IOError {
        /// Path associated with the IO error.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A text template in the record could not be rendered.
    #[error(
        "Template rendering error: {message} in template `{template}`."
    )]
    TemplateRenderingError {
        /// Description of the rendering error.
        message: String,
        /// The template source that failed.
        template: String,
        /// Optional source error providing additional context.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The resolved record could not be serialised for the host.
    #[error("Serialization error ({format}): {message}.")]
    SerializationError {
        /// Output format that failed.
        format: &'static str,
        /// Serializer message.
        message: String,
    },
}

impl SiteFrameError {
    /// Creates a `ConfigError` naming the offending field.
    pub fn config_error<F, S>(field: F, message: S) -> Self
    where
        F: Into<String>,
        S: Into<String>,
    {
        SiteFrameError::ConfigError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Wraps an IO error with the path that caused it.
    pub fn io_error(path: PathBuf, source: std::io::Error) -> Self {
        SiteFrameError::IOError { path, source }
    }

    /// Creates a `ParseError` for a configuration file.
    pub fn parse_error<S: Into<String>>(
        path: PathBuf,
        format: &'static str,
        message: S,
    ) -> Self {
        SiteFrameError::ParseError {
            path,
            format,
            message: message.into(),
        }
    }

    /// Creates a `SerializationError`.
    pub fn serialization_error<S: Into<String>>(
        format: &'static str,
        message: S,
    ) -> Self {
        SiteFrameError::SerializationError {
            format,
            message: message.into(),
        }
    }

    /// Returns the configuration fields this error names, if any.
    ///
    /// IO, parse and serialisation failures name no field.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            SiteFrameError::ConfigError { field, .. } => {
                vec![field.as_str()]
            }
            SiteFrameError::Invalid(diagnostics) => diagnostics
                .iter()
                .map(|d| d.field.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// A single invariant violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    /// Field path (e.g. `themeConfig.navbar.items[1].label`).
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

/// Collected diagnostics from a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    items: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation for `field`.
    pub fn error<F, S>(&mut self, field: F, message: S)
    where
        F: Into<String>,
        S: Into<String>,
    {
        self.items.push(ConfigDiagnostic {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Returns `true` when no violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of recorded violations.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates over the recorded violations in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.items.iter()
    }

    /// Converts the collection into a result: `Ok` when empty.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(SiteFrameError::Invalid(self))
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {}", item)?;
        }
        Ok(())
    }
}
