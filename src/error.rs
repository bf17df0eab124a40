//! Error types for the contact manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A required contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstName => write!(f, "first name"),
            Self::LastName => write!(f, "last name"),
            Self::PhoneNumber => write!(f, "phone number"),
        }
    }
}

/// A contact was rejected because a required field is absent or empty.
///
/// This is the only way adding a contact can fail. The field is carried for
/// the message only; callers should treat every `InvalidContactError` alike.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid contact: {field} is required")]
pub struct InvalidContactError {
    field: ContactField,
}

impl InvalidContactError {
    pub(crate) fn missing(field: ContactField) -> Self {
        Self { field }
    }

    /// The first field found missing.
    pub fn field(&self) -> ContactField {
        self.field
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while loading bulk contact input.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The input file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not have the expected shape
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A well-formed record failed contact validation
    #[error("Record on line {line} rejected: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: InvalidContactError,
    },
}

/// Convenience type alias for Results with InvalidContactError
pub type ContactResult<T> = Result<T, InvalidContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ImportError
pub type ImportResult<T> = Result<T, ImportError>;
