//! Errors raised while validating and writing environment files.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvFileError {
    #[error("key cannot be empty")]
    EmptyKey,

    #[error("value cannot be empty")]
    EmptyValue,

    #[error("path cannot be empty")]
    EmptyPath,

    #[error("key {key:?} contains '=', '<<', a line break or a NUL byte")]
    InvalidKey { key: String },

    #[error("value cannot contain NUL bytes")]
    NulInValue,

    #[error("path {path:?} contains a line break or a NUL byte")]
    InvalidPath { path: String },

    #[error("setting ${key} is disallowed")]
    DisallowedKey { key: String },

    #[error("${variable} is not set")]
    NotConfigured { variable: String },

    #[error("I/O error while {operation} at {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse error classes: what went wrong, not where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input, caught before any I/O.
    Validation,
    /// The indirection variable for a target file is missing.
    Configuration,
    /// The target file could not be opened or written.
    Io,
}

impl EnvFileError {
    #[must_use]
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyKey
            | Self::EmptyValue
            | Self::EmptyPath
            | Self::InvalidKey { .. }
            | Self::NulInValue
            | Self::InvalidPath { .. }
            | Self::DisallowedKey { .. } => ErrorKind::Validation,
            Self::NotConfigured { .. } => ErrorKind::Configuration,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}
