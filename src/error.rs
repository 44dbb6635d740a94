//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the string helpers.
///
/// Only argument validation can fail. A search that finds nothing returns
/// `None`, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StringError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl StringError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while loading normalizer profiles.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {kind} flags: {value}")]
    InvalidFlags { kind: &'static str, value: String },

    #[error("unknown profile '{name}' (available: {available})")]
    UnknownProfile { name: String, available: String },

    #[error("profile '{name}': {source}")]
    InvalidProfile {
        name: String,
        #[source]
        source: StringError,
    },
}
