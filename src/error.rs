//! Error types for page composition and configuration loading.

use thiserror::Error;

use crate::config::ConfigKey;

/// Errors that can occur while loading configuration or composing the page.
#[derive(Error, Debug)]
pub enum Error {
    /// A key the composer needs is absent from the configuration.
    ///
    /// The key set is fixed at build time, so this is a deployment error and
    /// is never recovered locally.
    #[error("missing configuration key: {0}")]
    MissingKey(ConfigKey),

    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The missing key, if this is a [`Error::MissingKey`].
    pub fn missing_key(&self) -> Option<ConfigKey> {
        match self {
            Error::MissingKey(key) => Some(*key),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
