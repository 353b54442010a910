//! Error Types
//!
//! None of these reach the user: storage failures degrade to defaults and
//! config failures fall back to [`CounterConfig::default`](crate::CounterConfig).

use thiserror::Error;

/// Result alias for key-value storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures reported by a [`KeyValueStore`](crate::KeyValueStore)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store could not be reached at all (e.g. storage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Rejected widget configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("lower bound {min} must be below upper bound {max}")]
    EmptyRange { min: i64, max: i64 },
    #[error("initial step must be positive, got {0}")]
    NonPositiveStep(i64),
    #[error("auto-increment interval must be positive")]
    ZeroInterval,
    #[error("storage key must not be empty")]
    EmptyStorageKey,
}
