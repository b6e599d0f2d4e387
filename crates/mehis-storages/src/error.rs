//! Error types for the persistence gateway.

use thiserror::Error;

/// Errors raised by storage backends and the JSON store.
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("Storage quota exceeded writing '{key}': {needed} bytes needed, {available} available")]
	QuotaExceeded {
		key: String,
		needed: usize,
		available: usize,
	},

	#[error("Invalid storage key: {0}")]
	InvalidKey(String),

	#[error("Configuration error: {0}")]
	ConfigError(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
