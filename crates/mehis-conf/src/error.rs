//! Settings errors

use mehis_storages::StorageError;
use thiserror::Error;

use crate::sources::SourceError;

#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("Failed to load {source_name}: {error}")]
	Source {
		source_name: String,
		#[source]
		error: SourceError,
	},

	#[error("Invalid settings: {0}")]
	Invalid(String),

	#[error("Invalid settings: {0}")]
	Deserialize(#[from] serde_json::Error),

	#[error(transparent)]
	Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, SettingsError>;
