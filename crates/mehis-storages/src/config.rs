//! Configuration types for storage backends.

use crate::{Result, StorageError};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Storage backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
	/// One JSON file per key under a directory
	Local,
	/// In-process map, lost on exit
	Memory,
}

impl std::fmt::Display for BackendType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			BackendType::Local => write!(f, "local"),
			BackendType::Memory => write!(f, "memory"),
		}
	}
}

impl FromStr for BackendType {
	type Err = StorageError;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_lowercase().as_str() {
			"local" => Ok(BackendType::Local),
			"memory" => Ok(BackendType::Memory),
			_ => Err(StorageError::ConfigError(format!(
				"Invalid backend type: {}",
				s
			))),
		}
	}
}

/// Configuration for the local file system backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalConfig {
	/// Directory holding one file per key
	pub base_path: PathBuf,
}

impl LocalConfig {
	pub fn new(base_path: impl Into<PathBuf>) -> Self {
		Self {
			base_path: base_path.into(),
		}
	}
}

/// Configuration for the in-memory backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryConfig {
	/// Maximum bytes of keys plus values; `None` is unbounded
	pub quota_bytes: Option<usize>,
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
	Local(LocalConfig),
	Memory(MemoryConfig),
}

impl StorageConfig {
	pub fn backend_type(&self) -> BackendType {
		match self {
			StorageConfig::Local(_) => BackendType::Local,
			StorageConfig::Memory(_) => BackendType::Memory,
		}
	}

	/// Load configuration from environment variables.
	///
	/// # Environment Variables
	///
	/// - `MEHIS_STORAGE_BACKEND`: `"local"` or `"memory"` (required)
	///
	/// ## Local Backend
	/// - `MEHIS_STORAGE_PATH`: Base directory path (required)
	///
	/// ## Memory Backend
	/// - `MEHIS_STORAGE_QUOTA`: Quota in bytes (optional)
	pub fn from_env() -> Result<Self> {
		let backend_type = env::var("MEHIS_STORAGE_BACKEND").map_err(|_| {
			StorageError::ConfigError(
				"MEHIS_STORAGE_BACKEND environment variable not set".to_string(),
			)
		})?;

		match backend_type.parse::<BackendType>()? {
			BackendType::Local => {
				let base_path = env::var("MEHIS_STORAGE_PATH").map_err(|_| {
					StorageError::ConfigError(
						"MEHIS_STORAGE_PATH environment variable not set".to_string(),
					)
				})?;
				Ok(StorageConfig::Local(LocalConfig::new(base_path)))
			}
			BackendType::Memory => {
				let quota_bytes = match env::var("MEHIS_STORAGE_QUOTA") {
					Ok(raw) => Some(raw.trim().parse::<usize>().map_err(|_| {
						StorageError::ConfigError(format!("Invalid storage quota: {}", raw))
					})?),
					Err(_) => None,
				};
				Ok(StorageConfig::Memory(MemoryConfig { quota_bytes }))
			}
		}
	}
}
