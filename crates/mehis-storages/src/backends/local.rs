//! Local file system storage backend implementation.

use parking_lot::Mutex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::LocalConfig;
use crate::{Result, StorageBackend, StorageError};

const EXTENSION: &str = "json";

/// Local file system storage backend.
///
/// Each key is stored as `<base_path>/<key>.json`. Writes go to a temporary
/// sibling file which is then renamed over the target, so a failed write never
/// leaves a truncated document behind.
#[derive(Debug)]
pub struct LocalStorage {
	base_path: PathBuf,
	// Serializes writers so two temp files never race for the same target
	write_lock: Mutex<()>,
}

impl LocalStorage {
	/// Create a new local storage backend, creating the base directory if needed.
	///
	/// # Errors
	///
	/// Returns `StorageError::ConfigError` if the base path exists but is not a
	/// directory.
	pub fn new(config: LocalConfig) -> Result<Self> {
		let base_path = config.base_path;

		if base_path.exists() && !base_path.is_dir() {
			return Err(StorageError::ConfigError(format!(
				"Base path is not a directory: {}",
				base_path.display()
			)));
		}
		fs::create_dir_all(&base_path)?;

		Ok(Self {
			base_path,
			write_lock: Mutex::new(()),
		})
	}

	pub fn base_path(&self) -> &Path {
		&self.base_path
	}

	fn get_path(&self, key: &str) -> Result<PathBuf> {
		let valid = !key.is_empty()
			&& !key.starts_with('.')
			&& key
				.chars()
				.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
		if !valid {
			return Err(StorageError::InvalidKey(key.to_string()));
		}
		Ok(self.base_path.join(format!("{}.{}", key, EXTENSION)))
	}
}

impl StorageBackend for LocalStorage {
	fn read(&self, key: &str) -> Result<Option<String>> {
		let path = self.get_path(key)?;
		match fs::read_to_string(&path) {
			Ok(content) => Ok(Some(content)),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
			Err(e) => Err(e.into()),
		}
	}

	fn write(&self, key: &str, value: &str) -> Result<()> {
		let path = self.get_path(key)?;
		let tmp_path = path.with_extension(format!("{}.tmp", EXTENSION));

		let _guard = self.write_lock.lock();
		fs::write(&tmp_path, value)?;
		if let Err(e) = fs::rename(&tmp_path, &path) {
			let _ = fs::remove_file(&tmp_path);
			return Err(e.into());
		}
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<()> {
		let path = self.get_path(key)?;
		match fs::remove_file(&path) {
			Ok(()) => Ok(()),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
			Err(e) => Err(e.into()),
		}
	}

	fn keys(&self) -> Result<Vec<String>> {
		let mut keys = Vec::new();
		for entry in fs::read_dir(&self.base_path)? {
			let path = entry?.path();
			if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
				continue;
			}
			if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
				keys.push(stem.to_string());
			}
		}
		keys.sort();
		Ok(keys)
	}
}
