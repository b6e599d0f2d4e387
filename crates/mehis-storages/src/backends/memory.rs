//! In-memory storage backend.

use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::config::MemoryConfig;
use crate::{Result, StorageBackend, StorageError};

/// In-process storage backend.
///
/// Usage is measured as the sum of key and value lengths in bytes. When a
/// quota is set, a write that would push usage past it fails with
/// `StorageError::QuotaExceeded` and the stored value is left unchanged.
///
/// # Examples
///
/// ```rust
/// use mehis_storages::{MemoryStorage, StorageBackend, StorageError};
///
/// let storage = MemoryStorage::with_quota(16);
/// storage.write("k", "small").unwrap();
/// assert!(matches!(
///     storage.write("k", "far too large for the quota"),
///     Err(StorageError::QuotaExceeded { .. })
/// ));
/// assert_eq!(storage.read("k").unwrap().as_deref(), Some("small"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
	entries: RwLock<BTreeMap<String, String>>,
	quota: Option<usize>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_quota(quota_bytes: usize) -> Self {
		Self {
			entries: RwLock::new(BTreeMap::new()),
			quota: Some(quota_bytes),
		}
	}

	pub fn from_config(config: MemoryConfig) -> Self {
		Self {
			entries: RwLock::new(BTreeMap::new()),
			quota: config.quota_bytes,
		}
	}

	/// Bytes currently used by keys and values.
	pub fn usage(&self) -> usize {
		self.entries
			.read()
			.iter()
			.map(|(k, v)| k.len() + v.len())
			.sum()
	}
}

impl StorageBackend for MemoryStorage {
	fn read(&self, key: &str) -> Result<Option<String>> {
		Ok(self.entries.read().get(key).cloned())
	}

	fn write(&self, key: &str, value: &str) -> Result<()> {
		let mut entries = self.entries.write();
		if let Some(quota) = self.quota {
			let others: usize = entries
				.iter()
				.filter(|(k, _)| k.as_str() != key)
				.map(|(k, v)| k.len() + v.len())
				.sum();
			let needed = key.len() + value.len();
			let available = quota.saturating_sub(others);
			if needed > available {
				return Err(StorageError::QuotaExceeded {
					key: key.to_string(),
					needed,
					available,
				});
			}
		}
		entries.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<()> {
		self.entries.write().remove(key);
		Ok(())
	}

	fn keys(&self) -> Result<Vec<String>> {
		Ok(self.entries.read().keys().cloned().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_quota_counts_replaced_value_once() {
		let storage = MemoryStorage::with_quota(10);
		storage.write("ab", "12345678").unwrap();
		// Replacing the value frees the old bytes first
		storage.write("ab", "87654321").unwrap();
		assert_eq!(storage.usage(), 10);
		assert!(storage.write("c", "").is_err());
	}

	#[test]
	fn test_remove_absent_key_is_ok() {
		let storage = MemoryStorage::new();
		assert!(storage.remove("missing").is_ok());
		assert!(storage.keys().unwrap().is_empty());
	}
}
