//! Factory function for creating storage backends.

use crate::backends::local::LocalStorage;
use crate::backends::memory::MemoryStorage;
use crate::{Result, StorageBackend, StorageConfig};
use std::sync::Arc;

/// Create a storage backend from configuration.
///
/// # Examples
///
/// ```rust
/// use mehis_storages::{MemoryConfig, StorageBackend, StorageConfig, create_storage};
///
/// let storage = create_storage(StorageConfig::Memory(MemoryConfig::default())).unwrap();
/// storage.write("mehis_users", "[]").unwrap();
/// ```
pub fn create_storage(config: StorageConfig) -> Result<Arc<dyn StorageBackend>> {
	tracing::debug!(backend = %config.backend_type(), "creating storage backend");
	match config {
		StorageConfig::Local(local_config) => Ok(Arc::new(LocalStorage::new(local_config)?)),
		StorageConfig::Memory(memory_config) => {
			Ok(Arc::new(MemoryStorage::from_config(memory_config)))
		}
	}
}
