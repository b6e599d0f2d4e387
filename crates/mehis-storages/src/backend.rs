//! Storage backend trait definition.

use crate::Result;

/// Durable key-value store of text documents.
///
/// Implementations are synchronous: every call completes before returning, so
/// a successful `write` is durable once it returns.
///
/// # Examples
///
/// ```rust
/// use mehis_storages::{MemoryStorage, StorageBackend};
///
/// fn roundtrip(storage: &dyn StorageBackend) -> mehis_storages::Result<()> {
///     storage.write("mehis_users", "[]")?;
///     assert_eq!(storage.read("mehis_users")?.as_deref(), Some("[]"));
///
///     storage.remove("mehis_users")?;
///     assert_eq!(storage.read("mehis_users")?, None);
///     Ok(())
/// }
///
/// roundtrip(&MemoryStorage::new()).unwrap();
/// ```
pub trait StorageBackend: Send + Sync {
	/// Read the document stored under `key`.
	///
	/// Returns `None` when the key has never been written or was removed.
	fn read(&self, key: &str) -> Result<Option<String>>;

	/// Replace the document stored under `key`.
	///
	/// # Errors
	///
	/// Returns `StorageError::QuotaExceeded` when the backend is out of space.
	/// The previous document, if any, is left intact on every error.
	fn write(&self, key: &str, value: &str) -> Result<()>;

	/// Remove `key`. Removing an absent key is not an error.
	fn remove(&self, key: &str) -> Result<()>;

	/// All keys currently present, in ascending order.
	fn keys(&self) -> Result<Vec<String>>;
}
