//! Prefixed JSON document store.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

use crate::{Result, StorageBackend};

/// Namespace prepended to every key written by a [`Store`].
pub const DEFAULT_PREFIX: &str = "mehis_";

/// JSON view over a [`StorageBackend`] with namespaced keys.
///
/// Reads never fail: an absent key, a backend error or a document that no
/// longer decodes into the requested type all yield the caller's default.
/// Decode and backend failures are logged at `warn`. Writes overwrite the
/// whole value and propagate every error.
///
/// Cloning a `Store` shares the backend.
#[derive(Clone)]
pub struct Store {
	backend: Arc<dyn StorageBackend>,
	prefix: String,
}

impl fmt::Debug for Store {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Store")
			.field("prefix", &self.prefix)
			.finish_non_exhaustive()
	}
}

impl Store {
	pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
		Self::with_prefix(backend, DEFAULT_PREFIX)
	}

	pub fn with_prefix(backend: Arc<dyn StorageBackend>, prefix: impl Into<String>) -> Self {
		Self {
			backend,
			prefix: prefix.into(),
		}
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	pub fn backend(&self) -> &Arc<dyn StorageBackend> {
		&self.backend
	}

	fn full_key(&self, key: &str) -> String {
		format!("{}{}", self.prefix, key)
	}

	/// Read and decode `key`, falling back to `default`.
	///
	/// # Examples
	///
	/// ```rust
	/// use mehis_storages::{MemoryStorage, StorageBackend, Store};
	/// use std::sync::Arc;
	///
	/// let backend = Arc::new(MemoryStorage::new());
	/// backend.write("mehis_workPlans", "{not json").unwrap();
	///
	/// let store = Store::new(backend);
	/// let plans: Vec<String> = store.get("workPlans", Vec::new());
	/// assert!(plans.is_empty());
	/// ```
	pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
		match self.try_get(key) {
			Ok(Some(value)) => value,
			Ok(None) => default,
			Err(e) => {
				tracing::warn!(key, error = %e, "discarding unreadable stored value");
				default
			}
		}
	}

	/// Read and decode `key`, surfacing backend and decode errors.
	pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
		match self.backend.read(&self.full_key(key))? {
			Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
			None => Ok(None),
		}
	}

	/// Serialize `value` and overwrite `key` with it.
	pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
		let raw = serde_json::to_string(value)?;
		self.backend.write(&self.full_key(key), &raw)?;
		tracing::debug!(key, bytes = raw.len(), "stored value");
		Ok(())
	}

	pub fn contains(&self, key: &str) -> bool {
		matches!(self.backend.read(&self.full_key(key)), Ok(Some(_)))
	}

	pub fn remove(&self, key: &str) -> Result<()> {
		self.backend.remove(&self.full_key(key))
	}

	/// Keys under this store's prefix, with the prefix stripped.
	pub fn keys(&self) -> Result<Vec<String>> {
		Ok(self
			.backend
			.keys()?
			.into_iter()
			.filter_map(|k| k.strip_prefix(&self.prefix).map(str::to_string))
			.collect())
	}

	/// Remove every key under this store's prefix. Other keys are untouched.
	pub fn clear(&self) -> Result<()> {
		for key in self.keys()? {
			self.remove(&key)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::MemoryStorage;
	use rstest::{fixture, rstest};

	#[fixture]
	fn backend() -> Arc<MemoryStorage> {
		Arc::new(MemoryStorage::new())
	}

	#[rstest]
	fn test_keys_are_prefixed(backend: Arc<MemoryStorage>) {
		let store = Store::new(backend.clone());
		store.set("currentUser", &Option::<String>::None).unwrap();
		assert_eq!(
			backend.read("mehis_currentUser").unwrap().as_deref(),
			Some("null")
		);
		assert_eq!(store.keys().unwrap(), vec!["currentUser".to_string()]);
	}

	#[rstest]
	fn test_clear_only_touches_own_prefix(backend: Arc<MemoryStorage>) {
		backend.write("other_app", "1").unwrap();
		let store = Store::new(backend.clone());
		store.set("a", &1).unwrap();
		store.set("b", &2).unwrap();

		store.clear().unwrap();

		assert!(!store.contains("a"));
		assert_eq!(backend.keys().unwrap(), vec!["other_app".to_string()]);
	}

	#[rstest]
	fn test_type_mismatch_falls_back(backend: Arc<MemoryStorage>) {
		let store = Store::new(backend);
		store.set("count", &"seven").unwrap();
		assert_eq!(store.get::<u32>("count", 3), 3);
		assert!(store.try_get::<u32>("count").is_err());
	}
}
