//! Whole-collection access for records with an identifier.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use crate::{Result, Store};

/// A record with a stable, unique identifier.
pub trait Identifiable {
	fn id(&self) -> &str;
}

/// An ordered collection of records persisted as a single JSON array.
///
/// Every mutating operation reads the current collection, applies the change
/// and writes the whole array back with one `set`. If that write fails the
/// stored collection is unchanged.
///
/// # Examples
///
/// ```rust
/// use mehis_storages::{Identifiable, MemoryStorage, Repository, Store};
/// use serde::{Deserialize, Serialize};
/// use std::sync::Arc;
///
/// #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// struct Village { id: String, name: String }
///
/// impl Identifiable for Village {
///     fn id(&self) -> &str { &self.id }
/// }
///
/// let store = Store::new(Arc::new(MemoryStorage::new()));
/// let villages: Repository<Village> = Repository::new(store, "villages");
///
/// villages.upsert(Village { id: "1".into(), name: "Chinsapo".into() }).unwrap();
/// villages.upsert(Village { id: "1".into(), name: "Chinsapo II".into() }).unwrap();
///
/// assert_eq!(villages.all().len(), 1);
/// assert_eq!(villages.find("1").unwrap().name, "Chinsapo II");
/// ```
#[derive(Debug, Clone)]
pub struct Repository<T> {
	store: Store,
	key: String,
	_marker: PhantomData<fn() -> T>,
}

impl<T> Repository<T>
where
	T: Identifiable + Serialize + DeserializeOwned,
{
	pub fn new(store: Store, key: impl Into<String>) -> Self {
		Self {
			store,
			key: key.into(),
			_marker: PhantomData,
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn store(&self) -> &Store {
		&self.store
	}

	/// The stored collection in display order; empty when absent or unreadable.
	pub fn all(&self) -> Vec<T> {
		self.store.get(&self.key, Vec::new())
	}

	pub fn find(&self, id: &str) -> Option<T> {
		self.all().into_iter().find(|r| r.id() == id)
	}

	/// The stored collection for a read-modify-write. Unlike [`all`](Self::all)
	/// an unreadable value is an error, so a write never replaces records it
	/// could not decode.
	fn load(&self) -> Result<Vec<T>> {
		Ok(self.store.try_get(&self.key)?.unwrap_or_default())
	}

	/// Replace the record with a matching id, or append it, then persist.
	///
	/// Returns the collection as written. Fails without writing if the stored
	/// collection cannot be decoded.
	pub fn upsert(&self, record: T) -> Result<Vec<T>> {
		let mut records = self.load()?;
		match records.iter().position(|r| r.id() == record.id()) {
			Some(index) => records[index] = record,
			None => records.push(record),
		}
		self.store.set(&self.key, &records)?;
		Ok(records)
	}

	/// Remove the record with `id`, then persist. Returns whether one was removed.
	pub fn delete(&self, id: &str) -> Result<bool> {
		let mut records = self.load()?;
		let before = records.len();
		records.retain(|r| r.id() != id);
		if records.len() == before {
			return Ok(false);
		}
		self.store.set(&self.key, &records)?;
		Ok(true)
	}

	pub fn replace_all(&self, records: &[T]) -> Result<()> {
		self.store.set(&self.key, records)
	}
}
