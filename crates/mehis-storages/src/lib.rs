//! # mehis-storages
//!
//! Persistence gateway for MeHIS records.
//!
//! Records are kept in a durable key-value store holding one JSON document per
//! key. This crate provides:
//!
//! - **`StorageBackend`**: the raw text `read`/`write`/`remove`/`keys` interface
//! - **Backends**: [`LocalStorage`] (one file per key, atomic replace) and
//!   [`MemoryStorage`] (in-process, optional byte quota)
//! - **[`Store`]**: prefixed JSON access with fallback-on-absent-or-corrupt reads
//! - **[`Repository`]**: whole-collection helpers for records with an id
//!
//! ## Example
//!
//! ```rust
//! use mehis_storages::{MemoryStorage, Store};
//! use std::sync::Arc;
//!
//! let store = Store::new(Arc::new(MemoryStorage::new()));
//! store.set("waterPoints", &vec!["Borehole A"]).unwrap();
//!
//! let points: Vec<String> = store.get("waterPoints", Vec::new());
//! assert_eq!(points, vec!["Borehole A".to_string()]);
//!
//! // Absent keys fall back to the supplied default
//! let users: Vec<String> = store.get("users", Vec::new());
//! assert!(users.is_empty());
//! ```

pub mod backend;
pub mod backends;
pub mod config;
pub mod error;
pub mod factory;
pub mod repository;
pub mod store;

pub use backend::StorageBackend;
pub use backends::local::LocalStorage;
pub use backends::memory::MemoryStorage;
pub use config::{BackendType, LocalConfig, MemoryConfig, StorageConfig};
pub use error::{Result, StorageError};
pub use factory::create_storage;
pub use repository::{Identifiable, Repository};
pub use store::{DEFAULT_PREFIX, Store};
