//! Key-value persistence.
//!
//! # Examples
//!
//! ```rust
//! use mehis::storages::{MemoryStorage, Store};
//! use std::sync::Arc;
//!
//! let store = Store::new(Arc::new(MemoryStorage::new()));
//! assert_eq!(store.get("missing", 7), 7);
//! ```

pub use mehis_storages::*;
