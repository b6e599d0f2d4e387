//! Layered settings for MeHIS
//!
//! Settings come from three layers, later layers overriding earlier ones
//! key by key:
//!
//! 1. built-in defaults ([`Settings::default`])
//! 2. an optional TOML file
//! 3. `MEHIS_*` environment variables (`MEHIS_STORAGE_BACKEND=memory`
//!    sets `storage.backend`)
//!
//! ```
//! use mehis_conf::{Settings, SettingsBuilder};
//! use mehis_conf::sources::TomlFileSource;
//!
//! let settings = SettingsBuilder::new()
//!     .add_source(TomlFileSource::new("does-not-exist.toml"))
//!     .build()
//!     .unwrap();
//! assert_eq!(settings, Settings::default());
//! ```

pub mod error;
pub mod settings;
pub mod sources;

pub use error::{Result, SettingsError};
pub use settings::{ExportSettings, LoggingSettings, Settings, SettingsBuilder, StorageSettings};
pub use sources::{ConfigSource, ENV_PREFIX};
