//! The settings tree and how it is assembled.

use mehis_storages::{
	BackendType, DEFAULT_PREFIX, LocalConfig, MemoryConfig, StorageConfig, Store, create_storage,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, SettingsError};
use crate::sources::{ConfigMap, ConfigSource, DefaultSource, EnvSource, TomlFileSource, merge};

/// Where records are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
	/// `"local"` or `"memory"`
	pub backend: String,
	/// Directory of the local backend
	pub path: PathBuf,
	/// Byte quota of the memory backend
	#[serde(
		skip_serializing_if = "Option::is_none",
		deserialize_with = "quota_from_number_or_text"
	)]
	pub quota: Option<usize>,
	/// Namespace of every key in the store
	pub prefix: String,
}

/// Environment values arrive as text, so the quota accepts `8192` and `"8192"`.
fn quota_from_number_or_text<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Quota {
		Bytes(usize),
		Text(String),
	}

	match Option::<Quota>::deserialize(deserializer)? {
		None => Ok(None),
		Some(Quota::Bytes(bytes)) => Ok(Some(bytes)),
		Some(Quota::Text(text)) if text.trim().is_empty() => Ok(None),
		Some(Quota::Text(text)) => text
			.trim()
			.parse()
			.map(Some)
			.map_err(|_| serde::de::Error::custom(format!("invalid quota `{text}`"))),
	}
}

impl Default for StorageSettings {
	fn default() -> Self {
		Self {
			backend: BackendType::Local.to_string(),
			path: PathBuf::from("mehis-data"),
			quota: None,
			prefix: DEFAULT_PREFIX.to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
	/// Directory CSV exports are written to
	pub directory: PathBuf,
}

impl Default for ExportSettings {
	fn default() -> Self {
		Self {
			directory: PathBuf::from("exports"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
	/// Filter directive used when neither `-v` nor `RUST_LOG` is given
	pub level: String,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "warn".to_string(),
		}
	}
}

/// Application settings.
///
/// ```toml
/// [storage]
/// backend = "local"
/// path = "/var/lib/mehis"
/// prefix = "mehis_"
///
/// [export]
/// directory = "/srv/exports"
///
/// [logging]
/// level = "info"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub storage: StorageSettings,
	pub export: ExportSettings,
	pub logging: LoggingSettings,
}

impl Settings {
	/// Defaults, then the TOML file at `path` if given, then `MEHIS_*`
	/// environment variables.
	///
	/// # Examples
	///
	/// ```
	/// use mehis_conf::Settings;
	///
	/// let settings = Settings::load(None).unwrap();
	/// assert!(!settings.storage.prefix.is_empty());
	/// ```
	pub fn load(path: Option<&Path>) -> Result<Self> {
		let mut builder = SettingsBuilder::new().add_source(EnvSource::new());
		if let Some(path) = path {
			builder = builder.add_source(TomlFileSource::new(path));
		}
		builder.build()
	}

	/// The storage backend configuration these settings describe.
	///
	/// # Examples
	///
	/// ```
	/// use mehis_conf::Settings;
	/// use mehis_storages::StorageConfig;
	///
	/// let mut settings = Settings::default();
	/// settings.storage.backend = "memory".to_string();
	/// settings.storage.quota = Some(4096);
	/// assert!(matches!(
	///     settings.storage_config().unwrap(),
	///     StorageConfig::Memory(memory) if memory.quota_bytes == Some(4096)
	/// ));
	/// ```
	pub fn storage_config(&self) -> Result<StorageConfig> {
		match self.storage.backend.parse::<BackendType>()? {
			BackendType::Local => {
				if self.storage.path.as_os_str().is_empty() {
					return Err(SettingsError::Invalid(
						"storage.path is required for the local backend".to_string(),
					));
				}
				Ok(StorageConfig::Local(LocalConfig::new(&self.storage.path)))
			}
			BackendType::Memory => Ok(StorageConfig::Memory(MemoryConfig {
				quota_bytes: self.storage.quota,
			})),
		}
	}

	/// Opens the configured store.
	pub fn open_store(&self) -> Result<Store> {
		let backend = create_storage(self.storage_config()?)?;
		Ok(Store::with_prefix(backend, self.storage.prefix.clone()))
	}
}

/// Collects sources and merges them by priority.
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Starts with no sources; built-in defaults always apply.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	pub fn build(self) -> Result<Settings> {
		let defaults = DefaultSource::from_value(&Settings::default()).map_err(|error| {
			SettingsError::Source {
				source_name: "Default values".to_string(),
				error,
			}
		})?;

		let mut sources = self.sources;
		sources.push(Box::new(defaults));
		sources.sort_by_key(|source| source.priority());

		let mut merged = ConfigMap::new();
		for source in &sources {
			let layer = source.load().map_err(|error| SettingsError::Source {
				source_name: source.description(),
				error,
			})?;
			debug!(source = %source.description(), keys = layer.len(), "settings layer loaded");
			merge(&mut merged, layer);
		}

		Ok(serde_json::from_value(serde_json::Value::Object(merged))?)
	}
}

impl std::fmt::Debug for SettingsBuilder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let sources: Vec<String> = self.sources.iter().map(|s| s.description()).collect();
		f.debug_struct("SettingsBuilder").field("sources", &sources).finish()
	}
}
