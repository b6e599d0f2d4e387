//! Configuration sources for layered settings
//!
//! Sources are merged in priority order: environment variables over the
//! TOML file over built-in defaults. Sections (TOML tables) merge key by
//! key, so a source only overrides what it actually sets.

use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

/// One layer of configuration, as a JSON object of sections
pub type ConfigMap = Map<String, Value>;

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<ConfigMap, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Merges `layer` into `base`; nested objects merge recursively, anything
/// else in `layer` replaces the value in `base`.
pub fn merge(base: &mut ConfigMap, layer: ConfigMap) {
	for (key, value) in layer {
		let Value::Object(incoming) = value else {
			base.insert(key, value);
			continue;
		};
		if let Some(Value::Object(existing)) = base.get_mut(&key) {
			merge(existing, incoming);
		} else {
			base.insert(key, Value::Object(incoming));
		}
	}
}

/// Environment variable configuration source
///
/// `MEHIS_STORAGE_BACKEND=memory` becomes `storage.backend = "memory"`: the
/// prefix is stripped, the first segment names the section and the rest
/// names the key. Values stay text; the settings types convert the fields
/// that are numbers.
pub struct EnvSource {
	prefix: String,
}

/// Prefix of every environment variable the settings read.
pub const ENV_PREFIX: &str = "MEHIS_";

impl EnvSource {
	/// Create a new environment variable configuration source
	///
	/// # Examples
	///
	/// ```
	/// use mehis_conf::sources::{ConfigSource, EnvSource};
	///
	/// let source = EnvSource::new();
	/// assert_eq!(source.priority(), 100);
	/// ```
	pub fn new() -> Self {
		Self {
			prefix: ENV_PREFIX.to_string(),
		}
	}

	/// Read variables under another prefix
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<ConfigMap, SourceError> {
		let mut config = ConfigMap::new();

		for (key, value) in std::env::vars() {
			let Some(clean_key) = key.strip_prefix(&self.prefix) else {
				continue;
			};
			let lower_key = clean_key.to_lowercase();
			let value = Value::String(value);

			let mut layer = ConfigMap::new();
			match lower_key.split_once('_') {
				Some((section, field)) if !section.is_empty() && !field.is_empty() => {
					let mut inner = ConfigMap::new();
					inner.insert(field.to_string(), value);
					layer.insert(section.to_string(), Value::Object(inner));
				}
				_ => {
					layer.insert(lower_key, value);
				}
			}
			merge(&mut config, layer);
		}

		Ok(config)
	}

	fn priority(&self) -> u8 {
		100 // Highest priority
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}

/// TOML file configuration source
///
/// A missing file contributes nothing.
pub struct TomlFileSource {
	path: PathBuf,
}

impl TomlFileSource {
	/// Create a new TOML file configuration source
	///
	/// # Examples
	///
	/// ```
	/// use mehis_conf::sources::{ConfigSource, TomlFileSource};
	///
	/// let source = TomlFileSource::new("/nonexistent/mehis.toml");
	/// assert!(source.load().unwrap().is_empty());
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<ConfigMap, SourceError> {
		if !self.path.exists() {
			return Ok(ConfigMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let toml_value: toml::Value = toml::from_str(&content)?;

		// Convert TOML value to JSON value
		match serde_json::to_value(&toml_value)? {
			Value::Object(map) => Ok(map),
			_ => Err(SourceError::Parse("Expected table at root".to_string())),
		}
	}

	fn priority(&self) -> u8 {
		50 // Medium priority
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Default values configuration source
pub struct DefaultSource {
	values: ConfigMap,
}

impl DefaultSource {
	/// Defaults taken from a serializable value, usually `Settings::default()`
	pub fn from_value<T: serde::Serialize>(value: &T) -> Result<Self, SourceError> {
		match serde_json::to_value(value)? {
			Value::Object(values) => Ok(Self { values }),
			_ => Err(SourceError::Parse("Defaults must be a table".to_string())),
		}
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<ConfigMap, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0 // Lowest priority
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use serial_test::serial;
	use std::io::Write;
	use tempfile::TempDir;

	fn object(value: Value) -> ConfigMap {
		match value {
			Value::Object(map) => map,
			_ => panic!("not an object"),
		}
	}

	#[test]
	fn test_merge_is_per_key() {
		let mut base = object(json!({"storage": {"backend": "local", "path": "data"}, "logging": {"level": "info"}}));
		merge(&mut base, object(json!({"storage": {"backend": "memory"}})));
		assert_eq!(
			Value::Object(base),
			json!({"storage": {"backend": "memory", "path": "data"}, "logging": {"level": "info"}})
		);
	}

	#[test]
	#[serial]
	fn test_env_source() {
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			std::env::set_var("MEHISTEST_STORAGE_BACKEND", "memory");
			std::env::set_var("MEHISTEST_STORAGE_QUOTA", "4096");
			std::env::set_var("MEHISTEST_DEBUG", "true");
		}

		let config = EnvSource::new().with_prefix("MEHISTEST_").load().unwrap();
		assert_eq!(config["storage"]["backend"], json!("memory"));
		assert_eq!(config["storage"]["quota"], json!("4096"));
		assert_eq!(config["debug"], json!("true"));

		// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			std::env::remove_var("MEHISTEST_STORAGE_BACKEND");
			std::env::remove_var("MEHISTEST_STORAGE_QUOTA");
			std::env::remove_var("MEHISTEST_DEBUG");
		}
	}

	#[test]
	fn test_toml_source() {
		let temp_dir = TempDir::new().unwrap();
		let config_path = temp_dir.path().join("mehis.toml");

		let mut file = std::fs::File::create(&config_path).unwrap();
		writeln!(
			file,
			r#"
[storage]
backend = "local"
path = "/var/lib/mehis"
"#
		)
		.unwrap();

		let config = TomlFileSource::new(&config_path).load().unwrap();
		assert_eq!(config["storage"]["path"], json!("/var/lib/mehis"));
	}

	#[test]
	fn test_malformed_toml_is_an_error() {
		let temp_dir = TempDir::new().unwrap();
		let config_path = temp_dir.path().join("mehis.toml");
		std::fs::write(&config_path, "[storage\nbackend = ").unwrap();
		assert!(matches!(
			TomlFileSource::new(&config_path).load(),
			Err(SourceError::Toml(_))
		));
	}

	#[test]
	fn test_source_priority() {
		assert_eq!(EnvSource::new().priority(), 100);
		assert_eq!(TomlFileSource::new("mehis.toml").priority(), 50);
		assert_eq!(DefaultSource::from_value(&json!({})).unwrap().priority(), 0);
	}
}
