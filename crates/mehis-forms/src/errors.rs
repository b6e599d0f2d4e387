//! Form errors: per-field validation messages and operation failures.

use mehis_storages::StorageError;
use mehis_validators::{ValidationError, ValidationResult};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Key for errors that do not belong to a single field.
pub const ALL_FIELDS_KEY: &str = "_all";

/// Field key to human-readable message, collected by a validation pass.
///
/// Only the first message recorded for a key is kept, so rules that run in
/// order of importance surface the most relevant problem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
	errors: BTreeMap<String, String>,
}

impl FormErrors {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
		self.errors.entry(key.into()).or_insert_with(|| message.into());
	}

	/// Records the failure of a rule, if it failed.
	pub fn check(&mut self, key: impl Into<String>, result: ValidationResult<()>) {
		if let Err(e) = result {
			self.add(key, e.to_string());
		}
	}

	/// Records a failure with the message prefixed by a field label.
	pub fn check_labelled(&mut self, key: impl Into<String>, label: &str, result: ValidationResult<()>) {
		if let Err(e) = result {
			self.add(key, e.labelled(label));
		}
	}

	/// Records `"{label} is required"` when `value` is blank.
	pub fn require(&mut self, key: impl Into<String>, label: &str, value: &str) {
		if value.trim().is_empty() {
			self.add(
				key,
				ValidationError::Required {
					label: label.to_string(),
				}
				.to_string(),
			);
		}
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.errors.get(key).map(String::as_str)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.errors.contains_key(key)
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.errors.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn clear(&mut self) {
		self.errors.clear();
	}

	/// Errors whose key starts with any of `prefixes`.
	pub fn filtered(&self, prefixes: &[&str]) -> FormErrors {
		FormErrors {
			errors: self
				.errors
				.iter()
				.filter(|(key, _)| prefixes.iter().any(|p| key.starts_with(p)))
				.map(|(k, v)| (k.clone(), v.clone()))
				.collect(),
		}
	}
}

impl fmt::Display for FormErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for (key, message) in &self.errors {
			if !first {
				f.write_str("; ")?;
			}
			write!(f, "{}: {}", key, message)?;
			first = false;
		}
		Ok(())
	}
}

#[derive(Debug, Error)]
pub enum FormError {
	#[error("Validation failed with {count} error(s): {0}", count = .0.len())]
	Invalid(FormErrors),

	#[error("Invalid value for {path}: {message}")]
	InvalidField { path: String, message: String },

	#[error("No draft is open")]
	NoDraft,

	#[error("No {kind} record with id '{id}'")]
	NotFound { kind: &'static str, id: String },

	#[error("No item with id '{0}'")]
	ItemNotFound(String),

	#[error("Index {index} is out of range for a list of {len}")]
	IndexOutOfRange { index: usize, len: usize },

	#[error("Wizard error: {0}")]
	Wizard(String),

	#[error("Storage error: {0}")]
	Storage(#[from] StorageError),
}

pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_first_message_wins() {
		let mut errors = FormErrors::new();
		errors.add("facility", "Facility is required");
		errors.add("facility", "Something else");
		assert_eq!(errors.get("facility"), Some("Facility is required"));
		assert_eq!(errors.len(), 1);
	}

	#[test]
	fn test_filtered_by_prefix() {
		let mut errors = FormErrors::new();
		errors.add("act_0_target", "a");
		errors.add("act_1_occ_0_start", "b");
		errors.add("month", "c");
		let activity_errors = errors.filtered(&["act_"]);
		assert_eq!(activity_errors.keys().collect::<Vec<_>>(), vec!["act_0_target", "act_1_occ_0_start"]);
	}

	#[test]
	fn test_invalid_display() {
		let mut errors = FormErrors::new();
		errors.require("month", "Month", "");
		assert_eq!(
			FormError::Invalid(errors).to_string(),
			"Validation failed with 1 error(s): month: Month is required"
		);
	}
}
