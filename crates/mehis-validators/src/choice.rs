//! Enumerated choice validator for catalog-backed text fields

use crate::{ValidationError, ValidationResult, Validator};

/// Requires a value to be one of a fixed catalog of strings.
///
/// Used for fields whose legal values come from a catalog rather than a Rust
/// enum (water point types, facility types, toilet types, districts).
///
/// # Examples
///
/// ```
/// use mehis_validators::{ChoiceValidator, Validator};
///
/// let validator = ChoiceValidator::new("Waste Management", &["Pit", "Indiscriminate", "Other"]);
/// assert!(validator.validate("Pit").is_ok());
/// assert!(validator.validate("").is_ok());
/// assert!(validator.validate("pit").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ChoiceValidator {
	field: String,
	choices: &'static [&'static str],
}

impl ChoiceValidator {
	pub fn new(field: impl Into<String>, choices: &'static [&'static str]) -> Self {
		Self {
			field: field.into(),
			choices,
		}
	}

	pub fn choices(&self) -> &'static [&'static str] {
		self.choices
	}
}

impl Validator<str> for ChoiceValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if value.is_empty() || self.choices.contains(&value) {
			Ok(())
		} else {
			Err(ValidationError::InvalidChoice {
				field: self.field.clone(),
				value: value.to_string(),
			})
		}
	}
}
