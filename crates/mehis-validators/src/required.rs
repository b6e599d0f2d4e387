//! Required-value validator

use crate::{ValidationError, ValidationResult, Validator};

/// Rejects empty (or whitespace-only) input.
///
/// # Examples
///
/// ```
/// use mehis_validators::{RequiredValidator, Validator};
///
/// let validator = RequiredValidator::new("Facility");
/// assert!(validator.validate("Area 25").is_ok());
/// assert_eq!(validator.validate("  ").unwrap_err().to_string(), "Facility is required");
/// ```
#[derive(Debug, Clone)]
pub struct RequiredValidator {
	label: String,
}

impl RequiredValidator {
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
		}
	}
}

impl Validator<str> for RequiredValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if value.trim().is_empty() {
			Err(ValidationError::Required {
				label: self.label.clone(),
			})
		} else {
			Ok(())
		}
	}
}
