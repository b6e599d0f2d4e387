//! Password validators
//!
//! Unlike the other rules, password rules apply to required input: an empty
//! password fails the complexity check.

use crate::{ValidationError, ValidationResult, Validator};

/// Minimum length, at least one ASCII letter and at least one digit.
///
/// # Examples
///
/// ```
/// use mehis_validators::{PasswordComplexityValidator, Validator};
///
/// let validator = PasswordComplexityValidator::new();
/// assert!(validator.validate("chipatala7").is_ok());
/// assert!(validator.validate("short1").is_err());
/// assert!(validator.validate("12345678").is_err());
/// assert!(validator.validate("abcdefgh").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PasswordComplexityValidator {
	min_length: usize,
}

impl PasswordComplexityValidator {
	pub fn new() -> Self {
		Self { min_length: 8 }
	}
}

impl Default for PasswordComplexityValidator {
	fn default() -> Self {
		Self::new()
	}
}

impl Validator<str> for PasswordComplexityValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if value.chars().count() < self.min_length {
			return Err(ValidationError::PasswordTooShort {
				min: self.min_length,
			});
		}
		if !value.chars().any(|c| c.is_ascii_alphabetic()) {
			return Err(ValidationError::PasswordMissingLetter);
		}
		if !value.chars().any(|c| c.is_ascii_digit()) {
			return Err(ValidationError::PasswordMissingDigit);
		}
		Ok(())
	}
}

/// Confirmation field must repeat the password exactly.
///
/// # Examples
///
/// ```
/// use mehis_validators::{PasswordMatchValidator, Validator};
///
/// let validator = PasswordMatchValidator::new("chipatala7");
/// assert!(validator.validate("chipatala7").is_ok());
/// assert!(validator.validate("Chipatala7").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PasswordMatchValidator {
	password: String,
}

impl PasswordMatchValidator {
	pub fn new(password: impl Into<String>) -> Self {
		Self {
			password: password.into(),
		}
	}
}

impl Validator<str> for PasswordMatchValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if self.password == value {
			Ok(())
		} else {
			Err(ValidationError::PasswordMismatch)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_complexity_reports_first_failure() {
		let validator = PasswordComplexityValidator::new();
		assert_eq!(
			validator.validate(""),
			Err(ValidationError::PasswordTooShort { min: 8 })
		);
		assert_eq!(
			validator.validate("!!!!!!!!1"),
			Err(ValidationError::PasswordMissingLetter)
		);
		assert_eq!(
			validator.validate("letters-only"),
			Err(ValidationError::PasswordMissingDigit)
		);
	}

	#[test]
	fn test_empty_passwords_match_each_other() {
		assert!(PasswordMatchValidator::new("").validate("").is_ok());
	}
}
