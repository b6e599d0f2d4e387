//! Personnel identifier validators

use crate::{ValidationError, ValidationResult, Validator};
use regex::Regex;
use std::sync::LazyLock;

// National ID: exactly eight uppercase ASCII letters or digits.
static NATIONAL_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Z0-9]{8}$").expect("NATIONAL_ID_REGEX: invalid regex pattern")
});

/// Validates a national identity number.
///
/// # Examples
///
/// ```
/// use mehis_validators::{NationalIdValidator, Validator};
///
/// let validator = NationalIdValidator::new();
/// assert!(validator.validate("AB12CD34").is_ok());
/// assert!(validator.validate("ab12cd34").is_err());
/// assert!(validator.validate("AB12CD3").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NationalIdValidator;

impl NationalIdValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator<str> for NationalIdValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if value.is_empty() || NATIONAL_ID_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(ValidationError::InvalidNationalId)
		}
	}
}

/// Validates a government employment number: digits only, bounded length.
///
/// # Examples
///
/// ```
/// use mehis_validators::{EmploymentNumberValidator, Validator};
///
/// let validator = EmploymentNumberValidator::new();
/// assert!(validator.validate("12345678").is_ok());
/// assert!(validator.validate("123456789").is_err());
/// assert!(validator.validate("12A4").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmploymentNumberValidator {
	max_digits: usize,
}

impl EmploymentNumberValidator {
	pub fn new() -> Self {
		Self { max_digits: 8 }
	}
}

impl Default for EmploymentNumberValidator {
	fn default() -> Self {
		Self::new()
	}
}

impl Validator<str> for EmploymentNumberValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if value.is_empty() {
			return Ok(());
		}
		if !value.bytes().all(|b| b.is_ascii_digit()) {
			return Err(ValidationError::NotNumeric);
		}
		if value.len() > self.max_digits {
			return Err(ValidationError::TooManyDigits {
				max: self.max_digits,
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", true)]
	#[case("12345678", true)]
	#[case("ABCDEFGH", true)]
	#[case("A1B2C3D4", true)]
	#[case("a1b2c3d4", false)]
	#[case("A1B2C3D", false)]
	#[case("A1B2C3D45", false)]
	#[case("A1B2-3D4", false)]
	fn test_national_id(#[case] input: &str, #[case] ok: bool) {
		assert_eq!(NationalIdValidator::new().validate(input).is_ok(), ok);
	}

	#[test]
	fn test_employment_number_checks_digits_before_length() {
		let validator = EmploymentNumberValidator::new();
		assert_eq!(
			validator.validate("123456789X"),
			Err(ValidationError::NotNumeric)
		);
		assert_eq!(
			validator.validate("123456789"),
			Err(ValidationError::TooManyDigits { max: 8 })
		);
		assert!(validator.validate("1").is_ok());
	}
}
