//! Numeric validators

use crate::{ValidationError, ValidationResult, Validator};
use std::fmt::Display;

/// Requires a provided number to be strictly greater than zero.
///
/// Accepts raw form input (`str`, empty means "not provided") or an already
/// parsed `f64`.
///
/// # Examples
///
/// ```
/// use mehis_validators::{PositiveNumberValidator, Validator};
///
/// let validator = PositiveNumberValidator::new("Monthly Target");
/// assert!(validator.validate("4").is_ok());
/// assert!(validator.validate("").is_ok());
/// assert!(validator.validate("0").is_err());
/// assert!(validator.validate(&2.5_f64).is_ok());
/// assert!(validator.validate(&-1.0_f64).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PositiveNumberValidator {
	label: String,
}

impl PositiveNumberValidator {
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
		}
	}

	fn error(&self) -> ValidationError {
		ValidationError::NotPositive {
			label: self.label.clone(),
		}
	}
}

impl Validator<str> for PositiveNumberValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		let value = value.trim();
		if value.is_empty() {
			return Ok(());
		}
		match value.parse::<f64>() {
			Ok(number) => Validator::<f64>::validate(self, &number),
			Err(_) => Err(self.error()),
		}
	}
}

impl Validator<f64> for PositiveNumberValidator {
	fn validate(&self, value: &f64) -> ValidationResult<()> {
		// NaN fails this comparison as well
		if *value > 0.0 { Ok(()) } else { Err(self.error()) }
	}
}

/// Minimum value validator
pub struct MinValueValidator<T> {
	min: T,
}

impl<T> MinValueValidator<T> {
	/// Creates a new MinValueValidator with the specified minimum value.
	///
	/// # Examples
	///
	/// ```
	/// use mehis_validators::{MinValueValidator, Validator};
	///
	/// let validator = MinValueValidator::new(0);
	/// assert!(validator.validate(&15).is_ok());
	/// assert!(validator.validate(&-5).is_err());
	/// ```
	pub fn new(min: T) -> Self {
		Self { min }
	}
}

impl<T: PartialOrd + Display> Validator<T> for MinValueValidator<T> {
	fn validate(&self, value: &T) -> ValidationResult<()> {
		if value >= &self.min {
			Ok(())
		} else {
			Err(ValidationError::TooSmall {
				value: value.to_string(),
				min: self.min.to_string(),
			})
		}
	}
}

/// Maximum value validator
pub struct MaxValueValidator<T> {
	max: T,
}

impl<T> MaxValueValidator<T> {
	/// Creates a new MaxValueValidator with the specified maximum value.
	///
	/// # Examples
	///
	/// ```
	/// use mehis_validators::{MaxValueValidator, Validator};
	///
	/// let validator = MaxValueValidator::new(20);
	/// assert!(validator.validate(&15).is_ok());
	/// assert!(validator.validate(&25).is_err());
	/// ```
	pub fn new(max: T) -> Self {
		Self { max }
	}
}

impl<T: PartialOrd + Display> Validator<T> for MaxValueValidator<T> {
	fn validate(&self, value: &T) -> ValidationResult<()> {
		if value <= &self.max {
			Ok(())
		} else {
			Err(ValidationError::TooLarge {
				value: value.to_string(),
				max: self.max.to_string(),
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("1")]
	#[case("0.5")]
	#[case(" 12 ")]
	#[case("")]
	fn test_positive_accepts(#[case] input: &str) {
		assert!(PositiveNumberValidator::new("Count").validate(input).is_ok());
	}

	#[rstest]
	#[case("0")]
	#[case("-3")]
	#[case("three")]
	#[case("NaN")]
	fn test_positive_rejects(#[case] input: &str) {
		let err = PositiveNumberValidator::new("Count")
			.validate(input)
			.unwrap_err();
		assert_eq!(
			err.to_string(),
			"Count must be a positive number greater than zero"
		);
	}

	#[test]
	fn test_min_value_validator_error_message() {
		let validator = MinValueValidator::new(10);
		match validator.validate(&4) {
			Err(ValidationError::TooSmall { value, min }) => {
				assert_eq!(value, "4");
				assert_eq!(min, "10");
			}
			other => panic!("unexpected result: {:?}", other),
		}
	}
}
