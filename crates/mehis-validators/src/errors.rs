//! Validation error types

use thiserror::Error;

/// A single validation failure.
///
/// The `Display` output is the human-readable message shown next to the
/// offending field.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("{label} is required")]
	Required { label: String },

	#[error("Phone number must be {prefix} followed by exactly {digits} digits")]
	InvalidPhoneNumber { prefix: String, digits: usize },

	#[error("National ID must be exactly 8 characters (uppercase letters/digits)")]
	InvalidNationalId,

	#[error("Must contain only numbers")]
	NotNumeric,

	#[error("Maximum of {max} digits allowed")]
	TooManyDigits { max: usize },

	#[error("Invalid date format")]
	InvalidDateFormat,

	#[error("Invalid date")]
	InvalidDate,

	#[error("HSA must be at least {min} years old")]
	TooYoung { min: u32 },

	#[error("HSA age exceeds the maximum limit ({max} years)")]
	TooOld { max: u32 },

	#[error("Appointment date must be at least {years} years after birth")]
	AppointedTooEarly { years: u32 },

	#[error("Appointment date cannot be in the future")]
	AppointedInFuture,

	#[error("{label} must be a positive number greater than zero")]
	NotPositive { label: String },

	#[error("Value {value} is less than minimum {min}")]
	TooSmall { value: String, min: String },

	#[error("Value {value} is greater than maximum {max}")]
	TooLarge { value: String, max: String },

	#[error("Year must be {year}")]
	WrongYear { year: String },

	#[error("Must be in {month}")]
	WrongMonth { month: String },

	#[error("End date cannot be before start date")]
	EndBeforeStart,

	#[error("Password must be at least {min} characters long")]
	PasswordTooShort { min: usize },

	#[error("Password must contain at least one letter")]
	PasswordMissingLetter,

	#[error("Password must contain at least one number")]
	PasswordMissingDigit,

	#[error("Passwords do not match")]
	PasswordMismatch,

	#[error("'{value}' is not a valid choice for {field}")]
	InvalidChoice { field: String, value: String },

	#[error("{0}")]
	Custom(String),
}

impl ValidationError {
	/// Prefixes the message with a field label, e.g. `Start Date: Must be in March`.
	pub fn labelled(&self, label: &str) -> String {
		format!("{}: {}", label, self)
	}
}

pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_messages_match_field_hints() {
		assert_eq!(
			ValidationError::NotPositive {
				label: "Monthly Target".to_string()
			}
			.to_string(),
			"Monthly Target must be a positive number greater than zero"
		);
		assert_eq!(
			ValidationError::WrongMonth {
				month: "March".to_string()
			}
			.labelled("Start Date"),
			"Start Date: Must be in March"
		);
	}
}
