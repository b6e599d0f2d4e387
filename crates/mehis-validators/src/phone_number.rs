//! Phone number validator

use crate::{ValidationError, ValidationResult, Validator};

/// Country prefix used for every contact number in the registry.
pub const DEFAULT_COUNTRY_PREFIX: &str = "+265";

const SUBSCRIBER_DIGITS: usize = 9;

/// Validates a phone number of the form `<prefix><9 digits>`.
///
/// An empty value is accepted: the number has simply not been provided yet.
///
/// # Examples
///
/// ```
/// use mehis_validators::{PhoneNumberValidator, Validator};
///
/// let validator = PhoneNumberValidator::new();
/// assert!(validator.validate("+265881234567").is_ok());
/// assert!(validator.validate("+26588123456").is_err());
/// assert!(validator.validate("+2658812345678").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PhoneNumberValidator {
	prefix: String,
	digits: usize,
}

impl PhoneNumberValidator {
	pub fn new() -> Self {
		Self {
			prefix: DEFAULT_COUNTRY_PREFIX.to_string(),
			digits: SUBSCRIBER_DIGITS,
		}
	}

	/// Use a different country prefix.
	///
	/// # Examples
	///
	/// ```
	/// use mehis_validators::{PhoneNumberValidator, Validator};
	///
	/// let validator = PhoneNumberValidator::new().with_prefix("+260");
	/// assert!(validator.validate("+260971234567").is_ok());
	/// assert!(validator.validate("+265971234567").is_err());
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}
}

impl Default for PhoneNumberValidator {
	fn default() -> Self {
		Self::new()
	}
}

impl Validator<str> for PhoneNumberValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if value.is_empty() {
			return Ok(());
		}
		let valid = value.strip_prefix(self.prefix.as_str()).is_some_and(|rest| {
			rest.len() == self.digits && rest.bytes().all(|b| b.is_ascii_digit())
		});
		if valid {
			Ok(())
		} else {
			Err(ValidationError::InvalidPhoneNumber {
				prefix: self.prefix.clone(),
				digits: self.digits,
			})
		}
	}
}
