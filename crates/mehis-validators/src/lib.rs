//! Validation rules for MeHIS forms
//!
//! This crate provides the pure validation rules used by the form controller:
//! phone numbers, identity numbers, dates of birth and appointment, work plan
//! periods, date ranges, numeric bounds, enumerated choices and passwords.
//!
//! Every rule implements [`Validator`]. Rules never mutate their input and,
//! unless documented otherwise, treat an empty value as "not yet provided"
//! and accept it. Required-ness is enforced by the caller through
//! [`RequiredValidator`].
//!
//! ```
//! use mehis_validators::{PhoneNumberValidator, Validator};
//!
//! let validator = PhoneNumberValidator::new();
//! assert!(validator.validate("+265991234567").is_ok());
//! assert!(validator.validate("").is_ok());
//! assert!(validator.validate("0991234567").is_err());
//! ```

pub mod choice;
pub mod date;
pub mod errors;
pub mod identifier;
pub mod numeric;
pub mod password;
pub mod phone_number;
pub mod required;

pub use choice::ChoiceValidator;
pub use date::{
	AppointmentDateValidator, DateOfBirthValidator, DateRangeValidator, MONTH_NAMES,
	WorkPlanDateValidator, age_on, parse_date,
};
pub use errors::{ValidationError, ValidationResult};
pub use identifier::{EmploymentNumberValidator, NationalIdValidator};
pub use numeric::{MaxValueValidator, MinValueValidator, PositiveNumberValidator};
pub use password::{PasswordComplexityValidator, PasswordMatchValidator};
pub use phone_number::{DEFAULT_COUNTRY_PREFIX, PhoneNumberValidator};
pub use required::RequiredValidator;

/// Trait for validators
pub trait Validator<T: ?Sized> {
	fn validate(&self, value: &T) -> ValidationResult<()>;
}

/// Re-export commonly used types
pub mod prelude {
	pub use crate::choice::*;
	pub use crate::date::*;
	pub use crate::errors::*;
	pub use crate::identifier::*;
	pub use crate::numeric::*;
	pub use crate::password::*;
	pub use crate::phone_number::*;
	pub use crate::required::*;
	pub use crate::Validator;
}
