//! Per-entity form behaviour: defaults, gate cascades and validation rules.

mod facility;
mod hsa;
mod inspection;
mod wash;
mod work_plan;

pub use work_plan::MAX_TARGET_COUNT;

use mehis_models::Record;
use mehis_validators::{ChoiceValidator, ValidationError, Validator, parse_date};

use crate::context::FormContext;
use crate::errors::FormErrors;

/// A record kind that can be edited through a [`FormController`](crate::FormController).
pub trait FormRecord: Record {
	/// A fresh draft with the kind's defaults.
	fn blank(ctx: &FormContext) -> Self {
		let _ = ctx;
		Self::default()
	}

	/// Clears every field whose gate is off, and restores any other
	/// structural invariant of the kind.
	fn cascade(&mut self, ctx: &FormContext);

	/// Runs every applicable rule, recording each failure in `errors`.
	///
	/// Rules for a gated field only run while its gate is on.
	fn clean(&self, ctx: &FormContext, errors: &mut FormErrors);
}

pub(crate) fn check_choice(
	errors: &mut FormErrors,
	key: impl Into<String>,
	label: &str,
	catalog: &'static [&'static str],
	value: &str,
) {
	errors.check(key, ChoiceValidator::new(label, catalog).validate(value));
}

/// Every entry of `values` must belong to `catalog`; the first stranger is reported.
pub(crate) fn check_choices(
	errors: &mut FormErrors,
	key: impl Into<String>,
	label: &str,
	catalog: &'static [&'static str],
	values: &[String],
) {
	let validator = ChoiceValidator::new(label, catalog);
	if let Some(Err(e)) = values
		.iter()
		.map(|value| validator.validate(value.as_str()))
		.find(Result::is_err)
	{
		errors.add(key, e.to_string());
	}
}

pub(crate) fn check_date(errors: &mut FormErrors, key: impl Into<String>, value: &str) {
	if !value.trim().is_empty() && parse_date(value).is_none() {
		errors.add(key, ValidationError::InvalidDateFormat.to_string());
	}
}

pub(crate) fn require_some<T>(errors: &mut FormErrors, key: impl Into<String>, label: &str, value: &Option<T>) {
	if value.is_none() {
		errors.add(
			key,
			ValidationError::Required {
				label: label.to_string(),
			}
			.to_string(),
		);
	}
}

/// Collapses blank free text to `None`.
pub(crate) fn blank_to_none(value: &mut Option<String>) {
	if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
		*value = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_check_choices_reports_first_stranger() {
		let mut errors = FormErrors::new();
		check_choices(
			&mut errors,
			"staffAvailable",
			"Staff",
			&["HSA", "SHSA"],
			&["HSA".to_string(), "Pilot".to_string(), "Chef".to_string()],
		);
		assert_eq!(
			errors.get("staffAvailable"),
			Some("'Pilot' is not a valid choice for Staff")
		);
	}

	#[test]
	fn test_blank_to_none() {
		let mut value = Some("  ".to_string());
		blank_to_none(&mut value);
		assert_eq!(value, None);

		let mut value = Some("VIP".to_string());
		blank_to_none(&mut value);
		assert_eq!(value.as_deref(), Some("VIP"));
	}
}
