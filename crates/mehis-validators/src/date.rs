//! Date validators
//!
//! Dates arrive from the forms as ISO-8601 strings. [`parse_date`] accepts a
//! plain calendar date (`2024-03-15`), a date-time (`2024-03-15T08:30`,
//! RFC 3339 timestamps), a month (`2024-03`) or a bare year (`2024`).
//!
//! Validators that compare against "today" default to the local calendar date
//! and accept an explicit date through `with_today` so results are
//! reproducible.

use crate::{ValidationError, ValidationResult, Validator};
use chrono::{DateTime, Datelike, Local, Months, NaiveDate, NaiveDateTime};

/// Calendar month names, in order, as used by work plans.
pub const MONTH_NAMES: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

/// Parses a form date value.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mehis_validators::parse_date;
///
/// let march = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(parse_date("2024-03-15"), Some(march));
/// assert_eq!(parse_date("2024-03-15T10:00:00Z"), Some(march));
/// assert_eq!(parse_date("2024"), NaiveDate::from_ymd_opt(2024, 1, 1));
/// assert_eq!(parse_date("not a date"), None);
/// ```
pub fn parse_date(value: &str) -> Option<NaiveDate> {
	let value = value.trim();
	if value.is_empty() {
		return None;
	}
	if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
		return Some(date);
	}
	if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
		return Some(timestamp.date_naive());
	}
	for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
		if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
			return Some(datetime.date());
		}
	}
	let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
	match value.split_once('-') {
		Some((year, month)) if year.len() == 4 && month.len() == 2 => {
			if all_digits(year) && all_digits(month) {
				NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
			} else {
				None
			}
		}
		None if value.len() == 4 && all_digits(value) => {
			NaiveDate::from_ymd_opt(value.parse().ok()?, 1, 1)
		}
		_ => None,
	}
}

/// The time of day of a form value, when it carries one.
///
/// RFC 3339 timestamps keep the wall-clock time of their own offset, the
/// same reading [`parse_date`] takes the calendar date from.
fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
	let value = value.trim();
	if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
		return Some(timestamp.naive_local());
	}
	["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
		.iter()
		.find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Whole years elapsed between `birth` and `today`, accounting for month and day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mehis_validators::age_on;
///
/// let birth = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
/// assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2020, 6, 14).unwrap()), 19);
/// assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()), 20);
/// ```
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
	let mut age = today.year() - birth.year();
	if (today.month(), today.day()) < (birth.month(), birth.day()) {
		age -= 1;
	}
	age
}

fn local_today() -> NaiveDate {
	Local::now().date_naive()
}

/// Validates a date of birth: the person must be between 16 and 80 years old.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mehis_validators::{DateOfBirthValidator, Validator};
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let validator = DateOfBirthValidator::new().with_today(today);
/// assert!(validator.validate("1990-01-01").is_ok());
/// assert!(validator.validate("2010-01-01").is_err());
/// assert!(validator.validate("").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DateOfBirthValidator {
	min_age: u32,
	max_age: u32,
	today: Option<NaiveDate>,
}

impl DateOfBirthValidator {
	pub fn new() -> Self {
		Self {
			min_age: 16,
			max_age: 80,
			today: None,
		}
	}

	pub fn with_today(mut self, today: NaiveDate) -> Self {
		self.today = Some(today);
		self
	}
}

impl Default for DateOfBirthValidator {
	fn default() -> Self {
		Self::new()
	}
}

impl Validator<str> for DateOfBirthValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		// "--" is what an untouched day/month/year picker submits
		if value.is_empty() || value == "--" {
			return Ok(());
		}
		let birth = parse_date(value).ok_or(ValidationError::InvalidDateFormat)?;
		let age = age_on(birth, self.today.unwrap_or_else(local_today));
		if age < self.min_age as i32 {
			return Err(ValidationError::TooYoung { min: self.min_age });
		}
		if age > self.max_age as i32 {
			return Err(ValidationError::TooOld { max: self.max_age });
		}
		Ok(())
	}
}

/// Validates an appointment date against the holder's date of birth.
///
/// The appointment must fall at least 16 years after birth and must not be in
/// the future. Either value missing, or an unreadable appointment date, is
/// left for other rules to report.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mehis_validators::{AppointmentDateValidator, Validator};
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let validator = AppointmentDateValidator::new("1990-04-10").with_today(today);
/// assert!(validator.validate("2012-07-01").is_ok());
/// assert!(validator.validate("2005-01-01").is_err());
/// assert!(validator.validate("2025-01-01").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct AppointmentDateValidator {
	date_of_birth: String,
	min_years_after_birth: u32,
	today: Option<NaiveDate>,
}

impl AppointmentDateValidator {
	pub fn new(date_of_birth: impl Into<String>) -> Self {
		Self {
			date_of_birth: date_of_birth.into(),
			min_years_after_birth: 16,
			today: None,
		}
	}

	pub fn with_today(mut self, today: NaiveDate) -> Self {
		self.today = Some(today);
		self
	}
}

impl Validator<str> for AppointmentDateValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if value.is_empty() || self.date_of_birth.is_empty() {
			return Ok(());
		}
		let Some(appointed) = parse_date(value) else {
			return Ok(());
		};
		let earliest = parse_date(&self.date_of_birth).and_then(|birth| {
			birth.checked_add_months(Months::new(self.min_years_after_birth * 12))
		});
		if let Some(earliest) = earliest
			&& appointed < earliest
		{
			return Err(ValidationError::AppointedTooEarly {
				years: self.min_years_after_birth,
			});
		}
		if appointed > self.today.unwrap_or_else(local_today) {
			return Err(ValidationError::AppointedInFuture);
		}
		Ok(())
	}
}

/// Validates that a date falls inside a work plan's month and year.
///
/// The year is checked first, then the month name.
///
/// # Examples
///
/// ```
/// use mehis_validators::{Validator, WorkPlanDateValidator};
///
/// let validator = WorkPlanDateValidator::new("March", "2024");
/// assert!(validator.validate("2024-03-15").is_ok());
/// assert_eq!(validator.validate("2024-04-01").unwrap_err().to_string(), "Must be in March");
/// assert_eq!(validator.validate("2023-03-01").unwrap_err().to_string(), "Year must be 2024");
/// ```
#[derive(Debug, Clone)]
pub struct WorkPlanDateValidator {
	month: String,
	year: String,
}

impl WorkPlanDateValidator {
	pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
		Self {
			month: month.into(),
			year: year.into(),
		}
	}
}

impl Validator<str> for WorkPlanDateValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if value.is_empty() || self.month.is_empty() || self.year.is_empty() {
			return Ok(());
		}
		let date = parse_date(value).ok_or(ValidationError::InvalidDate)?;
		if date.year().to_string() != self.year {
			return Err(ValidationError::WrongYear {
				year: self.year.clone(),
			});
		}
		let plan_month = MONTH_NAMES.iter().position(|name| *name == self.month);
		if plan_month != Some(date.month0() as usize) {
			return Err(ValidationError::WrongMonth {
				month: self.month.clone(),
			});
		}
		Ok(())
	}
}

/// Validates that an end date does not precede its start date.
///
/// # Examples
///
/// ```
/// use mehis_validators::{DateRangeValidator, Validator};
///
/// let validator = DateRangeValidator::new("2024-03-10");
/// assert!(validator.validate("2024-03-10").is_ok());
/// assert!(validator.validate("2024-03-09").is_err());
///
/// // Times are compared when both ends carry one
/// let morning = DateRangeValidator::new("2024-03-10T10:00");
/// assert!(morning.validate("2024-03-10T08:00").is_err());
/// assert!(morning.validate("2024-03-10").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DateRangeValidator {
	start: String,
}

impl DateRangeValidator {
	pub fn new(start: impl Into<String>) -> Self {
		Self {
			start: start.into(),
		}
	}
}

impl Validator<str> for DateRangeValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		let before = match (parse_datetime(&self.start), parse_datetime(value)) {
			(Some(start), Some(end)) => end < start,
			_ => matches!(
				(parse_date(&self.start), parse_date(value)),
				(Some(start), Some(end)) if end < start
			),
		};
		if before {
			Err(ValidationError::EndBeforeStart)
		} else {
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	#[rstest]
	#[case("2024-03-15", Some(ymd(2024, 3, 15)))]
	#[case(" 2024-03-15 ", Some(ymd(2024, 3, 15)))]
	#[case("2024-03-15T23:10", Some(ymd(2024, 3, 15)))]
	#[case("2024-03-15T23:10:05.120", Some(ymd(2024, 3, 15)))]
	#[case("2024-03", Some(ymd(2024, 3, 1)))]
	#[case("1999", Some(ymd(1999, 1, 1)))]
	#[case("2024-13-01", None)]
	#[case("2024-02-30", None)]
	#[case("--", None)]
	#[case("", None)]
	fn test_parse_date(#[case] input: &str, #[case] expected: Option<NaiveDate>) {
		assert_eq!(parse_date(input), expected);
	}

	#[test]
	fn test_dob_boundaries() {
		let today = ymd(2024, 6, 15);
		let validator = DateOfBirthValidator::new().with_today(today);

		// Sixteenth birthday today
		assert!(validator.validate("2008-06-15").is_ok());
		// Sixteenth birthday tomorrow
		assert_eq!(
			validator.validate("2008-06-16"),
			Err(ValidationError::TooYoung { min: 16 })
		);
		// Eighty and a day
		assert!(validator.validate("1944-06-14").is_ok());
		// Eighty-one today
		assert_eq!(
			validator.validate("1943-06-15"),
			Err(ValidationError::TooOld { max: 80 })
		);
	}

	#[test]
	fn test_dob_untouched_picker_and_garbage() {
		let validator = DateOfBirthValidator::new();
		assert!(validator.validate("--").is_ok());
		assert_eq!(
			validator.validate("15/06/1990"),
			Err(ValidationError::InvalidDateFormat)
		);
	}

	#[test]
	fn test_appointment_rules() {
		let today = ymd(2024, 6, 15);
		let validator = AppointmentDateValidator::new("1990-06-15").with_today(today);

		assert!(validator.validate("2006-06-15").is_ok());
		assert_eq!(
			validator.validate("2006-06-14"),
			Err(ValidationError::AppointedTooEarly { years: 16 })
		);
		assert_eq!(
			validator.validate("2024-06-16"),
			Err(ValidationError::AppointedInFuture)
		);
		// Bare year is read as the first of January
		assert!(validator.validate("2010").is_ok());
		// Unreadable appointment dates are not this rule's concern
		assert!(validator.validate("sometime").is_ok());
		assert!(
			AppointmentDateValidator::new("")
				.with_today(today)
				.validate("2030-01-01")
				.is_ok()
		);
	}

	#[test]
	fn test_work_plan_date_empty_inputs_pass() {
		assert!(WorkPlanDateValidator::new("", "2024").validate("2024-01-01").is_ok());
		assert!(WorkPlanDateValidator::new("March", "").validate("2024-01-01").is_ok());
		assert!(WorkPlanDateValidator::new("March", "2024").validate("").is_ok());
		assert_eq!(
			WorkPlanDateValidator::new("March", "2024").validate("soon"),
			Err(ValidationError::InvalidDate)
		);
	}

	#[test]
	fn test_date_range_ignores_missing_ends() {
		assert!(DateRangeValidator::new("").validate("2024-01-01").is_ok());
		assert!(DateRangeValidator::new("2024-01-01").validate("").is_ok());
		assert_eq!(
			DateRangeValidator::new("2024-01-02").validate("2024-01-01"),
			Err(ValidationError::EndBeforeStart)
		);
	}

	#[rstest]
	#[case("2024-03-10T10:00", "2024-03-10T08:00", false)]
	#[case("2024-03-10T10:00", "2024-03-10T10:00", true)]
	#[case("2024-03-10T10:00", "2024-03-10T10:30:00.000", true)]
	#[case("2024-03-10T10:00:00+02:00", "2024-03-10T09:59:00+02:00", false)]
	#[case("2024-03-10T10:00", "2024-03-10", true)]
	#[case("2024-03-10T10:00", "2024-03-09", false)]
	fn test_date_range_compares_times_when_present(
		#[case] start: &str,
		#[case] end: &str,
		#[case] valid: bool,
	) {
		assert_eq!(DateRangeValidator::new(start).validate(end).is_ok(), valid);
	}
}
