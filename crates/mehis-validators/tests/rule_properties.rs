//! Property tests for the date and identifier rules

use chrono::{Datelike, Duration, Months, NaiveDate};
use mehis_validators::{
	DateOfBirthValidator, MONTH_NAMES, NationalIdValidator, PhoneNumberValidator, ValidationError,
	Validator, WorkPlanDateValidator,
};
use proptest::prelude::*;
use rstest::rstest;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
	NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[rstest]
#[case("2024-03-01", Ok(()))]
#[case("2024-03-31", Ok(()))]
#[case("2024-04-01", Err("Must be in March"))]
#[case("2023-03-15", Err("Year must be 2024"))]
#[case("garbage", Err("Invalid date"))]
fn test_work_plan_march_2024(#[case] input: &str, #[case] expected: Result<(), &str>) {
	let result = WorkPlanDateValidator::new("March", "2024")
		.validate(input)
		.map_err(|e| e.to_string());
	assert_eq!(result, expected.map_err(str::to_string));
}

#[test]
fn test_dob_seventeen_years_exactly_and_fifteen_years_364_days() {
	let today = ymd(2025, 8, 20);
	let validator = DateOfBirthValidator::new().with_today(today);

	let seventeen = today.checked_sub_months(Months::new(17 * 12)).unwrap();
	assert!(validator.validate(seventeen.to_string().as_str()).is_ok());

	let fifteen = today.checked_sub_months(Months::new(15 * 12)).unwrap() - Duration::days(364);
	// Still under sixteen by one day
	assert!(fifteen > today.checked_sub_months(Months::new(16 * 12)).unwrap());
	assert_eq!(
		validator.validate(fifteen.to_string().as_str()),
		Err(ValidationError::TooYoung { min: 16 })
	);
}

proptest! {
	#[test]
	fn prop_every_day_of_plan_month_is_accepted(month in 1u32..=12, day in 1u32..=28, year in 2000i32..2100) {
		let date = ymd(year, month, day);
		let validator = WorkPlanDateValidator::new(MONTH_NAMES[(month - 1) as usize], year.to_string());
		prop_assert!(validator.validate(date.to_string().as_str()).is_ok());
	}

	#[test]
	fn prop_other_months_are_rejected(month in 1u32..=12, other in 1u32..=12, year in 2000i32..2100) {
		prop_assume!(month != other);
		let date = ymd(year, other, 10);
		let validator = WorkPlanDateValidator::new(MONTH_NAMES[(month - 1) as usize], year.to_string());
		prop_assert_eq!(
			validator.validate(date.to_string().as_str()),
			Err(ValidationError::WrongMonth { month: MONTH_NAMES[(month - 1) as usize].to_string() })
		);
	}

	#[test]
	fn prop_age_in_range_is_accepted(age in 16i32..=80, offset in 0i64..300) {
		let today = ymd(2024, 12, 31);
		let birth = ymd(today.year() - age, 1, 1) + Duration::days(offset);
		let validator = DateOfBirthValidator::new().with_today(today);
		prop_assert!(validator.validate(birth.to_string().as_str()).is_ok());
	}

	#[test]
	fn prop_valid_phone_numbers(digits in "[0-9]{9}") {
		let phone = format!("+265{}", digits);
		prop_assert!(PhoneNumberValidator::new().validate(phone.as_str()).is_ok());
	}

	#[test]
	fn prop_phone_numbers_with_wrong_length(digits in "[0-9]{1,8}|[0-9]{10,12}") {
		let phone = format!("+265{}", digits);
		prop_assert!(PhoneNumberValidator::new().validate(phone.as_str()).is_err());
	}

	#[test]
	fn prop_national_ids(id in "[A-Z0-9]{8}", lower in "[a-z]{8}") {
		prop_assert!(NationalIdValidator::new().validate(id.as_str()).is_ok());
		prop_assert!(NationalIdValidator::new().validate(lower.as_str()).is_err());
	}
}
