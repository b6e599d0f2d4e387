//! Closed enumerations used by the record schema.
//!
//! Every enumeration serializes to the exact label shown to the user and
//! stored in the collections (`"Partially Functional"`, `"N/A"`, ...). Values
//! outside the set fail to deserialize and are rejected by `FromStr`.

use mehis_validators::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a closed enumeration with its wire strings.
///
/// Generates `ALL`, `as_str`, `Display`, and a `FromStr` that reports
/// [`ValidationError::InvalidChoice`] naming the field label.
macro_rules! choice_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident($label:literal) {
			$( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
		$vis enum $name {
			$(
				$(#[$vmeta])*
				#[serde(rename = $wire)]
				$variant,
			)+
		}

		impl $name {
			/// Every value, in display order.
			pub const ALL: &'static [$name] = &[$($name::$variant),+];

			/// Human-readable field label used in error messages.
			pub const LABEL: &'static str = $label;

			pub const fn as_str(&self) -> &'static str {
				match self {
					$($name::$variant => $wire,)+
				}
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl FromStr for $name {
			type Err = ValidationError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$($wire => Ok($name::$variant),)+
					_ => Err(ValidationError::InvalidChoice {
						field: $label.to_string(),
						value: s.to_string(),
					}),
				}
			}
		}
	};
}

choice_enum! {
	/// The ubiquitous two-way toggle. Toggles start at `No`.
	#[derive(Default)]
	pub enum YesNo("Yes/No") {
		Yes => "Yes",
		#[default]
		No => "No",
	}
}

impl YesNo {
	pub fn is_yes(self) -> bool {
		self == YesNo::Yes
	}
}

impl From<bool> for YesNo {
	fn from(value: bool) -> Self {
		if value { YesNo::Yes } else { YesNo::No }
	}
}

choice_enum! {
	/// Inspection checks that may not apply to a household.
	#[derive(Default)]
	pub enum ThreeState("Inspection Check") {
		Yes => "Yes",
		#[default]
		No => "No",
		NotApplicable => "N/A",
	}
}

impl ThreeState {
	pub fn is_yes(self) -> bool {
		self == ThreeState::Yes
	}
}

choice_enum! {
	pub enum Sex("Sex") {
		Male => "Male",
		Female => "Female",
	}
}

choice_enum! {
	pub enum Position("Position") {
		Hsa => "HSA",
		Shsa => "SHSA",
	}
}

choice_enum! {
	pub enum Grade("Grade") {
		Hm => "HM",
		Hl => "HL",
	}
}

choice_enum! {
	pub enum Qualification("Qualification") {
		Msce => "MSCE",
		Jce => "JCE",
		Plsce => "PLSCE",
	}
}

choice_enum! {
	pub enum SalarySupport("Salary Support") {
		Government => "Government",
		Partner => "Partner",
	}
}

choice_enum! {
	pub enum PhoneType("Phone Type") {
		SmartPhone => "Smart phone",
		Tablet => "Tablet",
	}
}

choice_enum! {
	#[derive(Default)]
	pub enum Functionality("Functionality") {
		#[default]
		Functional => "Functional",
		PartiallyFunctional => "Partially Functional",
		NonFunctional => "Non-Functional",
	}
}

choice_enum! {
	#[derive(Default)]
	pub enum RepairState("Repair State") {
		#[default]
		Good => "Good",
		Fair => "Fair",
		Poor => "Poor",
	}
}

choice_enum! {
	pub enum ToiletCondition("Toilet Condition") {
		Clean => "Clean",
		Dirty => "Dirty",
		NeedsRepair => "Needs Repair",
	}
}

choice_enum! {
	#[derive(Default)]
	pub enum WasteManagement("Waste Management") {
		#[default]
		Pit => "Pit",
		Indiscriminate => "Indiscriminate",
		Other => "Other",
	}
}

choice_enum! {
	pub enum H2sResult("H2S Result") {
		Positive => "Positive",
		Negative => "Negative",
		Pending => "Pending",
	}
}

choice_enum! {
	/// Reported outcome of one planned session.
	pub enum OccurrenceStatus("Implementation Status") {
		Completed => "Completed",
		PartiallyCompleted => "Partially completed",
		CompletedAfterReschedule => "Completed after reschedule",
		NotDone => "Not done",
	}
}

choice_enum! {
	#[derive(Default)]
	pub enum UserRole("Role") {
		#[default]
		Hsa => "HSA",
		HealthFacilitySupervisor => "Health facility supervisor",
		DistrictSupervisor => "District supervisor",
		NationalSupervisor => "National supervisor",
	}
}

choice_enum! {
	/// Keys of the fixed HSA supplies mapping.
	pub enum SupplyKind("Supply") {
		Bicycle => "bicycle",
		Motorcycle => "motorcycle",
		Uniforms => "uniforms",
		Gumboots => "gumboots",
		Raincoat => "raincoat",
		Umbrella => "umbrella",
		DrugBoxes => "drugBoxes",
		Torch => "torch",
	}
}

impl SupplyKind {
	/// Column heading for this supply.
	pub fn title(self) -> &'static str {
		match self {
			SupplyKind::Bicycle => "Bicycle",
			SupplyKind::Motorcycle => "Motorcycle",
			SupplyKind::Uniforms => "Uniforms",
			SupplyKind::Gumboots => "Gumboots",
			SupplyKind::Raincoat => "Raincoat",
			SupplyKind::Umbrella => "Umbrella",
			SupplyKind::DrugBoxes => "Drug Boxes",
			SupplyKind::Torch => "Torch",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Functionality::PartiallyFunctional, "\"Partially Functional\"")]
	#[case(Functionality::NonFunctional, "\"Non-Functional\"")]
	fn test_wire_strings(#[case] value: Functionality, #[case] json: &str) {
		assert_eq!(serde_json::to_string(&value).unwrap(), json);
		assert_eq!(serde_json::from_str::<Functionality>(json).unwrap(), value);
	}

	#[test]
	fn test_three_state_not_applicable() {
		assert_eq!("N/A".parse::<ThreeState>().unwrap(), ThreeState::NotApplicable);
		assert_eq!(ThreeState::NotApplicable.to_string(), "N/A");
	}

	#[test]
	fn test_unknown_values_rejected() {
		assert!(serde_json::from_str::<ToiletCondition>("\"Filthy\"").is_err());
		assert_eq!(
			"done".parse::<OccurrenceStatus>().unwrap_err().to_string(),
			"'done' is not a valid choice for Implementation Status"
		);
	}

	#[test]
	fn test_defaults_are_baselines() {
		assert_eq!(YesNo::default(), YesNo::No);
		assert_eq!(Functionality::default(), Functionality::Functional);
		assert_eq!(RepairState::default(), RepairState::Good);
		assert_eq!(WasteManagement::default(), WasteManagement::Pit);
	}

	#[test]
	fn test_all_lists_every_variant() {
		assert_eq!(SupplyKind::ALL.len(), 8);
		assert_eq!(OccurrenceStatus::ALL[3], OccurrenceStatus::NotDone);
	}
}
