//! Entity-kind tag.

use mehis_validators::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Identifies a record collection: where it is stored and how it is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
	HsaRegistration,
	WorkPlan,
	WaterPoint,
	WaterQualitySample,
	SanitationAssessment,
	VillageInspection,
	HealthPost,
	Hcmc,
}

impl EntityKind {
	pub const ALL: &'static [EntityKind] = &[
		EntityKind::HsaRegistration,
		EntityKind::WorkPlan,
		EntityKind::WaterPoint,
		EntityKind::WaterQualitySample,
		EntityKind::SanitationAssessment,
		EntityKind::VillageInspection,
		EntityKind::HealthPost,
		EntityKind::Hcmc,
	];

	/// Key of the collection in the store (without the application prefix).
	pub const fn storage_key(self) -> &'static str {
		match self {
			EntityKind::HsaRegistration => "hsaData",
			EntityKind::WorkPlan => "workPlans",
			EntityKind::WaterPoint => "waterPoints",
			EntityKind::WaterQualitySample => "waterQualitySamples",
			EntityKind::SanitationAssessment => "sanitationAssessments",
			EntityKind::VillageInspection => "inspections",
			EntityKind::HealthPost => "healthPosts",
			EntityKind::Hcmc => "hcmcs",
		}
	}

	/// Display label, also used as the stem of export file names.
	pub const fn label(self) -> &'static str {
		match self {
			EntityKind::HsaRegistration => "HSA_Registrations",
			EntityKind::WorkPlan => "Work_Plans",
			EntityKind::WaterPoint => "Water_Points",
			EntityKind::WaterQualitySample => "Water_Quality_Samples",
			EntityKind::SanitationAssessment => "Sanitation_Assessments",
			EntityKind::VillageInspection => "Village_Inspections",
			EntityKind::HealthPost => "Health_Posts",
			EntityKind::Hcmc => "HCMCs",
		}
	}

	/// Short command-line name.
	pub const fn slug(self) -> &'static str {
		match self {
			EntityKind::HsaRegistration => "hsa",
			EntityKind::WorkPlan => "work-plans",
			EntityKind::WaterPoint => "water-points",
			EntityKind::WaterQualitySample => "water-quality",
			EntityKind::SanitationAssessment => "sanitation",
			EntityKind::VillageInspection => "inspections",
			EntityKind::HealthPost => "health-posts",
			EntityKind::Hcmc => "hcmcs",
		}
	}

	/// Store key under which an unfinished draft of this kind is kept.
	pub fn draft_key(self) -> String {
		format!("draft_{}", self.storage_key())
	}
}

impl fmt::Display for EntityKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.slug())
	}
}

impl FromStr for EntityKind {
	type Err = ValidationError;

	/// Accepts either the slug or the storage key.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		EntityKind::ALL
			.iter()
			.copied()
			.find(|kind| kind.slug() == s || kind.storage_key() == s)
			.ok_or_else(|| ValidationError::InvalidChoice {
				field: "Entity".to_string(),
				value: s.to_string(),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("hsa", EntityKind::HsaRegistration)]
	#[case("hsaData", EntityKind::HsaRegistration)]
	#[case("inspections", EntityKind::VillageInspection)]
	#[case("water-quality", EntityKind::WaterQualitySample)]
	fn test_parse(#[case] input: &str, #[case] expected: EntityKind) {
		assert_eq!(input.parse::<EntityKind>().unwrap(), expected);
	}

	#[test]
	fn test_storage_keys_unique() {
		let mut keys: Vec<_> = EntityKind::ALL.iter().map(|k| k.storage_key()).collect();
		keys.sort();
		keys.dedup();
		assert_eq!(keys.len(), EntityKind::ALL.len());
	}

	#[test]
	fn test_draft_key() {
		assert_eq!(EntityKind::WorkPlan.draft_key(), "draft_workPlans");
	}
}
