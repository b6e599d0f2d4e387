//! Village environmental health inspections.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::EntityKind;
use crate::choices::ThreeState;
use crate::record::impl_record;

/// Per-household checklist recorded during a village inspection.
///
/// `has_latrine` gates the four latrine checks and `refuse_pit_present` gates
/// `no_indiscriminate_waste`. `disease_cases` only holds counts for diseases
/// listed in `observed_diseases`, and `other_disease_spec` is only kept while
/// `"Other"` is observed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HouseholdRecord {
	pub id: String,
	pub head_name: String,

	pub has_latrine: ThreeState,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub latrine_safe: Option<ThreeState>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub latrine_roof: Option<ThreeState>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub latrine_handwash: Option<ThreeState>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub latrine_clean: Option<ThreeState>,

	pub refuse_pit_present: ThreeState,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub no_indiscriminate_waste: Option<ThreeState>,

	pub handwash_available: ThreeState,
	pub soap_ash_available: ThreeState,
	pub food_prep_clean: ThreeState,
	pub utensils_proper: ThreeState,
	pub personal_hygiene_promoted: ThreeState,
	pub well_ventilated: ThreeState,
	pub no_overcrowding: ThreeState,
	pub compound_clean: ThreeState,
	pub proper_drainage: ThreeState,
	pub no_stagnant_water: ThreeState,
	pub mosquito_breeding: ThreeState,
	pub llin_in_use: ThreeState,
	pub rodent_infestation: ThreeState,
	pub animal_shelters_away: ThreeState,
	pub food_stored_safely: ThreeState,
	pub no_expired_food: ThreeState,
	pub meat_handled_properly: ThreeState,
	pub flies_controlled: ThreeState,

	pub observed_diseases: Vec<String>,
	pub disease_cases: BTreeMap<String, u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub other_disease_spec: Option<String>,
}

impl HouseholdRecord {
	/// Ungated checks with their column headings, in form order.
	pub fn hygiene_checks(&self) -> [(&'static str, ThreeState); 18] {
		[
			("Handwash Available", self.handwash_available),
			("Soap/Ash Available", self.soap_ash_available),
			("Food Prep Clean", self.food_prep_clean),
			("Utensils Proper", self.utensils_proper),
			("Personal Hygiene Promoted", self.personal_hygiene_promoted),
			("Well Ventilated", self.well_ventilated),
			("No Overcrowding", self.no_overcrowding),
			("Compound Clean", self.compound_clean),
			("Proper Drainage", self.proper_drainage),
			("No Stagnant Water", self.no_stagnant_water),
			("Mosquito Breeding", self.mosquito_breeding),
			("LLIN In Use", self.llin_in_use),
			("Rodent Infestation", self.rodent_infestation),
			("Animal Shelters Away", self.animal_shelters_away),
			("Food Stored Safely", self.food_stored_safely),
			("No Expired Food", self.no_expired_food),
			("Meat Handled Properly", self.meat_handled_properly),
			("Flies Controlled", self.flies_controlled),
		]
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionPlan {
	pub id: String,
	pub issue_identified: String,
	pub action_required: String,
	pub responsible_person: String,
	pub timeline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VillageInspection {
	pub id: String,
	pub date: String,
	pub district: String,
	pub health_facility: String,
	pub gvh: String,
	pub village_name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub village_population: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub num_households: Option<u32>,

	pub main_water_sources: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub other_water_source: Option<String>,
	pub water_free_contamination: ThreeState,
	pub burial_sites_safe: ThreeState,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub boreholes_count: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub boreholes_functional: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub boreholes_clean_surroundings: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub boreholes_fenced: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub boreholes_committees: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub wells_count: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub wells_functional: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub wells_clean: Option<u32>,

	pub vhc_available: ThreeState,
	pub vhc_active: ThreeState,
	pub sanitation_participation: ThreeState,

	pub households: Vec<HouseholdRecord>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub overall_observations: Option<String>,
	pub action_plans: Vec<ActionPlan>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub submitted_at: Option<String>,
}

impl_record!(VillageInspection, EntityKind::VillageInspection);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_three_state_fields_roundtrip() {
		let household = HouseholdRecord {
			id: "h1".to_string(),
			has_latrine: ThreeState::Yes,
			latrine_safe: Some(ThreeState::NotApplicable),
			disease_cases: BTreeMap::from([("Cholera".to_string(), 2)]),
			observed_diseases: vec!["Cholera".to_string()],
			..Default::default()
		};
		let json = serde_json::to_value(&household).unwrap();
		assert_eq!(json["latrineSafe"], "N/A");
		assert_eq!(json["llinInUse"], "No");
		assert_eq!(json["diseaseCases"]["Cholera"], 2);

		let back: HouseholdRecord = serde_json::from_value(json).unwrap();
		assert_eq!(back, household);
	}
}
