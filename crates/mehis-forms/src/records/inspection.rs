use mehis_models::catalogs::{DISEASES, DISTRICTS, OTHER, WATER_POINT_TYPES};
use mehis_models::{ActionPlan, HouseholdRecord, ThreeState, VillageInspection};
use mehis_validators::{MaxValueValidator, Validator};

use super::{FormRecord, blank_to_none, check_choice, check_choices, check_date};
use crate::context::FormContext;
use crate::controller::FormController;
use crate::errors::{FormError, FormErrors, FormResult};

fn cascade_household(household: &mut HouseholdRecord) {
	if !household.has_latrine.is_yes() {
		household.latrine_safe = None;
		household.latrine_roof = None;
		household.latrine_handwash = None;
		household.latrine_clean = None;
	}
	if !household.refuse_pit_present.is_yes() {
		household.no_indiscriminate_waste = None;
	}
	let observed = &household.observed_diseases;
	household
		.disease_cases
		.retain(|disease, _| observed.contains(disease));
	if !observed.iter().any(|d| d == OTHER) {
		household.other_disease_spec = None;
	}
}

impl FormRecord for VillageInspection {
	fn cascade(&mut self, _ctx: &FormContext) {
		if !self.main_water_sources.iter().any(|s| s == OTHER) {
			self.other_water_source = None;
		}
		blank_to_none(&mut self.overall_observations);
		self.households.iter_mut().for_each(cascade_household);
	}

	fn clean(&self, _ctx: &FormContext, errors: &mut FormErrors) {
		errors.require("date", "Inspection Date", &self.date);
		check_date(errors, "date", &self.date);
		errors.require("district", "District", &self.district);
		check_choice(errors, "district", "District", DISTRICTS, &self.district);
		errors.require("villageName", "Village Name", &self.village_name);

		check_choices(
			errors,
			"mainWaterSources",
			"Water Source",
			WATER_POINT_TYPES,
			&self.main_water_sources,
		);
		if self.main_water_sources.iter().any(|s| s == OTHER) {
			errors.require(
				"otherWaterSource",
				"Other Water Source",
				self.other_water_source.as_deref().unwrap_or_default(),
			);
		}

		// A subset can never outnumber its total
		for (key, part, total) in [
			("boreholesFunctional", self.boreholes_functional, self.boreholes_count),
			("boreholesCleanSurroundings", self.boreholes_clean_surroundings, self.boreholes_count),
			("boreholesFenced", self.boreholes_fenced, self.boreholes_count),
			("boreholesCommittees", self.boreholes_committees, self.boreholes_count),
			("wellsFunctional", self.wells_functional, self.wells_count),
			("wellsClean", self.wells_clean, self.wells_count),
		] {
			if let (Some(part), Some(total)) = (part, total) {
				errors.check(key, MaxValueValidator::new(total).validate(&part));
			}
		}

		for (i, household) in self.households.iter().enumerate() {
			errors.require(format!("household_{}_headName", i), "Household Head", &household.head_name);
			check_choices(
				errors,
				format!("household_{}_observedDiseases", i),
				"Disease",
				DISEASES,
				&household.observed_diseases,
			);
			if household.observed_diseases.iter().any(|d| d == OTHER) {
				errors.require(
					format!("household_{}_otherDiseaseSpec", i),
					"Other Disease",
					household.other_disease_spec.as_deref().unwrap_or_default(),
				);
			}
		}

		for (i, plan) in self.action_plans.iter().enumerate() {
			errors.require(format!("action_{}_issue", i), "Issue Identified", &plan.issue_identified);
			errors.require(format!("action_{}_action", i), "Action Required", &plan.action_required);
		}
	}
}

/// Household and action plan editing for village inspections.
impl FormController<VillageInspection> {
	pub fn add_household(&mut self) -> FormResult<String> {
		self.add_item(|inspection| &mut inspection.households)
	}

	pub fn remove_household(&mut self, id: &str) -> FormResult<HouseholdRecord> {
		self.remove_item(|inspection| &mut inspection.households, id)
	}

	pub fn update_household(&mut self, id: &str, f: impl FnOnce(&mut HouseholdRecord)) -> FormResult<()> {
		self.update_item(|inspection| &mut inspection.households, id, f)
	}

	/// Sets whether a household shows a disease. Unobserving a disease drops
	/// its case count.
	pub fn set_disease_observed(&mut self, household_id: &str, disease: &str, observed: bool) -> FormResult<()> {
		if !DISEASES.contains(&disease) {
			return Err(FormError::InvalidField {
				path: "observedDiseases".to_string(),
				message: format!("'{}' is not a listed disease", disease),
			});
		}
		self.update_household(household_id, |household| {
			let listed = household.observed_diseases.iter().position(|d| d == disease);
			match (listed, observed) {
				(None, true) => household.observed_diseases.push(disease.to_string()),
				(Some(index), false) => {
					household.observed_diseases.remove(index);
				}
				_ => {}
			}
		})
	}

	/// Records the number of cases of an observed disease.
	pub fn set_disease_cases(&mut self, household_id: &str, disease: &str, cases: u32) -> FormResult<()> {
		self.update_item(|inspection| &mut inspection.households, household_id, |household| {
			if !household.observed_diseases.iter().any(|d| d == disease) {
				return Err(FormError::InvalidField {
					path: format!("diseaseCases.{}", disease),
					message: format!("'{}' has not been observed", disease),
				});
			}
			household.disease_cases.insert(disease.to_string(), cases);
			Ok(())
		})?
	}

	pub fn add_action_plan(&mut self) -> FormResult<String> {
		self.add_item(|inspection| &mut inspection.action_plans)
	}

	pub fn remove_action_plan(&mut self, id: &str) -> FormResult<ActionPlan> {
		self.remove_item(|inspection| &mut inspection.action_plans, id)
	}

	pub fn update_action_plan(&mut self, id: &str, f: impl FnOnce(&mut ActionPlan)) -> FormResult<()> {
		self.update_item(|inspection| &mut inspection.action_plans, id, f)
	}
}
