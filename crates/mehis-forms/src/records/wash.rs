use mehis_models::catalogs::{
	DISTRICTS, TOILET_TYPES, WATER_POINT_TYPES, WATER_TREATMENT_METHODS,
};
use mehis_models::{SanitationAssessment, WaterPoint, WaterQualitySample};
use mehis_validators::{MinValueValidator, Validator};

use super::{FormRecord, blank_to_none, check_choice, check_date, require_some};
use crate::context::FormContext;
use crate::errors::FormErrors;

impl FormRecord for WaterPoint {
	fn cascade(&mut self, _ctx: &FormContext) {}

	fn clean(&self, _ctx: &FormContext, errors: &mut FormErrors) {
		errors.require("name", "Water Point Name", &self.name);
		errors.require("type", "Water Point Type", &self.point_type);
		check_choice(errors, "type", "Water Point Type", WATER_POINT_TYPES, &self.point_type);
		errors.require("district", "District", &self.district);
		check_choice(errors, "district", "District", DISTRICTS, &self.district);
		errors.require("village", "Village", &self.village);
		check_date(errors, "lastInspectionDate", &self.last_inspection_date);
	}
}

impl FormRecord for WaterQualitySample {
	fn cascade(&mut self, _ctx: &FormContext) {
		if !self.h2s_test_done.is_yes() {
			self.h2s_incubation_start_time = None;
			self.h2s_incubation_end_time = None;
			self.h2s_result = None;
		}
		if !self.dpd_test_done.is_yes() {
			self.dpd_result = None;
		}
	}

	fn clean(&self, _ctx: &FormContext, errors: &mut FormErrors) {
		errors.require("sampleId", "Sample ID", &self.sample_id);
		errors.require("waterPointId", "Water Point", &self.water_point_id);
		errors.require("collectionDate", "Collection Date", &self.collection_date);
		check_date(errors, "collectionDate", &self.collection_date);

		if self.h2s_test_done.is_yes() {
			require_some(errors, "h2sResult", "H2S Result", &self.h2s_result);
		}
		if self.dpd_test_done.is_yes() {
			require_some(errors, "dpdResult", "Free Chlorine", &self.dpd_result);
			if let Some(reading) = self.dpd_result {
				errors.check("dpdResult", MinValueValidator::new(0.0).validate(&reading));
			}
		}
	}
}

impl FormRecord for SanitationAssessment {
	fn cascade(&mut self, _ctx: &FormContext) {
		if self.has_toilet.is_yes() {
			blank_to_none(&mut self.toilet_type);
		} else {
			self.toilet_type = None;
			self.toilet_condition = None;
			self.is_shared = None;
		}
	}

	fn clean(&self, _ctx: &FormContext, errors: &mut FormErrors) {
		errors.require("householdHead", "Household Head", &self.household_head);
		errors.require("village", "Village", &self.village);
		errors.require("mainWaterSource", "Main Water Source", &self.main_water_source);
		check_choice(
			errors,
			"mainWaterSource",
			"Main Water Source",
			WATER_POINT_TYPES,
			&self.main_water_source,
		);
		errors.require("waterStorage", "Water Storage Container", &self.water_storage);
		check_choice(
			errors,
			"waterTreatment",
			"Water Treatment Method",
			WATER_TREATMENT_METHODS,
			&self.water_treatment,
		);
		check_date(errors, "date", &self.date);

		if self.has_toilet.is_yes() {
			let toilet_type = self.toilet_type.as_deref().unwrap_or_default();
			errors.require("toiletType", "Toilet Type", toilet_type);
			check_choice(errors, "toiletType", "Toilet Type", TOILET_TYPES, toilet_type);
			require_some(errors, "toiletCondition", "Toilet Condition", &self.toilet_condition);
		}
	}
}
