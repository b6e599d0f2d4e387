use chrono::Datelike;
use mehis_models::catalogs::{DISTRICTS, ELECTRICITY_SOURCES, STAFF_CADRES};
use mehis_models::{HealthPost, Hcmc, YesNo};
use mehis_validators::{ValidationError, parse_date};

use super::{FormRecord, check_choice, check_choices};
use crate::context::FormContext;
use crate::errors::FormErrors;

impl FormRecord for HealthPost {
	fn cascade(&mut self, _ctx: &FormContext) {
		if !self.has_electricity.is_yes() {
			self.electricity_types.clear();
		}
	}

	fn clean(&self, ctx: &FormContext, errors: &mut FormErrors) {
		errors.require("name", "Health Post Name", &self.name);
		errors.require("district", "District", &self.district);
		check_choice(errors, "district", "District", DISTRICTS, &self.district);
		errors.require("facility", "Health Facility", &self.facility);
		check_choices(errors, "staffAvailable", "Staff", STAFF_CADRES, &self.staff_available);

		if !self.year_constructed.is_empty() {
			match parse_date(&self.year_constructed) {
				None => errors.add("yearConstructed", ValidationError::InvalidDate.to_string()),
				Some(built) if built.year() > ctx.today().year() => errors.add(
					"yearConstructed",
					ValidationError::Custom("Year constructed cannot be in the future".to_string())
						.to_string(),
				),
				Some(_) => {}
			}
		}

		if self.has_electricity.is_yes() {
			if self.electricity_types.is_empty() {
				errors.require("electricityTypes", "Electricity Source", "");
			}
			check_choices(
				errors,
				"electricityTypes",
				"Electricity Source",
				ELECTRICITY_SOURCES,
				&self.electricity_types,
			);
		}
	}
}

impl FormRecord for Hcmc {
	fn cascade(&mut self, _ctx: &FormContext) {
		if !self.is_formed.is_yes() {
			self.is_oriented_roles = YesNo::No;
			self.is_oriented_dff = YesNo::No;
			self.is_functional = YesNo::No;
		}
	}

	fn clean(&self, _ctx: &FormContext, errors: &mut FormErrors) {
		errors.require("hcmcName", "HCMC Name", &self.hcmc_name);
		errors.require("district", "District", &self.district);
		check_choice(errors, "district", "District", DISTRICTS, &self.district);
		errors.require("facility", "Health Facility", &self.facility);
	}
}
