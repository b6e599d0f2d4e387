use mehis_models::catalogs::{DISTRICTS, FACILITY_TYPES, OTHER, RECRUITERS, TRAINING_TOPICS};
use mehis_models::{HsaRegistration, SupplyItem, SupplyKind, VillageData, YesNo};
use mehis_validators::{
	AppointmentDateValidator, DateOfBirthValidator, EmploymentNumberValidator, MaxValueValidator,
	MinValueValidator, NationalIdValidator, PhoneNumberValidator, Validator,
};

use super::{FormRecord, blank_to_none, check_choice, check_choices, require_some};
use crate::context::FormContext;
use crate::controller::FormController;
use crate::errors::{FormError, FormErrors, FormResult};

impl FormRecord for HsaRegistration {
	fn cascade(&mut self, _ctx: &FormContext) {
		if self.recruited_by != OTHER {
			self.recruited_by_other = None;
		}
		if self.facility_type != OTHER {
			self.facility_type_other = None;
		}
		if !self.health_post_available.is_yes() {
			self.health_post_name = None;
		}
		if !self.gov_phone.is_yes() {
			self.phone_type = None;
			self.phone_functional = None;
			self.year_received_phone = None;
		}
		if !self.village_clinic.is_yes() {
			self.village_clinic_functional = YesNo::No;
		}
		for kind in SupplyKind::ALL {
			let item = self.supplies.get_mut(*kind);
			if !item.received.is_yes() {
				item.year = None;
			}
			blank_to_none(&mut item.year);
		}
	}

	fn clean(&self, ctx: &FormContext, errors: &mut FormErrors) {
		let today = ctx.today();

		// Identification
		errors.require("hsaName", "Full Name", &self.hsa_name);
		errors.require("district", "District", &self.district);
		check_choice(errors, "district", "District", DISTRICTS, &self.district);
		require_some(errors, "sex", "Sex", &self.sex);
		errors.check(
			"employmentNumber",
			EmploymentNumberValidator::new().validate(self.employment_number.as_str()),
		);
		errors.check("nationalId", NationalIdValidator::new().validate(self.national_id.as_str()));
		errors.check("contact", PhoneNumberValidator::new().validate(self.contact.as_str()));
		errors.check(
			"dob",
			DateOfBirthValidator::new().with_today(today).validate(self.dob.as_str()),
		);
		errors.check(
			"yearAppointed",
			AppointmentDateValidator::new(self.dob.as_str())
				.with_today(today)
				.validate(self.year_appointed.as_str()),
		);
		check_choice(errors, "recruitedBy", "Recruited By", RECRUITERS, &self.recruited_by);
		if self.recruited_by == OTHER {
			errors.require(
				"recruitedByOther",
				"Recruiter",
				self.recruited_by_other.as_deref().unwrap_or_default(),
			);
		}

		// Training and location
		let topics: Vec<String> = self.thematic_trainings.keys().cloned().collect();
		check_choices(errors, "thematicTrainings", "Training Topic", TRAINING_TOPICS, &topics);
		check_choice(errors, "facilityType", "Facility Type", FACILITY_TYPES, &self.facility_type);
		if self.facility_type == OTHER {
			errors.require(
				"facilityTypeOther",
				"Facility Type",
				self.facility_type_other.as_deref().unwrap_or_default(),
			);
		}
		if self.health_post_available.is_yes() {
			errors.require(
				"healthPostName",
				"Health Post Name",
				self.health_post_name.as_deref().unwrap_or_default(),
			);
		}
		for (i, village) in self.villages.iter().enumerate() {
			errors.require(format!("village_{}_name", i), "Village Name", &village.name);
		}
		for (i, name) in self.gvh_names.iter().enumerate() {
			errors.require(format!("gvh_{}", i), "GVH Name", name);
		}

		// Geography
		for (key, distance) in [
			("distanceToFacility", self.distance_to_facility),
			("distanceToCouncil", self.distance_to_council),
		] {
			if let Some(distance) = distance {
				errors.check(key, MinValueValidator::new(0.0).validate(&distance));
			}
		}
		if let (Some(total), Some(trained)) = (self.num_vhcs, self.num_trained_vhcs) {
			errors.check("numTrainedVHCs", MaxValueValidator::new(total).validate(&trained));
		}

		// Gadgets and supplies
		if self.gov_phone.is_yes() {
			require_some(errors, "phoneType", "Phone Type", &self.phone_type);
		}
		for (kind, item) in self.supplies.iter() {
			if item.received.is_yes() {
				errors.require(
					format!("supplies_{}_year", kind),
					"Year Received",
					item.year.as_deref().unwrap_or_default(),
				);
			}
		}
	}
}

/// Catchment and supply editing for HSA registrations.
impl FormController<HsaRegistration> {
	pub fn add_village(&mut self) -> FormResult<String> {
		self.add_item(|hsa| &mut hsa.villages)
	}

	pub fn remove_village(&mut self, id: &str) -> FormResult<VillageData> {
		self.remove_item(|hsa| &mut hsa.villages, id)
	}

	pub fn update_village(&mut self, id: &str, f: impl FnOnce(&mut VillageData)) -> FormResult<()> {
		self.update_item(|hsa| &mut hsa.villages, id, f)
	}

	/// Appends an empty GVH name and returns its index.
	pub fn add_gvh_name(&mut self) -> FormResult<usize> {
		self.update(|hsa| {
			hsa.gvh_names.push(String::new());
			hsa.gvh_names.len() - 1
		})
	}

	pub fn set_gvh_name(&mut self, index: usize, name: impl Into<String>) -> FormResult<()> {
		let name = name.into();
		self.update(|hsa| match hsa.gvh_names.get_mut(index) {
			Some(slot) => {
				*slot = name;
				Ok(())
			}
			None => Err(FormError::IndexOutOfRange {
				index,
				len: hsa.gvh_names.len(),
			}),
		})?
	}

	pub fn remove_gvh_name(&mut self, index: usize) -> FormResult<String> {
		self.update(|hsa| {
			if index < hsa.gvh_names.len() {
				Ok(hsa.gvh_names.remove(index))
			} else {
				Err(FormError::IndexOutOfRange {
					index,
					len: hsa.gvh_names.len(),
				})
			}
		})?
	}

	/// Records whether a supply was received and when. The year is dropped
	/// when the supply was not received.
	pub fn set_supply(
		&mut self,
		kind: SupplyKind,
		received: YesNo,
		year: Option<String>,
	) -> FormResult<()> {
		self.update(|hsa| *hsa.supplies.get_mut(kind) = SupplyItem { received, year })
	}

	/// Marks a training topic from the catalog as done or not done.
	pub fn set_training(&mut self, topic: &str, trained: YesNo) -> FormResult<()> {
		if !TRAINING_TOPICS.contains(&topic) {
			return Err(FormError::InvalidField {
				path: format!("thematicTrainings.{}", topic),
				message: format!("'{}' is not a training topic", topic),
			});
		}
		self.update(|hsa| {
			hsa.thematic_trainings.insert(topic.to_string(), trained);
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{TimeZone, Utc};
	use mehis_models::{Qualification, Sex};
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn form() -> FormController<HsaRegistration> {
		let ctx = FormContext::new().at(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
		FormController::new(ctx)
	}

	fn fill_identification(form: &mut FormController<HsaRegistration>) {
		form.update(|hsa| {
			hsa.hsa_name = "Chikondi Banda".to_string();
			hsa.district = "Zomba".to_string();
			hsa.sex = Some(Sex::Female);
			hsa.qualification = Some(Qualification::Msce);
		})
		.unwrap();
	}

	#[rstest]
	fn test_gov_phone_gates_gadget_fields(mut form: FormController<HsaRegistration>) {
		form.set_field("govPhone", json!("Yes")).unwrap();
		form.set_field("phoneType", json!("Tablet")).unwrap();
		form.set_field("yearReceivedPhone", json!("2022")).unwrap();
		form.set_field("govPhone", json!("No")).unwrap();

		let draft = form.draft().unwrap();
		assert_eq!(draft.phone_type, None);
		assert_eq!(draft.year_received_phone, None);
	}

	#[rstest]
	fn test_village_clinic_off_forces_not_functional(mut form: FormController<HsaRegistration>) {
		form.set_field("villageClinic", json!("Yes")).unwrap();
		form.set_field("villageClinicFunctional", json!("Yes")).unwrap();
		form.set_field("villageClinic", json!("No")).unwrap();
		assert_eq!(form.draft().unwrap().village_clinic_functional, YesNo::No);
	}

	#[rstest]
	fn test_supply_year_needs_receipt(mut form: FormController<HsaRegistration>) {
		form.set_field("supplies.bicycle", json!({"received": "No", "year": "2021"}))
			.unwrap();
		assert_eq!(form.draft().unwrap().supplies.bicycle.year, None);

		form.set_supply(SupplyKind::Torch, YesNo::Yes, Some("2020".to_string()))
			.unwrap();
		assert_eq!(form.draft().unwrap().supplies.torch, SupplyItem::received("2020"));
	}

	#[rstest]
	fn test_gvh_names_by_index(mut form: FormController<HsaRegistration>) {
		let first = form.add_gvh_name().unwrap();
		let second = form.add_gvh_name().unwrap();
		form.set_gvh_name(first, "Mtema").unwrap();
		form.set_gvh_name(second, "Chiwalo").unwrap();
		assert_eq!(form.remove_gvh_name(first).unwrap(), "Mtema");
		assert_eq!(form.draft().unwrap().gvh_names, vec!["Chiwalo".to_string()]);

		let err = form.set_gvh_name(4, "Nowhere").unwrap_err();
		assert!(matches!(err, FormError::IndexOutOfRange { index: 4, len: 1 }));
	}

	#[rstest]
	fn test_unknown_training_topic_rejected(mut form: FormController<HsaRegistration>) {
		form.set_training("WASH", YesNo::Yes).unwrap();
		assert!(form.set_training("Juggling", YesNo::Yes).is_err());
		assert_eq!(form.draft().unwrap().thematic_trainings.len(), 1);
	}

	#[rstest]
	fn test_gated_rules_only_when_gate_on(mut form: FormController<HsaRegistration>) {
		fill_identification(&mut form);
		assert!(form.validate(), "{}", form.errors());

		form.set_field("healthPostAvailable", json!("Yes")).unwrap();
		form.set_field("recruitedBy", json!("Other")).unwrap();
		assert!(!form.validate());
		assert_eq!(form.errors().get("healthPostName"), Some("Health Post Name is required"));
		assert_eq!(form.errors().get("recruitedByOther"), Some("Recruiter is required"));
	}

	#[rstest]
	fn test_identification_rules(mut form: FormController<HsaRegistration>) {
		fill_identification(&mut form);
		form.update(|hsa| {
			hsa.contact = "0991234567".to_string();
			hsa.national_id = "ab12".to_string();
			hsa.dob = "2010-01-01".to_string();
			hsa.num_vhcs = Some(2);
			hsa.num_trained_vhcs = Some(5);
		})
		.unwrap();
		assert!(!form.validate());
		let errors = form.errors();
		assert!(errors.contains("contact"));
		assert!(errors.contains("nationalId"));
		assert_eq!(errors.get("dob"), Some("HSA must be at least 16 years old"));
		assert!(errors.contains("numTrainedVHCs"));
	}
}
