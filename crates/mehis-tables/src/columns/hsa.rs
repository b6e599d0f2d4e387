use mehis_models::{HsaRegistration, SupplyItem, SupplyKind, YesNo};

use super::{ColumnSet, TableRecord};
use crate::column::{BoxedColumn, list, optional, optional_text, text, with_other};
use crate::filter::Filterable;

/// `"Yes (2021)"`, `"Yes"` when the year is unknown, or `"No"`.
fn supply(item: &SupplyItem) -> String {
	match (item.received, item.year.as_deref().map(str::trim)) {
		(YesNo::Yes, Some(year)) if !year.is_empty() => format!("Yes ({})", year),
		(received, _) => received.to_string(),
	}
}

impl TableRecord for HsaRegistration {
	fn columns() -> Vec<BoxedColumn<Self>> {
		let mut set = ColumnSet::<Self>::new()
			.add("district", "District", |r| text(&r.district))
			.add("hsaName", "HSA Name", |r| text(&r.hsa_name))
			.add("sex", "Sex", |r| optional(r.sex))
			.add("position", "Position", |r| optional(r.position))
			.add("grade", "Grade", |r| optional(r.grade))
			.add("filledCatchment", "Filled Catchment", |r| r.filled_catchment.to_string())
			.add("qualification", "Qualification", |r| optional(r.qualification))
			.add("yearAppointed", "Year Appointed", |r| text(&r.year_appointed))
			.add("dob", "Date of Birth", |r| text(&r.dob))
			.add("employmentNumber", "Employment Number", |r| text(&r.employment_number))
			.add("nationalId", "National ID", |r| text(&r.national_id))
			.add("contact", "Contact", |r| text(&r.contact))
			.add("salarySupport", "Salary Support", |r| optional(r.salary_support))
			.add("recruitedBy", "Recruited By", |r| {
				with_other(&r.recruited_by, r.recruited_by_other.as_deref())
			})
			.add("homeDistrict", "Home District", |r| text(&r.home_district))
			.add("homeTA", "Home TA", |r| text(&r.home_ta))
			.add("homeGVH", "Home GVH", |r| text(&r.home_gvh))
			.add("homeVillage", "Home Village", |r| text(&r.home_village))
			.add("postalAddress", "Postal Address", |r| optional_text(r.postal_address.as_deref()))
			.add("trainedICHIS", "Trained on iCHIS", |r| r.trained_ichis.to_string())
			.add("preserviceShort", "Pre-service (Short)", |r| r.preservice_short.to_string())
			.add("preserviceLong", "Pre-service (Long)", |r| r.preservice_long.to_string())
			.add("mscePasses", "MSCE Passes", |r| r.msce_passes.to_string())
			.add("reportingFacility", "Reporting Facility", |r| text(&r.reporting_facility))
			.add("facilityType", "Facility Type", |r| {
				with_other(&r.facility_type, r.facility_type_other.as_deref())
			})
			.add("healthPostName", "Health Post", |r| optional_text(r.health_post_name.as_deref()))
			.add("catchmentArea", "Catchment Area", |r| text(&r.catchment_area))
			.add("catchmentPopulation", "Catchment Population", |r| optional(r.catchment_population))
			.add("villages", "Villages", |r| {
				let names: Vec<&str> = r.villages.iter().map(|v| v.name.as_str()).collect();
				list(&names)
			})
			.add("gvhNames", "GVH Names", |r| list(&r.gvh_names))
			.add("latitude", "Latitude", |r| optional(r.coords.map(|c| c.lat)))
			.add("longitude", "Longitude", |r| optional(r.coords.map(|c| c.lng)))
			.add("distanceToFacility", "Distance to Facility (km)", |r| optional(r.distance_to_facility))
			.add("distanceToCouncil", "Distance to Council (km)", |r| optional(r.distance_to_council))
			.add("numVHCs", "VHCs", |r| optional(r.num_vhcs))
			.add("numTrainedVHCs", "Trained VHCs", |r| optional(r.num_trained_vhcs))
			.add("villageClinic", "Village Clinic", |r| r.village_clinic.to_string())
			.add("villageClinicFunctional", "Village Clinic Functional", |r| {
				r.village_clinic_functional.to_string()
			})
			.add("hardToReach", "Hard to Reach", |r| r.hard_to_reach.to_string())
			.add("residentInCatchment", "Resident in Catchment", |r| r.resident_in_catchment.to_string())
			.add("govPhone", "Government Phone", |r| r.gov_phone.to_string())
			.add("phoneType", "Phone Type", |r| optional(r.phone_type))
			.add("phoneFunctional", "Phone Functional", |r| optional(r.phone_functional))
			.add("yearReceivedPhone", "Year Received Phone", |r| {
				optional_text(r.year_received_phone.as_deref())
			})
			.add("solarCharger", "Solar Charger", |r| r.solar_charger.to_string());

		for kind in SupplyKind::ALL.iter().copied() {
			set = set.add(kind.as_str(), kind.title(), move |r| supply(r.supplies.get(kind)));
		}

		set.add("thematicTrainings", "Thematic Trainings", |r| {
			let trained: Vec<&str> = r
				.thematic_trainings
				.iter()
				.filter(|(_, answer)| answer.is_yes())
				.map(|(topic, _)| topic.as_str())
				.collect();
			list(&trained)
		})
		.build()
	}
}

impl Filterable for HsaRegistration {
	fn search_fields(&self) -> Vec<&str> {
		let mut fields = vec![
			self.hsa_name.as_str(),
			self.employment_number.as_str(),
			self.national_id.as_str(),
			self.contact.as_str(),
			self.catchment_area.as_str(),
		];
		fields.extend(self.health_post_name.as_deref());
		fields.extend(self.villages.iter().map(|v| v.name.as_str()));
		fields
	}

	fn district(&self) -> Option<&str> {
		Some(&self.district)
	}

	fn facility(&self) -> Option<&str> {
		Some(&self.reporting_facility)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::table::{SimpleTable, Table};
	use rstest::rstest;

	#[rstest]
	#[case(SupplyItem::received("2021"), "Yes (2021)")]
	#[case(SupplyItem { received: YesNo::Yes, year: None }, "Yes")]
	#[case(SupplyItem::default(), "No")]
	fn test_supply_cell(#[case] item: SupplyItem, #[case] expected: &str) {
		assert_eq!(supply(&item), expected);
	}

	#[test]
	fn test_row_flattens_nested_values() {
		let mut hsa = HsaRegistration {
			hsa_name: "Chikondi Banda".to_string(),
			recruited_by: "Other".to_string(),
			recruited_by_other: Some("World Vision".to_string()),
			gvh_names: vec!["Mtema".to_string(), "Kalumbu".to_string()],
			..Default::default()
		};
		hsa.supplies.bicycle = SupplyItem::received("2021");
		hsa.thematic_trainings.insert("Malaria".to_string(), YesNo::Yes);
		hsa.thematic_trainings.insert("Nutrition".to_string(), YesNo::No);

		let table = SimpleTable::for_records(vec![hsa]);
		let header = table.header();
		let row = &table.render_rows()[0];
		let cell = |h: &str| row[header.iter().position(|c| *c == h).unwrap()].as_str();

		assert_eq!(cell("HSA Name"), "Chikondi Banda");
		assert_eq!(cell("Recruited By"), "Other (World Vision)");
		assert_eq!(cell("GVH Names"), "Mtema; Kalumbu");
		assert_eq!(cell("Bicycle"), "Yes (2021)");
		assert_eq!(cell("Torch"), "No");
		assert_eq!(cell("Thematic Trainings"), "Malaria");
		assert_eq!(cell("Health Post"), "N/A");
		assert_eq!(cell("Latitude"), "N/A");
		assert_eq!(row.len(), header.len());
	}
}
