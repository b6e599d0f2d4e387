use mehis_models::{SanitationAssessment, WaterPoint, WaterQualitySample};

use super::{ColumnSet, TableRecord};
use crate::column::{BoxedColumn, MISSING, optional, optional_text, text};
use crate::filter::Filterable;

impl TableRecord for WaterPoint {
	fn columns() -> Vec<BoxedColumn<Self>> {
		ColumnSet::<Self>::new()
			.add("name", "Name", |r| text(&r.name))
			.add("type", "Type", |r| text(&r.point_type))
			.add("district", "District", |r| text(&r.district))
			.add("facility", "Facility", |r| text(&r.facility))
			.add("ta", "TA", |r| text(&r.ta))
			.add("village", "Village", |r| text(&r.village))
			.add("latitude", "Latitude", |r| optional(r.coords.map(|c| c.lat)))
			.add("longitude", "Longitude", |r| optional(r.coords.map(|c| c.lng)))
			.add("functionality", "Functionality", |r| r.functionality.to_string())
			.add("repairState", "Repair State", |r| r.repair_state.to_string())
			.add("mechanicContacted", "Mechanic Contacted", |r| {
				if r.mechanic_contacted { "Yes" } else { "No" }.to_string()
			})
			.add("lastInspectionDate", "Last Inspection", |r| text(&r.last_inspection_date))
			.build()
	}
}

impl Filterable for WaterPoint {
	fn search_fields(&self) -> Vec<&str> {
		vec![&self.name, &self.point_type, &self.village, &self.ta]
			.into_iter()
			.map(String::as_str)
			.collect()
	}

	fn district(&self) -> Option<&str> {
		Some(&self.district)
	}

	fn facility(&self) -> Option<&str> {
		Some(&self.facility)
	}

	fn status(&self) -> Option<&str> {
		Some(self.functionality.as_str())
	}
}

impl TableRecord for WaterQualitySample {
	fn columns() -> Vec<BoxedColumn<Self>> {
		ColumnSet::<Self>::new()
			.add("sampleId", "Sample ID", |r| text(&r.sample_id))
			.add("waterPointId", "Water Point ID", |r| text(&r.water_point_id))
			.add("waterPointName", "Water Point", |r| text(&r.water_point_name))
			.add("collectionDate", "Collection Date", |r| text(&r.collection_date))
			.add("collectionTime", "Collection Time", |r| text(&r.collection_time))
			.add("h2sTestDone", "H2S Test Done", |r| r.h2s_test_done.to_string())
			.add("h2sIncubationStartTime", "H2S Incubation Start", |r| {
				optional_text(r.h2s_incubation_start_time.as_deref())
			})
			.add("h2sIncubationEndTime", "H2S Incubation End", |r| {
				optional_text(r.h2s_incubation_end_time.as_deref())
			})
			.add("h2sResult", "H2S Result", |r| optional(r.h2s_result))
			.add("dpdTestDone", "DPD Test Done", |r| r.dpd_test_done.to_string())
			.add("dpdResult", "Free Chlorine (mg/L)", |r| optional(r.dpd_result))
			.add("actionTaken", "Action Taken", |r| text(&r.action_taken))
			.build()
	}
}

impl Filterable for WaterQualitySample {
	fn search_fields(&self) -> Vec<&str> {
		vec![
			self.sample_id.as_str(),
			self.water_point_id.as_str(),
			self.water_point_name.as_str(),
		]
	}

	/// The H2S result, or [`MISSING`] for untested samples.
	fn status(&self) -> Option<&str> {
		Some(self.h2s_result.map_or(MISSING, |result| result.as_str()))
	}
}

impl TableRecord for SanitationAssessment {
	fn columns() -> Vec<BoxedColumn<Self>> {
		ColumnSet::<Self>::new()
			.add("date", "Date", |r| text(&r.date))
			.add("householdHead", "Household Head", |r| text(&r.household_head))
			.add("village", "Village", |r| text(&r.village))
			.add("hasToilet", "Has Toilet", |r| r.has_toilet.to_string())
			.add("toiletType", "Toilet Type", |r| optional_text(r.toilet_type.as_deref()))
			.add("toiletCondition", "Toilet Condition", |r| optional(r.toilet_condition))
			.add("isShared", "Shared Toilet", |r| optional(r.is_shared))
			.add("mainWaterSource", "Main Water Source", |r| text(&r.main_water_source))
			.add("waterStorage", "Water Storage", |r| text(&r.water_storage))
			.add("waterTreatment", "Water Treatment", |r| text(&r.water_treatment))
			.add("handwashAvailable", "Handwashing Facility", |r| r.handwash_available.to_string())
			.add("soapAvailable", "Soap Available", |r| r.soap_available.to_string())
			.add("compoundClean", "Compound Clean", |r| r.compound_clean.to_string())
			.add("wasteManagement", "Waste Management", |r| r.waste_management.to_string())
			.build()
	}
}

impl Filterable for SanitationAssessment {
	fn search_fields(&self) -> Vec<&str> {
		vec![self.household_head.as_str(), self.village.as_str()]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::filter::FilterSpec;
	use crate::table::{SimpleTable, Table};
	use mehis_models::{Functionality, H2sResult, ToiletCondition, YesNo};

	#[test]
	fn test_water_point_status_is_functionality() {
		let points = vec![
			WaterPoint {
				functionality: Functionality::NonFunctional,
				..Default::default()
			},
			WaterPoint::default(),
		];
		let broken = FilterSpec::new().status("Non-Functional").apply(&points);
		assert_eq!(broken.len(), 1);
		assert_eq!(broken[0].functionality, Functionality::NonFunctional);
	}

	#[test]
	fn test_untested_samples_have_their_own_status() {
		let samples = vec![
			WaterQualitySample {
				h2s_result: Some(H2sResult::Positive),
				..Default::default()
			},
			WaterQualitySample::default(),
		];
		assert_eq!(FilterSpec::new().status("Positive").apply(&samples).len(), 1);
		assert_eq!(FilterSpec::new().status(MISSING).apply(&samples).len(), 1);
		assert_eq!(FilterSpec::new().district("Dedza").apply(&samples).len(), 2);
	}

	#[test]
	fn test_sanitation_row() {
		let assessment = SanitationAssessment {
			household_head: "Esnart Mwale".to_string(),
			has_toilet: YesNo::Yes,
			toilet_type: Some("Flush Toilet".to_string()),
			toilet_condition: Some(ToiletCondition::NeedsRepair),
			..Default::default()
		};
		let table = SimpleTable::for_records(vec![assessment]);
		let row = &table.render_rows()[0];
		assert_eq!(table.header()[5], "Toilet Type");
		assert_eq!(row[5], "Flush Toilet");
		assert_eq!(row[6], "Needs Repair");
		assert_eq!(row[7], "N/A");
	}
}
