//! Water, sanitation and hygiene records.

use serde::{Deserialize, Serialize};

use crate::choices::{
	Functionality, H2sResult, RepairState, ToiletCondition, WasteManagement, YesNo,
};
use crate::record::impl_record;
use crate::{Coordinates, EntityKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaterPoint {
	pub id: String,
	pub name: String,
	/// Entry of the water point type catalog
	#[serde(rename = "type")]
	pub point_type: String,
	pub district: String,
	pub facility: String,
	pub ta: String,
	pub village: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub coords: Option<Coordinates>,
	pub functionality: Functionality,
	pub repair_state: RepairState,
	pub mechanic_contacted: bool,
	pub last_inspection_date: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub submitted_at: Option<String>,
}

impl_record!(WaterPoint, EntityKind::WaterPoint, coords);

/// A water quality sample taken at a water point.
///
/// The H2S test gates the incubation window and its result; the DPD test
/// gates the free chlorine reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaterQualitySample {
	pub id: String,
	pub sample_id: String,
	pub water_point_id: String,
	pub water_point_name: String,
	pub collection_date: String,
	pub collection_time: String,
	pub h2s_test_done: YesNo,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub h2s_incubation_start_time: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub h2s_incubation_end_time: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub h2s_result: Option<H2sResult>,
	pub dpd_test_done: YesNo,
	/// Free chlorine in mg/L
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dpd_result: Option<f64>,
	pub action_taken: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub submitted_at: Option<String>,
}

impl_record!(WaterQualitySample, EntityKind::WaterQualitySample);

/// Household sanitation and hygiene assessment.
///
/// `has_toilet` gates `toilet_type`, `toilet_condition` and `is_shared`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SanitationAssessment {
	pub id: String,
	pub date: String,
	pub household_head: String,
	pub village: String,
	pub has_toilet: YesNo,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub toilet_type: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub toilet_condition: Option<ToiletCondition>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_shared: Option<YesNo>,
	pub main_water_source: String,
	pub water_storage: String,
	pub water_treatment: String,
	pub handwash_available: YesNo,
	pub soap_available: YesNo,
	pub compound_clean: YesNo,
	pub waste_management: WasteManagement,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub submitted_at: Option<String>,
}

impl_record!(SanitationAssessment, EntityKind::SanitationAssessment);
