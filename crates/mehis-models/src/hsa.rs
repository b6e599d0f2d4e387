//! HSA personnel registration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::choices::{
	Grade, PhoneType, Position, Qualification, SalarySupport, Sex, SupplyKind, YesNo,
};
use crate::record::impl_record;
use crate::{Coordinates, EntityKind};

/// One catchment village served by the HSA.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VillageData {
	pub id: String,
	pub name: String,
	pub population: u32,
	pub is_gazette: bool,
}

/// Whether a supply was received, and in which year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplyItem {
	pub received: YesNo,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub year: Option<String>,
}

impl SupplyItem {
	pub fn received(year: impl Into<String>) -> Self {
		Self {
			received: YesNo::Yes,
			year: Some(year.into()),
		}
	}
}

/// The fixed supplies mapping. Every kind is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplies {
	pub bicycle: SupplyItem,
	pub motorcycle: SupplyItem,
	pub uniforms: SupplyItem,
	pub gumboots: SupplyItem,
	pub raincoat: SupplyItem,
	pub umbrella: SupplyItem,
	pub drug_boxes: SupplyItem,
	pub torch: SupplyItem,
}

impl Supplies {
	pub fn get(&self, kind: SupplyKind) -> &SupplyItem {
		match kind {
			SupplyKind::Bicycle => &self.bicycle,
			SupplyKind::Motorcycle => &self.motorcycle,
			SupplyKind::Uniforms => &self.uniforms,
			SupplyKind::Gumboots => &self.gumboots,
			SupplyKind::Raincoat => &self.raincoat,
			SupplyKind::Umbrella => &self.umbrella,
			SupplyKind::DrugBoxes => &self.drug_boxes,
			SupplyKind::Torch => &self.torch,
		}
	}

	pub fn get_mut(&mut self, kind: SupplyKind) -> &mut SupplyItem {
		match kind {
			SupplyKind::Bicycle => &mut self.bicycle,
			SupplyKind::Motorcycle => &mut self.motorcycle,
			SupplyKind::Uniforms => &mut self.uniforms,
			SupplyKind::Gumboots => &mut self.gumboots,
			SupplyKind::Raincoat => &mut self.raincoat,
			SupplyKind::Umbrella => &mut self.umbrella,
			SupplyKind::DrugBoxes => &mut self.drug_boxes,
			SupplyKind::Torch => &mut self.torch,
		}
	}

	/// Every supply with its kind, in catalog order.
	pub fn iter(&self) -> impl Iterator<Item = (SupplyKind, &SupplyItem)> {
		SupplyKind::ALL.iter().map(move |kind| (*kind, self.get(*kind)))
	}
}

/// An HSA registration record.
///
/// Gated fields are `Option`s and are `None` whenever their gate is off:
///
/// | Gate | Dependents |
/// |---|---|
/// | `recruited_by == "Other"` | `recruited_by_other` |
/// | `facility_type == "Other"` | `facility_type_other` |
/// | `health_post_available` | `health_post_name` |
/// | `gov_phone` | `phone_type`, `phone_functional`, `year_received_phone` |
/// | `supplies.<kind>.received` | `supplies.<kind>.year` |
///
/// `village_clinic_functional` is forced to `No` while `village_clinic` is `No`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HsaRegistration {
	pub id: String,

	// Identification
	pub district: String,
	pub hsa_name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sex: Option<Sex>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub position: Option<Position>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub grade: Option<Grade>,
	pub filled_catchment: YesNo,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub qualification: Option<Qualification>,
	pub year_appointed: String,
	pub dob: String,
	pub employment_number: String,
	pub national_id: String,
	pub contact: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub salary_support: Option<SalarySupport>,
	pub recruited_by: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recruited_by_other: Option<String>,
	pub home_district: String,
	#[serde(rename = "homeTA")]
	pub home_ta: String,
	#[serde(rename = "homeGVH")]
	pub home_gvh: String,
	pub home_village: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub postal_address: Option<String>,

	// Training status
	#[serde(rename = "trainedICHIS")]
	pub trained_ichis: YesNo,
	pub preservice_short: YesNo,
	pub preservice_long: YesNo,
	pub msce_passes: YesNo,

	// Location
	pub reporting_facility: String,
	pub facility_type: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub facility_type_other: Option<String>,
	pub health_post_available: YesNo,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub health_post_name: Option<String>,
	pub catchment_area: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub catchment_population: Option<u32>,
	pub gvh_names: Vec<String>,
	pub villages: Vec<VillageData>,

	// Geography
	#[serde(skip_serializing_if = "Option::is_none")]
	pub coords: Option<Coordinates>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub distance_to_facility: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub distance_to_council: Option<f64>,
	#[serde(rename = "numVHCs", skip_serializing_if = "Option::is_none")]
	pub num_vhcs: Option<u32>,
	#[serde(rename = "numTrainedVHCs", skip_serializing_if = "Option::is_none")]
	pub num_trained_vhcs: Option<u32>,
	pub village_clinic: YesNo,
	pub village_clinic_functional: YesNo,
	pub hard_to_reach: YesNo,
	pub resident_in_catchment: YesNo,

	// Gadgets
	pub gov_phone: YesNo,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phone_type: Option<PhoneType>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phone_functional: Option<YesNo>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub year_received_phone: Option<String>,
	pub solar_charger: YesNo,

	pub supplies: Supplies,

	/// Training topic name to whether the HSA was trained on it.
	pub thematic_trainings: BTreeMap<String, YesNo>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub submitted_at: Option<String>,
}

impl_record!(HsaRegistration, EntityKind::HsaRegistration, coords);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Record;

	#[test]
	fn test_wire_names_follow_stored_layout() {
		let record = HsaRegistration {
			home_ta: "Kalumbu".to_string(),
			trained_ichis: YesNo::Yes,
			num_vhcs: Some(3),
			..Default::default()
		};
		let json = serde_json::to_value(&record).unwrap();
		assert_eq!(json["homeTA"], "Kalumbu");
		assert_eq!(json["trainedICHIS"], "Yes");
		assert_eq!(json["numVHCs"], 3);
		assert_eq!(json["supplies"]["drugBoxes"]["received"], "No");
		assert!(json.get("healthPostName").is_none());
	}

	#[test]
	fn test_partial_document_decodes_with_defaults() {
		let record: HsaRegistration =
			serde_json::from_str(r#"{"id":"7","hsaName":"Chikondi Banda","gvhNames":["Mtema"]}"#)
				.unwrap();
		assert_eq!(record.id, "7");
		assert_eq!(record.gvh_names, vec!["Mtema".to_string()]);
		assert_eq!(record.supplies.torch.received, YesNo::No);
		assert_eq!(HsaRegistration::KIND.storage_key(), "hsaData");
	}

	#[test]
	fn test_supplies_iterate_in_catalog_order() {
		let mut supplies = Supplies::default();
		*supplies.get_mut(SupplyKind::Motorcycle) = SupplyItem::received("2021");
		let kinds: Vec<_> = supplies.iter().map(|(kind, _)| kind).collect();
		assert_eq!(kinds, SupplyKind::ALL.to_vec());
		assert_eq!(supplies.motorcycle.year.as_deref(), Some("2021"));
	}
}
