//! Health post and Health Centre Management Committee audits.

use serde::{Deserialize, Serialize};

use crate::choices::YesNo;
use crate::record::impl_record;
use crate::{Coordinates, EntityKind};

/// `has_electricity` gates `electricity_types`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthPost {
	pub id: String,
	pub district: String,
	pub name: String,
	pub village: String,
	pub gvh: String,
	pub ta: String,
	pub facility: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub catchment_population: Option<u32>,
	pub year_constructed: String,
	pub coords: Option<Coordinates>,
	pub is_functional: YesNo,
	pub staff_available: Vec<String>,
	pub has_water: YesNo,
	pub has_electricity: YesNo,
	pub electricity_types: Vec<String>,
	pub remarks: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub submitted_at: Option<String>,
}

impl_record!(HealthPost, EntityKind::HealthPost, coords);

/// While `is_formed` is `No` the committee cannot be oriented or functional,
/// so the three dependent toggles are held at `No`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hcmc {
	pub id: String,
	pub district: String,
	pub hcmc_name: String,
	pub village: String,
	pub gvh: String,
	pub ta: String,
	pub facility: String,
	pub is_formed: YesNo,
	pub is_oriented_roles: YesNo,
	#[serde(rename = "isOrientedDFF")]
	pub is_oriented_dff: YesNo,
	pub is_functional: YesNo,
	pub remarks: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub submitted_at: Option<String>,
}

impl_record!(Hcmc, EntityKind::Hcmc);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_health_post_coords_serialize_as_null() {
		let json = serde_json::to_value(HealthPost::default()).unwrap();
		assert!(json["coords"].is_null());
		assert_eq!(json["electricityTypes"], serde_json::json!([]));
	}

	#[test]
	fn test_hcmc_dff_key() {
		let json = serde_json::to_value(Hcmc::default()).unwrap();
		assert_eq!(json["isOrientedDFF"], "No");
	}
}
