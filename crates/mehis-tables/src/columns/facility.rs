use mehis_models::{HealthPost, Hcmc, YesNo};

use super::{ColumnSet, TableRecord};
use crate::column::{BoxedColumn, list, optional, text};
use crate::filter::Filterable;

fn functional_status(is_functional: YesNo) -> &'static str {
	if is_functional.is_yes() {
		"Functional"
	} else {
		"Non-Functional"
	}
}

impl TableRecord for HealthPost {
	fn columns() -> Vec<BoxedColumn<Self>> {
		ColumnSet::<Self>::new()
			.add("name", "Health Post", |r| text(&r.name))
			.add("district", "District", |r| text(&r.district))
			.add("facility", "Health Facility", |r| text(&r.facility))
			.add("village", "Village", |r| text(&r.village))
			.add("gvh", "GVH", |r| text(&r.gvh))
			.add("ta", "TA", |r| text(&r.ta))
			.add("catchmentPopulation", "Catchment Population", |r| optional(r.catchment_population))
			.add("yearConstructed", "Year Constructed", |r| text(&r.year_constructed))
			.add("latitude", "Latitude", |r| optional(r.coords.map(|c| c.lat)))
			.add("longitude", "Longitude", |r| optional(r.coords.map(|c| c.lng)))
			.add("isFunctional", "Functional", |r| r.is_functional.to_string())
			.add("staffAvailable", "Staff Available", |r| list(&r.staff_available))
			.add("hasWater", "Water", |r| r.has_water.to_string())
			.add("hasElectricity", "Electricity", |r| r.has_electricity.to_string())
			.add("electricityTypes", "Electricity Sources", |r| list(&r.electricity_types))
			.add("remarks", "Remarks", |r| text(&r.remarks))
			.build()
	}
}

impl Filterable for HealthPost {
	fn search_fields(&self) -> Vec<&str> {
		vec![self.name.as_str(), self.village.as_str(), self.gvh.as_str(), self.ta.as_str()]
	}

	fn district(&self) -> Option<&str> {
		Some(&self.district)
	}

	fn facility(&self) -> Option<&str> {
		Some(&self.facility)
	}

	fn status(&self) -> Option<&str> {
		Some(functional_status(self.is_functional))
	}
}

impl TableRecord for Hcmc {
	fn columns() -> Vec<BoxedColumn<Self>> {
		ColumnSet::<Self>::new()
			.add("hcmcName", "HCMC Name", |r| text(&r.hcmc_name))
			.add("district", "District", |r| text(&r.district))
			.add("facility", "Health Facility", |r| text(&r.facility))
			.add("village", "Village", |r| text(&r.village))
			.add("gvh", "GVH", |r| text(&r.gvh))
			.add("ta", "TA", |r| text(&r.ta))
			.add("isFormed", "Formed", |r| r.is_formed.to_string())
			.add("isOrientedRoles", "Oriented on Roles", |r| r.is_oriented_roles.to_string())
			.add("isOrientedDFF", "Oriented on DFF", |r| r.is_oriented_dff.to_string())
			.add("isFunctional", "Functional", |r| r.is_functional.to_string())
			.add("remarks", "Remarks", |r| text(&r.remarks))
			.build()
	}
}

impl Filterable for Hcmc {
	fn search_fields(&self) -> Vec<&str> {
		vec![self.hcmc_name.as_str(), self.village.as_str(), self.gvh.as_str()]
	}

	fn district(&self) -> Option<&str> {
		Some(&self.district)
	}

	fn facility(&self) -> Option<&str> {
		Some(&self.facility)
	}

	fn status(&self) -> Option<&str> {
		Some(functional_status(self.is_functional))
	}
}
