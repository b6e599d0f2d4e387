use mehis_models::catalogs::OTHER;
use mehis_models::{ThreeState, VillageInspection};
use std::collections::BTreeMap;

use super::{ColumnSet, TableRecord};
use crate::column::{BoxedColumn, list, optional, optional_text, text};
use crate::filter::Filterable;

/// Every disease seen across the households, with its total case count when
/// one was recorded: `"Cholera (3); Malaria"`.
fn diseases(inspection: &VillageInspection) -> String {
	let mut totals: BTreeMap<&str, Option<u32>> = BTreeMap::new();
	for household in &inspection.households {
		for disease in &household.observed_diseases {
			let name = match (disease.as_str(), household.other_disease_spec.as_deref()) {
				(OTHER, Some(spec)) if !spec.trim().is_empty() => spec.trim(),
				(name, _) => name,
			};
			let total = totals.entry(name).or_default();
			if let Some(cases) = household.disease_cases.get(disease) {
				*total = Some(total.unwrap_or(0) + cases);
			}
		}
	}
	let entries: Vec<String> = totals
		.into_iter()
		.map(|(name, cases)| match cases {
			Some(cases) => format!("{} ({})", name, cases),
			None => name.to_string(),
		})
		.collect();
	list(&entries)
}

fn water_sources(inspection: &VillageInspection) -> String {
	let sources: Vec<String> = inspection
		.main_water_sources
		.iter()
		.map(|source| match inspection.other_water_source.as_deref() {
			Some(other) if source == OTHER && !other.trim().is_empty() => {
				format!("{} ({})", OTHER, other.trim())
			}
			_ => source.clone(),
		})
		.collect();
	list(&sources)
}

impl TableRecord for VillageInspection {
	fn columns() -> Vec<BoxedColumn<Self>> {
		ColumnSet::<Self>::new()
			.add("date", "Date", |r| text(&r.date))
			.add("district", "District", |r| text(&r.district))
			.add("healthFacility", "Health Facility", |r| text(&r.health_facility))
			.add("gvh", "GVH", |r| text(&r.gvh))
			.add("villageName", "Village", |r| text(&r.village_name))
			.add("villagePopulation", "Village Population", |r| optional(r.village_population))
			.add("numHouseholds", "Households in Village", |r| optional(r.num_households))
			.add("mainWaterSources", "Main Water Sources", water_sources)
			.add("waterFreeContamination", "Water Free from Contamination", |r| {
				r.water_free_contamination.to_string()
			})
			.add("burialSitesSafe", "Burial Sites Safe", |r| r.burial_sites_safe.to_string())
			.add("boreholesCount", "Boreholes", |r| optional(r.boreholes_count))
			.add("boreholesFunctional", "Functional Boreholes", |r| optional(r.boreholes_functional))
			.add("boreholesCleanSurroundings", "Boreholes with Clean Surroundings", |r| {
				optional(r.boreholes_clean_surroundings)
			})
			.add("boreholesFenced", "Fenced Boreholes", |r| optional(r.boreholes_fenced))
			.add("boreholesCommittees", "Boreholes with Committees", |r| optional(r.boreholes_committees))
			.add("wellsCount", "Wells", |r| optional(r.wells_count))
			.add("wellsFunctional", "Functional Wells", |r| optional(r.wells_functional))
			.add("wellsClean", "Clean Wells", |r| optional(r.wells_clean))
			.add("vhcAvailable", "VHC Available", |r| r.vhc_available.to_string())
			.add("vhcActive", "VHC Active", |r| r.vhc_active.to_string())
			.add("sanitationParticipation", "Sanitation Participation", |r| {
				r.sanitation_participation.to_string()
			})
			.add("householdsInspected", "Households Inspected", |r| r.households.len().to_string())
			.add("householdsWithLatrine", "Households with Latrine", |r| {
				r.households
					.iter()
					.filter(|h| h.has_latrine == ThreeState::Yes)
					.count()
					.to_string()
			})
			.add("observedDiseases", "Observed Diseases", diseases)
			.add("overallObservations", "Overall Observations", |r| {
				optional_text(r.overall_observations.as_deref())
			})
			.add("actionPlans", "Action Plans", |r| {
				let plans: Vec<String> = r
					.action_plans
					.iter()
					.map(|p| format!("{}: {}", p.issue_identified.trim(), p.action_required.trim()))
					.collect();
				list(&plans)
			})
			.build()
	}
}

impl Filterable for VillageInspection {
	fn search_fields(&self) -> Vec<&str> {
		let mut fields = vec![self.village_name.as_str(), self.gvh.as_str()];
		fields.extend(self.households.iter().map(|h| h.head_name.as_str()));
		fields
	}

	fn district(&self) -> Option<&str> {
		Some(&self.district)
	}

	fn facility(&self) -> Option<&str> {
		Some(&self.health_facility)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use mehis_models::HouseholdRecord;

	fn household(diseases: &[&str], cases: &[(&str, u32)]) -> HouseholdRecord {
		HouseholdRecord {
			observed_diseases: diseases.iter().map(|d| d.to_string()).collect(),
			disease_cases: cases.iter().map(|(d, n)| (d.to_string(), *n)).collect(),
			..Default::default()
		}
	}

	#[test]
	fn test_diseases_total_across_households() {
		let mut scabies = household(&["Other"], &[]);
		scabies.other_disease_spec = Some("Scabies".to_string());
		let inspection = VillageInspection {
			households: vec![
				household(&["Cholera", "Malaria"], &[("Cholera", 2)]),
				household(&["Cholera"], &[("Cholera", 1)]),
				scabies,
			],
			..Default::default()
		};
		assert_eq!(diseases(&inspection), "Cholera (3); Malaria; Scabies");
	}

	#[test]
	fn test_search_reaches_household_heads() {
		let inspection = VillageInspection {
			village_name: "Chinsapo".to_string(),
			households: vec![HouseholdRecord {
				head_name: "Yamikani Phiri".to_string(),
				..Default::default()
			}],
			..Default::default()
		};
		let inspections = [inspection];
		assert_eq!(crate::FilterSpec::new().search("phiri").apply(&inspections).len(), 1);
		assert_eq!(water_sources(&inspections[0]), "N/A");
	}
}
