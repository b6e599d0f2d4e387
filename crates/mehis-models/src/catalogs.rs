//! Fixed catalogs offered as choices in the forms.

pub use mehis_validators::MONTH_NAMES;

/// Filter sentinel meaning "no district filter".
pub const ALL_DISTRICTS: &str = "All Districts";

/// District choices as offered in list filters, sentinel first.
pub const DISTRICT_OPTIONS: &[&str] = &[
	ALL_DISTRICTS,
	"Balaka",
	"Blantyre",
	"Chikwawa",
	"Chiradzulu",
	"Chitipa",
	"Dedza",
	"Dowa",
	"Karonga",
	"Kasungu",
	"Likoma",
	"Lilongwe",
	"Machinga",
	"Mangochi",
	"Mchinji",
	"Mulanje",
	"Mwanza",
	"Mzimba",
	"Nkhata Bay",
	"Nkhotakota",
	"Nsanje",
	"Ntcheu",
	"Ntchisi",
	"Phalombe",
	"Rumphi",
	"Salima",
	"Thyolo",
	"Zomba",
];

/// Districts a record may belong to.
pub const DISTRICTS: &[&str] = DISTRICT_OPTIONS.split_at(1).1;

pub const TRAINING_TOPICS: &[&str] = &[
	"Immunization",
	"Vitamin A and Nutrition screening",
	"iCCM",
	"CBMNC",
	"Family planning",
	"HIV Testing",
	"Malaria prevention",
	"Home based care",
	"NCD screening",
	"NTD prevention and treatment",
	"WASH",
	"Food safety and Hygiene",
	"Climate Change and Health",
	"IDSR",
];

pub const FACILITY_TYPES: &[&str] = &["Government", "CHAM", "Private", "Other"];

pub const RECRUITERS: &[&str] = &[
	"Government",
	"Global Fund",
	"G2G-USAID",
	"Watikweza",
	"UNICEF",
	"PEPFER-HBCU",
	"Other",
];

pub const WATER_POINT_TYPES: &[&str] = &[
	"Borehole",
	"Piped Water (Communal Tap)",
	"Protected Shallow Well",
	"Unprotected Shallow Well",
	"Protected Spring",
	"Unprotected Spring",
	"River/Stream",
	"Dam/Cistern",
	"Other",
];

pub const WATER_TREATMENT_METHODS: &[&str] = &[
	"Boiling",
	"Chlorination (Water Guard)",
	"Filtration",
	"Solar Disinfection (SODIS)",
	"None",
	"Other",
];

pub const TOILET_TYPES: &[&str] = &[
	"Traditional Pit Latrine",
	"Improved Pit Latrine (VIP)",
	"Flush Toilet",
	"Composting Toilet",
	"No Facility (Open Defecation)",
	"Other",
];

/// Diseases an inspector may record as observed in a household.
pub const DISEASES: &[&str] = &[
	"Diarrhoea",
	"Cholera",
	"Dysentery",
	"Typhoid",
	"Malaria",
	"Bilharzia",
	"Skin infections",
	"Eye infections",
	"Respiratory infections",
	"Other",
];

/// Staff cadres that may be posted at a health post.
pub const STAFF_CADRES: &[&str] = &[
	"HSA",
	"SHSA",
	"Nurse/Midwife",
	"Clinical Officer",
	"Medical Assistant",
	"Community Midwife Assistant",
	"Other",
];

pub const ELECTRICITY_SOURCES: &[&str] = &["ESCOM", "Solar", "Generator", "Other"];

/// Catalog entry that gates an accompanying free-text field.
pub const OTHER: &str = "Other";

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_districts_exclude_sentinel() {
		assert_eq!(DISTRICTS.len() + 1, DISTRICT_OPTIONS.len());
		assert_eq!(DISTRICTS[0], "Balaka");
		assert!(!DISTRICTS.contains(&ALL_DISTRICTS));
	}

	#[test]
	fn test_training_topics_count() {
		assert_eq!(TRAINING_TOPICS.len(), 14);
	}
}
