//! Filtering and export over realistic collections.

use chrono::NaiveDate;
use mehis_models::{EntityKind, HsaRegistration, SupplyItem, WaterPoint};
use mehis_tables::{CsvExporter, FilterSpec, SimpleTable, Table, TableError, TableRecord};
use rstest::{fixture, rstest};

fn hsa(name: &str, district: &str, facility: &str) -> HsaRegistration {
	HsaRegistration {
		id: name.to_lowercase().replace(' ', "-"),
		hsa_name: name.to_string(),
		district: district.to_string(),
		reporting_facility: facility.to_string(),
		..Default::default()
	}
}

#[fixture]
fn registry() -> Vec<HsaRegistration> {
	vec![
		hsa("Chikondi Banda", "Lilongwe", "Area 25 Health Centre"),
		hsa("Thoko Banda", "Dedza", "Kasina Health Centre"),
		hsa("Esnart Mwale", "Lilongwe", "Kawale Health Centre"),
		hsa("Joseph Phiri", "Ntcheu", "Biriwiri Health Centre"),
		hsa("Grace Banda", "Lilongwe", "Area 25 Health Centre"),
	]
}

fn names(records: &[&HsaRegistration]) -> Vec<String> {
	records.iter().map(|r| r.hsa_name.clone()).collect()
}

#[rstest]
fn test_district_filter_is_exact(registry: Vec<HsaRegistration>) {
	let lilongwe = FilterSpec::new().district("Lilongwe").apply(&registry);
	assert_eq!(names(&lilongwe), vec!["Chikondi Banda", "Esnart Mwale", "Grace Banda"]);

	assert!(FilterSpec::new().district("Lilong").apply(&registry).is_empty());
	assert_eq!(FilterSpec::new().district("All Districts").apply(&registry).len(), 5);
}

#[rstest]
fn test_search_and_district_intersect(registry: Vec<HsaRegistration>) {
	let spec = FilterSpec::new().search("BANDA").district("Lilongwe");
	assert_eq!(names(&spec.apply(&registry)), vec!["Chikondi Banda", "Grace Banda"]);

	let spec = FilterSpec::new().facility("area 25").search("grace");
	assert_eq!(names(&spec.apply(&registry)), vec!["Grace Banda"]);
}

#[rstest]
fn test_export_has_one_line_per_record_plus_header(registry: Vec<HsaRegistration>) {
	let selected = FilterSpec::new().district("Lilongwe").apply(&registry);
	let csv = CsvExporter::new().export_records(&selected).unwrap();

	assert_eq!(csv.lines().count(), selected.len() + 1);

	let mut reader = csv::Reader::from_reader(csv.as_bytes());
	let header = reader.headers().unwrap().clone();
	assert_eq!(header.get(0), Some("ID"));
	assert_eq!(header.len(), HsaRegistration::columns().len());
	let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
	assert_eq!(rows.len(), 3);
	assert!(rows.iter().all(|row| row.len() == header.len()));
	assert_eq!(rows[1].get(2), Some("Esnart Mwale"));
}

#[rstest]
fn test_delimiters_and_quotes_are_escaped() {
	let mut tricky = hsa("Banda, Chikondi", "Lilongwe", "The \"New\" Clinic");
	tricky.supplies.bicycle = SupplyItem::received("2021");
	let csv = CsvExporter::new().export_records(&[&tricky]).unwrap();

	assert!(csv.contains("\"Banda, Chikondi\""));
	assert!(csv.contains("\"The \"\"New\"\" Clinic\""));

	let mut reader = csv::Reader::from_reader(csv.as_bytes());
	let header = reader.headers().unwrap().clone();
	let row = reader.records().next().unwrap().unwrap();
	assert_eq!(row.len(), header.len());
	let bicycle = header.iter().position(|h| h == "Bicycle").unwrap();
	assert_eq!(row.get(bicycle), Some("Yes (2021)"));
	assert_eq!(row.get(2), Some("Banda, Chikondi"));
}

#[rstest]
fn test_empty_selection_exports_nothing(registry: Vec<HsaRegistration>) {
	let none = FilterSpec::new().district("Karonga").apply(&registry);
	let err = CsvExporter::new().export_records(&none).unwrap_err();
	assert!(matches!(err, TableError::NothingToExport));
	assert_eq!(err.to_string(), "No data to export");

	let empty: SimpleTable<WaterPoint> = SimpleTable::for_records(Vec::new());
	assert!(matches!(CsvExporter::new().export(&empty), Err(TableError::NothingToExport)));
}

#[rstest]
fn test_write_to_dir_names_file_by_kind_and_date(registry: Vec<HsaRegistration>) {
	let dir = tempfile::tempdir().unwrap();
	let target = dir.path().join("exports");
	let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
	let all: Vec<&HsaRegistration> = registry.iter().collect();

	let path = CsvExporter::new().write_to_dir(&target, &all, date).unwrap();
	assert_eq!(path, target.join("HSA_Registrations_2024-03-15.csv"));
	let written = std::fs::read_to_string(&path).unwrap();
	assert_eq!(written.lines().count(), 6);

	let none: [&HsaRegistration; 0] = [];
	let err = CsvExporter::new().write_to_dir(dir.path(), &none, date).unwrap_err();
	assert!(matches!(err, TableError::NothingToExport));
	assert!(!dir.path().join("HSA_Registrations_2024-03-15.csv").exists());
}

#[rstest]
#[case(EntityKind::WorkPlan, "Work_Plans_2024-12-01.csv")]
#[case(EntityKind::Hcmc, "HCMCs_2024-12-01.csv")]
fn test_file_names(#[case] kind: EntityKind, #[case] expected: &str) {
	let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
	assert_eq!(CsvExporter::file_name(kind, date), expected);
}

#[rstest]
fn test_semicolon_delimiter(registry: Vec<HsaRegistration>) {
	let table = SimpleTable::for_records(registry);
	let csv = CsvExporter::new().with_delimiter(b';').export(&table).unwrap();
	let first = csv.lines().next().unwrap();
	assert!(first.starts_with("ID;District;HSA Name;"));
	assert_eq!(table.total_rows(), 5);
}
