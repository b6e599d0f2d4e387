//! Schema-wide checks across every record kind.

use mehis_models::{
	EntityKind, HealthPost, Hcmc, HsaRegistration, MonthlyWorkPlan, Record, SanitationAssessment,
	VillageInspection, WaterPoint, WaterQualitySample, repository,
};
use mehis_storages::{MemoryStorage, Store};
use rstest::rstest;
use std::sync::Arc;

fn roundtrip<R: Record>() -> EntityKind {
	let store = Store::new(Arc::new(MemoryStorage::new()));
	let repo = repository::<R>(&store);

	let mut record = R::default();
	record.set_id("r-1".to_string());
	record.set_submitted_at("2024-03-15T10:00:00Z".to_string());
	repo.upsert(record.clone()).unwrap();

	assert_eq!(repo.all(), vec![record]);
	assert_eq!(
		repo.find("r-1").and_then(|r| r.submitted_at().map(str::to_string)),
		Some("2024-03-15T10:00:00Z".to_string())
	);
	R::KIND
}

#[rstest]
#[case(roundtrip::<HsaRegistration>, EntityKind::HsaRegistration)]
#[case(roundtrip::<MonthlyWorkPlan>, EntityKind::WorkPlan)]
#[case(roundtrip::<WaterPoint>, EntityKind::WaterPoint)]
#[case(roundtrip::<WaterQualitySample>, EntityKind::WaterQualitySample)]
#[case(roundtrip::<SanitationAssessment>, EntityKind::SanitationAssessment)]
#[case(roundtrip::<VillageInspection>, EntityKind::VillageInspection)]
#[case(roundtrip::<HealthPost>, EntityKind::HealthPost)]
#[case(roundtrip::<Hcmc>, EntityKind::Hcmc)]
fn test_every_kind_roundtrips_through_its_collection(
	#[case] check: fn() -> EntityKind,
	#[case] expected: EntityKind,
) {
	assert_eq!(check(), expected);
}

#[test]
fn test_coordinate_slots() {
	assert!(HsaRegistration::default().coordinates_mut().is_some());
	assert!(WaterPoint::default().coordinates_mut().is_some());
	assert!(HealthPost::default().coordinates_mut().is_some());
	assert!(MonthlyWorkPlan::default().coordinates_mut().is_none());
}
