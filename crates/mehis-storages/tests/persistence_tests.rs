//! Integration tests for the persistence gateway across both backends.

use mehis_storages::{
	Identifiable, LocalConfig, LocalStorage, MemoryStorage, Repository, StorageBackend,
	StorageError, Store,
};
use rstest::{fixture, rstest};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Sample {
	id: String,
	water_point_id: String,
	h2s_result: Option<String>,
	readings: Vec<f64>,
	notes: BTreeMap<String, String>,
}

impl Identifiable for Sample {
	fn id(&self) -> &str {
		&self.id
	}
}

fn sample(id: &str) -> Sample {
	Sample {
		id: id.to_string(),
		water_point_id: format!("wp-{}", id),
		h2s_result: Some("Negative".to_string()),
		readings: vec![0.2, 0.5],
		notes: BTreeMap::from([("collector".to_string(), "Mphatso, \"lead\"".to_string())]),
	}
}

struct LocalFixture {
	// Held so the directory outlives the store
	_dir: TempDir,
	store: Store,
}

#[fixture]
fn local() -> LocalFixture {
	let dir = TempDir::new().expect("Failed to create temp dir");
	let backend = LocalStorage::new(LocalConfig::new(dir.path())).expect("Failed to open storage");
	LocalFixture {
		_dir: dir,
		store: Store::new(Arc::new(backend)),
	}
}

mod roundtrip_tests {
	use super::*;

	#[rstest]
	fn test_local_roundtrip_is_deep_equal(local: LocalFixture) {
		let records = vec![sample("1"), sample("2")];
		local.store.set("waterQualitySamples", &records).unwrap();

		let loaded: Vec<Sample> = local.store.get("waterQualitySamples", Vec::new());
		assert_eq!(loaded, records);
	}

	#[rstest]
	fn test_roundtrip_survives_reopen() {
		let dir = TempDir::new().unwrap();
		{
			let backend = LocalStorage::new(LocalConfig::new(dir.path())).unwrap();
			Store::new(Arc::new(backend))
				.set("waterQualitySamples", &vec![sample("7")])
				.unwrap();
		}
		let backend = LocalStorage::new(LocalConfig::new(dir.path())).unwrap();
		let loaded: Vec<Sample> = Store::new(Arc::new(backend)).get("waterQualitySamples", Vec::new());
		assert_eq!(loaded, vec![sample("7")]);
	}

	#[rstest]
	fn test_missing_key_returns_fallback(local: LocalFixture) {
		let fallback = vec![sample("fallback")];
		let loaded: Vec<Sample> = local.store.get("neverWritten", fallback.clone());
		assert_eq!(loaded, fallback);
	}

	#[rstest]
	fn test_corrupt_document_degrades_to_default(local: LocalFixture) {
		local
			.store
			.backend()
			.write("mehis_waterQualitySamples", "[{\"id\": ")
			.unwrap();
		let loaded: Vec<Sample> = local.store.get("waterQualitySamples", Vec::new());
		assert!(loaded.is_empty());
	}
}

mod repository_tests {
	use super::*;

	#[rstest]
	fn test_upsert_replaces_in_place_and_appends(local: LocalFixture) {
		let repo: Repository<Sample> = Repository::new(local.store.clone(), "waterQualitySamples");
		repo.upsert(sample("a")).unwrap();
		repo.upsert(sample("b")).unwrap();

		let mut changed = sample("a");
		changed.readings = vec![1.0];
		let written = repo.upsert(changed.clone()).unwrap();

		assert_eq!(written, vec![changed, sample("b")]);
		assert_eq!(repo.all(), written);
	}

	#[rstest]
	fn test_delete_by_id(local: LocalFixture) {
		let repo: Repository<Sample> = Repository::new(local.store.clone(), "waterQualitySamples");
		repo.replace_all(&[sample("a"), sample("b"), sample("c")]).unwrap();

		assert!(repo.delete("b").unwrap());
		assert!(!repo.delete("b").unwrap());
		let ids: Vec<String> = repo.all().into_iter().map(|s| s.id).collect();
		assert_eq!(ids, vec!["a", "c"]);
	}

	#[rstest]
	#[case::truncated("[{\"id\": ")]
	#[case::one_bad_record("[{\"id\":\"a\",\"waterPointId\":\"wp-a\",\"readings\":[],\"notes\":{}},{\"id\":\"b\",\"readings\":\"high\"}]")]
	fn test_unreadable_collection_is_never_overwritten(local: LocalFixture, #[case] raw: &str) {
		let backend = local.store.backend().clone();
		backend.write("mehis_waterQualitySamples", raw).unwrap();
		let repo: Repository<Sample> = Repository::new(local.store.clone(), "waterQualitySamples");

		assert!(repo.all().is_empty());
		assert!(matches!(repo.upsert(sample("c")), Err(StorageError::Serialization(_))));
		assert!(matches!(repo.delete("a"), Err(StorageError::Serialization(_))));
		assert_eq!(
			backend.read("mehis_waterQualitySamples").unwrap().as_deref(),
			Some(raw)
		);

		// An explicit replacement is still allowed
		repo.replace_all(&[sample("c")]).unwrap();
		assert_eq!(repo.all(), vec![sample("c")]);
	}

	#[test]
	fn test_quota_failure_keeps_previous_collection() {
		let backend = Arc::new(MemoryStorage::with_quota(400));
		let repo: Repository<Sample> =
			Repository::new(Store::new(backend.clone()), "waterQualitySamples");
		repo.upsert(sample("a")).unwrap();

		let mut huge = sample("b");
		huge.notes.insert("dump".to_string(), "x".repeat(1_000));
		let err = repo.upsert(huge).unwrap_err();

		assert!(matches!(err, StorageError::QuotaExceeded { .. }));
		assert_eq!(repo.all(), vec![sample("a")]);
	}
}
