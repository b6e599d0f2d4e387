//! # MeHIS
//!
//! Offline-first data collection for community health work: HSA
//! registration, monthly work plans, WASH audits, village inspections and
//! facility assessments, kept on the device in a key-value store and
//! exported as CSV.
//!
//! ## Feature Flags
//!
//! - `minimal` - Schema, validation, storage and form handling
//! - `full` (default) - Everything below
//! - `forms` - Draft editing, cascades and commit ([`forms`])
//! - `tables` - List filtering and CSV export ([`tables`])
//! - `auth` - Registration, login and recovery ([`auth`])
//! - `conf` - Layered settings ([`conf`])
//!
//! ## Quick Example
//!
//! ```rust
//! use mehis::prelude::*;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let store = Store::new(Arc::new(MemoryStorage::new()));
//! let points = repository::<WaterPoint>(&store);
//!
//! let mut form = FormController::<WaterPoint>::new(FormContext::new());
//! form.set_field("name", json!("Kauma borehole")).unwrap();
//! form.set_field("district", json!("Lilongwe")).unwrap();
//! form.set_field("facility", json!("Area 25 Health Centre")).unwrap();
//! form.set_field("village", json!("Kauma")).unwrap();
//! form.set_field("type", json!("Borehole")).unwrap();
//! form.commit(&points).unwrap();
//!
//! let all = points.all();
//! let lilongwe = FilterSpec::new().district("Lilongwe").apply(&all);
//! let csv = CsvExporter::new().export_records(&lilongwe).unwrap();
//! assert_eq!(csv.lines().count(), 2);
//! ```

pub mod models;
pub mod storages;
pub mod validators;

#[cfg(feature = "auth")]
pub mod auth;
#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "tables")]
pub mod tables;

/// The types most programs need.
pub mod prelude {
	pub use mehis_models::{EntityKind, Record, User, repository};
	pub use mehis_models::{
		HealthPost, Hcmc, HsaRegistration, MonthlyWorkPlan, SanitationAssessment,
		VillageInspection, WaterPoint, WaterQualitySample,
	};
	pub use mehis_storages::{
		LocalStorage, MemoryStorage, Repository, StorageConfig, StorageError, Store, create_storage,
	};
	pub use mehis_validators::{ValidationError, ValidationResult, Validator};

	#[cfg(feature = "auth")]
	pub use mehis_auth::{AuthError, AuthService, Registration};
	#[cfg(feature = "conf")]
	pub use mehis_conf::Settings;
	#[cfg(feature = "forms")]
	pub use mehis_forms::{FormContext, FormController, FormError, FormErrors, FormWizard};
	#[cfg(feature = "tables")]
	pub use mehis_tables::{CsvExporter, FilterSpec, SimpleTable, Table, TableError};
}
