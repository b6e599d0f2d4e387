//! Record schema for MeHIS.
//!
//! Every persisted entity is a plain struct serialized with camelCase keys,
//! matching the layout of the collections in the store. Choice fields use the
//! closed enumerations in [`choices`]; catalog-backed text fields are checked
//! against the constant slices in [`catalogs`].
//!
//! Each entity implements [`Record`], which ties it to an [`EntityKind`] (and
//! so to its storage key) and exposes the identifier and submission stamp the
//! form controller manages.
//!
//! ```
//! use mehis_models::{EntityKind, Record, SanitationAssessment, YesNo};
//!
//! let assessment = SanitationAssessment::default();
//! assert_eq!(assessment.has_toilet, YesNo::No);
//! assert_eq!(SanitationAssessment::KIND, EntityKind::SanitationAssessment);
//! assert_eq!(SanitationAssessment::KIND.storage_key(), "sanitationAssessments");
//! ```

pub mod catalogs;
pub mod choices;
pub mod facility;
pub mod hsa;
pub mod inspection;
pub mod kind;
pub mod record;
pub mod user;
pub mod wash;
pub mod work_plan;

pub use choices::{
	Functionality, Grade, H2sResult, OccurrenceStatus, PhoneType, Position, Qualification,
	RepairState, SalarySupport, Sex, SupplyKind, ThreeState, ToiletCondition, UserRole,
	WasteManagement, YesNo,
};
pub use facility::{HealthPost, Hcmc};
pub use hsa::{HsaRegistration, Supplies, SupplyItem, VillageData};
pub use inspection::{ActionPlan, HouseholdRecord, VillageInspection};
pub use kind::EntityKind;
pub use record::{Coordinates, Record};
pub use user::User;
pub use wash::{SanitationAssessment, WaterPoint, WaterQualitySample};
pub use work_plan::{ActivityOccurrence, AdhocActivity, MonthlyWorkPlan, WorkPlanActivity};

pub use mehis_storages::{Identifiable, Repository, Store};

/// Repository over the collection that stores records of kind `R`.
///
/// ```
/// use mehis_models::{WaterPoint, repository};
/// use mehis_storages::{MemoryStorage, Store};
/// use std::sync::Arc;
///
/// let points = repository::<WaterPoint>(&Store::new(Arc::new(MemoryStorage::new())));
/// assert_eq!(points.key(), "waterPoints");
/// ```
pub fn repository<R: Record>(store: &Store) -> Repository<R> {
	Repository::new(store.clone(), R::KIND.storage_key())
}
