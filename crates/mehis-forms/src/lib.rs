//! Form state controller for MeHIS records.
//!
//! A [`FormController`] owns one draft record and is the only way to change
//! it. Each change is applied and then cascaded: whenever a gate field (a
//! Yes/No toggle, a catalog choice of `"Other"`, an occurrence status) is off,
//! the fields that depend on it are cleared at once, so a draft never carries
//! stale answers. Validation runs every applicable rule and collects all
//! failures into [`FormErrors`], keyed by field. Committing a valid draft
//! stamps it and writes the whole collection back through a
//! [`Repository`](mehis_storages::Repository).
//!
//! Per-kind behaviour lives behind [`FormRecord`]: defaults, cascade and
//! validation. Kind-specific editing helpers (catchment villages, work plan
//! targets, household checklists) are inherent methods on
//! `FormController<Kind>`.
//!
//! ```
//! use mehis_forms::{FormContext, FormController};
//! use mehis_models::{Hcmc, YesNo};
//! use serde_json::json;
//!
//! let mut form = FormController::<Hcmc>::new(FormContext::new());
//! form.set_field("isFormed", json!("Yes")).unwrap();
//! form.set_field("isFunctional", json!("Yes")).unwrap();
//! form.set_field("isFormed", json!("No")).unwrap();
//! assert_eq!(form.draft().unwrap().is_functional, YesNo::No);
//!
//! // Out-of-set values never reach the draft
//! assert!(form.set_field("isFormed", json!("Maybe")).is_err());
//! ```

pub mod context;
pub mod controller;
pub mod errors;
mod field;
pub mod geolocation;
pub mod items;
pub mod records;
pub mod wizard;

pub use context::{Clock, FormContext, IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use controller::FormController;
pub use errors::{ALL_FIELDS_KEY, FormError, FormErrors, FormResult};
pub use geolocation::{GeolocationError, GeolocationPoll, GeolocationRequest, GeolocationSender};
pub use items::ListItem;
pub use records::{FormRecord, MAX_TARGET_COUNT};
pub use wizard::{FormWizard, WizardStep};
