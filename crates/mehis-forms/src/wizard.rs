//! Multi-step entry over a single draft.

use mehis_models::{HsaRegistration, Repository};

use crate::context::FormContext;
use crate::controller::FormController;
use crate::errors::{FormError, FormErrors, FormResult};
use crate::records::FormRecord;

/// One section of a wizard.
///
/// A step owns the error keys that start with any of its field prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardStep {
	pub name: String,
	pub title: String,
	fields: Vec<String>,
}

impl WizardStep {
	/// Create a new wizard step
	///
	/// # Examples
	///
	/// ```
	/// use mehis_forms::WizardStep;
	///
	/// let step = WizardStep::new("identification", "Identification")
	///     .with_fields(["hsaName", "district"]);
	/// assert!(step.owns("hsaName"));
	/// assert!(!step.owns("supplies_torch_year"));
	/// ```
	pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			title: title.into(),
			fields: Vec::new(),
		}
	}

	pub fn with_fields<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.fields.extend(fields.into_iter().map(Into::into));
		self
	}

	pub fn owns(&self, key: &str) -> bool {
		self.fields.iter().any(|prefix| key.starts_with(prefix.as_str()))
	}

	fn prefixes(&self) -> Vec<&str> {
		self.fields.iter().map(String::as_str).collect()
	}
}

/// Walks a form through named steps, refusing to move past a step whose
/// fields have errors.
pub struct FormWizard<R: FormRecord> {
	form: FormController<R>,
	steps: Vec<WizardStep>,
	current_step: usize,
}

impl<R: FormRecord> FormWizard<R> {
	pub fn new(form: FormController<R>) -> Self {
		Self {
			form,
			steps: Vec::new(),
			current_step: 0,
		}
	}

	pub fn add_step(&mut self, step: WizardStep) {
		self.steps.push(step);
	}

	pub fn steps(&self) -> &[WizardStep] {
		&self.steps
	}

	pub fn form(&self) -> &FormController<R> {
		&self.form
	}

	pub fn form_mut(&mut self) -> &mut FormController<R> {
		&mut self.form
	}

	pub fn into_form(self) -> FormController<R> {
		self.form
	}

	pub fn current_step(&self) -> usize {
		self.current_step
	}

	pub fn current_step_name(&self) -> Option<&str> {
		self.steps.get(self.current_step).map(|s| s.name.as_str())
	}

	pub fn total_steps(&self) -> usize {
		self.steps.len()
	}

	pub fn is_first_step(&self) -> bool {
		self.current_step == 0
	}

	pub fn is_last_step(&self) -> bool {
		self.current_step + 1 >= self.steps.len()
	}

	/// Validates the whole draft and returns the errors owned by step `index`.
	fn errors_for(&mut self, index: usize) -> FormErrors {
		self.form.validate();
		match self.steps.get(index) {
			Some(step) => self.form.errors().filtered(&step.prefixes()),
			None => FormErrors::new(),
		}
	}

	/// Errors on the current step's fields.
	pub fn current_errors(&mut self) -> FormErrors {
		self.errors_for(self.current_step)
	}

	/// Move to the next step if the current one is free of errors
	pub fn next_step(&mut self) -> FormResult<()> {
		if self.is_last_step() {
			return Err(FormError::Wizard("Already at last step".to_string()));
		}
		let errors = self.current_errors();
		if !errors.is_empty() {
			return Err(FormError::Invalid(errors));
		}
		self.current_step += 1;
		tracing::debug!(step = self.current_step_name(), "wizard advanced");
		Ok(())
	}

	pub fn previous_step(&mut self) -> FormResult<()> {
		if self.is_first_step() {
			return Err(FormError::Wizard("Already at first step".to_string()));
		}
		self.current_step -= 1;
		Ok(())
	}

	/// Go to a step by name.
	///
	/// Going back is always allowed. Going forward requires every step in
	/// between, the current one included, to be free of errors.
	pub fn goto_step(&mut self, name: &str) -> FormResult<()> {
		let target = self
			.steps
			.iter()
			.position(|step| step.name == name)
			.ok_or_else(|| FormError::Wizard(format!("Step '{}' not found", name)))?;

		for index in self.current_step..target {
			let errors = self.errors_for(index);
			if !errors.is_empty() {
				return Err(FormError::Invalid(errors));
			}
		}
		self.current_step = target;
		Ok(())
	}

	pub fn progress_percentage(&self) -> f32 {
		if self.steps.is_empty() {
			return 0.0;
		}
		((self.current_step + 1) as f32 / self.steps.len() as f32) * 100.0
	}

	/// Commits the draft from the last step.
	pub fn finish(&mut self, repo: &Repository<R>) -> FormResult<R> {
		if !self.is_last_step() {
			return Err(FormError::Wizard(
				"Cannot finish before the last step".to_string(),
			));
		}
		let record = self.form.commit(repo)?;
		self.current_step = 0;
		Ok(record)
	}
}

impl FormWizard<HsaRegistration> {
	/// The three-section HSA registration flow.
	///
	/// # Examples
	///
	/// ```
	/// use mehis_forms::{FormContext, FormWizard};
	///
	/// let wizard = FormWizard::hsa_registration(FormContext::new());
	/// assert_eq!(wizard.total_steps(), 3);
	/// assert_eq!(wizard.current_step_name(), Some("identification"));
	/// ```
	pub fn hsa_registration(ctx: FormContext) -> Self {
		let mut wizard = Self::new(FormController::new(ctx));
		wizard.add_step(WizardStep::new("identification", "Identification").with_fields([
			"hsaName",
			"district",
			"sex",
			"position",
			"grade",
			"qualification",
			"yearAppointed",
			"dob",
			"employmentNumber",
			"nationalId",
			"contact",
			"salarySupport",
			"recruitedBy",
			"home",
		]));
		wizard.add_step(
			WizardStep::new("training_location", "Training & Location").with_fields([
				"thematicTrainings",
				"reportingFacility",
				"facilityType",
				"healthPost",
				"catchment",
				"village_",
				"gvh_",
			]),
		);
		wizard.add_step(
			WizardStep::new("geography_supplies", "Geography & Supplies").with_fields([
				"coords",
				"distance",
				"numVHCs",
				"numTrainedVHCs",
				"villageClinic",
				"phone",
				"yearReceivedPhone",
				"supplies_",
			]),
		);
		wizard
	}
}

impl<R: FormRecord> std::fmt::Debug for FormWizard<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FormWizard")
			.field("steps", &self.steps)
			.field("current_step", &self.current_step)
			.field("form", &self.form)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use mehis_models::Sex;
	use mehis_models::repository;
	use mehis_storages::{MemoryStorage, Store};
	use std::sync::Arc;

	#[test]
	fn test_blocked_until_step_is_clean() {
		let mut wizard = FormWizard::hsa_registration(FormContext::new());
		let err = wizard.next_step().unwrap_err();
		match err {
			FormError::Invalid(errors) => {
				assert!(errors.contains("hsaName"));
				assert!(errors.keys().all(|k| wizard.steps()[0].owns(k)));
			}
			other => panic!("unexpected error: {}", other),
		}
		assert_eq!(wizard.current_step(), 0);
	}

	#[test]
	fn test_later_step_errors_do_not_block_earlier_steps() {
		let mut wizard = FormWizard::hsa_registration(FormContext::new());
		wizard
			.form_mut()
			.update(|hsa| {
				hsa.hsa_name = "Chikondi Banda".to_string();
				hsa.district = "Dedza".to_string();
				hsa.sex = Some(Sex::Male);
				hsa.health_post_available = mehis_models::YesNo::Yes;
			})
			.unwrap();

		wizard.next_step().unwrap();
		assert_eq!(wizard.current_step_name(), Some("training_location"));
		assert!(matches!(wizard.next_step(), Err(FormError::Invalid(_))));

		wizard
			.form_mut()
			.update(|hsa| hsa.health_post_name = Some("Kasina".to_string()))
			.unwrap();
		wizard.next_step().unwrap();
		assert!(wizard.is_last_step());
		assert!(matches!(wizard.next_step(), Err(FormError::Wizard(_))));

		wizard.previous_step().unwrap();
		wizard.goto_step("geography_supplies").unwrap();

		let store = Store::new(Arc::new(MemoryStorage::new()));
		let repo = repository::<HsaRegistration>(&store);
		let saved = wizard.finish(&repo).unwrap();
		assert_eq!(saved.health_post_name.as_deref(), Some("Kasina"));
		assert!(wizard.form().draft().is_none());
	}

	#[test]
	fn test_finish_only_from_last_step() {
		let mut wizard = FormWizard::hsa_registration(FormContext::new());
		let store = Store::new(Arc::new(MemoryStorage::new()));
		let err = wizard.finish(&repository(&store)).unwrap_err();
		assert!(matches!(err, FormError::Wizard(_)));
	}
}
