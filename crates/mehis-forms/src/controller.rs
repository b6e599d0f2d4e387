//! The form state controller.

use mehis_models::{Coordinates, Record};
use mehis_storages::{Repository, Store};
use serde_json::Value;

use crate::context::FormContext;
use crate::errors::{FormError, FormErrors, FormResult};
use crate::field;
use crate::geolocation::{GeolocationPoll, GeolocationRequest};
use crate::records::FormRecord;

/// Owns one in-progress draft of an `R` and mediates every change to it.
///
/// Every mutation goes through the same path: the change is applied to the
/// draft, then [`FormRecord::cascade`] clears anything whose gate is now off.
/// Nothing is persisted until [`commit`](Self::commit) succeeds; after that
/// the draft is gone and further edits fail with [`FormError::NoDraft`].
///
/// # Examples
///
/// ```
/// use mehis_forms::{FormContext, FormController};
/// use mehis_models::{SanitationAssessment, YesNo, repository};
/// use mehis_storages::{MemoryStorage, Store};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let store = Store::new(Arc::new(MemoryStorage::new()));
/// let repo = repository::<SanitationAssessment>(&store);
///
/// let mut form = FormController::<SanitationAssessment>::new(FormContext::new());
/// form.set_field("householdHead", json!("Esnart Mwale")).unwrap();
/// form.set_field("village", json!("Chinsapo")).unwrap();
/// form.set_field("mainWaterSource", json!("Borehole")).unwrap();
/// form.set_field("waterStorage", json!("Covered bucket")).unwrap();
/// form.set_field("hasToilet", json!("Yes")).unwrap();
/// form.set_field("toiletType", json!("Flush Toilet")).unwrap();
/// form.set_field("toiletCondition", json!("Clean")).unwrap();
///
/// let saved = form.commit(&repo).unwrap();
/// assert_eq!(saved.has_toilet, YesNo::Yes);
/// assert_eq!(repo.all().len(), 1);
/// assert!(form.draft().is_none());
/// ```
pub struct FormController<R: FormRecord> {
	ctx: FormContext,
	draft: Option<R>,
	errors: FormErrors,
	geolocation: Option<GeolocationRequest>,
}

impl<R: FormRecord> FormController<R> {
	/// Opens a form for a new record, seeded with the kind's defaults.
	pub fn new(ctx: FormContext) -> Self {
		let mut draft = R::blank(&ctx);
		draft.cascade(&ctx);
		tracing::debug!(kind = %R::KIND, "opened new draft");
		Self::with_draft(ctx, draft)
	}

	/// Opens a form on a full copy of the stored record `id`.
	pub fn edit(ctx: FormContext, repo: &Repository<R>, id: &str) -> FormResult<Self> {
		let record = repo.find(id).ok_or_else(|| FormError::NotFound {
			kind: R::KIND.slug(),
			id: id.to_string(),
		})?;
		tracing::debug!(kind = %R::KIND, id, "opened draft for edit");
		Ok(Self::with_draft(ctx, record))
	}

	/// Opens a form on an arbitrary draft, e.g. one restored from storage.
	pub fn with_draft(ctx: FormContext, draft: R) -> Self {
		Self {
			ctx,
			draft: Some(draft),
			errors: FormErrors::new(),
			geolocation: None,
		}
	}

	pub fn context(&self) -> &FormContext {
		&self.ctx
	}

	pub fn draft(&self) -> Option<&R> {
		self.draft.as_ref()
	}

	/// Whether the draft belongs to a record that was committed before.
	pub fn is_editing(&self) -> bool {
		self.draft.as_ref().is_some_and(|d| !d.id().is_empty())
	}

	/// Errors from the most recent validation pass.
	pub fn errors(&self) -> &FormErrors {
		&self.errors
	}

	/// Drops the draft without saving.
	pub fn discard(&mut self) -> Option<R> {
		self.errors.clear();
		self.geolocation = None;
		self.draft.take()
	}

	/// Starts over with a blank draft, e.g. after a commit.
	pub fn reset(&mut self) {
		let mut draft = R::blank(&self.ctx);
		draft.cascade(&self.ctx);
		self.draft = Some(draft);
		self.errors.clear();
	}

	/// Replaces the field at a dotted `path` with `value`.
	///
	/// The draft is rebuilt through its schema, so a value outside an
	/// enumeration, of the wrong type, or at a path the record does not have
	/// is rejected and the draft is left as it was. Nested objects are
	/// replaced as a whole.
	pub fn set_field(&mut self, path: &str, value: Value) -> FormResult<()> {
		let captured = self.captured_coordinates();
		let draft = self.draft.as_ref().ok_or(FormError::NoDraft)?;
		let invalid = |message: String| FormError::InvalidField {
			path: path.to_string(),
			message,
		};

		let mut document = serde_json::to_value(draft).map_err(|e| invalid(e.to_string()))?;
		field::set_path(&mut document, path, value.clone()).map_err(invalid)?;
		let mut updated: R = serde_json::from_value(document).map_err(|e| invalid(e.to_string()))?;

		let written = serde_json::to_value(&updated).map_err(|e| invalid(e.to_string()))?;
		if !field::written_as(&value, field::get_path(&written, path)) {
			return Err(invalid("no such field".to_string()));
		}
		if updated.id() != draft.id() {
			return Err(invalid("the identifier cannot be changed".to_string()));
		}
		if captured.is_some() && updated.coordinates_mut().map(|slot| *slot) != Some(captured) {
			return Err(invalid("captured coordinates cannot be changed".to_string()));
		}

		self.replace_draft(updated);
		tracing::debug!(kind = %R::KIND, path, "field updated");
		Ok(())
	}

	/// Applies a typed edit to the draft, then cascades.
	///
	/// The identifier and any captured coordinates are restored if the
	/// closure changes them.
	pub fn update<T>(&mut self, f: impl FnOnce(&mut R) -> T) -> FormResult<T> {
		let captured = self.captured_coordinates();
		let draft = self.draft.as_mut().ok_or(FormError::NoDraft)?;
		let id = draft.id().to_string();
		let result = f(draft);
		if draft.id() != id {
			draft.set_id(id);
		}
		if captured.is_some()
			&& let Some(slot) = draft.coordinates_mut()
		{
			*slot = captured;
		}
		draft.cascade(&self.ctx);
		Ok(result)
	}

	/// Coordinates already held by the draft; once set they never change.
	fn captured_coordinates(&mut self) -> Option<Coordinates> {
		self.draft.as_mut()?.coordinates_mut().and_then(|slot| *slot)
	}

	fn replace_draft(&mut self, mut updated: R) {
		updated.cascade(&self.ctx);
		self.draft = Some(updated);
	}

	/// Runs every applicable rule against the draft.
	///
	/// Returns `true` when the draft is valid. The collected errors are
	/// available from [`errors`](Self::errors).
	pub fn validate(&mut self) -> bool {
		self.errors.clear();
		match &self.draft {
			Some(draft) => draft.clean(&self.ctx, &mut self.errors),
			None => self
				.errors
				.add(crate::errors::ALL_FIELDS_KEY, FormError::NoDraft.to_string()),
		}
		if !self.errors.is_empty() {
			tracing::debug!(kind = %R::KIND, errors = self.errors.len(), "validation failed");
		}
		self.errors.is_empty()
	}

	/// Validates, stamps and saves the draft into `repo`.
	///
	/// A new record gets a fresh identifier; every commit refreshes the
	/// submission timestamp. The whole collection is written back in one
	/// operation. On success the draft is cleared and any saved copy of it is
	/// discarded; on failure the draft is kept and the stored collection is
	/// unchanged.
	pub fn commit(&mut self, repo: &Repository<R>) -> FormResult<R> {
		if !self.validate() {
			return Err(FormError::Invalid(self.errors.clone()));
		}
		let mut record = self.draft.clone().ok_or(FormError::NoDraft)?;
		if record.id().is_empty() {
			record.set_id(self.ctx.new_id());
		}
		record.set_submitted_at(self.ctx.timestamp());

		if let Err(e) = repo.upsert(record.clone()) {
			tracing::warn!(kind = %R::KIND, error = %e, "commit failed; draft kept");
			return Err(e.into());
		}
		tracing::info!(kind = %R::KIND, id = record.id(), "record committed");

		self.draft = None;
		self.geolocation = None;
		if let Err(e) = repo.store().remove(&R::KIND.draft_key()) {
			tracing::warn!(kind = %R::KIND, error = %e, "failed to discard saved draft");
		}
		Ok(record)
	}

	/// Saves the in-progress draft so the session can be resumed later.
	pub fn save_draft(&self, store: &Store) -> FormResult<()> {
		let draft = self.draft.as_ref().ok_or(FormError::NoDraft)?;
		store.set(&R::KIND.draft_key(), draft)?;
		tracing::debug!(kind = %R::KIND, "draft saved");
		Ok(())
	}

	/// Reopens a previously saved draft, if one exists and still decodes.
	pub fn resume_draft(ctx: FormContext, store: &Store) -> Option<Self> {
		let mut draft: R = store.get::<Option<R>>(&R::KIND.draft_key(), None)?;
		draft.cascade(&ctx);
		tracing::debug!(kind = %R::KIND, "draft resumed");
		Some(Self::with_draft(ctx, draft))
	}

	/// Removes a saved draft without touching the open one.
	pub fn clear_saved_draft(store: &Store) -> FormResult<()> {
		store.remove(&R::KIND.draft_key())?;
		Ok(())
	}

	/// Holds a pending geolocation request for this form.
	pub fn attach_geolocation(&mut self, request: GeolocationRequest) {
		self.geolocation = Some(request);
	}

	pub fn geolocation_pending(&self) -> bool {
		self.geolocation.is_some()
	}

	/// Merges a resolved position into the draft.
	///
	/// Coordinates are only filled in once: a draft that already has them, or
	/// a kind without a coordinate slot, keeps what it has. Returns the merged
	/// coordinates, or `None` while the request is pending, after it failed,
	/// or when nothing was merged.
	pub fn poll_geolocation(&mut self) -> Option<Coordinates> {
		let request = self.geolocation.as_mut()?;
		match request.poll() {
			GeolocationPoll::Pending => None,
			GeolocationPoll::Failed(error) => {
				tracing::warn!(kind = %R::KIND, %error, "geolocation failed; coordinates left unset");
				self.geolocation = None;
				None
			}
			GeolocationPoll::Resolved(coordinates) => {
				self.geolocation = None;
				let slot = self.draft.as_mut()?.coordinates_mut()?;
				if slot.is_some() {
					return None;
				}
				*slot = Some(coordinates);
				tracing::debug!(kind = %R::KIND, "coordinates captured");
				Some(coordinates)
			}
		}
	}
}

impl<R: FormRecord> std::fmt::Debug for FormController<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FormController")
			.field("kind", &R::KIND)
			.field("draft", &self.draft)
			.field("errors", &self.errors)
			.field("geolocation_pending", &self.geolocation.is_some())
			.finish()
	}
}
