//! Operations on the ordered sub-lists inside a draft.

use mehis_models::{
	ActionPlan, ActivityOccurrence, AdhocActivity, HouseholdRecord, VillageData, WorkPlanActivity,
};

use crate::controller::FormController;
use crate::errors::{FormError, FormResult};
use crate::records::FormRecord;

/// An element of a draft's sub-list, addressed by its own identifier.
pub trait ListItem: Default {
	fn item_id(&self) -> &str;

	fn set_item_id(&mut self, id: String);
}

macro_rules! impl_list_item {
	($($ty:ty),+ $(,)?) => {
		$(
			impl ListItem for $ty {
				fn item_id(&self) -> &str {
					&self.id
				}

				fn set_item_id(&mut self, id: String) {
					self.id = id;
				}
			}
		)+
	};
}

impl_list_item!(
	VillageData,
	WorkPlanActivity,
	ActivityOccurrence,
	AdhocActivity,
	HouseholdRecord,
	ActionPlan,
);

impl<R: FormRecord> FormController<R> {
	/// Appends a default item with a fresh identifier to the list picked by
	/// `select`, and returns that identifier.
	///
	/// # Examples
	///
	/// ```
	/// use mehis_forms::{FormContext, FormController};
	/// use mehis_models::HsaRegistration;
	///
	/// let mut form = FormController::<HsaRegistration>::new(FormContext::new());
	/// let id = form.add_item(|hsa| &mut hsa.villages).unwrap();
	/// form.update_item(|hsa| &mut hsa.villages, &id, |v| v.name = "Mtsiliza".to_string()).unwrap();
	/// assert_eq!(form.draft().unwrap().villages[0].name, "Mtsiliza");
	/// ```
	pub fn add_item<I: ListItem>(
		&mut self,
		select: impl FnOnce(&mut R) -> &mut Vec<I>,
	) -> FormResult<String> {
		let id = self.context().new_id();
		self.update(|draft| {
			let mut item = I::default();
			item.set_item_id(id.clone());
			select(draft).push(item);
		})?;
		Ok(id)
	}

	/// Removes the item `id` from the list picked by `select`.
	pub fn remove_item<I: ListItem>(
		&mut self,
		select: impl FnOnce(&mut R) -> &mut Vec<I>,
		id: &str,
	) -> FormResult<I> {
		self.update(|draft| {
			let list = select(draft);
			let index = list.iter().position(|item| item.item_id() == id)?;
			Some(list.remove(index))
		})?
		.ok_or_else(|| FormError::ItemNotFound(id.to_string()))
	}

	/// Edits the item `id` in place. The item keeps its identifier whatever
	/// `f` does to it.
	pub fn update_item<I: ListItem, T>(
		&mut self,
		select: impl FnOnce(&mut R) -> &mut Vec<I>,
		id: &str,
		f: impl FnOnce(&mut I) -> T,
	) -> FormResult<T> {
		self.update(|draft| {
			let item = select(draft).iter_mut().find(|item| item.item_id() == id)?;
			let result = f(item);
			item.set_item_id(id.to_string());
			Some(result)
		})?
		.ok_or_else(|| FormError::ItemNotFound(id.to_string()))
	}
}
