//! The `Record` trait shared by every persisted entity.

use mehis_storages::Identifiable;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::EntityKind;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
	pub lat: f64,
	pub lng: f64,
}

impl Coordinates {
	pub fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}
}

/// A persisted entity belonging to one collection.
///
/// The identifier is empty until the record is first committed.
pub trait Record:
	Identifiable + Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + 'static
{
	const KIND: EntityKind;

	fn set_id(&mut self, id: String);

	fn submitted_at(&self) -> Option<&str>;

	fn set_submitted_at(&mut self, timestamp: String);

	/// Slot for the coordinates captured when the form is opened, for kinds
	/// that carry one.
	fn coordinates_mut(&mut self) -> Option<&mut Option<Coordinates>> {
		None
	}
}

/// Implements [`Identifiable`] and [`Record`] for a struct with `id` and
/// `submitted_at` fields, and optionally a `coords` slot.
macro_rules! impl_record {
	(@base $ty:ty, $kind:expr, { $($extra:tt)* }) => {
		impl mehis_storages::Identifiable for $ty {
			fn id(&self) -> &str {
				&self.id
			}
		}

		impl $crate::Record for $ty {
			const KIND: $crate::EntityKind = $kind;

			fn set_id(&mut self, id: String) {
				self.id = id;
			}

			fn submitted_at(&self) -> Option<&str> {
				self.submitted_at.as_deref()
			}

			fn set_submitted_at(&mut self, timestamp: String) {
				self.submitted_at = Some(timestamp);
			}

			$($extra)*
		}
	};
	($ty:ty, $kind:expr, coords) => {
		$crate::record::impl_record!(@base $ty, $kind, {
			fn coordinates_mut(&mut self) -> Option<&mut Option<$crate::Coordinates>> {
				Some(&mut self.coords)
			}
		});
	};
	($ty:ty, $kind:expr) => {
		$crate::record::impl_record!(@base $ty, $kind, {});
	};
}

pub(crate) use impl_record;
