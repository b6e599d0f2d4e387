//! Column definitions and cell formatting

mod base;

pub use base::{BaseColumn, Column};

use std::fmt::Display;

/// Cell text for a value the record does not carry.
pub const MISSING: &str = "N/A";

/// A column over rows of type `R`, boxed so that a column set can mix
/// extractors.
pub type BoxedColumn<R> = Box<dyn Column<Row = R>>;

/// Free text, or [`MISSING`] when blank.
pub(crate) fn text(value: &str) -> String {
	let value = value.trim();
	if value.is_empty() {
		MISSING.to_string()
	} else {
		value.to_string()
	}
}

pub(crate) fn optional<T: Display>(value: Option<T>) -> String {
	value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

pub(crate) fn optional_text(value: Option<&str>) -> String {
	text(value.unwrap_or_default())
}

/// Joins a list into one cell.
pub(crate) fn list<T: AsRef<str>>(values: &[T]) -> String {
	let joined = values
		.iter()
		.map(AsRef::as_ref)
		.filter(|v| !v.trim().is_empty())
		.collect::<Vec<_>>()
		.join("; ");
	text(&joined)
}

/// A catalog answer that may be `"Other"` followed by a free-text entry.
pub(crate) fn with_other(value: &str, other: Option<&str>) -> String {
	match other.map(str::trim) {
		Some(other) if value == mehis_models::catalogs::OTHER && !other.is_empty() => {
			format!("{} ({})", value, other)
		}
		_ => text(value),
	}
}
