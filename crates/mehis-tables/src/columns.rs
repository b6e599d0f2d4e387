//! Standard column sets, one per record kind
//!
//! Header texts are fixed: exports from different devices line up column by
//! column.

mod facility;
mod hsa;
mod inspection;
mod wash;
mod work_plan;

use mehis_models::Record;

use crate::column::{BaseColumn, BoxedColumn, optional_text};
use crate::filter::Filterable;

/// A record kind with a standard column set.
pub trait TableRecord: Record + Filterable {
	/// Columns of the list view and of the CSV export, in order
	fn columns() -> Vec<BoxedColumn<Self>>;
}

/// Builder for a column set over one row type.
pub(crate) struct ColumnSet<R: 'static> {
	columns: Vec<BoxedColumn<R>>,
}

impl<R: Record> ColumnSet<R> {
	/// Starts every set with the record identifier
	pub(crate) fn new() -> Self {
		Self {
			columns: Vec::new(),
		}
		.add("id", "ID", |r| r.id().to_string())
	}

	pub(crate) fn add(
		mut self,
		name: &str,
		header: &str,
		extractor: impl Fn(&R) -> String + 'static,
	) -> Self {
		self.columns.push(Box::new(BaseColumn::new(name, header, extractor)));
		self
	}

	/// Ends every set with the submission stamp
	pub(crate) fn build(self) -> Vec<BoxedColumn<R>> {
		self.add("submittedAt", "Submitted At", |r| optional_text(r.submitted_at()))
			.columns
	}
}
