//! Base column trait and implementation

use std::fmt::Debug;

/// Trait for table column definitions
///
/// A column names itself, supplies its header cell and renders one cell per
/// row. Rendering never fails: a value the row does not carry renders as
/// [`MISSING`](crate::column::MISSING).
pub trait Column: Debug {
	/// The type of rows this column operates on
	type Row;

	/// Returns the name of this column
	///
	/// Stable identifier, independent of the header wording
	fn name(&self) -> &str;

	/// Returns the header text for this column
	fn header(&self) -> &str;

	/// Renders the column value for the given row
	fn render(&self, row: &Self::Row) -> String;
}

/// A basic column implementation using a function to extract values
///
/// # Example
///
/// ```rust
/// use mehis_models::Hcmc;
/// use mehis_tables::{BaseColumn, Column};
///
/// let name_column = BaseColumn::new("hcmcName", "HCMC Name", |hcmc: &Hcmc| hcmc.hcmc_name.clone());
///
/// let hcmc = Hcmc { hcmc_name: "Kasina HCMC".into(), ..Default::default() };
/// assert_eq!(name_column.header(), "HCMC Name");
/// assert_eq!(name_column.render(&hcmc), "Kasina HCMC");
/// ```
pub struct BaseColumn<R, F>
where
	F: Fn(&R) -> String,
{
	name: String,
	header: String,
	extractor: F,
	_phantom: std::marker::PhantomData<fn(&R)>,
}

impl<R, F> BaseColumn<R, F>
where
	F: Fn(&R) -> String,
{
	/// Creates a new base column
	pub fn new(name: impl Into<String>, header: impl Into<String>, extractor: F) -> Self {
		Self {
			name: name.into(),
			header: header.into(),
			extractor,
			_phantom: std::marker::PhantomData,
		}
	}
}

impl<R, F> Debug for BaseColumn<R, F>
where
	F: Fn(&R) -> String,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BaseColumn")
			.field("name", &self.name)
			.field("header", &self.header)
			.finish_non_exhaustive()
	}
}

impl<R, F> Column for BaseColumn<R, F>
where
	F: Fn(&R) -> String,
{
	type Row = R;

	fn name(&self) -> &str {
		&self.name
	}

	fn header(&self) -> &str {
		&self.header
	}

	fn render(&self, row: &Self::Row) -> String {
		(self.extractor)(row)
	}
}
