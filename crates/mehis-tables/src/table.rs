//! Table trait and the fixed-column implementation

use crate::column::{BoxedColumn, Column};
use crate::columns::TableRecord;

/// A list of rows rendered through an ordered set of columns
pub trait Table {
	/// The type of rows in this table
	type Row: 'static;

	/// Columns in display order
	fn columns(&self) -> &[BoxedColumn<Self::Row>];

	/// Rows in display order
	fn rows(&self) -> &[Self::Row];

	/// Number of rows
	fn total_rows(&self) -> usize {
		self.rows().len()
	}

	/// Header cells, one per column
	fn header(&self) -> Vec<&str> {
		self.columns().iter().map(|c| c.header()).collect()
	}

	/// Cells of one row, one per column
	fn render_row(&self, row: &Self::Row) -> Vec<String> {
		self.columns().iter().map(|c| c.render(row)).collect()
	}

	/// Cells of every row
	fn render_rows(&self) -> Vec<Vec<String>> {
		self.rows().iter().map(|row| self.render_row(row)).collect()
	}
}

/// A table with a fixed, ordered column list
///
/// # Examples
///
/// ```
/// use mehis_models::{Hcmc, YesNo};
/// use mehis_tables::{BaseColumn, SimpleTable, Table};
///
/// let mut table = SimpleTable::new();
/// table.add_column(BaseColumn::new("hcmcName", "HCMC Name", |h: &Hcmc| h.hcmc_name.clone()));
/// table.add_column(BaseColumn::new("isFormed", "Formed", |h: &Hcmc| h.is_formed.to_string()));
/// table.add_row(Hcmc { hcmc_name: "Kasina HCMC".into(), is_formed: YesNo::Yes, ..Default::default() });
///
/// assert_eq!(table.header(), vec!["HCMC Name", "Formed"]);
/// assert_eq!(table.render_rows(), vec![vec!["Kasina HCMC".to_string(), "Yes".to_string()]]);
/// ```
#[derive(Debug)]
pub struct SimpleTable<R: 'static> {
	columns: Vec<BoxedColumn<R>>,
	rows: Vec<R>,
}

impl<R: 'static> SimpleTable<R> {
	/// Creates an empty table with no columns
	pub fn new() -> Self {
		Self {
			columns: Vec::new(),
			rows: Vec::new(),
		}
	}

	/// Creates a table over `rows` with no columns yet
	pub fn with_rows(rows: Vec<R>) -> Self {
		Self {
			columns: Vec::new(),
			rows,
		}
	}

	/// Appends a column
	pub fn add_column(&mut self, column: impl Column<Row = R> + 'static) {
		self.columns.push(Box::new(column));
	}

	/// Appends an already boxed column
	pub fn add_boxed_column(&mut self, column: BoxedColumn<R>) {
		self.columns.push(column);
	}

	/// Appends a row
	pub fn add_row(&mut self, row: R) {
		self.rows.push(row);
	}
}

impl<R: TableRecord> SimpleTable<R> {
	/// A table over `rows` with the standard column set of their kind
	///
	/// ```
	/// use mehis_models::Hcmc;
	/// use mehis_tables::{SimpleTable, Table};
	///
	/// let table = SimpleTable::for_records(vec![Hcmc::default()]);
	/// assert_eq!(table.header()[0], "ID");
	/// assert_eq!(table.total_rows(), 1);
	/// ```
	pub fn for_records(rows: Vec<R>) -> Self {
		Self {
			columns: R::columns(),
			rows,
		}
	}
}

impl<R: 'static> Default for SimpleTable<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: 'static> Table for SimpleTable<R> {
	type Row = R;

	fn columns(&self) -> &[BoxedColumn<R>] {
		&self.columns
	}

	fn rows(&self) -> &[R] {
		&self.rows
	}
}
