//! CSV export

use chrono::NaiveDate;
use mehis_models::EntityKind;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::columns::TableRecord;
use crate::error::{Result, TableError};
use crate::table::{SimpleTable, Table};

/// Writes tables as RFC 4180 CSV: header row first, one line per row,
/// fields quoted whenever they contain the delimiter, a quote or a line
/// break.
#[derive(Debug, Clone)]
pub struct CsvExporter {
	delimiter: u8,
}

impl Default for CsvExporter {
	fn default() -> Self {
		Self { delimiter: b',' }
	}
}

impl CsvExporter {
	/// A comma-separated exporter
	pub fn new() -> Self {
		Self::default()
	}

	/// Uses another field delimiter
	pub fn with_delimiter(mut self, delimiter: u8) -> Self {
		self.delimiter = delimiter;
		self
	}

	/// Renders `table` as CSV text.
	///
	/// Fails with [`TableError::NothingToExport`] when the table has no rows.
	pub fn export<T: Table>(&self, table: &T) -> Result<String> {
		if table.total_rows() == 0 {
			return Err(TableError::NothingToExport);
		}

		let mut writer = csv::WriterBuilder::new()
			.delimiter(self.delimiter)
			.terminator(csv::Terminator::CRLF)
			.from_writer(Vec::new());
		writer.write_record(table.header())?;
		for row in table.render_rows() {
			writer.write_record(&row)?;
		}
		let bytes = writer.into_inner().map_err(|e| e.into_error())?;
		debug!(rows = table.total_rows(), bytes = bytes.len(), "table encoded as csv");
		Ok(String::from_utf8(bytes)?)
	}

	/// Renders records with the standard column set of their kind.
	///
	/// ```
	/// use mehis_models::Hcmc;
	/// use mehis_tables::{CsvExporter, TableError};
	///
	/// let exporter = CsvExporter::new();
	/// let hcmc = Hcmc { hcmc_name: "Kasina, Dedza".into(), ..Default::default() };
	/// let csv = exporter.export_records(&[&hcmc]).unwrap();
	/// assert!(csv.contains("\"Kasina, Dedza\""));
	///
	/// let none: [&Hcmc; 0] = [];
	/// assert!(matches!(exporter.export_records(&none), Err(TableError::NothingToExport)));
	/// ```
	pub fn export_records<R: TableRecord>(&self, records: &[&R]) -> Result<String> {
		let rows = records.iter().map(|r| (*r).clone()).collect();
		self.export(&SimpleTable::<R>::for_records(rows))
	}

	/// Export file name for `kind` on `date`: `<label>_<YYYY-MM-DD>.csv`.
	///
	/// ```
	/// use chrono::NaiveDate;
	/// use mehis_models::EntityKind;
	/// use mehis_tables::CsvExporter;
	///
	/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
	/// assert_eq!(
	///     CsvExporter::file_name(EntityKind::WaterPoint, date),
	///     "Water_Points_2024-03-15.csv"
	/// );
	/// ```
	pub fn file_name(kind: EntityKind, date: NaiveDate) -> String {
		format!("{}_{}.csv", kind.label(), date.format("%Y-%m-%d"))
	}

	/// Writes the export of `records` into `dir`, creating it if needed, and
	/// returns the path of the new file.
	pub fn write_to_dir<R: TableRecord>(
		&self,
		dir: &Path,
		records: &[&R],
		date: NaiveDate,
	) -> Result<PathBuf> {
		let contents = self.export_records(records)?;
		fs::create_dir_all(dir)?;
		let path = dir.join(Self::file_name(R::KIND, date));
		fs::write(&path, contents)?;
		info!(kind = %R::KIND, records = records.len(), path = %path.display(), "export written");
		Ok(path)
	}
}
