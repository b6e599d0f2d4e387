//! Table and export errors

use thiserror::Error;

/// Errors raised while rendering or exporting a table
#[derive(Debug, Error)]
pub enum TableError {
	/// The filtered collection is empty, so no file is produced
	#[error("No data to export")]
	NothingToExport,

	/// CSV encoding failed
	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),

	/// Writing the export file failed
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// The encoded output was not valid UTF-8
	#[error("Encoding error: {0}")]
	Encoding(#[from] std::string::FromUtf8Error),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
