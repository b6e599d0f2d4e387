//! Tabular review, filtering and CSV export of MeHIS records
//!
//! Every record kind has a fixed, ordered column set with a literal header
//! row (see [`columns`]). A [`SimpleTable`] binds those columns to a list of
//! records and renders each row to display strings: nested values collapse
//! into one cell (a supply item renders as `"Yes (2021)"`) and missing
//! optional values render as [`MISSING`].
//!
//! [`FilterSpec`] narrows a collection before it is shown or exported, and
//! [`CsvExporter`] writes the rendered table as RFC 4180 CSV.
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Records] --> B[FilterSpec]
//!     B --> C[SimpleTable]
//!     D[TableRecord::columns] --> C
//!     C --> E[CsvExporter]
//!     E --> F["&lt;label&gt;_&lt;date&gt;.csv"]
//! ```
//!
//! # Example
//!
//! ```rust
//! use mehis_models::WaterPoint;
//! use mehis_tables::{CsvExporter, FilterSpec};
//!
//! let points = vec![
//!     WaterPoint { name: "Kauma borehole".into(), district: "Lilongwe".into(), ..Default::default() },
//!     WaterPoint { name: "Mtsiliza well".into(), district: "Dedza".into(), ..Default::default() },
//! ];
//!
//! let visible = FilterSpec::new().district("Lilongwe").apply(&points);
//! assert_eq!(visible.len(), 1);
//!
//! let csv = CsvExporter::new().export_records(&visible).unwrap();
//! assert_eq!(csv.lines().count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod columns;
pub mod error;
pub mod export;
pub mod filter;
pub mod table;

// Re-exports for convenience
pub use column::{BaseColumn, BoxedColumn, Column, MISSING};
pub use columns::TableRecord;
pub use error::{Result, TableError};
pub use export::CsvExporter;
pub use filter::{FilterSpec, Filterable};
pub use table::{SimpleTable, Table};
