//! Record lists, filters and CSV export.

#[cfg(feature = "tables")]
pub use mehis_tables::*;
