//! Record schema: the eight entity kinds, users and closed catalogs.

pub use mehis_models::*;
