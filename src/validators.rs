//! Field validation rules.

pub use mehis_validators::*;
