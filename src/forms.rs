//! Form drafts: editing, cascades, validation and commit.

#[cfg(feature = "forms")]
pub use mehis_forms::*;
