//! Layered settings.

#[cfg(feature = "conf")]
pub use mehis_conf::*;
