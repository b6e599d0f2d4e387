//! Accounts, sign-in and password recovery.

#[cfg(feature = "auth")]
pub use mehis_auth::*;
