//! Authentication for MeHIS
//!
//! Users register with their phone number and a password, sign in on the
//! device, and recover access through a short code sent to their phone.
//! Passwords are stored only as salted Argon2id hashes.
//!
//! All state lives in the same [`Store`](mehis_storages::Store) as the
//! records: the user list under `users`, the signed-in user under
//! `currentUser` and the "remember me" number under `remembered_user`.

pub mod error;
pub mod hasher;
pub mod service;

pub use error::{AuthError, Result};
pub use hasher::{Argon2Hasher, PasswordHasher};
pub use service::{AuthService, Registration, normalize_phone};
