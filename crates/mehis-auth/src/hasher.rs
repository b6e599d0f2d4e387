//! Password hashing

use crate::error::{AuthError, Result};

/// Password hasher trait
///
/// Implement this trait to swap the hashing algorithm.
///
/// # Examples
///
/// ```
/// use mehis_auth::{Argon2Hasher, PasswordHasher};
///
/// let hasher = Argon2Hasher::new();
/// let password = "chipatala7";
///
/// // Hash the password
/// let hash = hasher.hash(password).unwrap();
///
/// // Verify the password
/// assert!(hasher.verify(password, &hash).unwrap());
/// assert!(!hasher.verify("wrong_password", &hash).unwrap());
/// ```
pub trait PasswordHasher: Send + Sync {
	/// Hashes a password
	///
	/// # Returns
	///
	/// A self-describing PHC string carrying the algorithm, parameters and
	/// salt alongside the digest.
	fn hash(&self, password: &str) -> Result<String>;

	/// Verifies a password against a hash
	///
	/// # Returns
	///
	/// `Ok(true)` if the password matches, `Ok(false)` if it doesn't,
	/// or an error if the stored hash cannot be parsed.
	fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}

/// Argon2id password hasher with a fresh random salt per hash
pub struct Argon2Hasher;

impl Argon2Hasher {
	/// Creates a new Argon2 password hasher
	pub fn new() -> Self {
		Self
	}
}

impl Default for Argon2Hasher {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for Argon2Hasher {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("Argon2Hasher")
	}
}

impl PasswordHasher for Argon2Hasher {
	fn hash(&self, password: &str) -> Result<String> {
		use argon2::{
			Argon2,
			password_hash::{PasswordHasher as _, SaltString},
		};
		use rand::RngCore;

		let mut salt_bytes = [0u8; 16];
		rand::thread_rng().fill_bytes(&mut salt_bytes);

		let salt =
			SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::Hashing(e.to_string()))?;

		Argon2::default()
			.hash_password(password.as_bytes(), &salt)
			.map(|hash| hash.to_string())
			.map_err(|e| AuthError::Hashing(e.to_string()))
	}

	fn verify(&self, password: &str, hash: &str) -> Result<bool> {
		use argon2::{
			Argon2,
			password_hash::{PasswordHash, PasswordVerifier},
		};

		let parsed_hash = PasswordHash::new(hash).map_err(|e| AuthError::Hashing(e.to_string()))?;

		Ok(Argon2::default()
			.verify_password(password.as_bytes(), &parsed_hash)
			.is_ok())
	}
}
