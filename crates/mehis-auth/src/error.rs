//! Authentication errors

use mehis_storages::StorageError;
use mehis_validators::ValidationError;
use thiserror::Error;

/// Why a registration, sign-in or recovery step was refused.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Error)]
pub enum AuthError {
	#[error("{0}")]
	Validation(#[from] ValidationError),

	#[error("An account with this number already exists.")]
	DuplicatePhone,

	#[error("Invalid phone number or password.")]
	InvalidCredentials,

	#[error("User not found.")]
	UserNotFound,

	#[error("No recovery code has been requested for this number.")]
	NoRecoveryPending,

	#[error("Invalid recovery code.")]
	InvalidRecoveryCode,

	#[error("Password hashing failed: {0}")]
	Hashing(String),

	#[error(transparent)]
	Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, AuthError>;
