//! The authentication boundary over the user collection.

use mehis_models::catalogs::DISTRICTS;
use mehis_models::user::keys::{CURRENT_USER, REMEMBERED_USER, USERS};
use mehis_models::{User, UserRole};
use mehis_storages::{Repository, Store};
use mehis_validators::{
	ChoiceValidator, DEFAULT_COUNTRY_PREFIX, PasswordComplexityValidator, PasswordMatchValidator,
	PhoneNumberValidator, RequiredValidator, Validator,
};
use parking_lot::Mutex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{AuthError, Result};
use crate::hasher::{Argon2Hasher, PasswordHasher};

/// What a new user enters on the registration screen.
#[derive(Clone, Default)]
pub struct Registration {
	pub full_name: String,
	/// Either the full `+265…` number or the nine local digits
	pub phone_number: String,
	pub district: String,
	pub role: UserRole,
	pub password: String,
	pub confirm_password: String,
}

impl std::fmt::Debug for Registration {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registration")
			.field("full_name", &self.full_name)
			.field("phone_number", &self.phone_number)
			.field("district", &self.district)
			.field("role", &self.role)
			.finish_non_exhaustive()
	}
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RememberedUser {
	phone_number: String,
}

/// Expands nine local digits to the full international number.
///
/// Anything else is returned trimmed, for the phone rule to judge.
///
/// ```
/// use mehis_auth::normalize_phone;
///
/// assert_eq!(normalize_phone("991234567"), "+265991234567");
/// assert_eq!(normalize_phone(" +265991234567 "), "+265991234567");
/// assert_eq!(normalize_phone("0991"), "0991");
/// ```
pub fn normalize_phone(input: &str) -> String {
	let trimmed = input.trim();
	if trimmed.len() == 9 && trimmed.chars().all(|c| c.is_ascii_digit()) {
		format!("{}{}", DEFAULT_COUNTRY_PREFIX, trimmed)
	} else {
		trimmed.to_string()
	}
}

/// Registration, sign-in, the signed-in user and password recovery.
///
/// The signed-in user is kept under `currentUser` without its password
/// hash. Recovery codes live in memory only and are consumed by a
/// successful reset.
///
/// # Examples
///
/// ```
/// use mehis_auth::{AuthService, Registration};
/// use mehis_storages::{MemoryStorage, Store};
/// use std::sync::Arc;
///
/// let auth = AuthService::new(Store::new(Arc::new(MemoryStorage::new())));
/// auth.register(Registration {
///     full_name: "Thoko Phiri".into(),
///     phone_number: "991234567".into(),
///     district: "Dedza".into(),
///     password: "chipatala7".into(),
///     confirm_password: "chipatala7".into(),
///     ..Default::default()
/// })
/// .unwrap();
///
/// let user = auth.login("+265991234567", "chipatala7", true).unwrap();
/// assert_eq!(user.first_name(), "Thoko");
/// assert_eq!(auth.remembered_phone().as_deref(), Some("+265991234567"));
/// assert!(auth.login("+265991234567", "wrong-pass1", false).is_err());
/// ```
pub struct AuthService {
	store: Store,
	users: Repository<User>,
	hasher: Arc<dyn PasswordHasher>,
	pending_recovery: Mutex<HashMap<String, String>>,
}

impl AuthService {
	/// A service hashing with Argon2id
	pub fn new(store: Store) -> Self {
		Self::with_hasher(store, Arc::new(Argon2Hasher::new()))
	}

	pub fn with_hasher(store: Store, hasher: Arc<dyn PasswordHasher>) -> Self {
		let users = Repository::new(store.clone(), USERS);
		Self {
			store,
			users,
			hasher,
			pending_recovery: Mutex::new(HashMap::new()),
		}
	}

	/// Every registered user, in registration order.
	pub fn users(&self) -> Vec<User> {
		self.users.all()
	}

	pub fn find_by_phone(&self, phone: &str) -> Option<User> {
		let phone = normalize_phone(phone);
		self.users.all().into_iter().find(|u| u.phone_number == phone)
	}

	/// Creates an account. The new user is not signed in.
	///
	/// Checks run in order: required fields and phone format, password
	/// complexity, confirmation, then uniqueness of the phone number.
	pub fn register(&self, registration: Registration) -> Result<User> {
		let phone = normalize_phone(&registration.phone_number);

		RequiredValidator::new("Full Name").validate(registration.full_name.trim())?;
		RequiredValidator::new("Phone Number").validate(phone.as_str())?;
		PhoneNumberValidator::new().validate(phone.as_str())?;
		RequiredValidator::new("District").validate(registration.district.as_str())?;
		ChoiceValidator::new("District", DISTRICTS).validate(registration.district.as_str())?;
		PasswordComplexityValidator::new().validate(registration.password.as_str())?;
		PasswordMatchValidator::new(registration.password.as_str())
			.validate(registration.confirm_password.as_str())?;

		if self.find_by_phone(&phone).is_some() {
			return Err(AuthError::DuplicatePhone);
		}

		let user = User {
			id: uuid::Uuid::new_v4().to_string(),
			full_name: registration.full_name.trim().to_string(),
			phone_number: phone,
			district: registration.district,
			role: registration.role,
			password_hash: self.hasher.hash(&registration.password)?,
		};
		self.users.upsert(user.clone())?;
		info!(user = %user.id, role = %user.role, "user registered");
		Ok(user)
	}

	/// Signs a user in and makes them the current user.
	///
	/// With `remember_me` the phone number is kept for the next sign-in;
	/// without it any remembered number is forgotten.
	pub fn login(&self, phone: &str, password: &str, remember_me: bool) -> Result<User> {
		let user = self.find_by_phone(phone).ok_or(AuthError::InvalidCredentials)?;
		match self.hasher.verify(password, &user.password_hash) {
			Ok(true) => {}
			Ok(false) => return Err(AuthError::InvalidCredentials),
			Err(e) => {
				warn!(user = %user.id, error = %e, "stored password hash is unreadable");
				return Err(AuthError::InvalidCredentials);
			}
		}

		if remember_me {
			self.store.set(
				REMEMBERED_USER,
				&RememberedUser {
					phone_number: user.phone_number.clone(),
				},
			)?;
		} else {
			self.store.remove(REMEMBERED_USER)?;
		}

		let signed_in = User {
			password_hash: String::new(),
			..user.clone()
		};
		self.store.set(CURRENT_USER, &Some(signed_in))?;
		info!(user = %user.id, remember_me, "user signed in");
		Ok(user)
	}

	pub fn logout(&self) -> Result<()> {
		self.store.set(CURRENT_USER, &None::<User>)?;
		debug!("user signed out");
		Ok(())
	}

	/// The signed-in user, if any.
	pub fn current_user(&self) -> Option<User> {
		self.store.get(CURRENT_USER, None)
	}

	/// Phone number saved by the last "remember me" sign-in.
	pub fn remembered_phone(&self) -> Option<String> {
		let remembered: RememberedUser = self.store.get(REMEMBERED_USER, RememberedUser::default());
		Some(remembered.phone_number).filter(|p| !p.is_empty())
	}

	/// Issues a four-digit recovery code for a registered number.
	///
	/// The code is returned for delivery to the user; a new request replaces
	/// any earlier code for the same number.
	pub fn request_recovery(&self, phone: &str) -> Result<String> {
		let user = self.find_by_phone(phone).ok_or(AuthError::UserNotFound)?;
		let code = rand::thread_rng().gen_range(1000..=9999).to_string();
		self.pending_recovery
			.lock()
			.insert(user.phone_number.clone(), code.clone());
		info!(user = %user.id, "password recovery requested");
		Ok(code)
	}

	/// Sets a new password once the recovery code is confirmed.
	pub fn reset_password(
		&self,
		phone: &str,
		code: &str,
		new_password: &str,
		confirm_password: &str,
	) -> Result<()> {
		let phone = normalize_phone(phone);
		{
			let pending = self.pending_recovery.lock();
			let expected = pending.get(&phone).ok_or(AuthError::NoRecoveryPending)?;
			if expected != code.trim() {
				return Err(AuthError::InvalidRecoveryCode);
			}
		}
		PasswordComplexityValidator::new().validate(new_password)?;
		PasswordMatchValidator::new(new_password).validate(confirm_password)?;

		let mut user = self.find_by_phone(&phone).ok_or(AuthError::UserNotFound)?;
		user.password_hash = self.hasher.hash(new_password)?;
		self.users.upsert(user.clone())?;
		self.pending_recovery.lock().remove(&phone);
		info!(user = %user.id, "password reset");
		Ok(())
	}
}

impl std::fmt::Debug for AuthService {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AuthService")
			.field("users", &self.users.key())
			.field("pending_recovery", &self.pending_recovery.lock().len())
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("881234567", "+265881234567")]
	#[case("+265881234567", "+265881234567")]
	#[case("88123456", "88123456")]
	#[case("88 1234567", "88 1234567")]
	fn test_normalize_phone(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(normalize_phone(input), expected);
	}

	#[test]
	fn test_registration_debug_hides_passwords() {
		let registration = Registration {
			password: "chipatala7".to_string(),
			confirm_password: "chipatala7".to_string(),
			..Default::default()
		};
		assert!(!format!("{:?}", registration).contains("chipatala7"));
	}
}
