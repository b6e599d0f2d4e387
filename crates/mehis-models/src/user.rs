//! Application users.

use mehis_storages::Identifiable;
use serde::{Deserialize, Serialize};

use crate::choices::UserRole;

/// A registered user. Users are stored under `users`; the signed-in user is
/// mirrored under `currentUser`.
///
/// Passwords are never stored: `password_hash` holds a PHC-format salted hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
	pub id: String,
	pub full_name: String,
	/// `+265` followed by nine digits
	pub phone_number: String,
	pub district: String,
	pub role: UserRole,
	pub password_hash: String,
}

impl User {
	pub fn first_name(&self) -> &str {
		self.full_name.split_whitespace().next().unwrap_or_default()
	}
}

impl Identifiable for User {
	fn id(&self) -> &str {
		&self.id
	}
}

/// Store keys used by the authentication boundary.
pub mod keys {
	pub const USERS: &str = "users";
	pub const CURRENT_USER: &str = "currentUser";
	pub const REMEMBERED_USER: &str = "remembered_user";
}
