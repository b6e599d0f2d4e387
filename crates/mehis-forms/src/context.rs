//! Context shared by every form: who is signed in, what day it is, and how
//! new identifiers are minted.

use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};
use mehis_models::User;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of identifiers for new records and list items.
pub trait IdGenerator: Send + Sync {
	fn generate(&self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
	fn generate(&self) -> String {
		uuid::Uuid::new_v4().to_string()
	}
}

/// Deterministic identifiers `<prefix>1`, `<prefix>2`, ...
///
/// # Examples
///
/// ```
/// use mehis_forms::{IdGenerator, SequentialIdGenerator};
///
/// let ids = SequentialIdGenerator::new("occ-");
/// assert_eq!(ids.generate(), "occ-1");
/// assert_eq!(ids.generate(), "occ-2");
/// ```
#[derive(Debug)]
pub struct SequentialIdGenerator {
	prefix: String,
	next: AtomicU64,
}

impl SequentialIdGenerator {
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			next: AtomicU64::new(1),
		}
	}
}

impl IdGenerator for SequentialIdGenerator {
	fn generate(&self) -> String {
		format!("{}{}", self.prefix, self.next.fetch_add(1, Ordering::Relaxed))
	}
}

/// Where "now" comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
	System,
	Fixed(DateTime<Utc>),
}

/// Ambient inputs for a form session.
///
/// Cloning is cheap; the id generator is shared.
#[derive(Clone)]
pub struct FormContext {
	current_user: Option<User>,
	clock: Clock,
	ids: Arc<dyn IdGenerator>,
}

impl fmt::Debug for FormContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormContext")
			.field("current_user", &self.current_user.as_ref().map(|u| &u.id))
			.field("clock", &self.clock)
			.finish_non_exhaustive()
	}
}

impl Default for FormContext {
	fn default() -> Self {
		Self::new()
	}
}

impl FormContext {
	pub fn new() -> Self {
		Self {
			current_user: None,
			clock: Clock::System,
			ids: Arc::new(UuidGenerator),
		}
	}

	pub fn with_user(mut self, user: User) -> Self {
		self.current_user = Some(user);
		self
	}

	pub fn with_clock(mut self, clock: Clock) -> Self {
		self.clock = clock;
		self
	}

	/// Pins "now" to `now`; "today" becomes its calendar date.
	pub fn at(self, now: DateTime<Utc>) -> Self {
		self.with_clock(Clock::Fixed(now))
	}

	pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
		self.ids = ids;
		self
	}

	pub fn current_user(&self) -> Option<&User> {
		self.current_user.as_ref()
	}

	pub fn now(&self) -> DateTime<Utc> {
		match self.clock {
			Clock::System => Utc::now(),
			Clock::Fixed(now) => now,
		}
	}

	pub fn today(&self) -> NaiveDate {
		match self.clock {
			Clock::System => Local::now().date_naive(),
			Clock::Fixed(now) => now.date_naive(),
		}
	}

	/// Submission stamp, RFC 3339 with millisecond precision.
	pub fn timestamp(&self) -> String {
		self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
	}

	pub fn new_id(&self) -> String {
		self.ids.generate()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn test_fixed_clock() {
		let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();
		let ctx = FormContext::new().at(now);
		assert_eq!(ctx.today(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
		assert_eq!(ctx.timestamp(), "2024-03-15T08:30:00.000Z");
	}

	#[test]
	fn test_uuid_ids_are_unique() {
		let ctx = FormContext::new();
		assert_ne!(ctx.new_id(), ctx.new_id());
	}
}
