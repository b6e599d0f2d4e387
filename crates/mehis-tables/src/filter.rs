//! Record filtering for list views and exports

use tracing::debug;

/// The attributes a filter can look at on one record.
///
/// `district`, `facility` and `status` return `None` when a record kind has
/// no such attribute; a filter on a missing attribute passes every record of
/// that kind.
pub trait Filterable {
	/// Texts the free-text search looks through
	fn search_fields(&self) -> Vec<&str>;

	/// District the record belongs to
	fn district(&self) -> Option<&str> {
		None
	}

	/// Health facility the record reports to
	fn facility(&self) -> Option<&str> {
		None
	}

	/// Status label shown in the list view
	fn status(&self) -> Option<&str> {
		None
	}
}

/// Active filters of a list view.
///
/// An unset criterion, an empty one, or a sentinel such as `"All Districts"`
/// passes every record. Set criteria combine by intersection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
	/// Case-insensitive substring over the searchable fields
	pub search: Option<String>,
	/// Exact district name
	pub district: Option<String>,
	/// Case-insensitive substring of the facility name
	pub facility: Option<String>,
	/// Exact status label
	pub status: Option<String>,
}

/// Sentinel prefix of the "no filter" option in a selector.
const ALL_PREFIX: &str = "All ";

fn active(criterion: &Option<String>) -> Option<&str> {
	criterion
		.as_deref()
		.map(str::trim)
		.filter(|c| !c.is_empty() && !c.starts_with(ALL_PREFIX))
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
	haystack.to_lowercase().contains(needle_lower)
}

impl FilterSpec {
	/// A filter that passes everything
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the free-text search
	pub fn search(mut self, text: impl Into<String>) -> Self {
		self.search = Some(text.into());
		self
	}

	/// Sets the district
	pub fn district(mut self, district: impl Into<String>) -> Self {
		self.district = Some(district.into());
		self
	}

	/// Sets the facility
	pub fn facility(mut self, facility: impl Into<String>) -> Self {
		self.facility = Some(facility.into());
		self
	}

	/// Sets the status
	pub fn status(mut self, status: impl Into<String>) -> Self {
		self.status = Some(status.into());
		self
	}

	/// Whether no criterion is in force
	pub fn is_empty(&self) -> bool {
		active(&self.search).is_none()
			&& active(&self.district).is_none()
			&& active(&self.facility).is_none()
			&& active(&self.status).is_none()
	}

	/// Whether `record` satisfies every active criterion
	pub fn matches<R: Filterable>(&self, record: &R) -> bool {
		if let Some(search) = active(&self.search) {
			let needle = search.to_lowercase();
			if !record
				.search_fields()
				.iter()
				.any(|field| contains_ignore_case(field, &needle))
			{
				return false;
			}
		}
		if let Some(district) = active(&self.district)
			&& let Some(actual) = record.district()
			&& actual != district
		{
			return false;
		}
		if let Some(facility) = active(&self.facility)
			&& let Some(actual) = record.facility()
			&& !contains_ignore_case(actual, &facility.to_lowercase())
		{
			return false;
		}
		if let Some(status) = active(&self.status)
			&& let Some(actual) = record.status()
			&& actual != status
		{
			return false;
		}
		true
	}

	/// The records that pass, in their original order
	///
	/// # Examples
	///
	/// ```
	/// use mehis_models::HsaRegistration;
	/// use mehis_tables::FilterSpec;
	///
	/// let hsas = vec![
	///     HsaRegistration { hsa_name: "Chikondi Banda".into(), district: "Dedza".into(), ..Default::default() },
	///     HsaRegistration { hsa_name: "Thoko Banda".into(), district: "Ntcheu".into(), ..Default::default() },
	/// ];
	///
	/// assert_eq!(FilterSpec::new().search("banda").apply(&hsas).len(), 2);
	/// assert_eq!(FilterSpec::new().district("All Districts").apply(&hsas).len(), 2);
	/// let dedza = FilterSpec::new().search("banda").district("Dedza").apply(&hsas);
	/// assert_eq!(dedza[0].hsa_name, "Chikondi Banda");
	/// ```
	pub fn apply<'a, R: Filterable>(&self, records: &'a [R]) -> Vec<&'a R> {
		let kept: Vec<&R> = records.iter().filter(|r| self.matches(*r)).collect();
		debug!(total = records.len(), kept = kept.len(), "filter applied");
		kept
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[derive(Debug, Clone)]
	struct Row {
		name: String,
		district: String,
		facility: String,
	}

	impl Filterable for Row {
		fn search_fields(&self) -> Vec<&str> {
			vec![self.name.as_str()]
		}

		fn district(&self) -> Option<&str> {
			Some(&self.district)
		}

		fn facility(&self) -> Option<&str> {
			Some(&self.facility)
		}
	}

	fn row(name: &str, district: &str, facility: &str) -> Row {
		Row {
			name: name.to_string(),
			district: district.to_string(),
			facility: facility.to_string(),
		}
	}

	#[rstest]
	#[case(FilterSpec::new(), 3)]
	#[case(FilterSpec::new().district("All Districts"), 3)]
	#[case(FilterSpec::new().district(""), 3)]
	#[case(FilterSpec::new().district("Dedza"), 2)]
	#[case(FilterSpec::new().district("dedza"), 0)]
	#[case(FilterSpec::new().facility("kasina"), 1)]
	#[case(FilterSpec::new().search("MWALE"), 2)]
	#[case(FilterSpec::new().search("mwale").district("Dedza"), 1)]
	#[case(FilterSpec::new().status("Finalized"), 3)]
	fn test_criteria(#[case] spec: FilterSpec, #[case] expected: usize) {
		let rows = vec![
			row("Esnart Mwale", "Dedza", "Kasina Health Centre"),
			row("Joseph Mwale", "Ntcheu", "Biriwiri"),
			row("Grace Phiri", "Dedza", "Mayani"),
		];
		assert_eq!(spec.apply(&rows).len(), expected);
	}

	#[test]
	fn test_is_empty_ignores_sentinels() {
		assert!(FilterSpec::new().district("All Districts").status("All Statuses").is_empty());
		assert!(!FilterSpec::new().search("x").is_empty());
	}

	proptest! {
		#[test]
		fn prop_filtered_subset_keeps_order(names in proptest::collection::vec("[a-c]{1,4}", 0..20), needle in "[a-c]{0,2}") {
			let rows: Vec<Row> = names.iter().map(|n| row(n, "Dedza", "")).collect();
			let kept = FilterSpec::new().search(needle.clone()).apply(&rows);
			prop_assert!(kept.len() <= rows.len());
			prop_assert!(kept.iter().all(|r| r.name.contains(&needle)));
			let expected: Vec<&Row> = rows.iter().filter(|r| r.name.contains(&needle)).collect();
			prop_assert_eq!(kept.len(), expected.len());
			for (a, b) in kept.iter().zip(expected) {
				prop_assert!(std::ptr::eq(*a, b));
			}
		}
	}
}
