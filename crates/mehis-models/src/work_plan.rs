//! Monthly work plans and their performance reports.

use serde::{Deserialize, Serialize};

use crate::EntityKind;
use crate::choices::OccurrenceStatus;
use crate::record::impl_record;

/// One scheduled session of a planned activity.
///
/// The report fields (`status` onwards) stay empty while planning. Once a
/// status is reported:
///
/// - `Completed after reschedule` carries an `actual_date`
/// - `Not done` carries a `reason` and never an `achievement`
/// - every other status may carry an `achievement`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityOccurrence {
	pub id: String,
	pub location: String,
	pub start_date: String,
	pub end_date: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<OccurrenceStatus>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub achievement: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reason: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub actual_date: Option<String>,
}

/// A planned activity. `occurrences.len()` always equals `target_count`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkPlanActivity {
	pub id: String,
	pub name: String,
	pub target_count: u32,
	pub occurrences: Vec<ActivityOccurrence>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub resources_required: Option<String>,
}

/// An unplanned activity added while reporting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdhocActivity {
	pub id: String,
	pub name: String,
	pub start_date: String,
	pub end_date: String,
	pub achievement: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyWorkPlan {
	pub id: String,
	/// Full English month name, e.g. `"March"`
	pub month: String,
	/// Four-digit year
	pub year: String,
	pub hsa_id: String,
	pub hsa_name: String,
	pub district: String,
	pub facility: String,
	pub activities: Vec<WorkPlanActivity>,
	pub adhoc_activities: Vec<AdhocActivity>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub challenges: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub submitted_at: Option<String>,
	pub report_finalized: bool,
}

impl MonthlyWorkPlan {
	pub fn activity(&self, id: &str) -> Option<&WorkPlanActivity> {
		self.activities.iter().find(|a| a.id == id)
	}

	pub fn activity_mut(&mut self, id: &str) -> Option<&mut WorkPlanActivity> {
		self.activities.iter_mut().find(|a| a.id == id)
	}

	/// Sessions planned across all activities.
	pub fn planned_sessions(&self) -> usize {
		self.activities.iter().map(|a| a.occurrences.len()).sum()
	}

	/// Sessions whose reported status counts as done.
	pub fn completed_sessions(&self) -> usize {
		self.activities
			.iter()
			.flat_map(|a| a.occurrences.iter())
			.filter(|o| {
				matches!(
					o.status,
					Some(OccurrenceStatus::Completed | OccurrenceStatus::CompletedAfterReschedule)
				)
			})
			.count()
	}
}

impl_record!(MonthlyWorkPlan, EntityKind::WorkPlan);
