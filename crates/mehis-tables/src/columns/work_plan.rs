use mehis_models::{MonthlyWorkPlan, OccurrenceStatus, WorkPlanActivity};

use super::{ColumnSet, TableRecord};
use crate::column::{BoxedColumn, list, optional_text, text};
use crate::filter::Filterable;

const FINALIZED: &str = "Finalized";
const IN_PROGRESS: &str = "In Progress";

fn report_status(plan: &MonthlyWorkPlan) -> &'static str {
	if plan.report_finalized {
		FINALIZED
	} else {
		IN_PROGRESS
	}
}

/// `"Growth monitoring (2/3)"`: sessions held out of the target.
fn activity_summary(activity: &WorkPlanActivity) -> String {
	let held = activity
		.occurrences
		.iter()
		.filter(|o| {
			matches!(
				o.status,
				Some(OccurrenceStatus::Completed | OccurrenceStatus::CompletedAfterReschedule)
			)
		})
		.count();
	format!("{} ({}/{})", text(&activity.name), held, activity.target_count)
}

impl TableRecord for MonthlyWorkPlan {
	fn columns() -> Vec<BoxedColumn<Self>> {
		ColumnSet::<Self>::new()
			.add("month", "Month", |r| text(&r.month))
			.add("year", "Year", |r| text(&r.year))
			.add("hsaId", "HSA ID", |r| text(&r.hsa_id))
			.add("hsaName", "HSA Name", |r| text(&r.hsa_name))
			.add("district", "District", |r| text(&r.district))
			.add("facility", "Facility", |r| text(&r.facility))
			.add("activities", "Activities", |r| {
				let summaries: Vec<String> = r.activities.iter().map(activity_summary).collect();
				list(&summaries)
			})
			.add("plannedSessions", "Planned Sessions", |r| r.planned_sessions().to_string())
			.add("completedSessions", "Completed Sessions", |r| r.completed_sessions().to_string())
			.add("adhocActivities", "Ad-hoc Activities", |r| {
				let names: Vec<&str> = r.adhoc_activities.iter().map(|a| a.name.as_str()).collect();
				list(&names)
			})
			.add("challenges", "Challenges", |r| optional_text(r.challenges.as_deref()))
			.add("reportStatus", "Report Status", |r| report_status(r).to_string())
			.build()
	}
}

impl Filterable for MonthlyWorkPlan {
	fn search_fields(&self) -> Vec<&str> {
		let mut fields = vec![self.hsa_name.as_str(), self.month.as_str(), self.year.as_str()];
		fields.extend(self.activities.iter().map(|a| a.name.as_str()));
		fields
	}

	fn district(&self) -> Option<&str> {
		Some(&self.district)
	}

	fn facility(&self) -> Option<&str> {
		Some(&self.facility)
	}

	fn status(&self) -> Option<&str> {
		Some(report_status(self))
	}
}
