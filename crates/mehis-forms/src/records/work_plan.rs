use chrono::Datelike;
use mehis_models::catalogs::MONTH_NAMES;
use mehis_models::{
	ActivityOccurrence, AdhocActivity, MonthlyWorkPlan, OccurrenceStatus, Repository,
	WorkPlanActivity,
};
use mehis_validators::{DateRangeValidator, PositiveNumberValidator, Validator, WorkPlanDateValidator};

use super::{FormRecord, require_some};
use crate::context::FormContext;
use crate::controller::FormController;
use crate::errors::{FormError, FormErrors, FormResult};

/// Upper bound on an activity's monthly target.
pub const MAX_TARGET_COUNT: u32 = 1000;

/// Reads a target count as typed by the user.
///
/// Anything that is not a non-negative number counts as zero; fractions are
/// truncated.
fn parse_target(raw: &str) -> u32 {
	match raw.trim().parse::<f64>() {
		Ok(value) if value.is_finite() && value > 0.0 => value.min(MAX_TARGET_COUNT as f64) as u32,
		_ => 0,
	}
}

impl FormRecord for MonthlyWorkPlan {
	fn blank(ctx: &FormContext) -> Self {
		let mut plan = MonthlyWorkPlan {
			year: ctx.today().year().to_string(),
			..Default::default()
		};
		if let Some(user) = ctx.current_user() {
			plan.hsa_id = user.id.clone();
			plan.hsa_name = user.full_name.clone();
			plan.district = user.district.clone();
		}
		plan
	}

	fn cascade(&mut self, ctx: &FormContext) {
		for activity in &mut self.activities {
			activity.target_count = activity.target_count.min(MAX_TARGET_COUNT);
			let target = activity.target_count as usize;
			activity.occurrences.truncate(target);
			while activity.occurrences.len() < target {
				activity.occurrences.push(ActivityOccurrence {
					id: ctx.new_id(),
					..Default::default()
				});
			}

			for occurrence in &mut activity.occurrences {
				if occurrence.status == Some(OccurrenceStatus::NotDone) {
					occurrence.achievement = None;
				} else {
					occurrence.reason = None;
				}
				if occurrence.status != Some(OccurrenceStatus::CompletedAfterReschedule) {
					occurrence.actual_date = None;
				}
			}
		}
	}

	fn clean(&self, _ctx: &FormContext, errors: &mut FormErrors) {
		errors.require("month", "Month", &self.month);
		if !self.month.is_empty() && !MONTH_NAMES.contains(&self.month.as_str()) {
			errors.add("month", format!("'{}' is not a month", self.month));
		}
		errors.require("year", "Year", &self.year);
		if !self.year.is_empty() && !(self.year.len() == 4 && self.year.bytes().all(|b| b.is_ascii_digit())) {
			errors.add("year", "Year must have four digits");
		}
		errors.require("facility", "Facility", &self.facility);

		let in_month = WorkPlanDateValidator::new(self.month.as_str(), self.year.as_str());
		let target_rule = PositiveNumberValidator::new("Monthly Target");

		for (i, activity) in self.activities.iter().enumerate() {
			errors.require(format!("act_{}_name", i), "Activity Name", &activity.name);
			errors.check(
				format!("act_{}_target", i),
				target_rule.validate(&(activity.target_count as f64)),
			);

			for (j, occurrence) in activity.occurrences.iter().enumerate() {
				let key = |field: &str| format!("act_{}_occ_{}_{}", i, j, field);
				errors.check(
					key("range"),
					DateRangeValidator::new(occurrence.start_date.as_str())
						.validate(occurrence.end_date.as_str()),
				);
				errors.check_labelled(key("start"), "Start Date", in_month.validate(occurrence.start_date.as_str()));
				errors.check_labelled(key("end"), "End Date", in_month.validate(occurrence.end_date.as_str()));

				match occurrence.status {
					Some(OccurrenceStatus::CompletedAfterReschedule) => errors.require(
						key("actual"),
						"Actual Date",
						occurrence.actual_date.as_deref().unwrap_or_default(),
					),
					Some(OccurrenceStatus::NotDone) => errors.require(
						key("reason"),
						"Reason",
						occurrence.reason.as_deref().unwrap_or_default(),
					),
					Some(_) => {}
					None if self.report_finalized => {
						require_some(errors, key("status"), OccurrenceStatus::LABEL, &occurrence.status)
					}
					None => {}
				}
			}
		}

		for (i, adhoc) in self.adhoc_activities.iter().enumerate() {
			errors.require(format!("adhoc_{}_name", i), "Activity Name", &adhoc.name);
			errors.check(
				format!("adhoc_{}_range", i),
				DateRangeValidator::new(adhoc.start_date.as_str()).validate(adhoc.end_date.as_str()),
			);
		}
	}
}

/// Planning and reporting operations for monthly work plans.
impl FormController<MonthlyWorkPlan> {
	pub fn add_activity(&mut self) -> FormResult<String> {
		self.add_item(|plan| &mut plan.activities)
	}

	pub fn remove_activity(&mut self, id: &str) -> FormResult<WorkPlanActivity> {
		self.remove_item(|plan| &mut plan.activities, id)
	}

	pub fn set_activity_name(&mut self, id: &str, name: impl Into<String>) -> FormResult<()> {
		let name = name.into();
		self.update_item(|plan| &mut plan.activities, id, |activity| activity.name = name)
	}

	/// Sets an activity's monthly target from raw user input and resizes its
	/// occurrence list to match.
	///
	/// Surviving occurrences keep their identifiers and content; new ones
	/// are blank placeholders with fresh identifiers. Returns the target that
	/// was applied.
	///
	/// # Examples
	///
	/// ```
	/// use mehis_forms::{FormContext, FormController};
	/// use mehis_models::MonthlyWorkPlan;
	///
	/// let mut form = FormController::<MonthlyWorkPlan>::new(FormContext::new());
	/// let activity = form.add_activity().unwrap();
	/// assert_eq!(form.set_target_count(&activity, "3").unwrap(), 3);
	/// assert_eq!(form.set_target_count(&activity, "-2").unwrap(), 0);
	/// assert!(form.draft().unwrap().activities[0].occurrences.is_empty());
	/// ```
	pub fn set_target_count(&mut self, activity_id: &str, raw: &str) -> FormResult<u32> {
		let target = parse_target(raw);
		self.update_item(|plan| &mut plan.activities, activity_id, |activity| {
			activity.target_count = target;
		})?;
		tracing::debug!(activity = activity_id, target, "occurrences resized");
		Ok(target)
	}

	/// Edits one occurrence of an activity in place.
	pub fn update_occurrence<T>(
		&mut self,
		activity_id: &str,
		occurrence_id: &str,
		f: impl FnOnce(&mut ActivityOccurrence) -> T,
	) -> FormResult<T> {
		self.update_item(|plan| &mut plan.activities, activity_id, |activity| {
			let occurrence = activity
				.occurrences
				.iter_mut()
				.find(|o| o.id == occurrence_id)?;
			let result = f(occurrence);
			occurrence.id = occurrence_id.to_string();
			Some(result)
		})?
		.ok_or_else(|| FormError::ItemNotFound(occurrence_id.to_string()))
	}

	/// Reports the outcome of an occurrence. Fields that do not apply to the
	/// new status are cleared.
	pub fn set_occurrence_status(
		&mut self,
		activity_id: &str,
		occurrence_id: &str,
		status: Option<OccurrenceStatus>,
	) -> FormResult<()> {
		self.update_occurrence(activity_id, occurrence_id, |o| o.status = status)
	}

	pub fn set_achievement(
		&mut self,
		activity_id: &str,
		occurrence_id: &str,
		achievement: impl Into<String>,
	) -> FormResult<()> {
		let achievement = achievement.into();
		self.update_occurrence(activity_id, occurrence_id, |o| o.achievement = Some(achievement))
	}

	pub fn set_reason(
		&mut self,
		activity_id: &str,
		occurrence_id: &str,
		reason: impl Into<String>,
	) -> FormResult<()> {
		let reason = reason.into();
		self.update_occurrence(activity_id, occurrence_id, |o| o.reason = Some(reason))
	}

	pub fn set_actual_date(
		&mut self,
		activity_id: &str,
		occurrence_id: &str,
		date: impl Into<String>,
	) -> FormResult<()> {
		let date = date.into();
		self.update_occurrence(activity_id, occurrence_id, |o| o.actual_date = Some(date))
	}

	pub fn add_adhoc(&mut self) -> FormResult<String> {
		self.add_item(|plan| &mut plan.adhoc_activities)
	}

	pub fn remove_adhoc(&mut self, id: &str) -> FormResult<AdhocActivity> {
		self.remove_item(|plan| &mut plan.adhoc_activities, id)
	}

	pub fn update_adhoc(&mut self, id: &str, f: impl FnOnce(&mut AdhocActivity)) -> FormResult<()> {
		self.update_item(|plan| &mut plan.adhoc_activities, id, f)
	}

	/// Marks the performance report as final and commits it.
	///
	/// Every occurrence must have a reported status. If the commit fails the
	/// draft is left unfinalized.
	pub fn finalize_report(&mut self, repo: &Repository<MonthlyWorkPlan>) -> FormResult<MonthlyWorkPlan> {
		self.update(|plan| plan.report_finalized = true)?;
		let result = self.commit(repo);
		if result.is_err() {
			// The draft survives a failed commit
			self.update(|plan| plan.report_finalized = false)?;
		} else {
			tracing::info!("monthly report finalized");
		}
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::context::SequentialIdGenerator;
	use chrono::{TimeZone, Utc};
	use mehis_models::{User, repository};
	use mehis_storages::{MemoryStorage, Store};
	use rstest::{fixture, rstest};
	use std::sync::Arc;

	#[fixture]
	fn ctx() -> FormContext {
		FormContext::new()
			.at(Utc.with_ymd_and_hms(2024, 3, 2, 7, 0, 0).unwrap())
			.with_id_generator(Arc::new(SequentialIdGenerator::new("id")))
			.with_user(User {
				id: "u1".to_string(),
				full_name: "Mphatso Kamanga".to_string(),
				district: "Mulanje".to_string(),
				..Default::default()
			})
	}

	fn planned(ctx: FormContext) -> (FormController<MonthlyWorkPlan>, String) {
		let mut form = FormController::<MonthlyWorkPlan>::new(ctx);
		form.update(|plan| {
			plan.month = "March".to_string();
			plan.facility = "Mulanje DH".to_string();
		})
		.unwrap();
		let activity = form.add_activity().unwrap();
		form.set_activity_name(&activity, "Growth monitoring").unwrap();
		form.set_target_count(&activity, "1").unwrap();
		let occurrence = form.draft().unwrap().activities[0].occurrences[0].id.clone();
		form.update_occurrence(&activity, &occurrence, |o| {
			o.location = "Chambe".to_string();
			o.start_date = "2024-03-05".to_string();
			o.end_date = "2024-03-05".to_string();
		})
		.unwrap();
		(form, activity)
	}

	#[rstest]
	#[case("3", 3)]
	#[case("2.9", 2)]
	#[case("-4", 0)]
	#[case("abc", 0)]
	#[case("", 0)]
	#[case("inf", 0)]
	#[case("999999", MAX_TARGET_COUNT)]
	fn test_parse_target(#[case] raw: &str, #[case] expected: u32) {
		assert_eq!(parse_target(raw), expected);
	}

	#[rstest]
	fn test_blank_plan_takes_user_and_year(ctx: FormContext) {
		let plan = MonthlyWorkPlan::blank(&ctx);
		assert_eq!(plan.year, "2024");
		assert_eq!(plan.hsa_name, "Mphatso Kamanga");
		assert_eq!(plan.district, "Mulanje");
		assert!(plan.month.is_empty());
	}

	#[rstest]
	fn test_planning_errors_use_indexed_keys(ctx: FormContext) {
		let mut form = FormController::<MonthlyWorkPlan>::new(ctx);
		let activity = form.add_activity().unwrap();
		form.set_target_count(&activity, "1").unwrap();
		let occurrence = form.draft().unwrap().activities[0].occurrences[0].id.clone();
		form.update_occurrence(&activity, &occurrence, |o| {
			o.start_date = "2024-03-20".to_string();
			o.end_date = "2024-03-10".to_string();
		})
		.unwrap();
		form.update(|plan| plan.month = "April".to_string()).unwrap();

		assert!(!form.validate());
		let errors = form.errors();
		assert_eq!(errors.get("facility"), Some("Facility is required"));
		assert_eq!(errors.get("act_0_name"), Some("Activity Name is required"));
		assert_eq!(
			errors.get("act_0_occ_0_range"),
			Some("End date cannot be before start date")
		);
		assert_eq!(errors.get("act_0_occ_0_start"), Some("Start Date: Must be in April"));
		assert_eq!(errors.get("act_0_occ_0_end"), Some("End Date: Must be in April"));
	}

	#[rstest]
	fn test_zero_target_is_an_error(ctx: FormContext) {
		let (mut form, activity) = planned(ctx);
		form.set_target_count(&activity, "0").unwrap();
		assert!(!form.validate());
		assert_eq!(
			form.errors().get("act_0_target"),
			Some("Monthly Target must be a positive number greater than zero")
		);
	}

	#[rstest]
	fn test_not_done_clears_achievement(ctx: FormContext) {
		let (mut form, activity) = planned(ctx);
		let occurrence = form.draft().unwrap().activities[0].occurrences[0].id.clone();
		form.set_occurrence_status(&activity, &occurrence, Some(OccurrenceStatus::Completed))
			.unwrap();
		form.set_achievement(&activity, &occurrence, "54 children weighed").unwrap();
		form.set_reason(&activity, &occurrence, "ignored").unwrap();
		assert_eq!(form.draft().unwrap().activities[0].occurrences[0].reason, None);

		form.set_occurrence_status(&activity, &occurrence, Some(OccurrenceStatus::NotDone))
			.unwrap();
		let reported = &form.draft().unwrap().activities[0].occurrences[0];
		assert_eq!(reported.achievement, None);

		assert!(!form.validate());
		assert_eq!(form.errors().get("act_0_occ_0_reason"), Some("Reason is required"));
	}

	#[rstest]
	fn test_reschedule_requires_actual_date(ctx: FormContext) {
		let (mut form, activity) = planned(ctx);
		let occurrence = form.draft().unwrap().activities[0].occurrences[0].id.clone();
		form.set_occurrence_status(
			&activity,
			&occurrence,
			Some(OccurrenceStatus::CompletedAfterReschedule),
		)
		.unwrap();
		assert!(!form.validate());
		assert!(form.errors().contains("act_0_occ_0_actual"));

		form.set_actual_date(&activity, &occurrence, "2024-03-12").unwrap();
		assert!(form.validate(), "{}", form.errors());
	}

	#[rstest]
	fn test_finalize_requires_every_status(ctx: FormContext) {
		let store = Store::new(Arc::new(MemoryStorage::new()));
		let repo = repository::<MonthlyWorkPlan>(&store);
		let (mut form, activity) = planned(ctx);

		let err = form.finalize_report(&repo).unwrap_err();
		assert!(matches!(&err, FormError::Invalid(errors) if errors.contains("act_0_occ_0_status")));
		assert!(!form.draft().unwrap().report_finalized);

		let occurrence = form.draft().unwrap().activities[0].occurrences[0].id.clone();
		form.set_occurrence_status(&activity, &occurrence, Some(OccurrenceStatus::Completed))
			.unwrap();
		let adhoc = form.add_adhoc().unwrap();
		form.update_adhoc(&adhoc, |a| {
			a.name = "Cholera sensitisation".to_string();
			a.start_date = "2024-03-18".to_string();
			a.end_date = "2024-03-18".to_string();
		})
		.unwrap();

		let saved = form.finalize_report(&repo).unwrap();
		assert!(saved.report_finalized);
		assert_eq!(repo.all(), vec![saved]);
	}

	#[rstest]
	fn test_adhoc_range_key(ctx: FormContext) {
		let (mut form, _) = planned(ctx);
		let adhoc = form.add_adhoc().unwrap();
		form.update_adhoc(&adhoc, |a| {
			a.name = "Campaign".to_string();
			a.start_date = "2024-03-10".to_string();
			a.end_date = "2024-03-01".to_string();
		})
		.unwrap();
		assert!(!form.validate());
		assert_eq!(
			form.errors().get("adhoc_0_range"),
			Some("End date cannot be before start date")
		);
	}
}
