//! Command implementations, generic over the record kind.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use mehis_auth::{AuthService, Registration};
use mehis_models::{
	EntityKind, Hcmc, HealthPost, HsaRegistration, MonthlyWorkPlan, Record, SanitationAssessment,
	Store, User, VillageInspection, WaterPoint, WaterQualitySample, repository,
};
use mehis_tables::{CsvExporter, FilterSpec, SimpleTable, Table, TableRecord};
use tracing::info;

/// Calls a generic function with the record type of `kind`.
macro_rules! for_kind {
	($kind:expr, $func:ident($($arg:expr),* $(,)?)) => {
		match $kind {
			EntityKind::HsaRegistration => $func::<HsaRegistration>($($arg),*),
			EntityKind::WorkPlan => $func::<MonthlyWorkPlan>($($arg),*),
			EntityKind::WaterPoint => $func::<WaterPoint>($($arg),*),
			EntityKind::WaterQualitySample => $func::<WaterQualitySample>($($arg),*),
			EntityKind::SanitationAssessment => $func::<SanitationAssessment>($($arg),*),
			EntityKind::VillageInspection => $func::<VillageInspection>($($arg),*),
			EntityKind::HealthPost => $func::<HealthPost>($($arg),*),
			EntityKind::Hcmc => $func::<Hcmc>($($arg),*),
		}
	};
}

/// Writes a summary listing of the matching records and returns how many
/// were shown.
pub(crate) fn list(
	store: &Store,
	kind: EntityKind,
	filter: &FilterSpec,
	out: &mut dyn Write,
) -> Result<usize> {
	for_kind!(kind, list_records(store, filter, out))
}

fn list_records<R: TableRecord>(
	store: &Store,
	filter: &FilterSpec,
	out: &mut dyn Write,
) -> Result<usize> {
	let records = repository::<R>(store).all();
	let matched: Vec<R> = filter.apply(&records).into_iter().cloned().collect();
	let table = SimpleTable::for_records(matched);

	let header = table.header();
	let picked = summary_columns(header.len());
	let header: Vec<String> = picked.iter().map(|&i| header[i].to_string()).collect();
	let rows: Vec<Vec<String>> = table
		.render_rows()
		.into_iter()
		.map(|row| picked.iter().map(|&i| row[i].clone()).collect())
		.collect();

	write_aligned(out, &header, &rows)?;
	Ok(rows.len())
}

/// ID, the first two data columns and the submission time.
fn summary_columns(total: usize) -> Vec<usize> {
	let mut picked: Vec<usize> = (0..total.min(3)).collect();
	if total > 3 {
		picked.push(total - 1);
	}
	picked
}

fn write_aligned(out: &mut dyn Write, header: &[String], rows: &[Vec<String>]) -> Result<()> {
	let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
	for row in rows {
		for (width, cell) in widths.iter_mut().zip(row) {
			*width = (*width).max(cell.chars().count());
		}
	}

	let line = |cells: &[String]| {
		cells
			.iter()
			.zip(&widths)
			.map(|(cell, &width)| format!("{:<width$}", cell, width = width))
			.collect::<Vec<_>>()
			.join("  ")
			.trim_end()
			.to_string()
	};

	writeln!(out, "{}", line(header))?;
	for row in rows {
		writeln!(out, "{}", line(row))?;
	}
	Ok(())
}

/// Writes the matching records to a dated CSV file in `dir`.
pub(crate) fn export(
	store: &Store,
	kind: EntityKind,
	filter: &FilterSpec,
	dir: &Path,
	delimiter: u8,
	date: NaiveDate,
) -> Result<PathBuf> {
	for_kind!(kind, export_records(store, filter, dir, delimiter, date))
}

fn export_records<R: TableRecord>(
	store: &Store,
	filter: &FilterSpec,
	dir: &Path,
	delimiter: u8,
	date: NaiveDate,
) -> Result<PathBuf> {
	let records = repository::<R>(store).all();
	let matched = filter.apply(&records);
	let path = CsvExporter::new()
		.with_delimiter(delimiter)
		.write_to_dir(dir, &matched, date)?;
	Ok(path)
}

/// Removes one record; `false` when no record has that id.
pub(crate) fn delete(store: &Store, kind: EntityKind, id: &str) -> Result<bool> {
	for_kind!(kind, delete_record(store, id))
}

fn delete_record<R: Record>(store: &Store, id: &str) -> Result<bool> {
	let removed = repository::<R>(store).delete(id)?;
	if removed {
		info!(kind = %R::KIND, id, "record deleted");
	}
	Ok(removed)
}

pub(crate) fn register_user(store: &Store, registration: Registration) -> Result<User> {
	Ok(AuthService::new(store.clone()).register(registration)?)
}

pub(crate) fn list_users(store: &Store, out: &mut dyn Write) -> Result<usize> {
	let users = AuthService::new(store.clone()).users();
	let header: Vec<String> = ["Name", "Phone", "District", "Role"]
		.iter()
		.map(|h| h.to_string())
		.collect();
	let rows: Vec<Vec<String>> = users
		.iter()
		.map(|user| {
			vec![
				user.full_name.clone(),
				user.phone_number.clone(),
				user.district.clone(),
				user.role.to_string(),
			]
		})
		.collect();
	write_aligned(out, &header, &rows)?;
	Ok(users.len())
}
