//! MeHIS Admin CLI
//!
//! Inspects and maintains the records collected on a device's store.
//!
//! ## Usage
//!
//! ```bash
//! mehis-admin list hsa --district Lilongwe
//! mehis-admin export water-points --status Functional
//! mehis-admin delete sanitation 6f1c0c5e-2f0a-4a53-9b0e-3c1f4b1d2f10
//! mehis-admin register-user --name "Thoko Phiri" --phone 991234567 --district Dedza
//! mehis-admin list-users
//! ```
//!
//! Settings come from `--config FILE` (TOML) and `MEHIS_*` environment
//! variables; see `mehis_conf::Settings`.

mod commands;
mod logging;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use mehis_auth::Registration;
use mehis_conf::Settings;
use mehis_models::EntityKind;
use mehis_models::choices::UserRole;
use mehis_tables::FilterSpec;

#[derive(Parser)]
#[command(name = "mehis-admin")]
#[command(about = "MeHIS record and user administration", long_about = None)]
#[command(version)]
struct Cli {
	/// Settings file (TOML)
	#[arg(short, long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Verbosity level (can be repeated)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbosity: u8,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List the records of one kind
	List {
		/// Record kind, e.g. hsa, work-plans, water-points, inspections
		#[arg(value_name = "KIND")]
		kind: EntityKind,

		#[command(flatten)]
		filter: FilterArgs,
	},

	/// Export the records of one kind to a dated CSV file
	Export {
		#[arg(value_name = "KIND")]
		kind: EntityKind,

		#[command(flatten)]
		filter: FilterArgs,

		/// Output directory (defaults to export.directory from the settings)
		#[arg(short, long, value_name = "DIR")]
		output: Option<PathBuf>,

		/// Field delimiter
		#[arg(long, default_value_t = ',')]
		delimiter: char,
	},

	/// Delete one record by id
	Delete {
		#[arg(value_name = "KIND")]
		kind: EntityKind,

		#[arg(value_name = "ID")]
		id: String,
	},

	/// Register a user account
	RegisterUser {
		/// Full name
		#[arg(long)]
		name: String,

		/// `+265` number or its nine local digits
		#[arg(long)]
		phone: String,

		#[arg(long)]
		district: String,

		#[arg(long, default_value = "HSA")]
		role: UserRole,

		/// Read the password from this argument instead of standard input
		#[arg(long)]
		password: Option<String>,
	},

	/// List registered users
	ListUsers,
}

/// Record filters shared by `list` and `export`
#[derive(Args)]
struct FilterArgs {
	/// Case-insensitive text search
	#[arg(short, long)]
	search: Option<String>,

	/// Exact district
	#[arg(short, long)]
	district: Option<String>,

	/// Health facility (substring)
	#[arg(short, long)]
	facility: Option<String>,

	/// Status, e.g. Functional or Finalized
	#[arg(long)]
	status: Option<String>,
}

impl FilterArgs {
	fn into_spec(self) -> FilterSpec {
		FilterSpec {
			search: self.search,
			district: self.district,
			facility: self.facility,
			status: self.status,
		}
	}
}

fn main() {
	let cli = Cli::parse();

	let settings = match Settings::load(cli.config.as_deref()) {
		Ok(settings) => settings,
		Err(e) => {
			eprintln!("{} {}", "Error:".red().bold(), e);
			process::exit(1);
		}
	};
	logging::init(cli.verbosity, &settings.logging.level);

	if let Err(e) = run(cli.command, &settings) {
		eprintln!("{} {:#}", "Error:".red().bold(), e);
		process::exit(1);
	}
}

fn run(command: Commands, settings: &Settings) -> Result<()> {
	let store = settings.open_store().context("failed to open the record store")?;
	let mut stdout = io::stdout().lock();

	match command {
		Commands::List { kind, filter } => {
			let shown = commands::list(&store, kind, &filter.into_spec(), &mut stdout)?;
			eprintln!("{} {} record(s)", shown.to_string().bold(), kind);
		}
		Commands::Export {
			kind,
			filter,
			output,
			delimiter,
		} => {
			if !delimiter.is_ascii() {
				bail!("delimiter must be a single ASCII character");
			}
			let dir = output.unwrap_or_else(|| settings.export.directory.clone());
			let today = chrono::Local::now().date_naive();
			let path = commands::export(
				&store,
				kind,
				&filter.into_spec(),
				&dir,
				delimiter as u8,
				today,
			)?;
			println!("{} {}", "Exported".green(), path.display());
		}
		Commands::Delete { kind, id } => {
			if !commands::delete(&store, kind, &id)? {
				bail!("no {} record with id '{}'", kind, id);
			}
			println!("{} {} {}", "Deleted".green(), kind, id);
		}
		Commands::RegisterUser {
			name,
			phone,
			district,
			role,
			password,
		} => {
			let password = match password {
				Some(password) => password,
				None => read_password()?,
			};
			let user = commands::register_user(
				&store,
				Registration {
					full_name: name,
					phone_number: phone,
					district,
					role,
					confirm_password: password.clone(),
					password,
				},
			)?;
			println!("{} {} ({})", "Registered".green(), user.full_name, user.phone_number);
		}
		Commands::ListUsers => {
			commands::list_users(&store, &mut stdout)?;
		}
	}
	Ok(())
}

fn read_password() -> Result<String> {
	eprint!("Password: ");
	let mut line = String::new();
	io::stdin()
		.lock()
		.read_line(&mut line)
		.context("failed to read the password")?;
	Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
