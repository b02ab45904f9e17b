// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! loom-site - translation and content tooling for the documentation site
//!
//! Resolves translation keys, audits locale coverage and searches the
//! command, FAQ, docs and troubleshooting catalogs from the terminal.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use loom_site_config::{
	ensure_default_config, load_config_with_cli,
	runtime::{LogFormat, LogLevel, LoggingConfig},
	CliOverrides, SiteConfig,
};

mod commands;
mod data;
mod locale;

use commands::{CatalogArg, Context, SearchArgs};

/// loom-site - localized site content from the terminal
#[derive(Parser, Debug)]
#[command(name = "loom-site", version, about, long_about = None)]
struct Args {
	/// Path to custom configuration file
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Log level (overrides config)
	#[arg(short, long)]
	log_level: Option<String>,

	/// Output logs as JSON (overrides config)
	#[arg(long)]
	json_logs: bool,

	/// Display locale (defaults to the OS locale, then the configured default)
	#[arg(long, env = "LOOM_SITE_LOCALE")]
	locale: Option<String>,

	/// Directory of translation bundles (overrides config)
	#[arg(long)]
	locales_dir: Option<PathBuf>,

	/// Content index file (overrides config)
	#[arg(long)]
	content: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Translate a dotted key
	T {
		/// Key such as `nav.home`
		key: String,
	},
	/// Print a namespace as JSON, from English when the locale lacks it
	Slice {
		namespace: String,
	},
	/// Search a content catalog
	Search {
		#[arg(value_enum)]
		catalog: CatalogArg,
		/// Free-text query (blank lists everything)
		#[arg(default_value = "")]
		query: String,
		/// Category filter, or `all`
		#[arg(long)]
		category: Option<String>,
		/// Difficulty (faq) or severity (troubleshooting) filter, or `all`
		#[arg(long)]
		level: Option<String>,
		/// Print results as JSON
		#[arg(long)]
		json: bool,
	},
	/// Report translation coverage against English
	Coverage {
		/// Exit non-zero when any loaded locale is incomplete
		#[arg(long)]
		strict: bool,
		/// List every missing key
		#[arg(long)]
		missing: bool,
	},
	/// List supported locales
	Locales,
	/// Inspect configuration
	Config {
		#[command(subcommand)]
		command: ConfigCommand,
	},
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
	/// Print the effective configuration
	Show,
	/// Write a default user config file if none exists
	Init,
	/// Print the config file locations
	Path,
}

impl From<&Args> for CliOverrides {
	fn from(args: &Args) -> Self {
		Self {
			default_locale: None,
			locales_dir: args.locales_dir.clone(),
			content_path: args.content.clone(),
			log_level: args.log_level.clone(),
			log_format: if args.json_logs {
				Some("json".to_string())
			} else {
				None
			},
			config_file: args.config.clone(),
		}
	}
}

fn log_level_to_tracing(level: LogLevel) -> tracing::Level {
	match level {
		LogLevel::Trace => tracing::Level::TRACE,
		LogLevel::Debug => tracing::Level::DEBUG,
		LogLevel::Info => tracing::Level::INFO,
		LogLevel::Warn => tracing::Level::WARN,
		LogLevel::Error => tracing::Level::ERROR,
	}
}

// Logs go to stderr so command output stays pipeable.
fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::new(format!("loom_site={}", log_level_to_tracing(logging.level)))
	});

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(io::stderr))
				.init();
		}
	}
}

fn run_config(config: &SiteConfig, command: &ConfigCommand, out: &mut impl Write) -> Result<()> {
	match command {
		ConfigCommand::Show => {
			write!(out, "{}", config.to_toml()?)?;
		}
		ConfigCommand::Init => {
			let path = &config.paths.user_config_file;
			if ensure_default_config(path)? {
				writeln!(out, "wrote {}", path.display())?;
			} else {
				writeln!(out, "{} already exists", path.display())?;
			}
		}
		ConfigCommand::Path => {
			writeln!(out, "system: {}", config.paths.system_config_file.display())?;
			writeln!(out, "user:   {}", config.paths.user_config_file.display())?;
		}
	}
	Ok(())
}

fn main() -> Result<ExitCode> {
	let args = Args::parse();

	let cli_overrides = CliOverrides::from(&args);
	let config = load_config_with_cli(cli_overrides).context("failed to load configuration")?;

	init_tracing(&config.logging);
	for warning in config.warnings() {
		warn!("{warning}");
	}

	let locale = locale::effective_locale(args.locale.as_deref(), config.site.default_locale);
	info!(locale = %locale, "starting loom-site");

	let stdout = io::stdout();
	let mut out = stdout.lock();

	if let Command::Config { command } = &args.command {
		run_config(&config, command, &mut out)?;
		return Ok(ExitCode::SUCCESS);
	}

	let bundles = data::load_bundles(config.site.locales_dir.as_deref());
	let content = data::load_content(config.site.content_path.as_deref())?;
	let ctx = Context {
		localizer: &bundles,
		content: &content,
		locale,
		min_query_len: config.search.min_query_len,
	};

	match &args.command {
		Command::T { key } => commands::translate(&ctx, key, &mut out)?,
		Command::Slice { namespace } => commands::slice(&ctx, namespace, &mut out)?,
		Command::Search {
			catalog,
			query,
			category,
			level,
			json,
		} => {
			let search = SearchArgs {
				catalog: *catalog,
				query,
				category: category.as_deref(),
				level: level.as_deref(),
				json: *json,
			};
			commands::search(&ctx, &search, &mut out)?;
		}
		Command::Coverage { strict, missing } => {
			let complete = commands::coverage_report(&ctx, *missing, &mut out)?;
			if *strict && !complete {
				debug!("coverage incomplete in strict mode");
				return Ok(ExitCode::FAILURE);
			}
		}
		Command::Locales => commands::list_locales(&ctx, &mut out)?,
		Command::Config { .. } => {}
	}

	Ok(ExitCode::SUCCESS)
}
