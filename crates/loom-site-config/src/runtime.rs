// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime configuration types with resolved defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use loom_site_i18n::{Locale, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};

use crate::layer::*;
use crate::paths::PathsConfig;
use crate::ConfigError;

/// The final, validated configuration for the site tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
	pub site: SiteSettings,
	pub search: SearchSettings,
	pub logging: LoggingConfig,

	/// Resolved config file paths (not serialized)
	#[serde(skip)]
	pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
	pub default_locale: Locale,
	/// Directory of `<code>.json` bundles. Embedded bundles when unset.
	pub locales_dir: Option<PathBuf>,
	/// Content index file. Embedded index when unset.
	pub content_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSettings {
	/// Trimmed queries shorter than this are treated as blank.
	pub min_query_len: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
	pub level: LogLevel,
	pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Error,
	Warn,
	#[default]
	Info,
	Debug,
	Trace,
}

impl LogLevel {
	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Error => "error",
			LogLevel::Warn => "warn",
			LogLevel::Info => "info",
			LogLevel::Debug => "debug",
			LogLevel::Trace => "trace",
		}
	}
}

impl FromStr for LogLevel {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"error" => Ok(LogLevel::Error),
			"warn" => Ok(LogLevel::Warn),
			"info" => Ok(LogLevel::Info),
			"debug" => Ok(LogLevel::Debug),
			"trace" => Ok(LogLevel::Trace),
			other => Err(ConfigError::invalid_value(
				"logging.level",
				format!("'{other}' is not one of error, warn, info, debug, trace"),
			)),
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
	Compact,
}

impl FromStr for LogFormat {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"pretty" => Ok(LogFormat::Pretty),
			"json" => Ok(LogFormat::Json),
			"compact" => Ok(LogFormat::Compact),
			other => Err(ConfigError::invalid_value(
				"logging.format",
				format!("'{other}' is not one of pretty, json, compact"),
			)),
		}
	}
}

impl Default for SiteSettings {
	fn default() -> Self {
		Self {
			default_locale: DEFAULT_LOCALE,
			locales_dir: None,
			content_path: None,
		}
	}
}

impl SiteConfig {
	/// Build runtime config from a merged layer and paths.
	pub fn from_layer(layer: ConfigLayer, paths: PathsConfig) -> Result<Self, ConfigError> {
		Ok(Self {
			site: build_site_settings(layer.site)?,
			search: build_search_settings(layer.search),
			logging: build_logging_config(layer.logging)?,
			paths,
		})
	}

	/// Effective configuration as TOML, for display.
	pub fn to_toml(&self) -> Result<String, ConfigError> {
		toml::to_string_pretty(self).map_err(|e| ConfigError::validation(e.to_string()))
	}
}

fn build_site_settings(layer: Option<SiteLayer>) -> Result<SiteSettings, ConfigError> {
	let layer = layer.unwrap_or_default();
	let default_locale = match layer.default_locale.as_deref() {
		None => DEFAULT_LOCALE,
		Some(code) => code.parse().map_err(|_| {
			ConfigError::invalid_value(
				"site.default_locale",
				format!("'{code}' is not a supported locale"),
			)
		})?,
	};

	Ok(SiteSettings {
		default_locale,
		locales_dir: layer.locales_dir,
		content_path: layer.content_path,
	})
}

fn build_search_settings(layer: Option<SearchLayer>) -> SearchSettings {
	let layer = layer.unwrap_or_default();
	SearchSettings {
		min_query_len: layer.min_query_len.unwrap_or(0),
	}
}

fn build_logging_config(layer: Option<LoggingLayer>) -> Result<LoggingConfig, ConfigError> {
	let layer = layer.unwrap_or_default();
	Ok(LoggingConfig {
		level: layer
			.level
			.as_deref()
			.map(str::parse::<LogLevel>)
			.transpose()?
			.unwrap_or_default(),
		format: layer
			.format
			.as_deref()
			.map(str::parse::<LogFormat>)
			.transpose()?
			.unwrap_or_default(),
	})
}
