// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: files, environment, CLI, defaults.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::layer::*;
use crate::paths::{self, PathsConfig};
use crate::ConfigError;

/// Prefix shared by every environment variable this crate reads.
pub const ENV_PREFIX: &str = "LOOM_SITE_";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	SystemFile = 20,
	UserFile = 30,
	WorkspaceFile = 40,
	Environment = 50,
	Cli = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	/// Name for logging
	fn name(&self) -> &'static str;

	/// Precedence level
	fn precedence(&self) -> Precedence;

	/// Load configuration layer from this source
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading defaults");
		// Defaults are applied when the runtime config is built
		Ok(ConfigLayer::default())
	}
}

/// File-based configuration source (TOML).
pub struct FileSource {
	path: PathBuf,
	precedence: Precedence,
	name: &'static str,
	required: bool,
}

impl FileSource {
	/// System config: /etc/loom-site/config.toml
	pub fn system(paths: &PathsConfig) -> Self {
		Self::optional(
			paths.system_config_file.clone(),
			Precedence::SystemFile,
			"system-config",
		)
	}

	/// User config: ~/.config/loom-site/config.toml
	pub fn user(paths: &PathsConfig) -> Self {
		Self::optional(
			paths.user_config_file.clone(),
			Precedence::UserFile,
			"user-config",
		)
	}

	/// Workspace config: .loom-site/config.toml
	pub fn workspace() -> Result<Self, ConfigError> {
		Ok(Self::optional(
			paths::workspace_config_path()?,
			Precedence::WorkspaceFile,
			"workspace-config",
		))
	}

	/// A file named explicitly by the user. It must exist.
	pub fn explicit(path: PathBuf) -> Self {
		Self {
			path,
			precedence: Precedence::WorkspaceFile,
			name: "explicit-config",
			required: true,
		}
	}

	/// Custom file path with specified precedence. Skipped when missing.
	pub fn optional(path: PathBuf, precedence: Precedence, name: &'static str) -> Self {
		Self {
			path,
			precedence,
			name,
			required: false,
		}
	}
}

impl ConfigSource for FileSource {
	fn name(&self) -> &'static str {
		self.name
	}
	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			if self.required {
				return Err(ConfigError::validation(format!(
					"config file {} does not exist",
					self.path.display()
				)));
			}
			debug!(path = %self.path.display(), source = self.name, "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), source = self.name, "loading config file");

		let content = std::fs::read_to_string(&self.path)?;
		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!(source = self.name, "parsed config layer");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Reads `LOOM_SITE_<FIELD>` variables. Blank values are ignored.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		layer_from_vars(std::env::vars())
	}
}

/// Build a layer from `(name, value)` pairs shaped like the process environment.
pub fn layer_from_vars<I>(vars: I) -> Result<ConfigLayer, ConfigError>
where
	I: IntoIterator<Item = (String, String)>,
{
	let mut layer = ConfigLayer::default();

	for (key, value) in vars {
		let Some(field) = key.strip_prefix(ENV_PREFIX) else {
			continue;
		};

		let value = value.trim().to_string();
		if value.is_empty() {
			continue;
		}

		trace!(key = %key, "processing env var");

		match field {
			"DEFAULT_LOCALE" => {
				layer
					.site
					.get_or_insert_with(SiteLayer::default)
					.default_locale = Some(value);
			}
			"LOCALES_DIR" => {
				layer
					.site
					.get_or_insert_with(SiteLayer::default)
					.locales_dir = Some(PathBuf::from(value));
			}
			"CONTENT_PATH" => {
				layer
					.site
					.get_or_insert_with(SiteLayer::default)
					.content_path = Some(PathBuf::from(value));
			}
			"MIN_QUERY_LEN" => {
				let len = value.parse().map_err(|_| {
					ConfigError::invalid_value(key.clone(), format!("'{value}' is not a number"))
				})?;
				layer
					.search
					.get_or_insert_with(SearchLayer::default)
					.min_query_len = Some(len);
			}
			"LOG_LEVEL" => {
				layer
					.logging
					.get_or_insert_with(LoggingLayer::default)
					.level = Some(value);
			}
			"LOG_FORMAT" => {
				layer
					.logging
					.get_or_insert_with(LoggingLayer::default)
					.format = Some(value);
			}
			_ => {
				// Unknown LOOM_SITE_ variable, ignore
			}
		}
	}

	Ok(layer)
}

/// CLI override source.
pub struct CliSource {
	overrides: CliOverrides,
}

/// CLI argument overrides.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub default_locale: Option<String>,
	pub locales_dir: Option<PathBuf>,
	pub content_path: Option<PathBuf>,
	pub log_level: Option<String>,
	pub log_format: Option<String>,
	pub config_file: Option<PathBuf>,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading CLI overrides");
		let mut layer = ConfigLayer::default();

		if let Some(ref locale) = self.overrides.default_locale {
			layer
				.site
				.get_or_insert_with(SiteLayer::default)
				.default_locale = Some(locale.clone());
		}

		if let Some(ref dir) = self.overrides.locales_dir {
			layer
				.site
				.get_or_insert_with(SiteLayer::default)
				.locales_dir = Some(dir.clone());
		}

		if let Some(ref path) = self.overrides.content_path {
			layer
				.site
				.get_or_insert_with(SiteLayer::default)
				.content_path = Some(path.clone());
		}

		if let Some(ref level) = self.overrides.log_level {
			layer
				.logging
				.get_or_insert_with(LoggingLayer::default)
				.level = Some(level.clone());
		}

		if let Some(ref format) = self.overrides.log_format {
			layer
				.logging
				.get_or_insert_with(LoggingLayer::default)
				.format = Some(format.clone());
		}

		Ok(layer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::tempdir;

	fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Cli > Precedence::Environment);
		assert!(Precedence::Environment > Precedence::WorkspaceFile);
		assert!(Precedence::WorkspaceFile > Precedence::UserFile);
		assert!(Precedence::UserFile > Precedence::SystemFile);
		assert!(Precedence::SystemFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_source_returns_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert_eq!(layer, ConfigLayer::default());
	}

	#[test]
	fn test_file_source_missing_file_returns_empty() {
		let source = FileSource::optional(
			PathBuf::from("/nonexistent/config.toml"),
			Precedence::UserFile,
			"test",
		);
		let layer = source.load().unwrap();
		assert!(layer.site.is_none());
	}

	#[test]
	fn test_explicit_file_must_exist() {
		let source = FileSource::explicit(PathBuf::from("/nonexistent/config.toml"));
		assert!(matches!(source.load(), Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_file_source_reports_parse_errors_with_path() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("config.toml");
		fs::write(&path, "[site\ndefault_locale = ").unwrap();

		let source = FileSource::optional(path.clone(), Precedence::UserFile, "test");
		match source.load() {
			Err(ConfigError::TomlParse { path: reported, .. }) => assert_eq!(reported, path),
			other => panic!("expected TomlParse, got {other:?}"),
		}
	}

	#[test]
	fn test_env_vars_map_to_fields() {
		let layer = layer_from_vars(vars(&[
			("LOOM_SITE_DEFAULT_LOCALE", "de"),
			("LOOM_SITE_LOCALES_DIR", "/srv/locales"),
			("LOOM_SITE_MIN_QUERY_LEN", " 2 "),
			("LOOM_SITE_LOG_FORMAT", "json"),
			("LOOM_SITE_LOG_LEVEL", "   "),
			("LOOM_SITE_UNKNOWN", "x"),
			("HOME", "/root"),
		]))
		.unwrap();

		let site = layer.site.unwrap();
		assert_eq!(site.default_locale.as_deref(), Some("de"));
		assert_eq!(site.locales_dir, Some(PathBuf::from("/srv/locales")));
		assert_eq!(layer.search.unwrap().min_query_len, Some(2));
		let logging = layer.logging.unwrap();
		assert_eq!(logging.format.as_deref(), Some("json"));
		assert!(logging.level.is_none());
	}

	#[test]
	fn test_env_bad_number_is_invalid() {
		let err = layer_from_vars(vars(&[("LOOM_SITE_MIN_QUERY_LEN", "two")])).unwrap_err();
		assert!(err.to_string().contains("LOOM_SITE_MIN_QUERY_LEN"));
	}

	#[test]
	fn test_cli_source_sets_overrides() {
		let source = CliSource::new(CliOverrides {
			default_locale: Some("ja".to_string()),
			log_level: Some("debug".to_string()),
			..Default::default()
		});
		let layer = source.load().unwrap();
		assert_eq!(layer.site.unwrap().default_locale.as_deref(), Some("ja"));
		assert_eq!(layer.logging.unwrap().level.as_deref(), Some("debug"));
		assert!(layer.search.is_none());
	}
}
