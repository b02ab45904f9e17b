// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant path resolution.

use std::path::PathBuf;

use crate::ConfigError;

const APP_DIR: &str = "loom-site";
const CONFIG_FILE: &str = "config.toml";

/// Resolved config file locations.
#[derive(Debug, Clone, PartialEq)]
pub struct PathsConfig {
	/// User config file: ~/.config/loom-site/config.toml
	pub user_config_file: PathBuf,
	/// System config file: /etc/loom-site/config.toml
	pub system_config_file: PathBuf,
}

impl PathsConfig {
	/// Get the config directory (parent of user_config_file)
	pub fn config_dir(&self) -> PathBuf {
		self
			.user_config_file
			.parent()
			.map(|p| p.to_path_buf())
			.unwrap_or_else(|| self.user_config_file.clone())
	}
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			user_config_file: PathBuf::from("~/.config/loom-site/config.toml"),
			system_config_file: system_config_path(),
		}
	}
}

fn system_config_path() -> PathBuf {
	PathBuf::from("/etc").join(APP_DIR).join(CONFIG_FILE)
}

/// Resolve config paths according to the Base Directory Specification.
///
/// Uses `XDG_CONFIG_HOME` if set, otherwise `~/.config`.
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let config_home = match std::env::var_os("XDG_CONFIG_HOME") {
		Some(dir) if !dir.is_empty() => PathBuf::from(dir),
		_ => dirs::home_dir()
			.ok_or(ConfigError::HomeDirNotFound)?
			.join(".config"),
	};

	tracing::debug!(config_home = %config_home.display(), "resolved XDG paths");

	Ok(PathsConfig {
		user_config_file: config_home.join(APP_DIR).join(CONFIG_FILE),
		system_config_file: system_config_path(),
	})
}

/// Get the workspace config file path from current directory.
pub fn workspace_config_path() -> Result<PathBuf, ConfigError> {
	let cwd = std::env::current_dir()?;
	Ok(cwd.join(format!(".{APP_DIR}")).join(CONFIG_FILE))
}
