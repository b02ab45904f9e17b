// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration validation rules.

use crate::runtime::SiteConfig;
use crate::ConfigError;

/// Longest minimum query length accepted.
pub const MAX_MIN_QUERY_LEN: usize = 64;

/// Validate the configuration.
///
/// Returns Ok(()) if valid, or a ConfigError naming the offending field.
pub fn validate_config(config: &SiteConfig) -> Result<(), ConfigError> {
	validate_site(config)?;
	validate_search(config)?;

	Ok(())
}

fn validate_site(config: &SiteConfig) -> Result<(), ConfigError> {
	if let Some(ref dir) = config.site.locales_dir {
		if dir.as_os_str().is_empty() {
			return Err(ConfigError::invalid_value(
				"site.locales_dir",
				"cannot be empty",
			));
		}
	}

	if let Some(ref path) = config.site.content_path {
		if path.as_os_str().is_empty() {
			return Err(ConfigError::invalid_value(
				"site.content_path",
				"cannot be empty",
			));
		}
	}

	Ok(())
}

impl SiteConfig {
	/// Non-fatal problems with configured paths.
	///
	/// Loading runs before logging is set up, so callers report these
	/// themselves once a subscriber is installed.
	pub fn warnings(&self) -> Vec<String> {
		let mut warnings = Vec::new();
		if let Some(ref dir) = self.site.locales_dir {
			if !dir.is_dir() {
				warnings.push(format!(
					"site.locales_dir {} does not exist, using English fallbacks",
					dir.display()
				));
			}
		}
		if let Some(ref path) = self.site.content_path {
			if !path.is_file() {
				warnings.push(format!("site.content_path {} does not exist", path.display()));
			}
		}
		warnings
	}
}

fn validate_search(config: &SiteConfig) -> Result<(), ConfigError> {
	if config.search.min_query_len > MAX_MIN_QUERY_LEN {
		return Err(ConfigError::invalid_value(
			"search.min_query_len",
			format!("must be at most {MAX_MIN_QUERY_LEN}"),
		));
	}

	Ok(())
}
