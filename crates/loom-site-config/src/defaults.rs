// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Default configuration file generation.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::ConfigError;

/// Default configuration file template.
///
/// Written by `loom-site config init` when no user config exists.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"#
# Loom Site Configuration File
# Location: ~/.config/loom-site/config.toml
#
# Every setting can also be given as LOOM_SITE_<NAME> in the environment,
# e.g. LOOM_SITE_DEFAULT_LOCALE=fr.
#

# =============================================================================
# Site
# =============================================================================

[site]
# Locale used when a visitor has no preference.
# One of: en, zh, hi, fr, de, ja, ko, es, ru
default_locale = "en"

# Directory of <code>.json translation bundles.
# The bundles compiled into the binary are used when unset.
# locales_dir = "public/locales"

# Content index (commands, FAQ, docs, troubleshooting).
# The index compiled into the binary is used when unset.
# content_path = "content/catalog.json"

# =============================================================================
# Search
# =============================================================================

[search]
# Queries shorter than this (after trimming) show the whole catalog.
min_query_len = 0

# =============================================================================
# Logging Configuration
# =============================================================================

[logging]
# Log level: error, warn, info, debug, trace
level = "info"

# Log format: pretty, json, compact
format = "pretty"
"#;

/// Ensure the config directory exists and create a default config file if none exists.
///
/// Returns `true` if a new config file was created, `false` if one already existed.
pub fn ensure_default_config(config_file_path: &Path) -> Result<bool, ConfigError> {
	if config_file_path.exists() {
		debug!(path = %config_file_path.display(), "config file already exists");
		return Ok(false);
	}

	if let Some(parent) = config_file_path.parent() {
		if !parent.exists() {
			debug!(path = %parent.display(), "creating config directory");
			fs::create_dir_all(parent)?;
		}
	}

	info!(path = %config_file_path.display(), "creating default config file");
	fs::write(config_file_path, DEFAULT_CONFIG_TEMPLATE)?;

	Ok(true)
}
