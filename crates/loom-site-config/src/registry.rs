// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration registry - manages sources and merges layers.

use tracing::{debug, info, warn};

use crate::layer::ConfigLayer;
use crate::paths::PathsConfig;
use crate::runtime::SiteConfig;
use crate::sources::ConfigSource;
use crate::validation::validate_config;
use crate::ConfigError;

/// Registry that manages configuration sources and merges them.
pub struct ConfigRegistry {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigRegistry {
	/// Create a new empty registry.
	pub fn new() -> Self {
		Self {
			sources: Vec::new(),
		}
	}

	/// Register a configuration source.
	pub fn register(&mut self, source: Box<dyn ConfigSource>) {
		debug!(source = source.name(), precedence = ?source.precedence(), "registering config source");
		self.sources.push(source);
	}

	/// Load configuration from all sources, merge, and validate.
	///
	/// Sources are sorted by precedence (lowest first) and merged so higher
	/// precedence sources override lower ones. Missing optional files
	/// contribute nothing; any other source failure aborts the load.
	pub fn load(&self, paths: PathsConfig) -> Result<SiteConfig, ConfigError> {
		let mut sorted_sources: Vec<_> = self.sources.iter().collect();
		sorted_sources.sort_by_key(|s| s.precedence());

		info!(
			source_count = sorted_sources.len(),
			"loading configuration from sources"
		);

		let mut merged = ConfigLayer::default();
		for source in &sorted_sources {
			let layer = source.load().map_err(|e| {
				warn!(source = source.name(), error = %e, "failed to load config source");
				e
			})?;
			debug!(source = source.name(), "merging config layer");
			merged.merge(layer);
		}

		let config = SiteConfig::from_layer(merged, paths)?;

		validate_config(&config)?;

		info!(
			default_locale = %config.site.default_locale,
			log_level = %config.logging.level,
			embedded_locales = config.site.locales_dir.is_none(),
			embedded_content = config.site.content_path.is_none(),
			"configuration loaded successfully"
		);

		Ok(config)
	}

	/// Get the number of registered sources.
	pub fn source_count(&self) -> usize {
		self.sources.len()
	}
}

impl Default for ConfigRegistry {
	fn default() -> Self {
		Self::new()
	}
}
