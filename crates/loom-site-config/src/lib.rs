// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the Loom site tooling.
//!
//! This crate provides:
//! - XDG Base Directory compliant path resolution
//! - Layered configuration from multiple sources
//! - TOML configuration file parsing
//! - Environment variable overrides
//! - Configuration validation

pub mod defaults;
pub mod error;
pub mod layer;
pub mod paths;
pub mod registry;
pub mod runtime;
pub mod sources;
pub mod validation;

pub use defaults::{ensure_default_config, DEFAULT_CONFIG_TEMPLATE};
pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use paths::PathsConfig;
pub use registry::ConfigRegistry;
pub use runtime::{LogFormat, LogLevel, SiteConfig};
pub use sources::{CliOverrides, ConfigSource, Precedence};

/// Load configuration from all sources with default precedence.
pub fn load_config() -> Result<SiteConfig, ConfigError> {
	load_config_with_cli(CliOverrides::default())
}

/// Load configuration with CLI overrides.
///
/// An explicit `config_file` override is read on top of the workspace file
/// and must exist.
pub fn load_config_with_cli(cli: CliOverrides) -> Result<SiteConfig, ConfigError> {
	let paths = paths::resolve_xdg_paths()?;

	let mut registry = ConfigRegistry::new();

	registry.register(Box::new(sources::DefaultsSource));
	registry.register(Box::new(sources::FileSource::system(&paths)));
	registry.register(Box::new(sources::FileSource::user(&paths)));
	if let Ok(ws) = sources::FileSource::workspace() {
		registry.register(Box::new(ws));
	}
	if let Some(ref path) = cli.config_file {
		registry.register(Box::new(sources::FileSource::explicit(path.clone())));
	}
	registry.register(Box::new(sources::EnvSource));
	registry.register(Box::new(sources::CliSource::new(cli)));

	registry.load(paths)
}
