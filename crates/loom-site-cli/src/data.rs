// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolve translation bundles and content from configuration.

use std::ops::Deref;
use std::path::Path;

use anyhow::{Context, Result};
use loom_site_content::ContentIndex;
use loom_site_i18n::{builtin, Localizer, DEFAULT_LOCALE};
use tracing::{info, warn};

/// Bundles compiled into the binary, or read from a directory.
pub enum Bundles {
	Embedded(&'static Localizer),
	Dir(Localizer),
}

impl Deref for Bundles {
	type Target = Localizer;

	fn deref(&self) -> &Localizer {
		match self {
			Bundles::Embedded(localizer) => *localizer,
			Bundles::Dir(localizer) => localizer,
		}
	}
}

pub fn load_bundles(locales_dir: Option<&Path>) -> Bundles {
	let Some(dir) = locales_dir else {
		return Bundles::Embedded(builtin::localizer());
	};

	let localizer = Localizer::new();
	for (locale, error) in localizer.load_dir(dir) {
		warn!(locale = %locale, error = %error, "bundle degraded to English");
	}
	if localizer.bundle(DEFAULT_LOCALE).is_none() {
		warn!(dir = %dir.display(), "no English bundle, untranslated keys will show as-is");
	}
	info!(
		dir = %dir.display(),
		loaded = localizer.loaded_locales().len(),
		"loaded translation bundles"
	);
	Bundles::Dir(localizer)
}

pub fn load_content(content_path: Option<&Path>) -> Result<ContentIndex> {
	match content_path {
		None => Ok(loom_site_content::builtin::index().clone()),
		Some(path) => ContentIndex::from_file(path)
			.with_context(|| format!("failed to load content index {}", path.display())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use loom_site_i18n::{LoadState, Locale};
	use std::fs;
	use tempfile::TempDir;

	#[test]
	fn test_embedded_bundles_by_default() {
		let bundles = load_bundles(None);
		assert!(matches!(bundles, Bundles::Embedded(_)));
		assert_eq!(bundles.state(Locale::Ko), LoadState::Ready);
	}

	#[test]
	fn test_bundles_from_dir() {
		let dir = TempDir::new().unwrap();
		fs::write(dir.path().join("en.json"), r#"{ "nav": { "home": "Start here" } }"#).unwrap();

		let bundles = load_bundles(Some(dir.path()));
		assert_eq!(bundles.t("fr", "nav.home"), "Start here");
		assert_eq!(bundles.state(Locale::Fr), LoadState::Uninitialized);
	}

	#[test]
	fn test_content_defaults_to_embedded() {
		let index = load_content(None).unwrap();
		assert!(!index.commands.is_empty());
	}

	#[test]
	fn test_missing_content_file_is_an_error() {
		let err = load_content(Some(Path::new("/nonexistent/catalog.json"))).unwrap_err();
		assert!(err.to_string().contains("/nonexistent/catalog.json"));
	}
}
