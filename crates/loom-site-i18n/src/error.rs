// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading translation bundles.
///
/// Lookups never return these; a bundle that fails to load degrades to the
/// English fallback instead.
#[derive(Debug, Error)]
pub enum I18nError {
	#[error("failed to read bundle {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("malformed bundle JSON: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("bundle root must be a JSON object")]
	NotAnObject,

	#[error("unsupported locale: {0}")]
	UnsupportedLocale(String),
}

pub type Result<T> = std::result::Result<T, I18nError>;
