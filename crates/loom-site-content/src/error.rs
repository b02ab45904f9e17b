// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading catalogs.
///
/// Search and filtering never fail; only loaders return these.
#[derive(Debug, Error)]
pub enum ContentError {
	#[error("failed to read content index {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("malformed content index: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("unsupported content index version {found} (expected {supported})")]
	UnsupportedVersion { found: u32, supported: u32 },

	#[error("{catalog} entry at position {index} has an empty id")]
	EmptyId { catalog: &'static str, index: usize },

	#[error("duplicate {catalog} id: {id}")]
	DuplicateId { catalog: &'static str, id: String },
}

pub type Result<T> = std::result::Result<T, ContentError>;

/// A string that names no variant of a catalog enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
	pub kind: &'static str,
	pub value: String,
}
