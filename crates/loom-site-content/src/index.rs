// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Load the exported content index.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::catalog::Catalog;
use crate::entry::{Command, DocSection, FaqItem, Troubleshooting};
use crate::error::{ContentError, Result};

/// Index format version this crate reads.
pub const INDEX_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct ExportedIndex {
	version: u32,
	#[serde(default)]
	generated_at: Option<String>,
	#[serde(default)]
	commands: Vec<Command>,
	#[serde(default)]
	faq: Vec<FaqItem>,
	#[serde(default)]
	docs: Vec<DocSection>,
	#[serde(default)]
	troubleshooting: Vec<Troubleshooting>,
}

/// Every catalog the site renders, validated.
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
	pub version: u32,
	pub generated_at: Option<String>,
	pub commands: Catalog<Command>,
	pub faq: Catalog<FaqItem>,
	pub docs: Catalog<DocSection>,
	pub troubleshooting: Catalog<Troubleshooting>,
}

impl ContentIndex {
	/// Parse and validate an index from JSON text.
	///
	/// Sections absent from the file load as empty catalogs. Enumeration
	/// values outside the known sets fail the whole load.
	pub fn from_json_str(json: &str) -> Result<Self> {
		let exported: ExportedIndex = serde_json::from_str(json)?;
		if exported.version != INDEX_VERSION {
			return Err(ContentError::UnsupportedVersion {
				found: exported.version,
				supported: INDEX_VERSION,
			});
		}

		let index = Self {
			version: exported.version,
			generated_at: exported.generated_at,
			commands: Catalog::new(exported.commands)?,
			faq: Catalog::new(exported.faq)?,
			docs: Catalog::new(exported.docs)?,
			troubleshooting: Catalog::new(exported.troubleshooting)?,
		};

		info!(
			commands = index.commands.len(),
			faq = index.faq.len(),
			docs = index.docs.len(),
			troubleshooting = index.troubleshooting.len(),
			generated_at = index.generated_at.as_deref().unwrap_or("unknown"),
			"Loaded content index"
		);
		Ok(index)
	}

	/// Read and validate an index file.
	#[tracing::instrument(skip_all, fields(path = %path.display()))]
	pub fn from_file(path: &Path) -> Result<Self> {
		let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json_str(&json)
	}
}
