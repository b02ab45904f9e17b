// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Validated, immutable catalogs.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::entry::CatalogEntry;
use crate::error::{ContentError, Result};
use crate::search;

/// An ordered, read-only set of entries with unique ids.
///
/// Clones share the same storage.
#[derive(Debug)]
pub struct Catalog<E> {
	entries: Arc<[E]>,
	by_id: Arc<HashMap<String, usize>>,
}

impl<E> Clone for Catalog<E> {
	fn clone(&self) -> Self {
		Self {
			entries: Arc::clone(&self.entries),
			by_id: Arc::clone(&self.by_id),
		}
	}
}

impl<E> Default for Catalog<E> {
	fn default() -> Self {
		Self {
			entries: Arc::from(Vec::new()),
			by_id: Arc::default(),
		}
	}
}

impl<E: CatalogEntry> Catalog<E> {
	/// Validate and freeze a list of entries.
	///
	/// Ids must be non-empty and unique. Related ids that point at nothing
	/// are logged and kept.
	pub fn new(entries: Vec<E>) -> Result<Self> {
		let mut by_id = HashMap::with_capacity(entries.len());
		for (index, entry) in entries.iter().enumerate() {
			let id = entry.id();
			if id.trim().is_empty() {
				return Err(ContentError::EmptyId {
					catalog: E::KIND,
					index,
				});
			}
			if by_id.insert(id.to_string(), index).is_some() {
				return Err(ContentError::DuplicateId {
					catalog: E::KIND,
					id: id.to_string(),
				});
			}
		}

		for entry in &entries {
			for related in entry.related_ids() {
				if !by_id.contains_key(related) {
					warn!(
						catalog = E::KIND,
						id = entry.id(),
						related = %related,
						"related entry does not exist"
					);
				}
			}
		}

		debug!(catalog = E::KIND, count = entries.len(), "catalog built");
		Ok(Self {
			entries: Arc::from(entries),
			by_id: Arc::new(by_id),
		})
	}

	pub fn entries(&self) -> &[E] {
		&self.entries
	}

	pub fn iter(&self) -> std::slice::Iter<'_, E> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, id: &str) -> Option<&E> {
		self.by_id.get(id).map(|&index| &self.entries[index])
	}

	/// Entries listed as related to `entry`, in declared order.
	///
	/// Dangling ids are skipped.
	pub fn related(&self, entry: &E) -> Vec<&E> {
		entry
			.related_ids()
			.iter()
			.filter_map(|id| self.get(id))
			.collect()
	}

	/// Free-text search over this catalog.
	pub fn search(&self, query: &str) -> Vec<&E> {
		search::search(self.iter(), query)
	}
}

impl<'a, E> IntoIterator for &'a Catalog<E> {
	type Item = &'a E;
	type IntoIter = std::slice::Iter<'a, E>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
