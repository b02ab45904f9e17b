// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The content index compiled into the binary.

use once_cell::sync::Lazy;
use tracing::error;

use crate::index::ContentIndex;

const INDEX_JSON: &str = include_str!("../content/catalog.json");

static INDEX: Lazy<ContentIndex> = Lazy::new(|| {
	ContentIndex::from_json_str(INDEX_JSON).unwrap_or_else(|e| {
		error!(error = %e, "embedded content index is invalid, serving empty catalogs");
		ContentIndex::default()
	})
});

/// The embedded content index, parsed on first use.
pub fn index() -> &'static ContentIndex {
	&INDEX
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::entry::CatalogEntry;

	#[test]
	fn test_embedded_index_is_valid() {
		let index = ContentIndex::from_json_str(INDEX_JSON).unwrap();
		assert!(!index.commands.is_empty());
		assert!(!index.faq.is_empty());
		assert!(!index.docs.is_empty());
		assert!(!index.troubleshooting.is_empty());
	}

	#[test]
	fn test_embedded_related_ids_resolve() {
		let index = index();
		for command in &index.commands {
			assert_eq!(
				index.commands.related(command).len(),
				command.related_ids().len(),
				"{} has dangling related ids",
				command.id
			);
		}
		for item in &index.faq {
			assert_eq!(index.faq.related(item).len(), item.related_ids().len());
		}
	}
}
