// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Content catalogs for the Loom site.
//!
//! Commands, FAQ items, documentation pages and troubleshooting entries are
//! loaded once from a JSON index, validated, and then only read. Pages narrow
//! a catalog with [`search`] and the facet filters, which return borrowed
//! entries in catalog order.
//!
//! # Example
//!
//! ```
//! use loom_site_content::{builtin, filter_by_category, search, CommandCategory, Facet};
//!
//! let commands = &builtin::index().commands;
//! let found = search(commands, "google");
//! let auth = filter_by_category(found, &Facet::Only(CommandCategory::Auth));
//! assert_eq!(auth[0].id, "auth");
//! ```

pub mod builtin;
mod catalog;
mod entry;
mod error;
mod facet;
mod index;
mod search;

pub use catalog::Catalog;
pub use entry::{
	CatalogEntry, Command, CommandCategory, CommandExample, CommandOption, DocCategory,
	DocSection, Difficulty, FaqCategory, FaqItem, Leveled, Severity, Troubleshooting,
};
pub use error::{ContentError, Result, UnknownVariant};
pub use facet::Facet;
pub use index::{ContentIndex, INDEX_VERSION};
pub use search::{
	filter_by_category, filter_by_difficulty, filter_by_level, filter_by_severity,
	matches_query, search, SearchQuery, Unleveled,
};
