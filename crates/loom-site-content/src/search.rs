// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Free-text search and facet filtering over catalog entries.
//!
//! Every function here is a pure subset predicate: it keeps entries in input
//! order, never mutates its input, and composes with the others in any order.

use std::fmt;
use std::str::FromStr;

use crate::entry::{CatalogEntry, Difficulty, Leveled, Severity};
use crate::error::UnknownVariant;
use crate::facet::Facet;

/// Whether any searchable field of `entry` contains `needle`.
///
/// `needle` must already be lowercased.
pub fn matches_query<E: CatalogEntry + ?Sized>(entry: &E, needle: &str) -> bool {
	entry
		.search_fields()
		.iter()
		.any(|field| field.to_lowercase().contains(needle))
}

/// Entries with a searchable field containing `query`, case-insensitively.
///
/// The query is trimmed first; a blank query keeps every entry.
pub fn search<'a, E, I>(entries: I, query: &str) -> Vec<&'a E>
where
	E: CatalogEntry + 'a,
	I: IntoIterator<Item = &'a E>,
{
	let needle = query.trim().to_lowercase();
	if needle.is_empty() {
		return entries.into_iter().collect();
	}
	entries
		.into_iter()
		.filter(|entry| matches_query(*entry, &needle))
		.collect()
}

pub fn filter_by_category<'a, E, I>(entries: I, category: &Facet<E::Category>) -> Vec<&'a E>
where
	E: CatalogEntry + 'a,
	I: IntoIterator<Item = &'a E>,
{
	entries
		.into_iter()
		.filter(|entry| category.matches(&entry.category()))
		.collect()
}

pub fn filter_by_level<'a, E, I>(entries: I, level: &Facet<E::Level>) -> Vec<&'a E>
where
	E: Leveled + 'a,
	I: IntoIterator<Item = &'a E>,
{
	entries
		.into_iter()
		.filter(|entry| level.matches(&entry.level()))
		.collect()
}

pub fn filter_by_difficulty<'a, E, I>(entries: I, difficulty: &Facet<Difficulty>) -> Vec<&'a E>
where
	E: Leveled<Level = Difficulty> + 'a,
	I: IntoIterator<Item = &'a E>,
{
	filter_by_level(entries, difficulty)
}

pub fn filter_by_severity<'a, E, I>(entries: I, severity: &Facet<Severity>) -> Vec<&'a E>
where
	E: Leveled<Level = Severity> + 'a,
	I: IntoIterator<Item = &'a E>,
{
	filter_by_level(entries, severity)
}

/// Level type for catalogs whose entries have no level.
///
/// Uninhabited, so a level facet over it is either `All` or `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unleveled {}

impl FromStr for Unleveled {
	type Err = UnknownVariant;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Err(UnknownVariant {
			kind: "level",
			value: s.to_string(),
		})
	}
}

impl fmt::Display for Unleveled {
	fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {}
	}
}

/// The visitor's current search state for one catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery<C, L = Unleveled> {
	pub text: String,
	pub category: Facet<C>,
	pub level: Facet<L>,
}

impl<C, L> Default for SearchQuery<C, L> {
	fn default() -> Self {
		Self {
			text: String::new(),
			category: Facet::All,
			level: Facet::All,
		}
	}
}

impl<C: FromStr, L: FromStr> SearchQuery<C, L> {
	/// Build a query from raw form values. Missing facets mean "all".
	pub fn parse(text: &str, category: Option<&str>, level: Option<&str>) -> Self {
		Self {
			text: text.to_string(),
			category: category.map(Facet::parse).unwrap_or_default(),
			level: level.map(Facet::parse).unwrap_or_default(),
		}
	}
}

impl<C, L> SearchQuery<C, L>
where
	C: PartialEq,
	L: PartialEq,
{
	/// Search text, then category, then level.
	pub fn apply<'a, E, I>(&self, entries: I) -> Vec<&'a E>
	where
		E: Leveled<Category = C, Level = L> + 'a,
		I: IntoIterator<Item = &'a E>,
	{
		let found = search(entries, &self.text);
		let found = filter_by_category(found, &self.category);
		filter_by_level(found, &self.level)
	}

	/// Search text and category for a catalog without levels.
	///
	/// Any level facet other than `All` matches nothing.
	pub fn apply_unleveled<'a, E, I>(&self, entries: I) -> Vec<&'a E>
	where
		E: CatalogEntry<Category = C> + 'a,
		I: IntoIterator<Item = &'a E>,
	{
		if !self.level.is_all() {
			return Vec::new();
		}
		let found = search(entries, &self.text);
		filter_by_category(found, &self.category)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::entry::{Command, CommandCategory, FaqCategory, FaqItem};

	fn command(id: &str, category: CommandCategory, description: &str) -> Command {
		Command {
			id: id.to_string(),
			name: id.to_string(),
			syntax: format!("loom {id}"),
			description: description.to_string(),
			category,
			aliases: vec![],
			tags: vec![],
			options: vec![],
			examples: vec![],
			related: vec![],
		}
	}

	fn commands() -> Vec<Command> {
		vec![
			command("chat", CommandCategory::Core, "Interactive AI session"),
			command("auth", CommandCategory::Auth, "Authenticate with Google"),
		]
	}

	fn ids<E: CatalogEntry>(entries: &[&E]) -> Vec<String> {
		entries.iter().map(|e| e.id().to_string()).collect()
	}

	fn faq(id: &str, category: FaqCategory, difficulty: Difficulty) -> FaqItem {
		FaqItem {
			id: id.to_string(),
			question: format!("Question about {id}?"),
			answer: "See the docs.".to_string(),
			category,
			difficulty,
			tags: vec![],
			related: vec![],
		}
	}

	#[test]
	fn test_search_scenario() {
		let catalog = commands();
		assert_eq!(ids(&search(&catalog, "AI")), vec!["chat"]);
		assert!(search(&catalog, "xyz").is_empty());
	}

	#[test]
	fn test_filter_scenario() {
		let catalog = commands();
		let auth = filter_by_category(&catalog, &Facet::parse("auth"));
		assert_eq!(ids(&auth), vec!["auth"]);
	}

	#[test]
	fn test_blank_query_is_identity() {
		let catalog = commands();
		assert_eq!(ids(&search(&catalog, "")), vec!["chat", "auth"]);
		assert_eq!(ids(&search(&catalog, "   ")), vec!["chat", "auth"]);
	}

	#[test]
	fn test_query_is_trimmed_and_case_insensitive() {
		let catalog = commands();
		assert_eq!(ids(&search(&catalog, "  google ")), vec!["auth"]);
		assert_eq!(ids(&search(&catalog, "INTERACTIVE")), vec!["chat"]);
	}

	#[test]
	fn test_search_covers_aliases_and_tags() {
		let mut catalog = commands();
		catalog[0].aliases.push("c".to_string());
		catalog[1].tags.push("oauth".to_string());
		assert_eq!(ids(&search(&catalog, "OAuth")), vec!["auth"]);
	}

	#[test]
	fn test_unknown_category_matches_nothing() {
		let catalog = commands();
		assert!(filter_by_category(&catalog, &Facet::parse("billing")).is_empty());
		assert!(filter_by_category(&catalog, &Facet::parse(" auth ")).is_empty());
		assert!(filter_by_category(&catalog, &Facet::parse("")).is_empty());
		assert!(filter_by_category(&catalog, &Facet::parse("ALL")).is_empty());
	}

	#[test]
	fn test_filter_by_difficulty() {
		let items = vec![
			faq("install", FaqCategory::Installation, Difficulty::Beginner),
			faq("proxy", FaqCategory::Usage, Difficulty::Advanced),
			faq("api-key", FaqCategory::Authentication, Difficulty::Beginner),
		];
		let beginner = filter_by_difficulty(&items, &Facet::Only(Difficulty::Beginner));
		assert_eq!(ids(&beginner), vec!["install", "api-key"]);
		assert_eq!(filter_by_difficulty(&items, &Facet::All).len(), 3);
		assert!(filter_by_difficulty(&items, &Facet::parse("expert")).is_empty());
	}

	#[test]
	fn test_query_composes_filters() {
		let items = vec![
			faq("install", FaqCategory::Installation, Difficulty::Beginner),
			faq("upgrade", FaqCategory::Installation, Difficulty::Intermediate),
			faq("api-key", FaqCategory::Authentication, Difficulty::Beginner),
		];
		let query: SearchQuery<FaqCategory, Difficulty> =
			SearchQuery::parse("question", Some("installation"), Some("beginner"));
		assert_eq!(ids(&query.apply(&items)), vec!["install"]);

		let everything: SearchQuery<FaqCategory, Difficulty> = SearchQuery::default();
		assert_eq!(everything.apply(&items).len(), 3);
	}

	#[test]
	fn test_unleveled_query() {
		let catalog = commands();
		let query: SearchQuery<CommandCategory> = SearchQuery::parse("", Some("core"), None);
		assert_eq!(ids(&query.apply_unleveled(&catalog)), vec!["chat"]);

		let with_level: SearchQuery<CommandCategory> =
			SearchQuery::parse("", None, Some("beginner"));
		assert!(with_level.apply_unleveled(&catalog).is_empty());

		let all_levels: SearchQuery<CommandCategory> = SearchQuery::parse("", None, Some("all"));
		assert_eq!(all_levels.apply_unleveled(&catalog).len(), 2);
	}

	#[test]
	fn test_missing_facet_is_all_but_blank_facet_is_not() {
		let catalog = commands();
		let unset: SearchQuery<CommandCategory> = SearchQuery::parse("", None, None);
		assert_eq!(unset.apply_unleveled(&catalog).len(), 2);

		let blank: SearchQuery<CommandCategory> = SearchQuery::parse("", Some(""), None);
		assert_eq!(blank.category, Facet::Unknown(String::new()));
		assert!(blank.apply_unleveled(&catalog).is_empty());
	}

	#[test]
	fn test_input_is_untouched() {
		let catalog = commands();
		let before = catalog.clone();
		let _ = search(&catalog, "chat");
		let _ = filter_by_category(&catalog, &Facet::Only(CommandCategory::Auth));
		assert_eq!(catalog, before);
	}
}
