// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog entry types and the enumerations they are filtered by.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownVariant;

/// An entry in one of the site catalogs.
pub trait CatalogEntry {
	type Category: Copy + PartialEq + fmt::Debug;

	/// Catalog name used in log fields and errors.
	const KIND: &'static str;

	fn id(&self) -> &str;

	fn category(&self) -> Self::Category;

	/// Human-readable heading (command name, FAQ question, doc title).
	fn title(&self) -> &str;

	/// Fields that free-text search matches against.
	fn search_fields(&self) -> Vec<&str>;

	/// Ids of related entries in the same catalog. May dangle.
	fn related_ids(&self) -> &[String];
}

/// An entry that also carries an ordinal level.
pub trait Leveled: CatalogEntry {
	type Level: Copy + PartialEq + fmt::Debug;

	fn level(&self) -> Self::Level;
}

// =============================================================================
// Enumerations
// =============================================================================

macro_rules! define_catalog_enum {
	($(#[$meta:meta])* $name:ident, $kind:expr, { $($variant:ident => $text:literal),+ $(,)? }) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
		#[serde(rename_all = "kebab-case")]
		pub enum $name {
			$($variant),+
		}

		impl $name {
			pub const ALL: &'static [$name] = &[$($name::$variant),+];

			pub fn as_str(&self) -> &'static str {
				match self {
					$($name::$variant => $text),+
				}
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl FromStr for $name {
			type Err = UnknownVariant;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$($text => Ok($name::$variant),)+
					_ => Err(UnknownVariant {
						kind: $kind,
						value: s.to_string(),
					}),
				}
			}
		}
	};
}

define_catalog_enum!(
	/// Command reference sections.
	CommandCategory, "command category", {
		Core => "core",
		Auth => "auth",
		Config => "config",
		Analysis => "analysis",
		Advanced => "advanced",
	}
);

define_catalog_enum!(
	/// FAQ and troubleshooting sections.
	FaqCategory, "FAQ category", {
		General => "general",
		Installation => "installation",
		Authentication => "authentication",
		Usage => "usage",
		Troubleshooting => "troubleshooting",
		Security => "security",
	}
);

define_catalog_enum!(
	/// Diataxis documentation kinds.
	DocCategory, "doc category", {
		Tutorial => "tutorial",
		HowTo => "how-to",
		Reference => "reference",
		Explanation => "explanation",
	}
);

define_catalog_enum!(
	/// How much prior knowledge an FAQ answer assumes. Ordered.
	Difficulty, "difficulty", {
		Beginner => "beginner",
		Intermediate => "intermediate",
		Advanced => "advanced",
	}
);

define_catalog_enum!(
	/// How badly a troubleshooting problem blocks the user. Ordered.
	Severity, "severity", {
		Low => "low",
		Medium => "medium",
		High => "high",
	}
);

// =============================================================================
// Entries
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOption {
	pub flag: String,
	pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandExample {
	pub command: String,
	pub description: String,
}

/// A CLI command in the command reference.
///
/// Options and examples are displayed but not searched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
	pub id: String,
	pub name: String,
	pub syntax: String,
	pub description: String,
	pub category: CommandCategory,
	#[serde(default)]
	pub aliases: Vec<String>,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub options: Vec<CommandOption>,
	#[serde(default)]
	pub examples: Vec<CommandExample>,
	#[serde(default)]
	pub related: Vec<String>,
}

impl CatalogEntry for Command {
	type Category = CommandCategory;

	const KIND: &'static str = "command";

	fn id(&self) -> &str {
		&self.id
	}

	fn category(&self) -> CommandCategory {
		self.category
	}

	fn title(&self) -> &str {
		&self.name
	}

	fn search_fields(&self) -> Vec<&str> {
		let mut fields = vec![
			self.id.as_str(),
			self.name.as_str(),
			self.syntax.as_str(),
			self.description.as_str(),
		];
		fields.extend(self.aliases.iter().map(String::as_str));
		fields.extend(self.tags.iter().map(String::as_str));
		fields
	}

	fn related_ids(&self) -> &[String] {
		&self.related
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
	pub id: String,
	pub question: String,
	pub answer: String,
	pub category: FaqCategory,
	pub difficulty: Difficulty,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub related: Vec<String>,
}

impl CatalogEntry for FaqItem {
	type Category = FaqCategory;

	const KIND: &'static str = "faq";

	fn id(&self) -> &str {
		&self.id
	}

	fn category(&self) -> FaqCategory {
		self.category
	}

	fn title(&self) -> &str {
		&self.question
	}

	fn search_fields(&self) -> Vec<&str> {
		let mut fields = vec![self.id.as_str(), self.question.as_str(), self.answer.as_str()];
		fields.extend(self.tags.iter().map(String::as_str));
		fields
	}

	fn related_ids(&self) -> &[String] {
		&self.related
	}
}

impl Leveled for FaqItem {
	type Level = Difficulty;

	fn level(&self) -> Difficulty {
		self.difficulty
	}
}

/// A documentation page summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocSection {
	pub id: String,
	pub title: String,
	#[serde(default)]
	pub summary: String,
	pub body: String,
	pub category: DocCategory,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub related: Vec<String>,
}

impl CatalogEntry for DocSection {
	type Category = DocCategory;

	const KIND: &'static str = "doc";

	fn id(&self) -> &str {
		&self.id
	}

	fn category(&self) -> DocCategory {
		self.category
	}

	fn title(&self) -> &str {
		&self.title
	}

	fn search_fields(&self) -> Vec<&str> {
		let mut fields = vec![
			self.id.as_str(),
			self.title.as_str(),
			self.summary.as_str(),
			self.body.as_str(),
		];
		fields.extend(self.tags.iter().map(String::as_str));
		fields
	}

	fn related_ids(&self) -> &[String] {
		&self.related
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Troubleshooting {
	pub id: String,
	pub problem: String,
	pub symptoms: String,
	pub solution: String,
	pub category: FaqCategory,
	pub severity: Severity,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub related: Vec<String>,
}

impl CatalogEntry for Troubleshooting {
	type Category = FaqCategory;

	const KIND: &'static str = "troubleshooting";

	fn id(&self) -> &str {
		&self.id
	}

	fn category(&self) -> FaqCategory {
		self.category
	}

	fn title(&self) -> &str {
		&self.problem
	}

	fn search_fields(&self) -> Vec<&str> {
		let mut fields = vec![
			self.id.as_str(),
			self.problem.as_str(),
			self.symptoms.as_str(),
			self.solution.as_str(),
		];
		fields.extend(self.tags.iter().map(String::as_str));
		fields
	}

	fn related_ids(&self) -> &[String] {
		&self.related
	}
}

impl Leveled for Troubleshooting {
	type Level = Severity;

	fn level(&self) -> Severity {
		self.severity
	}
}
