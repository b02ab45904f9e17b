// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Filter values chosen by the visitor.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A category or level filter.
///
/// Parsing never fails. Exactly `"all"` selects everything; any other value
/// is compared verbatim against the enumeration, and one outside it is kept
/// as [`Facet::Unknown`] and selects nothing. A facet the caller did not set
/// at all is [`Facet::default`], which is `All`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet<T> {
	All,
	Only(T),
	Unknown(String),
}

impl<T: FromStr> Facet<T> {
	pub fn parse(raw: &str) -> Self {
		if raw == "all" {
			return Facet::All;
		}
		match raw.parse() {
			Ok(value) => Facet::Only(value),
			Err(_) => Facet::Unknown(raw.to_string()),
		}
	}
}

impl<T: PartialEq> Facet<T> {
	pub fn matches(&self, value: &T) -> bool {
		match self {
			Facet::All => true,
			Facet::Only(wanted) => wanted == value,
			Facet::Unknown(_) => false,
		}
	}
}

impl<T> Default for Facet<T> {
	fn default() -> Self {
		Facet::All
	}
}

impl<T> Facet<T> {
	pub fn is_all(&self) -> bool {
		matches!(self, Facet::All)
	}
}

impl<T> From<T> for Facet<T> {
	fn from(value: T) -> Self {
		Facet::Only(value)
	}
}

impl<T: FromStr> FromStr for Facet<T> {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Facet::parse(s))
	}
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Facet::All => f.write_str("all"),
			Facet::Only(value) => value.fmt(f),
			Facet::Unknown(raw) => f.write_str(raw),
		}
	}
}
