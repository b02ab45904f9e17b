// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer for merging from multiple sources.

use serde::Deserialize;
use std::path::PathBuf;

/// Partial configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigLayer {
	#[serde(default)]
	pub site: Option<SiteLayer>,
	#[serde(default)]
	pub search: Option<SearchLayer>,
	#[serde(default)]
	pub logging: Option<LoggingLayer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteLayer {
	#[serde(default)]
	pub default_locale: Option<String>,
	#[serde(default)]
	pub locales_dir: Option<PathBuf>,
	#[serde(default)]
	pub content_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchLayer {
	#[serde(default)]
	pub min_query_len: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoggingLayer {
	#[serde(default)]
	pub level: Option<String>,
	#[serde(default)]
	pub format: Option<String>,
}

impl ConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ConfigLayer) {
		merge_option(&mut self.site, other.site, SiteLayer::merge);
		merge_option(&mut self.search, other.search, SearchLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingLayer::merge);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

impl SiteLayer {
	fn merge(&mut self, other: SiteLayer) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.locales_dir.is_some() {
			self.locales_dir = other.locales_dir;
		}
		if other.content_path.is_some() {
			self.content_path = other.content_path;
		}
	}
}

impl SearchLayer {
	fn merge(&mut self, other: SearchLayer) {
		if other.min_query_len.is_some() {
			self.min_query_len = other.min_query_len;
		}
	}
}

impl LoggingLayer {
	fn merge(&mut self, other: LoggingLayer) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.format.is_some() {
			self.format = other.format;
		}
	}
}
