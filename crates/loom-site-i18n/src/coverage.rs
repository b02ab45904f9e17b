// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation coverage audit against the English baseline.

use serde::Serialize;

use crate::locale::{Locale, DEFAULT_LOCALE};
use crate::localizer::Localizer;

/// Coverage of one locale relative to English.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocaleCoverage {
	pub locale: Locale,
	/// Keys English has and this locale lacks.
	pub missing: Vec<String>,
	/// Keys this locale has and English lacks.
	pub orphaned: Vec<String>,
	/// Number of English keys this locale translates.
	pub translated: usize,
	/// Number of English keys.
	pub total: usize,
}

impl LocaleCoverage {
	/// Share of English keys this locale translates, in `0.0..=1.0`.
	pub fn ratio(&self) -> f64 {
		if self.total == 0 {
			1.0
		} else {
			self.translated as f64 / self.total as f64
		}
	}

	pub fn is_complete(&self) -> bool {
		self.missing.is_empty()
	}
}

/// Coverage of every loaded non-English locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoverageReport {
	pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
	/// True when no loaded locale is missing an English key.
	pub fn is_complete(&self) -> bool {
		self.locales.iter().all(LocaleCoverage::is_complete)
	}

	pub fn locale(&self, locale: Locale) -> Option<&LocaleCoverage> {
		self.locales.iter().find(|c| c.locale == locale)
	}
}

/// Compare every loaded locale's keys with the English bundle.
///
/// Locales that are not loaded are left out. Without an English bundle
/// every key of every other locale counts as orphaned.
pub fn coverage(localizer: &Localizer) -> CoverageReport {
	let english = localizer.bundle(DEFAULT_LOCALE).unwrap_or_default();

	let locales = localizer
		.loaded_locales()
		.into_iter()
		.filter(|l| *l != DEFAULT_LOCALE)
		.filter_map(|locale| {
			let bundle = localizer.bundle(locale)?;

			let missing: Vec<String> = english
				.keys()
				.filter(|k| !bundle.contains(k))
				.map(str::to_owned)
				.collect();
			let orphaned: Vec<String> = bundle
				.keys()
				.filter(|k| !english.contains(k))
				.map(str::to_owned)
				.collect();

			Some(LocaleCoverage {
				locale,
				translated: english.len() - missing.len(),
				total: english.len(),
				missing,
				orphaned,
			})
		})
		.collect();

	CoverageReport { locales }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn localizer() -> Localizer {
		let l = Localizer::new();
		l.load_str(
			Locale::En,
			r#"{ "nav": { "home": "Home", "faq": "FAQ", "docs": "Docs" }, "footer": "Made with care" }"#,
		)
		.unwrap();
		l.load_str(
			Locale::De,
			r#"{ "nav": { "home": "Start", "faq": "FAQ", "docs": "Doku" }, "footer": "Mit Sorgfalt" }"#,
		)
		.unwrap();
		l.load_str(Locale::Ja, r#"{ "nav": { "home": "ホーム", "blog": "ブログ" } }"#)
			.unwrap();
		l
	}

	#[test]
	fn test_complete_locale() {
		let report = coverage(&localizer());
		let de = report.locale(Locale::De).unwrap();
		assert!(de.is_complete());
		assert_eq!(de.translated, 4);
		assert_eq!(de.ratio(), 1.0);
	}

	#[test]
	fn test_partial_locale() {
		let report = coverage(&localizer());
		let ja = report.locale(Locale::Ja).unwrap();
		assert_eq!(ja.missing, vec!["footer", "nav.docs", "nav.faq"]);
		assert_eq!(ja.orphaned, vec!["nav.blog"]);
		assert_eq!(ja.translated, 1);
		assert_eq!(ja.total, 4);
		assert!((ja.ratio() - 0.25).abs() < f64::EPSILON);
		assert!(!report.is_complete());
	}

	#[test]
	fn test_english_and_unloaded_locales_excluded() {
		let report = coverage(&localizer());
		assert!(report.locale(Locale::En).is_none());
		assert!(report.locale(Locale::Ko).is_none());
		assert_eq!(report.locales.len(), 2);
	}

	#[test]
	fn test_empty_localizer() {
		let report = coverage(&Localizer::new());
		assert!(report.locales.is_empty());
		assert!(report.is_complete());
	}
}
