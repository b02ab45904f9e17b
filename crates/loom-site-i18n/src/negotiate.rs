// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale negotiation.

use crate::locale::{Locale, DEFAULT_LOCALE};

/// Resolve the effective locale from a visitor preference and the site default.
///
/// Resolution order (highest to lowest priority):
/// 1. Visitor's stored locale preference (if supported)
/// 2. Site default locale (if supported)
/// 3. English
///
/// # Example
///
/// ```
/// use loom_site_i18n::{resolve_locale, Locale};
///
/// assert_eq!(resolve_locale(Some("fr"), "en"), Locale::Fr);
/// assert_eq!(resolve_locale(None, "ja"), Locale::Ja);
/// assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), Locale::En);
/// ```
pub fn resolve_locale(user_locale: Option<&str>, site_default: &str) -> Locale {
	if let Some(locale) = user_locale.and_then(|l| l.parse().ok()) {
		return locale;
	}

	site_default.parse().unwrap_or(DEFAULT_LOCALE)
}

/// Pick the best supported locale from an `Accept-Language` header value.
///
/// Entries are weighted by their `q` parameter (default `1.0`); among equal
/// weights the earlier entry wins. Entries with `q=0`, wildcards and
/// unsupported tags are ignored.
pub fn negotiate_accept_language(header: &str) -> Option<Locale> {
	let mut best: Option<(Locale, f32)> = None;

	for part in header.split(',') {
		let mut pieces = part.split(';');
		let tag = pieces.next().unwrap_or_default().trim();
		if tag.is_empty() || tag == "*" {
			continue;
		}

		let weight = pieces
			.filter_map(|p| p.trim().strip_prefix("q="))
			.next()
			.map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
			.unwrap_or(1.0);
		if weight <= 0.0 {
			continue;
		}

		let Ok(locale) = tag.parse::<Locale>() else {
			continue;
		};

		if best.map_or(true, |(_, w)| weight > w) {
			best = Some((locale, weight));
		}
	}

	best.map(|(locale, _)| locale)
}
