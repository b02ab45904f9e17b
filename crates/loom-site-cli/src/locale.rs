// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use loom_site_i18n::{resolve_locale, Locale};
use tracing::{debug, warn};

/// Pick the locale to render in.
///
/// An explicit `--locale` wins, then the operating system locale, then the
/// configured site default.
pub fn effective_locale(requested: Option<&str>, site_default: Locale) -> Locale {
	if let Some(code) = requested {
		if !loom_site_i18n::is_supported(code) {
			warn!(locale = %code, fallback = %site_default, "unsupported locale requested");
		}
		return resolve_locale(Some(code), site_default.code());
	}

	let detected = detect_locale();
	debug!(detected = ?detected, "system locale");
	resolve_locale(detected.as_deref(), site_default.code())
}

fn detect_locale() -> Option<String> {
	let system_locale = sys_locale::get_locale()?;
	let lang_code = system_locale.split(['_', '-']).next()?.to_lowercase();

	loom_site_i18n::is_supported(&lang_code).then_some(lang_code)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_explicit_locale_wins() {
		assert_eq!(effective_locale(Some("ru"), Locale::En), Locale::Ru);
		assert_eq!(effective_locale(Some("zh-TW"), Locale::En), Locale::Zh);
	}

	#[test]
	fn test_unsupported_explicit_locale_uses_site_default() {
		assert_eq!(effective_locale(Some("pt"), Locale::Fr), Locale::Fr);
	}

	#[test]
	fn test_detected_locale_is_supported() {
		if let Some(code) = detect_locale() {
			assert!(loom_site_i18n::is_supported(&code));
		}
	}
}
