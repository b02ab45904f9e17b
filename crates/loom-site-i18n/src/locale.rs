// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported site locales and their metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::I18nError;

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Left-to-right (e.g., English, Hindi)
	Ltr,
	/// Right-to-left
	Rtl,
}

impl Direction {
	/// Returns the HTML `dir` attribute value.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}

	/// Returns the CSS `text-align` value for the start of text.
	pub fn text_align_start(&self) -> &'static str {
		match self {
			Direction::Ltr => "left",
			Direction::Rtl => "right",
		}
	}
}

/// A locale the site ships translations for.
///
/// The set is closed: anything outside it is resolved as English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	En,
	Zh,
	Hi,
	Fr,
	De,
	Ja,
	Ko,
	Es,
	Ru,
}

impl Locale {
	/// Every supported locale, English first.
	pub const ALL: [Locale; 9] = [
		Locale::En,
		Locale::Zh,
		Locale::Hi,
		Locale::Fr,
		Locale::De,
		Locale::Ja,
		Locale::Ko,
		Locale::Es,
		Locale::Ru,
	];

	/// ISO 639-1 code used in bundle file names and URLs.
	pub fn code(&self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Zh => "zh",
			Locale::Hi => "hi",
			Locale::Fr => "fr",
			Locale::De => "de",
			Locale::Ja => "ja",
			Locale::Ko => "ko",
			Locale::Es => "es",
			Locale::Ru => "ru",
		}
	}

	/// Metadata for this locale.
	pub fn info(&self) -> &'static LocaleInfo {
		// LOCALES is declared in the same order as ALL.
		&LOCALES[*self as usize]
	}

	/// Returns true for the completeness baseline.
	pub fn is_default(&self) -> bool {
		*self == DEFAULT_LOCALE
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl FromStr for Locale {
	type Err = I18nError;

	/// Parses a locale code, accepting region-tagged forms by their primary
	/// subtag (`zh-CN`, `en_US`, `FR-fr`).
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let primary = s
			.trim()
			.split(['-', '_'])
			.next()
			.unwrap_or_default()
			.to_ascii_lowercase();

		Locale::ALL
			.iter()
			.copied()
			.find(|l| l.code() == primary)
			.ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
	}
}

/// Metadata about a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	pub locale: Locale,
	/// ISO 639-1 language code (e.g., "en", "zh", "hi")
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
	/// Native name of the language
	pub native_name: &'static str,
	/// Text direction
	pub direction: Direction,
}

/// Locale every other bundle falls back to.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// All supported locales.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		locale: Locale::En,
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		locale: Locale::Zh,
		code: "zh",
		name: "Chinese",
		native_name: "中文",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		locale: Locale::Hi,
		code: "hi",
		name: "Hindi",
		native_name: "हिन्दी",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		locale: Locale::Fr,
		code: "fr",
		name: "French",
		native_name: "Français",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		locale: Locale::De,
		code: "de",
		name: "German",
		native_name: "Deutsch",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		locale: Locale::Ja,
		code: "ja",
		name: "Japanese",
		native_name: "日本語",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		locale: Locale::Ko,
		code: "ko",
		name: "Korean",
		native_name: "한국어",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		locale: Locale::Es,
		code: "es",
		name: "Spanish",
		native_name: "Español",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		locale: Locale::Ru,
		code: "ru",
		name: "Russian",
		native_name: "Русский",
		direction: Direction::Ltr,
	},
];

/// Get metadata for a locale code.
///
/// Returns `None` if the locale is not supported.
pub fn locale_info(code: &str) -> Option<&'static LocaleInfo> {
	code.parse::<Locale>().ok().map(|l| l.info())
}

/// Check if a locale uses right-to-left text direction.
///
/// Returns `false` for unsupported locales.
pub fn is_rtl(code: &str) -> bool {
	locale_info(code).is_some_and(|info| info.direction == Direction::Rtl)
}

/// Check if a locale code is supported.
pub fn is_supported(code: &str) -> bool {
	code.parse::<Locale>().is_ok()
}

/// Get all supported locales.
pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_locale_table_matches_enum_order() {
		assert_eq!(LOCALES.len(), Locale::ALL.len());
		for (info, locale) in LOCALES.iter().zip(Locale::ALL) {
			assert_eq!(info.locale, locale);
			assert_eq!(info.code, locale.code());
		}
	}

	#[test]
	fn test_locale_info_found() {
		let info = locale_info("en").unwrap();
		assert_eq!(info.code, "en");
		assert_eq!(info.name, "English");
		assert_eq!(info.direction, Direction::Ltr);
	}

	#[test]
	fn test_locale_info_not_found() {
		assert!(locale_info("xx").is_none());
		assert!(locale_info("ar").is_none());
	}

	#[test]
	fn test_parse_region_tagged_codes() {
		assert_eq!("zh-CN".parse::<Locale>().unwrap(), Locale::Zh);
		assert_eq!("en_US".parse::<Locale>().unwrap(), Locale::En);
		assert_eq!("FR-fr".parse::<Locale>().unwrap(), Locale::Fr);
		assert_eq!(" de ".parse::<Locale>().unwrap(), Locale::De);
	}

	#[test]
	fn test_parse_rejects_unknown() {
		assert!("".parse::<Locale>().is_err());
		assert!("pt".parse::<Locale>().is_err());
		assert!(matches!(
			"klingon".parse::<Locale>(),
			Err(I18nError::UnsupportedLocale(s)) if s == "klingon"
		));
	}

	#[test]
	fn test_is_supported() {
		for code in ["en", "zh", "hi", "fr", "de", "ja", "ko", "es", "ru"] {
			assert!(is_supported(code), "{code} should be supported");
		}
		assert!(!is_supported("it"));
		assert!(!is_supported(""));
	}

	#[test]
	fn test_no_shipped_locale_is_rtl() {
		for info in available_locales() {
			assert!(!is_rtl(info.code));
		}
		assert!(!is_rtl("unknown"));
	}

	#[test]
	fn test_direction_html_dir() {
		assert_eq!(Direction::Ltr.as_html_dir(), "ltr");
		assert_eq!(Direction::Rtl.as_html_dir(), "rtl");
	}

	#[test]
	fn test_direction_text_align() {
		assert_eq!(Direction::Ltr.text_align_start(), "left");
		assert_eq!(Direction::Rtl.text_align_start(), "right");
	}

	#[test]
	fn test_serde_uses_code() {
		assert_eq!(serde_json::to_string(&Locale::Ja).unwrap(), "\"ja\"");
		let parsed: Locale = serde_json::from_str("\"ko\"").unwrap();
		assert_eq!(parsed, Locale::Ko);
	}

	#[test]
	fn test_native_names() {
		assert_eq!(Locale::Hi.info().native_name, "हिन्दी");
		assert_eq!(Locale::Zh.info().native_name, "中文");
	}
}
