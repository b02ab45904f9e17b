// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization for the Loom site.
//!
//! Strings live in one JSON bundle per locale. Keys are dotted paths into the
//! bundle (`guidesCodeReview.hero.title`); whole top-level objects can be
//! taken as namespace slices for pages that render structured content.
//!
//! Lookups never fail. A key missing from the requested locale resolves from
//! English, and a key missing from English resolves to itself.
//!
//! # Example
//!
//! ```
//! use loom_site_i18n::{negotiate_accept_language, resolve_locale, t, Locale};
//!
//! // Embedded bundles
//! assert_eq!(t("fr", "nav.home"), "Accueil");
//!
//! // Untranslated keys fall back to English
//! assert_eq!(t("hi", "commands.title"), "Command reference");
//!
//! // Pick a locale for a visitor
//! let locale = negotiate_accept_language("ja, en;q=0.5").unwrap_or(resolve_locale(None, "en"));
//! assert_eq!(locale, Locale::Ja);
//! ```

pub mod builtin;
mod bundle;
mod coverage;
mod error;
mod locale;
mod localizer;
mod negotiate;

pub use builtin::{slice, t};
pub use bundle::Bundle;
pub use coverage::{coverage, CoverageReport, LocaleCoverage};
pub use error::{I18nError, Result};
pub use locale::{
	available_locales, is_rtl, is_supported, locale_info, Direction, Locale, LocaleInfo,
};
pub use localizer::{LoadState, Localizer};
pub use negotiate::{negotiate_accept_language, resolve_locale};

pub use locale::{DEFAULT_LOCALE, LOCALES};
