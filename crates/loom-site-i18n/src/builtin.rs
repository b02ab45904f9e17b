// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bundles compiled into the binary.

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::locale::Locale;
use crate::localizer::Localizer;

const BUNDLES: [(Locale, &str); 9] = [
	(Locale::En, include_str!("../locales/en.json")),
	(Locale::Zh, include_str!("../locales/zh.json")),
	(Locale::Hi, include_str!("../locales/hi.json")),
	(Locale::Fr, include_str!("../locales/fr.json")),
	(Locale::De, include_str!("../locales/de.json")),
	(Locale::Ja, include_str!("../locales/ja.json")),
	(Locale::Ko, include_str!("../locales/ko.json")),
	(Locale::Es, include_str!("../locales/es.json")),
	(Locale::Ru, include_str!("../locales/ru.json")),
];

static LOCALIZER: Lazy<Localizer> = Lazy::new(|| {
	let localizer = Localizer::new();
	for (locale, json) in BUNDLES {
		// A broken embedded bundle degrades to English like any other.
		let _ = localizer.load_str(locale, json);
	}
	localizer
});

/// The localizer holding every embedded bundle.
pub fn localizer() -> &'static Localizer {
	&LOCALIZER
}

/// Translate a key using the embedded bundles.
pub fn t(locale: &str, key: &str) -> String {
	LOCALIZER.t(locale, key)
}

/// Namespace slice from the embedded bundles.
pub fn slice(locale: Locale, namespace: &str) -> Map<String, Value> {
	LOCALIZER.slice(locale, namespace)
}
