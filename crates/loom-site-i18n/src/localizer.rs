// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session-wide bundle store and translation lookup.
//!
//! Every locale moves through `Uninitialized -> Loading -> Ready`. `Ready` is
//! terminal until [`Localizer::reload`] is called. Bundles are replaced
//! wholesale behind an `Arc`, so a reader either sees the old bundle or the
//! new one.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use crate::bundle::Bundle;
use crate::error::{I18nError, Result};
use crate::locale::{Locale, DEFAULT_LOCALE};

/// Load progress of a single locale bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadState {
	/// Nothing has been requested for this locale yet.
	Uninitialized,
	/// A fetch is in flight. A previous bundle may still be served.
	Loading,
	/// A bundle has been installed (possibly an empty one after a failure).
	Ready,
}

#[derive(Debug, Clone)]
struct LocaleSlot {
	state: LoadState,
	bundle: Option<Arc<Bundle>>,
}

/// Translation lookup over the bundles loaded in this session.
///
/// # Example
///
/// ```
/// use loom_site_i18n::{Locale, Localizer};
///
/// let localizer = Localizer::new();
/// localizer.load_str(Locale::En, r#"{"a.b": "Hello"}"#).unwrap();
/// localizer.load_str(Locale::Fr, "{}").unwrap();
///
/// assert_eq!(localizer.t("fr", "a.b"), "Hello");
/// assert_eq!(localizer.t("de", "a.b"), "Hello");
/// assert_eq!(localizer.t("en", "c.d"), "c.d");
/// ```
#[derive(Debug)]
pub struct Localizer {
	slots: RwLock<HashMap<Locale, LocaleSlot>>,
	active: RwLock<Locale>,
}

impl Default for Localizer {
	fn default() -> Self {
		Self::new()
	}
}

impl Localizer {
	/// Create a localizer with no bundles and English active.
	pub fn new() -> Self {
		Self {
			slots: RwLock::new(HashMap::new()),
			active: RwLock::new(DEFAULT_LOCALE),
		}
	}

	/// Current load state of a locale.
	pub fn state(&self, locale: Locale) -> LoadState {
		self.read_slots()
			.get(&locale)
			.map_or(LoadState::Uninitialized, |slot| slot.state)
	}

	/// True until a bundle for `locale` has been installed at least once.
	///
	/// A locale being reloaded keeps reporting `false`: its previous bundle
	/// is still complete and being served.
	pub fn is_loading(&self, locale: Locale) -> bool {
		self.read_slots()
			.get(&locale)
			.map_or(true, |slot| slot.bundle.is_none())
	}

	/// Locales that currently have a bundle installed.
	pub fn loaded_locales(&self) -> Vec<Locale> {
		let slots = self.read_slots();
		Locale::ALL
			.into_iter()
			.filter(|l| slots.get(l).is_some_and(|s| s.bundle.is_some()))
			.collect()
	}

	/// Mark a locale as being fetched.
	///
	/// Returns `false` (and changes nothing) unless the locale was
	/// `Uninitialized`.
	pub fn begin_load(&self, locale: Locale) -> bool {
		let mut slots = self.write_slots();
		if slots.contains_key(&locale) {
			return false;
		}
		slots.insert(
			locale,
			LocaleSlot {
				state: LoadState::Loading,
				bundle: None,
			},
		);
		debug!(locale = %locale, "bundle load started");
		true
	}

	/// Move a `Ready` locale back to `Loading` so it can be fetched again.
	///
	/// The current bundle keeps serving lookups until the replacement is
	/// installed.
	pub fn reload(&self, locale: Locale) -> bool {
		let mut slots = self.write_slots();
		match slots.get_mut(&locale) {
			Some(slot) if slot.state == LoadState::Ready => {
				slot.state = LoadState::Loading;
				debug!(locale = %locale, "bundle reload started");
				true
			}
			_ => false,
		}
	}

	/// Install a bundle, replacing whatever was there, and mark it `Ready`.
	pub fn install(&self, locale: Locale, bundle: Bundle) {
		let count = bundle.len();
		self.write_slots().insert(
			locale,
			LocaleSlot {
				state: LoadState::Ready,
				bundle: Some(Arc::new(bundle)),
			},
		);
		debug!(locale = %locale, count, "bundle installed");
	}

	/// Finish a fetch started with [`begin_load`](Self::begin_load).
	///
	/// A failed fetch still completes: an empty bundle is installed so the
	/// locale reaches `Ready` and lookups fall through to English. The error
	/// is handed back for the caller to report.
	pub fn complete_load(&self, locale: Locale, result: Result<Bundle>) -> Result<()> {
		match result {
			Ok(bundle) => {
				self.install(locale, bundle);
				Ok(())
			}
			Err(e) => {
				warn!(locale = %locale, error = %e, "bundle failed to load, falling back to English");
				self.install(locale, Bundle::empty());
				Err(e)
			}
		}
	}

	/// Load a bundle from JSON text.
	///
	/// On error the locale is still `Ready` with an empty bundle.
	pub fn load_str(&self, locale: Locale, json: &str) -> Result<()> {
		self.begin_load(locale);
		self.complete_load(locale, Bundle::from_json_str(json))
	}

	/// Load a bundle from a JSON file.
	///
	/// On error the locale is still `Ready` with an empty bundle.
	#[tracing::instrument(skip_all, fields(locale = %locale, path = %path.display()))]
	pub fn load_file(&self, locale: Locale, path: &Path) -> Result<()> {
		self.begin_load(locale);
		let result = std::fs::read_to_string(path)
			.map_err(|source| I18nError::Io {
				path: path.to_path_buf(),
				source,
			})
			.and_then(|json| Bundle::from_json_str(&json));
		self.complete_load(locale, result)
	}

	/// Load `<code>.json` for every supported locale found in `dir`.
	///
	/// Locales without a file stay `Uninitialized`. Malformed files degrade
	/// as in [`load_file`](Self::load_file) and are returned alongside their
	/// locale.
	#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
	pub fn load_dir(&self, dir: &Path) -> Vec<(Locale, I18nError)> {
		let mut failures = Vec::new();
		for locale in Locale::ALL {
			let path = dir.join(format!("{}.json", locale.code()));
			if !path.exists() {
				debug!(locale = %locale, "no bundle file, skipping");
				continue;
			}
			if let Err(e) = self.load_file(locale, &path) {
				failures.push((locale, e));
			}
		}
		failures
	}

	/// Look up a key in a single locale, without fallback.
	pub fn get(&self, locale: Locale, key: &str) -> Option<String> {
		self.bundle(locale)
			.and_then(|bundle| bundle.get(key).map(str::to_owned))
	}

	/// Snapshot of the bundle currently installed for a locale.
	pub fn bundle(&self, locale: Locale) -> Option<Arc<Bundle>> {
		self.read_slots()
			.get(&locale)
			.and_then(|slot| slot.bundle.clone())
	}

	/// Translate a key for a locale code.
	///
	/// Falls back to English when the locale is unknown, not loaded, or lacks
	/// the key, then to the key itself.
	pub fn t(&self, locale: &str, key: &str) -> String {
		let locale = locale.parse().unwrap_or(DEFAULT_LOCALE);
		self.t_in(locale, key)
	}

	/// Translate a key for a typed locale. See [`t`](Self::t).
	pub fn t_in(&self, locale: Locale, key: &str) -> String {
		if let Some(value) = self.get(locale, key) {
			return value;
		}

		if locale != DEFAULT_LOCALE {
			if let Some(value) = self.get(DEFAULT_LOCALE, key) {
				trace!(locale = %locale, key, "translation fell back to English");
				return value;
			}
		}

		debug!(locale = %locale, key, "missing translation, showing key");
		key.to_string()
	}

	/// The nested object under a top-level namespace.
	///
	/// Uses the requested locale's namespace when present, English's
	/// otherwise, and an empty object when neither has it.
	pub fn slice(&self, locale: Locale, namespace: &str) -> Map<String, Value> {
		let from = |l: Locale| {
			self.bundle(l)
				.and_then(|bundle| bundle.namespace(namespace).cloned())
		};

		from(locale)
			.or_else(|| {
				if locale == DEFAULT_LOCALE {
					None
				} else {
					from(DEFAULT_LOCALE)
				}
			})
			.unwrap_or_else(|| {
				debug!(locale = %locale, namespace, "missing namespace, returning empty slice");
				Map::new()
			})
	}

	/// A namespace slice deserialized into a typed record.
	///
	/// A slice that does not match `T` yields `T::default()`.
	pub fn slice_as<T>(&self, locale: Locale, namespace: &str) -> T
	where
		T: DeserializeOwned + Default,
	{
		let slice = self.slice(locale, namespace);
		serde_json::from_value(Value::Object(slice)).unwrap_or_else(|e| {
			warn!(locale = %locale, namespace, error = %e, "namespace does not match expected shape");
			T::default()
		})
	}

	/// The locale used by [`tr`](Self::tr) and [`tr_slice`](Self::tr_slice).
	pub fn active(&self) -> Locale {
		*self.active.read().unwrap_or_else(PoisonError::into_inner)
	}

	/// Switch the active locale. Loaded bundles are kept.
	pub fn set_active(&self, locale: Locale) {
		*self.active.write().unwrap_or_else(PoisonError::into_inner) = locale;
		debug!(locale = %locale, "active locale changed");
	}

	/// Translate a key in the active locale.
	pub fn tr(&self, key: &str) -> String {
		self.t_in(self.active(), key)
	}

	/// Namespace slice in the active locale.
	pub fn tr_slice(&self, namespace: &str) -> Map<String, Value> {
		self.slice(self.active(), namespace)
	}

	fn read_slots(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Locale, LocaleSlot>> {
		self.slots.read().unwrap_or_else(PoisonError::into_inner)
	}

	fn write_slots(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Locale, LocaleSlot>> {
		self.slots.write().unwrap_or_else(PoisonError::into_inner)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde::Deserialize;

	fn localizer() -> Localizer {
		let localizer = Localizer::new();
		localizer
			.load_str(
				Locale::En,
				r#"{
					"a.b": "Hello",
					"nav": { "home": "Home", "faq": "FAQ" },
					"guidesCodeReview": {
						"title": "Code review",
						"categories": [
							{ "name": "Style", "count": 3 },
							{ "name": "Security", "count": 1 }
						]
					}
				}"#,
			)
			.unwrap();
		localizer
			.load_str(Locale::Fr, r#"{ "nav": { "home": "Accueil" } }"#)
			.unwrap();
		localizer
	}

	#[test]
	fn test_requested_locale_wins() {
		assert_eq!(localizer().t("fr", "nav.home"), "Accueil");
	}

	#[test]
	fn test_fallback_to_english() {
		let l = localizer();
		assert_eq!(l.t("fr", "nav.faq"), "FAQ");
		assert_eq!(l.t("fr", "a.b"), "Hello");
	}

	#[test]
	fn test_unloaded_locale_falls_back() {
		let l = localizer();
		assert_eq!(l.t("de", "a.b"), "Hello");
		assert_eq!(l.t_in(Locale::Ja, "nav.home"), "Home");
	}

	#[test]
	fn test_unknown_locale_falls_back() {
		let l = localizer();
		assert_eq!(l.t("xx", "nav.home"), l.t("en", "nav.home"));
		assert_eq!(l.t("", "a.b"), "Hello");
	}

	#[test]
	fn test_fallback_to_key() {
		let l = localizer();
		assert_eq!(l.t("en", "c.d"), "c.d");
		assert_eq!(l.t("fr", "c.d"), "c.d");
	}

	#[test]
	fn test_empty_translation_falls_back() {
		let l = Localizer::new();
		l.load_str(Locale::En, r#"{ "a.b": "Hello", "blank": "" }"#)
			.unwrap();
		l.load_str(Locale::Fr, r#"{ "a.b": "" }"#).unwrap();

		assert_eq!(l.t("fr", "a.b"), "Hello");
		assert_eq!(l.t("en", "blank"), "blank");
		assert_eq!(l.t("fr", "blank"), "blank");
		assert_eq!(l.get(Locale::Fr, "a.b"), None);
	}

	#[test]
	fn test_lookups_before_any_load_return_key() {
		let l = Localizer::new();
		assert_eq!(l.t("en", "nav.home"), "nav.home");
		assert!(l.slice(Locale::En, "nav").is_empty());
	}

	#[test]
	fn test_get_does_not_fall_back() {
		let l = localizer();
		assert_eq!(l.get(Locale::Fr, "nav.faq"), None);
		assert_eq!(l.get(Locale::En, "nav.faq").as_deref(), Some("FAQ"));
	}

	#[test]
	fn test_state_machine() {
		let l = Localizer::new();
		assert_eq!(l.state(Locale::Zh), LoadState::Uninitialized);
		assert!(l.is_loading(Locale::Zh));

		assert!(l.begin_load(Locale::Zh));
		assert_eq!(l.state(Locale::Zh), LoadState::Loading);
		assert!(!l.begin_load(Locale::Zh));
		assert!(l.is_loading(Locale::Zh));

		l.complete_load(Locale::Zh, Ok(Bundle::empty())).unwrap();
		assert_eq!(l.state(Locale::Zh), LoadState::Ready);
		assert!(!l.is_loading(Locale::Zh));

		assert!(!l.begin_load(Locale::Zh));
		assert_eq!(l.state(Locale::Zh), LoadState::Ready);
	}

	#[test]
	fn test_reload_keeps_serving_old_bundle() {
		let l = localizer();
		assert!(l.reload(Locale::Fr));
		assert_eq!(l.state(Locale::Fr), LoadState::Loading);
		assert!(!l.is_loading(Locale::Fr));
		assert_eq!(l.t("fr", "nav.home"), "Accueil");

		l.install(
			Locale::Fr,
			Bundle::from_json_str(r#"{ "nav": { "home": "Page d'accueil" } }"#).unwrap(),
		);
		assert_eq!(l.state(Locale::Fr), LoadState::Ready);
		assert_eq!(l.t("fr", "nav.home"), "Page d'accueil");
	}

	#[test]
	fn test_reload_requires_ready() {
		let l = Localizer::new();
		assert!(!l.reload(Locale::Ko));
		l.begin_load(Locale::Ko);
		assert!(!l.reload(Locale::Ko));
	}

	#[test]
	fn test_malformed_bundle_degrades_to_english() {
		let l = localizer();
		let result = l.load_str(Locale::Es, "{ this is not json");
		assert!(matches!(result, Err(I18nError::Parse(_))));
		assert_eq!(l.state(Locale::Es), LoadState::Ready);
		assert_eq!(l.t("es", "nav.home"), "Home");
	}

	#[test]
	fn test_missing_file_degrades() {
		let l = localizer();
		let result = l.load_file(Locale::Ru, Path::new("/nonexistent/ru.json"));
		assert!(matches!(result, Err(I18nError::Io { .. })));
		assert_eq!(l.t("ru", "nav.home"), "Home");
	}

	#[test]
	fn test_switching_active_keeps_bundles() {
		let l = localizer();
		assert_eq!(l.active(), Locale::En);
		assert_eq!(l.tr("nav.home"), "Home");

		l.set_active(Locale::Fr);
		assert_eq!(l.tr("nav.home"), "Accueil");

		l.set_active(Locale::En);
		l.set_active(Locale::Fr);
		assert_eq!(l.tr("nav.home"), "Accueil");
		assert_eq!(l.loaded_locales(), vec![Locale::En, Locale::Fr]);
	}

	#[test]
	fn test_slice_prefers_requested_locale() {
		let l = localizer();
		let nav = l.slice(Locale::Fr, "nav");
		assert_eq!(nav.get("home"), Some(&Value::from("Accueil")));
		assert!(nav.get("faq").is_none());
	}

	#[test]
	fn test_slice_falls_back_to_english_namespace() {
		let l = localizer();
		let review = l.slice(Locale::Fr, "guidesCodeReview");
		assert_eq!(review.get("title"), Some(&Value::from("Code review")));
	}

	#[test]
	fn test_missing_namespace_is_empty() {
		let l = localizer();
		assert!(l.slice(Locale::Fr, "guidesNothing").is_empty());
		assert!(l.tr_slice("guidesNothing").is_empty());
	}

	#[derive(Debug, Default, Deserialize, PartialEq)]
	struct CodeReview {
		title: String,
		categories: Vec<ReviewCategory>,
	}

	#[derive(Debug, Default, Deserialize, PartialEq)]
	struct ReviewCategory {
		name: String,
		count: u32,
	}

	#[test]
	fn test_slice_as_typed_record() {
		let l = localizer();
		let review: CodeReview = l.slice_as(Locale::En, "guidesCodeReview");
		assert_eq!(review.title, "Code review");
		assert_eq!(review.categories.len(), 2);
		assert_eq!(review.categories[1].name, "Security");
	}

	#[test]
	fn test_slice_as_mismatch_yields_default() {
		let l = localizer();
		let review: CodeReview = l.slice_as(Locale::En, "nav");
		assert_eq!(review, CodeReview::default());
	}
}
