// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation bundles: one locale's strings, addressed by dotted key path.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{I18nError, Result};

/// The translated strings for one locale.
///
/// A bundle is built once from a JSON object and never mutated afterwards.
/// Nested objects are flattened into dotted keys (`hero.title`), array
/// elements are addressed by position (`faq.items.0.question`), numbers and
/// booleans are stored as their JSON text, and `null` and empty-string
/// leaves are dropped so they fall through to the next locale.
/// The original tree is kept so whole namespaces can be handed out.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
	strings: BTreeMap<String, String>,
	tree: Map<String, Value>,
}

impl Bundle {
	/// An empty bundle. Every lookup misses.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Build a bundle from a JSON object.
	pub fn from_map(tree: Map<String, Value>) -> Self {
		let mut strings = BTreeMap::new();
		for (key, value) in &tree {
			flatten_into(&mut strings, key.clone(), value);
		}
		Self { strings, tree }
	}

	/// Build a bundle from any JSON value, rejecting non-object roots.
	pub fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::Object(map) => Ok(Self::from_map(map)),
			_ => Err(I18nError::NotAnObject),
		}
	}

	/// Parse a bundle from JSON text.
	pub fn from_json_str(json: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(json)?;
		Self::from_value(value)
	}

	/// Look up a leaf string by dotted key path.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.strings.get(key).map(String::as_str)
	}

	/// Whether the bundle has a leaf string at `key`.
	pub fn contains(&self, key: &str) -> bool {
		self.strings.contains_key(key)
	}

	/// The nested object stored under a top-level namespace.
	///
	/// Returns `None` when the namespace is absent or is not an object.
	pub fn namespace(&self, namespace: &str) -> Option<&Map<String, Value>> {
		self.tree.get(namespace).and_then(Value::as_object)
	}

	/// All flattened keys in lexical order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.strings.keys().map(String::as_str)
	}

	/// Number of leaf strings.
	pub fn len(&self) -> usize {
		self.strings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.strings.is_empty()
	}
}

fn insert_leaf(out: &mut BTreeMap<String, String>, path: String, text: String) {
	if text.is_empty() {
		trace!(key = %path, "empty translation, treating as missing");
		return;
	}
	if let Some(previous) = out.get(&path) {
		debug!(key = %path, replaced = %previous, "dotted key and nested path collide, last one wins");
	}
	out.insert(path, text);
}

fn flatten_into(out: &mut BTreeMap<String, String>, path: String, value: &Value) {
	match value {
		Value::String(s) => insert_leaf(out, path, s.clone()),
		Value::Number(n) => insert_leaf(out, path, n.to_string()),
		Value::Bool(b) => insert_leaf(out, path, b.to_string()),
		Value::Null => {}
		Value::Object(map) => {
			for (key, child) in map {
				flatten_into(out, format!("{path}.{key}"), child);
			}
		}
		Value::Array(items) => {
			for (index, child) in items.iter().enumerate() {
				flatten_into(out, format!("{path}.{index}"), child);
			}
		}
	}
}
