/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! The translation catalog: a locale-indexed key → entry lookup structure.
//!
//! The catalog is an external collaborator from the renderer's perspective;
//! how it is populated is out of scope. This module provides an in-memory
//! implementation with a YAML loader, plus the built-in English defaults.
//!
//! Keys are dotted paths, e.g. `hints.user.edit.name`. A YAML key with an
//! `_html` suffix marks the entry as preformatted rich text: it is stored
//! under the suffix-free key with the `html` flag set, and the renderer
//! emits it without escaping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The translated text.
    pub text: String,
    /// Whether the text is already-safe rich markup.
    #[serde(default)]
    pub html: bool,
}

impl Entry {
    pub fn plain(text: impl Into<String>) -> Self {
        Entry { text: text.into(), html: false }
    }

    pub fn rich(text: impl Into<String>) -> Self {
        Entry { text: text.into(), html: true }
    }
}

/// Locale-indexed key → entry store.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: HashMap<String, IndexMap<String, Entry>>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Built-in English catalog with the boolean-choice labels.
    pub fn en() -> Self {
        let mut catalog = Catalog::new();
        catalog.insert("en", "yes", "Yes");
        catalog.insert("en", "no", "No");
        catalog
    }

    /// Insert a plain-text entry.
    pub fn insert(&mut self, locale: &str, key: &str, text: impl Into<String>) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), Entry::plain(text));
    }

    /// Insert a preformatted rich-text entry.
    pub fn insert_html(&mut self, locale: &str, key: &str, text: impl Into<String>) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), Entry::rich(text));
    }

    /// Look up an entry within a single locale. Never falls back across
    /// locales; fallback across keys is the resolver's job.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&Entry> {
        self.locales.get(locale)?.get(key)
    }

    /// Load a catalog from a YAML document shaped as
    /// `locale -> nested maps -> string`:
    ///
    /// ```yaml
    /// en:
    ///   "yes": "Yes"
    ///   hints:
    ///     user:
    ///       name: "Content will be truncated"
    ///   options:
    ///     user:
    ///       gender:
    ///         male_html: "<strong>Male</strong>"
    /// ```
    pub fn from_yaml(doc: &str) -> Result<Self, serde_yaml::Error> {
        let root: serde_yaml::Value = serde_yaml::from_str(doc)?;
        let mut catalog = Catalog::new();
        if let serde_yaml::Value::Mapping(locales) = root {
            for (locale, tree) in locales {
                let locale = yaml_key(&locale);
                let entries = catalog.locales.entry(locale).or_default();
                flatten(&tree, String::new(), entries);
            }
        }
        Ok(catalog)
    }
}

fn yaml_key(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn flatten(value: &serde_yaml::Value, prefix: String, out: &mut IndexMap<String, Entry>) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                let key = yaml_key(k);
                let path = if prefix.is_empty() {
                    key
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(v, path, out);
            }
        }
        serde_yaml::Value::String(s) => {
            insert_leaf(prefix, s.clone(), out);
        }
        serde_yaml::Value::Number(n) => {
            insert_leaf(prefix, n.to_string(), out);
        }
        serde_yaml::Value::Bool(b) => {
            insert_leaf(prefix, b.to_string(), out);
        }
        _ => {}
    }
}

fn insert_leaf(key: String, text: String, out: &mut IndexMap<String, Entry>) {
    if let Some(stripped) = key.strip_suffix("_html") {
        out.insert(stripped.to_string(), Entry::rich(text));
    } else {
        out.insert(key, Entry::plain(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_en_defaults() {
        let catalog = Catalog::en();
        assert_eq!(catalog.lookup("en", "yes").unwrap().text, "Yes");
        assert_eq!(catalog.lookup("en", "no").unwrap().text, "No");
        assert!(catalog.lookup("pt", "yes").is_none());
    }

    #[test]
    fn test_from_yaml_nested_keys() {
        let catalog = Catalog::from_yaml(
            r#"
en:
  hints:
    user:
      edit:
        name: "Content of this input will be truncated..."
      name: "Content of this input will be capitalized..."
"#,
        )
        .unwrap();
        assert_eq!(
            catalog.lookup("en", "hints.user.edit.name").unwrap().text,
            "Content of this input will be truncated..."
        );
        assert_eq!(
            catalog.lookup("en", "hints.user.name").unwrap().text,
            "Content of this input will be capitalized..."
        );
    }

    #[test]
    fn test_html_suffix_marks_rich_entries() {
        let catalog = Catalog::from_yaml(
            r#"
en:
  options:
    user:
      gender:
        male_html: "<strong>Male</strong>"
        female: "Female"
"#,
        )
        .unwrap();
        let male = catalog.lookup("en", "options.user.gender.male").unwrap();
        assert!(male.html);
        assert_eq!(male.text, "<strong>Male</strong>");
        let female = catalog.lookup("en", "options.user.gender.female").unwrap();
        assert!(!female.html);
    }

    #[test]
    fn test_entry_json_deserialization() {
        let json = r#"{ "text": "<em>Hi</em>", "html": true }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry, Entry::rich("<em>Hi</em>"));

        let plain: Entry = serde_json::from_str(r#"{ "text": "Hi" }"#).unwrap();
        assert!(!plain.html);
    }

    #[test]
    fn test_boolean_label_overrides() {
        let catalog = Catalog::from_yaml("en:\n  \"yes\": Sim\n  \"no\": \"Não\"\n").unwrap();
        assert_eq!(catalog.lookup("en", "yes").unwrap().text, "Sim");
        assert_eq!(catalog.lookup("en", "no").unwrap().text, "Não");
    }
}
