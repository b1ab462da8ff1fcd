/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! The option normalizer: converts a raw collection plus label/value
//! accessors into a uniform sequence of renderable options.
//!
//! Normalized options are constructed fresh per render call and discarded
//! with the fragment. The one exception to statelessness in this crate is
//! the locale-keyed boolean-label cache below: the yes/no labels are
//! attribute-independent, so they are memoized per locale, with an
//! explicit reset for test isolation and locale switches.

use crate::request::InputOptions;
use fieldset_core::catalog::Catalog;
use fieldset_core::collection::{Accessor, Collection, Item, Pair, Scalar};
use fieldset_core::markup::AttrMap;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

/// A normalized choice: stringified label and value, per-item HTML
/// attributes, and the raw element it was derived from (kept for
/// predicate matching and current-value comparison).
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionOption {
    pub label: String,
    pub value: String,
    pub html: AttrMap,
    pub raw: Item,
    /// Whether `label` is already-safe rich markup (set by collection
    /// label translation, never by normalization itself).
    pub label_is_html: bool,
    /// Whether the element is eligible for collection label translation:
    /// only bare string scalars are, never pairs or records.
    pub translatable: bool,
}

impl CollectionOption {
    fn new(label: String, value: String, html: AttrMap, raw: Item) -> Self {
        CollectionOption {
            label,
            value,
            html,
            raw,
            label_is_html: false,
            translatable: false,
        }
    }
}

fn derive(item: &Item, accessor: Option<&Accessor>, default: Scalar) -> String {
    match accessor {
        Some(a) => a.apply(item).render(),
        None => default.render(),
    }
}

/// Materialize a collection into normalized options, preserving input
/// order. Overriding only one of the two accessors leaves the other's
/// structural default untouched.
pub fn normalize(
    collection: &Collection,
    label_method: Option<&Accessor>,
    value_method: Option<&Accessor>,
) -> Vec<CollectionOption> {
    match collection {
        Collection::Scalars(scalars) => scalars
            .iter()
            .map(|s| {
                let item = Item::Scalar(s.clone());
                let label = derive(&item, label_method, item.default_label());
                let value = derive(&item, value_method, item.default_value());
                let mut option = CollectionOption::new(label, value, AttrMap::new(), item);
                option.translatable = matches!(s, Scalar::Str(_));
                option
            })
            .collect(),
        Collection::Pairs(pairs) => pairs.iter().map(normalize_pair).collect(),
        Collection::Records(records) => records
            .iter()
            .map(|r| {
                let item = Item::Record(r.clone());
                let label = derive(&item, label_method, item.default_label());
                let value = derive(&item, value_method, item.default_value());
                CollectionOption::new(label, value, AttrMap::new(), item)
            })
            .collect(),
        Collection::Range(range) => range
            .clone()
            .map(|i| {
                let item = Item::Scalar(Scalar::Int(i));
                let label = derive(&item, label_method, item.default_label());
                let value = derive(&item, value_method, item.default_value());
                CollectionOption::new(label, value, AttrMap::new(), item)
            })
            .collect(),
        Collection::Deferred(producer) => {
            let produced = producer();
            normalize(&produced, label_method, value_method)
        }
    }
}

fn normalize_pair(pair: &Pair) -> CollectionOption {
    // The pair's value is the element's identity for matching purposes.
    let item = Item::Scalar(pair.value.clone());
    let mut html = AttrMap::new();
    for (k, v) in &pair.html {
        html.insert(k.clone(), v.clone());
    }
    CollectionOption::new(pair.label.render(), pair.value.render(), html, item)
}

/// Whether a blank leading choice should be offered.
///
/// Auto-enabled when the control accepts at most one selection, no prompt
/// is set and multi-selection is not requested. A null element in the
/// collection forces the blank on even against an explicit opt-out,
/// because the collection already contains a blank value to represent.
pub fn resolve_include_blank(
    options: &InputOptions,
    items: &[CollectionOption],
    single_selection: bool,
) -> bool {
    let has_null = items
        .iter()
        .any(|o| matches!(&o.raw, Item::Scalar(s) if s.is_null()));
    if has_null {
        return true;
    }
    if let Some(explicit) = options.include_blank {
        return explicit;
    }
    single_selection && options.prompt.is_none() && !options.multiple()
}

// Locale → (yes label, no label). Entries are immutable once computed and
// keyed purely by locale, so a read-mostly map with a coarse clear is
// sufficient under concurrent use.
static BOOLEAN_LABELS: Lazy<RwLock<HashMap<String, (String, String)>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// The translated yes/no labels for a locale, memoized process-wide.
pub fn boolean_labels(catalog: &Catalog, locale: &str) -> (String, String) {
    if let Ok(cache) = BOOLEAN_LABELS.read() {
        if let Some(labels) = cache.get(locale) {
            return labels.clone();
        }
    }
    let yes = catalog
        .lookup(locale, "yes")
        .map(|e| e.text.clone())
        .unwrap_or_else(|| "Yes".to_string());
    let no = catalog
        .lookup(locale, "no")
        .map(|e| e.text.clone())
        .unwrap_or_else(|| "No".to_string());
    if let Ok(mut cache) = BOOLEAN_LABELS.write() {
        cache.insert(locale.to_string(), (yes.clone(), no.clone()));
    }
    (yes, no)
}

/// Clear the boolean-label cache. Call between test scenarios or after a
/// locale's catalog entries change.
pub fn reset_boolean_label_cache() {
    if let Ok(mut cache) = BOOLEAN_LABELS.write() {
        cache.clear();
    }
}

/// The default collection for boolean attributes:
/// `[(yes, true), (no, false)]`.
pub fn boolean_collection(catalog: &Catalog, locale: &str) -> Collection {
    let (yes, no) = boolean_labels(catalog, locale);
    Collection::Pairs(vec![Pair::new(yes, true), Pair::new(no, false)])
}
