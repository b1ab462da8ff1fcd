/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! Ordered-key translation lookup with default fallback.
//!
//! Lookup priority for a namespaced attribute string:
//!
//! ```text
//! {namespace}.{model}.{action}.{attribute}
//! {namespace}.{model}.{attribute}
//! {namespace}.defaults.{attribute}
//! {namespace}.{attribute}
//! ```
//!
//! Namespace is `labels`, `hints` or `options`. Model is the bound object
//! name (`user` for a user object). Action is the aliased current action,
//! usually `new` or `edit`; when no action is known the action-scoped key
//! is omitted entirely. The literal default terminates the chain, so
//! resolution never fails.

use crate::catalog::Catalog;

/// A resolved translation: text plus the preformatted-markup flag carried
/// over from the catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub text: String,
    pub html: bool,
}

impl Resolved {
    fn literal(text: &str) -> Self {
        Resolved { text: text.to_string(), html: false }
    }
}

/// Map a controller-style action to its lookup alias: `create` renders the
/// same form as `new`, `update` the same as `edit`.
pub fn lookup_action(action: Option<&str>) -> Option<String> {
    let action = action?;
    let aliased = match action {
        "create" => "new",
        "update" => "edit",
        other => other,
    };
    Some(aliased.to_string())
}

/// Resolve a namespaced attribute string through the fallback chain.
pub fn resolve(
    catalog: &Catalog,
    locale: &str,
    namespace: &str,
    model: &str,
    action: Option<&str>,
    attribute: &str,
    default: &str,
) -> Resolved {
    let mut candidates: Vec<String> = Vec::with_capacity(4);
    if let Some(action) = lookup_action(action) {
        candidates.push(format!("{}.{}.{}.{}", namespace, model, action, attribute));
    }
    candidates.push(format!("{}.{}.{}", namespace, model, attribute));
    candidates.push(format!("{}.defaults.{}", namespace, attribute));
    candidates.push(format!("{}.{}", namespace, attribute));

    first_match(catalog, locale, &candidates).unwrap_or_else(|| Resolved::literal(default))
}

/// Resolve the label for a single collection item through the `options`
/// namespace: `options.{model}.{attribute}.{item}`, then
/// `options.defaults.{attribute}.{item}`, then the literal item.
pub fn resolve_option_label(
    catalog: &Catalog,
    locale: &str,
    model: &str,
    attribute: &str,
    item: &str,
    default: &str,
) -> Resolved {
    let candidates = [
        format!("options.{}.{}.{}", model, attribute, item),
        format!("options.defaults.{}.{}", attribute, item),
    ];
    first_match(catalog, locale, &candidates).unwrap_or_else(|| Resolved::literal(default))
}

fn first_match(catalog: &Catalog, locale: &str, candidates: &[String]) -> Option<Resolved> {
    for key in candidates {
        if let Some(entry) = catalog.lookup(locale, key) {
            return Some(Resolved { text: entry.text.clone(), html: entry.html });
        }
    }
    None
}

/// Humanize an attribute name for use as a default label: `created_at`
/// becomes `Created at`.
pub fn humanize(attribute: &str) -> String {
    let spaced = attribute.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
