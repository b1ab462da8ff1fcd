/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! Markup primitives: escaping, safe fragments, and element construction.
//!
//! This is the seam between the renderer and the host view environment. A
//! [`Markup`] value is always safe to emit: [`Markup::text`] escapes its
//! input, [`Markup::raw`] trusts it (used for catalog entries flagged as
//! preformatted rich text).

use indexmap::IndexMap;
use std::fmt;

/// Ordered map of HTML attribute name → value.
///
/// Insertion order is preserved in the emitted markup, so callers (and
/// tests) can rely on stable attribute ordering.
pub type AttrMap = IndexMap<String, String>;

/// Escape text for use in HTML content or attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// An already-safe markup fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup(String);

impl Markup {
    /// The empty fragment.
    pub fn empty() -> Self {
        Markup(String::new())
    }

    /// Escape `s` and wrap it as a safe fragment.
    pub fn text(s: &str) -> Self {
        Markup(escape(s))
    }

    /// Trust `s` as already-safe markup.
    pub fn raw(s: impl Into<String>) -> Self {
        Markup(s.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append another fragment in place.
    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Concatenate fragments in order.
pub fn concat<I: IntoIterator<Item = Markup>>(parts: I) -> Markup {
    let mut out = Markup::empty();
    for part in parts {
        out.push(part);
    }
    out
}

fn write_attrs(out: &mut String, attrs: &AttrMap) {
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
}

/// Emit `<name attrs>children</name>`.
pub fn tag(name: &str, attrs: &AttrMap, children: Markup) -> Markup {
    let mut out = String::new();
    out.push('<');
    out.push_str(name);
    write_attrs(&mut out, attrs);
    out.push('>');
    out.push_str(children.as_str());
    out.push_str("</");
    out.push_str(name);
    out.push('>');
    Markup::raw(out)
}

/// Emit a self-closing element, e.g. `<input ... />`.
pub fn void_tag(name: &str, attrs: &AttrMap) -> Markup {
    let mut out = String::new();
    out.push('<');
    out.push_str(name);
    write_attrs(&mut out, attrs);
    out.push_str(" />");
    Markup::raw(out)
}

/// Append a CSS class to the attribute map, preserving existing classes.
pub fn append_class(attrs: &mut AttrMap, class: &str) {
    if class.is_empty() {
        return;
    }
    match attrs.get_mut("class") {
        Some(existing) if !existing.is_empty() => {
            existing.push(' ');
            existing.push_str(class);
        }
        _ => {
            attrs.insert("class".into(), class.to_string());
        }
    }
}

/// Build a class attribute value from a list, skipping empties.
pub fn class_list(classes: &[String]) -> String {
    classes
        .iter()
        .filter(|c| !c.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}
