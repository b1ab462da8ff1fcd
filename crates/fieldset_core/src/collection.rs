/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! The raw collection model: the shapes a choice collection may take
//! before normalization, and the accessors used to derive labels and
//! values from its elements.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// A scalar collection element.
///
/// `Null` elements normalize to an empty-string value; booleans render as
/// the literal strings `true`/`false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// The string form used for both labels and values.
    pub fn render(&self) -> String {
        match self {
            Scalar::Null => String::new(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(i) => i.to_string(),
            // Whole floats keep one decimal place: 2.0 renders as "2.0",
            // not "2", so mixed collections stay distinguishable.
            Scalar::Float(f) if f.fract() == 0.0 => format!("{:.1}", f),
            Scalar::Float(f) => f.to_string(),
            Scalar::Str(s) => s.clone(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<i32> for Scalar {
    fn from(i: i32) -> Self {
        Scalar::Int(i64::from(i))
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

/// A record-like collection element: named scalar fields with label-ish
/// and id-ish conventions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    pub fields: IndexMap<String, Scalar>,
}

/// Fields tried, in order, for a record's default label.
const LABEL_FIELDS: &[&str] = &["name", "title", "label"];

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    /// Builder-style field insertion.
    pub fn field(mut self, name: &str, value: impl Into<Scalar>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.fields.get(name)
    }

    fn default_label(&self) -> Scalar {
        for name in LABEL_FIELDS {
            if let Some(v) = self.fields.get(*name) {
                return v.clone();
            }
        }
        self.fields
            .values()
            .next()
            .cloned()
            .unwrap_or(Scalar::Null)
    }

    fn default_value(&self) -> Scalar {
        match self.fields.get("id") {
            Some(v) => v.clone(),
            None => self.default_label(),
        }
    }
}

/// A raw collection element, as handed to accessors and predicates.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Scalar(Scalar),
    Record(Record),
}

impl Item {
    /// Structural default for the label accessor.
    pub fn default_label(&self) -> Scalar {
        match self {
            Item::Scalar(s) => s.clone(),
            Item::Record(r) => r.default_label(),
        }
    }

    /// Structural default for the value accessor.
    pub fn default_value(&self) -> Scalar {
        match self {
            Item::Scalar(s) => s.clone(),
            Item::Record(r) => r.default_value(),
        }
    }

    /// The pre-transform identity of the element, used for predicate
    /// matching and current-value comparison.
    pub fn identity(&self) -> Scalar {
        self.default_value()
    }

    /// Resolve a named property. Records consult their fields; scalars
    /// have no properties and fall back to themselves.
    pub fn property(&self, name: &str) -> Option<Scalar> {
        match self {
            Item::Record(r) => r.get(name).cloned(),
            Item::Scalar(_) => None,
        }
    }
}

/// A label/value pair, optionally with per-item HTML attributes (the
/// trailing attributes element of the original pair form).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub label: Scalar,
    pub value: Scalar,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub html: IndexMap<String, String>,
}

impl Pair {
    pub fn new(label: impl Into<Scalar>, value: impl Into<Scalar>) -> Self {
        Pair {
            label: label.into(),
            value: value.into(),
            html: IndexMap::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.html.insert(name.to_string(), value.to_string());
        self
    }
}

/// An accessor derives a label or value from a raw collection element:
/// either a named property, or an arbitrary per-item function.
pub enum Accessor {
    Property(String),
    Func(Box<dyn Fn(&Item) -> Scalar>),
}

impl Accessor {
    pub fn property(name: impl Into<String>) -> Self {
        Accessor::Property(name.into())
    }

    pub fn func(f: impl Fn(&Item) -> Scalar + 'static) -> Self {
        Accessor::Func(Box::new(f))
    }

    /// Apply the accessor to an element. Property accessors missing on the
    /// element resolve to its structural default.
    pub fn apply(&self, item: &Item) -> Scalar {
        match self {
            Accessor::Property(name) => item.property(name).unwrap_or_else(|| item.default_label()),
            Accessor::Func(f) => f(item),
        }
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Property(name) => f.debug_tuple("Property").field(name).finish(),
            Accessor::Func(_) => f.write_str("Func(..)"),
        }
    }
}

/// The shapes a raw choice collection may take.
pub enum Collection {
    /// Ordered scalars; label and value both derive from the element.
    Scalars(Vec<Scalar>),
    /// Explicit label/value pairs.
    Pairs(Vec<Pair>),
    /// Record-like elements resolved through accessors.
    Records(Vec<Record>),
    /// A bounded integer range, materialized eagerly in order.
    Range(RangeInclusive<i64>),
    /// A zero-argument producer invoked at normalization time.
    Deferred(Box<dyn Fn() -> Collection>),
}

impl Collection {
    pub fn scalars<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        Collection::Scalars(items.into_iter().map(Into::into).collect())
    }

    pub fn deferred(f: impl Fn() -> Collection + 'static) -> Self {
        Collection::Deferred(Box::new(f))
    }
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Scalars(v) => f.debug_tuple("Scalars").field(v).finish(),
            Collection::Pairs(v) => f.debug_tuple("Pairs").field(v).finish(),
            Collection::Records(v) => f.debug_tuple("Records").field(v).finish(),
            Collection::Range(r) => f.debug_tuple("Range").field(r).finish(),
            Collection::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_render() {
        assert_eq!(Scalar::Null.render(), "");
        assert_eq!(Scalar::Bool(true).render(), "true");
        assert_eq!(Scalar::Bool(false).render(), "false");
        assert_eq!(Scalar::Int(2).render(), "2");
        assert_eq!(Scalar::Float(2.0).render(), "2.0");
        assert_eq!(Scalar::Float(4.5).render(), "4.5");
        assert_eq!(Scalar::from("johnny").render(), "johnny");
    }

    #[test]
    fn test_record_defaults() {
        let record = Record::new().field("id", 1).field("name", "Jose");
        let item = Item::Record(record);
        assert_eq!(item.default_label(), Scalar::from("Jose"));
        assert_eq!(item.default_value(), Scalar::Int(1));
    }

    #[test]
    fn test_record_without_id_falls_back_to_label() {
        let record = Record::new().field("title", "Chief");
        let item = Item::Record(record);
        assert_eq!(item.default_value(), Scalar::from("Chief"));
    }

    #[test]
    fn test_accessor_property_on_scalar_falls_back() {
        let item = Item::Scalar(Scalar::from("Jose"));
        let accessor = Accessor::property("name");
        assert_eq!(accessor.apply(&item), Scalar::from("Jose"));
    }

    #[test]
    fn test_accessor_func() {
        let item = Item::Scalar(Scalar::from("Jose"));
        let accessor = Accessor::func(|i| Scalar::Str(i.default_label().render().to_uppercase()));
        assert_eq!(accessor.apply(&item), Scalar::from("JOSE"));
    }
}
