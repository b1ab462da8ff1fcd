/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! Per-item boolean conditions: disabled, selected, checked.

use fieldset_core::collection::{Item, Scalar};
use std::fmt;

/// A per-item condition. Absence means false for every item.
pub enum Predicate {
    /// Applies uniformly to all items.
    Bool(bool),
    /// Equality match against the raw item's identity, before any
    /// label/value transform is applied.
    Value(Scalar),
    /// Arbitrary per-item function over the raw element.
    Func(Box<dyn Fn(&Item) -> bool>),
}

impl Predicate {
    pub fn value(scalar: impl Into<Scalar>) -> Self {
        Predicate::Value(scalar.into())
    }

    pub fn func(f: impl Fn(&Item) -> bool + 'static) -> Self {
        Predicate::Func(Box::new(f))
    }

    /// Evaluate an optional spec for one raw item.
    pub fn evaluate(spec: Option<&Predicate>, item: &Item) -> bool {
        match spec {
            None => false,
            Some(Predicate::Bool(b)) => *b,
            Some(Predicate::Value(v)) => item.identity() == *v,
            Some(Predicate::Func(f)) => f(item),
        }
    }

    /// Whether this spec disables/selects the control as a whole rather
    /// than individual items.
    pub fn is_uniform_true(&self) -> bool {
        matches!(self, Predicate::Bool(true))
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Predicate::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Predicate::Func(_) => f.write_str("Func(..)"),
        }
    }
}
