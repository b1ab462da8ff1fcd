/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! The bound-object seam.
//!
//! [`FormModel`] is the pluggable boundary to whatever data object a form
//! is bound to: attribute values, validator metadata, association
//! metadata, and error messages all come through it as synchronous
//! in-memory queries.

use crate::collection::Scalar;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The semantic column type of an attribute, when known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum ColumnType {
    String,
    Integer,
    Float,
    Boolean,
}

/// The kind of a validator attached to an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum ValidatorKind {
    Presence,
    Length,
    Numericality,
    Format,
}

/// Validator metadata exposed by the bound object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    pub kind: ValidatorKind,
}

impl Validator {
    pub fn presence() -> Self {
        Validator { kind: ValidatorKind::Presence }
    }
}

/// Metadata describing that an attribute references another bound object.
/// `name` is the association's own name, used for labeling lookups and
/// validator resolution in place of the foreign-key attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    pub name: String,
}

impl Association {
    pub fn new(name: impl Into<String>) -> Self {
        Association { name: name.into() }
    }
}

/// The bound data object a form renders against.
pub trait FormModel {
    /// The object name used in translation keys and DOM ids, e.g. `user`.
    fn model_name(&self) -> &str;

    /// The current value of an attribute, if any.
    fn value(&self, attribute: &str) -> Option<Scalar>;

    /// All current values of an attribute; multi-valued attributes
    /// (checkbox groups) override this.
    fn values(&self, attribute: &str) -> Vec<Scalar> {
        self.value(attribute).into_iter().collect()
    }

    /// The attribute's column type, when the object knows it.
    fn column_type(&self, _attribute: &str) -> Option<ColumnType> {
        None
    }

    /// Validation error messages currently attached to the attribute.
    fn errors_on(&self, _attribute: &str) -> Vec<String> {
        Vec::new()
    }

    /// Validator metadata for the attribute. An empty list means the
    /// object carries no metadata for it.
    fn validators_on(&self, _attribute: &str) -> Vec<Validator> {
        Vec::new()
    }

    /// Association metadata, when the attribute is a foreign-key-style
    /// reference.
    fn association(&self, _attribute: &str) -> Option<Association> {
        None
    }
}

/// The slice of the host view environment the renderer needs: the active
/// locale and the current action name (used only for translation lookup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormContext {
    pub locale: String,
    pub action: Option<String>,
}

impl FormContext {
    pub fn new(locale: impl Into<String>) -> Self {
        FormContext { locale: locale.into(), action: None }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

impl Default for FormContext {
    fn default() -> Self {
        FormContext::new("en")
    }
}
