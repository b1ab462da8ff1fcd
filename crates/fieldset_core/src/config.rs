/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! Global rendering configuration.
//!
//! A [`Config`] is a read-only snapshot of the process-wide defaults. It is
//! passed into every render call; per-call options override individual
//! fields through the wrapper composer and the pipeline, never by mutating
//! the snapshot.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One suppressible piece of a rendered control's surrounding decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum StageKind {
    Errors,
    Hint,
    LabelInput,
}

/// How boolean-ish controls compose their per-item labels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum BooleanStyle {
    /// Input and label as siblings.
    #[default]
    Flat,
    /// The label wraps the input.
    Nested,
}

/// A wrapper tag choice: a tag name, or `false` to disable the element at
/// that level. Disabling a tag never drops the wrapped content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum TagChoice {
    Disabled(bool),
    Tag(String),
}

impl TagChoice {
    pub fn tag(name: impl Into<String>) -> Self {
        TagChoice::Tag(name.into())
    }

    pub fn off() -> Self {
        TagChoice::Disabled(false)
    }

    /// The tag name, or `None` when this level is disabled.
    pub fn name(&self) -> Option<&str> {
        match self {
            TagChoice::Tag(t) => Some(t),
            TagChoice::Disabled(_) => None,
        }
    }
}

/// Process-wide rendering defaults.
///
/// Deserializable from YAML with kebab-case keys:
///
/// ```yaml
/// required-by-default: true
/// boolean-style: nested
/// collection-wrapper-tag: ul
/// item-wrapper-tag: li
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Config {
    /// Default ordered stage list; per-call options may replace it.
    pub components: Vec<StageKind>,
    /// Requiredness fallback when neither a per-call override nor validator
    /// metadata applies.
    pub required_by_default: bool,
    /// Emit HTML5 validation attributes (`required`).
    pub html5: bool,
    /// Allow the browser to run its own validations; when off, the
    /// `required`/`aria-required` attributes are suppressed.
    pub browser_validations: bool,
    /// Flat or nested per-item label composition.
    pub boolean_style: BooleanStyle,
    /// Outer wrapper element around the whole control fragment.
    pub wrapper_tag: Option<TagChoice>,
    /// Extra class for the outer wrapper.
    pub wrapper_class: Option<String>,
    /// Element wrapping a whole radio/checkbox group; none by default.
    pub collection_wrapper_tag: Option<TagChoice>,
    pub collection_wrapper_class: Option<String>,
    /// Element wrapping each item of a radio/checkbox group.
    pub item_wrapper_tag: Option<TagChoice>,
    pub item_wrapper_class: Option<String>,
    /// When off, item wrappers drop their default control-type class
    /// (`radio`/`checkbox`) while keeping caller-supplied classes.
    pub include_default_input_wrapper_class: bool,
    /// Element used for hint text.
    pub hint_tag: String,
    /// Element used for error messages.
    pub error_tag: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            components: vec![StageKind::Errors, StageKind::Hint, StageKind::LabelInput],
            required_by_default: true,
            html5: true,
            browser_validations: true,
            boolean_style: BooleanStyle::default(),
            wrapper_tag: Some(TagChoice::tag("div")),
            wrapper_class: Some("input".into()),
            collection_wrapper_tag: None,
            collection_wrapper_class: None,
            item_wrapper_tag: Some(TagChoice::tag("span")),
            item_wrapper_class: None,
            include_default_input_wrapper_class: true,
            hint_tag: "span".into(),
            error_tag: "span".into(),
        }
    }
}
