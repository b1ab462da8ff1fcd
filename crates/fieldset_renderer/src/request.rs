/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! The per-render-call value objects.
//!
//! An [`InputRequest`] is created once per render call and never mutated;
//! components that need to inject defaults merge into fresh copies of the
//! relevant pieces instead.

use crate::predicate::Predicate;
use fieldset_core::collection::{Accessor, Collection};
use fieldset_core::config::{StageKind, TagChoice};
use fieldset_core::markup::AttrMap;
use fieldset_core::model::FormModel;
use serde::{Deserialize, Serialize};

/// The declared control type of a render request.
///
/// Only the collection-based controls are implemented by this crate;
/// requesting any other declared type fails fast with
/// [`crate::RenderError::UnsupportedControl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlType {
    Select,
    #[serde(alias = "radio")]
    RadioButtons,
    #[serde(alias = "checkboxes")]
    CheckBoxes,
    String,
    Password,
    Number,
    File,
    Date,
    Datetime,
}

impl ControlType {
    /// The CSS class applied to the control element.
    pub fn css_class(&self) -> &'static str {
        match self {
            ControlType::Select => "select",
            ControlType::RadioButtons => "radio_buttons",
            ControlType::CheckBoxes => "check_boxes",
            ControlType::String => "string",
            ControlType::Password => "password",
            ControlType::Number => "number",
            ControlType::File => "file",
            ControlType::Date => "date",
            ControlType::Datetime => "datetime",
        }
    }

    /// The default class for per-item wrappers of grouped controls.
    pub fn item_class(&self) -> Option<&'static str> {
        match self {
            ControlType::RadioButtons => Some("radio"),
            ControlType::CheckBoxes => Some("checkbox"),
            _ => None,
        }
    }
}

/// An override for one textual stage: explicit text, or `Off` to suppress
/// the piece entirely for this call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOption {
    Off,
    Text(String),
}

impl StageOption {
    pub fn text(s: impl Into<String>) -> Self {
        StageOption::Text(s.into())
    }

    pub fn is_off(&self) -> bool {
        matches!(self, StageOption::Off)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StageOption::Text(t) => Some(t),
            StageOption::Off => None,
        }
    }
}

/// Per-call options. Every key downstream components interpret is a
/// typed field; all fields default to "inherit".
#[derive(Default)]
pub struct InputOptions {
    /// Explicit choice collection; when absent, boolean attributes get the
    /// default yes/no collection.
    pub collection: Option<Collection>,
    pub label_method: Option<Accessor>,
    pub value_method: Option<Accessor>,
    pub disabled: Option<Predicate>,
    pub selected: Option<Predicate>,
    pub checked: Option<Predicate>,
    /// Explicit include-blank override; a null collection element forces
    /// the blank on regardless.
    pub include_blank: Option<bool>,
    /// Placeholder text rendered as a leading unselectable option.
    pub prompt: Option<String>,
    /// Explicit requiredness override.
    pub required: Option<bool>,
    /// Label text override, or `Off` to render the control without label.
    pub label: Option<StageOption>,
    /// Hint text override, or `Off` to suppress the hint stage.
    pub hint: Option<StageOption>,
    /// Error text override, or `Off` to suppress the errors stage.
    pub error: Option<StageOption>,
    /// Per-call hint element override (config `hint_tag` otherwise).
    pub hint_tag: Option<String>,
    /// Per-call error element override (config `error_tag` otherwise).
    pub error_tag: Option<String>,
    /// `false` suppresses the whole label+control stage.
    pub label_input: Option<bool>,
    /// Replacement stage list for this call only.
    pub components: Option<Vec<StageKind>>,

    pub wrapper_tag: Option<TagChoice>,
    pub wrapper_class: Option<String>,
    pub collection_wrapper_tag: Option<TagChoice>,
    pub collection_wrapper_class: Option<String>,
    pub item_wrapper_tag: Option<TagChoice>,
    pub item_wrapper_class: Option<String>,

    /// Raw HTML attribute overrides per namespace.
    pub input_html: AttrMap,
    pub label_html: AttrMap,
    pub wrapper_html: AttrMap,
    pub hint_html: AttrMap,
    pub error_html: AttrMap,
}

impl InputOptions {
    /// Whether multi-selection was requested through the input attributes.
    pub fn multiple(&self) -> bool {
        matches!(self.input_html.get("multiple"), Some(v) if v != "false")
    }
}

/// One render call: bound object, attribute, declared control type and
/// per-call options.
pub struct InputRequest<'a> {
    pub object: &'a dyn FormModel,
    pub attribute: &'a str,
    pub control: ControlType,
    pub options: InputOptions,
}

impl<'a> InputRequest<'a> {
    pub fn new(object: &'a dyn FormModel, attribute: &'a str, control: ControlType) -> Self {
        InputRequest {
            object,
            attribute,
            control,
            options: InputOptions::default(),
        }
    }

    pub fn with_options(mut self, options: InputOptions) -> Self {
        self.options = options;
        self
    }
}
