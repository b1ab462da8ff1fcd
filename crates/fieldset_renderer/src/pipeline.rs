/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! The component pipeline: a fixed linear sequence of optional stages
//! (errors, hint, label+control), each independently suppressible per
//! call, whose concatenated output is always handed to the wrapper
//! composer — even when every stage produced nothing.

use crate::error::RenderResult;
use crate::predicate::Predicate;
use crate::request::{InputRequest, StageOption};
use crate::stages::{self, Stage};
use crate::wrapper::WrapperComposer;
use fieldset_core::catalog::Catalog;
use fieldset_core::config::{Config, StageKind};
use fieldset_core::markup::Markup;
use fieldset_core::model::{FormContext, FormModel, ValidatorKind};
use fieldset_core::translate::{self, Resolved};

/// Everything a stage needs for one render call. Borrowed, immutable,
/// constructed fresh per call.
pub struct InputContext<'a> {
    pub config: &'a Config,
    pub catalog: &'a Catalog,
    pub form: &'a FormContext,
    pub request: &'a InputRequest<'a>,
}

impl<'a> InputContext<'a> {
    pub fn object(&self) -> &dyn FormModel {
        self.request.object
    }

    pub fn attribute(&self) -> &str {
        self.request.attribute
    }

    pub fn options(&self) -> &crate::request::InputOptions {
        &self.request.options
    }

    /// The association name when the attribute is a reference, otherwise
    /// the attribute itself — the name used for translation lookups.
    pub fn lookup_name(&self) -> String {
        match self.object().association(self.attribute()) {
            Some(assoc) => assoc.name,
            None => self.attribute().to_string(),
        }
    }

    /// Resolve a namespaced translation for this attribute.
    pub fn translate(&self, namespace: &str, default: &str) -> Resolved {
        translate::resolve(
            self.catalog,
            &self.form.locale,
            namespace,
            self.object().model_name(),
            self.form.action.as_deref(),
            &self.lookup_name(),
            default,
        )
    }

    /// Derived requiredness: per-call override, else presence-validator
    /// metadata on the attribute or its association (either implies
    /// required), else the configured default.
    pub fn required(&self) -> bool {
        if let Some(required) = self.options().required {
            return required;
        }
        let mut validators = self.object().validators_on(self.attribute());
        if let Some(assoc) = self.object().association(self.attribute()) {
            validators.extend(self.object().validators_on(&assoc.name));
        }
        if validators.is_empty() {
            self.config.required_by_default
        } else {
            validators.iter().any(|v| v.kind == ValidatorKind::Presence)
        }
    }

    pub fn required_class(&self) -> &'static str {
        if self.required() {
            "required"
        } else {
            "optional"
        }
    }

    /// Whether the `disabled` option disables the control as a whole.
    pub fn wholly_disabled(&self) -> bool {
        self.options()
            .disabled
            .as_ref()
            .is_some_and(Predicate::is_uniform_true)
    }

    /// Classes carried by the control element itself.
    pub fn control_classes(&self) -> Vec<String> {
        vec![
            self.request.control.css_class().to_string(),
            self.required_class().to_string(),
        ]
    }

    /// Classes carried by the outer wrapper.
    pub fn wrapper_classes(&self) -> Vec<String> {
        let mut classes = self.control_classes();
        if self.wholly_disabled() {
            classes.push("disabled".into());
        }
        classes
    }

    /// The DOM id of the control, e.g. `user_active`.
    pub fn dom_id(&self) -> String {
        format!("{}_{}", self.object().model_name(), self.attribute())
    }

    /// The form field name, e.g. `user[active]`.
    pub fn field_name(&self) -> String {
        format!("{}[{}]", self.object().model_name(), self.attribute())
    }
}

fn stage_enabled(kind: StageKind, options: &crate::request::InputOptions) -> bool {
    match kind {
        StageKind::Errors => !matches!(options.error, Some(StageOption::Off)),
        StageKind::Hint => !matches!(options.hint, Some(StageOption::Off)),
        StageKind::LabelInput => options.label_input != Some(false),
    }
}

/// The render entry point: a configuration snapshot, the translation
/// catalog and the view context, applied to one request at a time.
pub struct FormBuilder<'a> {
    pub config: &'a Config,
    pub catalog: &'a Catalog,
    pub context: &'a FormContext,
}

impl<'a> FormBuilder<'a> {
    pub fn new(config: &'a Config, catalog: &'a Catalog, context: &'a FormContext) -> Self {
        FormBuilder { config, catalog, context }
    }

    fn input_context<'r>(&'r self, request: &'r InputRequest<'r>) -> InputContext<'r> {
        InputContext {
            config: self.config,
            catalog: self.catalog,
            form: self.context,
            request,
        }
    }

    /// Render one control: run the active stages in order, concatenate,
    /// and wrap.
    pub fn render(&self, request: &InputRequest<'_>) -> RenderResult<Markup> {
        let ctx = self.input_context(request);
        let default_components = &self.config.components;
        let components = request
            .options
            .components
            .as_deref()
            .unwrap_or(default_components);

        let mut content = Markup::empty();
        for kind in components {
            if !stage_enabled(*kind, &request.options) {
                continue;
            }
            content.push(stages::stage_for(*kind).run(&ctx)?);
        }

        let composer = WrapperComposer::new(self.config, &request.options);
        Ok(composer.outer(ctx.wrapper_classes()).wrap(content))
    }

    /// Render only the hint piece, unwrapped.
    pub fn hint(&self, request: &InputRequest<'_>) -> RenderResult<Markup> {
        stages::HintStage.run(&self.input_context(request))
    }

    /// Render only the label piece, unwrapped.
    pub fn label(&self, request: &InputRequest<'_>) -> RenderResult<Markup> {
        stages::label_markup(&self.input_context(request))
    }

    /// Render only the error piece, unwrapped.
    pub fn error(&self, request: &InputRequest<'_>) -> RenderResult<Markup> {
        stages::ErrorsStage.run(&self.input_context(request))
    }
}
