/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! Concrete control renderers and their dispatch.
//!
//! Only the collection-based controls live here; a declared-but-absent
//! control type is a configuration error and fails fast.

pub mod check_boxes;
pub mod radio_buttons;
pub mod select;

use crate::error::{RenderError, RenderResult};
use crate::normalize::{self, CollectionOption};
use crate::pipeline::InputContext;
use crate::predicate::Predicate;
use crate::request::ControlType;
use fieldset_core::collection::Scalar;
use fieldset_core::markup::{self, AttrMap, Markup};
use fieldset_core::translate::resolve_option_label;

/// Render the control element(s) for the request's declared type.
pub fn render_control(ctx: &InputContext<'_>) -> RenderResult<Markup> {
    match ctx.request.control {
        ControlType::Select => select::render(ctx),
        ControlType::RadioButtons => radio_buttons::render(ctx),
        ControlType::CheckBoxes => check_boxes::render(ctx),
        other => Err(RenderError::UnsupportedControl {
            control: other.css_class().to_string(),
        }),
    }
}

/// Sanitize an option value for use in a DOM id: lowercased
/// alphanumerics, whitespace to underscores, everything else dropped.
pub(crate) fn sanitize_value(value: &str) -> String {
    value
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c.to_ascii_lowercase())
            } else if c == '-' || c == '_' {
                Some(c)
            } else if c.is_whitespace() {
                Some('_')
            } else {
                None
            }
        })
        .collect()
}

/// The DOM id for one item of a grouped control, e.g. `user_active_true`.
pub(crate) fn item_dom_id(ctx: &InputContext<'_>, value: &str) -> String {
    format!("{}_{}", ctx.dom_id(), sanitize_value(value))
}

/// Materialize the request's collection: the explicit one when given,
/// else the default boolean collection; then apply collection label
/// translation to eligible items when no explicit label accessor is in
/// effect.
pub(crate) fn collection_options(ctx: &InputContext<'_>) -> Vec<CollectionOption> {
    let options = ctx.options();
    let label_method = options.label_method.as_ref();
    let value_method = options.value_method.as_ref();
    let mut items = match &options.collection {
        Some(collection) => normalize::normalize(collection, label_method, value_method),
        None => {
            let collection = normalize::boolean_collection(ctx.catalog, &ctx.form.locale);
            normalize::normalize(&collection, label_method, value_method)
        }
    };

    if label_method.is_none() {
        let model = ctx.object().model_name().to_string();
        let attribute = ctx.lookup_name();
        for option in items.iter_mut().filter(|o| o.translatable) {
            let key = option.raw.identity().render();
            let resolved = resolve_option_label(
                ctx.catalog,
                &ctx.form.locale,
                &model,
                &attribute,
                &key,
                &option.label,
            );
            option.label = resolved.text;
            option.label_is_html = resolved.html;
        }
    }
    items
}

/// Whether an option matches the attribute's current value(s).
pub(crate) fn selected_by_value(current: &[Scalar], option: &CollectionOption) -> bool {
    current
        .iter()
        .any(|v| *v == option.raw.identity() || v.render() == option.value)
}

/// Evaluate a state predicate, falling back to current-value matching
/// when no spec was given.
pub(crate) fn item_state(
    spec: Option<&Predicate>,
    option: &CollectionOption,
    current: &[Scalar],
) -> bool {
    match spec {
        Some(predicate) => Predicate::evaluate(Some(predicate), &option.raw),
        None => selected_by_value(current, option),
    }
}

/// Add the HTML5 required attributes where the control may legally carry
/// them, honoring the html5 and browser-validation toggles.
pub(crate) fn apply_required_attrs(ctx: &InputContext<'_>, attrs: &mut AttrMap) {
    if ctx.required() && ctx.config.html5 && ctx.config.browser_validations {
        attrs.insert("required".into(), "required".into());
        attrs.insert("aria-required".into(), "true".into());
    }
}

/// Merge caller-supplied input attributes into the control's attribute
/// map. Classes append; per-item ids of grouped controls are not
/// overridable (`allow_id` off).
pub(crate) fn merge_input_html(attrs: &mut AttrMap, html: &AttrMap, allow_id: bool) {
    for (k, v) in html {
        match k.as_str() {
            "class" => markup::append_class(attrs, v),
            "id" if !allow_id => {}
            _ => {
                attrs.insert(k.clone(), v.clone());
            }
        }
    }
}

/// The per-item label class of a grouped control, e.g.
/// `collection_radio_buttons`.
pub(crate) fn collection_label_class(control: ControlType) -> String {
    format!("collection_{}", control.css_class())
}
