/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! The checkbox group. Structurally a radio group with multi-selection:
//! the field name takes the array form and any matching current value
//! checks its box.

use super::{
    collection_label_class, collection_options, item_dom_id, item_state, merge_input_html,
    apply_required_attrs,
};
use crate::error::RenderResult;
use crate::normalize::CollectionOption;
use crate::pipeline::InputContext;
use crate::predicate::Predicate;
use crate::wrapper::WrapperComposer;
use fieldset_core::collection::Scalar;
use fieldset_core::config::BooleanStyle;
use fieldset_core::markup::{self, AttrMap, Markup};

pub fn render(ctx: &InputContext<'_>) -> RenderResult<Markup> {
    let options = ctx.options();
    let items = collection_options(ctx);
    let current = ctx.object().values(ctx.attribute());
    let composer = WrapperComposer::new(ctx.config, options);
    let item_spec = composer.item(ctx.request.control.item_class());
    let collection_spec = composer.collection();

    let mut parts = Vec::with_capacity(items.len());
    for option in &items {
        let content = render_item(ctx, option, &current);
        parts.push(item_spec.wrap(content));
    }
    Ok(collection_spec.wrap(markup::concat(parts)))
}

fn render_item(ctx: &InputContext<'_>, option: &CollectionOption, current: &[Scalar]) -> Markup {
    let options = ctx.options();
    let id = item_dom_id(ctx, &option.value);

    let mut attrs = AttrMap::new();
    attrs.insert("class".into(), markup::class_list(&ctx.control_classes()));
    attrs.insert("type".into(), "checkbox".into());
    attrs.insert("value".into(), option.value.clone());
    attrs.insert("name".into(), format!("{}[]", ctx.field_name()));
    attrs.insert("id".into(), id.clone());
    if item_state(options.checked.as_ref(), option, current) {
        attrs.insert("checked".into(), "checked".into());
    }
    if Predicate::evaluate(options.disabled.as_ref(), &option.raw) {
        attrs.insert("disabled".into(), "disabled".into());
    }
    apply_required_attrs(ctx, &mut attrs);
    for (k, v) in &option.html {
        if k == "class" {
            markup::append_class(&mut attrs, v);
        } else {
            attrs.insert(k.clone(), v.clone());
        }
    }
    merge_input_html(&mut attrs, &options.input_html, false);
    let input = markup::void_tag("input", &attrs);

    let label_text = if option.label_is_html {
        Markup::raw(option.label.clone())
    } else {
        Markup::text(&option.label)
    };

    match ctx.config.boolean_style {
        BooleanStyle::Flat => {
            let mut label_attrs = AttrMap::new();
            label_attrs.insert(
                "class".into(),
                collection_label_class(ctx.request.control),
            );
            label_attrs.insert("for".into(), id);
            let label = markup::tag("label", &label_attrs, label_text);
            markup::concat([input, label])
        }
        BooleanStyle::Nested => {
            let mut label_attrs = AttrMap::new();
            label_attrs.insert("for".into(), id);
            markup::tag("label", &label_attrs, markup::concat([input, label_text]))
        }
    }
}
