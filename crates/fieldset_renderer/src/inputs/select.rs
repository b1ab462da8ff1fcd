/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! The select control: a `<select>` element with `<option>` children.

use super::{collection_options, merge_input_html, selected_by_value};
use crate::error::RenderResult;
use crate::normalize::resolve_include_blank;
use crate::pipeline::InputContext;
use crate::predicate::Predicate;
use fieldset_core::markup::{self, AttrMap, Markup};

pub fn render(ctx: &InputContext<'_>) -> RenderResult<Markup> {
    let options = ctx.options();
    let items = collection_options(ctx);
    let current = ctx.object().values(ctx.attribute());
    let wholly_disabled = ctx.wholly_disabled();

    let mut children = Markup::empty();

    if let Some(prompt) = &options.prompt {
        let mut attrs = AttrMap::new();
        attrs.insert("value".into(), String::new());
        children.push(markup::tag("option", &attrs, Markup::text(prompt)));
    }

    // A leading blank choice, unless the collection already carries one.
    if resolve_include_blank(options, &items, true) && !items.iter().any(|o| o.value.is_empty()) {
        let mut attrs = AttrMap::new();
        attrs.insert("value".into(), String::new());
        children.push(markup::tag("option", &attrs, Markup::empty()));
    }

    for option in &items {
        let mut attrs = AttrMap::new();
        attrs.insert("value".into(), option.value.clone());
        let selected = match &options.selected {
            Some(spec) => Predicate::evaluate(Some(spec), &option.raw),
            None => selected_by_value(&current, option),
        };
        if selected {
            attrs.insert("selected".into(), "selected".into());
        }
        // A uniform `disabled: true` disables the select itself, not its
        // options.
        if !wholly_disabled && Predicate::evaluate(options.disabled.as_ref(), &option.raw) {
            attrs.insert("disabled".into(), "disabled".into());
        }
        for (k, v) in &option.html {
            if k == "class" {
                markup::append_class(&mut attrs, v);
            } else {
                attrs.insert(k.clone(), v.clone());
            }
        }
        let label = if option.label_is_html {
            Markup::raw(option.label.clone())
        } else {
            Markup::text(&option.label)
        };
        children.push(markup::tag("option", &attrs, label));
    }

    let mut attrs = AttrMap::new();
    attrs.insert("class".into(), markup::class_list(&ctx.control_classes()));
    let multiple = options.multiple();
    let name = if multiple {
        format!("{}[]", ctx.field_name())
    } else {
        ctx.field_name()
    };
    attrs.insert("name".into(), name);
    attrs.insert("id".into(), ctx.dom_id());
    if wholly_disabled {
        attrs.insert("disabled".into(), "disabled".into());
    }
    // `required` is not valid on a select without an explicit blank, so
    // the HTML5 attributes are never emitted here; requiredness still
    // shows through the class list.
    merge_input_html(&mut attrs, &options.input_html, true);

    Ok(markup::tag("select", &attrs, children))
}
