/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! The label+control stage: the attribute's label composed with the
//! control markup produced by the input dispatch.
//!
//! Label text resolution: explicit per-call text, else the `labels`
//! namespace, else the humanized attribute (or association) name.

use super::{decorated_attrs, Stage};
use crate::error::RenderResult;
use crate::inputs;
use crate::pipeline::InputContext;
use crate::request::{ControlType, StageOption};
use fieldset_core::config::StageKind;
use fieldset_core::markup::{self, Markup};
use fieldset_core::translate::humanize;

pub struct LabelInputStage;

impl Stage for LabelInputStage {
    fn kind(&self) -> StageKind {
        StageKind::LabelInput
    }

    fn run(&self, ctx: &InputContext<'_>) -> RenderResult<Markup> {
        let mut out = Markup::empty();
        if !matches!(ctx.options().label, Some(StageOption::Off)) {
            out.push(label_markup(ctx)?);
        }
        out.push(inputs::render_control(ctx)?);
        Ok(out)
    }
}

/// The label element alone.
pub fn label_markup(ctx: &InputContext<'_>) -> RenderResult<Markup> {
    let options = ctx.options();
    let content = match &options.label {
        Some(StageOption::Text(t)) => Markup::text(t),
        Some(StageOption::Off) => return Ok(Markup::empty()),
        None => {
            let default = humanize(&ctx.lookup_name());
            let resolved = ctx.translate("labels", &default);
            if resolved.html {
                Markup::raw(resolved.text)
            } else {
                Markup::text(&resolved.text)
            }
        }
    };

    // Labels carry the control-type and requiredness classes.
    let base_class = markup::class_list(&ctx.control_classes());
    let mut attrs = decorated_attrs(&base_class, &options.label_html);
    // Grouped controls have per-item labels; only single controls point
    // their outer label at the control id.
    if !attrs.contains_key("for") && ctx.request.control == ControlType::Select {
        attrs.insert("for".into(), ctx.dom_id());
    }
    Ok(markup::tag("label", &attrs, content))
}
