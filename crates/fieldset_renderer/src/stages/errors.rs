/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! The errors stage: validation messages currently attached to the
//! attribute (association messages merged in), joined and wrapped in the
//! error element.

use super::{decorated_attrs, Stage};
use crate::error::RenderResult;
use crate::pipeline::InputContext;
use crate::request::StageOption;
use fieldset_core::config::StageKind;
use fieldset_core::markup::{self, Markup};

pub struct ErrorsStage;

impl Stage for ErrorsStage {
    fn kind(&self) -> StageKind {
        StageKind::Errors
    }

    fn run(&self, ctx: &InputContext<'_>) -> RenderResult<Markup> {
        let options = ctx.options();
        let text = match &options.error {
            Some(StageOption::Text(t)) => Some(t.clone()),
            Some(StageOption::Off) => None,
            None => {
                let mut messages = ctx.object().errors_on(ctx.attribute());
                if let Some(assoc) = ctx.object().association(ctx.attribute()) {
                    messages.extend(ctx.object().errors_on(&assoc.name));
                }
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join(", "))
                }
            }
        };

        let Some(text) = text else {
            return Ok(Markup::empty());
        };

        let tag_name = options
            .error_tag
            .as_deref()
            .unwrap_or(&ctx.config.error_tag);
        let attrs = decorated_attrs("error", &options.error_html);
        Ok(markup::tag(tag_name, &attrs, Markup::text(&text)))
    }
}
