/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! The hint stage. Explicit per-call text wins and is escaped; otherwise
//! the `hints` namespace is consulted, honoring preformatted rich
//! entries. An empty resolution produces no element at all.

use super::{decorated_attrs, Stage};
use crate::error::RenderResult;
use crate::pipeline::InputContext;
use crate::request::StageOption;
use fieldset_core::config::StageKind;
use fieldset_core::markup::{self, Markup};

pub struct HintStage;

impl Stage for HintStage {
    fn kind(&self) -> StageKind {
        StageKind::Hint
    }

    fn run(&self, ctx: &InputContext<'_>) -> RenderResult<Markup> {
        let options = ctx.options();
        let content = match &options.hint {
            Some(StageOption::Text(t)) => Markup::text(t),
            Some(StageOption::Off) => return Ok(Markup::empty()),
            None => {
                let resolved = ctx.translate("hints", "");
                if resolved.text.is_empty() {
                    return Ok(Markup::empty());
                }
                if resolved.html {
                    Markup::raw(resolved.text)
                } else {
                    Markup::text(&resolved.text)
                }
            }
        };

        let tag_name = options.hint_tag.as_deref().unwrap_or(&ctx.config.hint_tag);
        let attrs = decorated_attrs("hint", &options.hint_html);
        Ok(markup::tag(tag_name, &attrs, content))
    }
}
