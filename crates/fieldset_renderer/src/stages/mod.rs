/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! The pipeline stages. Each stage renders one piece of a control's
//! surrounding decoration and returns a markup-safe fragment, or the
//! empty fragment when it has nothing to contribute.

pub mod errors;
pub mod hints;
pub mod labels;

pub use errors::ErrorsStage;
pub use hints::HintStage;
pub use labels::{label_markup, LabelInputStage};

use crate::error::RenderResult;
use crate::pipeline::InputContext;
use fieldset_core::config::StageKind;
use fieldset_core::markup::{self, AttrMap, Markup};

/// One independently toggle-able piece of decoration.
pub trait Stage {
    fn kind(&self) -> StageKind;
    fn run(&self, ctx: &InputContext<'_>) -> RenderResult<Markup>;
}

/// The stage implementation for a stage kind.
pub fn stage_for(kind: StageKind) -> &'static dyn Stage {
    match kind {
        StageKind::Errors => &ErrorsStage,
        StageKind::Hint => &HintStage,
        StageKind::LabelInput => &LabelInputStage,
    }
}

/// Attributes for a decoration element: the stage's base class first,
/// then the caller's namespace overrides, with classes appended rather
/// than replaced. Option keys never leak into emitted attributes because
/// overrides arrive as an attribute map, not a free-form option hash.
pub(crate) fn decorated_attrs(base_class: &str, html: &AttrMap) -> AttrMap {
    let mut attrs = AttrMap::new();
    attrs.insert("class".into(), base_class.to_string());
    for (k, v) in html {
        if k == "class" {
            markup::append_class(&mut attrs, v);
        } else {
            attrs.insert(k.clone(), v.clone());
        }
    }
    attrs
}
