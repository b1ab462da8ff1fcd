/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

/// Configuration and programming errors surfaced by the pipeline.
///
/// Translation misses are not errors (they resolve through the fallback
/// chain), and caller-supplied accessor/predicate functions are assumed
/// total, so nothing here is retriable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("control type `{control}` is not implemented")]
    UnsupportedControl { control: String },

    #[error("collection for `{attribute}` cannot be resolved to labels and values: {reason}")]
    MalformedCollection { attribute: String, reason: String },
}
