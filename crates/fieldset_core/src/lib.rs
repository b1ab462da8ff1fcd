//! # fieldset_core
//!
//! Core data model for the fieldset form-control renderer: global
//! configuration, the translation catalog and its fallback resolver, the
//! raw collection model, the bound-object seam, and markup primitives.
//!
//! The rendering pipeline itself lives in the `fieldset_renderer` crate;
//! this crate owns the types both sides of that pipeline agree on.

pub mod catalog;
pub mod collection;
pub mod config;
pub mod markup;
pub mod model;
pub mod translate;

pub use catalog::{Catalog, Entry};
pub use collection::{Accessor, Collection, Item, Pair, Record, Scalar};
pub use config::{BooleanStyle, Config, StageKind, TagChoice};
pub use markup::{AttrMap, Markup};
pub use model::{Association, ColumnType, FormContext, FormModel, Validator, ValidatorKind};
pub use translate::{humanize, lookup_action, resolve, resolve_option_label, Resolved};
