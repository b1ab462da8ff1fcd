/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! # fieldset_renderer
//!
//! The form-control rendering pipeline: takes a configuration snapshot, a
//! translation catalog and a bound data object and produces markup
//! fragments for data-entry controls, inferring structure, requiredness
//! and human-readable labels along the way.
//!
//! # Example
//!
//! ```rust
//! use fieldset_core::{Catalog, ColumnType, Config, FormContext, FormModel, Scalar};
//! use fieldset_renderer::{ControlType, FormBuilder, InputRequest};
//!
//! struct User {
//!     active: bool,
//! }
//!
//! impl FormModel for User {
//!     fn model_name(&self) -> &str {
//!         "user"
//!     }
//!     fn value(&self, attribute: &str) -> Option<Scalar> {
//!         match attribute {
//!             "active" => Some(Scalar::Bool(self.active)),
//!             _ => None,
//!         }
//!     }
//!     fn column_type(&self, attribute: &str) -> Option<ColumnType> {
//!         match attribute {
//!             "active" => Some(ColumnType::Boolean),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let config = Config::default();
//! let catalog = Catalog::en();
//! let context = FormContext::new("en");
//! let builder = FormBuilder::new(&config, &catalog, &context);
//!
//! let user = User { active: false };
//! let request = InputRequest::new(&user, "active", ControlType::RadioButtons);
//! let fragment = builder.render(&request).unwrap();
//! assert!(fragment.as_str().contains(r#"type="radio""#));
//! assert!(fragment.as_str().contains("Yes"));
//! ```

pub mod error;
pub mod inputs;
pub mod normalize;
pub mod pipeline;
pub mod predicate;
pub mod request;
pub mod stages;
pub mod wrapper;

pub use error::{RenderError, RenderResult};
pub use normalize::{
    boolean_collection, boolean_labels, normalize, reset_boolean_label_cache, CollectionOption,
};
pub use pipeline::{FormBuilder, InputContext};
pub use predicate::Predicate;
pub use request::{ControlType, InputOptions, InputRequest, StageOption};
pub use wrapper::{TagSpec, WrapperComposer};

// Re-export the core types callers need alongside the pipeline.
pub use fieldset_core::{
    Accessor, Catalog, Collection, Config, FormContext, Markup, Scalar, StageKind, TagChoice,
};
