/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

#![allow(dead_code)]

use fieldset_core::{
    Association, Catalog, ColumnType, Config, FormContext, FormModel, Scalar, Validator,
};
use fieldset_renderer::{ControlType, FormBuilder, InputOptions, InputRequest};
use std::collections::HashMap;

/// A configurable in-memory bound object for tests.
pub struct TestModel {
    name: String,
    values: HashMap<String, Vec<Scalar>>,
    columns: HashMap<String, ColumnType>,
    errors: HashMap<String, Vec<String>>,
    validators: HashMap<String, Vec<Validator>>,
    associations: HashMap<String, Association>,
}

impl TestModel {
    pub fn new(name: &str) -> Self {
        TestModel {
            name: name.to_string(),
            values: HashMap::new(),
            columns: HashMap::new(),
            errors: HashMap::new(),
            validators: HashMap::new(),
            associations: HashMap::new(),
        }
    }

    pub fn with_value(mut self, attribute: &str, value: impl Into<Scalar>) -> Self {
        self.values
            .entry(attribute.to_string())
            .or_default()
            .push(value.into());
        self
    }

    pub fn with_column(mut self, attribute: &str, column: ColumnType) -> Self {
        self.columns.insert(attribute.to_string(), column);
        self
    }

    pub fn with_error(mut self, attribute: &str, message: &str) -> Self {
        self.errors
            .entry(attribute.to_string())
            .or_default()
            .push(message.to_string());
        self
    }

    pub fn with_presence_validator(mut self, attribute: &str) -> Self {
        self.validators
            .entry(attribute.to_string())
            .or_default()
            .push(Validator::presence());
        self
    }

    pub fn with_validator(mut self, attribute: &str, validator: Validator) -> Self {
        self.validators
            .entry(attribute.to_string())
            .or_default()
            .push(validator);
        self
    }

    pub fn with_association(mut self, attribute: &str, name: &str) -> Self {
        self.associations
            .insert(attribute.to_string(), Association::new(name));
        self
    }
}

impl FormModel for TestModel {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn value(&self, attribute: &str) -> Option<Scalar> {
        self.values
            .get(attribute)
            .and_then(|v| v.first())
            .cloned()
    }

    fn values(&self, attribute: &str) -> Vec<Scalar> {
        self.values.get(attribute).cloned().unwrap_or_default()
    }

    fn column_type(&self, attribute: &str) -> Option<ColumnType> {
        self.columns.get(attribute).copied()
    }

    fn errors_on(&self, attribute: &str) -> Vec<String> {
        self.errors.get(attribute).cloned().unwrap_or_default()
    }

    fn validators_on(&self, attribute: &str) -> Vec<Validator> {
        self.validators.get(attribute).cloned().unwrap_or_default()
    }

    fn association(&self, attribute: &str) -> Option<Association> {
        self.associations.get(attribute).cloned()
    }
}

/// A user object with a boolean `active` column, the staple fixture.
pub fn user() -> TestModel {
    TestModel::new("user")
        .with_column("active", ColumnType::Boolean)
        .with_column("name", ColumnType::String)
        .with_column("age", ColumnType::Integer)
}

/// Render one input with explicit configuration and catalog.
pub fn render_with(
    config: &Config,
    catalog: &Catalog,
    context: &FormContext,
    object: &dyn FormModel,
    attribute: &str,
    control: ControlType,
    options: InputOptions,
) -> String {
    let builder = FormBuilder::new(config, catalog, context);
    let request = InputRequest::new(object, attribute, control).with_options(options);
    builder
        .render(&request)
        .expect("render should succeed")
        .into_string()
}

/// Render one input with the default configuration, English catalog and
/// no current action.
pub fn render(
    object: &dyn FormModel,
    attribute: &str,
    control: ControlType,
    options: InputOptions,
) -> String {
    let config = Config::default();
    let catalog = Catalog::en();
    let context = FormContext::new("en");
    render_with(&config, &catalog, &context, object, attribute, control, options)
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
