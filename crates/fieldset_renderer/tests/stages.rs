/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

mod common;
use common::*;

use fieldset_core::{AttrMap, Catalog, Config, FormContext, StageKind, TagChoice};
use fieldset_renderer::{
    Collection, ControlType, FormBuilder, InputOptions, InputRequest, RenderError, StageOption,
};

fn name_select_options() -> InputOptions {
    InputOptions {
        collection: Some(Collection::scalars(["Jose", "Carlos"])),
        ..Default::default()
    }
}

#[test]
fn hint_is_not_generated_by_default() {
    let user = user();
    let html = render(&user, "name", ControlType::Select, name_select_options());
    assert!(!html.contains("class=\"hint\""));
}

#[test]
fn hint_renders_optional_text() {
    let user = user();
    let html = render(
        &user,
        "name",
        ControlType::Select,
        InputOptions {
            hint: Some(StageOption::text("Use with care...")),
            ..name_select_options()
        },
    );
    assert!(html.contains(r#"<span class="hint">Use with care...</span>"#));
}

#[test]
fn hint_tag_is_overridable_per_call() {
    let user = user();
    let html = render(
        &user,
        "name",
        ControlType::Select,
        InputOptions {
            hint: Some(StageOption::text("Use with care...")),
            hint_tag: Some("p".into()),
            ..name_select_options()
        },
    );
    assert!(html.contains(r#"<p class="hint">Use with care...</p>"#));
    assert!(!html.contains("<span class=\"hint\""));
}

#[test]
fn hint_accepts_html_options_without_leaking_option_keys() {
    let user = user();
    let mut hint_html = AttrMap::new();
    hint_html.insert("id".into(), "hint".into());
    hint_html.insert("class".into(), "yay".into());
    let html = render(
        &user,
        "name",
        ControlType::Select,
        InputOptions {
            hint: Some(StageOption::text("Yay!")),
            hint_html,
            ..name_select_options()
        },
    );
    assert!(html.contains(r#"<span class="hint yay" id="hint">Yay!</span>"#));
    assert!(!html.contains("hint_html"));
    assert!(!html.contains("hint_tag"));
}

#[test]
fn explicit_hint_text_is_escaped() {
    let user = user();
    let html = render(
        &user,
        "name",
        ControlType::Select,
        InputOptions {
            hint: Some(StageOption::text("<script>alert(1337)</script>")),
            ..name_select_options()
        },
    );
    assert!(html.contains("&lt;script&gt;alert(1337)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn errors_stage_renders_model_messages() {
    let user = user().with_error("name", "can't be blank");
    let html = render(&user, "name", ControlType::Select, name_select_options());
    assert!(html.contains(r#"<span class="error">can't be blank</span>"#));
}

#[test]
fn errors_stage_merges_association_messages() {
    let user = user()
        .with_association("company_id", "company")
        .with_error("company", "must exist");
    let html = render(
        &user,
        "company_id",
        ControlType::Select,
        name_select_options(),
    );
    assert!(html.contains(r#"<span class="error">must exist</span>"#));
}

#[test]
fn stage_order_is_errors_hint_label_input() {
    let user = user().with_error("name", "can't be blank");
    let html = render(
        &user,
        "name",
        ControlType::Select,
        InputOptions {
            hint: Some(StageOption::text("Pick one")),
            ..name_select_options()
        },
    );
    let error_at = html.find("class=\"error\"").unwrap();
    let hint_at = html.find("class=\"hint\"").unwrap();
    let select_at = html.find("<select").unwrap();
    assert!(error_at < hint_at);
    assert!(hint_at < select_at);
}

#[test]
fn disabling_one_stage_removes_exactly_its_contribution() {
    let user = user().with_error("name", "can't be blank");
    let options = |hint: Option<StageOption>| InputOptions {
        hint,
        ..InputOptions {
            collection: Some(Collection::scalars(["Jose", "Carlos"])),
            ..Default::default()
        }
    };

    let with_hint = render(
        &user,
        "name",
        ControlType::Select,
        options(Some(StageOption::text("Pick one"))),
    );
    let without_hint = render(&user, "name", ControlType::Select, options(Some(StageOption::Off)));

    assert!(with_hint.contains("class=\"hint\""));
    assert!(!without_hint.contains("class=\"hint\""));
    // Sibling stages are untouched, in the same order.
    assert!(without_hint.contains("class=\"error\""));
    assert!(without_hint.contains("<select"));
    assert!(without_hint.find("class=\"error\"").unwrap() < without_hint.find("<select").unwrap());
}

#[test]
fn label_input_stage_can_be_suppressed() {
    let user = user();
    let html = render(
        &user,
        "name",
        ControlType::Select,
        InputOptions {
            label_input: Some(false),
            hint: Some(StageOption::text("still here")),
            ..name_select_options()
        },
    );
    assert!(!html.contains("<select"));
    assert!(!html.contains("<label"));
    assert!(html.contains("still here"));
}

#[test]
fn label_can_be_suppressed_keeping_the_control() {
    let user = user();
    let html = render(
        &user,
        "name",
        ControlType::Select,
        InputOptions {
            label: Some(StageOption::Off),
            ..name_select_options()
        },
    );
    assert!(html.contains("<select"));
    assert!(!html.contains("<label"));
}

#[test]
fn per_call_component_list_replaces_default() {
    let user = user().with_error("name", "can't be blank");
    let html = render(
        &user,
        "name",
        ControlType::Select,
        InputOptions {
            components: Some(vec![StageKind::LabelInput]),
            hint: Some(StageOption::text("gone")),
            ..name_select_options()
        },
    );
    assert!(html.contains("<select"));
    assert!(!html.contains("class=\"error\""));
    assert!(!html.contains("class=\"hint\""));
}

#[test]
fn wrapper_always_wraps_even_when_stages_are_empty() {
    let user = user();
    let html = render(
        &user,
        "name",
        ControlType::Select,
        InputOptions {
            components: Some(vec![]),
            ..name_select_options()
        },
    );
    assert_eq!(html, r#"<div class="select required input"></div>"#);
}

#[test]
fn falsy_wrapper_tag_keeps_children_in_order() {
    let user = user();
    let wrapped = render(&user, "name", ControlType::Select, name_select_options());
    let bare = render(
        &user,
        "name",
        ControlType::Select,
        InputOptions {
            wrapper_tag: Some(TagChoice::off()),
            ..name_select_options()
        },
    );
    assert!(wrapped.starts_with("<div"));
    assert!(bare.starts_with("<label"));
    assert!(bare.contains("<select"));
    // Same children, same order, no wrapping element.
    assert!(wrapped.contains(&bare));
}

#[test]
fn presence_validator_makes_control_required() {
    let user = user().with_presence_validator("name");
    let config = Config {
        required_by_default: false,
        ..Default::default()
    };
    let catalog = Catalog::en();
    let context = FormContext::new("en");
    let html = render_with(
        &config,
        &catalog,
        &context,
        &user,
        "name",
        ControlType::Select,
        name_select_options(),
    );
    assert!(html.contains("class=\"select required\""));
}

#[test]
fn association_presence_validator_also_implies_required() {
    let user = user()
        .with_association("company_id", "company")
        .with_presence_validator("company");
    let config = Config {
        required_by_default: false,
        ..Default::default()
    };
    let catalog = Catalog::en();
    let context = FormContext::new("en");
    let html = render_with(
        &config,
        &catalog,
        &context,
        &user,
        "company_id",
        ControlType::Select,
        name_select_options(),
    );
    assert!(html.contains("class=\"select required\""));
}

#[test]
fn absent_metadata_falls_back_to_configured_default() {
    let user = user();
    let config = Config {
        required_by_default: false,
        ..Default::default()
    };
    let catalog = Catalog::en();
    let context = FormContext::new("en");
    let html = render_with(
        &config,
        &catalog,
        &context,
        &user,
        "name",
        ControlType::Select,
        name_select_options(),
    );
    assert!(html.contains("class=\"select optional\""));
    assert!(!html.contains("required"));
}

#[test]
fn explicit_required_override_wins() {
    let user = user().with_presence_validator("name");
    let html = render(
        &user,
        "name",
        ControlType::Select,
        InputOptions {
            required: Some(false),
            ..name_select_options()
        },
    );
    assert!(html.contains("class=\"select optional\""));
}

#[test]
fn unimplemented_control_type_fails_fast() {
    let user = user();
    let config = Config::default();
    let catalog = Catalog::en();
    let context = FormContext::new("en");
    let builder = FormBuilder::new(&config, &catalog, &context);
    let request = InputRequest::new(&user, "name", ControlType::String);
    let err = builder.render(&request).unwrap_err();
    assert_eq!(
        err,
        RenderError::UnsupportedControl {
            control: "string".into()
        }
    );
}

#[test]
fn standalone_hint_helper_renders_unwrapped() {
    let user = user();
    let config = Config::default();
    let catalog = Catalog::en();
    let context = FormContext::new("en");
    let builder = FormBuilder::new(&config, &catalog, &context);
    let request = InputRequest::new(&user, "name", ControlType::Select).with_options(InputOptions {
        hint: Some(StageOption::text("Hello World!")),
        ..Default::default()
    });
    let hint = builder.hint(&request).unwrap().into_string();
    assert_eq!(hint, r#"<span class="hint">Hello World!</span>"#);
}
