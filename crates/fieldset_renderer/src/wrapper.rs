/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 the fieldset developers
*/

//! Nested tag wrapping: the outer wrapper around the whole fragment, the
//! collection wrapper around a radio/checkbox group, and the item wrapper
//! around each group member.
//!
//! Every tag/class decision resolves per-call option > structural default
//! for the control type > global configuration. A disabled tag means
//! "emit the content with no element at this level", never "drop the
//! content".

use crate::request::InputOptions;
use fieldset_core::config::{Config, TagChoice};
use fieldset_core::markup::{self, AttrMap, Markup};

/// A resolved description of one wrapping level.
#[derive(Debug, Clone, PartialEq)]
pub struct TagSpec {
    /// `None` disables the element at this level.
    pub tag: Option<String>,
    pub classes: Vec<String>,
    pub html: AttrMap,
}

impl TagSpec {
    pub fn none() -> Self {
        TagSpec { tag: None, classes: Vec::new(), html: AttrMap::new() }
    }

    /// Wrap `content` according to this spec.
    pub fn wrap(&self, content: Markup) -> Markup {
        let Some(tag) = &self.tag else {
            return content;
        };
        let mut attrs = AttrMap::new();
        let classes = markup::class_list(&self.classes);
        if !classes.is_empty() {
            attrs.insert("class".into(), classes);
        }
        for (k, v) in &self.html {
            if k == "class" {
                markup::append_class(&mut attrs, v);
            } else {
                attrs.insert(k.clone(), v.clone());
            }
        }
        markup::tag(tag, &attrs, content)
    }
}

fn choose(per_call: Option<&TagChoice>, global: Option<&TagChoice>) -> Option<String> {
    match per_call.or(global) {
        Some(choice) => choice.name().map(str::to_string),
        None => None,
    }
}

/// Resolves wrapper specs from the configuration snapshot and the
/// per-call options.
pub struct WrapperComposer<'a> {
    config: &'a Config,
    options: &'a InputOptions,
}

impl<'a> WrapperComposer<'a> {
    pub fn new(config: &'a Config, options: &'a InputOptions) -> Self {
        WrapperComposer { config, options }
    }

    /// The outer wrapper around the whole control fragment.
    /// `control_classes` carries the control-type and requiredness
    /// classes derived by the pipeline.
    pub fn outer(&self, control_classes: Vec<String>) -> TagSpec {
        let mut classes = control_classes;
        if let Some(c) = &self.config.wrapper_class {
            classes.push(c.clone());
        }
        if let Some(c) = &self.options.wrapper_class {
            classes.push(c.clone());
        }
        TagSpec {
            tag: choose(
                self.options.wrapper_tag.as_ref(),
                self.config.wrapper_tag.as_ref(),
            ),
            classes,
            html: self.options.wrapper_html.clone(),
        }
    }

    /// The wrapper around a whole radio/checkbox group. Configured and
    /// per-call classes both apply, configured first.
    pub fn collection(&self) -> TagSpec {
        let mut classes = Vec::new();
        if let Some(c) = &self.config.collection_wrapper_class {
            classes.push(c.clone());
        }
        if let Some(c) = &self.options.collection_wrapper_class {
            classes.push(c.clone());
        }
        TagSpec {
            tag: choose(
                self.options.collection_wrapper_tag.as_ref(),
                self.config.collection_wrapper_tag.as_ref(),
            ),
            classes,
            html: AttrMap::new(),
        }
    }

    /// The wrapper around each item of a grouped control.
    /// `default_class` is the control's structural item class
    /// (`radio`/`checkbox`), dropped when the configuration opts out of
    /// default input wrapper classes.
    pub fn item(&self, default_class: Option<&str>) -> TagSpec {
        let mut classes = Vec::new();
        if self.config.include_default_input_wrapper_class {
            if let Some(c) = default_class {
                classes.push(c.to_string());
            }
        }
        if let Some(c) = &self.config.item_wrapper_class {
            classes.push(c.clone());
        }
        if let Some(c) = &self.options.item_wrapper_class {
            classes.push(c.clone());
        }
        TagSpec {
            tag: choose(
                self.options.item_wrapper_tag.as_ref(),
                self.config.item_wrapper_tag.as_ref(),
            ),
            classes,
            html: AttrMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_tag_passes_content_through() {
        let spec = TagSpec {
            tag: None,
            classes: vec!["radio".into()],
            html: AttrMap::new(),
        };
        let content = Markup::raw("<input />");
        assert_eq!(spec.wrap(content.clone()), content);
    }

    #[test]
    fn test_per_call_overrides_config_tag() {
        let config = Config {
            collection_wrapper_tag: Some(TagChoice::tag("ul")),
            ..Default::default()
        };
        let options = InputOptions {
            collection_wrapper_tag: Some(TagChoice::tag("section")),
            ..Default::default()
        };
        let composer = WrapperComposer::new(&config, &options);
        assert_eq!(composer.collection().tag.as_deref(), Some("section"));
    }

    #[test]
    fn test_per_call_can_disable_configured_tag() {
        let config = Config {
            collection_wrapper_tag: Some(TagChoice::tag("ul")),
            ..Default::default()
        };
        let options = InputOptions {
            collection_wrapper_tag: Some(TagChoice::off()),
            ..Default::default()
        };
        let composer = WrapperComposer::new(&config, &options);
        assert_eq!(composer.collection().tag, None);
    }

    #[test]
    fn test_item_classes_config_then_per_call() {
        let config = Config {
            item_wrapper_tag: Some(TagChoice::tag("li")),
            item_wrapper_class: Some("item".into()),
            ..Default::default()
        };
        let options = InputOptions {
            item_wrapper_class: Some("inline".into()),
            ..Default::default()
        };
        let composer = WrapperComposer::new(&config, &options);
        let spec = composer.item(Some("radio"));
        assert_eq!(spec.classes, vec!["radio", "item", "inline"]);
    }

    #[test]
    fn test_default_item_class_can_be_opted_out() {
        let config = Config {
            include_default_input_wrapper_class: false,
            ..Default::default()
        };
        let options = InputOptions {
            item_wrapper_class: Some("custom".into()),
            ..Default::default()
        };
        let composer = WrapperComposer::new(&config, &options);
        let spec = composer.item(Some("radio"));
        assert_eq!(spec.classes, vec!["custom"]);
    }
}
