//! Shared tooltip state composed into choices, fields, and sections.

use serde_json::{Map, Value};

use crate::error::SettingsError;
use crate::format::{expect_str, join, AttrMap};

/// Tooltip text and container class for an element.
///
/// Held by value inside each entity that can render a tooltip; the owning
/// entity exposes the fluent setters and folds this state into its own
/// serialized form under the `tooltip` and `tooltip_class` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tooltip {
    text: Option<String>,
    css_class: Option<String>,
}

impl Tooltip {
    /// Tooltip text content, if set.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Class appended to the tooltip's HTML container element, if set.
    pub fn css_class(&self) -> Option<&str> {
        self.css_class.as_deref()
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub(crate) fn set_css_class(&mut self, css_class: impl Into<String>) {
        self.css_class = Some(css_class.into());
    }

    pub(crate) fn collect(&self, attrs: &mut AttrMap) {
        attrs.opt_text("tooltip", self.text());
        attrs.opt_text("tooltip_class", self.css_class());
    }

    pub(crate) fn update_from_map(
        &mut self,
        map: &Map<String, Value>,
        path: &str,
    ) -> Result<(), SettingsError> {
        if let Some(v) = map.get("tooltip") {
            self.text = Some(expect_str(v, &join(path, "tooltip"))?);
        }
        if let Some(v) = map.get("tooltip_class") {
            self.css_class = Some(expect_str(v, &join(path, "tooltip_class"))?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trips_through_accessors() {
        let mut tooltip = Tooltip::default();
        assert_eq!(tooltip.text(), None);
        assert_eq!(tooltip.css_class(), None);

        tooltip.set_text("test_tooltip");
        tooltip.set_css_class("test_tooltip_class");
        assert_eq!(tooltip.text(), Some("test_tooltip"));
        assert_eq!(tooltip.css_class(), Some("test_tooltip_class"));
    }

    #[test]
    fn test_unset_tooltip_collects_nothing() {
        let mut attrs = AttrMap::new();
        Tooltip::default().collect(&mut attrs);
        assert_eq!(attrs.into_value(), json!({}));
    }

    #[test]
    fn test_null_tooltip_is_a_type_mismatch() {
        let mut tooltip = Tooltip::default();
        let map = json!({"tooltip": null});
        let err = tooltip
            .update_from_map(map.as_object().unwrap(), "fields.0")
            .unwrap_err();
        assert_eq!(err.path(), "fields.0.tooltip");
    }

    #[test]
    fn test_non_string_tooltip_class_is_a_type_mismatch() {
        let mut tooltip = Tooltip::default();
        let map = json!({"tooltip_class": 7});
        assert!(tooltip.update_from_map(map.as_object().unwrap(), "").is_err());
    }
}
