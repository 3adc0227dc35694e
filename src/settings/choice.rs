//! Selectable choices for choice-based fields.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::SettingsError;
use crate::format::{
    expect_array, expect_object, expect_str, join, missing, type_mismatch, AsJson, AttrMap,
};
use crate::settings::tooltip::Tooltip;

/// Entities that own an ordered collection of [`Choice`]s.
///
/// Provides the shared append/replace operations over the owner's choice
/// storage. Replacing via [`HasChoices::set_choices`] is atomic: the new
/// collection swaps in wholesale.
pub trait HasChoices {
    /// The owned choices, in insertion order.
    fn choices(&self) -> &[Choice];

    /// Mutable access to the owned choice collection.
    fn choices_mut(&mut self) -> &mut Vec<Choice>;

    /// Append a single choice.
    fn add_choice(&mut self, choice: Choice) {
        self.choices_mut().push(choice);
    }

    /// Replace the whole choice collection.
    fn set_choices(&mut self, choices: Vec<Choice>) {
        *self.choices_mut() = choices;
    }

    /// Serialize each owned choice in order.
    fn choices_as_json(&self) -> Vec<Value> {
        self.choices().iter().map(AsJson::as_json).collect()
    }
}

const KNOWN_KEYS: &[&str] = &[
    "label",
    "name",
    "value",
    "default_value",
    "tooltip",
    "tooltip_class",
    "icon",
    "choices",
];

/// A single selectable option within a checkbox, radio, or select field.
///
/// A choice may itself carry nested choices, which the settings API renders
/// as an option group. `value` falls back to the label on the consuming side
/// when absent, so it is only emitted when set explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    label: String,
    name: Option<String>,
    value: Option<String>,
    /// Only used by checkboxes; the settings API expects 1 or 0.
    default_value: i64,
    icon: Option<String>,
    tooltip: Tooltip,
    choices: Vec<Choice>,
}

impl Choice {
    /// Create a choice with the given label.
    ///
    /// An empty label is allowed but yields an entity that serializes to an
    /// empty object.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: None,
            value: None,
            default_value: 0,
            icon: None,
            tooltip: Tooltip::default(),
            choices: Vec::new(),
        }
    }

    /// Set the setting name (checkboxes only; doubles as the container
    /// element's ID attribute).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the submitted value (radio buttons and selects only).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set an image URL or icon classname (radio and checkbox fields only).
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set whether the choice is checked by default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::TypeMismatch`] unless `value` is 0 or 1,
    /// the only values the settings API accepts here.
    pub fn with_default_value(mut self, value: i64) -> Result<Self, SettingsError> {
        if value != 0 && value != 1 {
            return Err(SettingsError::TypeMismatch {
                path: "default_value".to_string(),
                expected: "0 or 1".to_string(),
                actual: value.to_string(),
            });
        }
        self.default_value = value;
        Ok(self)
    }

    /// Set the tooltip text.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip.set_text(tooltip);
        self
    }

    /// Set the tooltip container class.
    pub fn with_tooltip_class(mut self, tooltip_class: impl Into<String>) -> Self {
        self.tooltip.set_css_class(tooltip_class);
        self
    }

    /// Append a nested choice, forming an option group.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.add_choice(choice);
        self
    }

    /// Replace all nested choices.
    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.set_choices(choices);
        self
    }

    /// The choice label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Tooltip text, if set.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.text()
    }

    /// Tooltip container class, if set.
    pub fn tooltip_class(&self) -> Option<&str> {
        self.tooltip.css_class()
    }

    /// Parse a choice from an untyped JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::TypeMismatch`] when the payload is not an
    /// object, `label` is absent or not a string, `default_value` is outside
    /// {0, 1}, or any other attribute has the wrong JSON type.
    pub fn from_value(value: &Value) -> Result<Self, SettingsError> {
        Self::from_value_at(value, "")
    }

    pub(crate) fn from_value_at(value: &Value, path: &str) -> Result<Self, SettingsError> {
        let map = expect_object(value, path)?;

        let label = match map.get("label") {
            Some(v) => expect_str(v, &join(path, "label"))?,
            None => return Err(missing(&join(path, "label"), "string")),
        };
        let mut choice = Choice::new(label);

        if let Some(v) = map.get("name") {
            choice.name = Some(expect_str(v, &join(path, "name"))?);
        }
        if let Some(v) = map.get("value") {
            choice.value = Some(expect_str(v, &join(path, "value"))?);
        }
        if let Some(v) = map.get("default_value") {
            let dv_path = join(path, "default_value");
            choice.default_value = v
                .as_i64()
                .filter(|dv| *dv == 0 || *dv == 1)
                .ok_or_else(|| type_mismatch(&dv_path, "0 or 1", v))?;
        }
        if let Some(v) = map.get("icon") {
            choice.icon = Some(expect_str(v, &join(path, "icon"))?);
        }
        choice.tooltip.update_from_map(map, path)?;
        if let Some(v) = map.get("choices") {
            let list_path = join(path, "choices");
            for (i, item) in expect_array(v, &list_path)?.iter().enumerate() {
                choice.add_choice(Self::from_value_at(item, &join(&list_path, &i.to_string()))?);
            }
        }

        for key in map.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                debug!("ignoring unknown choice key `{}` at `{path}`", key);
            }
        }

        Ok(choice)
    }
}

impl HasChoices for Choice {
    fn choices(&self) -> &[Choice] {
        &self.choices
    }

    fn choices_mut(&mut self) -> &mut Vec<Choice> {
        &mut self.choices
    }
}

impl AsJson for Choice {
    fn as_json(&self) -> Value {
        let mut attrs = AttrMap::new();
        attrs.text("label", &self.label);
        attrs.opt_text("name", self.name.as_deref());
        attrs.opt_text("value", self.value.as_deref());
        attrs.count("default_value", self.default_value);
        self.tooltip.collect(&mut attrs);
        attrs.opt_text("icon", self.icon.as_deref());
        attrs.items("choices", self.choices_as_json());
        attrs.into_value()
    }
}

impl Serialize for Choice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_json().serialize(serializer)
    }
}
