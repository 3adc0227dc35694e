//! Titled groups of fields within a settings page.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::SettingsError;
use crate::format::{expect_array, expect_object, expect_str, join, AsJson, AttrMap};
use crate::settings::field::Field;
use crate::settings::tooltip::Tooltip;

const KNOWN_KEYS: &[&str] = &[
    "title",
    "description",
    "id",
    "class",
    "style",
    "tooltip",
    "tooltip_class",
    "dependency",
    "fields",
];

/// A titled group of [`Field`]s within a settings page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    title: Option<String>,
    description: Option<String>,
    id: Option<String>,
    css_class: Option<String>,
    style: Option<String>,
    tooltip: Tooltip,
    dependency: Option<Box<Field>>,
    fields: Vec<Field>,
}

impl Section {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the section title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the section description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the ID attribute of the section's HTML container element.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the class appended to the section's HTML container element.
    pub fn with_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    /// Set the style appended to the section's HTML container element.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
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

    /// Set the field whose serialized form drives this section's display rules.
    pub fn with_dependency(mut self, dependency: Field) -> Self {
        self.dependency = Some(Box::new(dependency));
        self
    }

    /// Append a field to the section.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Append a field, fluent form.
    pub fn with_field(mut self, field: Field) -> Self {
        self.add_field(field);
        self
    }

    /// Replace the whole field collection.
    ///
    /// Fields added earlier are discarded, not merged.
    pub fn set_fields(&mut self, fields: Vec<Field>) {
        self.fields = fields;
    }

    /// Replace the whole field collection, fluent form.
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.set_fields(fields);
        self
    }

    /// The section title, if set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Tooltip text, if set.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.text()
    }

    /// Tooltip container class, if set.
    pub fn tooltip_class(&self) -> Option<&str> {
        self.tooltip.css_class()
    }

    /// The section's fields, in insertion order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Parse a section from an untyped JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::TypeMismatch`] when the payload is not an
    /// object or any attribute has the wrong JSON type.
    pub fn from_value(value: &Value) -> Result<Self, SettingsError> {
        Self::from_value_at(value, "")
    }

    pub(crate) fn from_value_at(value: &Value, path: &str) -> Result<Self, SettingsError> {
        let map = expect_object(value, path)?;
        let mut section = Section::new();

        if let Some(v) = map.get("title") {
            section.title = Some(expect_str(v, &join(path, "title"))?);
        }
        if let Some(v) = map.get("description") {
            section.description = Some(expect_str(v, &join(path, "description"))?);
        }
        if let Some(v) = map.get("id") {
            section.id = Some(expect_str(v, &join(path, "id"))?);
        }
        if let Some(v) = map.get("class") {
            section.css_class = Some(expect_str(v, &join(path, "class"))?);
        }
        if let Some(v) = map.get("style") {
            section.style = Some(expect_str(v, &join(path, "style"))?);
        }
        section.tooltip.update_from_map(map, path)?;
        if let Some(v) = map.get("dependency") {
            section.dependency = Some(Box::new(Field::from_value_at(
                v,
                &join(path, "dependency"),
            )?));
        }
        if let Some(v) = map.get("fields") {
            let list_path = join(path, "fields");
            for (i, item) in expect_array(v, &list_path)?.iter().enumerate() {
                section.add_field(Field::from_value_at(
                    item,
                    &join(&list_path, &i.to_string()),
                )?);
            }
        }

        for key in map.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                debug!("ignoring unknown section key `{}` at `{path}`", key);
            }
        }

        Ok(section)
    }
}

impl AsJson for Section {
    fn as_json(&self) -> Value {
        let mut attrs = AttrMap::new();
        attrs.opt_text("title", self.title.as_deref());
        attrs.opt_text("description", self.description.as_deref());
        attrs.opt_text("id", self.id.as_deref());
        attrs.opt_text("class", self.css_class.as_deref());
        attrs.opt_text("style", self.style.as_deref());
        self.tooltip.collect(&mut attrs);
        if let Some(dependency) = &self.dependency {
            attrs.entry("dependency", dependency.as_json());
        }
        attrs.items(
            "fields",
            self.fields.iter().map(AsJson::as_json).collect(),
        );
        attrs.into_value()
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::field::FieldType;
    use serde_json::json;

    #[test]
    fn test_empty_section_serializes_to_empty_object() {
        assert_eq!(Section::new().as_json(), json!({}));
    }

    #[test]
    fn test_scalar_attributes() {
        let section = Section::new()
            .with_title("Test Title")
            .with_description("Test Description")
            .with_id("Test Id")
            .with_class("Test Class")
            .with_style("Test Style");
        assert_eq!(
            section.as_json(),
            json!({
                "title": "Test Title",
                "description": "Test Description",
                "id": "Test Id",
                "class": "Test Class",
                "style": "Test Style",
            })
        );
    }

    #[test]
    fn test_fields_serialize_in_order() {
        let mut section = Section::new();
        assert_eq!(section.as_json(), json!({}));

        section.set_fields(vec![
            Field::new(FieldType::Hidden, "Hidden Field"),
            Field::new(FieldType::Text, "Text Field"),
        ]);
        assert_eq!(
            section.as_json(),
            json!({
                "fields": [
                    {"type": "hidden", "name": "Hidden Field"},
                    {"type": "text", "name": "Text Field"},
                ],
            })
        );
    }

    #[test]
    fn test_set_fields_replaces_existing_fields() {
        let mut section = Section::new();
        section.add_field(Field::new(FieldType::Text, "Existing Field"));
        assert_eq!(
            section.as_json(),
            json!({"fields": [{"type": "text", "name": "Existing Field"}]})
        );

        section.set_fields(vec![Field::new(FieldType::Text, "New Field")]);
        assert_eq!(
            section.as_json(),
            json!({"fields": [{"type": "text", "name": "New Field"}]})
        );
    }

    #[test]
    fn test_from_value_round_trips() {
        let section = Section::new()
            .with_title("General")
            .with_tooltip("tip")
            .with_dependency(Field::new(FieldType::Checkbox, "enabled"))
            .with_field(Field::new(FieldType::Text, "api_key"));
        let parsed = Section::from_value(&section.as_json()).unwrap();
        assert_eq!(parsed, section);
    }

    #[test]
    fn test_from_value_rejects_non_array_fields() {
        let err = Section::from_value(&json!({"fields": {}})).unwrap_err();
        assert_eq!(err.path(), "fields");
    }

    #[test]
    fn test_from_value_reports_offending_field_index() {
        let err = Section::from_value(&json!({
            "fields": [{"type": "text", "name": "ok"}, "not a field"],
        }))
        .unwrap_err();
        assert_eq!(err.path(), "fields.1");
    }
}
