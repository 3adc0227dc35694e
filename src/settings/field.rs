//! Settings field descriptors and the field type enumeration.

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::SettingsError;
use crate::format::{
    expect_array, expect_bool, expect_object, expect_str, join, missing, AsJson, AttrMap,
};
use crate::settings::choice::{Choice, HasChoices};
use crate::settings::tooltip::Tooltip;

/// The set of field types the settings API renders natively.
///
/// [`FieldType::Custom`] carries any other type string through unchanged for
/// frameworks that register their own renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Textarea,
    Hidden,
    Checkbox,
    Radio,
    Select,
    SelectCustom,
    FieldMap,
    DynamicFieldMap,
    FieldSelect,
    CheckboxAndSelect,
    Save,
    /// Any type string outside the native set.
    Custom(String),
}

impl FieldType {
    /// The type string emitted in the serialized field.
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Hidden => "hidden",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Select => "select",
            FieldType::SelectCustom => "select_custom",
            FieldType::FieldMap => "field_map",
            FieldType::DynamicFieldMap => "dynamic_field_map",
            FieldType::FieldSelect => "field_select",
            FieldType::CheckboxAndSelect => "checkbox_and_select",
            FieldType::Save => "save",
            FieldType::Custom(s) => s,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FieldType {
    fn from(s: &str) -> Self {
        match s {
            "text" => FieldType::Text,
            "textarea" => FieldType::Textarea,
            "hidden" => FieldType::Hidden,
            "checkbox" => FieldType::Checkbox,
            "radio" => FieldType::Radio,
            "select" => FieldType::Select,
            "select_custom" => FieldType::SelectCustom,
            "field_map" => FieldType::FieldMap,
            "dynamic_field_map" => FieldType::DynamicFieldMap,
            "field_select" => FieldType::FieldSelect,
            "checkbox_and_select" => FieldType::CheckboxAndSelect,
            "save" => FieldType::Save,
            other => FieldType::Custom(other.to_string()),
        }
    }
}

/// Named reference to a callback owned by the consuming framework.
///
/// Carried through the serialized form as an opaque string; this library
/// never resolves or invokes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackRef(String);

impl CallbackRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The referenced function name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

const KNOWN_KEYS: &[&str] = &[
    "type",
    "input_type",
    "name",
    "id",
    "label",
    "required",
    "class",
    "tooltip",
    "tooltip_class",
    "hidden",
    "default_value",
    "horizontal",
    "dependency",
    "choices",
    "feedback_callback",
    "callback",
    "validation_callback",
    "after_input",
    "field_map",
    "html_attributes",
];

/// One configurable input within a settings section.
///
/// A field owns its choices (for choice-based types) and any nested field-map
/// entries. The `dependency` field is another [`Field`] carried only for its
/// serialized form; the consuming framework interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    field_type: FieldType,
    name: String,
    input_type: Option<String>,
    id: Option<String>,
    label: Option<String>,
    required: bool,
    css_class: Option<String>,
    tooltip: Tooltip,
    hidden: bool,
    default_value: Option<String>,
    horizontal: bool,
    dependency: Option<Box<Field>>,
    choices: Vec<Choice>,
    feedback_callback: Option<CallbackRef>,
    callback: Option<CallbackRef>,
    validation_callback: Option<CallbackRef>,
    after_input: Option<String>,
    field_map: Vec<Field>,
    html_attributes: HashMap<String, String>,
}

impl Field {
    /// Create a field of the given type with the given setting name.
    pub fn new(field_type: FieldType, name: impl Into<String>) -> Self {
        Self {
            field_type,
            name: name.into(),
            input_type: None,
            id: None,
            label: None,
            required: false,
            css_class: None,
            tooltip: Tooltip::default(),
            hidden: false,
            default_value: None,
            horizontal: false,
            dependency: None,
            choices: Vec::new(),
            feedback_callback: None,
            callback: None,
            validation_callback: None,
            after_input: None,
            field_map: Vec::new(),
            html_attributes: HashMap::new(),
        }
    }

    /// Override the rendered input type.
    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    /// Set the ID attribute of the field's HTML container element.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the field label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the field as required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the class appended to the field's HTML container element.
    pub fn with_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
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

    /// Hide the field from the rendered form.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Set the default value rendered into the input.
    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Render choice-based inputs horizontally.
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Set the field whose serialized form drives this field's display rules.
    pub fn with_dependency(mut self, dependency: Field) -> Self {
        self.dependency = Some(Box::new(dependency));
        self
    }

    /// Append a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.add_choice(choice);
        self
    }

    /// Replace all choices.
    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.set_choices(choices);
        self
    }

    /// Set the feedback callback reference.
    pub fn with_feedback_callback(mut self, callback: CallbackRef) -> Self {
        self.feedback_callback = Some(callback);
        self
    }

    /// Set the rendering callback reference.
    pub fn with_callback(mut self, callback: CallbackRef) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Set the validation callback reference.
    pub fn with_validation_callback(mut self, callback: CallbackRef) -> Self {
        self.validation_callback = Some(callback);
        self
    }

    /// Set the markup rendered after the input element.
    pub fn with_after_input(mut self, after_input: impl Into<String>) -> Self {
        self.after_input = Some(after_input.into());
        self
    }

    /// Append a nested field-map entry.
    pub fn add_field_map(&mut self, field: Field) {
        self.field_map.push(field);
    }

    /// Append a nested field-map entry, fluent form.
    pub fn with_field_map_entry(mut self, field: Field) -> Self {
        self.add_field_map(field);
        self
    }

    /// Replace the whole field map.
    pub fn with_field_map(mut self, field_map: Vec<Field>) -> Self {
        self.field_map = field_map;
        self
    }

    /// Add one HTML attribute rendered onto the input element.
    pub fn with_html_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.html_attributes.insert(name.into(), value.into());
        self
    }

    /// Replace all HTML attributes.
    pub fn with_html_attributes(mut self, html_attributes: HashMap<String, String>) -> Self {
        self.html_attributes = html_attributes;
        self
    }

    /// The field type.
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// The setting name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tooltip text, if set.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.text()
    }

    /// Tooltip container class, if set.
    pub fn tooltip_class(&self) -> Option<&str> {
        self.tooltip.css_class()
    }

    /// Nested field-map entries, in insertion order.
    pub fn field_map(&self) -> &[Field] {
        &self.field_map
    }

    /// Parse a field from an untyped JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::TypeMismatch`] when the payload is not an
    /// object, `type` or `name` is absent or not a string, or any other
    /// attribute has the wrong JSON type.
    pub fn from_value(value: &Value) -> Result<Self, SettingsError> {
        Self::from_value_at(value, "")
    }

    pub(crate) fn from_value_at(value: &Value, path: &str) -> Result<Self, SettingsError> {
        let map = expect_object(value, path)?;

        let field_type = match map.get("type") {
            Some(v) => FieldType::from(expect_str(v, &join(path, "type"))?.as_str()),
            None => return Err(missing(&join(path, "type"), "string")),
        };
        let name = match map.get("name") {
            Some(v) => expect_str(v, &join(path, "name"))?,
            None => return Err(missing(&join(path, "name"), "string")),
        };
        let mut field = Field::new(field_type, name);

        if let Some(v) = map.get("input_type") {
            field.input_type = Some(expect_str(v, &join(path, "input_type"))?);
        }
        if let Some(v) = map.get("id") {
            field.id = Some(expect_str(v, &join(path, "id"))?);
        }
        if let Some(v) = map.get("label") {
            field.label = Some(expect_str(v, &join(path, "label"))?);
        }
        if let Some(v) = map.get("required") {
            field.required = expect_bool(v, &join(path, "required"))?;
        }
        if let Some(v) = map.get("class") {
            field.css_class = Some(expect_str(v, &join(path, "class"))?);
        }
        field.tooltip.update_from_map(map, path)?;
        if let Some(v) = map.get("hidden") {
            field.hidden = expect_bool(v, &join(path, "hidden"))?;
        }
        if let Some(v) = map.get("default_value") {
            field.default_value = Some(expect_str(v, &join(path, "default_value"))?);
        }
        if let Some(v) = map.get("horizontal") {
            field.horizontal = expect_bool(v, &join(path, "horizontal"))?;
        }
        if let Some(v) = map.get("dependency") {
            field.dependency = Some(Box::new(Self::from_value_at(v, &join(path, "dependency"))?));
        }
        if let Some(v) = map.get("choices") {
            let list_path = join(path, "choices");
            for (i, item) in expect_array(v, &list_path)?.iter().enumerate() {
                field.add_choice(Choice::from_value_at(
                    item,
                    &join(&list_path, &i.to_string()),
                )?);
            }
        }
        for key in ["feedback_callback", "callback", "validation_callback"] {
            if let Some(v) = map.get(key) {
                let callback = CallbackRef::new(expect_str(v, &join(path, key))?);
                match key {
                    "feedback_callback" => field.feedback_callback = Some(callback),
                    "callback" => field.callback = Some(callback),
                    _ => field.validation_callback = Some(callback),
                }
            }
        }
        if let Some(v) = map.get("after_input") {
            field.after_input = Some(expect_str(v, &join(path, "after_input"))?);
        }
        if let Some(v) = map.get("field_map") {
            let list_path = join(path, "field_map");
            for (i, item) in expect_array(v, &list_path)?.iter().enumerate() {
                field.add_field_map(Self::from_value_at(
                    item,
                    &join(&list_path, &i.to_string()),
                )?);
            }
        }
        if let Some(v) = map.get("html_attributes") {
            let attrs_path = join(path, "html_attributes");
            for (name, attr) in expect_object(v, &attrs_path)? {
                let attr = expect_str(attr, &join(&attrs_path, name))?;
                field.html_attributes.insert(name.clone(), attr);
            }
        }

        for key in map.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                debug!("ignoring unknown field key `{}` at `{path}`", key);
            }
        }

        Ok(field)
    }
}

impl HasChoices for Field {
    fn choices(&self) -> &[Choice] {
        &self.choices
    }

    fn choices_mut(&mut self) -> &mut Vec<Choice> {
        &mut self.choices
    }
}

impl AsJson for Field {
    fn as_json(&self) -> Value {
        let mut attrs = AttrMap::new();
        attrs.text("type", self.field_type.as_str());
        attrs.opt_text("input_type", self.input_type.as_deref());
        attrs.text("name", &self.name);
        attrs.opt_text("id", self.id.as_deref());
        attrs.opt_text("label", self.label.as_deref());
        attrs.flag("required", self.required);
        attrs.opt_text("class", self.css_class.as_deref());
        self.tooltip.collect(&mut attrs);
        attrs.flag("hidden", self.hidden);
        attrs.opt_text("default_value", self.default_value.as_deref());
        attrs.flag("horizontal", self.horizontal);
        if let Some(dependency) = &self.dependency {
            attrs.entry("dependency", dependency.as_json());
        }
        attrs.items("choices", self.choices_as_json());
        attrs.opt_text(
            "feedback_callback",
            self.feedback_callback.as_ref().map(CallbackRef::name),
        );
        attrs.opt_text("callback", self.callback.as_ref().map(CallbackRef::name));
        attrs.opt_text(
            "validation_callback",
            self.validation_callback.as_ref().map(CallbackRef::name),
        );
        attrs.opt_text("after_input", self.after_input.as_deref());
        attrs.items(
            "field_map",
            self.field_map.iter().map(AsJson::as_json).collect(),
        );
        attrs.text_map("html_attributes", &self.html_attributes);
        attrs.into_value()
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_json().serialize(serializer)
    }
}
