//! The root settings page.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::SettingsError;
use crate::format::{expect_array, join, AsJson};
use crate::settings::section::Section;

/// The root ordered collection of [`Section`]s.
///
/// Unlike every other entity, a page serializes to a JSON array (the
/// sequence of its sections' serialized forms), since that is the top-level
/// shape the settings API consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    sections: Vec<Section>,
}

impl Page {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section to the page.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Append a section, fluent form.
    pub fn with_section(mut self, section: Section) -> Self {
        self.add_section(section);
        self
    }

    /// Replace the whole section collection.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    /// Replace the whole section collection, fluent form.
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.set_sections(sections);
        self
    }

    /// The page's sections, in insertion order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Parse a page from an untyped JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::TypeMismatch`] when the payload is not an
    /// array of section objects or any nested attribute has the wrong JSON
    /// type.
    pub fn from_value(value: &Value) -> Result<Self, SettingsError> {
        let mut page = Page::new();
        for (i, item) in expect_array(value, "sections")?.iter().enumerate() {
            page.add_section(Section::from_value_at(
                item,
                &join("sections", &i.to_string()),
            )?);
        }
        trace!("parsed page with {} sections", page.sections.len());
        Ok(page)
    }
}

impl FromIterator<Section> for Page {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        Page {
            sections: iter.into_iter().collect(),
        }
    }
}

impl AsJson for Page {
    fn as_json(&self) -> Value {
        Value::Array(self.sections.iter().map(AsJson::as_json).collect())
    }
}

impl Serialize for Page {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_json().serialize(serializer)
    }
}
