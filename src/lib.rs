//! # formpage
//!
//! Builder objects for form-plugin settings pages.
//!
//! `formpage` assembles a hierarchical settings-page description
//! (Page → Section → Field → Choice) through fluent builders, then flattens
//! the tree into the plain nested JSON structure a form-plugin settings API
//! consumes.
//!
//! ## Features
//!
//! - Fluent `with_*` builders for pages, sections, fields, and choices
//! - Serialization to `serde_json::Value` with the settings API's
//!   omit-when-unset convention applied per attribute
//! - Parsing of untyped JSON payloads back into typed entities, with
//!   path-annotated type-mismatch errors
//! - Opaque pass-through of callback references and dependency rules
//!
//! ## Quick Start
//!
//! ```rust
//! use formpage::{AsJson, Choice, Field, FieldType, Page, Section};
//!
//! let page = Page::new().with_section(
//!     Section::new()
//!         .with_title("General")
//!         .with_field(Field::new(FieldType::Text, "api_key").with_label("API Key"))
//!         .with_field(
//!             Field::new(FieldType::Select, "mode")
//!                 .with_label("Mode")
//!                 .with_choices(vec![
//!                     Choice::new("Live").with_value("live"),
//!                     Choice::new("Sandbox").with_value("sandbox"),
//!                 ]),
//!         ),
//! );
//!
//! let value = page.as_json();
//! assert!(value.is_array());
//! ```
//!
//! ## Modules
//!
//! - [`settings`] - The Page/Section/Field/Choice object model
//! - [`format`] - The [`AsJson`] serialization contract
//! - [`error`] - Error types

#[macro_use]
extern crate log;

/// Error types.
pub mod error;

/// JSON serialization contract and attribute filtering.
pub mod format;

/// The settings-page object model.
pub mod settings;

pub use error::SettingsError;
pub use format::AsJson;
pub use settings::{CallbackRef, Choice, Field, FieldType, HasChoices, Page, Section, Tooltip};
pub use serde_json::Value;
