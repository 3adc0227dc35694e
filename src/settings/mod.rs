//! Builder objects for the settings-page tree.
//!
//! The tree is assembled root-down: a [`Page`] holds ordered [`Section`]s,
//! each section holds [`Field`]s, and choice-based fields hold [`Choice`]s
//! (which may nest further choices as option groups). Every entity is a
//! mutable builder with fluent `with_*` setters and serializes on demand via
//! [`crate::AsJson`].
//!
//! ## Modules
//!
//! - [`choice`] - Selectable options and the shared [`HasChoices`] capability
//! - [`field`] - Field descriptors, the field type enumeration, callback references
//! - [`section`] - Titled field groups
//! - [`page`] - The root page
//! - [`tooltip`] - Shared tooltip state

/// Selectable options and the shared choice-ownership capability.
pub mod choice;

/// Field descriptors and the field type enumeration.
pub mod field;

/// The root settings page.
pub mod page;

/// Titled groups of fields.
pub mod section;

/// Shared tooltip state.
pub mod tooltip;

pub use choice::{Choice, HasChoices};
pub use field::{CallbackRef, Field, FieldType};
pub use page::Page;
pub use section::Section;
pub use tooltip::Tooltip;
