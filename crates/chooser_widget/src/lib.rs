//! Chooser widget configuration resolution for dynamically built admin forms.
//!
//! This crate resolves and validates the configuration needed to attach a
//! generic "chooser" control (product, category, CMS page, or CMS block
//! selector) onto a form, and wires that control's rendering fragment into a
//! specific form field. The form framework itself, the chooser's selection
//! grid, and the emitted HTML/JS are external collaborators reached through
//! the traits in [`form`] and [`block`]; this crate only produces the inputs
//! those collaborators need.
//!
//! The resolution pipeline runs once per field, top to bottom:
//!
//! 1. [`HandleGuard`] — confirm the host layout opted into the chooser
//!    scripts via the `editor` handle.
//! 2. [`ensure_required_options`] — confirm the caller supplied the
//!    mandatory option keys.
//! 3. [`resolve_defaults`] — fill omitted options from the kind-scoped
//!    defaults table (caller values always win).
//! 4. [`project`] — derive the nested config schema the chooser block
//!    expects, create the block, and anchor it to a placeholder form field.
//!
//! [`ChooserHelper`] is the public entry point that composes the four steps.

pub mod block;
pub mod chooser;
pub mod chooser_kind;
pub mod defaults;
pub mod errors;
pub mod form;
pub mod handle_guard;
pub mod options;
pub mod schema;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export for convenient access
pub use block::{BlockFactory, ChooserBlock};
pub use chooser::ChooserHelper;
pub use chooser_kind::ChooserKind;
pub use defaults::{
    resolve_defaults, DefaultsProvider, DefaultsTable, InMemoryDefaults, TomlDefaults,
};
pub use errors::{ChooserError, ChooserResult};
pub use form::{build_anchor_field, AnchorField, DataModel, FieldInput, FormFieldset};
pub use handle_guard::{GuardState, HandleGuard, LayoutContext, REQUIRED_HANDLE};
pub use options::ChooserOptions;
pub use schema::{project, ButtonConfig, ChooserConfigSchema};
pub use validation::{ensure_required_options, REQUIRED_OPTION_KEYS};
