//! Chooser configuration error types.
//!
//! Domain-specific errors for the chooser attachment pipeline. Both
//! pipeline errors signal developer-time integration mistakes (a missing
//! layout handle or a missing mandatory option key), not end-user input
//! problems, so they abort the current form-build pass and propagate to
//! whatever assembled the form.

use thiserror::Error;

/// Chooser configuration errors.
///
/// `MissingHandle` and `RequiredConfigMissing` are fatal to the form-build
/// pass that raised them: no chooser block and no anchor field are created
/// once either is returned. `DefaultsUnavailable` can only occur while
/// constructing a [`crate::ChooserHelper`] from a file-backed defaults
/// provider, never mid-pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChooserError {
    #[error("Required handle \"{handle}\" is missing. You have to add the handle in the layout in favor to have working chooser.")]
    MissingHandle { handle: String },

    #[error("Required input config value \"{key}\" is missing.")]
    RequiredConfigMissing { key: String },

    #[error("Failed to load chooser defaults from {path}: {reason}")]
    DefaultsUnavailable { path: String, reason: String },
}

/// Result type alias for chooser configuration operations.
pub type ChooserResult<T> = Result<T, ChooserError>;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
