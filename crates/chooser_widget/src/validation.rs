//! Required-option validation.
//!
//! The pipeline cannot function without the option keys listed here; a
//! caller omitting one has an integration bug, caught during development.
//! Validation fails fast on the first missing key rather than aggregating,
//! since one named key is all a developer needs to fix the call site.

use crate::errors::{ChooserError, ChooserResult};
use crate::options::{self, ChooserOptions};

/// Option keys every chooser attachment must supply.
///
/// Minimal by design: only the input name that backs the anchor field and
/// carries the selection through form submit is mandatory.
pub const REQUIRED_OPTION_KEYS: &[&str] = &[options::INPUT_NAME];

/// Checks that all mandatory option keys are present.
///
/// The mandatory keys all name form inputs, so each must carry a string
/// value; an explicit null or a non-string value counts as absent. This
/// runs before any collaborator is invoked, so a rejected option map
/// creates neither a chooser block nor a form field.
///
/// # Errors
///
/// Returns [`ChooserError::RequiredConfigMissing`] naming the first absent
/// key, in [`REQUIRED_OPTION_KEYS`] order.
pub fn ensure_required_options(options: &ChooserOptions) -> ChooserResult<()> {
    for key in REQUIRED_OPTION_KEYS {
        if options.str_value(key).is_none() {
            return Err(ChooserError::RequiredConfigMissing {
                key: (*key).to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
