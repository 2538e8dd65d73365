//! Precondition guard for the required layout handle.
//!
//! The chooser component depends on scripts and markup that the host page
//! only carries when its layout update includes the `editor` handle. A page
//! without it is a layout misconfiguration by the integrating developer, so
//! the guard fails loudly instead of degrading. The check runs once per
//! helper instance; a satisfied guard is memoized for the instance lifetime.

use tracing::debug;

use crate::errors::{ChooserError, ChooserResult};

/// Layout handle the chooser scripts are loaded under.
pub const REQUIRED_HANDLE: &str = "editor";

/// Access to the active rendering context of the current page build.
pub trait LayoutContext: Send + Sync {
    /// The layout handles active for the current page.
    fn handles(&self) -> Vec<String>;
}

/// Memoization state of a [`HandleGuard`].
///
/// Write-once: `Unchecked` until the handle has been observed, `Satisfied`
/// forever after. A failed check leaves the state `Unchecked` so a layout
/// corrected between calls can still satisfy the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Unchecked,
    Satisfied,
}

/// One-shot check that the required layout handle is present.
#[derive(Debug, Default)]
pub struct HandleGuard {
    state: GuardState,
}

impl HandleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current memoization state, mainly useful in tests.
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Ensures the required handle is active in `layout`.
    ///
    /// The first successful call memoizes the result; later calls return
    /// without consulting the layout again.
    ///
    /// # Errors
    ///
    /// Returns [`ChooserError::MissingHandle`] naming [`REQUIRED_HANDLE`]
    /// when the handle is absent.
    pub fn ensure(&mut self, layout: &dyn LayoutContext) -> ChooserResult<()> {
        if self.state == GuardState::Satisfied {
            return Ok(());
        }

        if layout.handles().iter().any(|h| h == REQUIRED_HANDLE) {
            debug!(handle = REQUIRED_HANDLE, "required layout handle present");
            self.state = GuardState::Satisfied;
            Ok(())
        } else {
            Err(ChooserError::MissingHandle {
                handle: REQUIRED_HANDLE.to_string(),
            })
        }
    }
}

#[cfg(test)]
#[path = "handle_guard_tests.rs"]
mod tests;
