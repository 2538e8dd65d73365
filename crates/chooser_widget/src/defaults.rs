//! Kind-scoped chooser defaults: table, providers, and the resolution step.
//!
//! The defaults table holds one option row per chooser kind (keyed by the
//! kind's normalized lookup key) plus an optional `"default"` fallback row.
//! It is loaded once per [`crate::ChooserHelper`] from an injected
//! [`DefaultsProvider`] and treated as read-only afterwards, so tests can
//! substitute a fixed in-memory table for the file-backed store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::chooser_kind::ChooserKind;
use crate::errors::{ChooserError, ChooserResult};
use crate::options::ChooserOptions;

/// Lookup key of the fallback defaults row.
pub const FALLBACK_KEY: &str = "default";

/// Defaults rows keyed by normalized chooser kind (or [`FALLBACK_KEY`]).
pub type DefaultsTable = HashMap<String, ChooserOptions>;

/// Read-only source of the chooser defaults table.
///
/// Resolved exactly once, at helper construction. Implementations must not
/// require the pipeline to re-read process-wide state on every attachment.
pub trait DefaultsProvider: Send + Sync {
    /// Loads the defaults table.
    ///
    /// # Errors
    ///
    /// Returns [`ChooserError::DefaultsUnavailable`] when the backing store
    /// cannot be read or parsed.
    fn load_defaults(&self) -> ChooserResult<DefaultsTable>;
}

/// Fixed in-memory defaults, for tests and embedders that assemble the
/// table themselves.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDefaults {
    table: DefaultsTable,
}

impl InMemoryDefaults {
    pub fn new(table: DefaultsTable) -> Self {
        Self { table }
    }

    /// A provider with no rows at all, not even a fallback row.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl DefaultsProvider for InMemoryDefaults {
    fn load_defaults(&self) -> ChooserResult<DefaultsTable> {
        Ok(self.table.clone())
    }
}

/// Shape of a settings file carrying the defaults table.
#[derive(Debug, Deserialize)]
struct DefaultsFile {
    #[serde(default)]
    chooser_defaults: DefaultsTable,
}

/// Defaults read from a TOML settings file.
///
/// The table lives under the fixed `[chooser_defaults.<kind-key>]` key:
///
/// ```toml
/// [chooser_defaults.default]
/// button_text = "Choose..."
///
/// [chooser_defaults.catalog_product_widget_chooser]
/// button_text = "Choose Product..."
/// input_label = "Product"
/// ```
///
/// A file without a `chooser_defaults` table yields an empty table, which
/// the resolution step treats the same as a table with no matching row.
#[derive(Debug, Clone)]
pub struct TomlDefaults {
    path: PathBuf,
}

impl TomlDefaults {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DefaultsProvider for TomlDefaults {
    fn load_defaults(&self) -> ChooserResult<DefaultsTable> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| ChooserError::DefaultsUnavailable {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        let file: DefaultsFile =
            toml::from_str(&content).map_err(|e| ChooserError::DefaultsUnavailable {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!(
            path = %self.path.display(),
            rows = file.chooser_defaults.len(),
            "loaded chooser defaults"
        );
        Ok(file.chooser_defaults)
    }
}

/// Fills options the caller omitted from the kind's defaults row.
///
/// Selects the row keyed by `kind.defaults_key()`, falling back to the
/// [`FALLBACK_KEY`] row when the kind has none. Strictly additive: a key
/// already present in `options` is never replaced. When neither row exists
/// the options pass through unchanged; missing optional values are
/// recoverable by the caller supplying everything explicitly, so this is
/// not an error.
///
/// # Examples
///
/// ```rust
/// use chooser_widget::{resolve_defaults, ChooserKind, ChooserOptions, DefaultsTable};
/// use serde_json::json;
///
/// let mut table = DefaultsTable::new();
/// let mut row = ChooserOptions::new();
/// row.insert("button_text", json!("Choose Product..."));
/// table.insert("catalog_product_widget_chooser".to_string(), row);
///
/// let mut options = ChooserOptions::new();
/// options.insert("input_name", json!("sku"));
/// resolve_defaults(&mut options, &ChooserKind::Product, &table);
///
/// assert_eq!(options.button_text(), Some("Choose Product..."));
/// ```
pub fn resolve_defaults(options: &mut ChooserOptions, kind: &ChooserKind, table: &DefaultsTable) {
    let key = kind.defaults_key();
    let row = match table.get(key).or_else(|| table.get(FALLBACK_KEY)) {
        Some(row) => row,
        None => {
            debug!(kind = %kind, "no defaults row and no fallback row, options left unfilled");
            return;
        }
    };

    for (option, value) in row.iter() {
        if !options.contains_key(option) {
            debug!(kind = %kind, option = %option, "filling option from defaults");
            options.insert(option.clone(), value.clone());
        }
    }
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;
