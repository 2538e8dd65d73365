//! Projection of resolved options into the chooser config schema.
//!
//! The chooser component takes a small nested payload describing its trigger
//! button. Projection is a pure function of exactly two resolved values: the
//! button label and the kind identity. Everything else in the option map is
//! ignored here.

use serde::{Deserialize, Serialize};

use crate::chooser_kind::ChooserKind;
use crate::options::ChooserOptions;

/// Trigger button section of the chooser config schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonConfig {
    /// Label of the button that opens the chooser grid.
    ///
    /// `None` when no `button_text` survived resolution; the rendered
    /// control then shows an unlabeled button rather than failing here.
    pub open: Option<String>,

    /// Block alias of the chooser component. Always exactly the resolved
    /// kind's identity string.
    #[serde(rename = "type")]
    pub block_type: String,
}

/// Nested configuration payload handed to the chooser component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChooserConfigSchema {
    pub button: ButtonConfig,
}

/// Projects resolved options into the chooser config schema.
///
/// # Examples
///
/// ```rust
/// use chooser_widget::{project, ChooserKind, ChooserOptions};
/// use serde_json::json;
///
/// let mut options = ChooserOptions::new();
/// options.insert("button_text", json!("Choose Product"));
/// options.insert("some_grid_option", json!("ignored here"));
///
/// let schema = project(&options, &ChooserKind::Product);
/// assert_eq!(schema.button.open.as_deref(), Some("Choose Product"));
/// assert_eq!(
///     schema.button.block_type,
///     "adminhtml/catalog_product_widget_chooser"
/// );
/// ```
pub fn project(options: &ChooserOptions, kind: &ChooserKind) -> ChooserConfigSchema {
    ChooserConfigSchema {
        button: ButtonConfig {
            open: options.button_text().map(str::to_owned),
            block_type: kind.block_alias().to_string(),
        },
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
