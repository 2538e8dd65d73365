//! Flat chooser option maps.
//!
//! Callers configure a chooser with a flat map from option name to value.
//! Only a handful of keys are recognized by the pipeline itself; everything
//! else passes through untouched so kind-specific options reach the default
//! fill and the chooser component unexamined.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the form input the chooser writes its selection to. Mandatory.
pub const INPUT_NAME: &str = "input_name";

/// Display label for the anchor field.
pub const INPUT_LABEL: &str = "input_label";

/// Marks the anchor field as required. Only the boolean `true` counts.
pub const REQUIRED: &str = "required";

/// Label of the button that opens the chooser grid.
pub const BUTTON_TEXT: &str = "button_text";

/// Flat option map supplied by the caller and filled from defaults.
///
/// Values are JSON values so string, boolean, and structured options travel
/// through the same map. Caller-supplied entries always survive default
/// resolution untouched.
///
/// # Examples
///
/// ```rust
/// use chooser_widget::ChooserOptions;
/// use serde_json::json;
///
/// let mut options = ChooserOptions::new();
/// options.insert("input_name", json!("sku"));
/// options.insert("input_label", json!("SKU"));
///
/// assert_eq!(options.input_name(), Some("sku"));
/// assert!(!options.required_flag());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ChooserOptions(Map<String, Value>);

impl ChooserOptions {
    /// Creates an empty option map.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Stores `value` under `key`, returning the previous value if one
    /// existed.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns the string value stored under `key`.
    ///
    /// Non-string values yield `None`; the recognized textual options are
    /// all plain strings.
    pub fn str_value(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The mandatory target input name, if supplied.
    pub fn input_name(&self) -> Option<&str> {
        self.str_value(INPUT_NAME)
    }

    /// The anchor field label, if supplied.
    pub fn input_label(&self) -> Option<&str> {
        self.str_value(INPUT_LABEL)
    }

    /// The chooser button label, if supplied or default-filled.
    pub fn button_text(&self) -> Option<&str> {
        self.str_value(BUTTON_TEXT)
    }

    /// Whether the anchor field is marked required.
    ///
    /// Only an exact boolean `true` counts; any other value or type is
    /// treated as false. No truthy coercion.
    pub fn required_flag(&self) -> bool {
        matches!(self.0.get(REQUIRED), Some(Value::Bool(true)))
    }
}

impl From<Map<String, Value>> for ChooserOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for ChooserOptions {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
