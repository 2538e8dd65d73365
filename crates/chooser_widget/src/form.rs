//! Form collaborator traits and the anchor field.
//!
//! The surrounding form framework owns the fieldset and the data model;
//! this crate only drives them through the narrow traits below. The anchor
//! field is the one artifact this crate contributes to the form: a
//! read-only label element whose sole purpose is to give the chooser
//! component a position to render its button and hidden input against.

use serde::Serialize;
use serde_json::Value;

use crate::errors::{ChooserError, ChooserResult};
use crate::options::{self, ChooserOptions};

/// Field type the anchor is created with.
pub const ANCHOR_FIELD_TYPE: &str = "label";

/// Mutable record the form is built against.
pub trait DataModel {
    /// Current value stored under `key`, if any.
    fn get_data(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`.
    fn set_data(&mut self, key: &str, value: Value);
}

/// Input config payload handed to the fieldset when creating a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInput {
    pub name: String,
    pub label: Option<String>,
    pub required: bool,
}

/// Container of form fields for one section of the form.
pub trait FormFieldset {
    /// Identity of the fieldset, forwarded to the chooser component.
    fn id(&self) -> String;

    /// Creates a field of `field_type` keyed by `name` and returns its
    /// element handle. The fieldset owns the rendered field; the returned
    /// handle carries its display state.
    fn add_field(&mut self, name: &str, field_type: &str, input: FieldInput) -> AnchorField;
}

/// Read-only placeholder field the chooser renders against.
///
/// Created fresh on every attachment. Its displayed value is seeded from
/// the data model and exists purely for display: the real selection value
/// round-trips through the chooser's own hidden input.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorField {
    id: String,
    name: String,
    label: Option<String>,
    required: bool,
    value: Option<Value>,
}

impl AnchorField {
    /// Creates an unattached anchor element. The element id equals the
    /// field name.
    pub fn new(name: impl Into<String>, label: Option<String>, required: bool) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            label,
            required,
            value: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn required(&self) -> bool {
        self.required
    }

    /// The displayed value, if one was seeded.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: Option<Value>) {
        self.value = value;
    }
}

/// Creates the anchor field for one chooser attachment.
///
/// Adds a read-only [`ANCHOR_FIELD_TYPE`] field keyed by the `input_name`
/// option, seeds its displayed value from the data model's current value at
/// that key, then clears the model's stored value there. Clearing matters:
/// the anchor is display-only, and persistence after form submit must rely
/// solely on the chooser's paired hidden input.
///
/// The `required` option counts only as an exact boolean `true`; the
/// `input_label` option is optional.
///
/// # Errors
///
/// Returns [`ChooserError::RequiredConfigMissing`] when `input_name` is
/// absent. In the orchestrated pipeline validation has already ruled this
/// out.
pub fn build_anchor_field(
    model: &mut dyn DataModel,
    fieldset: &mut dyn FormFieldset,
    options: &ChooserOptions,
) -> ChooserResult<AnchorField> {
    let name = options
        .input_name()
        .ok_or_else(|| ChooserError::RequiredConfigMissing {
            key: options::INPUT_NAME.to_string(),
        })?;

    let input = FieldInput {
        name: name.to_string(),
        label: options.input_label().map(str::to_owned),
        required: options.required_flag(),
    };

    let mut element = fieldset.add_field(name, ANCHOR_FIELD_TYPE, input);
    let current = model.get_data(element.id());
    element.set_value(current);
    model.set_data(element.id(), Value::String(String::new()));

    Ok(element)
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
