//! Shared test doubles for the chooser pipeline.
//!
//! The collaborators the pipeline drives (layout context, block factory,
//! fieldset, data model) are all recording fakes here, so tests can assert
//! both on the returned values and on which side effects happened.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::block::{BlockFactory, ChooserBlock};
use crate::form::{AnchorField, DataModel, FieldInput, FormFieldset};
use crate::handle_guard::{LayoutContext, REQUIRED_HANDLE};
use crate::options::ChooserOptions;
use crate::schema::ChooserConfigSchema;

/// Layout context with a mutable handle list.
///
/// Handles sit behind a mutex so a test can change them between calls on a
/// helper that already holds the context.
pub struct TestLayout {
    handles: Mutex<Vec<String>>,
}

impl TestLayout {
    pub fn with_handles(handles: &[&str]) -> Self {
        Self {
            handles: Mutex::new(handles.iter().map(|h| h.to_string()).collect()),
        }
    }

    /// A context that satisfies the guard.
    pub fn with_editor() -> Self {
        Self::with_handles(&["default", REQUIRED_HANDLE])
    }

    /// A context missing the required handle.
    pub fn without_editor() -> Self {
        Self::with_handles(&["default"])
    }

    pub fn set_handles(&self, handles: &[&str]) {
        *self.handles.lock().unwrap() = handles.iter().map(|h| h.to_string()).collect();
    }
}

impl LayoutContext for TestLayout {
    fn handles(&self) -> Vec<String> {
        self.handles.lock().unwrap().clone()
    }
}

/// Everything a fake chooser block observed.
#[derive(Debug, Clone, Default)]
pub struct BlockRecord {
    pub alias: String,
    pub factory_config: Option<ChooserConfigSchema>,
    pub config: Option<ChooserConfigSchema>,
    pub fieldset_id: Option<String>,
    pub prepared_element: Option<AnchorField>,
}

struct RecordingBlock {
    record: Arc<Mutex<BlockRecord>>,
}

impl ChooserBlock for RecordingBlock {
    fn set_config(&mut self, config: ChooserConfigSchema) {
        self.record.lock().unwrap().config = Some(config);
    }

    fn set_fieldset_id(&mut self, fieldset_id: String) {
        self.record.lock().unwrap().fieldset_id = Some(fieldset_id);
    }

    fn prepare_element_html(&mut self, element: &AnchorField) {
        self.record.lock().unwrap().prepared_element = Some(element.clone());
    }
}

/// Factory handing out recording blocks and remembering every creation.
#[derive(Default)]
pub struct RecordingFactory {
    records: Mutex<Vec<Arc<Mutex<BlockRecord>>>>,
}

impl RecordingFactory {
    pub fn created_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Snapshot of the `index`-th created block's record.
    pub fn record(&self, index: usize) -> BlockRecord {
        self.records.lock().unwrap()[index].lock().unwrap().clone()
    }
}

impl BlockFactory for RecordingFactory {
    fn create_block(&self, alias: &str, config: &ChooserConfigSchema) -> Box<dyn ChooserBlock> {
        let record = Arc::new(Mutex::new(BlockRecord {
            alias: alias.to_string(),
            factory_config: Some(config.clone()),
            ..Default::default()
        }));
        self.records.lock().unwrap().push(Arc::clone(&record));
        Box::new(RecordingBlock { record })
    }
}

/// Fieldset remembering every `add_field` call.
pub struct TestFieldset {
    fieldset_id: String,
    pub added: Vec<(String, String, FieldInput)>,
}

impl TestFieldset {
    pub fn new(fieldset_id: &str) -> Self {
        Self {
            fieldset_id: fieldset_id.to_string(),
            added: Vec::new(),
        }
    }
}

impl FormFieldset for TestFieldset {
    fn id(&self) -> String {
        self.fieldset_id.clone()
    }

    fn add_field(&mut self, name: &str, field_type: &str, input: FieldInput) -> AnchorField {
        let element = AnchorField::new(name, input.label.clone(), input.required);
        self.added
            .push((name.to_string(), field_type.to_string(), input));
        element
    }
}

/// Data model backed by a plain map.
#[derive(Default)]
pub struct TestModel {
    data: HashMap<String, Value>,
}

impl TestModel {
    pub fn with_entry(key: &str, value: Value) -> Self {
        let mut model = Self::default();
        model.data.insert(key.to_string(), value);
        model
    }

    /// Direct view of the stored value, bypassing the trait.
    pub fn stored(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

impl DataModel for TestModel {
    fn get_data(&self, key: &str) -> Option<Value> {
        self.data.get(key).cloned()
    }

    fn set_data(&mut self, key: &str, value: Value) {
        self.data.insert(key.to_string(), value);
    }
}

/// Builds an option map from literal entries.
pub fn options_with(entries: &[(&str, Value)]) -> ChooserOptions {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}
