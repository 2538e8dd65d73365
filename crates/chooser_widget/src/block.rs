//! Chooser component traits.
//!
//! The chooser component (selection grid, trigger button, hidden input and
//! the JS gluing them together) is owned by the host framework. This crate
//! only needs to instantiate one by alias and hand it the projected config,
//! the fieldset identity, and the anchor element to render against.

use crate::form::AnchorField;
use crate::schema::ChooserConfigSchema;

/// One instantiated chooser component.
pub trait ChooserBlock {
    /// Attaches the projected config schema.
    fn set_config(&mut self, config: ChooserConfigSchema);

    /// Tells the component which fieldset its anchor lives in.
    fn set_fieldset_id(&mut self, fieldset_id: String);

    /// Renders the component's HTML fragment against the anchor element.
    fn prepare_element_html(&mut self, element: &AnchorField);
}

/// Factory instantiating chooser components by block alias.
///
/// `config` is the same projected schema later attached through
/// [`ChooserBlock::set_config`]; factories that construct eagerly can use
/// it at creation time.
pub trait BlockFactory: Send + Sync {
    fn create_block(&self, alias: &str, config: &ChooserConfigSchema) -> Box<dyn ChooserBlock>;
}
