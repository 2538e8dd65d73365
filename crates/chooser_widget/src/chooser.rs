//! Chooser attachment orchestration.
//!
//! [`ChooserHelper`] composes the whole pipeline for one form-build pass:
//! guard the layout handle, validate the caller's options, fill defaults,
//! project the config schema, then create the chooser component and its
//! anchor field and wire the two together. One entry point exists per
//! built-in chooser kind plus a generic one taking an explicit kind.
//!
//! Failures abort before anything is attached: when the guard or the
//! validator rejects, no chooser component and no anchor field are created.

use std::sync::Arc;

use tracing::debug;

use crate::block::BlockFactory;
use crate::chooser_kind::ChooserKind;
use crate::defaults::{resolve_defaults, DefaultsProvider, DefaultsTable};
use crate::errors::ChooserResult;
use crate::form::{build_anchor_field, AnchorField, DataModel, FormFieldset};
use crate::handle_guard::{HandleGuard, LayoutContext};
use crate::options::ChooserOptions;
use crate::schema::project;
use crate::validation::ensure_required_options;

/// Attaches chooser controls to fields of a dynamically built form.
///
/// Holds the injected collaborators and the per-instance guard memo. The
/// defaults table is loaded once at construction and never re-read. One
/// helper is scoped to one form build; the entry points return the helper
/// itself so attachments chain:
///
/// ```rust,ignore
/// let mut helper = ChooserHelper::new(layout, factory, &defaults_provider)?;
/// helper
///     .create_product_chooser(&mut model, &mut fieldset, product_options)?
///     .create_category_chooser(&mut model, &mut fieldset, category_options)?;
/// ```
///
/// The anchor field of the most recent attachment is available through
/// [`ChooserHelper::anchor_field`].
pub struct ChooserHelper {
    layout: Arc<dyn LayoutContext>,
    factory: Arc<dyn BlockFactory>,
    defaults: DefaultsTable,
    guard: HandleGuard,
    last_anchor: Option<AnchorField>,
}

impl ChooserHelper {
    /// Creates a helper, loading the defaults table from `defaults_provider`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChooserError::DefaultsUnavailable`] when the
    /// provider's backing store cannot be read.
    pub fn new(
        layout: Arc<dyn LayoutContext>,
        factory: Arc<dyn BlockFactory>,
        defaults_provider: &dyn DefaultsProvider,
    ) -> ChooserResult<Self> {
        let defaults = defaults_provider.load_defaults()?;
        Ok(Self {
            layout,
            factory,
            defaults,
            guard: HandleGuard::new(),
            last_anchor: None,
        })
    }

    /// Attaches a product chooser to `fieldset`.
    pub fn create_product_chooser(
        &mut self,
        model: &mut dyn DataModel,
        fieldset: &mut dyn FormFieldset,
        options: ChooserOptions,
    ) -> ChooserResult<&mut Self> {
        self.prepare_chooser(model, fieldset, options, ChooserKind::Product)?;
        Ok(self)
    }

    /// Attaches a category chooser to `fieldset`.
    pub fn create_category_chooser(
        &mut self,
        model: &mut dyn DataModel,
        fieldset: &mut dyn FormFieldset,
        options: ChooserOptions,
    ) -> ChooserResult<&mut Self> {
        self.prepare_chooser(model, fieldset, options, ChooserKind::Category)?;
        Ok(self)
    }

    /// Attaches a CMS page chooser to `fieldset`.
    pub fn create_cms_page_chooser(
        &mut self,
        model: &mut dyn DataModel,
        fieldset: &mut dyn FormFieldset,
        options: ChooserOptions,
    ) -> ChooserResult<&mut Self> {
        self.prepare_chooser(model, fieldset, options, ChooserKind::CmsPage)?;
        Ok(self)
    }

    /// Attaches a CMS block chooser to `fieldset`.
    pub fn create_cms_block_chooser(
        &mut self,
        model: &mut dyn DataModel,
        fieldset: &mut dyn FormFieldset,
        options: ChooserOptions,
    ) -> ChooserResult<&mut Self> {
        self.prepare_chooser(model, fieldset, options, ChooserKind::CmsBlock)?;
        Ok(self)
    }

    /// Attaches a chooser of an explicit kind, including custom aliases.
    pub fn create_chooser(
        &mut self,
        model: &mut dyn DataModel,
        fieldset: &mut dyn FormFieldset,
        options: ChooserOptions,
        kind: ChooserKind,
    ) -> ChooserResult<&mut Self> {
        self.prepare_chooser(model, fieldset, options, kind)?;
        Ok(self)
    }

    /// Anchor field of the most recent successful attachment.
    pub fn anchor_field(&self) -> Option<&AnchorField> {
        self.last_anchor.as_ref()
    }

    /// Runs the attachment pipeline for one field.
    ///
    /// Order matters: guard and validation run before any collaborator is
    /// asked to create something, so a rejected call leaves the form
    /// untouched.
    fn prepare_chooser(
        &mut self,
        model: &mut dyn DataModel,
        fieldset: &mut dyn FormFieldset,
        mut options: ChooserOptions,
        kind: ChooserKind,
    ) -> ChooserResult<()> {
        debug!(kind = %kind, "attaching chooser");

        self.guard.ensure(self.layout.as_ref())?;
        ensure_required_options(&options)?;
        resolve_defaults(&mut options, &kind, &self.defaults);

        let schema = project(&options, &kind);
        let mut block = self.factory.create_block(kind.block_alias(), &schema);
        let element = build_anchor_field(model, fieldset, &options)?;

        block.set_config(schema);
        block.set_fieldset_id(fieldset.id());
        block.prepare_element_html(&element);

        self.last_anchor = Some(element);
        Ok(())
    }
}

#[cfg(test)]
#[path = "chooser_tests.rs"]
mod tests;
