//! Chooser kind identities.
//!
//! Each chooser variant is identified by a block alias: the name under which
//! the host form framework instantiates the chooser component. The alias
//! doubles as the dispatch key for the defaults table after its shared
//! namespace prefix is stripped.

use std::fmt;

/// Block alias for the product chooser component.
pub const PRODUCT_CHOOSER_BLOCK_ALIAS: &str = "adminhtml/catalog_product_widget_chooser";

/// Block alias for the category chooser component.
pub const CATEGORY_CHOOSER_BLOCK_ALIAS: &str = "adminhtml/catalog_category_widget_chooser";

/// Block alias for the CMS page chooser component.
pub const CMS_PAGE_CHOOSER_BLOCK_ALIAS: &str = "adminhtml/cms_page_widget_chooser";

/// Block alias for the CMS block chooser component.
pub const CMS_BLOCK_CHOOSER_BLOCK_ALIAS: &str = "adminhtml/cms_block_widget_chooser";

/// Namespace prefix shared by the built-in chooser aliases.
///
/// Stripped when deriving the defaults-table lookup key, so the table is
/// keyed by the distinguishing suffix only.
const ALIAS_NAMESPACE: &str = "adminhtml/";

/// Identity of the chooser variant being attached.
///
/// The four built-in variants cover the common selector controls; `Custom`
/// carries an arbitrary block alias for callers wiring their own chooser
/// component through the generic entry point.
///
/// # Examples
///
/// ```rust
/// use chooser_widget::ChooserKind;
///
/// let kind = ChooserKind::Product;
/// assert_eq!(kind.block_alias(), "adminhtml/catalog_product_widget_chooser");
/// assert_eq!(kind.defaults_key(), "catalog_product_widget_chooser");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChooserKind {
    Product,
    Category,
    CmsPage,
    CmsBlock,
    /// A caller-supplied chooser component, identified by its block alias.
    Custom(String),
}

impl ChooserKind {
    /// Returns the block alias identifying the chooser component.
    ///
    /// This is the exact string handed to the block factory and projected
    /// into the config schema's `button.type` field.
    pub fn block_alias(&self) -> &str {
        match self {
            Self::Product => PRODUCT_CHOOSER_BLOCK_ALIAS,
            Self::Category => CATEGORY_CHOOSER_BLOCK_ALIAS,
            Self::CmsPage => CMS_PAGE_CHOOSER_BLOCK_ALIAS,
            Self::CmsBlock => CMS_BLOCK_CHOOSER_BLOCK_ALIAS,
            Self::Custom(alias) => alias,
        }
    }

    /// Returns the defaults-table lookup key for this kind.
    ///
    /// The shared `adminhtml/` namespace prefix is stripped from the block
    /// alias; an alias without the prefix is used as-is.
    pub fn defaults_key(&self) -> &str {
        let alias = self.block_alias();
        alias.strip_prefix(ALIAS_NAMESPACE).unwrap_or(alias)
    }

    /// Maps a block alias back to a chooser kind.
    ///
    /// The four built-in aliases resolve to their variants; any other alias
    /// becomes [`ChooserKind::Custom`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chooser_widget::ChooserKind;
    ///
    /// assert_eq!(
    ///     ChooserKind::from_alias("adminhtml/cms_page_widget_chooser"),
    ///     ChooserKind::CmsPage
    /// );
    /// assert_eq!(
    ///     ChooserKind::from_alias("mymodule/banner_chooser"),
    ///     ChooserKind::Custom("mymodule/banner_chooser".to_string())
    /// );
    /// ```
    pub fn from_alias(alias: &str) -> Self {
        match alias {
            PRODUCT_CHOOSER_BLOCK_ALIAS => Self::Product,
            CATEGORY_CHOOSER_BLOCK_ALIAS => Self::Category,
            CMS_PAGE_CHOOSER_BLOCK_ALIAS => Self::CmsPage,
            CMS_BLOCK_CHOOSER_BLOCK_ALIAS => Self::CmsBlock,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for ChooserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.block_alias())
    }
}

#[cfg(test)]
#[path = "chooser_kind_tests.rs"]
mod tests;
