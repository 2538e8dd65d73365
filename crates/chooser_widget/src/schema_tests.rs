//! Tests for config schema projection.

use super::*;
use serde_json::json;

fn options_from(entries: &[(&str, serde_json::Value)]) -> ChooserOptions {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// Verify projection reads exactly button_text and the kind identity.
#[test]
fn test_projects_button_text_and_kind_identity() {
    let options = options_from(&[("button_text", json!("Choose Product"))]);
    let schema = project(&options, &ChooserKind::Product);

    assert_eq!(
        schema,
        ChooserConfigSchema {
            button: ButtonConfig {
                open: Some("Choose Product".to_string()),
                block_type: "adminhtml/catalog_product_widget_chooser".to_string(),
            }
        }
    );
}

/// Verify unrelated options cannot change the projection.
#[test]
fn test_unrelated_options_do_not_affect_projection() {
    let minimal = options_from(&[("button_text", json!("Choose"))]);
    let noisy = options_from(&[
        ("button_text", json!("Choose")),
        ("input_name", json!("sku")),
        ("input_label", json!("SKU")),
        ("required", json!(true)),
        ("grid_url", json!("/admin/chooser/grid")),
    ]);

    assert_eq!(
        project(&minimal, &ChooserKind::Category),
        project(&noisy, &ChooserKind::Category)
    );
}

/// Verify a missing button_text yields an unlabeled open entry, not an error.
#[test]
fn test_missing_button_text_projects_none() {
    let options = ChooserOptions::new();
    let schema = project(&options, &ChooserKind::CmsBlock);

    assert_eq!(schema.button.open, None);
    assert_eq!(
        schema.button.block_type,
        "adminhtml/cms_block_widget_chooser"
    );
}

/// Verify custom kinds project their caller-supplied alias.
#[test]
fn test_custom_kind_projects_custom_alias() {
    let options = options_from(&[("button_text", json!("Pick a banner"))]);
    let kind = ChooserKind::Custom("mymodule/banner_chooser".to_string());

    let schema = project(&options, &kind);
    assert_eq!(schema.button.block_type, "mymodule/banner_chooser");
}

/// Verify the serialized payload uses the `type` key the chooser expects.
#[test]
fn test_serializes_with_type_key() {
    let options = options_from(&[("button_text", json!("Choose"))]);
    let schema = project(&options, &ChooserKind::CmsPage);

    let value = serde_json::to_value(&schema).unwrap();
    assert_eq!(
        value,
        json!({
            "button": {
                "open": "Choose",
                "type": "adminhtml/cms_page_widget_chooser",
            }
        })
    );
}
