use crate::{
    category_pills, compose_app, render_document, render_storefront, Catalog, CatalogRecord,
    MemorySession, SessionStore, ShellOptions, StorefrontConfig, CART_SESSION_KEY, CLIENT_GLOBALS,
};
use aroi_components::{dom, Child, Node, Price, Render, SHOW_ALL_CATEGORY};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_default_catalog() {
    let catalog = Catalog::default();
    assert_eq!(catalog.len(), 8);
    assert_eq!(
        catalog.categories(),
        vec!["อาหารไทย", "ฟาสต์ฟู้ด", "เครื่องดื่ม", "ของหวาน"]
    );
}

#[test]
fn test_catalog_from_json_accepts_numbers_and_strings() {
    let catalog = Catalog::from_json(
        r#"[
            { "name": "Pad Thai", "price": "95", "category": "Thai" },
            { "name": "Tea", "price": 45.5 },
            { "price": "10" }
        ]"#,
        "catalog.json",
    )
    .unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.items()[1].category_or_default(), "food");

    let cards = catalog.cards();
    assert!(matches!(cards[0], Node::CatalogItem(_)));
    assert!(cards[1].render().contains("฿45.50"));
    assert!(matches!(cards[2], Node::Fault(_)));
}

#[test]
fn test_bad_price_does_not_block_other_records() {
    let catalog = Catalog::from_json(
        r#"[
            { "name": "Pad Thai", "price": "95" },
            { "name": "Mystery", "price": "market price" },
            { "name": "Refund", "price": "-1" }
        ]"#,
        "catalog.json",
    )
    .unwrap();
    assert_eq!(catalog.len(), 3);

    let cards = catalog.cards();
    assert!(cards.iter().all(|card| matches!(card, Node::CatalogItem(_))));
    assert!(matches!(&cards[1], Node::CatalogItem(item) if item.price == Price::ZERO));
    assert!(matches!(&cards[2], Node::CatalogItem(item) if item.price == Price::ZERO));

    let html = compose_app(&catalog, &StorefrontConfig::default()).render();
    assert!(html.contains("฿95.00"));
    assert!(html.contains("Mystery"));
    assert!(html.contains("Refund"));
    assert!(!html.contains("render-error"));
}

#[test]
fn test_pills_follow_catalog_order() {
    let pills = category_pills(&Catalog::default(), &StorefrontConfig::default());
    assert_eq!(pills.len(), 5);

    let first = pills[0].render();
    assert!(first.contains(SHOW_ALL_CATEGORY));
    assert!(first.contains("bg-indigo-600"));
    assert!(pills[1..].iter().all(|pill| pill.render().contains("bg-white")));
}

#[test]
fn test_configured_categories_override_catalog() {
    let config = StorefrontConfig {
        categories: Some(vec!["ของหวาน".to_string(), SHOW_ALL_CATEGORY.to_string()]),
        ..Default::default()
    };
    let pills = category_pills(&Catalog::default(), &config);
    assert_eq!(pills.len(), 2);
    assert!(pills[1].render().contains("ของหวาน"));
}

#[test]
fn test_composition_is_deterministic() {
    let catalog = Catalog::default();
    let config = StorefrontConfig::default();
    assert_eq!(compose_app(&catalog, &config), compose_app(&catalog, &config));
}

#[test]
fn test_only_home_page_starts_visible() {
    let html = compose_app(&Catalog::default(), &StorefrontConfig::default()).render();

    assert!(html.contains(&format!("id=\"{}\" class=\"flex flex-col gap-6\"", dom::HOME_PAGE)));
    assert!(html.contains(&format!("id=\"{}\" class=\"hidden flex flex-col gap-6\"", dom::CART_PAGE)));
    assert!(html.contains(&format!(
        "id=\"{}\" class=\"hidden flex flex-col gap-6\"",
        dom::PROFILE_PAGE
    )));
}

#[test]
fn test_tree_contains_every_patched_element() {
    let html = compose_app(&Catalog::default(), &StorefrontConfig::default()).render();
    for id in [
        dom::CART_COUNT,
        dom::MOBILE_CART_COUNT,
        dom::CART_ITEMS,
        dom::CART_EMPTY,
        dom::CART_ITEMS_CONTAINER,
        dom::CART_TOTAL,
        dom::MOBILE_MENU,
        dom::QUICK_ORDER_MODAL,
        dom::SEARCH_INPUT,
        dom::TOAST,
    ] {
        assert_eq!(count(&html, &format!("id=\"{}\"", id)), 1, "id {}", id);
    }
    assert_eq!(count(&html, "class=\"food-item\""), 8);
}

#[test]
fn test_app_layout_order() {
    let Node::Column(root) = compose_app(&Catalog::default(), &StorefrontConfig::default()) else {
        panic!("expected a root column");
    };
    assert!(matches!(root.children[0], Child::Node(Node::AppBar(_))));
    assert!(matches!(root.children[1], Child::Node(Node::Column(_))));
    assert!(matches!(root.children[2], Child::Node(Node::Toast(_))));
}

#[test]
fn test_config_text_is_escaped() {
    let config = StorefrontConfig {
        title: "<b>Shop</b>".to_string(),
        checkout_message: "it's \"done\"".to_string(),
        ..Default::default()
    };
    let html = compose_app(&Catalog::new(vec![]), &config).render();
    assert!(!html.contains("<b>Shop</b>"));
    assert!(html.contains("&lt;b&gt;Shop&lt;/b&gt;"));
    assert!(html.contains("alert(&quot;it&#39;s \\&quot;done\\&quot;&quot;)"));
}

#[test]
fn test_document_shell() {
    let tree = compose_app(&Catalog::default(), &StorefrontConfig::default());
    let html = render_document(&tree, &ShellOptions::default());

    assert!(html.starts_with("<!DOCTYPE html><html lang=\"th\"><head>"));
    assert!(html.contains("<title>Food Delivery App</title>"));
    assert!(html.contains("<body class=\"min-h-screen\">"));
    assert!(html.contains("from \"./pkg/aroi_wasm.js\""));
    assert!(html.contains("boot();"));
    for global in CLIENT_GLOBALS {
        assert!(html.contains(global));
    }
    assert!(html.ends_with("</script></body></html>"));
}

#[test]
fn test_module_path_cannot_close_script() {
    let shell = ShellOptions {
        client_module: "./x</script><script>alert(1)".to_string(),
        ..Default::default()
    };
    let html = render_document(&Node::from(aroi_components::Text::new("hi")), &shell);
    assert_eq!(count(&html, "</script>"), 2);
}

#[test]
fn test_render_storefront_seeds_session() {
    let mut session = MemorySession::new();
    let html = render_storefront(
        &Catalog::default(),
        &StorefrontConfig::default(),
        &ShellOptions::default(),
        &mut session,
    );
    assert!(session.contains(CART_SESSION_KEY));
    assert!(html.contains("อร่อยเดลิเวอรี่"));
}

#[test]
fn test_record_without_name_keeps_page_rendering() {
    let catalog = Catalog::new(vec![
        CatalogRecord::default(),
        CatalogRecord::new("Tea", 45, "", "", "Drinks"),
    ]);
    let html = compose_app(&catalog, &StorefrontConfig::default()).render();
    assert!(html.contains("Error: CatalogItem name is required"));
    assert!(html.contains("Tea"));
}
