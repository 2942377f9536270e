/// Determinism tests - rendering the same tree must always produce the same
/// markup, whether the tree was built in code or from JSON.
use aroi_components::{CatalogItem, Column, Node, Price, Render, Text};
use serde_json::json;

#[test]
fn test_render_determinism_typed_tree() {
    let tree: Node = Column::new()
        .with_id("home-page")
        .with_child(Text::new("เมนูยอดนิยม"))
        .with_child(CatalogItem::new("ผัดไทยกุ้งสด").with_price(Price::from_baht(95)))
        .with_child(CatalogItem::new("ชาไทยเย็น").with_price(Price::from_baht(45)))
        .into();

    let results: Vec<String> = (0..10).map(|_| tree.render()).collect();
    for i in 1..results.len() {
        assert_eq!(results[0], results[i], "Render {} differs from render 0", i);
    }
}

#[test]
fn test_render_determinism_json_tree() {
    let source = json!({
        "kind": "column",
        "props": { "class": "grid-food-items", "unused": true },
        "children": [
            { "kind": "catalog-item", "props": { "name": "A", "price": 10, "category": "x" } },
            { "kind": "catalog-item", "props": { "price": 10 } },
            "<p>raw</p>",
            7
        ]
    });

    let results: Vec<String> = (0..10)
        .map(|_| Node::from_value(&source).render())
        .collect();
    for i in 1..results.len() {
        assert_eq!(results[0], results[i], "Render {} differs from render 0", i);
    }
}

#[test]
fn test_json_and_typed_trees_render_identically() {
    let typed: Node = Column::new()
        .with_class("stack")
        .with_child(Text::new("Hello").with_class("title"))
        .with_child(CatalogItem::new("Pad Thai").with_price(Price::from_baht(95)))
        .into();

    let untyped = Node::from_value(&json!({
        "kind": "column",
        "props": { "class": "stack" },
        "children": [
            { "kind": "text", "props": { "text": "Hello", "class": "title" } },
            { "kind": "catalog-item", "props": { "name": "Pad Thai", "price": "95" } }
        ]
    }));

    assert_eq!(typed, untyped);
    assert_eq!(typed.render(), untyped.render());
}
