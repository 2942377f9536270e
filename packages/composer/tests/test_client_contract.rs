/// The client engine patches elements of the composed page by id and by
/// ordinal. These tests drive the engine through every operation and check
/// that each element it addresses exists in the rendered storefront.
use aroi_client::{CatalogIndex, ClientEngine, DomPatch, IndexedItem, Page, Target};
use aroi_components::{dom, Price, Render};
use aroi_composer::{category_pills, compose_app, Catalog, StorefrontConfig};

fn index_for(catalog: &Catalog, config: &StorefrontConfig) -> CatalogIndex {
    let items = catalog
        .items()
        .iter()
        .filter_map(|record| {
            let name = record.name.as_deref()?;
            Some(IndexedItem::new(name, record.category_or_default()))
        })
        .collect();
    let pills = category_pills(catalog, config)
        .iter()
        .map(|pill| match pill {
            aroi_components::Node::CategoryPill(pill) => pill.text.clone(),
            other => panic!("unexpected pill node {:?}", other),
        })
        .collect();
    CatalogIndex::new(items, pills)
}

#[test]
fn test_every_patched_element_exists() {
    let catalog = Catalog::default();
    let config = StorefrontConfig::default();
    let html = compose_app(&catalog, &config).render();
    let mut engine = ClientEngine::new(index_for(&catalog, &config));

    let mut patches = engine.recompute();
    patches.extend(engine.add_item("ผัดไทยกุ้งสด", Price::from_baht(95)));
    patches.extend(engine.change_quantity(0, 1));
    patches.extend(engine.remove_item(0));
    for page in Page::ALL {
        patches.extend(engine.navigate(page));
    }
    patches.extend(engine.toggle_mobile_menu());
    patches.extend(engine.navigate_from_menu(Page::Cart));
    patches.extend(engine.show_modal());
    patches.extend(engine.hide_modal());
    patches.extend(engine.filter_by_category("เครื่องดื่ม"));
    patches.extend(engine.search("ชา"));

    let pill_count = html.matches(dom::CATEGORY_PILL_CLASS).count();
    let item_count = html.matches(&format!("class=\"{}\"", dom::CATALOG_ITEM_CLASS)).count();

    for patch in &patches {
        match patch.target() {
            Some(Target::Id(id)) => {
                assert!(html.contains(&format!("id=\"{}\"", id)), "missing #{}", id)
            }
            Some(Target::CatalogItem(ordinal)) => assert!(ordinal < item_count),
            Some(Target::CategoryPill(ordinal)) => assert!(ordinal < pill_count),
            None => assert!(matches!(patch, DomPatch::Notify { .. })),
        }
    }
}

#[test]
fn test_drink_filter_matches_rendered_categories() {
    let catalog = Catalog::default();
    let config = StorefrontConfig::default();
    let mut engine = ClientEngine::new(index_for(&catalog, &config));

    let visible: Vec<bool> = engine
        .filter_by_category("เครื่องดื่ม")
        .into_iter()
        .filter_map(|patch| match patch {
            DomPatch::SetDisplayed { displayed, .. } => Some(displayed),
            _ => None,
        })
        .collect();

    assert_eq!(
        visible,
        vec![false, false, false, false, false, true, true, false]
    );
}
