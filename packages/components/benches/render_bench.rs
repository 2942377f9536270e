use aroi_components::{CatalogItem, CategoryPill, Column, Node, Price, Render, Text};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn menu_grid(items: usize) -> Node {
    let pills = ["ทั้งหมด", "อาหารไทย", "ฟาสต์ฟู้ด", "เครื่องดื่ม"]
        .iter()
        .enumerate()
        .map(|(i, label)| CategoryPill::new(*label).active(i == 0));

    let cards = (0..items).map(|i| {
        CatalogItem::new(format!("เมนู {}", i))
            .with_price(Price::from_baht(50 + i as u64))
            .with_category(if i % 2 == 0 { "อาหารไทย" } else { "เครื่องดื่ม" })
    });

    Column::new()
        .with_id("home-page")
        .with_child(Text::new("เมนูยอดนิยม"))
        .with_child(Column::new().with_children(pills))
        .with_child(Column::new().with_class("grid-food-items").with_children(cards))
        .into()
}

fn render_small_menu(c: &mut Criterion) {
    let tree = menu_grid(8);
    c.bench_function("render_small_menu", |b| b.iter(|| black_box(&tree).render()));
}

fn render_large_menu(c: &mut Criterion) {
    let tree = menu_grid(500);
    c.bench_function("render_large_menu", |b| b.iter(|| black_box(&tree).render()));
}

criterion_group!(benches, render_small_menu, render_large_menu);
criterion_main!(benches);
