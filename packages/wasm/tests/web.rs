//! Browser tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use aroi_components::dom;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<span id="cart-count">0</span>
<span id="mobile-cart-count">0</span>
<div id="cart-empty">empty</div>
<div id="cart-items-container" class="hidden"><ul id="cart-items"></ul></div>
<span id="cart-total">฿0.00</span>
<div id="toast" class="hidden"></div>
<div class="food-item" data-name="Pad Thai" data-category="Thai"></div>
<div class="food-item" data-name="Thai Tea" data-category="Drinks"></div>
<button class="category-button" data-category="ทั้งหมด">ทั้งหมด</button>
<button class="category-button" data-category="Drinks">Drinks</button>
"#;

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn text(id: &str) -> String {
    document()
        .get_element_by_id(id)
        .and_then(|e| e.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn add_to_cart_updates_badges_and_total() {
    document().body().unwrap().set_inner_html(PAGE);
    aroi_wasm::boot().unwrap();

    aroi_wasm::add_to_cart("Pad Thai", "95.00").unwrap();
    aroi_wasm::add_to_cart("Pad Thai", "95.00").unwrap();

    assert_eq!(text(dom::CART_COUNT), "2");
    assert_eq!(text(dom::MOBILE_CART_COUNT), "2");
    assert_eq!(text(dom::CART_TOTAL), "฿190.00");
    assert!(text(dom::TOAST).contains("Pad Thai"));

    aroi_wasm::remove_from_cart(0).unwrap();
    assert_eq!(text(dom::CART_COUNT), "0");
    aroi_wasm::remove_from_cart(7).unwrap();
}

#[wasm_bindgen_test]
fn invalid_input_is_ignored() {
    document().body().unwrap().set_inner_html(PAGE);
    aroi_wasm::boot().unwrap();

    aroi_wasm::add_to_cart("Pad Thai", "free").unwrap();
    aroi_wasm::show_page("checkout").unwrap();
    assert_eq!(text(dom::CART_COUNT), "0");
}
