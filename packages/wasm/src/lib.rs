//! Browser binding for the storefront client.
//!
//! The rendered page calls these exports from inline handlers
//! (`window.addToCart(...)` and friends). Each call runs one engine
//! operation and applies the resulting patches to the live document.

mod apply;

use aroi_client::{ClientEngine, ClientError, DomPatch, Page};
use aroi_components::Price;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static ENGINE: RefCell<Option<ClientEngine>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Runs `operation` against the engine, building it from the page first if
/// `boot` has not run yet, then applies the patches.
fn dispatch(operation: impl FnOnce(&mut ClientEngine) -> Vec<DomPatch>) -> Result<(), JsValue> {
    let document = apply::document()?;
    let patches = ENGINE.with(|cell| {
        let mut slot = cell.borrow_mut();
        let engine = slot.get_or_insert_with(|| ClientEngine::new(apply::scan_catalog(&document)));
        operation(engine)
    });
    apply::apply(&patches)
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// Indexes the rendered catalog and syncs the cart regions.
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    let document = apply::document()?;
    let engine = ClientEngine::new(apply::scan_catalog(&document));
    let patches = engine.recompute();
    ENGINE.with(|cell| *cell.borrow_mut() = Some(engine));
    apply::apply(&patches)
}

#[wasm_bindgen(js_name = addToCart)]
pub fn add_to_cart(name: &str, price: &str) -> Result<(), JsValue> {
    match price.parse::<Price>() {
        Ok(price) => dispatch(|engine| engine.add_item(name, price)),
        Err(e) => {
            warn(&format!("addToCart({:?}): {}", name, ClientError::from(e)));
            Ok(())
        }
    }
}

#[wasm_bindgen(js_name = removeFromCart)]
pub fn remove_from_cart(index: i32) -> Result<(), JsValue> {
    match usize::try_from(index) {
        Ok(index) => dispatch(|engine| engine.remove_item(index)),
        Err(_) => Ok(()),
    }
}

#[wasm_bindgen(js_name = updateCartQuantity)]
pub fn update_cart_quantity(index: i32, delta: i32) -> Result<(), JsValue> {
    match usize::try_from(index) {
        Ok(index) => dispatch(|engine| engine.change_quantity(index, i64::from(delta))),
        Err(_) => Ok(()),
    }
}

#[wasm_bindgen(js_name = showPage)]
pub fn show_page(page: &str) -> Result<(), JsValue> {
    match page.parse::<Page>() {
        Ok(page) => dispatch(|engine| engine.navigate(page)),
        Err(e) => {
            warn(&e.to_string());
            Ok(())
        }
    }
}

#[wasm_bindgen(js_name = showMobilePage)]
pub fn show_mobile_page(page: &str) -> Result<(), JsValue> {
    match page.parse::<Page>() {
        Ok(page) => dispatch(|engine| engine.navigate_from_menu(page)),
        Err(e) => {
            warn(&e.to_string());
            Ok(())
        }
    }
}

#[wasm_bindgen(js_name = filterByCategory)]
pub fn filter_by_category(category: &str) -> Result<(), JsValue> {
    dispatch(|engine| engine.filter_by_category(category))
}

/// Filters the catalog by the current value of the search box.
#[wasm_bindgen(js_name = searchFood)]
pub fn search_food() -> Result<(), JsValue> {
    let query = apply::search_query(&apply::document()?);
    dispatch(|engine| engine.search(&query))
}

#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() -> Result<(), JsValue> {
    dispatch(ClientEngine::toggle_mobile_menu)
}

#[wasm_bindgen(js_name = showModal)]
pub fn show_modal() -> Result<(), JsValue> {
    dispatch(ClientEngine::show_modal)
}

#[wasm_bindgen(js_name = hideModal)]
pub fn hide_modal() -> Result<(), JsValue> {
    dispatch(ClientEngine::hide_modal)
}
