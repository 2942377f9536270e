use aroi_client::{CatalogIndex, DomPatch, IndexedItem, Target};
use aroi_components::dom;
use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

const TOAST_MILLIS: i32 = 2500;

thread_local! {
    static TOAST_TIMER: Cell<Option<i32>> = const { Cell::new(None) };
}

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn nth_with_class(document: &Document, class: &str, ordinal: usize) -> Option<Element> {
    let ordinal = u32::try_from(ordinal).ok()?;
    document
        .query_selector_all(&format!(".{}", class))
        .ok()?
        .item(ordinal)?
        .dyn_into::<Element>()
        .ok()
}

fn all_with_class(document: &Document, class: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(&format!(".{}", class)) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn resolve(document: &Document, target: Target) -> Option<Element> {
    match target {
        Target::Id(id) => document.get_element_by_id(id),
        Target::CatalogItem(ordinal) => nth_with_class(document, dom::CATALOG_ITEM_CLASS, ordinal),
        Target::CategoryPill(ordinal) => nth_with_class(document, dom::CATEGORY_PILL_CLASS, ordinal),
    }
}

/// Reads the rendered cards and pills, in page order.
pub(crate) fn scan_catalog(document: &Document) -> CatalogIndex {
    let items = all_with_class(document, dom::CATALOG_ITEM_CLASS)
        .into_iter()
        .map(|card| {
            IndexedItem::new(
                card.get_attribute(dom::DATA_NAME).unwrap_or_default(),
                card.get_attribute(dom::DATA_CATEGORY).unwrap_or_default(),
            )
        })
        .collect();
    let pills = all_with_class(document, dom::CATEGORY_PILL_CLASS)
        .into_iter()
        .map(|pill| {
            pill.get_attribute(dom::DATA_CATEGORY)
                .or_else(|| pill.text_content())
                .unwrap_or_default()
        })
        .collect();
    CatalogIndex::new(items, pills)
}

pub(crate) fn search_query(document: &Document) -> String {
    document
        .get_element_by_id(dom::SEARCH_INPUT)
        .and_then(|input| input.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Applies patches in order. Patches whose element is missing are skipped.
pub(crate) fn apply(patches: &[DomPatch]) -> Result<(), JsValue> {
    let document = document()?;
    for patch in patches {
        if let DomPatch::Notify { message } = patch {
            notify(&document, message)?;
            continue;
        }
        let Some(element) = patch.target().and_then(|target| resolve(&document, target)) else {
            continue;
        };
        match patch {
            DomPatch::SetText { text, .. } => element.set_text_content(Some(text.as_str())),
            DomPatch::SetInnerHtml { html, .. } => element.set_inner_html(html),
            DomPatch::SetHidden { hidden, .. } => set_hidden(&element, *hidden)?,
            DomPatch::SetDisplayed { displayed, .. } => {
                if let Some(element) = element.dyn_ref::<HtmlElement>() {
                    let value = if *displayed { "" } else { "none" };
                    element.style().set_property("display", value)?;
                }
            }
            DomPatch::SwapClasses { remove, add, .. } => {
                let classes = element.class_list();
                for class in remove.iter() {
                    classes.remove_1(class)?;
                }
                for class in add.iter() {
                    classes.add_1(class)?;
                }
            }
            DomPatch::AddClass { class, .. } => element.class_list().add_1(class)?,
            DomPatch::Notify { .. } => {}
        }
    }
    Ok(())
}

fn set_hidden(element: &Element, hidden: bool) -> Result<(), JsValue> {
    if hidden {
        element.class_list().add_1(dom::HIDDEN)
    } else {
        element.class_list().remove_1(dom::HIDDEN)
    }
}

/// Shows the toast and schedules it to hide. A newer message restarts the
/// timer.
fn notify(document: &Document, message: &str) -> Result<(), JsValue> {
    let Some(toast) = document.get_element_by_id(dom::TOAST) else {
        web_sys::console::log_1(&JsValue::from_str(message));
        return Ok(());
    };
    toast.set_text_content(Some(message));
    set_hidden(&toast, false)?;

    let window = window()?;
    if let Some(handle) = TOAST_TIMER.with(Cell::take) {
        window.clear_timeout_with_handle(handle);
    }
    let hide = Closure::once_into_js(move || {
        TOAST_TIMER.with(|timer| timer.set(None));
        if let Err(e) = set_hidden(&toast, true) {
            web_sys::console::warn_1(&e);
        }
    });
    let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        hide.unchecked_ref(),
        TOAST_MILLIS,
    )?;
    TOAST_TIMER.with(|timer| timer.set(Some(handle)));
    Ok(())
}
