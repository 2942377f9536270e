use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use aroi_components::{
    dom, AppBar, Button, CartPanel, CategoryPill, Column, FloatingAction, Handler, JsArg, Modal,
    Node, ProfileCard, SearchBar, Text, Toast, SHOW_ALL_CATEGORY,
};

const PAGE_CLASS: &str = "flex flex-col gap-6";
const HEADING_CLASS: &str = "text-2xl font-bold text-gray-800";
const MODAL_ACTION_CLASS: &str =
    "bg-indigo-600 text-white font-medium py-2 px-4 rounded-lg hover:bg-indigo-700 transition-all";
const CHECKOUT_CLASS: &str = "w-full bg-gradient-to-r from-indigo-600 to-blue-500 text-white font-medium py-3 px-4 rounded-lg shadow-md hover:shadow-lg transform hover:-translate-y-0.5 transition-all";

fn hidden_page_class() -> String {
    format!("{} {}", dom::HIDDEN, PAGE_CLASS)
}

/// Show-all pill (active) followed by one pill per category.
pub fn category_pills(catalog: &Catalog, config: &StorefrontConfig) -> Vec<Node> {
    let categories = config
        .categories
        .clone()
        .unwrap_or_else(|| catalog.categories());

    std::iter::once(CategoryPill::new(SHOW_ALL_CATEGORY).active(true))
        .chain(
            categories
                .into_iter()
                .filter(|category| category != SHOW_ALL_CATEGORY)
                .map(CategoryPill::new),
        )
        .map(Node::from)
        .collect()
}

pub fn home_page(catalog: &Catalog, config: &StorefrontConfig) -> Node {
    let go_to_cart = Button::new(config.modal_go_to_cart.as_str())
        .with_class(MODAL_ACTION_CLASS)
        .on_click(
            Handler::call("window.showPage", &[JsArg::Str("cart")]).then("window.hideModal", &[]),
        );

    Column::new()
        .with_id(dom::HOME_PAGE)
        .with_class(PAGE_CLASS)
        .with_child(SearchBar {
            placeholder: config.search_placeholder.clone(),
        })
        .with_child(
            Column::new()
                .with_class("flex overflow-x-auto py-2 gap-3 no-scrollbar")
                .with_children(category_pills(catalog, config)),
        )
        .with_child(
            Text::new(config.popular_heading.as_str())
                .with_class(format!("{} mt-2", HEADING_CLASS)),
        )
        .with_child(
            Column::new()
                .with_class("grid-food-items")
                .with_children(catalog.cards()),
        )
        .with_child(
            FloatingAction::new(Handler::call("window.showModal", &[]))
                .with_icon(config.fab_icon.as_str())
                .with_text(config.fab_text.as_str()),
        )
        .with_child(
            Modal::new(config.modal_title.as_str(), config.modal_content.as_str())
                .with_action(go_to_cart),
        )
        .into()
}

pub fn cart_page(config: &StorefrontConfig) -> Node {
    let checkout = Button::new(config.checkout_label.as_str())
        .with_class(CHECKOUT_CLASS)
        .on_click(Handler::call(
            "alert",
            &[JsArg::Str(&config.checkout_message)],
        ));

    Column::new()
        .with_id(dom::CART_PAGE)
        .with_class(hidden_page_class())
        .with_child(Text::new(config.cart_heading.as_str()).with_class(HEADING_CLASS))
        .with_child(CartPanel::default())
        .with_child(Column::new().with_class("mt-4").with_child(checkout))
        .into()
}

pub fn profile_page(config: &StorefrontConfig) -> Node {
    let profile = &config.profile;
    Column::new()
        .with_id(dom::PROFILE_PAGE)
        .with_class(hidden_page_class())
        .with_child(
            ProfileCard::new(profile.name.as_str())
                .with_email(profile.email.as_str())
                .with_phone(profile.phone.as_str()),
        )
        .into()
}

pub fn navigation(config: &StorefrontConfig) -> Node {
    AppBar::new(config.title.as_str())
        .with_logo(config.logo.as_str())
        .into()
}

/// Full application tree: navigation, the three pages and the toast region.
/// Only the home page starts visible.
pub fn compose_app(catalog: &Catalog, config: &StorefrontConfig) -> Node {
    let content = Column::new()
        .with_class("flex-1 p-4 md:p-6 max-w-5xl mx-auto w-full")
        .with_child(home_page(catalog, config))
        .with_child(cart_page(config))
        .with_child(profile_page(config));

    tracing::debug!(
        items = catalog.len(),
        title = %config.title,
        "Composed storefront tree"
    );

    Column::new()
        .with_class("bg-gray-100 min-h-screen flex flex-col")
        .with_child(navigation(config))
        .with_child(content)
        .with_child(Toast::default())
        .into()
}
