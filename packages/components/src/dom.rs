//! Element ids and class names shared by the renderer and the client engine.
//!
//! The client never re-renders the tree; it patches these elements in place,
//! so both sides must agree on them.

pub const CART_COUNT: &str = "cart-count";
pub const MOBILE_CART_COUNT: &str = "mobile-cart-count";
pub const CART_ITEMS: &str = "cart-items";
pub const CART_EMPTY: &str = "cart-empty";
pub const CART_ITEMS_CONTAINER: &str = "cart-items-container";
pub const CART_TOTAL: &str = "cart-total";
pub const MOBILE_MENU: &str = "mobile-menu";
pub const QUICK_ORDER_MODAL: &str = "quick-order-modal";
pub const SEARCH_INPUT: &str = "searchInput";
pub const TOAST: &str = "toast";

pub const HOME_PAGE: &str = "home-page";
pub const CART_PAGE: &str = "cart-page";
pub const PROFILE_PAGE: &str = "profile-page";

/// Class on every catalog card root, in catalog order.
pub const CATALOG_ITEM_CLASS: &str = "food-item";
/// Class on every category pill, in pill order.
pub const CATEGORY_PILL_CLASS: &str = "category-button";

pub const HIDDEN: &str = "hidden";
pub const FADE_IN: &str = "fade-in";

pub const DATA_NAME: &str = "data-name";
pub const DATA_CATEGORY: &str = "data-category";

/// Style classes of the selected pill.
pub const PILL_ACTIVE: &[&str] = &["bg-indigo-600", "text-white"];
/// Style classes of every other pill.
pub const PILL_INACTIVE: &[&str] = &["bg-white", "text-gray-700", "hover:bg-gray-50"];
