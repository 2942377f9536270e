//! Leaf variants. Each renders from its own properties only.

mod app_bar;
mod button;
mod cart;
mod catalog_item;
mod modal;
mod pill;
mod profile_card;
mod search_bar;
mod text;
mod toast;

pub use app_bar::AppBar;
pub use button::{Button, FloatingAction};
pub use cart::{CartLine, CartPanel};
pub use catalog_item::CatalogItem;
pub use modal::Modal;
pub use pill::{CategoryPill, SHOW_ALL_CATEGORY};
pub use profile_card::ProfileCard;
pub use search_bar::SearchBar;
pub use text::Text;
pub use toast::Toast;
