//! # Aroi Components
//!
//! Declarative UI nodes for the storefront and the renderer that turns a
//! node tree into one HTML string.
//!
//! ```text
//! catalog + config ──► Node tree ──► render() ──► markup
//! ```
//!
//! Every variant carries a typed props struct with documented defaults.
//! Rendering is pure and total: a node that could not be built carries a
//! [`RenderError`] and renders as a visible inline fragment, so a broken
//! node never stops its siblings from rendering.
//!
//! All text and attribute values pass through [`MarkupWriter`], which escapes
//! them. Only [`Markup`] (authored fragments and static icons) bypasses it.

pub mod dom;
mod error;
mod html;
mod icons;
mod node;
mod price;
mod props;
pub mod variants;


pub use error::{PriceError, RenderError};
pub use html::{escape_html, Handler, JsArg, Markup, MarkupWriter};
pub use node::{Child, Column, Kind, Node, Render};
pub use price::Price;
pub use props::{FromProps, Properties};
pub use variants::{
    AppBar, Button, CartLine, CartPanel, CatalogItem, CategoryPill, FloatingAction, Modal,
    ProfileCard, SearchBar, Text, Toast, SHOW_ALL_CATEGORY,
};
