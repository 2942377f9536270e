//! # Aroi Client
//!
//! Browser-side state of the storefront. The rendered page is never
//! re-rendered; instead [`ClientEngine`] keeps the cart, the visible page and
//! the catalog filters, and answers every UI event with a list of
//! [`DomPatch`]es addressed by element id or by ordinal.
//!
//! The engine has no DOM access of its own, so it runs (and is tested) as
//! plain Rust. The wasm binding applies the patches.

mod cart;
mod engine;
mod error;
mod filter;
mod page;
mod patch;

pub use cart::{Cart, CartEntry, QuantityChange};
pub use engine::ClientEngine;
pub use error::ClientError;
pub use filter::{CatalogFilter, CatalogIndex, IndexedItem};
pub use page::{Page, PageState};
pub use patch::{DomPatch, Target};
