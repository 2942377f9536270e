//! # Aroi Composer
//!
//! Builds the storefront's node tree from catalog data and configuration,
//! then renders it once inside the document shell.
//!
//! ```text
//! Catalog ─┐
//!          ├─► compose_app() ─► Node ─► render_document() ─► index.html
//! Config ──┘
//! ```
//!
//! Composition is pure: the same catalog and config always give a
//! structurally identical tree.

mod catalog;
mod config;
mod document;
mod error;
mod pages;
mod session;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogRecord};
pub use config::{ProfileConfig, StorefrontConfig};
pub use document::{render_document, render_storefront, ShellOptions, CLIENT_GLOBALS};
pub use error::ComposerError;
pub use pages::{cart_page, category_pills, compose_app, home_page, navigation, profile_page};
pub use session::{ensure_cart_placeholder, MemorySession, SessionStore, CART_SESSION_KEY};
