use crate::cart::{Cart, QuantityChange};
use crate::filter::{CatalogFilter, CatalogIndex};
use crate::page::{Page, PageState};
use crate::patch::{DomPatch, Target};
use aroi_components::{dom, CartLine, CategoryPill, MarkupWriter, Price, Render};

/// Owns the cart, page and filter state of one loaded document.
///
/// Every operation mutates state first and then returns the patches that
/// bring the page in line with it. Nothing else may mutate the state.
#[derive(Debug, Clone, Default)]
pub struct ClientEngine {
    cart: Cart,
    page: PageState,
    filter: CatalogFilter,
    modal_open: bool,
    index: CatalogIndex,
}

impl ClientEngine {
    pub fn new(index: CatalogIndex) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn add_item(&mut self, name: &str, price: Price) -> Vec<DomPatch> {
        let quantity = self.cart.add(name, price).quantity;
        tracing::debug!(name, %price, quantity, "Added to cart");

        let mut patches = vec![DomPatch::Notify {
            message: format!("เพิ่ม {} ลงในตะกร้าแล้ว!", name),
        }];
        patches.extend(self.recompute());
        patches
    }

    pub fn remove_item(&mut self, index: usize) -> Vec<DomPatch> {
        let Some(entry) = self.cart.remove(index) else {
            tracing::debug!(index, len = self.cart.len(), "Ignoring remove of stale cart index");
            return Vec::new();
        };

        let mut patches = vec![removed_notice(&entry.name)];
        patches.extend(self.recompute());
        patches
    }

    pub fn change_quantity(&mut self, index: usize, delta: i64) -> Vec<DomPatch> {
        let mut patches = match self.cart.change_quantity(index, delta) {
            Some(QuantityChange::Updated(quantity)) => {
                tracing::debug!(index, quantity, "Updated cart quantity");
                Vec::new()
            }
            Some(QuantityChange::Removed(entry)) => vec![removed_notice(&entry.name)],
            None => {
                tracing::debug!(index, len = self.cart.len(), "Ignoring quantity change on stale cart index");
                return Vec::new();
            }
        };
        patches.extend(self.recompute());
        patches
    }

    /// Derives the badges, empty state, item list and total from the cart.
    pub fn recompute(&self) -> Vec<DomPatch> {
        let count = self.cart.total_items().to_string();
        let empty = self.cart.is_empty();

        vec![
            DomPatch::SetText {
                target: Target::Id(dom::CART_COUNT),
                text: count.clone(),
            },
            DomPatch::SetText {
                target: Target::Id(dom::MOBILE_CART_COUNT),
                text: count,
            },
            DomPatch::SetHidden {
                target: Target::Id(dom::CART_EMPTY),
                hidden: !empty,
            },
            DomPatch::SetHidden {
                target: Target::Id(dom::CART_ITEMS_CONTAINER),
                hidden: empty,
            },
            DomPatch::SetInnerHtml {
                target: Target::Id(dom::CART_ITEMS),
                html: self.cart_rows(),
            },
            DomPatch::SetText {
                target: Target::Id(dom::CART_TOTAL),
                text: self.cart.total_price().display_baht(),
            },
        ]
    }

    fn cart_rows(&self) -> String {
        let mut w = MarkupWriter::new();
        for (index, entry) in self.cart.entries().iter().enumerate() {
            CartLine::new(index, entry.name.as_str(), entry.price, entry.quantity).render_into(&mut w);
        }
        w.finish()
    }

    /// Shows `page` and hides the other two.
    pub fn navigate(&mut self, page: Page) -> Vec<DomPatch> {
        self.page.page = page;
        tracing::debug!(%page, "Navigated");

        let mut patches: Vec<DomPatch> = Page::ALL
            .iter()
            .map(|candidate| DomPatch::SetHidden {
                target: Target::Id(candidate.element_id()),
                hidden: *candidate != page,
            })
            .collect();
        patches.push(DomPatch::AddClass {
            target: Target::Id(page.element_id()),
            class: dom::FADE_IN,
        });
        patches
    }

    /// Closes the mobile menu, then navigates.
    pub fn navigate_from_menu(&mut self, page: Page) -> Vec<DomPatch> {
        self.page.mobile_menu_open = false;
        let mut patches = vec![self.menu_patch()];
        patches.extend(self.navigate(page));
        patches
    }

    pub fn toggle_mobile_menu(&mut self) -> Vec<DomPatch> {
        self.page.mobile_menu_open = !self.page.mobile_menu_open;
        vec![self.menu_patch()]
    }

    fn menu_patch(&self) -> DomPatch {
        DomPatch::SetHidden {
            target: Target::Id(dom::MOBILE_MENU),
            hidden: !self.page.mobile_menu_open,
        }
    }

    pub fn show_modal(&mut self) -> Vec<DomPatch> {
        self.set_modal(true)
    }

    pub fn hide_modal(&mut self) -> Vec<DomPatch> {
        self.set_modal(false)
    }

    fn set_modal(&mut self, open: bool) -> Vec<DomPatch> {
        self.modal_open = open;
        let mut patches = vec![DomPatch::SetHidden {
            target: Target::Id(dom::QUICK_ORDER_MODAL),
            hidden: !open,
        }];
        if open {
            patches.push(DomPatch::AddClass {
                target: Target::Id(dom::QUICK_ORDER_MODAL),
                class: dom::FADE_IN,
            });
        }
        patches
    }

    /// Highlights the matching pill and re-filters the cards. The show-all
    /// label clears the category filter; the text query still applies.
    pub fn filter_by_category(&mut self, category: &str) -> Vec<DomPatch> {
        self.filter.set_category(category);
        let active = self.filter.active_pill();

        let mut patches: Vec<DomPatch> = self
            .index
            .pills
            .iter()
            .enumerate()
            .map(|(ordinal, label)| {
                let is_active = label == active;
                DomPatch::SwapClasses {
                    target: Target::CategoryPill(ordinal),
                    remove: CategoryPill::classes(!is_active),
                    add: CategoryPill::classes(is_active),
                }
            })
            .collect();
        patches.extend(self.item_visibility());
        patches
    }

    pub fn search(&mut self, query: &str) -> Vec<DomPatch> {
        self.filter.set_query(query);
        self.item_visibility()
    }

    fn item_visibility(&self) -> Vec<DomPatch> {
        self.index
            .items
            .iter()
            .enumerate()
            .map(|(ordinal, item)| DomPatch::SetDisplayed {
                target: Target::CatalogItem(ordinal),
                displayed: self.filter.matches(item),
            })
            .collect()
    }
}

fn removed_notice(name: &str) -> DomPatch {
    DomPatch::Notify {
        message: format!("ลบ {} ออกจากตะกร้าแล้ว", name),
    }
}
