use aroi_components::SHOW_ALL_CATEGORY;

/// Name and category of one catalog card, in DOM order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedItem {
    pub name: String,
    pub category: String,
    lowercase_name: String,
}

impl IndexedItem {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            lowercase_name: name.to_lowercase(),
            name,
            category: category.into(),
        }
    }
}

/// What the engine knows about the rendered catalog: the cards and the pill
/// labels, each in the order they appear in the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    pub items: Vec<IndexedItem>,
    pub pills: Vec<String>,
}

impl CatalogIndex {
    pub fn new(items: Vec<IndexedItem>, pills: Vec<String>) -> Self {
        Self { items, pills }
    }
}

/// Category and text filters over the catalog. Both apply at once: an item
/// is visible only when it passes the category filter and its name contains
/// the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    category: Option<String>,
    query: String,
}

impl CatalogFilter {
    /// Selects a category; the show-all label clears the category filter.
    pub fn set_category(&mut self, category: &str) {
        self.category = if category == SHOW_ALL_CATEGORY {
            None
        } else {
            Some(category.to_string())
        };
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_lowercase();
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Label of the pill that should be highlighted.
    pub fn active_pill(&self) -> &str {
        self.category.as_deref().unwrap_or(SHOW_ALL_CATEGORY)
    }

    pub fn matches(&self, item: &IndexedItem) -> bool {
        let category_ok = match &self.category {
            Some(category) => item.category == *category,
            None => true,
        };
        category_ok && item.lowercase_name.contains(self.query.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<IndexedItem> {
        vec![
            IndexedItem::new("Pad Thai", "Thai"),
            IndexedItem::new("Thai Tea", "Drinks"),
            IndexedItem::new("Burger", "Fast food"),
        ]
    }

    fn visible(filter: &CatalogFilter) -> Vec<&'static str> {
        let names = ["Pad Thai", "Thai Tea", "Burger"];
        items()
            .iter()
            .zip(names)
            .filter(|(item, _)| filter.matches(item))
            .map(|(_, name)| name)
            .collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut filter = CatalogFilter::default();
        filter.set_query("THAI");
        assert_eq!(visible(&filter), vec!["Pad Thai", "Thai Tea"]);
    }

    #[test]
    fn test_category_and_query_combine() {
        let mut filter = CatalogFilter::default();
        filter.set_category("Drinks");
        filter.set_query("thai");
        assert_eq!(visible(&filter), vec!["Thai Tea"]);
    }

    #[test]
    fn test_show_all_clears_category() {
        let mut filter = CatalogFilter::default();
        filter.set_category("Drinks");
        filter.set_category(SHOW_ALL_CATEGORY);
        assert_eq!(filter.category(), None);
        assert_eq!(filter.active_pill(), SHOW_ALL_CATEGORY);
        assert_eq!(visible(&filter).len(), 3);
    }

    #[test]
    fn test_thai_names_match() {
        let item = IndexedItem::new("ผัดไทยกุ้งสด", "อาหารไทย");
        let mut filter = CatalogFilter::default();
        filter.set_query("ไทย");
        assert!(filter.matches(&item));
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        let item = IndexedItem::new("ผัดไทยกุ้งสด", "อาหารไทย");
        let mut filter = CatalogFilter::default();
        filter.set_query(" ไทย");
        assert!(!filter.matches(&item));
        assert!(visible(&filter).is_empty());

        filter.set_query("pad thai");
        assert_eq!(visible(&filter), vec!["Pad Thai"]);
    }
}
