use aroi_components::Price;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub name: String,
    pub price: Price,
    /// Always at least 1; an entry that would drop to zero is removed.
    pub quantity: u32,
}

impl CartEntry {
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Result of a quantity change on an existing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    Updated(u32),
    Removed(CartEntry),
}

/// Ordered cart entries, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumps the quantity of an entry with the same name, or appends a new
    /// one. The price of an existing entry is kept.
    pub fn add(&mut self, name: &str, price: Price) -> &CartEntry {
        let index = match self.entries.iter().position(|entry| entry.name == name) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.quantity = entry.quantity.saturating_add(1);
                index
            }
            None => {
                self.entries.push(CartEntry {
                    name: name.to_string(),
                    price,
                    quantity: 1,
                });
                self.entries.len() - 1
            }
        };
        &self.entries[index]
    }

    /// Removes the entry at `index`. Out-of-range indices leave the cart
    /// untouched.
    pub fn remove(&mut self, index: usize) -> Option<CartEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Adds `delta` to the entry's quantity. Reaching zero or below removes
    /// the entry.
    pub fn change_quantity(&mut self, index: usize, delta: i64) -> Option<QuantityChange> {
        let entry = self.entries.get_mut(index)?;
        let quantity = i64::from(entry.quantity).saturating_add(delta);
        if quantity <= 0 {
            return self.remove(index).map(QuantityChange::Removed);
        }
        entry.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        Some(QuantityChange::Updated(entry.quantity))
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CartEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_items(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.quantity)).sum()
    }

    pub fn total_price(&self) -> Price {
        self.entries.iter().map(CartEntry::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_same_name_increments() {
        let mut cart = Cart::new();
        cart.add("Pad Thai", Price::from_baht(95));
        let entry = cart.add("Pad Thai", Price::from_baht(95)).clone();

        assert_eq!(cart.len(), 1);
        assert_eq!(entry.quantity, 2);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), Price::from_baht(190));
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add("Tea", Price::from_baht(45));
        cart.add("Pad Thai", Price::from_baht(95));
        cart.add("Tea", Price::from_baht(45));

        let names: Vec<_> = cart.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Tea", "Pad Thai"]);
    }

    #[test]
    fn test_negative_delta_to_zero_removes() {
        let mut cart = Cart::new();
        cart.add("Tea", Price::from_baht(45));
        cart.add("Tea", Price::from_baht(45));

        let change = cart.change_quantity(0, -2);
        assert!(matches!(change, Some(QuantityChange::Removed(ref e)) if e.name == "Tea"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity_updates_in_place() {
        let mut cart = Cart::new();
        cart.add("Tea", Price::from_baht(45));
        assert_eq!(cart.change_quantity(0, 3), Some(QuantityChange::Updated(4)));
        assert_eq!(cart.change_quantity(0, -1), Some(QuantityChange::Updated(3)));
        assert_eq!(cart.total_price(), Price::from_baht(135));
    }

    #[test]
    fn test_stale_index_is_ignored() {
        let mut cart = Cart::new();
        cart.add("Tea", Price::from_baht(45));

        assert_eq!(cart.remove(3), None);
        assert_eq!(cart.change_quantity(1, -1), None);
        assert_eq!(cart.len(), 1);
    }
}
