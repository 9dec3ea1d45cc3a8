use serde::Serialize;

use minimart_catalog::Product;
use minimart_core::{PersonName, ProductId};

/// Maximum number of items a cart may hold.
pub const MAX_ITEMS: usize = 7;

/// Derived purchase statistics of a cart.
///
/// Recomputed on demand by [`Cart::summary`], never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseSummary {
    pub total_count: usize,
    pub total_amount: f64,
    pub average_cost: f64,
}

/// A bounded, ordered collection of purchased products.
///
/// Capacity is [`MAX_ITEMS`]; a full cart rejects further adds with `false`
/// rather than an error, and removal of an absent identifier likewise
/// answers `false`. Insertion order is preserved for display. The cart owns
/// its items: [`Cart::add_item`] moves the product in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    owner: PersonName,
    items: Vec<Product>,
}

impl Cart {
    pub fn new(owner: PersonName) -> Self {
        Self { owner, items: Vec::new() }
    }

    pub fn owner(&self) -> &PersonName {
        &self.owner
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_full(&self) -> bool {
        self.item_count() >= MAX_ITEMS
    }

    /// Append a product unless the cart is full.
    ///
    /// A full cart leaves its state unchanged and answers `false`; the
    /// caller may retry after removing an item. Duplicate identifiers are
    /// not checked: identifiers are globally unique per product instance, so
    /// a duplicate can only arise through cloning, and the cart stays
    /// permissive about it.
    pub fn add_item(&mut self, product: Product) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(product);
        true
    }

    /// Remove the first item (in insertion order) whose identifier matches.
    ///
    /// Answers `false` when the cart is empty or the identifier is absent.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        if self.items.is_empty() {
            return false;
        }
        match self.items.iter().position(|item| item.product_id() == product_id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Purchase statistics: item count, summed price, and average cost
    /// (0.0 for an empty cart).
    pub fn summary(&self) -> PurchaseSummary {
        let total_count = self.item_count();
        let total_amount: f64 = self.items.iter().map(Product::price).fold(0.0, |acc, price| acc + price);
        let average_cost = if total_count > 0 {
            total_amount / total_count as f64
        } else {
            0.0
        };
        PurchaseSummary { total_count, total_amount, average_cost }
    }
}
