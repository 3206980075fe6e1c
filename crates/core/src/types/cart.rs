//! The session cart: a mapping from product id to quantity.
//!
//! The cart holds no prices and no product data. It is a bare id-to-quantity
//! mapping serialized into the session; line items are rebuilt from live
//! product lookups on every render.
//!
//! # Invariants
//!
//! - Every stored quantity is >= 1.
//! - Removing an entry deletes it outright; quantities are never zeroed.
//!
//! Both invariants are enforced here, at the mutation boundary, rather than
//! by convention in the handlers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Outcome of [`Cart::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAddOutcome {
    /// The product was not in the cart; a new entry with quantity 1 was created.
    Inserted,
    /// The product was already in the cart; its quantity is now `quantity`.
    Incremented {
        /// Quantity after the increment.
        quantity: u32,
    },
}

/// A per-session cart mapping string-encoded product ids to quantities.
///
/// Keys are string-encoded so the cart survives serialization into session
/// stores that only support string map keys. Iteration order is the key's
/// lexicographic order (`BTreeMap`), which keeps cart rendering stable
/// across requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: BTreeMap<String, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// True if the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Quantity for a product, or `None` if it is not in the cart.
    ///
    /// A returned quantity is always >= 1.
    #[must_use]
    pub fn quantity(&self, id: ProductId) -> Option<u32> {
        self.entries.get(&id.to_string()).copied()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing entry, or inserts a new entry with
    /// quantity 1. Saturates rather than overflowing.
    pub fn add(&mut self, id: ProductId) -> CartAddOutcome {
        let entry = self.entries.entry(id.to_string());
        match entry {
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                let quantity = slot.get().saturating_add(1);
                *slot.get_mut() = quantity;
                CartAddOutcome::Incremented { quantity }
            }
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(1);
                CartAddOutcome::Inserted
            }
        }
    }

    /// Remove a product's entry entirely.
    ///
    /// Returns true if the product was present.
    pub fn remove(&mut self, id: ProductId) -> bool {
        self.entries.remove(&id.to_string()).is_some()
    }

    /// Iterate over `(ProductId, quantity)` pairs in stable order.
    ///
    /// Entries whose key does not parse as a product id are skipped; they
    /// can only appear if the session data was tampered with.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.entries
            .iter()
            .filter_map(|(key, &quantity)| key.parse::<ProductId>().ok().map(|id| (id, quantity)))
    }
}
