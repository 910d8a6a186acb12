//! # Store Catalog
//!
//! The store keeps products in insertion order. Lookups are by name, but
//! names are not a unique key: `find_product` returns the first match and
//! `remove_product` removes every match.
//!
//! ## Catalog Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_product(p) ────────► products.push(handle)                         │
//! │  remove_product(name) ──► products.retain(name != ...)                  │
//! │  find_product(name) ────► first handle with that name, or None          │
//! │  display_all_products() ► catalog listing on stdout                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use tracing::debug;

use crate::product::{Product, ProductHandle};

/// A catalog of products.
#[derive(Debug, Clone, Default)]
pub struct Store {
    products: Vec<ProductHandle>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    /// Appends a product to the catalog and returns the handle stored.
    ///
    /// Accepts either an existing handle (shared with the caller) or a
    /// plain [`Product`], which is wrapped in a new handle.
    ///
    /// ```rust
    /// use storefront_core::{Money, Product, Store};
    ///
    /// let mut store = Store::new();
    /// let pants = store.add_product(Product::new("Pants", Money::from_cents(3999), 5));
    ///
    /// pants.update_quantity(4).unwrap();
    /// let found = store.find_product("Pants").unwrap();
    /// assert_eq!(found.available_quantity(), 4);
    /// ```
    pub fn add_product(&mut self, product: impl Into<ProductHandle>) -> ProductHandle {
        let handle = product.into();
        debug!(product = %handle.name(), "Adding product to catalog");
        self.products.push(handle.clone());
        handle
    }

    /// Removes every product named `name`; returns how many were removed.
    ///
    /// Handles held elsewhere (customer or order lines) stay valid.
    pub fn remove_product(&mut self, name: &str) -> usize {
        let initial_len = self.products.len();
        self.products.retain(|p| !p.has_name(name));

        let removed = initial_len - self.products.len();
        debug!(product = %name, removed, "Removed products from catalog");
        removed
    }

    /// First product named `name`, if any.
    pub fn find_product(&self, name: &str) -> Option<ProductHandle> {
        self.products.iter().find(|p| p.has_name(name)).cloned()
    }

    /// Products in catalog order.
    pub fn products(&self) -> impl Iterator<Item = &ProductHandle> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Detached copies of every product, in catalog order.
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.iter().map(ProductHandle::snapshot).collect()
    }

    /// Human-readable catalog listing.
    pub fn listing(&self) -> CatalogListing<'_> {
        CatalogListing { store: self }
    }

    /// Prints the catalog listing to stdout.
    pub fn display_all_products(&self) {
        print!("{}", self.listing());
    }
}

/// Display adapter for [`Store::listing`].
///
/// ```text
/// Products available in the store:
/// Name: Shirt, Price: $25.99
/// Name: Pants, Price: $39.99
/// ```
pub struct CatalogListing<'a> {
    store: &'a Store,
}

impl fmt::Display for CatalogListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Products available in the store:")?;
        for product in self.store.products() {
            product.with_product(|p| writeln!(f, "Name: {}, Price: {}", p.name(), p.price()))?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
