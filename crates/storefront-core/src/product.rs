//! # Products
//!
//! A [`Product`] is plain data: name, unit price, available quantity.
//! A [`ProductHandle`] is how the rest of the model refers to one.
//!
//! ## Shared Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Store.products ──────┐                                                │
//! │                        │                                                │
//! │   Customer line ───────┼────► Rc<RefCell<Product>>  (one instance)      │
//! │                        │         name, price, available_quantity        │
//! │   Order line ──────────┘                                                │
//! │                                                                         │
//! │   place_order() decrements through its handle; the Store and every      │
//! │   Order line see the new quantity immediately.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The model is single-threaded, so `Rc<RefCell<_>>` rather than
//! `Arc<Mutex<_>>`. Cloning a handle aliases the product; it never copies it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use tracing::debug;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::validate_stock_level;

// =============================================================================
// Product
// =============================================================================

/// A product that can be listed in a store and ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Lookup key within a catalog. Not required to be unique.
    name: String,

    /// Unit price.
    price: Money,

    /// Units that can still be ordered.
    available_quantity: i64,
}

impl Product {
    /// Creates a product. All three values are stored as given.
    ///
    /// ```rust
    /// use storefront_core::{Money, Product};
    ///
    /// let shirt = Product::new("Shirt", Money::from_cents(2599), 10);
    /// assert_eq!(shirt.name(), "Shirt");
    /// assert_eq!(shirt.available_quantity(), 10);
    /// ```
    pub fn new(name: impl Into<String>, price: Money, available_quantity: i64) -> Self {
        Product {
            name: name.into(),
            price,
            available_quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn available_quantity(&self) -> i64 {
        self.available_quantity
    }

    /// Sets the available quantity.
    ///
    /// A negative value is rejected and the current quantity is kept.
    pub fn update_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        if let Err(e) = validate_stock_level(quantity) {
            debug!(product = %self.name, quantity, "Ignoring negative quantity update");
            return Err(e.into());
        }

        self.available_quantity = quantity;
        Ok(())
    }

    /// Cost of `quantity` units at this product's price.
    ///
    /// Does not look at availability.
    pub fn calculate_total_cost(&self, quantity: i64) -> Money {
        self.price.multiply_quantity(quantity)
    }
}

// =============================================================================
// Product Handle
// =============================================================================

/// Shared, mutable reference to a [`Product`].
///
/// ## Borrowing
/// Every method borrows the inner `RefCell` only for its own duration, so
/// calls never overlap. Closures passed to [`with_product_mut`] must not
/// call back into the same handle.
///
/// [`with_product_mut`]: ProductHandle::with_product_mut
#[derive(Clone)]
pub struct ProductHandle(Rc<RefCell<Product>>);

impl ProductHandle {
    pub fn new(product: Product) -> Self {
        ProductHandle(Rc::new(RefCell::new(product)))
    }

    /// Executes a function with read access to the product.
    pub fn with_product<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Product) -> R,
    {
        f(&self.0.borrow())
    }

    /// Executes a function with write access to the product.
    pub fn with_product_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Product) -> R,
    {
        f(&mut self.0.borrow_mut())
    }

    pub fn name(&self) -> String {
        self.with_product(|p| p.name.clone())
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.with_product(|p| p.name == name)
    }

    pub fn price(&self) -> Money {
        self.with_product(Product::price)
    }

    pub fn available_quantity(&self) -> i64 {
        self.with_product(Product::available_quantity)
    }

    /// See [`Product::update_quantity`].
    pub fn update_quantity(&self, quantity: i64) -> CoreResult<()> {
        self.with_product_mut(|p| p.update_quantity(quantity))
    }

    /// See [`Product::calculate_total_cost`].
    pub fn calculate_total_cost(&self, quantity: i64) -> Money {
        self.with_product(|p| p.calculate_total_cost(quantity))
    }

    /// Copies the product's current state out of the handle.
    pub fn snapshot(&self) -> Product {
        self.with_product(Product::clone)
    }

    /// True when both handles point at the same product instance.
    pub fn ptr_eq(a: &ProductHandle, b: &ProductHandle) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl From<Product> for ProductHandle {
    fn from(product: Product) -> Self {
        ProductHandle::new(product)
    }
}

impl fmt::Debug for ProductHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_product(|p| f.debug_tuple("ProductHandle").field(p).finish())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
