//! # storefront-core: In-Memory Retail Domain
//!
//! Products, a store catalog, customers and orders, with availability
//! decrement on order placement and cost totals.
//!
//! ## Component Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        storefront-core                                  │
//! │                                                                         │
//! │   ┌───────────┐     ┌───────────┐     ┌───────────┐     ┌───────────┐   │
//! │   │   Store   │     │ Customer  │     │   Order   │     │   Money   │   │
//! │   │  catalog  │     │ place_    │     │  lines +  │     │  integer  │   │
//! │   │  by name  │     │  order()  │     │  totals   │     │   cents   │   │
//! │   └─────┬─────┘     └─────┬─────┘     └─────┬─────┘     └───────────┘   │
//! │         │                 │                 │                           │
//! │         └─────────────────┼─────────────────┘                           │
//! │                           ▼                                             │
//! │                  ProductHandle (Rc<RefCell<Product>>)                   │
//! │                                                                         │
//! │   SINGLE-THREADED • NO PERSISTENCE • NO NETWORK                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Product data and the shared [`ProductHandle`]
//! - [`store`] - Catalog: add, remove, find, list
//! - [`customer`] - Order placement against live availability
//! - [`order`] - Independent order records and totals
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Quantity checks
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Customer, Money, Product, Store};
//!
//! let mut store = Store::new();
//! let shirt = store.add_product(Product::new("Shirt", Money::from_cents(2599), 10));
//!
//! let mut john = Customer::new("John", "john@example.com");
//! john.place_order(&shirt, 2).unwrap();
//!
//! // The catalog sees the decrement.
//! assert_eq!(store.find_product("Shirt").unwrap().available_quantity(), 8);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod customer;
pub mod error;
pub mod money;
pub mod order;
pub mod product;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use customer::{Customer, OrderLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderTotals};
pub use product::{Product, ProductHandle};
pub use store::Store;
