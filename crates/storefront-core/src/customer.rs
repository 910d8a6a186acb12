//! # Customers
//!
//! A customer places orders directly against a product's live availability.
//!
//! ## Order Placement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  place_order(product, qty)                                              │
//! │       │                                                                 │
//! │       ├── qty < 0?               → Err(Negative), nothing changes       │
//! │       │                                                                 │
//! │       ├── available < qty?       → Err(InsufficientQuantity),           │
//! │       │                            nothing changes                      │
//! │       │                                                                 │
//! │       └── OK → product.update_quantity(available - qty)                 │
//! │                ordered_products.push(OrderLine { product, qty })        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Placing an order here does not create an [`Order`](crate::order::Order);
//! the two record purchases independently.

use std::fmt;

use tracing::{info, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::ProductHandle;
use crate::validation::validate_quantity;

/// A product reference paired with a quantity.
///
/// Used by both [`Customer`] and [`Order`](crate::order::Order).
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub product: ProductHandle,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(product: ProductHandle, quantity: i64) -> Self {
        OrderLine { product, quantity }
    }

    /// Cost of this line at the product's current price.
    pub fn line_total(&self) -> Money {
        self.product.calculate_total_cost(self.quantity)
    }
}

/// A customer with a running list of placed orders.
#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    email: String,
    ordered_products: Vec<OrderLine>,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Customer {
            name: name.into(),
            email: email.into(),
            ordered_products: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Lines from successful `place_order` calls, oldest first.
    pub fn ordered_products(&self) -> &[OrderLine] {
        &self.ordered_products
    }

    /// Takes `quantity` units of `product` and records the line.
    ///
    /// On any error neither the product nor this customer is modified.
    ///
    /// ```rust
    /// use storefront_core::{Customer, CoreError, Money, Product, ProductHandle};
    ///
    /// let shoes = ProductHandle::new(Product::new("Shoes", Money::from_cents(7999), 3));
    /// let mut john = Customer::new("John", "john@example.com");
    ///
    /// john.place_order(&shoes, 2).unwrap();
    /// assert_eq!(shoes.available_quantity(), 1);
    ///
    /// let err = john.place_order(&shoes, 2).unwrap_err();
    /// assert!(matches!(err, CoreError::InsufficientQuantity { available: 1, .. }));
    /// assert_eq!(john.ordered_products().len(), 1);
    /// ```
    pub fn place_order(&mut self, product: &ProductHandle, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let available = product.available_quantity();
        if available < quantity {
            let name = product.name();
            warn!(
                customer = %self.name,
                product = %name,
                available,
                requested = quantity,
                "Insufficient quantity"
            );
            return Err(CoreError::InsufficientQuantity {
                product: name,
                available,
                requested: quantity,
            });
        }

        product.update_quantity(available - quantity)?;
        self.ordered_products
            .push(OrderLine::new(product.clone(), quantity));

        info!(
            product = %product.name(),
            quantity,
            "Order placed by {}",
            self.name
        );
        Ok(())
    }

    /// Human-readable list of ordered products.
    pub fn ordered_products_report(&self) -> OrderedProductsReport<'_> {
        OrderedProductsReport { customer: self }
    }

    /// Prints the ordered products to stdout.
    pub fn get_ordered_products(&self) {
        print!("{}", self.ordered_products_report());
    }
}

/// Display adapter for [`Customer::ordered_products_report`].
///
/// ```text
/// Ordered products by John:
/// Product: Shirt, Quantity: 2
/// ```
pub struct OrderedProductsReport<'a> {
    customer: &'a Customer,
}

impl fmt::Display for OrderedProductsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ordered products by {}:", self.customer.name)?;
        for line in &self.customer.ordered_products {
            writeln!(
                f,
                "Product: {}, Quantity: {}",
                line.product.name(),
                line.quantity
            )?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::product::Product;
    use proptest::prelude::*;

    fn pants(available: i64) -> ProductHandle {
        ProductHandle::new(Product::new("Pants", Money::from_cents(3999), available))
    }

    #[test]
    fn test_place_order_decrements_and_records() {
        let product = pants(5);
        let mut lisa = Customer::new("Lisa", "lisa@example.com");

        lisa.place_order(&product, 3).unwrap();

        assert_eq!(product.available_quantity(), 2);
        assert_eq!(lisa.ordered_products().len(), 1);
        assert_eq!(lisa.ordered_products()[0].quantity, 3);
        assert!(ProductHandle::ptr_eq(
            &lisa.ordered_products()[0].product,
            &product
        ));
    }

    #[test]
    fn test_place_order_exact_quantity_sells_out() {
        let product = pants(5);
        let mut lisa = Customer::new("Lisa", "lisa@example.com");

        lisa.place_order(&product, 5).unwrap();
        assert_eq!(product.available_quantity(), 0);
    }

    #[test]
    fn test_place_order_insufficient_changes_nothing() {
        let product = pants(1);
        let mut john = Customer::new("John", "john@example.com");

        let err = john.place_order(&product, 2).unwrap_err();

        assert_eq!(
            err,
            CoreError::InsufficientQuantity {
                product: "Pants".to_string(),
                available: 1,
                requested: 2,
            }
        );
        assert_eq!(err.to_string(), "Insufficient quantity of Pants");
        assert_eq!(product.available_quantity(), 1);
        assert!(john.ordered_products().is_empty());
    }

    #[test]
    fn test_place_order_zero_quantity_records_line() {
        let product = pants(5);
        let mut john = Customer::new("John", "john@example.com");

        john.place_order(&product, 0).unwrap();

        assert_eq!(product.available_quantity(), 5);
        assert_eq!(john.ordered_products().len(), 1);
        assert_eq!(john.ordered_products()[0].quantity, 0);
    }

    #[test]
    fn test_place_order_zero_quantity_on_sold_out_product() {
        let product = pants(0);
        let mut john = Customer::new("John", "john@example.com");

        assert!(john.place_order(&product, 0).is_ok());
        assert_eq!(product.available_quantity(), 0);
    }

    #[test]
    fn test_place_order_rejects_negative_quantity() {
        let product = pants(5);
        let mut john = Customer::new("John", "john@example.com");

        let err = john.place_order(&product, -2).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::Negative {
                field: "quantity".to_string(),
                value: -2,
            })
        );
        assert_eq!(product.available_quantity(), 5);
        assert!(john.ordered_products().is_empty());
    }

    #[test]
    fn test_customers_share_availability() {
        let product = pants(5);
        let mut john = Customer::new("John", "john@example.com");
        let mut lisa = Customer::new("Lisa", "lisa@example.com");

        john.place_order(&product, 1).unwrap();
        lisa.place_order(&product, 3).unwrap();
        assert!(john.place_order(&product, 2).is_err());

        assert_eq!(product.available_quantity(), 1);
    }

    #[test]
    fn test_ordered_products_report() {
        let shirt = ProductHandle::new(Product::new("Shirt", Money::from_cents(2599), 10));
        let product = pants(5);
        let mut john = Customer::new("John", "john@example.com");
        john.place_order(&shirt, 2).unwrap();
        john.place_order(&product, 1).unwrap();

        assert_eq!(
            john.ordered_products_report().to_string(),
            "Ordered products by John:\n\
             Product: Shirt, Quantity: 2\n\
             Product: Pants, Quantity: 1\n"
        );
    }

    #[test]
    fn test_line_total_uses_current_price() {
        let line = OrderLine::new(pants(5), 2);
        assert_eq!(line.line_total().cents(), 7998);
    }

    proptest! {
        #[test]
        fn place_order_either_decrements_or_changes_nothing(
            available in 0i64..50,
            qty in 0i64..80,
        ) {
            let product = pants(available);
            let mut customer = Customer::new("C", "c@example.com");

            let result = customer.place_order(&product, qty);

            if qty <= available {
                prop_assert!(result.is_ok());
                prop_assert_eq!(product.available_quantity(), available - qty);
                prop_assert_eq!(customer.ordered_products().len(), 1);
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(product.available_quantity(), available);
                prop_assert!(customer.ordered_products().is_empty());
            }
        }
    }
}
