//! # Orders
//!
//! An [`Order`] is a standalone record of lines for a named customer. It
//! never checks or changes availability, and it is not linked to a
//! [`Customer`](crate::customer::Customer) value; `customer_name` is free text.
//!
//! Totals are recomputed from the current lines on every call, at each
//! product's current price.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::customer::OrderLine;
use crate::money::Money;
use crate::product::ProductHandle;

/// An order record.
#[derive(Debug, Clone)]
pub struct Order {
    id: Uuid,
    customer_name: String,
    lines: Vec<OrderLine>,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates an empty order.
    ///
    /// ```rust
    /// use storefront_core::{Money, Order, Product, ProductHandle};
    ///
    /// let shirt = ProductHandle::new(Product::new("Shirt", Money::from_cents(2599), 10));
    /// let pants = ProductHandle::new(Product::new("Pants", Money::from_cents(3999), 5));
    ///
    /// let mut order = Order::new("John");
    /// order.add_product(&shirt, 2);
    /// order.add_product(&pants, 1);
    /// assert_eq!(order.calculate_total_cost().to_string(), "$91.97");
    ///
    /// order.remove_product("Shirt");
    /// assert_eq!(order.calculate_total_cost().to_string(), "$39.99");
    /// ```
    pub fn new(customer_name: impl Into<String>) -> Self {
        Order {
            id: Uuid::new_v4(),
            customer_name: customer_name.into(),
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Appends a line. No availability check, no stock change.
    pub fn add_product(&mut self, product: &ProductHandle, quantity: i64) {
        debug!(order_id = %self.id, product = %product.name(), quantity, "Adding order line");
        self.lines.push(OrderLine::new(product.clone(), quantity));
    }

    /// Removes every line for a product named `name`; returns how many.
    pub fn remove_product(&mut self, name: &str) -> usize {
        let initial_len = self.lines.len();
        self.lines.retain(|line| !line.product.has_name(name));

        let removed = initial_len - self.lines.len();
        debug!(order_id = %self.id, product = %name, removed, "Removed order lines");
        removed
    }

    /// Sum of `price × quantity` over the current lines.
    pub fn calculate_total_cost(&self) -> Money {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    /// Number of lines (not units).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Units across all lines, saturating on overflow.
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Order summary for reporting and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub order_id: Uuid,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    pub line_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl From<&Order> for OrderTotals {
    fn from(order: &Order) -> Self {
        OrderTotals {
            order_id: order.id(),
            customer_name: order.customer_name.clone(),
            created_at: order.created_at(),
            line_count: order.line_count(),
            total_quantity: order.total_quantity(),
            total_cents: order.calculate_total_cost().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;
    use proptest::prelude::*;

    fn handle(name: &str, cents: i64, available: i64) -> ProductHandle {
        ProductHandle::new(Product::new(name, Money::from_cents(cents), available))
    }

    #[test]
    fn test_new_order_is_empty() {
        let order = Order::new("John");
        assert!(order.is_empty());
        assert_eq!(order.customer_name(), "John");
        assert!(order.calculate_total_cost().is_zero());
        assert!(order.created_at() <= Utc::now());
    }

    #[test]
    fn test_orders_get_distinct_ids() {
        assert_ne!(Order::new("John").id(), Order::new("John").id());
    }

    #[test]
    fn test_add_product_does_not_touch_availability() {
        let shoes = handle("Shoes", 7999, 1);
        let mut order = Order::new("John");

        order.add_product(&shoes, 5);

        assert_eq!(shoes.available_quantity(), 1);
        assert_eq!(order.line_count(), 1);
        assert_eq!(order.calculate_total_cost().cents(), 39_995);
    }

    #[test]
    fn test_remove_product_removes_all_matching_lines() {
        let shirt = handle("Shirt", 2599, 10);
        let pants = handle("Pants", 3999, 5);
        let mut order = Order::new("John");
        order.add_product(&shirt, 1);
        order.add_product(&pants, 1);
        order.add_product(&shirt, 3);

        assert_eq!(order.remove_product("Shirt"), 2);
        assert_eq!(order.line_count(), 1);
        assert_eq!(order.calculate_total_cost().cents(), 3999);

        assert_eq!(order.remove_product("Hat"), 0);
        assert_eq!(order.line_count(), 1);
    }

    #[test]
    fn test_total_reflects_current_price() {
        let shirt = handle("Shirt", 2599, 10);
        let mut order = Order::new("John");
        order.add_product(&shirt, 2);
        assert_eq!(order.calculate_total_cost().cents(), 5198);

        let replacement = Product::new("Shirt", Money::from_cents(2000), 10);
        shirt.with_product_mut(|p| *p = replacement);
        assert_eq!(order.calculate_total_cost().cents(), 4000);
    }

    #[test]
    fn test_huge_lines_saturate_instead_of_overflowing() {
        let pricey = handle("Yacht", i64::MAX / 2, 1);
        let mut order = Order::new("John");
        order.add_product(&pricey, 1);
        order.add_product(&pricey, 1);
        order.add_product(&pricey, i64::MAX);

        assert_eq!(order.calculate_total_cost(), Money::from_cents(i64::MAX));
        assert_eq!(order.total_quantity(), i64::MAX);
    }

    #[test]
    fn test_order_totals_json_shape() {
        let shirt = handle("Shirt", 2599, 10);
        let pants = handle("Pants", 3999, 5);
        let mut order = Order::new("John");
        order.add_product(&shirt, 2);
        order.add_product(&pants, 1);

        let totals = OrderTotals::from(&order);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.total_cents, 9197);

        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["customerName"], "John");
        assert_eq!(json["totalCents"], 9197);
        assert_eq!(json["orderId"], order.id().to_string());
        assert_eq!(
            json["createdAt"],
            serde_json::to_value(order.created_at()).unwrap()
        );
        assert!(json["createdAt"].is_string());
    }

    proptest! {
        #[test]
        fn total_matches_sum_of_lines(
            lines in prop::collection::vec((0i64..100_000, 0i64..100), 0..12),
            remove_at in 0usize..12,
        ) {
            let handles: Vec<ProductHandle> = lines
                .iter()
                .enumerate()
                .map(|(i, (cents, _))| handle(&format!("P{i}"), *cents, 0))
                .collect();

            let mut order = Order::new("X");
            for (h, (_, qty)) in handles.iter().zip(&lines) {
                order.add_product(h, *qty);
            }

            let expected: i64 = lines.iter().map(|(c, q)| c * q).sum();
            prop_assert_eq!(order.calculate_total_cost().cents(), expected);

            if remove_at < lines.len() {
                order.remove_product(&format!("P{remove_at}"));
                let (c, q) = lines[remove_at];
                prop_assert_eq!(order.calculate_total_cost().cents(), expected - c * q);
                prop_assert_eq!(order.line_count(), lines.len() - 1);
            }
        }
    }
}
