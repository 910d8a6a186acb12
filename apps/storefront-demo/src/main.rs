//! # Storefront Demo
//!
//! Runs the reference retail scenario end to end.
//!
//! ## Startup Sequence
//! 1. Load configuration (`STOREFRONT_*` environment variables)
//! 2. Initialize tracing (logs go to stderr, reports to stdout)
//! 3. Stock the store and print the catalog
//! 4. Place customer orders and print each customer's products
//! 5. Build an independent order and print its totals
//!
//! ## Usage
//! ```bash
//! cargo run -p storefront-demo
//! RUST_LOG=storefront_core=debug cargo run -p storefront-demo
//! ```

mod config;

use storefront_core::{
    CoreError, CoreResult, Customer, Money, Order, OrderTotals, Product, ProductHandle, Store,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::DemoConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::from_env();
    init_tracing(&config);

    info!(store = %config.store_name, "Starting storefront demo");
    println!("{}", config.store_name);
    println!();

    // Catalog
    let mut store = Store::new();
    store.add_product(Product::new("Shirt", Money::from_cents(2599), 10));
    store.add_product(Product::new("Pants", Money::from_cents(3999), 5));
    store.add_product(Product::new("Shoes", Money::from_cents(7999), 3));

    store.display_all_products();

    let shirt = lookup(&store, "Shirt")?;
    let pants = lookup(&store, "Pants")?;
    let shoes = lookup(&store, "Shoes")?;

    // Customer orders
    let mut john = Customer::new("John", "john@example.com");
    place_and_report(&mut john, &shirt, 2);
    place_and_report(&mut john, &pants, 1);
    place_and_report(&mut john, &shoes, 2);

    let mut lisa = Customer::new("Lisa", "lisa@example.com");
    place_and_report(&mut lisa, &pants, 3);
    place_and_report(&mut lisa, &shoes, 1);

    john.get_ordered_products();
    lisa.get_ordered_products();
    debug!(catalog = %serde_json::to_string(&store.snapshot())?, "Catalog after orders");

    // Independent order record
    let mut order = Order::new("John");
    order.add_product(&shirt, 2);
    order.add_product(&pants, 1);

    println!(
        "Total cost of the order: {}",
        config.format_currency(order.calculate_total_cost())
    );
    debug!(totals = %serde_json::to_string(&OrderTotals::from(&order))?, "Order totals");

    order.remove_product("Shirt");

    println!(
        "Total cost of the order after removing a product: {}",
        config.format_currency(order.calculate_total_cost())
    );
    debug!(totals = %serde_json::to_string(&OrderTotals::from(&order))?, "Order totals");

    Ok(())
}

/// Finds a catalog product the script relies on.
fn lookup(store: &Store, name: &str) -> CoreResult<ProductHandle> {
    store
        .find_product(name)
        .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))
}

/// Places an order and prints the outcome line.
///
/// A failed placement is reported and the script carries on; nothing was
/// changed by the failed call.
fn place_and_report(customer: &mut Customer, product: &ProductHandle, quantity: i64) {
    match customer.place_order(product, quantity) {
        Ok(()) => println!("Order placed by {}", customer.name()),
        Err(e) => println!("{}", e),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Otherwise the configured `STOREFRONT_LOG` filter (default: INFO)
fn init_tracing(config: &DemoConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
