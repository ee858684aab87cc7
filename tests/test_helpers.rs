// ==========================================
// Test helpers
// ==========================================
// Deterministic fixture builders shared by the integration
// tests. These replace the original mock-data generators: no
// randomness, no clock reads, fixed ids and dates.
// ==========================================
#![allow(dead_code)]

use bakery_ops::domain::{
    InventoryTransfer, Order, OrderItem, Product, ProductionBatch, Recipe, RecipeLine, StockLevel,
    TransferItem, TransferItemStatus, TransferStatus,
};
use bakery_ops::{OrderStatus, PaymentStatus};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Fixed clock for every fixture and transition.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 15, 8, 0, 0).unwrap()
}

pub fn order(id: &str, client: &str, items: Vec<OrderItem>) -> Order {
    let mut order = Order {
        id: id.to_string(),
        client_id: format!("client-{}", client.to_lowercase().replace(' ', "-")),
        client_name: client.to_string(),
        order_date: NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2025, 4, 18).unwrap(),
        delivery_time: None,
        status: OrderStatus::Confirmed,
        status_updated_at: fixed_now(),
        items,
        total: 0.0,
        payment_status: PaymentStatus::ChargeAccount,
        contact_name: None,
        contact_phone: None,
        delivery_address: None,
    };
    order.total = order.recompute_total();
    order
}

pub fn order_item(product_id: &str, product_name: &str, quantity: f64, price: f64) -> OrderItem {
    OrderItem {
        product_id: product_id.to_string(),
        product_name: product_name.to_string(),
        quantity,
        price,
        status: OrderStatus::Pending,
        status_updated_at: fixed_now(),
    }
}

pub fn batch(id: &str, product_id: &str, product_name: &str, quantity: f64) -> ProductionBatch {
    ProductionBatch::start(id, product_id, product_name, quantity, "John Baker", fixed_now())
}

/// The bakery product catalog: four recipe-bearing products plus one
/// resale product without a recipe.
pub fn product_catalog() -> Vec<Product> {
    vec![
        product(
            "prod-001",
            "Sourdough Bread",
            "Bread",
            4.99,
            1.75,
            Some(Recipe::new(vec![
                RecipeLine::new("stock-001", "All-Purpose Flour", 0.5, "kg"),
                RecipeLine::new("stock-005", "Yeast", 0.01, "kg"),
            ])),
        ),
        product(
            "prod-002",
            "Croissants",
            "Pastry",
            1.99,
            0.80,
            Some(Recipe::new(vec![
                RecipeLine::new("stock-001", "All-Purpose Flour", 0.1, "kg"),
                RecipeLine::new("stock-004", "Butter", 0.05, "kg"),
                RecipeLine::new("stock-005", "Yeast", 0.005, "kg"),
            ])),
        ),
        product(
            "prod-003",
            "Chocolate Cake",
            "Cake",
            24.99,
            8.50,
            Some(Recipe::new(vec![
                RecipeLine::new("stock-001", "All-Purpose Flour", 0.3, "kg"),
                RecipeLine::new("stock-002", "Sugar", 0.25, "kg"),
                RecipeLine::new("stock-003", "Large Eggs", 0.5, "dozen"),
                RecipeLine::new("stock-004", "Butter", 0.2, "kg"),
            ])),
        ),
        product(
            "prod-004",
            "Blueberry Muffins",
            "Pastry",
            2.49,
            0.95,
            Some(Recipe::new(vec![
                RecipeLine::new("stock-001", "All-Purpose Flour", 0.1, "kg"),
                RecipeLine::new("stock-002", "Sugar", 0.08, "kg"),
                RecipeLine::new("stock-003", "Large Eggs", 0.25, "dozen"),
                RecipeLine::new("stock-004", "Butter", 0.05, "kg"),
            ])),
        ),
        product("prod-005", "Bottled Water", "Beverage", 1.49, 0.50, None),
    ]
}

pub fn product(
    id: &str,
    name: &str,
    category: &str,
    sale_price: f64,
    cost_price: f64,
    recipe: Option<Recipe>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        sale_price,
        cost_price,
        sku: None,
        description: None,
        recipe,
    }
}

/// Warehouse stock matching the catalog's ingredients.
pub fn warehouse_stock() -> Vec<StockLevel> {
    vec![
        StockLevel::new("stock-001", "All-Purpose Flour", 450.0, "kg"),
        StockLevel::new("stock-002", "Sugar", 250.0, "kg"),
        StockLevel::new("stock-003", "Large Eggs", 200.0, "dozen"),
        StockLevel::new("stock-004", "Butter", 100.0, "kg"),
        StockLevel::new("stock-005", "Yeast", 30.0, "kg"),
    ]
}

pub fn transfer(id: &str, items: Vec<TransferItem>, orders_linked: Vec<&str>) -> InventoryTransfer {
    InventoryTransfer {
        id: id.to_string(),
        from_location_id: "loc-001".to_string(),
        from_location_name: "Main Warehouse".to_string(),
        to_location_id: "loc-002".to_string(),
        to_location_name: "Downtown Bakery".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
        status: TransferStatus::Pending,
        items,
        orders_linked: orders_linked.into_iter().map(str::to_string).collect(),
    }
}

pub fn transfer_item(ingredient_id: &str, name: &str, quantity: f64, unit: &str) -> TransferItem {
    TransferItem {
        ingredient_id: ingredient_id.to_string(),
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
        status: TransferItemStatus::Pending,
    }
}
