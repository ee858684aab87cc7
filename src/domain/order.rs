// ==========================================
// Bakery Operations Core - order domain model
// ==========================================
// Orders and their line items. Item statuses are independent of
// the parent order status: neither direction cascades, the
// caller aggregates if it wants to.
// ==========================================

use crate::domain::types::{OrderStatus, PaymentStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Order
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub order_date: NaiveDate,
    pub due_date: NaiveDate,
    pub delivery_time: Option<String>,
    pub status: OrderStatus,
    pub status_updated_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub payment_status: PaymentStatus,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub delivery_address: Option<String>,
}

impl Order {
    /// Sum of line totals. The stored `total` is a snapshot; callers
    /// re-derive it after editing items.
    pub fn recompute_total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

// ==========================================
// OrderItem
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: f64,
    pub price: f64,
    pub status: OrderStatus,
    pub status_updated_at: DateTime<Utc>,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.quantity * self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        let now = Utc::now();
        Order {
            id: "ORD-001".to_string(),
            client_id: "client-001".to_string(),
            client_name: "Cafe Sunrise".to_string(),
            order_date: NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 4, 18).unwrap(),
            delivery_time: None,
            status: OrderStatus::Confirmed,
            status_updated_at: now,
            items: vec![
                OrderItem {
                    product_id: "prod-001".to_string(),
                    product_name: "Sourdough Bread".to_string(),
                    quantity: 20.0,
                    price: 4.99,
                    status: OrderStatus::Pending,
                    status_updated_at: now,
                },
                OrderItem {
                    product_id: "prod-002".to_string(),
                    product_name: "Croissants".to_string(),
                    quantity: 40.0,
                    price: 1.99,
                    status: OrderStatus::Pending,
                    status_updated_at: now,
                },
            ],
            total: 0.0,
            payment_status: PaymentStatus::ChargeAccount,
            contact_name: None,
            contact_phone: None,
            delivery_address: None,
        }
    }

    #[test]
    fn test_recompute_total() {
        let order = sample_order();
        assert!((order.recompute_total() - 179.40).abs() < 1e-9);
    }
}
