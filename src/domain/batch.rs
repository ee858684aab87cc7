// ==========================================
// Bakery Operations Core - production batch domain model
// ==========================================
// A batch on the bakery floor. Lives on the reduced sub-graph
// in_progress -> baked -> ready_for_delivery, then cycles
// through bagging (bagged -> labeled -> ready_for_delivery).
// ==========================================

use crate::domain::types::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ProductionBatch
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionBatch {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: f64,
    pub status: OrderStatus,
    pub status_updated_at: DateTime<Utc>,
    pub started_at: DateTime<Utc>,
    /// Stamped when the batch first leaves `in_progress`.
    pub completed_at: Option<DateTime<Utc>>,
    pub assigned_to: String,
}

impl ProductionBatch {
    /// A freshly started batch in its initial status.
    pub fn start(
        id: &str,
        product_id: &str,
        product_name: &str,
        quantity: f64,
        assigned_to: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.to_string(),
            product_id: product_id.to_string(),
            product_name: product_name.to_string(),
            quantity,
            status: OrderStatus::InProgress,
            status_updated_at: now,
            started_at: now,
            completed_at: None,
            assigned_to: assigned_to.to_string(),
        }
    }
}
