// ==========================================
// Bakery Operations Core - inventory domain model
// ==========================================
// Stock levels per ingredient plus transfer requests moving
// stock between locations. Transfer items step strictly forward
// through pending -> picked -> transferred; the transfer status
// rolls up from its items.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// StockLevel
// ==========================================
// Owned by the inventory subsystem; this crate only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockLevel {
    pub ingredient_id: String,
    pub name: String,
    /// Non-negative on-hand quantity.
    pub quantity: f64,
    pub unit: String,
}

impl StockLevel {
    pub fn new(ingredient_id: &str, name: &str, quantity: f64, unit: &str) -> Self {
        Self {
            ingredient_id: ingredient_id.to_string(),
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        }
    }
}

// ==========================================
// Transfer status
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    Pending,
    InProgress,
    Completed,
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferStatus::Pending => write!(f, "pending"),
            TransferStatus::InProgress => write!(f, "in_progress"),
            TransferStatus::Completed => write!(f, "completed"),
        }
    }
}

// ==========================================
// Transfer item status
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferItemStatus {
    Pending,
    Picked,
    Transferred,
}

impl fmt::Display for TransferItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferItemStatus::Pending => write!(f, "pending"),
            TransferItemStatus::Picked => write!(f, "picked"),
            TransferItemStatus::Transferred => write!(f, "transferred"),
        }
    }
}

// ==========================================
// InventoryTransfer
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryTransfer {
    pub id: String,
    pub from_location_id: String,
    pub from_location_name: String,
    pub to_location_id: String,
    pub to_location_name: String,
    pub date: NaiveDate,
    pub status: TransferStatus,
    pub items: Vec<TransferItem>,
    /// Orders whose recipes produced the calculated items, if any.
    pub orders_linked: Vec<String>,
}

// ==========================================
// TransferItem
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferItem {
    pub ingredient_id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub status: TransferItemStatus,
}
