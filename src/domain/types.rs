// ==========================================
// Bakery Operations Core - domain type definitions
// ==========================================
// Closed status sets for the order/production pipeline.
// Serialization format: snake_case (matches the wire tokens
// the UI layer already stores and renders).
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Order status (pipeline token)
// ==========================================
// The full forward chain:
//   pending -> confirmed -> in_progress -> baked -> ready_for_delivery
//   -> bagged -> labeled -> loaded -> in_transit -> delivered
// `cancelled` is a sink reachable from every non-terminal state.
// `delivered` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    InProgress,
    Baked,
    ReadyForDelivery,
    Bagged,
    Labeled,
    Loaded,
    InTransit,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every token in the closed set, in forward pipeline order.
    pub const ALL: [OrderStatus; 11] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::InProgress,
        OrderStatus::Baked,
        OrderStatus::ReadyForDelivery,
        OrderStatus::Bagged,
        OrderStatus::Labeled,
        OrderStatus::Loaded,
        OrderStatus::InTransit,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// The stable wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Baked => "baked",
            OrderStatus::ReadyForDelivery => "ready_for_delivery",
            OrderStatus::Bagged => "bagged",
            OrderStatus::Labeled => "labeled",
            OrderStatus::Loaded => "loaded",
            OrderStatus::InTransit => "in_transit",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a wire token. Free-form strings are rejected, never coerced.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "confirmed" => Some(OrderStatus::Confirmed),
            "in_progress" => Some(OrderStatus::InProgress),
            "baked" => Some(OrderStatus::Baked),
            "ready_for_delivery" => Some(OrderStatus::ReadyForDelivery),
            "bagged" => Some(OrderStatus::Bagged),
            "labeled" => Some(OrderStatus::Labeled),
            "loaded" => Some(OrderStatus::Loaded),
            "in_transit" => Some(OrderStatus::InTransit),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Terminal states have no successors.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Display metadata for the status badge.
    ///
    /// Total mapping: the match is exhaustive, so adding a token without
    /// badge metadata fails to compile.
    pub fn meta(&self) -> StatusMeta {
        match self {
            OrderStatus::Pending => StatusMeta::new("Pending", "yellow"),
            OrderStatus::Confirmed => StatusMeta::new("Confirmed", "blue"),
            OrderStatus::InProgress => StatusMeta::new("In Progress", "purple"),
            OrderStatus::Baked => StatusMeta::new("Baked", "amber"),
            OrderStatus::ReadyForDelivery => StatusMeta::new("Ready for Delivery", "cyan"),
            OrderStatus::Bagged => StatusMeta::new("Bagged", "indigo"),
            OrderStatus::Labeled => StatusMeta::new("Labeled", "pink"),
            OrderStatus::Loaded => StatusMeta::new("Loaded", "lime"),
            OrderStatus::InTransit => StatusMeta::new("In Transit", "orange"),
            OrderStatus::Delivered => StatusMeta::new("Delivered", "green"),
            OrderStatus::Cancelled => StatusMeta::new("Cancelled", "red"),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Status badge metadata
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusMeta {
    /// Human-readable badge label
    pub label: &'static str,
    /// Semantic badge color
    pub color: &'static str,
}

impl StatusMeta {
    pub const fn new(label: &'static str, color: &'static str) -> Self {
        Self { label, color }
    }
}

// ==========================================
// Entity kind
// ==========================================
// Each kind owns a sub-graph of the status chain; the flow
// engine keys its transition tables on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Order,
    OrderItem,
    ProductionBatch,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Order,
        EntityKind::OrderItem,
        EntityKind::ProductionBatch,
    ];
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Order => write!(f, "order"),
            EntityKind::OrderItem => write!(f, "order_item"),
            EntityKind::ProductionBatch => write!(f, "production_batch"),
        }
    }
}

// ==========================================
// Payment status
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    ChargeAccount,
    Pending,
}

impl PaymentStatus {
    pub fn meta(&self) -> StatusMeta {
        match self {
            PaymentStatus::Paid => StatusMeta::new("Paid", "green"),
            PaymentStatus::ChargeAccount => StatusMeta::new("Charge Account", "blue"),
            PaymentStatus::Pending => StatusMeta::new("Pending", "yellow"),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::ChargeAccount => write!(f, "charge_account"),
            PaymentStatus::Pending => write!(f, "pending"),
        }
    }
}

// ==========================================
// Stage-local statuses
// ==========================================
// The shared token set reuses `ready_for_delivery` for two
// distinct states: "done baking, hand off to bagging" and
// "labeled, ready to ship". Each floor stage therefore gets its
// own enum with an explicit mapping to the shared token, instead
// of threading the ambiguous token through stage logic.
// ==========================================

/// Bakery floor stage: in_progress -> baked -> ready for handoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BakeStage {
    InProgress,
    Baked,
    ReadyForHandoff,
}

impl BakeStage {
    /// The strictly forward step, `None` at the end of the stage.
    pub fn advance(&self) -> Option<Self> {
        match self {
            BakeStage::InProgress => Some(BakeStage::Baked),
            BakeStage::Baked => Some(BakeStage::ReadyForHandoff),
            BakeStage::ReadyForHandoff => None,
        }
    }

    /// The shared pipeline token this stage state reports as.
    pub fn token(&self) -> OrderStatus {
        match self {
            BakeStage::InProgress => OrderStatus::InProgress,
            BakeStage::Baked => OrderStatus::Baked,
            BakeStage::ReadyForHandoff => OrderStatus::ReadyForDelivery,
        }
    }

    /// Partial inverse of `token`. `ready_for_delivery` resolves to the
    /// bake-side meaning (`ReadyForHandoff`).
    pub fn from_token(token: OrderStatus) -> Option<Self> {
        match token {
            OrderStatus::InProgress => Some(BakeStage::InProgress),
            OrderStatus::Baked => Some(BakeStage::Baked),
            OrderStatus::ReadyForDelivery => Some(BakeStage::ReadyForHandoff),
            _ => None,
        }
    }
}

/// Bagging stage: awaiting -> bagged -> labeled -> ready to ship.
///
/// `AwaitingBagging` and `ReadyToShip` both report the shared
/// `ready_for_delivery` token; the stage history keeps them apart
/// (`ReadyToShip` is only reachable by advancing past `Labeled`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaggingStage {
    AwaitingBagging,
    Bagged,
    Labeled,
    ReadyToShip,
}

impl BaggingStage {
    pub fn advance(&self) -> Option<Self> {
        match self {
            BaggingStage::AwaitingBagging => Some(BaggingStage::Bagged),
            BaggingStage::Bagged => Some(BaggingStage::Labeled),
            BaggingStage::Labeled => Some(BaggingStage::ReadyToShip),
            BaggingStage::ReadyToShip => None,
        }
    }

    pub fn token(&self) -> OrderStatus {
        match self {
            BaggingStage::AwaitingBagging => OrderStatus::ReadyForDelivery,
            BaggingStage::Bagged => OrderStatus::Bagged,
            BaggingStage::Labeled => OrderStatus::Labeled,
            BaggingStage::ReadyToShip => OrderStatus::ReadyForDelivery,
        }
    }

    /// Partial inverse of `token`. `ready_for_delivery` resolves to the
    /// entry-side meaning (`AwaitingBagging`).
    pub fn from_token(token: OrderStatus) -> Option<Self> {
        match token {
            OrderStatus::ReadyForDelivery => Some(BaggingStage::AwaitingBagging),
            OrderStatus::Bagged => Some(BaggingStage::Bagged),
            OrderStatus::Labeled => Some(BaggingStage::Labeled),
            _ => None,
        }
    }
}

/// Delivery stage: loaded -> in transit -> delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStage {
    Loaded,
    InTransit,
    Delivered,
}

impl DeliveryStage {
    pub fn advance(&self) -> Option<Self> {
        match self {
            DeliveryStage::Loaded => Some(DeliveryStage::InTransit),
            DeliveryStage::InTransit => Some(DeliveryStage::Delivered),
            DeliveryStage::Delivered => None,
        }
    }

    pub fn token(&self) -> OrderStatus {
        match self {
            DeliveryStage::Loaded => OrderStatus::Loaded,
            DeliveryStage::InTransit => OrderStatus::InTransit,
            DeliveryStage::Delivered => OrderStatus::Delivered,
        }
    }

    pub fn from_token(token: OrderStatus) -> Option<Self> {
        match token {
            OrderStatus::Loaded => Some(DeliveryStage::Loaded),
            OrderStatus::InTransit => Some(DeliveryStage::InTransit),
            OrderStatus::Delivered => Some(DeliveryStage::Delivered),
            _ => None,
        }
    }
}
