// ==========================================
// Bakery Operations Core - domain layer
// ==========================================
// Responsibility: domain entities and closed type sets.
// Contains no store access and no engine logic.
// ==========================================

pub mod batch;
pub mod inventory;
pub mod order;
pub mod product;
pub mod types;

// Re-export core entities
pub use batch::ProductionBatch;
pub use inventory::{
    InventoryTransfer, StockLevel, TransferItem, TransferItemStatus, TransferStatus,
};
pub use order::{Order, OrderItem};
pub use product::{Product, Recipe, RecipeLine};
pub use types::{
    BaggingStage, BakeStage, DeliveryStage, EntityKind, OrderStatus, PaymentStatus, StatusMeta,
};
