// ==========================================
// Bakery Operations Core - library root
// ==========================================
// Scope: pure in-process logic extracted from the bakery
// operations pipeline (order intake -> baking -> bagging ->
// delivery) plus ingredient requirement planning.
// The UI layer owns rendering, routing and all timing; this
// crate never performs I/O and never holds global state.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Repository layer - store abstractions
pub mod repository;

// Engine layer - business rules
pub mod engine;

// Logging
pub mod logging;

// ==========================================
// Re-exports of core types
// ==========================================

// Domain types
pub use domain::types::{
    BaggingStage, BakeStage, DeliveryStage, EntityKind, OrderStatus, PaymentStatus, StatusMeta,
};

// Domain entities
pub use domain::{
    InventoryTransfer, Order, OrderItem, Product, ProductionBatch, Recipe, RecipeLine, StockLevel,
    TransferItem, TransferItemStatus, TransferStatus,
};

// Engines
pub use engine::{
    ComputePolicy, ComputeWarning, FlowError, FlowResult, RequirementCalculator, RequirementError,
    RequirementLine, RequirementReport, StatusFlow, Tracked, TransferError, TransferFlow,
    UnknownProductPolicy,
};

// Repository
pub use repository::{
    InMemoryOrderRepository, InMemoryProductRepository, InMemoryStockRepository,
    InMemoryTransferRepository, OrderRepository, ProductRepository, StockRepository, StoreError,
    StoreResult, TransferRepository,
};

// ==========================================
// Crate constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Crate name
pub const APP_NAME: &str = "Bakery Operations Core";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
