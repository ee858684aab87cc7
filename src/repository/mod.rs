// ==========================================
// Bakery Operations Core - repository layer
// ==========================================
// Responsibility: store abstractions the caller owns. The
// engines never touch these directly: the caller queries a store
// before invoking an engine and persists the returned value
// afterwards. Replaces the original's module-level mutable
// arrays with explicit interfaces.
// ==========================================

pub mod error;
pub mod memory;

use crate::domain::{InventoryTransfer, Order, Product, Recipe, StockLevel};
use std::collections::HashMap;

pub use error::{StoreError, StoreResult};
pub use memory::{
    InMemoryOrderRepository, InMemoryProductRepository, InMemoryStockRepository,
    InMemoryTransferRepository,
};

// ==========================================
// Store traits
// ==========================================
// save() is insert-or-replace keyed by id; list() preserves
// insertion order so derived output stays deterministic.

pub trait OrderRepository {
    fn list(&self) -> StoreResult<Vec<Order>>;
    fn get_by_id(&self, id: &str) -> StoreResult<Order>;
    fn save(&self, order: Order) -> StoreResult<()>;
}

pub trait ProductRepository {
    fn list(&self) -> StoreResult<Vec<Product>>;
    fn get_by_id(&self, id: &str) -> StoreResult<Product>;
    fn save(&self, product: Product) -> StoreResult<()>;

    /// The product-id -> recipe map the requirement engine consumes.
    /// Products without a recipe are absent from the map.
    fn recipe_catalog(&self) -> StoreResult<HashMap<String, Recipe>> {
        let catalog = self
            .list()?
            .into_iter()
            .filter_map(|product| product.recipe.map(|recipe| (product.id, recipe)))
            .collect();
        Ok(catalog)
    }
}

pub trait StockRepository {
    fn list(&self) -> StoreResult<Vec<StockLevel>>;
    fn get_by_id(&self, ingredient_id: &str) -> StoreResult<StockLevel>;
    fn save(&self, level: StockLevel) -> StoreResult<()>;

    /// The ingredient-id -> stock map the requirement engine consumes.
    fn stock_levels(&self) -> StoreResult<HashMap<String, StockLevel>> {
        let levels = self
            .list()?
            .into_iter()
            .map(|level| (level.ingredient_id.clone(), level))
            .collect();
        Ok(levels)
    }
}

pub trait TransferRepository {
    fn list(&self) -> StoreResult<Vec<InventoryTransfer>>;
    fn get_by_id(&self, id: &str) -> StoreResult<InventoryTransfer>;
    fn save(&self, transfer: InventoryTransfer) -> StoreResult<()>;
}
