// ==========================================
// Bakery Operations Core - in-memory stores
// ==========================================
// Backing store for demos and tests (persistence itself is out
// of scope). Rows live in a Mutex<Vec<_>> that preserves
// insertion order; save() replaces by id or appends.
// ==========================================

use crate::domain::{InventoryTransfer, Order, Product, StockLevel};
use crate::repository::error::{StoreError, StoreResult};
use crate::repository::{OrderRepository, ProductRepository, StockRepository, TransferRepository};
use std::sync::Mutex;
use uuid::Uuid;

/// Mint an id for a freshly created row.
pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

// ==========================================
// Shared vec-backed store
// ==========================================
struct VecStore<T> {
    entity: &'static str,
    rows: Mutex<Vec<T>>,
}

impl<T: Clone> VecStore<T> {
    fn new(entity: &'static str, seed: Vec<T>) -> Self {
        Self {
            entity,
            rows: Mutex::new(seed),
        }
    }

    fn list(&self) -> StoreResult<Vec<T>> {
        let rows = self.rows.lock().map_err(|_| StoreError::LockPoisoned {
            entity: self.entity.to_string(),
        })?;
        Ok(rows.clone())
    }

    fn get(&self, id: &str, id_of: impl Fn(&T) -> &str) -> StoreResult<T> {
        let rows = self.rows.lock().map_err(|_| StoreError::LockPoisoned {
            entity: self.entity.to_string(),
        })?;
        rows.iter()
            .find(|row| id_of(row) == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: self.entity.to_string(),
                id: id.to_string(),
            })
    }

    fn save(&self, row: T, id_of: impl Fn(&T) -> &str) -> StoreResult<()> {
        let mut rows = self.rows.lock().map_err(|_| StoreError::LockPoisoned {
            entity: self.entity.to_string(),
        })?;
        match rows.iter().position(|existing| id_of(existing) == id_of(&row)) {
            Some(pos) => rows[pos] = row,
            None => rows.push(row),
        }
        Ok(())
    }
}

// ==========================================
// Order repository
// ==========================================
pub struct InMemoryOrderRepository {
    store: VecStore<Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    pub fn with_seed(orders: Vec<Order>) -> Self {
        Self {
            store: VecStore::new("Order", orders),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn list(&self) -> StoreResult<Vec<Order>> {
        self.store.list()
    }

    fn get_by_id(&self, id: &str) -> StoreResult<Order> {
        self.store.get(id, |order| &order.id)
    }

    fn save(&self, order: Order) -> StoreResult<()> {
        self.store.save(order, |order| &order.id)
    }
}

// ==========================================
// Product repository
// ==========================================
pub struct InMemoryProductRepository {
    store: VecStore<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    pub fn with_seed(products: Vec<Product>) -> Self {
        Self {
            store: VecStore::new("Product", products),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn list(&self) -> StoreResult<Vec<Product>> {
        self.store.list()
    }

    fn get_by_id(&self, id: &str) -> StoreResult<Product> {
        self.store.get(id, |product| &product.id)
    }

    fn save(&self, product: Product) -> StoreResult<()> {
        self.store.save(product, |product| &product.id)
    }
}

// ==========================================
// Stock repository
// ==========================================
pub struct InMemoryStockRepository {
    store: VecStore<StockLevel>,
}

impl InMemoryStockRepository {
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    pub fn with_seed(levels: Vec<StockLevel>) -> Self {
        Self {
            store: VecStore::new("StockLevel", levels),
        }
    }
}

impl Default for InMemoryStockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl StockRepository for InMemoryStockRepository {
    fn list(&self) -> StoreResult<Vec<StockLevel>> {
        self.store.list()
    }

    fn get_by_id(&self, ingredient_id: &str) -> StoreResult<StockLevel> {
        self.store.get(ingredient_id, |level| &level.ingredient_id)
    }

    fn save(&self, level: StockLevel) -> StoreResult<()> {
        self.store.save(level, |level| &level.ingredient_id)
    }
}

// ==========================================
// Transfer repository
// ==========================================
pub struct InMemoryTransferRepository {
    store: VecStore<InventoryTransfer>,
}

impl InMemoryTransferRepository {
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    pub fn with_seed(transfers: Vec<InventoryTransfer>) -> Self {
        Self {
            store: VecStore::new("InventoryTransfer", transfers),
        }
    }
}

impl Default for InMemoryTransferRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferRepository for InMemoryTransferRepository {
    fn list(&self) -> StoreResult<Vec<InventoryTransfer>> {
        self.store.list()
    }

    fn get_by_id(&self, id: &str) -> StoreResult<InventoryTransfer> {
        self.store.get(id, |transfer| &transfer.id)
    }

    fn save(&self, transfer: InventoryTransfer) -> StoreResult<()> {
        self.store.save(transfer, |transfer| &transfer.id)
    }
}
