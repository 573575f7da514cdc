//! Repository trait for catalog items

use crate::error::Result;
use crate::types::{CreateItem, Item, ItemId};
use async_trait::async_trait;

/// Durable storage of items, keyed by ID
///
/// Implementations hold their own connection handle and are shared across
/// requests, so every method takes `&self`.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Get every stored item, in store order
    async fn get_all(&self) -> Result<Vec<Item>>;

    /// Get item by ID, `None` when absent
    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>>;

    /// Persist a new item with a fresh ID and creation timestamp
    async fn create(&self, item: CreateItem) -> Result<Item>;

    /// Replace the name, description and price of an existing item
    ///
    /// Fails with `CatalogError::NotFound` when no item has this ID.
    async fn update(&self, item: Item) -> Result<()>;

    /// Delete an item
    ///
    /// Fails with `CatalogError::NotFound` when no item has this ID.
    async fn remove(&self, id: ItemId) -> Result<()>;
}
