use crate::items;
use async_trait::async_trait;
use catalog_core::{error::Result, repository::ItemRepository, types::*};
use sqlx::SqlitePool;

/// Item repository backed by `SQLite`
#[derive(Clone)]
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn get_all(&self) -> Result<Vec<Item>> {
        items::get_all(&self.pool).await
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        items::get_by_id(&self.pool, id).await
    }

    async fn create(&self, item: CreateItem) -> Result<Item> {
        items::create(&self.pool, item).await
    }

    async fn update(&self, item: Item) -> Result<()> {
        items::update(&self.pool, &item).await
    }

    async fn remove(&self, id: ItemId) -> Result<()> {
        items::delete(&self.pool, id).await
    }
}
