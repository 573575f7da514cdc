//! Item queries

use crate::StorageError;
use catalog_core::{error::Result, types::*, CatalogError};
use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use uuid::Uuid;

/// Get all items in table order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Item>> {
    let rows = sqlx::query("SELECT id, name, description, price, created_date FROM items")
        .fetch_all(pool)
        .await?;

    rows.iter().map(item_from_row).collect()
}

/// Get item by ID
pub async fn get_by_id(pool: &SqlitePool, id: ItemId) -> Result<Option<Item>> {
    let row = sqlx::query(
        "SELECT id, name, description, price, created_date FROM items WHERE id = ?",
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(item_from_row).transpose()
}

/// Insert a new item with a generated ID and timestamp
pub async fn create(pool: &SqlitePool, create: CreateItem) -> Result<Item> {
    let item = Item::new(create);

    sqlx::query(
        "INSERT INTO items (id, name, description, price, created_date) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(item.id.to_string())
    .bind(&item.name)
    .bind(&item.description)
    .bind(item.price.to_string())
    .bind(format_timestamp(&item.created_date))
    .execute(pool)
    .await?;

    tracing::debug!(item_id = %item.id, "Item created");

    Ok(item)
}

/// Overwrite name, description and price of an existing item
///
/// The stored ID and creation timestamp are never rewritten.
pub async fn update(pool: &SqlitePool, item: &Item) -> Result<()> {
    let result = sqlx::query("UPDATE items SET name = ?, description = ?, price = ? WHERE id = ?")
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price.to_string())
        .bind(item.id.to_string())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CatalogError::not_found("Item", item.id.to_string()));
    }

    tracing::debug!(item_id = %item.id, "Item updated");

    Ok(())
}

/// Delete an item
pub async fn delete(pool: &SqlitePool, id: ItemId) -> Result<()> {
    let result = sqlx::query("DELETE FROM items WHERE id = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CatalogError::not_found("Item", id.to_string()));
    }

    tracing::debug!(item_id = %id, "Item deleted");

    Ok(())
}

fn item_from_row(row: &SqliteRow) -> Result<Item> {
    let raw_id: String = row.try_get("id")?;
    let id = Uuid::parse_str(&raw_id)
        .map_err(|e| StorageError::invalid_column(raw_id.as_str(), "id", e))?;

    let raw_price: String = row.try_get("price")?;
    let price = Decimal::from_str(&raw_price)
        .map_err(|e| StorageError::invalid_column(raw_id.as_str(), "price", e))?;

    let raw_created: String = row.try_get("created_date")?;
    let created_date = DateTime::parse_from_rfc3339(&raw_created)
        .map_err(|e| StorageError::invalid_column(raw_id.as_str(), "created_date", e))?
        .with_timezone(&Utc);

    Ok(Item::with_id(
        ItemId::new(id),
        row.try_get::<String, _>("name")?,
        row.try_get::<String, _>("description")?,
        price,
        created_date,
    ))
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
