/// Items API routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    Json,
};
use catalog_core::{
    types::{CreateItem, Item, ItemId, UpdateItem},
    validation,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Public shape of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub created_date: DateTime<Utc>,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            created_date: item.created_date,
        }
    }
}

/// Item identifier from the request path; a malformed one is a JSON 400
fn item_id(path: std::result::Result<Path<ItemId>, PathRejection>) -> Result<ItemId> {
    let Path(id) = path.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    Ok(id)
}

/// Location of a single item, as returned by `create_item`
pub fn item_location(id: &ItemId) -> String {
    format!("/items/{}", id)
}

/// GET /items
/// List every item
pub async fn list_items(State(app_state): State<AppState>) -> Result<Json<Vec<ItemDto>>> {
    let items = app_state.items.get_all().await?;
    Ok(Json(items.into_iter().map(ItemDto::from).collect()))
}

/// GET /items/:id
/// Get a single item
pub async fn get_item(
    path: std::result::Result<Path<ItemId>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<ItemDto>> {
    let id = item_id(path)?;
    let item = app_state
        .items
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Item not found".to_string()))?;

    Ok(Json(item.into()))
}

/// POST /items
/// Create an item after validating the request
pub async fn create_item(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreateItem>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ItemDto>)> {
    let Json(req) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    validation::check(&req)?;

    let item = app_state.items.create(req).await?;
    tracing::info!(item_id = %item.id, "Created item");

    let location = item_location(&item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item.into()),
    ))
}

/// PUT /items/:id
/// Replace name, description and price of an existing item
pub async fn update_item(
    path: std::result::Result<Path<ItemId>, PathRejection>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UpdateItem>, JsonRejection>,
) -> Result<StatusCode> {
    let id = item_id(path)?;
    let Json(req) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    validation::check(&req)?;

    let existing = app_state
        .items
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Item not found".to_string()))?;

    app_state.items.update(existing.with_changes(req)).await?;
    tracing::info!(item_id = %id, "Updated item");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /items/:id
/// Delete an item
pub async fn delete_item(
    path: std::result::Result<Path<ItemId>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let id = item_id(path)?;
    if app_state.items.get_by_id(id).await?.is_none() {
        return Err(ServerError::NotFound("Item not found".to_string()));
    }

    app_state.items.remove(id).await?;
    tracing::info!(item_id = %id, "Deleted item");

    Ok(StatusCode::NO_CONTENT)
}
