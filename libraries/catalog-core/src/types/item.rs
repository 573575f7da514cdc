/// Item domain types
use crate::types::ItemId;
use crate::validation::{validate_name, validate_price};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier, assigned at creation
    pub id: ItemId,

    /// Item name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Unit price, always greater than zero
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,

    /// Creation timestamp, never changed after creation
    pub created_date: DateTime<Utc>,
}

impl Item {
    /// Create a new item with a generated ID and the current time
    pub fn new(create: CreateItem) -> Self {
        Self {
            id: ItemId::generate(),
            name: create.name,
            description: create.description,
            price: create.price,
            created_date: Utc::now(),
        }
    }

    /// Create an item with a specific ID (for database loading)
    pub fn with_id(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        created_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            created_date,
        }
    }

    /// Copy of this item with the editable fields replaced
    ///
    /// The ID and creation timestamp are carried over unchanged.
    pub fn with_changes(&self, update: UpdateItem) -> Self {
        Self {
            id: self.id,
            name: update.name,
            description: update.description,
            price: update.price,
            created_date: self.created_date,
        }
    }
}

/// Request to create an item
///
/// Missing fields deserialize to their empty value so that validation,
/// not parsing, reports them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct CreateItem {
    /// Item name, must not be blank
    #[serde(default)]
    #[validate(custom = "validate_name")]
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Unit price, read exactly from the JSON number
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    #[validate(custom = "validate_price")]
    pub price: Decimal,
}

impl CreateItem {
    /// Build a create request from its three fields
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

/// Request to update an existing item
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct UpdateItem {
    /// Item name, must not be blank
    #[serde(default)]
    #[validate(custom = "validate_name")]
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Unit price, read exactly from the JSON number
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    #[validate(custom = "validate_price")]
    pub price: Decimal,
}

impl UpdateItem {
    /// Build an update request from its three fields
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}
