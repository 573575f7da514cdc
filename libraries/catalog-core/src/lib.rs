//! Play Catalog Core
//!
//! Storage-agnostic domain types, validation rules, and the repository trait
//! for the catalog service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Item`, `CreateItem`, `UpdateItem`, `ItemId`
//! - **Validation**: field rules applied to create/update requests
//! - **Repository**: the `ItemRepository` trait implemented by storage backends
//! - **Error Handling**: unified `CatalogError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use catalog_core::types::{CreateItem, Item};
//! use catalog_core::validation;
//! use rust_decimal::Decimal;
//!
//! let request = CreateItem::new("Nike", "Pure White", Decimal::from(98));
//! assert!(validation::check(&request).is_ok());
//!
//! let item = Item::new(request);
//! assert_eq!(item.name, "Nike");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod repository;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use repository::ItemRepository;
pub use types::{CreateItem, Item, ItemId, UpdateItem};
pub use validation::ValidationProblem;
