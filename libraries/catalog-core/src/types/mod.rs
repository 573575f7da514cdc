/// Domain types for the catalog
pub mod ids;
pub mod item;

pub use ids::ItemId;
pub use item::{CreateItem, Item, UpdateItem};
