/// ID types for catalog entities
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Wrap an existing UUID
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random item ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for ItemId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_generation_creates_unique_ids() {
        let id1 = ItemId::generate();
        let id2 = ItemId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn item_id_display_round_trips_through_from_str() {
        let id = ItemId::generate();
        let parsed: ItemId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn item_id_rejects_non_uuid() {
        assert!("item-123".parse::<ItemId>().is_err());
    }

    #[test]
    fn item_id_serializes_as_plain_string() {
        let uuid = Uuid::parse_str("6f1c2a0e-8a4b-4a8e-9d4f-3b2f7d0c9e11").unwrap();
        let json = serde_json::to_string(&ItemId::new(uuid)).unwrap();
        assert_eq!(json, "\"6f1c2a0e-8a4b-4a8e-9d4f-3b2f7d0c9e11\"");
    }
}
