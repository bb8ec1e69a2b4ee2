//! Represents an item owned by a user.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// An item row. Deleting the owning user deletes the item.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq)]
pub struct Item {
    pub id: Uuid,

    pub title: String,

    pub description: Option<String>,

    /// Foreign key to `users.id`.
    pub owner_id: Uuid,
}

#[derive(Deserialize, Validate, Clone, Debug)]
pub struct ItemCreate {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update. Absent fields keep their value.
#[derive(Deserialize, Validate, Clone, Debug, Default)]
pub struct ItemUpdate {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    /// `Some(None)` clears the stored description.
    #[validate(length(max = 255))]
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub description: Option<Option<String>>,
}

/// Items are exposed with the same fields they are stored with.
pub type ItemPublic = Item;

/// One page of items plus the total number of matching items.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ItemsPublic {
    pub data: Vec<ItemPublic>,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_must_not_be_empty() {
        let input = ItemCreate {
            title: String::new(),
            description: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_description_null_is_kept_distinct() {
        let cleared: ItemUpdate = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));

        let untouched: ItemUpdate = serde_json::from_str(r#"{"title": "Lamp"}"#).unwrap();
        assert_eq!(untouched.description, None);

        let too_long = ItemUpdate {
            title: None,
            description: Some(Some("x".repeat(256))),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn title_length_is_bounded() {
        let input = ItemUpdate {
            title: Some("x".repeat(256)),
            description: None,
        };
        assert!(input.validate().is_err());

        let input = ItemUpdate {
            title: Some("x".repeat(255)),
            description: None,
        };
        assert!(input.validate().is_ok());
    }
}
