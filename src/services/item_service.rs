//! src/services/item_service.rs
//!
//! ItemService — items owned by users, persisted in SQLite. Ownership is a
//! foreign key on `items.owner_id`; deleting a user cascades to its items.

use super::is_foreign_key_violation;
use crate::models::item::{Item, ItemCreate, ItemUpdate, ItemsPublic};
use sqlx::{QueryBuilder, SqlitePool, sqlite::Sqlite};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("item `{0}` not found")]
    NotFound(Uuid),
    #[error("owner `{0}` not found")]
    OwnerNotFound(Uuid),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type ItemResult<T> = Result<T, ItemError>;

#[derive(Clone)]
pub struct ItemService {
    /// Shared SQLite connection pool.
    pub db: Arc<SqlitePool>,
}

impl ItemService {
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }

    /// Insert an item owned by `owner_id`. Returns OwnerNotFound if the
    /// owner does not exist.
    pub async fn create_item(&self, owner_id: Uuid, input: ItemCreate) -> ItemResult<Item> {
        input.validate()?;

        let item = Item {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            owner_id,
        };

        let result =
            sqlx::query("INSERT INTO items (id, title, description, owner_id) VALUES (?, ?, ?, ?)")
                .bind(item.id)
                .bind(&item.title)
                .bind(&item.description)
                .bind(item.owner_id)
                .execute(&*self.db)
                .await;

        match result {
            Ok(_) => {
                debug!(item_id = %item.id, owner_id = %owner_id, "created item");
                Ok(item)
            }
            Err(err) if is_foreign_key_violation(&err) => Err(ItemError::OwnerNotFound(owner_id)),
            Err(err) => Err(ItemError::Sqlx(err)),
        }
    }

    pub async fn get_item(&self, id: Uuid) -> ItemResult<Item> {
        sqlx::query_as::<_, Item>(
            "SELECT id, title, description, owner_id FROM items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&*self.db)
        .await?
        .ok_or(ItemError::NotFound(id))
    }

    /// One page of items in insertion order, optionally restricted to one
    /// owner, with the total number of matching items.
    pub async fn list_items(
        &self,
        owner_id: Option<Uuid>,
        skip: i64,
        limit: i64,
    ) -> ItemResult<ItemsPublic> {
        let mut count_query = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM items");
        let mut page_query =
            QueryBuilder::<Sqlite>::new("SELECT id, title, description, owner_id FROM items");

        if let Some(owner) = owner_id {
            count_query.push(" WHERE owner_id = ");
            count_query.push_bind(owner);
            page_query.push(" WHERE owner_id = ");
            page_query.push_bind(owner);
        }

        page_query.push(" ORDER BY rowid LIMIT ");
        page_query.push_bind(limit.max(0));
        page_query.push(" OFFSET ");
        page_query.push_bind(skip.max(0));

        let count: i64 = count_query
            .build_query_scalar()
            .fetch_one(&*self.db)
            .await?;
        let data: Vec<Item> = page_query.build_query_as().fetch_all(&*self.db).await?;

        Ok(ItemsPublic { data, count })
    }

    /// Apply a partial update. Absent fields keep their value.
    pub async fn update_item(&self, id: Uuid, input: ItemUpdate) -> ItemResult<Item> {
        input.validate()?;
        let mut item = self.get_item(id).await?;

        if let Some(title) = input.title {
            item.title = title;
        }
        if let Some(description) = input.description {
            item.description = description;
        }

        let result = sqlx::query("UPDATE items SET title = ?, description = ? WHERE id = ?")
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.id)
            .execute(&*self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(id));
        }
        Ok(item)
    }

    pub async fn delete_item(&self, id: Uuid) -> ItemResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&*self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(id));
        }
        debug!(item_id = %id, "deleted item");
        Ok(())
    }
}
