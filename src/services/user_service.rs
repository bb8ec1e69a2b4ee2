//! src/services/user_service.rs
//!
//! UserService — user accounts persisted in SQLite. Password hashing is not
//! decided here: the service is handed a `PasswordHasher` and only ever
//! stores what it returns.

use super::is_unique_violation;
use crate::models::user::{
    UpdatePassword, User, UserCreate, UserPublic, UserRegister, UserUpdate, UserUpdateMe,
    UsersPublic,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

const USER_COLUMNS: &str = "id, email, is_active, is_superuser, full_name, hashed_password";

#[derive(Debug, Error)]
pub enum UserError {
    #[error("user `{0}` not found")]
    NotFound(Uuid),
    #[error("a user with email `{0}` already exists")]
    EmailTaken(String),
    #[error("incorrect password")]
    IncorrectPassword,
    #[error("new password cannot be the same as the current one")]
    PasswordUnchanged,
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type UserResult<T> = Result<T, UserError>;

/// Hashing policy supplied by the caller.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> String;

    fn verify(&self, password: &str, hashed: &str) -> bool;
}

/// UserService provides account CRUD:
/// - create/register users (email must be unique)
/// - fetch by id or email, list with pagination
/// - partial updates and password changes
/// - delete (owned items go with the user)
#[derive(Clone)]
pub struct UserService {
    /// Shared SQLite connection pool.
    pub db: Arc<SqlitePool>,

    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(db: Arc<SqlitePool>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { db, hasher }
    }

    /// Insert a new user. Returns EmailTaken on a duplicate address.
    pub async fn create_user(&self, input: UserCreate) -> UserResult<User> {
        input.validate()?;

        let user = User {
            id: Uuid::new_v4(),
            email: input.email,
            is_active: input.is_active,
            is_superuser: input.is_superuser,
            full_name: input.full_name,
            hashed_password: self.hasher.hash(&input.password),
        };

        let result = sqlx::query(
            "INSERT INTO users (id, email, is_active, is_superuser, full_name, hashed_password)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(user.is_active)
        .bind(user.is_superuser)
        .bind(&user.full_name)
        .bind(&user.hashed_password)
        .execute(&*self.db)
        .await;

        match result {
            Ok(_) => {
                debug!(user_id = %user.id, "created user");
                Ok(user)
            }
            Err(err) if is_unique_violation(&err) => Err(UserError::EmailTaken(user.email)),
            Err(err) => Err(UserError::Sqlx(err)),
        }
    }

    /// Self-service sign up: a regular, active account.
    pub async fn register_user(&self, input: UserRegister) -> UserResult<User> {
        input.validate()?;
        self.create_user(input.into()).await
    }

    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id)
            .fetch_optional(&*self.db)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    pub async fn get_user_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let user =
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
                .bind(email)
                .fetch_optional(&*self.db)
                .await?;
        Ok(user)
    }

    /// Look up a user by email and check the password against the stored hash.
    pub async fn authenticate(&self, email: &str, password: &str) -> UserResult<Option<User>> {
        Ok(self
            .get_user_by_email(email)
            .await?
            .filter(|user| self.hasher.verify(password, &user.hashed_password)))
    }

    /// One page of users in insertion order, with the total user count.
    pub async fn list_users(&self, skip: i64, limit: i64) -> UserResult<UsersPublic> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&*self.db)
            .await?;

        let rows = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY rowid LIMIT ? OFFSET ?"
        ))
        .bind(limit.max(0))
        .bind(skip.max(0))
        .fetch_all(&*self.db)
        .await?;

        Ok(UsersPublic {
            data: rows.into_iter().map(UserPublic::from).collect(),
            count,
        })
    }

    /// Apply a partial update. A present `password` is hashed and stored.
    pub async fn update_user(&self, id: Uuid, input: UserUpdate) -> UserResult<User> {
        input.validate()?;
        let mut user = self.get_user(id).await?;

        if let Some(email) = input.email {
            user.email = email;
        }
        if let Some(is_active) = input.is_active {
            user.is_active = is_active;
        }
        if let Some(is_superuser) = input.is_superuser {
            user.is_superuser = is_superuser;
        }
        if let Some(full_name) = input.full_name {
            user.full_name = full_name;
        }
        if let Some(password) = input.password {
            user.hashed_password = self.hasher.hash(&password);
        }

        self.save(user).await
    }

    /// Update the caller's own profile fields.
    pub async fn update_me(&self, id: Uuid, input: UserUpdateMe) -> UserResult<User> {
        input.validate()?;
        let mut user = self.get_user(id).await?;

        if let Some(email) = input.email {
            user.email = email;
        }
        if let Some(full_name) = input.full_name {
            user.full_name = full_name;
        }

        self.save(user).await
    }

    /// Change a password after checking the current one.
    pub async fn change_password(&self, id: Uuid, input: UpdatePassword) -> UserResult<()> {
        input.validate()?;
        let user = self.get_user(id).await?;

        if !self
            .hasher
            .verify(&input.current_password, &user.hashed_password)
        {
            return Err(UserError::IncorrectPassword);
        }
        if input.current_password == input.new_password {
            return Err(UserError::PasswordUnchanged);
        }

        self.set_password(id, &input.new_password).await
    }

    /// Store a new password without checking the old one.
    pub async fn set_password(&self, id: Uuid, password: &str) -> UserResult<()> {
        let result = sqlx::query("UPDATE users SET hashed_password = ? WHERE id = ?")
            .bind(self.hasher.hash(password))
            .bind(id)
            .execute(&*self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id));
        }
        Ok(())
    }

    /// Delete a user. Items owned by the user are removed by the cascade.
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&*self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id));
        }
        debug!(user_id = %id, "deleted user");
        Ok(())
    }

    async fn save(&self, user: User) -> UserResult<User> {
        let result = sqlx::query(
            "UPDATE users
             SET email = ?, is_active = ?, is_superuser = ?, full_name = ?, hashed_password = ?
             WHERE id = ?",
        )
        .bind(&user.email)
        .bind(user.is_active)
        .bind(user.is_superuser)
        .bind(&user.full_name)
        .bind(&user.hashed_password)
        .bind(user.id)
        .execute(&*self.db)
        .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => Err(UserError::NotFound(user.id)),
            Ok(_) => Ok(user),
            Err(err) if is_unique_violation(&err) => Err(UserError::EmailTaken(user.email)),
            Err(err) => Err(UserError::Sqlx(err)),
        }
    }
}
