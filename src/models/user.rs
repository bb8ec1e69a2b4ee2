//! Represents an account that owns items.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

fn default_true() -> bool {
    true
}

/// A user row as stored in SQLite.
///
/// `hashed_password` is produced by the caller's password hasher and is never
/// serialized back to clients.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug)]
pub struct User {
    /// Primary key.
    pub id: Uuid,

    /// Login address, unique across all users.
    pub email: String,

    pub is_active: bool,

    pub is_superuser: bool,

    pub full_name: Option<String>,

    #[serde(skip_serializing)]
    pub hashed_password: String,
}

/// Body for creating a user with explicit flags.
#[derive(Deserialize, Validate, Clone, Debug)]
pub struct UserCreate {
    #[validate(email, length(max = 255))]
    pub email: String,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub is_superuser: bool,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub full_name: Option<String>,

    #[validate(length(min = 8, max = 40))]
    pub password: String,
}

/// Body for self-service sign up.
#[derive(Deserialize, Validate, Clone, Debug)]
pub struct UserRegister {
    #[validate(email, length(max = 255))]
    pub email: String,

    #[validate(length(min = 8, max = 40))]
    pub password: String,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub full_name: Option<String>,
}

impl From<UserRegister> for UserCreate {
    fn from(reg: UserRegister) -> Self {
        Self {
            email: reg.email,
            is_active: true,
            is_superuser: false,
            full_name: reg.full_name,
            password: reg.password,
        }
    }
}

/// Partial update applied by an administrator. Absent fields keep their value.
#[derive(Deserialize, Validate, Clone, Debug, Default)]
pub struct UserUpdate {
    #[validate(email, length(max = 255))]
    pub email: Option<String>,

    pub is_active: Option<bool>,

    pub is_superuser: Option<bool>,

    /// `Some(None)` clears the stored name.
    #[validate(length(max = 255))]
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub full_name: Option<Option<String>>,

    #[validate(length(min = 8, max = 40))]
    pub password: Option<String>,
}

/// Partial update a user applies to their own profile.
#[derive(Deserialize, Validate, Clone, Debug, Default)]
pub struct UserUpdateMe {
    #[validate(length(max = 255))]
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub full_name: Option<Option<String>>,

    #[validate(email, length(max = 255))]
    pub email: Option<String>,
}

/// Password change request; verifying `current_password` is up to the caller.
#[derive(Deserialize, Validate, Clone, Debug)]
pub struct UpdatePassword {
    #[validate(length(min = 8, max = 40))]
    pub current_password: String,

    #[validate(length(min = 8, max = 40))]
    pub new_password: String,
}

/// User as exposed through the API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserPublic {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub full_name: Option<String>,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
            full_name: user.full_name,
        }
    }
}

/// One page of users plus the total number of users.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UsersPublic {
    pub data: Vec<UserPublic>,
    pub count: i64,
}
