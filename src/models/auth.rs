//! Auxiliary response shapes shared by account flows.

use serde::{Deserialize, Serialize};
use validator::Validate;

fn bearer() -> String {
    "bearer".into()
}

/// Generic human-readable acknowledgement.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Access token handed to a client after login.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "bearer")]
    pub token_type: String,
}

impl Token {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: bearer(),
        }
    }
}

/// Claims carried inside an access token.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TokenPayload {
    pub sub: Option<String>,
}

/// Password reset through a previously issued token.
#[derive(Deserialize, Validate, Clone, Debug)]
pub struct NewPassword {
    pub token: String,

    #[validate(length(min = 8, max = 40))]
    pub new_password: String,
}
