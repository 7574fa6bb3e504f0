use serde::{Deserialize, Serialize};

use crate::system::users::User;

/// Local-storage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "admin_token";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn validate(&self) -> Result<(), String> {
        if self.username.is_empty() {
            return Err("اسم المستخدم مطلوب".into());
        }
        if self.password.is_empty() {
            return Err("كلمة المرور مطلوبة".into());
        }
        Ok(())
    }
}

/// Response of `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
    pub username: String,
}

impl AuthResponse {
    /// The login payload carries no timestamps, so they stay empty until
    /// the user is reloaded through `/api/me`.
    pub fn to_user(&self) -> User {
        User {
            id: self.user_id.clone(),
            username: self.username.clone(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}
