use contracts::system::auth::{AuthResponse, LoginCredentials};
use contracts::system::users::User;

use crate::shared::api_client::{ApiClient, ApiError};

/// `POST /api/login`
pub async fn login(client: &ApiClient, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
    client.post("/api/login", credentials).await
}

/// `GET /api/me`, the current user behind the stored token.
pub async fn get_current_user(client: &ApiClient) -> Result<User, ApiError> {
    client.get("/api/me").await
}
