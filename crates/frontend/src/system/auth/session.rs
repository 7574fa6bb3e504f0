use contracts::system::auth::LoginCredentials;
use contracts::system::users::User;

use super::api;
use crate::shared::api_client::{ApiClient, ApiError};

/// What the UI knows about the signed-in operator.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Before the stored token has been checked.
    pub fn restoring() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn resolved(user: Option<User>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Auth is settled and nobody is signed in.
    pub fn needs_login(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}

/// Login, logout and session restore over an injected [`ApiClient`].
#[derive(Clone)]
pub struct AuthSession {
    client: ApiClient,
}

impl AuthSession {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Checks the stored token against `/api/me`.
    ///
    /// A missing token short-circuits without a request. Any failure drops
    /// the token.
    pub async fn restore(&self) -> Option<User> {
        self.client.tokens().get()?;

        match api::get_current_user(&self.client).await {
            Ok(user) => {
                log::info!("Session restored for {}", user.username);
                Some(user)
            }
            Err(e) => {
                log::debug!("Stored token rejected: {}", e);
                self.client.tokens().clear();
                None
            }
        }
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> Result<User, ApiError> {
        let response = api::login(&self.client, credentials).await?;
        self.client.tokens().set(&response.token);
        log::info!("Logged in as {}", response.username);
        Ok(response.to_user())
    }

    pub fn logout(&self) {
        self.client.tokens().clear();
    }
}
