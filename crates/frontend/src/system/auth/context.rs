use contracts::system::auth::LoginCredentials;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::session::{AuthSession, AuthState};
use crate::shared::api_client::ApiError;
use crate::shared::api_utils::api_client;

/// Auth context provider component
///
/// Starts in the loading state and resolves it once, after the stored token
/// has been checked against the server.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = AuthSession::new(api_client());
    let (auth_state, set_auth_state) = signal(AuthState::restoring());

    let restore_session = session.clone();
    spawn_local(async move {
        let user = restore_session.restore().await;
        set_auth_state.set(AuthState::resolved(user));
    });

    provide_context(auth_state);
    provide_context(set_auth_state);
    provide_context(session);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub fn use_session() -> AuthSession {
    use_context::<AuthSession>().expect("AuthProvider not found in component tree")
}

/// Helper: Perform login and publish the user on success
pub async fn do_login(
    session: &AuthSession,
    set_auth_state: WriteSignal<AuthState>,
    credentials: LoginCredentials,
) -> Result<(), ApiError> {
    let user = session.login(&credentials).await?;
    set_auth_state.set(AuthState::resolved(Some(user)));
    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(session: &AuthSession, set_auth_state: WriteSignal<AuthState>) {
    session.logout();
    set_auth_state.set(AuthState::resolved(None));
}
