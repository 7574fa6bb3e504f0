use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::context::use_auth;
use crate::shared::api_client::LOGIN_PATH;

/// Renders children only for a signed-in user.
///
/// Nothing is shown while the session is being restored; once it settles
/// without a user the router moves to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if auth_state.get().needs_login() {
            navigate(LOGIN_PATH, Default::default());
        }
    });

    view! {
        <Show when=move || auth_state.with(|s| !s.loading && s.is_authenticated())>
            {children()}
        </Show>
    }
}
