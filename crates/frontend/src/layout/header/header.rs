use leptos::prelude::*;

use crate::system::auth::context::use_auth;

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let username = move || {
        auth_state.with(|s| s.user.as_ref().map(|u| u.username.clone()).unwrap_or_default())
    };
    let initial = move || {
        auth_state.with(|s| s.user.as_ref().map(|u| u.initial()).unwrap_or_default())
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"مرحباً، " {username}</span>
            </div>
            <div class="top-header__actions">
                <div class="top-header__avatar">{initial}</div>
            </div>
        </header>
    }
}
