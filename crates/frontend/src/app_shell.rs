//! Application shell: auth gate plus the main layout.

use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;

/// Wraps a protected page in the auth gate and the sidebar/header layout.
#[component]
pub fn AppShell(children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);

    view! {
        <RequireAuth>
            <Shell>{children.with_value(|c| c())}</Shell>
        </RequireAuth>
    }
}
