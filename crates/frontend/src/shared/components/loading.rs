use leptos::prelude::*;
use thaw::*;

/// Centered spinner shown while a page's first fetch is in flight.
#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="loading-state">
            <Spinner />
        </div>
    }
}

/// Placeholder for an empty (or fully filtered) list.
#[component]
pub fn EmptyState(
    message: &'static str,
    #[prop(optional)]
    icon_name: &'static str,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            {(!icon_name.is_empty()).then(|| crate::shared::icons::icon(icon_name))}
            <p>{message}</p>
        </div>
    }
}
