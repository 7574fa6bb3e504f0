use leptos::prelude::*;

/// Title block of a page with an actions slot on the opposite side.
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional)]
    subtitle: &'static str,
    /// Buttons rendered next to the title
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-text">
                <h1 class="page__title">{title}</h1>
                {(!subtitle.is_empty()).then(|| view! {
                    <p class="page__subtitle">{subtitle}</p>
                })}
            </div>
            <div class="page__header-actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
