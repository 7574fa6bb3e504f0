pub mod header;
pub mod left;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------------------------+---------+
/// |           Header            |         |
/// +-----------------------------+ Sidebar |
/// |           Content           |         |
/// +-----------------------------+---------+
/// ```
///
/// The sidebar sits on the right because the page is RTL.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <left::Sidebar />
            <div class="app-body">
                <header::Header />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
