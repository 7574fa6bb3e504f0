//! Sidebar navigation with the logout button at the bottom.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::shared::api_client::LOGIN_PATH;
use crate::shared::config::app_config;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth, use_session};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem { path: "/", label: "لوحة التحكم", icon: "dashboard" },
    NavItem { path: "/users", label: "المستخدمين", icon: "users" },
    NavItem { path: "/neighborhoods", label: "الأحياء", icon: "map-pin" },
    NavItem { path: "/squares", label: "المربعات", icon: "grid" },
    NavItem { path: "/houses", label: "المنازل", icon: "home" },
    NavItem { path: "/payment-types", label: "أنواع الدفع", icon: "credit-card" },
    NavItem { path: "/billing", label: "الفواتير الشهرية", icon: "calendar" },
    NavItem { path: "/settings", label: "الإعدادات", icon: "settings" },
];

/// Exact match only: `/` is not active on `/users`.
pub fn is_active(item_path: &str, current: &str) -> bool {
    item_path == current
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let (_, set_auth_state) = use_auth();
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        do_logout(&session, set_auth_state);
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <aside class="app-sidebar">
            <div class="app-sidebar__brand">
                {icon("dashboard")}
                <span>{app_config().app.name.clone()}</span>
            </div>

            <nav class="app-sidebar__content">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let path = item.path;
                        view! {
                            <a
                                href=path
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    location.pathname.with(|p| is_active(path, p))
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="app-sidebar__footer">
                <button class="app-sidebar__item app-sidebar__logout" on:click=logout>
                    <div class="app-sidebar__item-content">
                        {icon("logout")}
                        <span>"تسجيل الخروج"</span>
                    </div>
                </button>
            </div>
        </aside>
    }
}
