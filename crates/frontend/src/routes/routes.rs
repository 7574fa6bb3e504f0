use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::app_shell::AppShell;
use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_neighborhood::ui::list::NeighborhoodList;
use crate::domain::a002_square::ui::list::SquareList;
use crate::domain::a003_house::ui::list::HouseList;
use crate::domain::a004_payment_type::ui::list::PaymentTypeList;
use crate::shared::components::loading::EmptyState;
use crate::system::pages::login::LoginPage;
use crate::system::settings::page::SettingsPage;
use crate::system::users::ui::list::UserList;
use crate::usecases::u501_monthly_billing::view::MonthlyBillingPanel;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <EmptyState message="الصفحة غير موجودة" icon_name="alert" /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/") view=|| view! { <AppShell><OverviewDashboard /></AppShell> } />
                <Route path=path!("/users") view=|| view! { <AppShell><UserList /></AppShell> } />
                <Route
                    path=path!("/neighborhoods")
                    view=|| view! { <AppShell><NeighborhoodList /></AppShell> }
                />
                <Route path=path!("/squares") view=|| view! { <AppShell><SquareList /></AppShell> } />
                <Route path=path!("/houses") view=|| view! { <AppShell><HouseList /></AppShell> } />
                <Route
                    path=path!("/payment-types")
                    view=|| view! { <AppShell><PaymentTypeList /></AppShell> }
                />
                <Route
                    path=path!("/billing")
                    view=|| view! { <AppShell><MonthlyBillingPanel /></AppShell> }
                />
                <Route path=path!("/settings") view=|| view! { <AppShell><SettingsPage /></AppShell> } />
            </Routes>
        </Router>
    }
}
