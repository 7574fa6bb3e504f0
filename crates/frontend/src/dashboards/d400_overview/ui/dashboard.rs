use contracts::dashboards::d400_overview::DashboardStats;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_overview::api;
use crate::shared::api_utils::api_client;
use crate::shared::components::loading::LoadingState;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::date_utils::today_utc;
use crate::shared::number_format::{format_money, format_number};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

/// Overview of the whole system
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (stats, set_stats) = signal(DashboardStats::default());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::fetch_stats(&api_client()).await {
            Ok(s) => set_stats.set(s),
            Err(e) => log::error!("Error fetching stats: {}", e),
        }
        set_loading.set(false);
    });

    let count = move |f: fn(&DashboardStats) -> usize| {
        Signal::derive(move || format_number(stats.with(f) as f64))
    };
    let last_update = StoredValue::new(today_utc().format("%d/%m/%Y").to_string());

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="لوحة التحكم" subtitle="نظرة عامة على نظام إدارة المياه" />

            <div class="page__content">
                <Show when=move || !loading.get() fallback=|| view! { <LoadingState /> }>
                    <div class="stat-grid">
                        <StatCard label="إجمالي المستخدمين" icon_name="users" value=count(|s| s.total_users) />
                        <StatCard label="إجمالي الأحياء" icon_name="map-pin" value=count(|s| s.total_neighborhoods) />
                        <StatCard label="إجمالي المربعات" icon_name="grid" value=count(|s| s.total_squares) />
                        <StatCard label="إجمالي المنازل" icon_name="home" value=count(|s| s.total_houses) />
                    </div>

                    <div class="dashboard-columns">
                        <div class="dashboard-panel">
                            <Card>
                                <h3>"حالة الدفع"</h3>
                                <p class="dashboard-panel__hint">"إحصائيات دفع الفواتير"</p>
                                <div class="stat-grid stat-grid--stacked">
                                    <StatCard
                                        label="المنازل المدفوعة"
                                        icon_name="check"
                                        value=count(|s| s.paid_houses)
                                        tone=StatTone::Success
                                    />
                                    <StatCard
                                        label="المنازل غير المدفوعة"
                                        icon_name="alert"
                                        value=count(|s| s.unpaid_houses)
                                        tone=StatTone::Error
                                    />
                                    <StatCard
                                        label="إجمالي الإيرادات"
                                        icon_name="dollar"
                                        value=Signal::derive(move || format_money(stats.with(|s| s.total_revenue)))
                                    />
                                </div>
                            </Card>
                        </div>

                        <div class="dashboard-panel">
                            <Card>
                                <h3>"معلومات النظام"</h3>
                                <p class="dashboard-panel__hint">"تفاصيل النظام الحالي"</p>
                                <dl class="entity-card__fields">
                                    <dt>"نسبة الدفع"</dt>
                                    <dd>{move || format!("{}%", stats.with(|s| s.payment_rate()))}</dd>
                                    <dt>"متوسط الدفع"</dt>
                                    <dd>{move || format_money(stats.with(|s| s.average_payment()))}</dd>
                                    <dt>"آخر تحديث"</dt>
                                    <dd>{last_update.get_value()}</dd>
                                </dl>
                            </Card>
                        </div>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
