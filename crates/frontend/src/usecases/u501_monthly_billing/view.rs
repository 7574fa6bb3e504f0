use contracts::usecases::u501_monthly_billing::{BillingStatus, TriggerOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::domain::a004_payment_type::ui::reference::TariffReference;
use crate::shared::api_utils::api_client;
use crate::shared::components::loading::LoadingState;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};

/// Day of month and time the backend runs billing on its own.
const SCHEDULE_NOTE: &str = "يتم تشغيل نظام الفواتير الشهرية تلقائياً في اليوم 31 من كل شهر في الساعة 2:00 صباحاً. \
سيتم إعادة تعيين حالة الدفع لجميع المنازل المسكونة وتحديد المبلغ المطلوب حسب نوع العداد.";

#[component]
pub fn MonthlyBillingPanel() -> impl IntoView {
    let (status, set_status) = signal(None::<BillingStatus>);
    let (loading, set_loading) = signal(true);
    let (triggering, set_triggering) = signal(false);
    let (outcome, set_outcome) = signal(None::<TriggerOutcome>);

    let load_status = move || {
        spawn_local(async move {
            match api::fetch_status(&api_client()).await {
                Ok(s) => set_status.set(Some(s)),
                Err(e) => log::error!("Error fetching billing status: {}", e),
            }
            set_loading.set(false);
        });
    };
    load_status();

    let run_billing = move || {
        if triggering.get_untracked() {
            return;
        }
        set_triggering.set(true);
        spawn_local(async move {
            let (result, refreshed) = api::trigger(&api_client()).await;
            set_outcome.set(Some(TriggerOutcome::from(&result)));
            if let Some(s) = refreshed {
                set_status.set(Some(s));
            }
            set_triggering.set(false);
        });
    };

    let status_cards = move || {
        status.get().map(|s| {
            let rate = format!("{}%", s.payment_rate);
            view! {
                <div class="stat-grid">
                    <StatCard label="إجمالي المنازل" icon_name="home" value=s.total_houses.to_string() />
                    <StatCard
                        label="المنازل المدفوعة"
                        icon_name="check"
                        value=s.paid_houses.to_string()
                        tone=StatTone::Success
                    />
                    <StatCard
                        label="المنازل غير المدفوعة"
                        icon_name="alert"
                        value=s.unpaid_houses.to_string()
                        tone=StatTone::Error
                    />
                    <StatCard label="معدل الدفع" icon_name="dollar" value=rate tone=StatTone::Warning />
                </div>
            }
        })
    };

    let outcome_panel = move || {
        outcome.get().map(|o| {
            let title = o.title();
            let body = match o {
                TriggerOutcome::Success { processed, errors, total, message } => view! {
                    <div class="billing-result billing-result--success">
                        <h4>{icon("check")} " " {title}</h4>
                        {message.map(|m| view! { <p>{m}</p> })}
                        <dl class="billing-result__counts">
                            <dt>"المنازل المعالجة:"</dt>
                            <dd>{processed}</dd>
                            <dt>"الأخطاء:"</dt>
                            <dd>{errors}</dd>
                            <dt>"إجمالي المنازل:"</dt>
                            <dd>{total}</dd>
                        </dl>
                    </div>
                }
                .into_any(),
                TriggerOutcome::Failure { error } => view! {
                    <div class="billing-result billing-result--failure">
                        <h4>{icon("alert")} " " {title}</h4>
                        <p>{error}</p>
                    </div>
                }
                .into_any(),
            };
            view! {
                <div class="billing-card">
                    <Card>
                        <h3>"نتيجة آخر تشغيل"</h3>
                        {body}
                    </Card>
                </div>
            }
        })
    };

    view! {
        <PageFrame page_id="u501_monthly_billing--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title="إدارة الفواتير الشهرية" subtitle="مراقبة وإدارة نظام الفواتير الشهرية للمنازل" />

            <div class="page__content">
                <Show when=move || !loading.get() fallback=|| view! { <LoadingState /> }>
                    {status_cards}

                    <div class="billing-card">
                        <Card>
                            <h3>"إجراءات الفواتير الشهرية"</h3>
                            <div class="billing-card__schedule">
                                <h4>"نظام الفواتير التلقائي"</h4>
                                <p>{SCHEDULE_NOTE}</p>
                            </div>
                            <Flex gap=FlexGap::Small>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| run_billing()
                                    disabled=Signal::derive(move || triggering.get())
                                >
                                    {icon("play")}
                                    {move || if triggering.get() {
                                        " جاري التشغيل..."
                                    } else {
                                        " تشغيل الفواتير الشهرية الآن"
                                    }}
                                </Button>
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_status()>
                                    {icon("refresh")}
                                    " تحديث البيانات"
                                </Button>
                            </Flex>
                        </Card>
                    </div>

                    {outcome_panel}

                    <div class="billing-card">
                        <Card>
                            <h3>"أنواع الدفع والمبالغ"</h3>
                            <TariffReference />
                        </Card>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
