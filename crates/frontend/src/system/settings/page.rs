use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::config::{app_config, clear_api_url, effective_api_url, save_api_url, stored_api_url};
use crate::shared::dialogs::reload_page;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};

/// How long the "saved" notice stays on screen, ms.
const NOTICE_TIMEOUT_MS: u32 = 3000;

pub fn app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let api_url = RwSignal::new(effective_api_url());
    let (has_override, set_has_override) = signal(stored_api_url().is_some());
    let (notice, set_notice) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);

    let show_notice = move |text: &str| {
        set_notice.set(Some(text.to_string()));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            set_notice.set(None);
        });
    };

    let on_save = move |_: leptos::ev::MouseEvent| {
        set_error.set(None);
        match save_api_url(&api_url.get_untracked()) {
            Ok(()) => {
                log::info!("API URL override saved");
                set_has_override.set(true);
                // The client picks up the new base URL on the next request.
                api_url.set(effective_api_url());
                show_notice("تم حفظ الإعدادات بنجاح");
            }
            Err(msg) => set_error.set(Some(msg)),
        }
    };

    let on_reset = move |_: leptos::ev::MouseEvent| {
        clear_api_url();
        set_has_override.set(false);
        set_error.set(None);
        api_url.set(effective_api_url());
        show_notice("تمت استعادة الرابط الافتراضي");
    };

    let info_rows = move || {
        vec![
            ("اسم النظام:", app_config().app.name.clone()),
            ("إصدار النظام:", app_version().to_string()),
            ("رابط API الحالي:", effective_api_url()),
            ("الرابط الافتراضي:", app_config().api.base_url.clone()),
            ("نوع البناء:", build_profile().to_string()),
        ]
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="الإعدادات" subtitle="إدارة إعدادات النظام" />

            <div class="page__content settings-grid">
                <div class="settings-card">
                    <Card>
                        <h3>{icon("settings")} " إعدادات النظام"</h3>
                        <p class="settings-card__hint">"إعدادات الاتصال بالخادم"</p>

                        <div class="form-group">
                            <Label>"رابط API"</Label>
                            <Input value=api_url placeholder="https://gwsudan.xyz" />
                        </div>

                        {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                        {move || notice.get().map(|n| view! { <p class="form-notice">{n}</p> })}

                        <Flex gap=FlexGap::Small>
                            <Button appearance=ButtonAppearance::Primary on_click=on_save>
                                {icon("check")}
                                " حفظ"
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| reload_page()>
                                {icon("refresh")}
                                " تحديث"
                            </Button>
                            <Show when=move || has_override.get()>
                                <Button appearance=ButtonAppearance::Subtle on_click=on_reset>
                                    "استعادة الافتراضي"
                                </Button>
                            </Show>
                        </Flex>
                    </Card>
                </div>

                <div class="settings-card">
                    <Card>
                        <h3>"معلومات النظام"</h3>
                        <dl class="entity-card__fields">
                            {move || {
                                info_rows()
                                    .into_iter()
                                    .map(|(label, value)| view! {
                                        <dt>{label}</dt>
                                        <dd dir="ltr">{value}</dd>
                                    })
                                    .collect_view()
                            }}
                        </dl>
                    </Card>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_info() {
        assert_eq!(app_version(), "0.1.0");
        assert_eq!(build_profile(), if cfg!(debug_assertions) { "debug" } else { "release" });
    }
}
