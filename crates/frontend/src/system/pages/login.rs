use contracts::system::auth::LoginCredentials;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::{do_login, use_auth, use_session};

const LOGIN_FAILED: &str = "حدث خطأ في تسجيل الدخول";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let session = use_session();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let credentials = LoginCredentials {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(msg) = credentials.validate() {
            set_error_message.set(Some(msg));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match do_login(&session, set_auth_state, credentials).await {
                Ok(()) => {
                    set_is_loading.set(false);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    set_error_message.set(Some(e.user_message(LOGIN_FAILED)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"تسجيل الدخول"</h1>
                <h2>"لوحة إدارة نظام المياه"</h2>

                <div class="login-box__intro">
                    <strong>"مرحباً بك"</strong>
                    <p>"يرجى إدخال بيانات تسجيل الدخول للوصول إلى لوحة الإدارة"</p>
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"اسم المستخدم"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="أدخل اسم المستخدم"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"كلمة المرور"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="أدخل كلمة المرور"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "جاري تسجيل الدخول..." } else { "تسجيل الدخول" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
