use contracts::system::users::{User, UserForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::crud::Mutation;
use crate::shared::dialogs::alert;
use crate::system::users::api;

const CREATE_FAILED: &str = "حدث خطأ في إضافة المستخدم";
const UPDATE_FAILED: &str = "حدث خطأ في تحديث المستخدم";

#[component]
pub fn UserDetails(
    editing: Option<User>,
    on_saved: Callback<Option<Vec<User>>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let initial = editing.as_ref().map(UserForm::from_entity).unwrap_or_default();
    let username = RwSignal::new(initial.username);
    let password = RwSignal::new(initial.password);
    let editing_id = StoredValue::new(editing.map(|u| u.id));
    let is_edit = editing_id.with_value(|id| id.is_some());
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = UserForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(msg) = form.validate() {
            alert(&msg);
            return;
        }

        let id = editing_id.get_value();
        set_is_saving.set(true);
        spawn_local(async move {
            let service = api::service();
            let result = match id.as_deref() {
                Some(id) => service.apply(Mutation::Update(id, &form)).await,
                None => service.apply(Mutation::Create(&form)).await,
            };
            set_is_saving.set(false);
            match result {
                Ok(items) => on_saved.run(items),
                Err(e) => alert(&e.user_message(if is_edit { UPDATE_FAILED } else { CREATE_FAILED })),
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{if is_edit { "تعديل المستخدم" } else { "إضافة مستخدم جديد" }}</h3>
                    <button class="btn-close" on:click=move |_| on_cancel.run(())>"×"</button>
                </div>

                <form on:submit=on_submit>
                    <div class="form-grid">
                        <div class="form-group">
                            <Label>"اسم المستخدم"</Label>
                            <Input value=username placeholder="أدخل اسم المستخدم" />
                        </div>
                        <div class="form-group">
                            <Label>"كلمة المرور"</Label>
                            <Input
                                value=password
                                input_type=InputType::Password
                                placeholder="أدخل كلمة المرور"
                            />
                        </div>
                    </div>

                    <div class="form-actions">
                        <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                            {if is_edit { "تحديث" } else { "إضافة" }}
                        </button>
                        <button
                            type="button"
                            class="btn-secondary"
                            on:click=move |_| on_cancel.run(())
                            disabled=move || is_saving.get()
                        >
                            "إلغاء"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
