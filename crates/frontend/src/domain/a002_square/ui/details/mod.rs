use contracts::domain::a001_neighborhood::Neighborhood;
use contracts::domain::a002_square::{Square, SquareForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_square::api;
use crate::shared::crud::Mutation;
use crate::shared::dialogs::alert;

const CREATE_FAILED: &str = "حدث خطأ في إضافة المربع";
const UPDATE_FAILED: &str = "حدث خطأ في تحديث المربع";

#[component]
pub fn SquareDetails(
    editing: Option<Square>,
    /// Options for the neighborhood select.
    neighborhoods: Vec<Neighborhood>,
    on_saved: Callback<Option<Vec<Square>>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let initial = editing
        .as_ref()
        .map(SquareForm::from_entity)
        .unwrap_or_default();
    let name = RwSignal::new(initial.name);
    let neighborhood_id = RwSignal::new(initial.neighborhood_id);
    let editing_id = StoredValue::new(editing.map(|s| s.id));
    let is_edit = editing_id.with_value(|id| id.is_some());
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = SquareForm {
            name: name.get_untracked(),
            neighborhood_id: neighborhood_id.get_untracked(),
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
                    <h3>{if is_edit { "تعديل المربع" } else { "إضافة مربع جديد" }}</h3>
                    <button class="btn-close" on:click=move |_| on_cancel.run(())>"×"</button>
                </div>

                <form on:submit=on_submit>
                    <div class="form-grid">
                        <div class="form-group">
                            <Label>"اسم المربع"</Label>
                            <Input value=name placeholder="أدخل اسم المربع" />
                        </div>
                        <div class="form-group">
                            <Label>"الحي"</Label>
                            <Select value=neighborhood_id>
                                <option value="">"اختر الحي"</option>
                                {neighborhoods
                                    .into_iter()
                                    .map(|n| view! { <option value=n.id.clone()>{n.name.clone()}</option> })
                                    .collect_view()}
                            </Select>
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
