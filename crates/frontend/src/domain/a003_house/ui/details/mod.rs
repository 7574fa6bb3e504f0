use contracts::domain::a002_square::Square;
use contracts::domain::a003_house::aggregate::parse_amount_input;
use contracts::domain::a003_house::{House, HouseForm};
use contracts::domain::a004_payment_type::{PaymentType, TariffTable};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_house::api;
use crate::shared::crud::Mutation;
use crate::shared::dialogs::alert;
use crate::shared::number_format::format_number;

const CREATE_FAILED: &str = "حدث خطأ في إضافة المنزل";
const UPDATE_FAILED: &str = "حدث خطأ في تحديث المنزل";

/// Label of a meter option: `<name> - <amount> جنيه`.
fn meter_option_label(name: &str, amount: f64) -> String {
    format!("{} - {} جنيه", name, format_number(amount))
}

#[component]
pub fn HouseDetails(
    editing: Option<House>,
    squares: Vec<Square>,
    on_saved: Callback<Option<Vec<House>>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let initial = editing
        .as_ref()
        .map(HouseForm::from_entity)
        .unwrap_or_default();

    let house_number = RwSignal::new(initial.house_number);
    let owner_name = RwSignal::new(initial.owner_name);
    let owner_phone = RwSignal::new(initial.owner_phone);
    let square_id = RwSignal::new(initial.square_id);
    let payment_type = RwSignal::new(initial.payment_type.as_str().to_string());
    let amount = RwSignal::new(initial.required_amount.to_string());
    let is_occupied = RwSignal::new(initial.is_occupied);
    let has_paid = RwSignal::new(initial.has_paid);

    let editing_id = StoredValue::new(editing.map(|h| h.id));
    let is_edit = editing_id.with_value(|id| id.is_some());
    let (is_saving, set_is_saving) = signal(false);
    let tariffs = TariffTable::default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = HouseForm {
            house_number: house_number.get_untracked(),
            owner_name: owner_name.get_untracked(),
            owner_phone: owner_phone.get_untracked(),
            is_occupied: is_occupied.get_untracked(),
            has_paid: has_paid.get_untracked(),
            payment_type: PaymentType::from_key(&payment_type.get_untracked())
                .unwrap_or(PaymentType::SmallMeter),
            required_amount: parse_amount_input(&amount.get_untracked()),
            square_id: square_id.get_untracked(),
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
            <div class="modal-content modal-content--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{if is_edit { "تعديل المنزل" } else { "إضافة منزل جديد" }}</h3>
                    <button class="btn-close" on:click=move |_| on_cancel.run(())>"×"</button>
                </div>

                <form on:submit=on_submit>
                    <div class="form-grid form-grid--two">
                        <div class="form-group">
                            <Label>"رقم المنزل"</Label>
                            <Input value=house_number placeholder="أدخل رقم المنزل" />
                        </div>
                        <div class="form-group">
                            <Label>"المربع"</Label>
                            <Select value=square_id>
                                <option value="">"اختر المربع"</option>
                                {squares
                                    .iter()
                                    .map(|s| view! { <option value=s.id.clone()>{s.label()}</option> })
                                    .collect_view()}
                            </Select>
                        </div>
                        <div class="form-group">
                            <Label>"اسم المالك"</Label>
                            <Input value=owner_name placeholder="أدخل اسم المالك" />
                        </div>
                        <div class="form-group">
                            <Label>"رقم الهاتف"</Label>
                            <Input value=owner_phone placeholder="أدخل رقم الهاتف" />
                        </div>
                        <div class="form-group">
                            <Label>"نوع العداد"</Label>
                            <Select value=payment_type>
                                {tariffs
                                    .entries()
                                    .iter()
                                    .map(|t| {
                                        view! {
                                            <option value=t.id.as_str()>
                                                {meter_option_label(&t.name, t.amount)}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </Select>
                        </div>
                        <div class="form-group">
                            <Label>"المبلغ المطلوب"</Label>
                            <Input
                                value=amount
                                input_type=InputType::Number
                                placeholder="أدخل المبلغ المطلوب"
                            />
                        </div>
                    </div>

                    <div class="form-checks">
                        <Checkbox checked=is_occupied label="المنزل مأهول" />
                        <Checkbox checked=has_paid label="تم الدفع" />
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
