use contracts::domain::a004_payment_type::{PaymentType, PaymentTypeConfig, TariffTable};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const NOTES: [&str; 4] = [
    "يمكن تعديل مبالغ أنواع الدفع المختلفة حسب الحاجة",
    "التغييرات ستؤثر على المنازل الجديدة فقط",
    "المنازل الموجودة ستحتفظ بالمبالغ المحفوظة مسبقاً",
    "تأكد من صحة المبالغ قبل الحفظ",
];

/// Tariff editor. Amounts live in the page state only.
#[component]
pub fn PaymentTypeList() -> impl IntoView {
    let table = RwSignal::new(TariffTable::default());
    let editing: RwSignal<Option<PaymentType>> = RwSignal::new(None);
    let edit_amount = RwSignal::new(String::new());
    let (edit_error, set_edit_error) = signal(None::<String>);

    let start_edit = move |id: PaymentType| {
        let current = table.with_untracked(|t| t.get(id).map(|e| e.amount).unwrap_or_default());
        edit_amount.set(current.to_string());
        set_edit_error.set(None);
        editing.set(Some(id));
    };
    let cancel_edit = move || {
        editing.set(None);
        edit_amount.set(String::new());
        set_edit_error.set(None);
    };
    let save_edit = move || {
        let Some(id) = editing.get_untracked() else {
            return;
        };
        let input = edit_amount.get_untracked();
        let mut result = Ok(0.0);
        table.update(|t| result = t.update_amount(id, &input));
        match result {
            Ok(amount) => {
                log::debug!("tariff {} set to {}", id, amount);
                cancel_edit();
            }
            // Invalid input keeps the editor open.
            Err(msg) => set_edit_error.set(Some(msg)),
        }
    };

    let render_card = move |entry: PaymentTypeConfig| {
        let id = entry.id;
        let swatch = format!("background-color: {}", entry.color);
        let color_style = format!("color: {}", entry.color);
        let is_editing = move || editing.get() == Some(id);
        let amount = move || {
            table.with(|t| t.get(id).map(|e| format_money(e.amount)).unwrap_or_default())
        };

        view! {
            <div class="entity-card">
                <Card>
                    <div class="entity-card__header">
                        <div class="entity-card__title">
                            <div>
                                <h3>{entry.name.clone()}</h3>
                                <span class="entity-card__meta">"نوع العداد: " {id.as_str()}</span>
                            </div>
                        </div>
                        <span class="tariff-card__swatch" style=swatch.clone()></span>
                    </div>
                    <div class="entity-card__body">
                        <Label>"المبلغ المطلوب (جنيه سوداني)"</Label>
                        <Show
                            when=is_editing
                            fallback=move || view! {
                                <div class="tariff-card__row">
                                    <span class="tariff-card__amount">{amount}</span>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| start_edit(id)
                                    >
                                        {icon("edit")}
                                    </Button>
                                </div>
                            }
                        >
                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                <Input value=edit_amount input_type=InputType::Number />
                                <Button appearance=ButtonAppearance::Primary on_click=move |_| save_edit()>
                                    {icon("check")}
                                </Button>
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| cancel_edit()>
                                    {icon("x")}
                                </Button>
                            </Flex>
                            {move || edit_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                        </Show>
                        <div class="tariff-card__info">
                            <p>"اللون: " <span style=color_style.clone()>{entry.color.clone()}</span></p>
                            <p>"معرف النوع: " <span>{id.as_str()}</span></p>
                        </div>
                    </div>
                </Card>
            </div>
        }
    };

    let entries = table.get_untracked().entries().to_vec();

    view! {
        <PageFrame page_id="a004_payment_type--list" category=PAGE_CAT_LIST>
            <PageHeader title="إدارة أنواع الدفع" subtitle="تعديل مبالغ أنواع الدفع المختلفة" />

            <div class="page__content">
                <div class="card-grid">
                    {entries.into_iter().map(render_card).collect_view()}
                </div>

                <div class="notes-card">
                    <Card>
                        <h3>"ملاحظات مهمة"</h3>
                        <ul>
                            {NOTES.iter().map(|n| view! { <li>{*n}</li> }).collect_view()}
                        </ul>
                    </Card>
                </div>
            </div>
        </PageFrame>
    }
}
