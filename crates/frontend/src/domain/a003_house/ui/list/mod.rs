use contracts::domain::a002_square::Square;
use contracts::domain::a003_house::House;
use contracts::domain::a004_payment_type::TariffTable;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_square::api as square_api;
use crate::domain::a003_house::api;
use crate::domain::a003_house::ui::details::HouseDetails;
use crate::shared::components::loading::{EmptyState, LoadingState};
use crate::shared::components::page_header::PageHeader;
use crate::shared::crud::{ListState, Mutation};
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, highlight_matches, SearchInput, Searchable};
use crate::shared::number_format::format_money;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const DELETE_CONFIRM: &str = "هل أنت متأكد من حذف هذا المنزل؟";
const DELETE_FAILED: &str = "حدث خطأ في حذف المنزل";

impl Searchable for House {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.house_number.as_str(),
            self.owner_name.as_str(),
            self.owner_phone.as_str(),
        ];
        fields.extend(self.square_name());
        fields.extend(self.neighborhood_name());
        fields
    }
}

/// `<square> - <neighborhood>` line under the card title.
fn location_line(house: &House) -> String {
    format!(
        "{} - {}",
        house.square_name().unwrap_or_default(),
        house.neighborhood_name().unwrap_or_default()
    )
}

/// Owned display values for one house card, computed before `view!`.
#[derive(Debug, Clone, PartialEq)]
struct HouseCardText {
    meter: String,
    amount: String,
    payment: &'static str,
    occupancy: &'static str,
}

impl HouseCardText {
    fn new(house: &House, tariffs: &TariffTable) -> Self {
        Self {
            meter: tariffs.name_of(house.payment_type).to_string(),
            amount: format_money(house.amount_or_zero()),
            payment: house.payment_label(),
            occupancy: house.occupancy_label(),
        }
    }
}

#[component]
pub fn HouseList() -> impl IntoView {
    let state = RwSignal::new(ListState::<House>::default());
    let squares: RwSignal<Vec<Square>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let (show_form, set_show_form) = signal(false);
    let editing: RwSignal<Option<House>> = RwSignal::new(None);
    let tariffs = StoredValue::new(TariffTable::default());

    spawn_local(async move {
        let result = api::service().list().await;
        state.update(|s| s.finish_load(result, "houses"));
    });
    // Squares come with their neighborhood embedded, enough for the select labels.
    spawn_local(async move {
        match square_api::service().list().await {
            Ok(items) => squares.set(items),
            Err(e) => log::error!("Error fetching squares: {}", e),
        }
    });

    let open_form = move |target: Option<House>| {
        editing.set(target);
        set_show_form.set(true);
    };
    let close_form = move || {
        set_show_form.set(false);
        editing.set(None);
    };
    let on_saved = Callback::new(move |items: Option<Vec<House>>| {
        state.update(|s| s.finish_mutation(items));
        close_form();
    });
    let on_cancel = Callback::new(move |_: ()| close_form());

    let delete = move |id: String| {
        if !confirm(DELETE_CONFIRM) {
            return;
        }
        spawn_local(async move {
            match api::service().apply(Mutation::Delete(&id)).await {
                Ok(items) => state.update(|s| s.finish_mutation(items)),
                Err(e) => alert(&e.user_message(DELETE_FAILED)),
            }
        });
    };

    let visible = Memo::new(move |_| state.with(|s| filter_list(&s.items, &search.get())));

    view! {
        <PageFrame page_id="a003_house--list" category=PAGE_CAT_LIST>
            <PageHeader title="إدارة المنازل" subtitle="إضافة وتعديل وحذف المنازل">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(None)>
                    {icon("plus")}
                    " إضافة منزل"
                </Button>
            </PageHeader>

            <div class="page__content">
                <SearchInput value=search placeholder="البحث عن المنازل..." />

                {move || {
                    if state.with(|s| s.loading) {
                        view! { <LoadingState /> }.into_any()
                    } else if visible.with(|v| v.is_empty()) {
                        view! { <EmptyState message="لا توجد منازل" icon_name="home" /> }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                <For
                                    each=move || visible.get()
                                    key=|h| (h.id.clone(), h.updated_at.clone())
                                    children=move |house: House| {
                                        let id = house.id.clone();
                                        let title = format!("منزل رقم {}", house.house_number);
                                        let location = location_line(&house);
                                        let owner = house.owner_name.clone();
                                        let phone = house.owner_phone.clone();
                                        let text = tariffs.with_value(|t| HouseCardText::new(&house, t));
                                        let paid_color = if house.has_paid { BadgeColor::Success } else { BadgeColor::Danger };
                                        let occupied_color = if house.is_occupied { BadgeColor::Success } else { BadgeColor::Informative };
                                        let for_edit = house.clone();
                                        view! {
                                            <div class="entity-card">
                                                <Card>
                                                    <div class="entity-card__header">
                                                        <div class="entity-card__title">
                                                            {icon("home")}
                                                            <div>
                                                                <h3>{move || highlight_matches(&title, &search.get())}</h3>
                                                                <span class="entity-card__meta">
                                                                    {move || highlight_matches(&location, &search.get())}
                                                                </span>
                                                            </div>
                                                        </div>
                                                        <div class="entity-card__actions">
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| open_form(Some(for_edit.clone()))
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| delete(id.clone())
                                                            >
                                                                {icon("trash")}
                                                            </Button>
                                                        </div>
                                                    </div>
                                                    <dl class="entity-card__body entity-card__fields">
                                                        <dt>"المالك:"</dt>
                                                        <dd>{move || highlight_matches(&owner, &search.get())}</dd>
                                                        <dt>"الهاتف:"</dt>
                                                        <dd>{move || highlight_matches(&phone, &search.get())}</dd>
                                                        <dt>"نوع العداد:"</dt>
                                                        <dd>{text.meter}</dd>
                                                        <dt>"المبلغ:"</dt>
                                                        <dd>{text.amount}</dd>
                                                        <dt>"الحالة:"</dt>
                                                        <dd>
                                                            <Badge appearance=BadgeAppearance::Tint color=paid_color>
                                                                {text.payment}
                                                            </Badge>
                                                        </dd>
                                                        <dt>"الإشغال:"</dt>
                                                        <dd>
                                                            <Badge appearance=BadgeAppearance::Tint color=occupied_color>
                                                                {text.occupancy}
                                                            </Badge>
                                                        </dd>
                                                    </dl>
                                                </Card>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        }
                        .into_any()
                    }
                }}

                <Show when=move || show_form.get()>
                    {move || view! {
                        <HouseDetails
                            editing=editing.get_untracked()
                            squares=squares.get_untracked()
                            on_saved=on_saved
                            on_cancel=on_cancel
                        />
                    }}
                </Show>
            </div>
        </PageFrame>
    }
}
