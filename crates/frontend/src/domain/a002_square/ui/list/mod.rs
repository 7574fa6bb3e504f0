use contracts::domain::a001_neighborhood::Neighborhood;
use contracts::domain::a002_square::Square;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_neighborhood::api as neighborhood_api;
use crate::domain::a002_square::api;
use crate::domain::a002_square::export::{export_squares, EXPORT_FAILED};
use crate::domain::a002_square::ui::details::SquareDetails;
use crate::shared::components::loading::{EmptyState, LoadingState};
use crate::shared::components::page_header::PageHeader;
use crate::shared::crud::{ListState, Mutation};
use crate::shared::date_utils::format_date;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, highlight_matches, SearchInput, Searchable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const DELETE_CONFIRM: &str = "هل أنت متأكد من حذف هذا المربع؟ سيتم حذف جميع المنازل المرتبطة به.";
const DELETE_FAILED: &str = "حدث خطأ في حذف المربع";

impl Searchable for Square {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.neighborhood_name());
        fields
    }
}

#[component]
pub fn SquareList() -> impl IntoView {
    let state = RwSignal::new(ListState::<Square>::default());
    let neighborhoods: RwSignal<Vec<Neighborhood>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let (show_form, set_show_form) = signal(false);
    let editing: RwSignal<Option<Square>> = RwSignal::new(None);
    let (exporting, set_exporting) = signal(false);

    spawn_local(async move {
        let result = api::service().list().await;
        state.update(|s| s.finish_load(result, "squares"));
    });
    spawn_local(async move {
        match neighborhood_api::service().list().await {
            Ok(items) => neighborhoods.set(items),
            Err(e) => log::error!("Error fetching neighborhoods: {}", e),
        }
    });

    let open_form = move |target: Option<Square>| {
        editing.set(target);
        set_show_form.set(true);
    };
    let close_form = move || {
        set_show_form.set(false);
        editing.set(None);
    };
    let on_saved = Callback::new(move |items: Option<Vec<Square>>| {
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

    let run_export = move || {
        set_exporting.set(true);
        spawn_local(async move {
            if let Err(e) = export_squares().await {
                log::error!("Error exporting to Excel: {}", e);
                alert(EXPORT_FAILED);
            }
            set_exporting.set(false);
        });
    };

    let visible = Memo::new(move |_| state.with(|s| filter_list(&s.items, &search.get())));

    view! {
        <PageFrame page_id="a002_square--list" category=PAGE_CAT_LIST>
            <PageHeader title="إدارة المربعات" subtitle="إضافة وتعديل وحذف المربعات">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| run_export()
                    disabled=Signal::derive(move || exporting.get())
                >
                    {icon("download")}
                    " تصدير إلى Excel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(None)>
                    {icon("plus")}
                    " إضافة مربع"
                </Button>
            </PageHeader>

            <div class="page__content">
                <SearchInput value=search placeholder="البحث عن المربعات..." />

                {move || {
                    if state.with(|s| s.loading) {
                        view! { <LoadingState /> }.into_any()
                    } else if visible.with(|v| v.is_empty()) {
                        view! { <EmptyState message="لا توجد مربعات" icon_name="grid" /> }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                <For
                                    each=move || visible.get()
                                    key=|s| (s.id.clone(), s.updated_at.clone())
                                    children=move |square: Square| {
                                        let id = square.id.clone();
                                        let name = square.name.clone();
                                        let nbhd = square.neighborhood_name().unwrap_or_default().to_string();
                                        let house_count = square.houses.as_ref().map(Vec::len);
                                        let for_edit = square.clone();
                                        view! {
                                            <div class="entity-card">
                                                <Card>
                                                    <div class="entity-card__header">
                                                        <div class="entity-card__title">
                                                            {icon("grid")}
                                                            <div>
                                                                <h3>{move || highlight_matches(&name, &search.get())}</h3>
                                                                <span class="entity-card__meta">
                                                                    "الحي: " {move || highlight_matches(&nbhd, &search.get())}
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
                                                    <div class="entity-card__body">
                                                        {house_count.map(|count| view! {
                                                            <p>"عدد المنازل: " {count}</p>
                                                        })}
                                                        <p>"تم الإنشاء: " {format_date(&square.created_at)}</p>
                                                        <p>"آخر تحديث: " {format_date(&square.updated_at)}</p>
                                                    </div>
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
                        <SquareDetails
                            editing=editing.get_untracked()
                            neighborhoods=neighborhoods.get_untracked()
                            on_saved=on_saved
                            on_cancel=on_cancel
                        />
                    }}
                </Show>
            </div>
        </PageFrame>
    }
}
