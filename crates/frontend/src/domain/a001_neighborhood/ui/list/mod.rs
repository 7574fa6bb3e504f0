use contracts::domain::a001_neighborhood::Neighborhood;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_neighborhood::api;
use crate::domain::a001_neighborhood::ui::details::NeighborhoodDetails;
use crate::shared::components::loading::{EmptyState, LoadingState};
use crate::shared::components::page_header::PageHeader;
use crate::shared::crud::{ListState, Mutation};
use crate::shared::date_utils::format_date;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, highlight_matches, SearchInput, Searchable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const DELETE_CONFIRM: &str =
    "هل أنت متأكد من حذف هذا الحي؟ سيتم حذف جميع المربعات والمنازل المرتبطة به.";
const DELETE_FAILED: &str = "حدث خطأ في حذف الحي";

impl Searchable for Neighborhood {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

#[component]
pub fn NeighborhoodList() -> impl IntoView {
    let state = RwSignal::new(ListState::<Neighborhood>::default());
    let search = RwSignal::new(String::new());
    let (show_form, set_show_form) = signal(false);
    let editing: RwSignal<Option<Neighborhood>> = RwSignal::new(None);

    let load = move || {
        state.update(|s| s.loading = true);
        spawn_local(async move {
            let result = api::service().list().await;
            state.update(|s| s.finish_load(result, "neighborhoods"));
        });
    };
    load();

    let open_form = move |target: Option<Neighborhood>| {
        editing.set(target);
        set_show_form.set(true);
    };
    let close_form = move || {
        set_show_form.set(false);
        editing.set(None);
    };
    let on_saved = Callback::new(move |items: Option<Vec<Neighborhood>>| {
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
        <PageFrame page_id="a001_neighborhood--list" category=PAGE_CAT_LIST>
            <PageHeader title="إدارة الأحياء" subtitle="إضافة وتعديل وحذف الأحياء">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(None)>
                    {icon("plus")}
                    " إضافة حي"
                </Button>
            </PageHeader>

            <div class="page__content">
                <SearchInput value=search placeholder="البحث عن الأحياء..." />

                {move || {
                    if state.with(|s| s.loading) {
                        view! { <LoadingState /> }.into_any()
                    } else if visible.with(|v| v.is_empty()) {
                        view! { <EmptyState message="لا توجد أحياء" icon_name="map-pin" /> }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                <For
                                    each=move || visible.get()
                                    key=|n| (n.id.clone(), n.updated_at.clone())
                                    children=move |n: Neighborhood| {
                                        let id = n.id.clone();
                                        let name = n.name.clone();
                                        let for_edit = n.clone();
                                        view! {
                                            <div class="entity-card">
                                                <Card>
                                                    <div class="entity-card__header">
                                                        <div class="entity-card__title">
                                                            {icon("map-pin")}
                                                            <div>
                                                                <h3>{move || highlight_matches(&name, &search.get())}</h3>
                                                                <span class="entity-card__meta">
                                                                    "تم الإنشاء: " {format_date(&n.created_at)}
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
                                                        <p>"المعرف: " {n.id.clone()}</p>
                                                        <p>"آخر تحديث: " {format_date(&n.updated_at)}</p>
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
                        <NeighborhoodDetails
                            editing=editing.get_untracked()
                            on_saved=on_saved
                            on_cancel=on_cancel
                        />
                    }}
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighborhood(id: &str, name: &str) -> Neighborhood {
        Neighborhood {
            id: id.into(),
            name: name.into(),
            created_at: "2024-01-01T00:00:00Z".into(),
            updated_at: "2024-01-01T00:00:00Z".into(),
            squares: None,
        }
    }

    #[test]
    fn test_search_by_name() {
        let items = vec![neighborhood("1", "الرياض"), neighborhood("2", "Al Amarat")];
        assert_eq!(filter_list(&items, "amarat"), vec![items[1].clone()]);
        assert_eq!(filter_list(&items, "الري"), vec![items[0].clone()]);
        assert_eq!(filter_list(&items, ""), items);
    }
}
