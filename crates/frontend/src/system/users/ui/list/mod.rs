use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::loading::{EmptyState, LoadingState};
use crate::shared::components::page_header::PageHeader;
use crate::shared::crud::{ListState, Mutation};
use crate::shared::date_utils::format_date;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, highlight_matches, SearchInput, Searchable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::users::api;
use crate::system::users::ui::details::UserDetails;

const DELETE_CONFIRM: &str = "هل أنت متأكد من حذف هذا المستخدم؟";
const DELETE_FAILED: &str = "حدث خطأ في حذف المستخدم";

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.username.as_str()]
    }
}

#[component]
pub fn UserList() -> impl IntoView {
    let state = RwSignal::new(ListState::<User>::default());
    let search = RwSignal::new(String::new());
    let (show_form, set_show_form) = signal(false);
    let editing: RwSignal<Option<User>> = RwSignal::new(None);

    spawn_local(async move {
        let result = api::service().list().await;
        state.update(|s| s.finish_load(result, "users"));
    });

    let open_form = move |target: Option<User>| {
        editing.set(target);
        set_show_form.set(true);
    };
    let close_form = move || {
        set_show_form.set(false);
        editing.set(None);
    };
    let on_saved = Callback::new(move |items: Option<Vec<User>>| {
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
        <PageFrame page_id="sys_user--list" category=PAGE_CAT_LIST>
            <PageHeader title="إدارة المستخدمين" subtitle="إضافة وتعديل وحذف المستخدمين">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(None)>
                    {icon("plus")}
                    " إضافة مستخدم"
                </Button>
            </PageHeader>

            <div class="page__content">
                <SearchInput value=search placeholder="البحث عن المستخدمين..." />

                {move || {
                    if state.with(|s| s.loading) {
                        view! { <LoadingState /> }.into_any()
                    } else if visible.with(|v| v.is_empty()) {
                        view! { <EmptyState message="لا توجد مستخدمين" icon_name="users" /> }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                <For
                                    each=move || visible.get()
                                    key=|u| (u.id.clone(), u.updated_at.clone())
                                    children=move |user: User| {
                                        let id = user.id.clone();
                                        let username = user.username.clone();
                                        let for_edit = user.clone();
                                        view! {
                                            <div class="entity-card">
                                                <Card>
                                                    <div class="entity-card__header">
                                                        <div class="entity-card__title">
                                                            <span class="avatar">{user.initial()}</span>
                                                            <div>
                                                                <h3>{move || highlight_matches(&username, &search.get())}</h3>
                                                                <span class="entity-card__meta">
                                                                    "تم الإنشاء: " {format_date(&user.created_at)}
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
                                                        <p>"آخر تحديث: " {format_date(&user.updated_at)}</p>
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
                        <UserDetails
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

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.into(),
            username: name.into(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_search_by_username() {
        let items = vec![user("1", "Admin"), user("2", "cashier"), user("3", "admin2")];
        let found: Vec<String> = filter_list(&items, "ADMIN").into_iter().map(|u| u.id).collect();
        assert_eq!(found, vec!["1", "3"]);
        assert_eq!(filter_list(&items, "").len(), 3);
    }
}
