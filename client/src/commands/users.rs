//! User Commands

use dash_common::{User, UserStatus};

use super::{ListQuery, Rendered};
use crate::render;
use crate::view::{flow, Notification, PageState, UsersPage};
use crate::AppState;

fn render_page(page: &UsersPage) -> Rendered {
    let output = {
        let s = page.state();
        view(&s)
    };
    Rendered::new(output, page.update(|s| s.take_notifications()))
}

fn view(state: &PageState<User, UserStatus>) -> String {
    let mut out = render::users_table(state);
    if let Some(user) = state.selected() {
        out.push_str("\n\n");
        out.push_str(&render::user_detail(user));
    }
    out
}

fn select(page: &UsersPage, id: &str) {
    page.update(|s| {
        if !s.select(id) {
            s.notify(Notification::error(format!("No user with id {id}")));
        }
    });
}

/// List users, optionally filtered and with one opened.
pub async fn list_users(state: &AppState, query: ListQuery) -> Rendered {
    let page = UsersPage::mount();
    page.update(|s| s.set_query(query.search()));
    flow::load(&page.handle(), state.api.list_users()).await;

    if let Some(id) = &query.show {
        select(&page, id);
    }
    render_page(&page)
}

/// Change a user's status and show the user afterwards.
pub async fn set_user_status(state: &AppState, id: &str, status: UserStatus) -> Rendered {
    let page = UsersPage::mount();
    flow::load(&page.handle(), state.api.list_users()).await;
    if page.state().notifications().iter().any(Notification::is_error) {
        return render_page(&page);
    }

    page.update(|s| s.select(id));
    flow::mutate(&page.handle(), id, status, || {
        state.api.update_user_status(id, status)
    })
    .await;
    render_page(&page)
}
