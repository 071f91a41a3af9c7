//! Match Commands

use super::{ListQuery, Rendered};
use crate::render;
use crate::view::{flow, MatchesPage, Notification};
use crate::AppState;

/// List matches, optionally filtered and with one opened.
pub async fn list_matches(state: &AppState, query: ListQuery) -> Rendered {
    let page = MatchesPage::mount();
    page.update(|s| s.set_query(query.search()));
    flow::load(&page.handle(), state.api.list_matches()).await;

    if let Some(id) = &query.show {
        page.update(|s| {
            if !s.select(id) {
                s.notify(Notification::error(format!("No match with id {id}")));
            }
        });
    }

    let output = {
        let s = page.state();
        let mut out = render::matches_table(&s);
        if let Some(m) = s.selected() {
            out.push_str("\n\n");
            out.push_str(&render::match_detail(m));
        }
        out
    };
    Rendered::new(output, page.update(|s| s.take_notifications()))
}
