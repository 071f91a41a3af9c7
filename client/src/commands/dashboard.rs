//! Dashboard Command

use tracing::warn;

use super::Rendered;
use crate::render;
use crate::view::{flow, Notification, RecentUsersPage};
use crate::AppState;

/// Stat cards, the weekly chart and the recent sign-ups.
///
/// Each panel loads independently; one failing leaves the others rendered.
pub async fn dashboard(state: &AppState) -> Rendered {
    let mut sections = Vec::new();
    let mut notifications = Vec::new();

    match state.api.dashboard_stats().await {
        Ok(envelope) => sections.push(render::stat_cards(&envelope.data)),
        Err(e) => {
            warn!("Dashboard stats unavailable: {}", e);
            notifications.push(Notification::error(e.to_string()));
        }
    }

    match state.api.weekly_activities().await {
        Ok(envelope) => sections.push(render::activity_chart(&envelope.data)),
        Err(e) => {
            warn!("Weekly activity unavailable: {}", e);
            notifications.push(Notification::error(e.to_string()));
        }
    }

    let page = RecentUsersPage::mount();
    flow::load(&page.handle(), state.api.recent_users()).await;
    let recent = {
        let s = page.state();
        render::recent_users(&s.visible().into_iter().cloned().collect::<Vec<_>>())
    };
    sections.push(recent);
    notifications.extend(page.update(|s| s.take_notifications()));

    Rendered::new(sections.join("\n\n"), notifications)
}
