//! Verification Commands

use dash_common::{UpdateVerification, VerificationStatus};
use tracing::warn;

use super::{ListQuery, Rendered};
use crate::render;
use crate::view::{flow, Notification, Review, VerificationPage};
use crate::AppState;

/// Reviewer's decision on a verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    #[must_use]
    pub const fn status(self) -> VerificationStatus {
        match self {
            Self::Approve => VerificationStatus::Approved,
            Self::Reject => VerificationStatus::Rejected,
        }
    }
}

fn render_page(page: &VerificationPage) -> Rendered {
    let output = {
        let s = page.state();
        let mut out = render::verifications_table(&s);
        if let Some(v) = s.selected() {
            out.push_str("\n\n");
            out.push_str(&render::verification_detail(v));
        }
        out
    };
    Rendered::new(output, page.update(|s| s.take_notifications()))
}

/// List pending verifications.
pub async fn list_verifications(state: &AppState, query: ListQuery) -> Rendered {
    let page = VerificationPage::mount();
    page.update(|s| s.set_query(query.search()));
    flow::load(&page.handle(), state.api.list_pending_verifications()).await;

    if let Some(id) = &query.show {
        page.update(|s| {
            if !s.select(id) {
                s.notify(Notification::error(format!("No verification for user {id}")));
            }
        });
    }
    render_page(&page)
}

/// Approve or reject one verification.
///
/// Refuses before touching the list when no update endpoint is configured.
pub async fn review(
    state: &AppState,
    id: &str,
    decision: Decision,
    reason: Option<String>,
) -> Rendered {
    if let Err(e) = state.api.ensure_verification_update() {
        warn!("Cannot review verification {}: {}", id, e);
        return Rendered::notice(Notification::error(e.to_string()));
    }

    let page = VerificationPage::mount();
    flow::load(&page.handle(), state.api.list_pending_verifications()).await;
    if page.state().notifications().iter().any(Notification::is_error) {
        return render_page(&page);
    }

    let reason = reason.map(|r| r.trim().to_string()).filter(|r| !r.is_empty());
    let update = UpdateVerification {
        id: id.to_string(),
        status: decision.status(),
        reason: reason.clone(),
    };

    page.update(|s| s.select(id));
    flow::mutate(
        &page.handle(),
        id,
        Review::new(update.status, reason.unwrap_or_default()),
        || state.api.update_verification(&update),
    )
    .await;
    render_page(&page)
}
