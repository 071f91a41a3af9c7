//! List Tables

use dash_common::{Match, MatchStatus, PendingVerification, Record, Searchable, User, UserStatus};

use super::{format_date, Table};
use crate::view::{PageState, Review};

const SKELETON_ROWS: usize = 3;

fn heading<T: Record + Searchable, F: Clone>(title: &str, state: &PageState<T, F>) -> String {
    let shown = state.visible().len();
    let total = state.records().len();
    let query = state.query().trim();
    if query.is_empty() {
        format!("{title} ({total})")
    } else {
        format!("{title} ({shown} of {total} matching \"{query}\")")
    }
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

fn with_pending<T: Record + Searchable, F: Clone>(state: &PageState<T, F>, id: &str, value: String) -> String {
    if state.snapshot().is_pending(id) {
        format!("{value} (saving)")
    } else {
        value
    }
}

#[must_use]
pub fn users_table(state: &PageState<User, UserStatus>) -> String {
    let mut table = Table::new(vec!["#", "Name", "Email", "Status", "Plan", "Verified", "Joined"]);

    if state.is_loading() {
        table.skeleton(SKELETON_ROWS);
        return format!("Users\n{}", table.render(""));
    }

    for (i, user) in state.visible().into_iter().enumerate() {
        table.push(vec![
            (i + 1).to_string(),
            user.full_name.clone(),
            user.email.clone(),
            with_pending(state, &user.id, user.status.to_string()),
            user.plan.to_string(),
            yes_no(user.is_verified),
            format_date(user.timestamps.created_at()),
        ]);
    }
    format!("{}\n{}", heading("Users", state), table.render("No users found"))
}

#[must_use]
pub fn matches_table(state: &PageState<Match>) -> String {
    let mut table = Table::new(vec!["#", "User 1", "User 2", "Status", "Matched On"]);

    if state.is_loading() {
        table.skeleton(SKELETON_ROWS);
        return format!("Matches\n{}", table.render(""));
    }

    for (i, m) in state.visible().into_iter().enumerate() {
        let status = match m.status() {
            MatchStatus::Matched => "matched",
        };
        table.push(vec![
            (i + 1).to_string(),
            m.full_name1.clone(),
            m.full_name2.clone(),
            status.to_string(),
            format_date(m.timestamps.created_at()),
        ]);
    }
    format!("{}\n{}", heading("Matches", state), table.render("No matches found"))
}

#[must_use]
pub fn verifications_table(state: &PageState<PendingVerification, Review>) -> String {
    let mut table = Table::new(vec!["#", "Name", "Email", "Status", "Reason", "Submitted"]);

    if state.is_loading() {
        table.skeleton(SKELETON_ROWS);
        return format!("Verifications\n{}", table.render(""));
    }

    for (i, v) in state.visible().into_iter().enumerate() {
        table.push(vec![
            (i + 1).to_string(),
            v.full_name.clone(),
            v.email.clone(),
            with_pending(state, v.id(), v.status.to_string()),
            if v.reason.is_empty() { super::MISSING.to_string() } else { v.reason.clone() },
            format_date(v.timestamps.created_at()),
        ]);
    }
    format!(
        "{}\n{}",
        heading("Verifications", state),
        table.render("No pending verifications")
    )
}
