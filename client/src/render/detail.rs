//! Detail Panels

use dash_common::{Match, PendingVerification, User};

use super::{format_date, pad, width, MISSING};

fn panel(title: &str, fields: &[(&str, String)]) -> String {
    let label_width = fields.iter().map(|(k, _)| width(k)).max().unwrap_or(0);
    let mut lines = vec![title.to_string(), "═".repeat(width(title))];
    lines.extend(
        fields
            .iter()
            .map(|(k, v)| format!("{}  {}", pad(k, label_width), v)),
    );
    lines.join("\n")
}

fn or_missing(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(MISSING)
        .to_string()
}

fn list(values: &[String]) -> String {
    if values.is_empty() {
        MISSING.to_string()
    } else {
        values.join(", ")
    }
}

#[must_use]
pub fn user_detail(user: &User) -> String {
    let verified = [
        ("email", user.is_email_verified),
        ("phone", user.is_phone_number_verified),
        ("identity", user.is_verified),
    ]
    .iter()
    .filter(|(_, v)| *v)
    .map(|(k, _)| *k)
    .collect::<Vec<_>>();

    let preferences = user.preferences.map_or_else(
        || MISSING.to_string(),
        |p| {
            format!(
                "ages {}-{}, within {} km",
                p.age_range.0, p.age_range.1, p.max_distance
            )
        },
    );

    let subscription = user.subscription.as_ref().map_or_else(
        || MISSING.to_string(),
        |s| {
            let mut text = s.status.to_string();
            if let Some(end) = s.current_period_end {
                text.push_str(&format!(" until {}", format_date(Some(end))));
            }
            if s.cancel_at_period_end {
                text.push_str(" (cancels at period end)");
            }
            text
        },
    );

    panel(
        &user.full_name,
        &[
            ("ID", user.id.clone()),
            ("Email", user.email.clone()),
            ("Phone", or_missing(user.phone_number.as_deref())),
            ("Status", user.status.to_string()),
            ("Plan", user.plan.to_string()),
            ("Premium", if user.is_premium { "yes" } else { "no" }.to_string()),
            ("Subscription", subscription),
            (
                "Verified",
                if verified.is_empty() {
                    MISSING.to_string()
                } else {
                    verified.join(", ")
                },
            ),
            ("Bio", or_missing(user.bio.as_deref())),
            ("Preferences", preferences),
            ("Hobbies", list(&user.hobbies)),
            ("Photos", user.photos.len().to_string()),
            ("Last active", format_date(user.last_active)),
            ("Joined", format_date(user.timestamps.created_at())),
        ],
    )
}

#[must_use]
pub fn match_detail(m: &Match) -> String {
    panel(
        &format!("{} & {}", m.full_name1, m.full_name2),
        &[
            ("ID", m.id.clone()),
            ("User 1", m.full_name1.clone()),
            ("Avatar 1", or_missing(m.avatar1.as_deref())),
            ("User 2", m.full_name2.clone()),
            ("Avatar 2", or_missing(m.avatar2.as_deref())),
            ("Status", "matched".to_string()),
            ("Matched on", format_date(m.timestamps.created_at())),
        ],
    )
}

#[must_use]
pub fn verification_detail(v: &PendingVerification) -> String {
    panel(
        &format!("Verification: {}", v.full_name),
        &[
            ("User ID", v.user_id.clone()),
            ("Email", v.email.clone()),
            ("Status", v.status.to_string()),
            ("Reason", or_missing(Some(&v.reason))),
            ("Document", v.document.clone()),
            ("Avatar", or_missing(v.avatar.as_deref())),
            ("Submitted", format_date(v.timestamps.created_at())),
            ("Updated", format_date(v.timestamps.updated_at())),
        ],
    )
}
