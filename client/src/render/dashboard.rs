//! Dashboard Components

use dash_common::{DashboardStats, RecentUser, WeeklyActivity};

use super::{format_date, group_thousands, pad, width};

const CARD_WIDTH: usize = 22;
const BAR_WIDTH: usize = 30;

fn card(title: &str, value: u64) -> [String; 4] {
    let inner = CARD_WIDTH - 2;
    [
        format!("┌{}┐", "─".repeat(inner)),
        format!("│{}│", pad(&format!(" {title}"), inner)),
        format!("│{}│", pad(&format!(" {}", group_thousands(value)), inner)),
        format!("└{}┘", "─".repeat(inner)),
    ]
}

/// The four counter cards, side by side.
#[must_use]
pub fn stat_cards(stats: &DashboardStats) -> String {
    let cards = [
        card("Total Users", stats.users),
        card("Matches", stats.matches),
        card("Support Tickets", stats.support_tickets),
        card("Verifications", stats.verification),
    ];
    (0..4)
        .map(|row| {
            cards
                .iter()
                .map(|c| c[row].as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bar(value: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let len = ((value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.max(usize::from(value > 0)))
}

/// Horizontal bars for users and matches per day, scaled to the largest value.
#[must_use]
pub fn activity_chart(points: &[WeeklyActivity]) -> String {
    if points.is_empty() {
        return "Weekly Activity\nNo activity recorded".to_string();
    }

    let max = points
        .iter()
        .flat_map(|p| [p.users, p.matches])
        .max()
        .unwrap_or(0);
    let label_width = points.iter().map(|p| width(&p.name)).max().unwrap_or(0);

    let mut lines = vec!["Weekly Activity".to_string()];
    for p in points {
        lines.push(format!(
            "{} users   {} {}",
            pad(&p.name, label_width),
            pad(&bar(p.users, max), BAR_WIDTH),
            p.users
        ));
        lines.push(format!(
            "{} matches {} {}",
            pad("", label_width),
            pad(&bar(p.matches, max), BAR_WIDTH),
            p.matches
        ));
    }
    lines.join("\n")
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// Recent signups, newest first as the backend orders them.
#[must_use]
pub fn recent_users(users: &[RecentUser]) -> String {
    let mut lines = vec!["Recent Users".to_string()];
    if users.is_empty() {
        lines.push("No recent signups".to_string());
    }
    for u in users {
        lines.push(format!(
            "[{}] {} <{}>  joined {}",
            pad(&initials(&u.full_name), 2),
            u.full_name,
            u.email,
            format_date(u.timestamps.created_at())
        ));
    }
    lines.join("\n")
}
