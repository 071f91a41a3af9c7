//! Text Rendering
//!
//! Pure functions from state to text: stat cards, the activity chart, list
//! tables and detail panels. Nothing here performs I/O.

mod dashboard;
mod detail;
mod tables;

pub use dashboard::{activity_chart, recent_users, stat_cards};
pub use detail::{match_detail, user_detail, verification_detail};
pub use tables::{matches_table, users_table, verifications_table};

use chrono::{DateTime, Utc};

use crate::view::{Notification, NotificationKind};

/// Placeholder for values the backend left out.
pub const MISSING: &str = "-";

/// `Jan 15, 2024`, or `-` when absent.
#[must_use]
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map_or_else(|| MISSING.to_string(), |d| d.format("%b %-d, %Y").to_string())
}

/// `24521` -> `24,521`.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// One line per notification.
#[must_use]
pub fn notifications(items: &[Notification]) -> String {
    items
        .iter()
        .map(|n| match n.kind {
            NotificationKind::Success => format!("✓ {}", n.message),
            NotificationKind::Error => format!("✗ {}", n.message),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, to: usize) -> String {
    let mut out = s.to_string();
    out.extend(std::iter::repeat(' ').take(to.saturating_sub(width(s))));
    out
}

/// Column-aligned table with a header rule.
struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Rows of shaded cells shown while the list is loading.
    fn skeleton(&mut self, rows: usize) {
        for _ in 0..rows {
            let row = self.headers.iter().map(|h| "░".repeat(width(h).max(6))).collect();
            self.rows.push(row);
        }
    }

    fn render(&self, empty: &str) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| width(h)).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(width(cell));
            }
        }

        let line = |cells: Vec<String>| {
            cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| pad(c, *w))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut out = vec![
            line(self.headers.iter().map(ToString::to_string).collect()),
            widths.iter().map(|w| "─".repeat(*w)).collect::<Vec<_>>().join("  "),
        ];
        if self.rows.is_empty() {
            out.push(empty.to_string());
        }
        out.extend(self.rows.iter().map(|r| line(r.clone())));
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_date() {
        let d = Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(format_date(Some(d)), "Jan 5, 2024");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(127), "127");
        assert_eq!(group_thousands(8234), "8,234");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_table_aligns_columns() {
        let mut table = Table::new(vec!["Name", "Status"]);
        table.push(vec!["Sarah Johnson".into(), "active".into()]);
        table.push(vec!["Al".into(), "banned".into()]);
        let text = table.render("empty");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name           Status");
        assert_eq!(lines[2], "Sarah Johnson  active");
        assert_eq!(lines[3], "Al             banned");
    }

    #[test]
    fn test_empty_table_shows_message() {
        let table = Table::new(vec!["Name"]);
        assert!(table.render("No users found").ends_with("No users found"));
    }

    #[test]
    fn test_notifications_are_marked() {
        let text = notifications(&[
            Notification::success("User status updated"),
            Notification::error("forbidden"),
        ]);
        assert_eq!(text, "✓ User status updated\n✗ forbidden");
    }
}
