//! Admin Commands
//!
//! One async entry point per front-end action. Each mounts the page it needs,
//! runs the load or mutation flow against it, and returns the rendered view
//! together with the notifications raised along the way.

pub mod auth;
pub mod dashboard;
pub mod matches;
pub mod users;
pub mod verification;

use crate::view::Notification;

/// Output of one command: the rendered page plus transient notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub output: String,
    pub notifications: Vec<Notification>,
}

impl Rendered {
    pub fn new(output: impl Into<String>, notifications: Vec<Notification>) -> Self {
        Self {
            output: output.into(),
            notifications,
        }
    }

    /// Nothing to render, only a message.
    pub fn notice(notification: Notification) -> Self {
        Self::new(String::new(), vec![notification])
    }

    /// Whether any notification is an error.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.notifications.iter().any(Notification::is_error)
    }
}

/// List query shared by the list commands.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Free-text filter applied after loading.
    pub search: Option<String>,
    /// Record to open in the detail panel.
    pub show: Option<String>,
}

impl ListQuery {
    fn search(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }
}
