//! Page State
//!
//! What one mounted page holds: the fetched list, the current query and the
//! derived filtered list, a loading flag, the selected record, and transient
//! notifications. A [`Page`] owns its state; async work only ever holds a
//! [`PageHandle`], so a response arriving after the page is dropped is
//! discarded instead of touching dead state.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use dash_common::{Record, Searchable};
use tracing::debug;

use super::filter::filter_indices;
use super::optimistic::{FieldState, Mutable, MutationTicket, Snapshot};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// State of one list page.
#[derive(Debug, Clone)]
pub struct PageState<T, F = ()> {
    snapshot: Snapshot<T, F>,
    query: String,
    filtered: Vec<usize>,
    loading: bool,
    selected: Option<String>,
    notifications: Vec<Notification>,
}

impl<T, F> Default for PageState<T, F> {
    fn default() -> Self {
        Self {
            snapshot: Snapshot::default(),
            query: String::new(),
            filtered: Vec::new(),
            // Pages start in the loading state until the first fetch resolves.
            loading: true,
            selected: None,
            notifications: Vec::new(),
        }
    }
}

impl<T: Record + Searchable, F: Clone> PageState<T, F> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot<T, F> {
        &self.snapshot
    }

    /// Every fetched record, unfiltered.
    #[must_use]
    pub fn records(&self) -> &[T] {
        self.snapshot.records()
    }

    /// Records matching the current query, in list order.
    #[must_use]
    pub fn visible(&self) -> Vec<&T> {
        let records = self.snapshot.records();
        self.filtered.iter().filter_map(|&i| records.get(i)).collect()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Install a fetched list, or report why it could not be fetched. A failed
    /// reload keeps whatever was fetched before.
    pub fn finish_load(&mut self, result: Result<Vec<T>, ApiError>) {
        match result {
            Ok(records) => {
                debug!(count = records.len(), "Page loaded");
                self.replace(Snapshot::new(records));
            }
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
        self.loading = false;
    }

    /// Toggle selection: selecting the selected record clears it. Returns
    /// whether a record is selected afterwards.
    pub fn select(&mut self, id: &str) -> bool {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else if self.snapshot.get(id).is_some() {
            self.selected = Some(id.to_string());
        }
        self.selected.is_some()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected record as it currently stands in the list.
    #[must_use]
    pub fn selected(&self) -> Option<&T> {
        self.selected
            .as_deref()
            .and_then(|id| self.snapshot.get(id))
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drain pending notifications once they have been shown.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn replace(&mut self, snapshot: Snapshot<T, F>) {
        self.snapshot = snapshot;
        if self
            .selected
            .as_deref()
            .is_some_and(|id| self.snapshot.get(id).is_none())
        {
            self.selected = None;
        }
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(self.snapshot.records(), &self.query);
    }
}

impl<T: Mutable + Searchable> PageState<T, T::Field> {
    /// Apply a change optimistically. `None` (with an error notification) when
    /// the record is not on this page.
    pub fn trigger(&mut self, id: &str, target: T::Field) -> Option<MutationTicket<T::Field>> {
        match self.snapshot.trigger(id, target) {
            Some((snapshot, ticket)) => {
                self.replace(snapshot);
                Some(ticket)
            }
            None => {
                self.notify(Notification::error(format!("No record with id {id}")));
                None
            }
        }
    }

    /// Reconcile or roll back once the backend answered.
    pub fn resolve(
        &mut self,
        ticket: &MutationTicket<T::Field>,
        result: Result<(String, Option<T::Update>), ApiError>,
    ) -> Notification {
        let notification = match result {
            Ok((message, update)) => {
                let snapshot = self.snapshot.succeed(ticket, update.as_ref());
                self.replace(snapshot);
                Notification::success(message)
            }
            Err(e) => {
                let snapshot = self.snapshot.fail(ticket);
                self.replace(snapshot);
                Notification::error(e.to_string())
            }
        };
        self.notify(notification.clone());
        notification
    }

    #[must_use]
    pub fn field_state(&self, id: &str) -> Option<FieldState<T::Field>> {
        self.snapshot.field_state(id)
    }
}

/// A mounted page. Dropping it unmounts the page.
#[derive(Debug)]
pub struct Page<T, F = ()> {
    state: Rc<RefCell<PageState<T, F>>>,
}

impl<T, F> Default for Page<T, F> {
    fn default() -> Self {
        Self {
            state: Rc::new(RefCell::new(PageState::default())),
        }
    }
}

impl<T, F> Page<T, F> {
    #[must_use]
    pub fn mount() -> Self {
        Self::default()
    }

    /// Weak handle for async flows.
    #[must_use]
    pub fn handle(&self) -> PageHandle<T, F> {
        PageHandle {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Borrow the state for rendering.
    #[must_use]
    pub fn state(&self) -> Ref<'_, PageState<T, F>> {
        self.state.borrow()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut PageState<T, F>) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    /// Unmount explicitly.
    pub fn unmount(self) {
        drop(self);
    }
}

/// Weak reference to a page's state.
#[derive(Debug)]
pub struct PageHandle<T, F = ()> {
    state: Weak<RefCell<PageState<T, F>>>,
}

impl<T, F> Clone for PageHandle<T, F> {
    fn clone(&self) -> Self {
        Self {
            state: Weak::clone(&self.state),
        }
    }
}

impl<T, F> PageHandle<T, F> {
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.state.strong_count() > 0
    }

    /// Run `f` against the state if the page is still mounted. The borrow
    /// ends before this returns, so it never spans an await.
    pub fn update<R>(&self, f: impl FnOnce(&mut PageState<T, F>) -> R) -> Option<R> {
        match self.state.upgrade() {
            Some(state) => Some(f(&mut state.borrow_mut())),
            None => {
                debug!("Page unmounted; discarding update");
                None
            }
        }
    }
}
