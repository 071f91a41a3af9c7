//! Page Flows
//!
//! The async halves of loading and mutating: each touches page state only
//! through a [`PageHandle`] and only between network calls, never across one.

use std::future::Future;

use dash_common::{Envelope, MutationEnvelope, Record, Searchable};
use tracing::{debug, info, warn};

use super::optimistic::Mutable;
use super::page::{Notification, PageHandle};
use crate::error::ApiError;

/// Fetch a list into the page. Returns `false` if the page was unmounted
/// before the result could be applied.
pub async fn load<T, F, Fut>(page: &PageHandle<T, F>, fetch: Fut) -> bool
where
    T: Record + Searchable,
    F: Clone,
    Fut: Future<Output = Result<Envelope<Vec<T>>, ApiError>>,
{
    if page.update(|s| s.begin_load()).is_none() {
        return false;
    }

    let result = fetch.await.map(|envelope| envelope.data);
    if let Err(e) = &result {
        warn!("Page load failed: {}", e);
    }

    page.update(|s| s.finish_load(result)).is_some()
}

/// Change one record's editable field: apply locally, call the backend, then
/// reconcile or roll back.
///
/// Returns the notification raised, or `None` when the record is unknown or
/// the page unmounted while the call was in flight.
pub async fn mutate<T, C, Fut>(
    page: &PageHandle<T, T::Field>,
    id: &str,
    target: T::Field,
    call: C,
) -> Option<Notification>
where
    T: Mutable + Searchable,
    C: FnOnce() -> Fut,
    Fut: Future<Output = Result<MutationEnvelope<T::Update>, ApiError>>,
{
    let ticket = page.update(|s| s.trigger(id, target))??;
    debug!(id, seq = ticket.seq, target = ?ticket.target, "Optimistic change applied");

    let result = call().await.map(|envelope| {
        let message = if envelope.message.trim().is_empty() {
            "Saved".to_string()
        } else {
            envelope.message
        };
        (message, envelope.data)
    });

    match &result {
        Ok(_) => info!(id, seq = ticket.seq, "Change confirmed"),
        Err(e) => warn!(id, seq = ticket.seq, "Change failed, rolling back: {}", e),
    }

    page.update(|s| s.resolve(&ticket, result))
}
