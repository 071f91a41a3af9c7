//! Optimistic Mutations
//!
//! A pure reducer over an immutable list snapshot keyed by record id. A
//! trigger writes the target value into every entry with that id and hands
//! back a [`MutationTicket`]; resolving the ticket either reconciles with the
//! server's value or rolls back to the value captured at trigger time.
//!
//! Triggers for the same id are never blocked. Each resolution targets "the
//! record with this id", so whichever response lands last decides the visible
//! value.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use dash_common::{PendingVerification, Record, User, UserStatus, VerificationReview, VerificationStatus};

// ============================================================================
// Editable Records
// ============================================================================

/// A record with one admin-editable field.
pub trait Mutable: Record {
    /// The field a mutation changes.
    type Field: Clone + PartialEq + fmt::Debug;
    /// What the backend echoes back on success.
    type Update;

    fn field(&self) -> Self::Field;
    fn set_field(&mut self, value: &Self::Field);
    /// Apply the backend's authoritative value.
    fn reconcile(&mut self, update: &Self::Update);
}

impl Mutable for User {
    type Field = UserStatus;
    type Update = User;

    fn field(&self) -> UserStatus {
        self.status
    }

    fn set_field(&mut self, value: &UserStatus) {
        self.status = *value;
    }

    fn reconcile(&mut self, update: &User) {
        if update.id == self.id {
            *self = update.clone();
        } else {
            self.status = update.status;
        }
    }
}

/// Approval state plus the reviewer's reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub status: VerificationStatus,
    pub reason: String,
}

impl Review {
    pub fn new(status: VerificationStatus, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }
}

impl Mutable for PendingVerification {
    type Field = Review;
    type Update = VerificationReview;

    fn field(&self) -> Review {
        Review::new(self.status, self.reason.clone())
    }

    fn set_field(&mut self, value: &Review) {
        self.status = value.status;
        self.reason.clone_from(&value.reason);
    }

    fn reconcile(&mut self, update: &VerificationReview) {
        self.status = update.status;
        self.reason.clone_from(&update.reason);
    }
}

// ============================================================================
// Tickets & Events
// ============================================================================

/// Where a record's editable field stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState<F> {
    Committed(F),
    Pending { target: F, previous: F },
}

/// Proof of a trigger, needed to resolve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationTicket<F> {
    pub id: String,
    pub seq: u64,
    pub target: F,
    pub previous: F,
}

/// Inputs to [`Snapshot::apply`].
pub enum MutationEvent<T: Mutable> {
    Trigger { id: String, target: T::Field },
    Succeeded {
        ticket: MutationTicket<T::Field>,
        update: Option<T::Update>,
    },
    Failed { ticket: MutationTicket<T::Field> },
}

/// Result of applying an event: the next snapshot, plus the ticket when the
/// event was a trigger that found its record.
pub struct Reduced<T, F> {
    pub snapshot: Snapshot<T, F>,
    pub ticket: Option<MutationTicket<F>>,
}

// ============================================================================
// Snapshot Reducer
// ============================================================================

/// Immutable list of records with the latest in-flight ticket per id.
///
/// `F` is the editable field type; read-only lists use the default `()`.
#[derive(Debug, Clone)]
pub struct Snapshot<T, F = ()> {
    records: Arc<Vec<T>>,
    pending: BTreeMap<String, MutationTicket<F>>,
    next_seq: u64,
}

impl<T, F> Default for Snapshot<T, F> {
    fn default() -> Self {
        Self {
            records: Arc::new(Vec::new()),
            pending: BTreeMap::new(),
            next_seq: 0,
        }
    }
}

impl<T: Record, F: Clone> Snapshot<T, F> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(records),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check if a mutation for this id is still awaiting its latest response.
    #[must_use]
    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains_key(id)
    }

    fn map_id(&self, id: &str, mut f: impl FnMut(&mut T)) -> Arc<Vec<T>> {
        let records = self
            .records
            .iter()
            .map(|r| {
                let mut r = r.clone();
                if r.id() == id {
                    f(&mut r);
                }
                r
            })
            .collect();
        Arc::new(records)
    }

    fn settle(&self, ticket: &MutationTicket<F>, records: Arc<Vec<T>>) -> Self {
        let mut pending = self.pending.clone();
        if pending.get(&ticket.id).is_some_and(|t| t.seq == ticket.seq) {
            pending.remove(&ticket.id);
        }
        Self {
            records,
            pending,
            next_seq: self.next_seq,
        }
    }
}

impl<T: Mutable> Snapshot<T, T::Field> {
    /// Reduce one event into the next snapshot.
    #[must_use]
    pub fn apply(&self, event: MutationEvent<T>) -> Reduced<T, T::Field> {
        match event {
            MutationEvent::Trigger { id, target } => match self.trigger(&id, target) {
                Some((snapshot, ticket)) => Reduced {
                    snapshot,
                    ticket: Some(ticket),
                },
                None => Reduced {
                    snapshot: self.clone(),
                    ticket: None,
                },
            },
            MutationEvent::Succeeded { ticket, update } => Reduced {
                snapshot: self.succeed(&ticket, update.as_ref()),
                ticket: None,
            },
            MutationEvent::Failed { ticket } => Reduced {
                snapshot: self.fail(&ticket),
                ticket: None,
            },
        }
    }

    /// Optimistically set `target` on every entry with this id. `None` when no
    /// entry has the id.
    #[must_use]
    pub fn trigger(&self, id: &str, target: T::Field) -> Option<(Self, MutationTicket<T::Field>)> {
        let previous = self.get(id)?.field();
        let ticket = MutationTicket {
            id: id.to_string(),
            seq: self.next_seq,
            target,
            previous,
        };

        let mut pending = self.pending.clone();
        pending.insert(ticket.id.clone(), ticket.clone());

        let snapshot = Self {
            records: self.map_id(id, |r| r.set_field(&ticket.target)),
            pending,
            next_seq: self.next_seq + 1,
        };
        Some((snapshot, ticket))
    }

    /// Keep the optimistic value, or replace it with the server's when one
    /// came back.
    #[must_use]
    pub fn succeed(&self, ticket: &MutationTicket<T::Field>, update: Option<&T::Update>) -> Self {
        let records = match update {
            Some(update) => self.map_id(&ticket.id, |r| r.reconcile(update)),
            None => Arc::clone(&self.records),
        };
        self.settle(ticket, records)
    }

    /// Put back the value captured when the ticket was issued.
    #[must_use]
    pub fn fail(&self, ticket: &MutationTicket<T::Field>) -> Self {
        let records = self.map_id(&ticket.id, |r| r.set_field(&ticket.previous));
        self.settle(ticket, records)
    }

    #[must_use]
    pub fn field_state(&self, id: &str) -> Option<FieldState<T::Field>> {
        let record = self.get(id)?;
        Some(match self.pending.get(id) {
            Some(ticket) => FieldState::Pending {
                target: ticket.target.clone(),
                previous: ticket.previous.clone(),
            },
            None => FieldState::Committed(record.field()),
        })
    }
}

#[cfg(test)]
mod tests {
    use dash_common::{Timestamps, UserStatus};

    use super::*;

    fn snapshot() -> Snapshot<User, UserStatus> {
        Snapshot::new(vec![
            User::new("u1", "Sarah Johnson", "sarah@email.com", UserStatus::Active),
            User::new("u2", "Michael Chen", "michael@email.com", UserStatus::Active),
        ])
    }

    fn status_of(s: &Snapshot<User, UserStatus>, id: &str) -> UserStatus {
        s.get(id).unwrap().status
    }

    #[test]
    fn test_trigger_applies_target_and_leaves_input_untouched() {
        let before = snapshot();
        let (after, ticket) = before.trigger("u1", UserStatus::Banned).unwrap();

        assert_eq!(status_of(&after, "u1"), UserStatus::Banned);
        assert_eq!(status_of(&after, "u2"), UserStatus::Active);
        assert_eq!(status_of(&before, "u1"), UserStatus::Active);
        assert_eq!(ticket.previous, UserStatus::Active);
        assert_eq!(
            after.field_state("u1"),
            Some(FieldState::Pending {
                target: UserStatus::Banned,
                previous: UserStatus::Active
            })
        );
    }

    #[test]
    fn test_failure_rolls_back() {
        let (pending, ticket) = snapshot().trigger("u1", UserStatus::Banned).unwrap();
        let rolled_back = pending.fail(&ticket);

        assert_eq!(status_of(&rolled_back, "u1"), UserStatus::Active);
        assert_eq!(
            rolled_back.field_state("u1"),
            Some(FieldState::Committed(UserStatus::Active))
        );
    }

    #[test]
    fn test_success_reconciles_with_server_value() {
        let (pending, ticket) = snapshot().trigger("u1", UserStatus::Banned).unwrap();
        let mut server = User::new("u1", "Sarah Johnson", "sarah@email.com", UserStatus::Blocked);
        server.bio = Some("updated server-side".into());

        let done = pending.succeed(&ticket, Some(&server));
        let user = done.get("u1").unwrap();
        assert_eq!(user.status, UserStatus::Blocked);
        assert_eq!(user.bio.as_deref(), Some("updated server-side"));
        assert!(!done.is_pending("u1"));
    }

    #[test]
    fn test_success_without_record_keeps_optimistic_value() {
        let (pending, ticket) = snapshot().trigger("u1", UserStatus::Deleted).unwrap();
        let done = pending.succeed(&ticket, None);
        assert_eq!(status_of(&done, "u1"), UserStatus::Deleted);
        assert!(!done.is_pending("u1"));
    }

    #[test]
    fn test_every_entry_with_the_id_is_updated() {
        let user = User::new("u1", "Sarah Johnson", "sarah@email.com", UserStatus::Active);
        let snapshot: Snapshot<User, UserStatus> = Snapshot::new(vec![user.clone(), user]);

        let (pending, ticket) = snapshot.trigger("u1", UserStatus::Banned).unwrap();
        assert!(pending.records().iter().all(|u| u.status == UserStatus::Banned));

        let rolled_back = pending.fail(&ticket);
        assert!(rolled_back
            .records()
            .iter()
            .all(|u| u.status == UserStatus::Active));
    }

    #[test]
    fn test_unknown_id_yields_no_ticket() {
        let reduced = snapshot().apply(MutationEvent::Trigger {
            id: "nobody".into(),
            target: UserStatus::Banned,
        });
        assert!(reduced.ticket.is_none());
        assert_eq!(reduced.snapshot.len(), 2);
    }

    #[test]
    fn test_last_response_wins_regardless_of_trigger_order() {
        let s0 = snapshot();
        let (s1, first) = s0.trigger("u1", UserStatus::Banned).unwrap();
        let (s2, second) = s1.trigger("u1", UserStatus::Blocked).unwrap();
        assert_eq!(second.previous, UserStatus::Banned);

        // Second response lands first, then the first one.
        let s3 = s2.succeed(&second, None);
        assert!(!s3.is_pending("u1"));
        let s4 = s3.fail(&first);
        assert_eq!(status_of(&s4, "u1"), UserStatus::Active);
    }

    #[test]
    fn test_stale_resolution_keeps_newer_pending_marker() {
        let (s1, first) = snapshot().trigger("u1", UserStatus::Banned).unwrap();
        let (s2, _second) = s1.trigger("u1", UserStatus::Blocked).unwrap();

        let s3 = s2.succeed(&first, None);
        assert!(s3.is_pending("u1"));
    }

    #[test]
    fn test_verification_review_reconciles_status_and_reason() {
        let item = PendingVerification {
            user_id: "v1".into(),
            document: "https://cdn.example/v1.mp4".into(),
            status: VerificationStatus::Pending,
            reason: String::new(),
            full_name: "Emily Davis".into(),
            email: "emily@email.com".into(),
            avatar: None,
            timestamps: Timestamps::default(),
        };
        let snapshot: Snapshot<PendingVerification, Review> = Snapshot::new(vec![item]);

        let reduced = snapshot.apply(MutationEvent::Trigger {
            id: "v1".into(),
            target: Review::new(VerificationStatus::Approved, ""),
        });
        let ticket = reduced.ticket.unwrap();

        let done = reduced
            .snapshot
            .apply(MutationEvent::Succeeded {
                ticket,
                update: Some(VerificationReview {
                    user_id: None,
                    status: VerificationStatus::Approved,
                    reason: String::new(),
                }),
            })
            .snapshot;
        assert_eq!(done.get("v1").unwrap().status, VerificationStatus::Approved);
    }
}
