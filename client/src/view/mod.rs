//! Page View State
//!
//! Per-page list state, the free-text filter, and the optimistic mutation
//! reducer that keeps lists responsive while a change is in flight.

pub mod filter;
pub mod flow;
pub mod optimistic;
pub mod page;

pub use filter::filter;
pub use optimistic::{FieldState, Mutable, MutationEvent, MutationTicket, Review, Snapshot};
pub use page::{Notification, NotificationKind, Page, PageHandle, PageState};

use dash_common::{Match, PendingVerification, RecentUser, User, UserStatus};

pub type UsersPage = Page<User, UserStatus>;
pub type VerificationPage = Page<PendingVerification, Review>;
pub type MatchesPage = Page<Match>;
pub type RecentUsersPage = Page<RecentUser>;
