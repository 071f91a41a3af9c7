//! Backend payload types, version 1 of the admin API schema.

pub mod auth;
pub mod dashboard;
pub mod envelope;
pub mod matches;
pub mod timestamps;
pub mod user;
pub mod verification;

pub use auth::*;
pub use dashboard::*;
pub use envelope::*;
pub use matches::*;
pub use timestamps::Timestamps;
pub use user::*;
pub use verification::*;
