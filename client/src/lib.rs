//! Dash Admin Client Library
//!
//! Session handling, the authenticated HTTP client, one service method per
//! admin endpoint, per-page view state with optimistic mutations, and the text
//! renderers the `dash-admin` binary prints.

pub mod commands;
pub mod config;
pub mod error;
pub mod network;
pub mod render;
pub mod services;
pub mod session;
pub mod view;

pub use config::Config;
pub use error::{ApiError, StorageError};
pub use network::ApiClient;
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionEvent, SessionStore};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Application state shared by every command.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
}

impl AppState {
    /// Build the client over the session file named in `config`.
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let session = Session::new(FileSessionStore::new(&config.session_file))
            .with_listener(log_session_event);
        Self::with_session(config, session)
    }

    /// Build the client over an existing session.
    pub fn with_session(config: Config, session: Session) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config, session)?;
        Ok(Self { config, api })
    }
}

fn log_session_event(event: &SessionEvent) {
    match event {
        SessionEvent::Authenticated(Some(admin)) => {
            info!(admin_id = %admin.id, role = ?admin.role, "Session established");
        }
        SessionEvent::Authenticated(None) => info!("Session established"),
        SessionEvent::Expired { reason } => {
            warn!("Session expired, sign in again: {}", reason);
        }
        SessionEvent::LoggedOut => info!("Session ended"),
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "dash_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
