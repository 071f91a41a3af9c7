//! Shared helpers for HTTP integration tests.
//!
//! Each test spins up an in-process axum router standing in for the admin
//! backend and points a client at it.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use dash_client::{AppState, Config, Session, SessionEvent};
use tokio::task::JoinHandle;

/// Running stub backend.
pub struct TestServer {
    pub addr: SocketAddr,
    pub url: String,
    _handle: JoinHandle<()>,
}

/// Spawn the router on a random local port.
pub async fn spawn_test_server(router: Router) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to get local addr");
    let url = format!("http://{addr}");

    let handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });

    TestServer {
        addr,
        url,
        _handle: handle,
    }
}

/// Configuration pointing at the stub backend.
pub fn test_config(server: &TestServer) -> Config {
    Config::default_for_test()
        .with_base_url(&server.url)
        .expect("Stub URL is valid")
}

/// App state over an in-memory session.
pub fn app_state(server: &TestServer) -> AppState {
    AppState::with_session(test_config(server), Session::in_memory())
        .expect("Failed to build client")
}

/// App state with a configuration tweak and an explicit session.
pub fn app_state_with(
    server: &TestServer,
    session: Session,
    configure: impl FnOnce(Config) -> Config,
) -> AppState {
    AppState::with_session(configure(test_config(server)), session).expect("Failed to build client")
}

/// Unsigned JWT carrying admin claims.
pub fn token_for(id: &str, role: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = URL_SAFE_NO_PAD.encode(format!(r#"{{"id":"{id}","role":"{role}"}}"#));
    format!("{header}.{claims}.signature")
}

/// Session already holding a token, with every lifecycle event recorded.
pub fn signed_in_session(token: &str) -> (Session, Arc<Mutex<Vec<SessionEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let session = Session::in_memory().with_listener(move |event| {
        sink.lock().expect("event log poisoned").push(event.clone());
    });
    session.establish(token).expect("Failed to store token");
    events.lock().expect("event log poisoned").clear();
    (session, events)
}

/// Collects values seen by stub handlers.
#[derive(Clone)]
pub struct Recorder<T> {
    inner: Arc<Mutex<Vec<T>>>,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone> Recorder<T> {
    pub fn push(&self, value: T) {
        self.inner.lock().expect("recorder poisoned").push(value);
    }

    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.inner.lock().expect("recorder poisoned"))
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("recorder poisoned").len()
    }
}
