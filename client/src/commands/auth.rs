//! Authentication Commands

use dash_common::LoginCredentials;
use tracing::{error, info};

use super::Rendered;
use crate::view::Notification;
use crate::AppState;

/// Login request from the front end.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Log in and persist the session.
pub async fn login(state: &AppState, request: LoginRequest) -> Rendered {
    let credentials = LoginCredentials {
        email: request.email.trim().to_string(),
        password: request.password,
    };

    match state.api.login(&credentials).await {
        Ok(response) => {
            let message = if response.message.trim().is_empty() {
                "Logged in".to_string()
            } else {
                response.message
            };
            let output = state.api.current_admin().map_or_else(
                || format!("Signed in as {}", credentials.email),
                |admin| format!("Signed in as {} ({:?}, id {})", credentials.email, admin.role, admin.id),
            );
            Rendered::new(output, vec![Notification::success(message)])
        }
        Err(e) => {
            error!("Login failed: {}", e);
            Rendered::notice(Notification::error(e.to_string()))
        }
    }
}

/// Forget the stored session.
pub fn logout(state: &AppState) -> Rendered {
    match state.api.logout() {
        Ok(()) => Rendered::notice(Notification::success("Logged out")),
        Err(e) => {
            error!("Logout failed: {}", e);
            Rendered::notice(Notification::error(e.to_string()))
        }
    }
}

/// Check the stored token with the backend.
pub async fn validate(state: &AppState) -> Rendered {
    match state.api.validate_token().await {
        Ok(response) if response.valid => {
            info!("Session is valid");
            let output = state.api.current_admin().map_or_else(
                || "Session valid".to_string(),
                |admin| format!("Session valid for admin {} ({:?})", admin.id, admin.role),
            );
            Rendered::new(output, Vec::new())
        }
        Ok(response) => Rendered::notice(Notification::error(
            response
                .message
                .unwrap_or_else(|| "Session is no longer valid".into()),
        )),
        Err(e) => Rendered::notice(Notification::error(e.to_string())),
    }
}
