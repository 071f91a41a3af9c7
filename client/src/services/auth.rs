//! Authentication Service

use dash_common::{AdminIdentity, LoginCredentials, LoginResponse, ValidateResponse};
use tracing::{debug, info, warn};

use super::endpoints;
use crate::error::ApiError;
use crate::network::ApiClient;

impl ApiClient {
    /// Log in and persist the returned token.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        info!("Attempting admin login for {}", credentials.email);

        let response: LoginResponse = self
            .post_anonymous(endpoints::AUTH_LOGIN, credentials, "Login failed")
            .await?;

        let identity = self.session().establish(&response.token)?;
        info!(
            admin_id = identity.as_ref().map(|i| i.id.as_str()),
            "Admin {} logged in",
            credentials.email
        );
        Ok(response)
    }

    /// Forget the stored token and identity. Purely local.
    pub fn logout(&self) -> Result<(), ApiError> {
        info!("Logging out");
        self.session().end()?;
        Ok(())
    }

    /// Ask the backend whether the stored token is still good.
    ///
    /// A rejected token, a failed call, or no token at all leaves the session
    /// empty.
    pub async fn validate_token(&self) -> Result<ValidateResponse, ApiError> {
        if self.session().token().is_none() {
            debug!("No stored token to validate");
            self.session().expire("No stored token");
            return Ok(ValidateResponse {
                valid: false,
                message: Some("Not authenticated".into()),
            });
        }

        match self
            .get::<ValidateResponse>(endpoints::AUTH_VALIDATE, "Token validation failed")
            .await
        {
            Ok(response) if response.valid => {
                debug!("Stored token is valid");
                Ok(response)
            }
            Ok(response) => {
                let reason = response
                    .message
                    .clone()
                    .unwrap_or_else(|| "Token rejected".into());
                warn!("Stored token rejected: {}", reason);
                self.session().expire(&reason);
                Ok(response)
            }
            Err(e) => {
                warn!("Token validation failed: {}", e);
                self.session().expire(&e.to_string());
                Err(e)
            }
        }
    }

    /// Identity of the signed-in admin, from the stored token claims.
    #[must_use]
    pub fn current_admin(&self) -> Option<AdminIdentity> {
        self.session().identity()
    }

    /// A token is stored and its claims name an admin.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session().token().is_some() && self.session().identity().is_some()
    }
}
