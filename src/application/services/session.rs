//! Session Provider
//!
//! Owns the current user for the lifetime of the process and keeps the
//! stored token pair consistent with it.
//!
//! State moves `Unknown -> Authenticated | Anonymous` once [`SessionProvider::initialize`]
//! runs, and between the two resolved states on login, logout and failed
//! profile fetches. Observers (route guard, header) follow it through a
//! `watch` channel.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use super::navigation::Navigator;
use crate::application::dto::{ProfileForm, RegisterForm};
use crate::domain::{AuthApi, Credentials, Route, TokenPair, User};
use crate::infrastructure::storage::{keys, KeyValueStore};
use crate::shared::error::AppError;
use crate::shared::validation::{extract_field_errors, validation_error, FieldErrors};

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";
const VALIDATION_FAILED: &str = "Validation failed";
const AUTO_LOGIN_FAILED: &str =
    "Registration successful but automatic login failed. Please login manually.";

/// Authentication state as seen by the rest of the client.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionStatus {
    /// Startup check has not finished
    #[default]
    Unknown,
    Authenticated(User),
    Anonymous,
}

impl SessionStatus {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionStatus::Authenticated(_))
    }

    /// Whether the startup check has finished.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionStatus::Unknown)
    }
}

/// Session errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// The server refused the request; the message is meant for the user.
    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Storage error: {0}")]
    Storage(String),

    /// The stored token no longer yields a profile; the session was cleared.
    #[error("Session invalid: {0}")]
    SessionInvalid(String),
}

impl AuthError {
    /// Map a failed call, using `fallback` when the server sent no message.
    fn from_app(error: AppError, fallback: &str) -> Self {
        match error {
            AppError::Network(msg) => AuthError::Transport(msg),
            AppError::Storage(msg) => AuthError::Storage(msg),
            other => AuthError::Rejected(other.server_message().unwrap_or_else(|| fallback.to_string())),
        }
    }
}

impl From<AppError> for AuthError {
    fn from(error: AppError) -> Self {
        AuthError::from_app(error, LOGIN_FAILED)
    }
}

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    /// Account created and logged in
    Authenticated(User),
    /// Account created but the automatic login failed; state stays anonymous
    RegisteredLoginRequired { message: String },
    /// Client-side or server-side validation refused the form
    Rejected {
        message: String,
        field_errors: FieldErrors,
    },
}

/// Session provider.
///
/// Shared as `Arc<SessionProvider<A>>`; every method takes `&self`.
pub struct SessionProvider<A: AuthApi> {
    api: Arc<A>,
    store: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
    status: watch::Sender<SessionStatus>,
}

impl<A: AuthApi> SessionProvider<A> {
    pub fn new(api: Arc<A>, store: Arc<dyn KeyValueStore>, navigator: Arc<dyn Navigator>) -> Self {
        let (status, _) = watch::channel(SessionStatus::Unknown);
        Self {
            api,
            store,
            navigator,
            status,
        }
    }

    /// Snapshot of the current state.
    pub fn status(&self) -> SessionStatus {
        self.status.borrow().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.status.borrow().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.borrow().is_authenticated()
    }

    /// Follow state changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.status.subscribe()
    }

    /// Startup check: restore the user from a stored token, if any.
    ///
    /// A token that no longer yields a profile is discarded.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> SessionStatus {
        let token = match self.store.get(keys::ACCESS_TOKEN) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, "Could not read stored token");
                None
            }
        };

        let status = match token {
            None => SessionStatus::Anonymous,
            Some(_) => match self.api.profile().await {
                Ok(user) => {
                    info!(user_id = user.id, username = %user.username, "Session restored");
                    SessionStatus::Authenticated(user)
                }
                Err(e) => {
                    debug!(error = %e, "Stored token rejected");
                    self.clear_tokens();
                    SessionStatus::Anonymous
                }
            },
        };

        self.status.send_replace(status.clone());
        status
    }

    /// Exchange credentials for tokens, persist them, and load the profile.
    ///
    /// On failure no tokens from this attempt remain in storage.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };

        let tokens = self
            .api
            .obtain_token(&credentials)
            .await
            .map_err(|e| AuthError::from_app(e, LOGIN_FAILED))?;

        if tokens.access.is_empty() {
            return Err(AuthError::Rejected(LOGIN_FAILED.into()));
        }

        if let Err(e) = self.store_tokens(&tokens) {
            self.clear_tokens();
            return Err(AuthError::Storage(e.to_string()));
        }

        match self.api.profile().await {
            Ok(user) => {
                info!(user_id = user.id, "Logged in");
                self.status.send_replace(SessionStatus::Authenticated(user.clone()));
                Ok(user)
            }
            Err(e) => {
                warn!(error = %e, "Profile fetch after login failed");
                self.clear_tokens();
                self.status.send_replace(SessionStatus::Anonymous);
                Err(AuthError::from_app(e, LOGIN_FAILED))
            }
        }
    }

    /// Validate, register, then log in with the same credentials.
    ///
    /// `Err` is reserved for transport and storage failures; everything the
    /// server or the validator refuses comes back as [`RegisterOutcome::Rejected`].
    #[instrument(skip(self, form), fields(username = %form.username))]
    pub async fn register(&self, form: &RegisterForm) -> Result<RegisterOutcome, AuthError> {
        if let Err(errors) = form.validate() {
            return Ok(RegisterOutcome::Rejected {
                message: VALIDATION_FAILED.into(),
                field_errors: validation_error(&errors),
            });
        }

        match self.api.register(&form.registration()).await {
            Ok(account) => {
                info!(user_id = account.id, "Account registered");
            }
            Err(AppError::Network(msg)) => return Err(AuthError::Transport(msg)),
            Err(e) => return Ok(rejected_registration(e)),
        }

        let credentials = form.credentials();
        match self.login(&credentials.username, &credentials.password).await {
            Ok(user) => Ok(RegisterOutcome::Authenticated(user)),
            Err(e) => {
                warn!(error = %e, "Automatic login after registration failed");
                Ok(RegisterOutcome::RegisteredLoginRequired {
                    message: AUTO_LOGIN_FAILED.into(),
                })
            }
        }
    }

    /// Re-fetch the profile with the stored token.
    ///
    /// Any failure clears the session.
    #[instrument(skip(self))]
    pub async fn refresh_user(&self) -> Result<User, AuthError> {
        match self.api.profile().await {
            Ok(user) => {
                self.status.send_replace(SessionStatus::Authenticated(user.clone()));
                Ok(user)
            }
            Err(e) => {
                debug!(error = %e, "Profile refresh failed, clearing session");
                self.clear_tokens();
                self.status.send_replace(SessionStatus::Anonymous);
                Err(AuthError::SessionInvalid(
                    e.server_message().unwrap_or_else(|| e.to_string()),
                ))
            }
        }
    }

    /// Trade the stored refresh token for a new access token.
    ///
    /// A refresh token the server no longer accepts ends the session.
    #[instrument(skip(self))]
    pub async fn refresh_access_token(&self) -> Result<(), AuthError> {
        let refresh = self
            .store
            .get(keys::REFRESH_TOKEN)
            .map_err(|e| AuthError::Storage(e.to_string()))?
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::SessionInvalid("No refresh token".into()))?;

        match self.api.refresh_token(&refresh).await {
            Ok(tokens) => {
                self.store_tokens(&TokenPair {
                    access: tokens.access,
                    refresh: tokens.refresh.or(Some(refresh)),
                })
                .map_err(|e| AuthError::Storage(e.to_string()))?;
                debug!("Access token refreshed");
                Ok(())
            }
            Err(e) if e.is_unauthorized() => {
                self.clear_tokens();
                self.status.send_replace(SessionStatus::Anonymous);
                Err(AuthError::SessionInvalid(
                    e.server_message().unwrap_or_else(|| "Refresh token rejected".into()),
                ))
            }
            Err(e) => Err(AuthError::from_app(e, "Token refresh failed")),
        }
    }

    /// Update editable profile fields and replace the in-memory user.
    #[instrument(skip(self, form))]
    pub async fn update_profile(&self, form: &ProfileForm) -> Result<User, AppError> {
        if !self.is_authenticated() {
            return Err(AppError::Unauthorized("Not logged in".into()));
        }

        form.validate()
            .map_err(|e| AppError::Validation(validation_error(&e)))?;

        let update = form.update();
        if update.is_empty() {
            return Err(AppError::InvalidInput("Nothing to update".into()));
        }

        let user = self.api.update_profile(&update).await?;
        self.status.send_replace(SessionStatus::Authenticated(user.clone()));
        info!(user_id = user.id, "Profile updated");
        Ok(user)
    }

    /// Forget the session and go home. Safe to call in any state.
    pub fn logout(&self) {
        self.clear_tokens();
        self.status.send_replace(SessionStatus::Anonymous);
        self.navigator.navigate(Route::Home);
        info!("Logged out");
    }

    fn store_tokens(&self, tokens: &TokenPair) -> Result<(), AppError> {
        self.store.set(keys::ACCESS_TOKEN, &tokens.access)?;
        match tokens.refresh.as_deref().filter(|r| !r.is_empty()) {
            Some(refresh) => self.store.set(keys::REFRESH_TOKEN, refresh),
            None => self.store.remove(keys::REFRESH_TOKEN),
        }
    }

    fn clear_tokens(&self) {
        for key in [keys::ACCESS_TOKEN, keys::REFRESH_TOKEN] {
            if let Err(e) = self.store.remove(key) {
                warn!(key, error = %e, "Could not remove stored token");
            }
        }
    }
}

/// Turn a refused registration into field errors or a general message.
fn rejected_registration(error: AppError) -> RegisterOutcome {
    let field_errors = match &error {
        AppError::Api { body, .. } => extract_field_errors(body),
        _ => FieldErrors::new(),
    };

    if !field_errors.is_empty() {
        return RegisterOutcome::Rejected {
            message: VALIDATION_FAILED.into(),
            field_errors,
        };
    }

    RegisterOutcome::Rejected {
        message: error
            .server_message()
            .unwrap_or_else(|| REGISTRATION_FAILED.into()),
        field_errors,
    }
}
