//! Authenticated session context.
//!
//! The session is an explicitly constructed object, not ambient state:
//! [`SessionContext::bootstrap`] builds it at process start from whatever
//! credential the store holds, sign-in/sign-up replace it, and
//! [`SessionContext::sign_out`] tears it down. Consumers receive the context
//! by reference.

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use quillpress_core::{Email, User};

use crate::error::ApiError;
use crate::http::ApiClient;

/// Request body for the sign-in and registration exchanges.
#[derive(Serialize)]
struct AuthRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Response from the sign-in and registration exchanges.
#[derive(Deserialize)]
struct AuthExchange {
    token: String,
    user: User,
}

/// Response from the identity probe.
#[derive(Deserialize)]
struct Identity {
    user: User,
}

/// The current editor session.
///
/// Holds the active user, if any. The underlying token lives in the client's
/// credential slot; this type only orchestrates its lifecycle. A signed-out
/// context is still fully usable for unauthenticated calls.
#[derive(Debug)]
pub struct SessionContext {
    client: ApiClient,
    user: Option<User>,
}

impl SessionContext {
    /// A context with no active session.
    #[must_use]
    pub const fn signed_out(client: ApiClient) -> Self {
        Self { client, user: None }
    }

    /// Rehydrate the session at process start.
    ///
    /// If the credential slot holds a token, probe the identity endpoint
    /// with it. Success adopts the returned user; any failure clears the
    /// stored token and yields a signed-out context. The probe gates access
    /// to protected flows but is not itself an authorization boundary - the
    /// server re-checks every request.
    #[instrument(skip(client))]
    pub async fn bootstrap(client: ApiClient) -> Self {
        if !client.credentials().has_token().await {
            return Self::signed_out(client);
        }

        match client.get::<Identity>("/auth/me", true).await {
            Ok(identity) => {
                tracing::debug!(user = %identity.user.email, "session rehydrated");
                Self {
                    client,
                    user: Some(identity.user),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "stored session rejected, signing out");
                if let Err(err) = client.credentials().clear().await {
                    tracing::warn!(error = %err, "failed to remove credential file");
                }
                Self::signed_out(client)
            }
        }
    }

    /// Exchange credentials for a session via `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error unchanged (invalid credentials arrive as
    /// a status error with the server's message).
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_in(&mut self, email: &Email, password: &SecretString) -> Result<(), ApiError> {
        let exchange: AuthExchange = self
            .client
            .post(
                "/auth/login",
                &AuthRequest {
                    email: email.as_str(),
                    password: password.expose_secret(),
                },
                false,
            )
            .await?;

        self.adopt(exchange).await;
        Ok(())
    }

    /// Create an account and session via `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error unchanged.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_up(&mut self, email: &Email, password: &SecretString) -> Result<(), ApiError> {
        let exchange: AuthExchange = self
            .client
            .post(
                "/auth/register",
                &AuthRequest {
                    email: email.as_str(),
                    password: password.expose_secret(),
                },
                false,
            )
            .await?;

        self.adopt(exchange).await;
        Ok(())
    }

    async fn adopt(&mut self, exchange: AuthExchange) {
        if let Err(err) = self
            .client
            .credentials()
            .set(SecretString::from(exchange.token))
            .await
        {
            // the session still works for this process; it just won't
            // survive a restart
            tracing::warn!(error = %err, "failed to persist credential file");
        }
        self.user = Some(exchange.user);
    }

    /// Tear the session down.
    ///
    /// Asks the server to invalidate its side via `POST /auth/logout`, then
    /// clears the local credential and user unconditionally - an unreachable
    /// backend must not leave the client stuck signed in.
    #[instrument(skip(self))]
    pub async fn sign_out(&mut self) {
        if let Err(err) = self
            .client
            .request_unit(
                Method::POST,
                "/auth/logout",
                Some(&serde_json::json!({})),
                true,
            )
            .await
        {
            tracing::warn!(error = %err, "server-side sign-out failed");
        }

        if let Err(err) = self.client.credentials().clear().await {
            tracing::warn!(error = %err, "failed to remove credential file");
        }
        self.user = None;
    }

    /// The active user, if signed in.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// True when a user is signed in.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// The underlying API client.
    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }
}
