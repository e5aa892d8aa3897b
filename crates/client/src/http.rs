//! Backend request wrapper.
//!
//! One thin layer over `reqwest`: resolves paths against the configured base
//! URL, encodes JSON bodies, attaches the stored bearer token on request,
//! and normalizes failures into [`ApiError`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::config::ClientConfig;
use crate::credentials::CredentialStore;
use crate::error::ApiError;

/// JSON error body shape the backend uses for failures.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Backend API client.
///
/// Cheap to clone; clones share the HTTP connection pool and the credential
/// slot.
///
/// # Authorization
///
/// When a call asks for auth and a token is stored, the request carries
/// `Authorization: Bearer <token>`. When no token is stored the request is
/// still sent without the header: the server is the sole enforcer of
/// authorization, the client performs no local gate.
#[derive(Clone, Debug)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

#[derive(Debug)]
struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    credentials: CredentialStore,
}

impl ApiClient {
    /// Create a client for the configured backend, opening the credential
    /// slot under the configured state directory.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should never happen
    /// under normal circumstances as we use standard TLS configuration.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url: config.base_url.clone(),
                credentials: CredentialStore::open(&config.state_dir),
            }),
        }
    }

    /// The shared credential slot.
    #[must_use]
    pub fn credentials(&self) -> &CredentialStore {
        &self.inner.credentials
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Issue a request and deserialize the JSON response body.
    ///
    /// No schema validation is performed beyond deserialization; a malformed
    /// success body surfaces as [`ApiError::Decode`]. Failures are never
    /// retried.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] when no response arrived, [`ApiError::Status`]
    /// for a non-success status (carrying the server's `message` field when
    /// the error body is JSON, the status text otherwise), and
    /// [`ApiError::Decode`] when the success body does not match `T`.
    #[instrument(skip(self, body), fields(base_url = %self.inner.base_url))]
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        requires_auth: bool,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, body, requires_auth).await?;
        let response = Self::check_status(response).await?;
        response.json::<T>().await.map_err(ApiError::Decode)
    }

    /// Issue a request and ignore the success body.
    ///
    /// Used for deletes and sign-out, whose response bodies carry nothing
    /// the client needs.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::request`], minus `Decode`.
    #[instrument(skip(self, body), fields(base_url = %self.inner.base_url))]
    pub async fn request_unit<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        requires_auth: bool,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, body, requires_auth).await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        requires_auth: bool,
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, None::<&()>, requires_auth)
            .await
    }

    /// `POST` a JSON body and parse the JSON response.
    ///
    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn post<T, B>(&self, path: &str, body: &B, requires_auth: bool) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body), requires_auth)
            .await
    }

    /// `PUT` a JSON body and parse the JSON response.
    ///
    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn put<T, B>(&self, path: &str, body: &B, requires_auth: bool) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body), requires_auth)
            .await
    }

    /// `DELETE` a resource, ignoring the response body.
    ///
    /// # Errors
    ///
    /// See [`Self::request_unit`].
    pub async fn delete(&self, path: &str, requires_auth: bool) -> Result<(), ApiError> {
        self.request_unit(Method::DELETE, path, None::<&()>, requires_auth)
            .await
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        requires_auth: bool,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.inner.base_url, path);
        let mut request = self.inner.http.request(method, &url);

        if let Some(body) = body {
            // serializes the body and sets the JSON content type
            request = request.json(body);
        }

        if requires_auth
            && let Some(token) = self.inner.credentials.token().await
        {
            request = request.bearer_auth(token.expose_secret());
        }

        request.send().await.map_err(ApiError::Transport)
    }

    /// Turn a non-success response into [`ApiError::Status`], extracting the
    /// server's `message` field when the error body is JSON and falling back
    /// to the transport status text.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status_text = status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or(status_text);

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
