//! Public content reads with graceful degradation.
//!
//! The public-facing reader must never show a hard error just because the
//! backend is down, so read failures are swallowed and replaced with content
//! from a [`FallbackSource`]. This is a deliberate availability-over-
//! consistency tradeoff and applies only here - authenticated paths always
//! surface their errors.

use std::sync::Arc;

use quillpress_core::{PublicPage, PublicPost};

use crate::error::ApiError;
use crate::http::ApiClient;

/// Provider of substitute content for failed public reads.
///
/// Implementations return a fixed set; the default is the built-in
/// [`crate::SamplePosts`]. Tests substitute deterministic fixtures, and
/// production can drop the provider entirely to surface errors instead
/// ([`PublicReader::without_fallback`]).
pub trait FallbackSource: Send + Sync + std::fmt::Debug {
    /// The full sample post set.
    fn posts(&self) -> Vec<PublicPost>;

    /// One sample post by slug; `None` when absent from the set.
    fn post_by_slug(&self, slug: &str) -> Option<PublicPost> {
        self.posts().into_iter().find(|post| post.slug == slug)
    }

    /// One sample page by slug; `None` when absent from the set.
    fn page_by_slug(&self, slug: &str) -> Option<PublicPage>;
}

/// Reader for the unauthenticated content endpoints.
#[derive(Clone, Debug)]
pub struct PublicReader {
    client: ApiClient,
    fallback: Option<Arc<dyn FallbackSource>>,
}

impl PublicReader {
    /// A reader with the built-in sample content as fallback.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self::with_fallback(client, Arc::new(crate::SamplePosts))
    }

    /// A reader with a custom fallback provider.
    #[must_use]
    pub fn with_fallback(client: ApiClient, fallback: Arc<dyn FallbackSource>) -> Self {
        Self {
            client,
            fallback: Some(fallback),
        }
    }

    /// A reader that propagates read errors instead of degrading.
    #[must_use]
    pub const fn without_fallback(client: ApiClient) -> Self {
        Self {
            client,
            fallback: None,
        }
    }

    /// List published posts via `GET /api/posts`.
    ///
    /// # Errors
    ///
    /// Only when the fallback is disabled; otherwise any failure resolves to
    /// the sample set.
    pub async fn posts(&self) -> Result<Vec<PublicPost>, ApiError> {
        match self.client.get("/api/posts", false).await {
            Ok(posts) => Ok(posts),
            Err(err) => match &self.fallback {
                Some(fallback) => {
                    tracing::warn!(error = %err, "backend unavailable, serving sample posts");
                    Ok(fallback.posts())
                }
                None => Err(err),
            },
        }
    }

    /// Fetch one post by slug via `GET /api/posts/:slug`.
    ///
    /// `Ok(None)` when the post does not exist (in the backend, or in the
    /// sample set once degraded).
    ///
    /// # Errors
    ///
    /// Only when the fallback is disabled, and only for failures other than
    /// not-found.
    pub async fn post_by_slug(&self, slug: &str) -> Result<Option<PublicPost>, ApiError> {
        match self.client.get(&format!("/api/posts/{slug}"), false).await {
            Ok(post) => Ok(Some(post)),
            Err(err) => match &self.fallback {
                Some(fallback) => {
                    tracing::warn!(error = %err, slug, "backend unavailable, consulting sample posts");
                    Ok(fallback.post_by_slug(slug))
                }
                None if err.is_not_found() => Ok(None),
                None => Err(err),
            },
        }
    }

    /// Fetch one page by slug via `GET /api/pages/:slug`.
    ///
    /// Same contract as [`Self::post_by_slug`].
    ///
    /// # Errors
    ///
    /// Only when the fallback is disabled, and only for failures other than
    /// not-found.
    pub async fn page_by_slug(&self, slug: &str) -> Result<Option<PublicPage>, ApiError> {
        match self.client.get(&format!("/api/pages/{slug}"), false).await {
            Ok(page) => Ok(Some(page)),
            Err(err) => match &self.fallback {
                Some(fallback) => {
                    tracing::warn!(error = %err, slug, "backend unavailable, consulting sample pages");
                    Ok(fallback.page_by_slug(slug))
                }
                None if err.is_not_found() => Ok(None),
                None => Err(err),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::ClientConfig;

    use super::*;

    async fn reader_for(server: &MockServer) -> (PublicReader, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::new(&server.uri(), dir.path().to_path_buf()).unwrap();
        (PublicReader::new(ApiClient::new(&config)), dir)
    }

    #[tokio::test]
    async fn test_posts_fall_back_on_server_error() {
        let server = MockServer::start().await;
        let (reader, _dir) = reader_for(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let posts = reader.posts().await.unwrap();
        assert_eq!(posts.len(), 3);
    }

    #[tokio::test]
    async fn test_post_by_slug_falls_back_to_sample_lookup() {
        let server = MockServer::start().await;
        let (reader, _dir) = reader_for(&server).await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let hit = reader
            .post_by_slug("getting-started-with-headless-cms")
            .await
            .unwrap();
        assert!(hit.is_some());

        let miss = reader.post_by_slug("no-such-post").await.unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn test_page_by_slug_has_no_sample_pages() {
        let server = MockServer::start().await;
        let (reader, _dir) = reader_for(&server).await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let page = reader.page_by_slug("about").await.unwrap();
        assert!(page.is_none());
    }

    #[tokio::test]
    async fn test_without_fallback_propagates_errors() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::new(&server.uri(), dir.path().to_path_buf()).unwrap();
        let reader = PublicReader::without_fallback(ApiClient::new(&config));

        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(reader.posts().await.is_err());
    }

    #[tokio::test]
    async fn test_without_fallback_maps_404_to_none() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::new(&server.uri(), dir.path().to_path_buf()).unwrap();
        let reader = PublicReader::without_fallback(ApiClient::new(&config));

        Mock::given(method("GET"))
            .and(path("/api/posts/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let post = reader.post_by_slug("missing").await.unwrap();
        assert!(post.is_none());
    }
}
