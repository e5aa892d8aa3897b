//! The content storage capability.
//!
//! Flows and the CLI talk to a [`ContentStore`], never to a concrete
//! backend, so a different transport (or a test double) can stand in without
//! touching call sites. [`RestContentStore`] is the adapter for the
//! authenticated REST surface.

use async_trait::async_trait;

use quillpress_core::{
    Page, PageDraft, PageId, PageStatus, Post, PostDraft, PostId, PostStatus,
};

use crate::error::ApiError;
use crate::http::ApiClient;

/// CRUD operations over posts and pages.
///
/// Read paths model an absent entity as `Ok(None)` rather than an error.
/// Slug uniqueness is the store's concern; implementations surface a
/// violation as a conflict status error.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// List posts, optionally restricted to one status.
    async fn list_posts(&self, filter: Option<PostStatus>) -> Result<Vec<Post>, ApiError>;

    /// Fetch one post by ID; `None` when it does not exist.
    async fn get_post(&self, id: PostId) -> Result<Option<Post>, ApiError>;

    /// Create a post, returning the stored record with its assigned ID.
    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError>;

    /// Replace a post's mutable fields.
    async fn update_post(&self, id: PostId, draft: &PostDraft) -> Result<Post, ApiError>;

    /// Delete a post.
    async fn delete_post(&self, id: PostId) -> Result<(), ApiError>;

    /// List pages, optionally restricted to one status.
    async fn list_pages(&self, filter: Option<PageStatus>) -> Result<Vec<Page>, ApiError>;

    /// Fetch one page by ID; `None` when it does not exist.
    async fn get_page(&self, id: PageId) -> Result<Option<Page>, ApiError>;

    /// Create a page, returning the stored record with its assigned ID.
    async fn create_page(&self, draft: &PageDraft) -> Result<Page, ApiError>;

    /// Replace a page's mutable fields.
    async fn update_page(&self, id: PageId, draft: &PageDraft) -> Result<Page, ApiError>;

    /// Delete a page.
    async fn delete_page(&self, id: PageId) -> Result<(), ApiError>;
}

/// [`ContentStore`] adapter for the authenticated REST endpoints.
///
/// Every operation requires auth; the bearer token travels with each request
/// when one is stored.
#[derive(Clone, Debug)]
pub struct RestContentStore {
    client: ApiClient,
}

impl RestContentStore {
    /// Wrap an API client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Map a 404 on a read path to `Ok(None)`.
    fn absent_as_none<T>(result: Result<T, ApiError>) -> Result<Option<T>, ApiError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl ContentStore for RestContentStore {
    async fn list_posts(&self, filter: Option<PostStatus>) -> Result<Vec<Post>, ApiError> {
        let path = filter.map_or_else(
            || "/posts".to_string(),
            |status| format!("/posts?status={status}"),
        );
        self.client.get(&path, true).await
    }

    async fn get_post(&self, id: PostId) -> Result<Option<Post>, ApiError> {
        Self::absent_as_none(self.client.get(&format!("/posts/{id}"), true).await)
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        self.client.post("/posts", draft, true).await
    }

    async fn update_post(&self, id: PostId, draft: &PostDraft) -> Result<Post, ApiError> {
        self.client.put(&format!("/posts/{id}"), draft, true).await
    }

    async fn delete_post(&self, id: PostId) -> Result<(), ApiError> {
        self.client.delete(&format!("/posts/{id}"), true).await
    }

    async fn list_pages(&self, filter: Option<PageStatus>) -> Result<Vec<Page>, ApiError> {
        let path = filter.map_or_else(
            || "/pages".to_string(),
            |status| format!("/pages?status={status}"),
        );
        self.client.get(&path, true).await
    }

    async fn get_page(&self, id: PageId) -> Result<Option<Page>, ApiError> {
        Self::absent_as_none(self.client.get(&format!("/pages/{id}"), true).await)
    }

    async fn create_page(&self, draft: &PageDraft) -> Result<Page, ApiError> {
        self.client.post("/pages", draft, true).await
    }

    async fn update_page(&self, id: PageId, draft: &PageDraft) -> Result<Page, ApiError> {
        self.client.put(&format!("/pages/{id}"), draft, true).await
    }

    async fn delete_page(&self, id: PageId) -> Result<(), ApiError> {
        self.client.delete(&format!("/pages/{id}"), true).await
    }
}
