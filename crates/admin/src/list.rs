//! Collection views with confirm-then-commit deletion.
//!
//! A list session fetches the full collection on open and again on every
//! filter change - no pagination, no incremental loading. Deleting is a
//! two-step: arm a pending delete, then confirm (which issues the request)
//! or cancel (which does nothing). A successful delete removes the record
//! from the in-memory list without a re-fetch; a failed one leaves the list
//! untouched and records a notice.

use std::sync::Arc;

use tracing::instrument;

use quillpress_client::{ApiError, ContentStore};
use quillpress_core::{Page, PageId, PageStatus, Post, PostId, PostStatus};

/// The post collection view.
pub struct PostList {
    store: Arc<dyn ContentStore>,
    filter: Option<PostStatus>,
    posts: Vec<Post>,
    pending_delete: Option<PostId>,
    notice: Option<String>,
}

impl PostList {
    /// Open the view with no filter, fetching the full collection.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the view is not constructed.
    pub async fn open(store: Arc<dyn ContentStore>) -> Result<Self, ApiError> {
        Self::open_filtered(store, None).await
    }

    /// Open the view with an initial filter.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the view is not constructed.
    pub async fn open_filtered(
        store: Arc<dyn ContentStore>,
        filter: Option<PostStatus>,
    ) -> Result<Self, ApiError> {
        let mut list = Self {
            store,
            filter,
            posts: Vec::new(),
            pending_delete: None,
            notice: None,
        };
        list.refresh().await?;
        Ok(list)
    }

    /// Change the status filter and re-fetch.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the previous contents stay in place.
    pub async fn set_filter(&mut self, filter: Option<PostStatus>) -> Result<(), ApiError> {
        self.filter = filter;
        self.refresh().await
    }

    /// Re-fetch the collection under the current filter.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the previous contents stay in place.
    #[instrument(skip(self), fields(filter = ?self.filter))]
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.posts = self.store.list_posts(self.filter).await?;
        Ok(())
    }

    /// Arm deletion of one record. Returns false when the record is not in
    /// the current list (nothing is armed).
    pub fn request_delete(&mut self, id: PostId) -> bool {
        if self.posts.iter().any(|p| p.id == id) {
            self.pending_delete = Some(id);
            true
        } else {
            false
        }
    }

    /// Disarm a pending delete.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Commit the pending delete, if any.
    ///
    /// On success the record is removed in place, preserving the order of
    /// the rest. On failure the list is unchanged and [`Self::notice`]
    /// carries the message.
    ///
    /// # Errors
    ///
    /// Returns the delete error.
    #[instrument(skip(self))]
    pub async fn confirm_delete(&mut self) -> Result<(), ApiError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(());
        };

        match self.store.delete_post(id).await {
            Ok(()) => {
                self.posts.retain(|p| p.id != id);
                self.notice = None;
                Ok(())
            }
            Err(err) => {
                self.notice = Some(format!("Failed to delete post: {err}"));
                Err(err)
            }
        }
    }

    /// Records under the current filter, in backend order.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub const fn filter(&self) -> Option<PostStatus> {
        self.filter
    }

    /// The record armed for deletion, if any.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<PostId> {
        self.pending_delete
    }

    /// The notice from the last failed delete, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

/// The page collection view.
pub struct PageList {
    store: Arc<dyn ContentStore>,
    filter: Option<PageStatus>,
    pages: Vec<Page>,
    pending_delete: Option<PageId>,
    notice: Option<String>,
}

impl PageList {
    /// Open the view with no filter, fetching the full collection.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the view is not constructed.
    pub async fn open(store: Arc<dyn ContentStore>) -> Result<Self, ApiError> {
        Self::open_filtered(store, None).await
    }

    /// Open the view with an initial filter.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the view is not constructed.
    pub async fn open_filtered(
        store: Arc<dyn ContentStore>,
        filter: Option<PageStatus>,
    ) -> Result<Self, ApiError> {
        let mut list = Self {
            store,
            filter,
            pages: Vec::new(),
            pending_delete: None,
            notice: None,
        };
        list.refresh().await?;
        Ok(list)
    }

    /// Change the status filter and re-fetch.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the previous contents stay in place.
    pub async fn set_filter(&mut self, filter: Option<PageStatus>) -> Result<(), ApiError> {
        self.filter = filter;
        self.refresh().await
    }

    /// Re-fetch the collection under the current filter.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the previous contents stay in place.
    #[instrument(skip(self), fields(filter = ?self.filter))]
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.pages = self.store.list_pages(self.filter).await?;
        Ok(())
    }

    /// Arm deletion of one record. Returns false when the record is not in
    /// the current list.
    pub fn request_delete(&mut self, id: PageId) -> bool {
        if self.pages.iter().any(|p| p.id == id) {
            self.pending_delete = Some(id);
            true
        } else {
            false
        }
    }

    /// Disarm a pending delete.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Commit the pending delete, if any. Same contract as
    /// [`PostList::confirm_delete`].
    ///
    /// # Errors
    ///
    /// Returns the delete error.
    #[instrument(skip(self))]
    pub async fn confirm_delete(&mut self) -> Result<(), ApiError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(());
        };

        match self.store.delete_page(id).await {
            Ok(()) => {
                self.pages.retain(|p| p.id != id);
                self.notice = None;
                Ok(())
            }
            Err(err) => {
                self.notice = Some(format!("Failed to delete page: {err}"));
                Err(err)
            }
        }
    }

    /// Records under the current filter, in backend order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    #[must_use]
    pub const fn filter(&self) -> Option<PageStatus> {
        self.filter
    }

    /// The record armed for deletion, if any.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<PageId> {
        self.pending_delete
    }

    /// The notice from the last failed delete, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::test_store::{StubStore, sample_post};

    use super::*;

    fn seeded_store() -> Arc<StubStore> {
        let stub = StubStore::default();
        {
            let mut posts = stub.posts.lock().unwrap();
            posts.push(sample_post(1, "first", PostStatus::Published));
            posts.push(sample_post(2, "second", PostStatus::Draft));
            posts.push(sample_post(3, "third", PostStatus::Published));
        }
        Arc::new(stub)
    }

    #[tokio::test]
    async fn test_open_fetches_full_collection() {
        let list = PostList::open(seeded_store()).await.unwrap();
        assert_eq!(list.posts().len(), 3);
    }

    #[tokio::test]
    async fn test_filter_refetches() {
        let mut list = PostList::open(seeded_store()).await.unwrap();
        list.set_filter(Some(PostStatus::Published)).await.unwrap();

        let slugs: Vec<_> = list.posts().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["first", "third"]);
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_in_place() {
        let mut list = PostList::open(seeded_store()).await.unwrap();

        assert!(list.request_delete(PostId::new(2)));
        list.confirm_delete().await.unwrap();

        let slugs: Vec<_> = list.posts().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["first", "third"]);
        assert!(list.notice().is_none());
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_list_unchanged() {
        let stub = seeded_store();
        let mut list = PostList::open(Arc::clone(&stub) as Arc<dyn ContentStore>)
            .await
            .unwrap();

        stub.fail_writes(500, "database on fire");
        assert!(list.request_delete(PostId::new(2)));
        assert!(list.confirm_delete().await.is_err());

        assert_eq!(list.posts().len(), 3);
        assert_eq!(list.notice(), Some("Failed to delete post: database on fire"));
    }

    #[tokio::test]
    async fn test_cancel_disarms() {
        let mut list = PostList::open(seeded_store()).await.unwrap();

        assert!(list.request_delete(PostId::new(1)));
        list.cancel_delete();
        list.confirm_delete().await.unwrap();

        assert_eq!(list.posts().len(), 3);
    }

    #[tokio::test]
    async fn test_request_delete_unknown_id_does_not_arm() {
        let mut list = PostList::open(seeded_store()).await.unwrap();
        assert!(!list.request_delete(PostId::new(42)));
        assert!(list.pending_delete().is_none());
    }
}
