//! In-memory [`ContentStore`] double for flow tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use quillpress_client::{ApiError, ContentStore};
use quillpress_core::{
    Page, PageDraft, PageId, PageStatus, Post, PostDraft, PostId, PostStatus,
};

/// Backend double holding records in memory.
///
/// Writes can be made to fail with a chosen status/message to exercise the
/// failure paths of the flows.
#[derive(Default)]
pub struct StubStore {
    pub posts: Mutex<Vec<Post>>,
    pub pages: Mutex<Vec<Page>>,
    fail_writes_with: Mutex<Option<(u16, String)>>,
    writes: AtomicUsize,
    last_post_draft: Mutex<Option<PostDraft>>,
}

impl StubStore {
    /// Make every subsequent write (create/update/delete) fail.
    pub fn fail_writes(&self, status: u16, message: &str) {
        *self.fail_writes_with.lock().unwrap() = Some((status, message.to_string()));
    }

    pub fn clear_failures(&self) {
        *self.fail_writes_with.lock().unwrap() = None;
    }

    /// Number of write requests that reached the store.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// The payload of the most recent post write.
    pub fn last_post_draft(&self) -> Option<PostDraft> {
        self.last_post_draft.lock().unwrap().clone()
    }

    fn check_write(&self) -> Result<(), ApiError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        match self.fail_writes_with.lock().unwrap().clone() {
            Some((status, message)) => Err(ApiError::Status { status, message }),
            None => Ok(()),
        }
    }

    fn next_post_id(&self) -> PostId {
        let next = self.posts.lock().unwrap().iter().map(|p| p.id.as_i64()).max().unwrap_or(0) + 1;
        PostId::new(next)
    }

    fn next_page_id(&self) -> PageId {
        let next = self.pages.lock().unwrap().iter().map(|p| p.id.as_i64()).max().unwrap_or(0) + 1;
        PageId::new(next)
    }
}

/// A post record with the given ID, slug, and status.
pub fn sample_post(id: i64, slug: &str, status: PostStatus) -> Post {
    Post {
        id: PostId::new(id),
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        content: "body".to_string(),
        excerpt: "excerpt".to_string(),
        cover_image: None,
        status,
        author_id: None,
        published_at: (status == PostStatus::Published).then(Utc::now),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A page record with the given ID, slug, and status.
pub fn sample_page(id: i64, slug: &str, status: PageStatus) -> Page {
    Page {
        id: PageId::new(id),
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        content: "body".to_string(),
        status,
        author_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn post_from_draft(id: PostId, draft: &PostDraft) -> Post {
    Post {
        id,
        title: draft.title.clone(),
        slug: draft.slug.clone(),
        content: draft.content.clone(),
        excerpt: draft.excerpt.clone(),
        cover_image: draft.cover_image.clone(),
        status: draft.status,
        author_id: draft.author_id,
        published_at: draft.published_at,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn page_from_draft(id: PageId, draft: &PageDraft) -> Page {
    Page {
        id,
        title: draft.title.clone(),
        slug: draft.slug.clone(),
        content: draft.content.clone(),
        status: draft.status,
        author_id: draft.author_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[async_trait]
impl ContentStore for StubStore {
    async fn list_posts(&self, filter: Option<PostStatus>) -> Result<Vec<Post>, ApiError> {
        let posts = self.posts.lock().unwrap();
        Ok(posts
            .iter()
            .filter(|p| filter.is_none_or(|status| p.status == status))
            .cloned()
            .collect())
    }

    async fn get_post(&self, id: PostId) -> Result<Option<Post>, ApiError> {
        Ok(self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        self.check_write()?;
        *self.last_post_draft.lock().unwrap() = Some(draft.clone());
        let post = post_from_draft(self.next_post_id(), draft);
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: PostId, draft: &PostDraft) -> Result<Post, ApiError> {
        self.check_write()?;
        *self.last_post_draft.lock().unwrap() = Some(draft.clone());
        let updated = post_from_draft(id, draft);
        let mut posts = self.posts.lock().unwrap();
        match posts.iter_mut().find(|p| p.id == id) {
            Some(slot) => {
                *slot = updated.clone();
                Ok(updated)
            }
            None => Err(ApiError::Status {
                status: 404,
                message: "not found".to_string(),
            }),
        }
    }

    async fn delete_post(&self, id: PostId) -> Result<(), ApiError> {
        self.check_write()?;
        self.posts.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }

    async fn list_pages(&self, filter: Option<PageStatus>) -> Result<Vec<Page>, ApiError> {
        let pages = self.pages.lock().unwrap();
        Ok(pages
            .iter()
            .filter(|p| filter.is_none_or(|status| p.status == status))
            .cloned()
            .collect())
    }

    async fn get_page(&self, id: PageId) -> Result<Option<Page>, ApiError> {
        Ok(self.pages.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn create_page(&self, draft: &PageDraft) -> Result<Page, ApiError> {
        self.check_write()?;
        let page = page_from_draft(self.next_page_id(), draft);
        self.pages.lock().unwrap().push(page.clone());
        Ok(page)
    }

    async fn update_page(&self, id: PageId, draft: &PageDraft) -> Result<Page, ApiError> {
        self.check_write()?;
        let updated = page_from_draft(id, draft);
        let mut pages = self.pages.lock().unwrap();
        match pages.iter_mut().find(|p| p.id == id) {
            Some(slot) => {
                *slot = updated.clone();
                Ok(updated)
            }
            None => Err(ApiError::Status {
                status: 404,
                message: "not found".to_string(),
            }),
        }
    }

    async fn delete_page(&self, id: PageId) -> Result<(), ApiError> {
        self.check_write()?;
        self.pages.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}
