//! Page editing session.
//!
//! Same lifecycle as the post editor with the page field set: no excerpt, no
//! cover image, no publish timestamp, and no archived status.

use std::sync::Arc;

use tracing::instrument;

use quillpress_client::ContentStore;
use quillpress_core::{Page, PageDraft, PageId, PageStatus, Slug, UserId, generate_slug};

use super::{EditorError, EditorState, ValidationError, conflict_notice};

/// One page editing session.
pub struct PageEditor {
    store: Arc<dyn ContentStore>,
    id: Option<PageId>,
    state: EditorState,
    title: String,
    slug: String,
    content: String,
    status: PageStatus,
    author_id: Option<UserId>,
    auto_slug: bool,
    notice: Option<String>,
}

impl PageEditor {
    /// Start a session for a new page.
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>, author_id: Option<UserId>) -> Self {
        Self {
            store,
            id: None,
            state: EditorState::Editing,
            title: String::new(),
            slug: String::new(),
            content: String::new(),
            status: PageStatus::Draft,
            author_id,
            auto_slug: true,
            notice: None,
        }
    }

    /// Start a session editing an existing page.
    ///
    /// # Errors
    ///
    /// [`EditorError::NotFound`] when no such page exists, or the underlying
    /// API error on transport failure. Terminal for this session.
    #[instrument(skip(store))]
    pub async fn open(
        store: Arc<dyn ContentStore>,
        id: PageId,
        author_id: Option<UserId>,
    ) -> Result<Self, EditorError> {
        let mut editor = Self {
            state: EditorState::Loading,
            id: Some(id),
            auto_slug: false,
            ..Self::new(store, author_id)
        };

        let page = editor
            .store
            .get_page(id)
            .await?
            .ok_or(EditorError::NotFound)?;

        editor.title = page.title;
        editor.slug = page.slug;
        editor.content = page.content;
        editor.status = page.status;
        editor.state = EditorState::Editing;
        Ok(editor)
    }

    /// Update the title, regenerating the slug while auto-slug mode is on.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        if self.auto_slug && self.id.is_none() {
            self.slug = generate_slug(title);
        }
    }

    /// Update the slug directly. Turns auto-slug mode off for good.
    pub fn set_slug(&mut self, slug: &str) {
        self.slug = slug.to_string();
        self.auto_slug = false;
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    /// Select the status a plain submit will write.
    pub fn set_status(&mut self, status: PageStatus) {
        self.status = status;
    }

    /// Save with status forced to draft.
    ///
    /// # Errors
    ///
    /// See [`Self::submit`].
    pub async fn save_draft(&mut self) -> Result<Page, EditorError> {
        self.write(PageStatus::Draft).await
    }

    /// Save with status forced to published.
    ///
    /// # Errors
    ///
    /// See [`Self::submit`].
    pub async fn publish(&mut self) -> Result<Page, EditorError> {
        self.write(PageStatus::Published).await
    }

    /// Save with whatever status is currently selected.
    ///
    /// # Errors
    ///
    /// [`EditorError::Validation`] when a field fails validation;
    /// [`EditorError::Api`] when the backend rejects the write. The session
    /// stays editable after either.
    pub async fn submit(&mut self) -> Result<Page, EditorError> {
        self.write(self.status).await
    }

    #[instrument(skip(self), fields(id = ?self.id, slug = %self.slug))]
    async fn write(&mut self, status: PageStatus) -> Result<Page, EditorError> {
        let slug = match self.validate() {
            Ok(slug) => slug,
            Err(err) => {
                self.notice = Some(err.to_string());
                return Err(err.into());
            }
        };

        self.state = EditorState::Submitting;
        self.notice = None;

        let draft = PageDraft {
            title: self.title.clone(),
            slug: slug.into_inner(),
            content: self.content.clone(),
            status,
            author_id: self.author_id,
        };

        let result = match self.id {
            Some(id) => self.store.update_page(id, &draft).await,
            None => self.store.create_page(&draft).await,
        };

        match result {
            Ok(page) => {
                self.status = status;
                self.state = EditorState::Done;
                Ok(page)
            }
            Err(err) => {
                self.notice = Some(if err.is_conflict() {
                    conflict_notice("page")
                } else {
                    err.to_string()
                });
                self.state = EditorState::Failed;
                Err(err.into())
            }
        }
    }

    fn validate(&self) -> Result<Slug, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        Ok(Slug::parse(&self.slug)?)
    }

    #[must_use]
    pub const fn state(&self) -> EditorState {
        self.state
    }

    /// True while the session accepts edits and submissions.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self.state, EditorState::Editing | EditorState::Failed)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub const fn status(&self) -> PageStatus {
        self.status
    }

    /// The notice to surface for the last failure, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::test_store::{StubStore, sample_page};

    use super::*;

    fn store() -> Arc<StubStore> {
        Arc::new(StubStore::default())
    }

    #[tokio::test]
    async fn test_create_page_with_auto_slug() {
        let stub = store();

        let mut editor = PageEditor::new(Arc::clone(&stub) as Arc<dyn ContentStore>, None);
        editor.set_title("About Us");
        editor.publish().await.unwrap();

        let pages = stub.pages.lock().unwrap();
        let page = pages.first().unwrap();
        assert_eq!(page.slug, "about-us");
        assert_eq!(page.status, PageStatus::Published);
    }

    #[tokio::test]
    async fn test_open_existing_page_keeps_slug_on_retitle() {
        let stub = store();
        stub.pages.lock().unwrap().push(sample_page(4, "about", PageStatus::Draft));

        let mut editor = PageEditor::open(stub, PageId::new(4), None).await.unwrap();
        editor.set_title("About The Team");
        assert_eq!(editor.slug(), "about");
    }

    #[tokio::test]
    async fn test_page_conflict_notice() {
        let stub = store();
        stub.fail_writes(409, "duplicate key value violates unique constraint");

        let mut editor = PageEditor::new(Arc::clone(&stub) as Arc<dyn ContentStore>, None);
        editor.set_title("About");

        editor.submit().await.err().unwrap();
        assert_eq!(
            editor.notice(),
            Some("A page with this slug already exists. Please use a different slug.")
        );
        assert!(editor.is_editable());
    }
}
