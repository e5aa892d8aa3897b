//! Post editing session.

use std::sync::Arc;

use chrono::Utc;
use tracing::instrument;

use quillpress_client::ContentStore;
use quillpress_core::{Post, PostDraft, PostId, PostStatus, Slug, UserId, generate_slug};

use super::{EditorError, EditorState, ValidationError, conflict_notice};

/// One post editing session.
///
/// Drives the lifecycle documented on [`EditorState`]. While auto-slug mode
/// is on, title edits regenerate the slug; the first manual slug edit turns
/// the mode off for the rest of the session, permanently. Auto-slug is only
/// ever on for new posts - opening an existing record starts with it off.
pub struct PostEditor {
    store: Arc<dyn ContentStore>,
    id: Option<PostId>,
    state: EditorState,
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    cover_image: String,
    status: PostStatus,
    author_id: Option<UserId>,
    auto_slug: bool,
    notice: Option<String>,
}

impl PostEditor {
    /// Start a session for a new post.
    ///
    /// `author_id` comes from the active session and is stamped into the
    /// write payload at submit time; it may be absent for anonymous use.
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>, author_id: Option<UserId>) -> Self {
        Self {
            store,
            id: None,
            state: EditorState::Editing,
            title: String::new(),
            slug: String::new(),
            content: String::new(),
            excerpt: String::new(),
            cover_image: String::new(),
            status: PostStatus::Draft,
            author_id,
            auto_slug: true,
            notice: None,
        }
    }

    /// Start a session editing an existing post.
    ///
    /// # Errors
    ///
    /// [`EditorError::NotFound`] when no such post exists, or the underlying
    /// API error on transport failure. Both are terminal for this session:
    /// the caller surfaces a notice and returns to the list view.
    #[instrument(skip(store))]
    pub async fn open(
        store: Arc<dyn ContentStore>,
        id: PostId,
        author_id: Option<UserId>,
    ) -> Result<Self, EditorError> {
        let mut editor = Self {
            state: EditorState::Loading,
            id: Some(id),
            auto_slug: false,
            ..Self::new(store, author_id)
        };

        let post = editor
            .store
            .get_post(id)
            .await?
            .ok_or(EditorError::NotFound)?;

        editor.title = post.title;
        editor.slug = post.slug;
        editor.content = post.content;
        editor.excerpt = post.excerpt;
        editor.cover_image = post.cover_image.unwrap_or_default();
        editor.status = post.status;
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

    pub fn set_excerpt(&mut self, excerpt: &str) {
        self.excerpt = excerpt.to_string();
    }

    /// Update the cover image URL; empty means none.
    pub fn set_cover_image(&mut self, url: &str) {
        self.cover_image = url.to_string();
    }

    /// Select the status a plain submit will write.
    pub fn set_status(&mut self, status: PostStatus) {
        self.status = status;
    }

    /// Save with status forced to draft, regardless of the selector.
    ///
    /// # Errors
    ///
    /// See [`Self::submit`].
    pub async fn save_draft(&mut self) -> Result<Post, EditorError> {
        self.write(PostStatus::Draft).await
    }

    /// Save with status forced to published, regardless of the selector.
    ///
    /// # Errors
    ///
    /// See [`Self::submit`].
    pub async fn publish(&mut self) -> Result<Post, EditorError> {
        self.write(PostStatus::Published).await
    }

    /// Save with whatever status is currently selected.
    ///
    /// # Errors
    ///
    /// [`EditorError::Validation`] when a field fails validation (no request
    /// is sent, the session state is unchanged); [`EditorError::Api`] when
    /// the backend rejects the write (the session moves to
    /// [`EditorState::Failed`] but stays editable and retryable).
    pub async fn submit(&mut self) -> Result<Post, EditorError> {
        self.write(self.status).await
    }

    #[instrument(skip(self), fields(id = ?self.id, slug = %self.slug))]
    async fn write(&mut self, status: PostStatus) -> Result<Post, EditorError> {
        let slug = match self.validate() {
            Ok(slug) => slug,
            Err(err) => {
                self.notice = Some(err.to_string());
                return Err(err.into());
            }
        };

        self.state = EditorState::Submitting;
        self.notice = None;

        let draft = PostDraft {
            title: self.title.clone(),
            slug: slug.into_inner(),
            content: self.content.clone(),
            excerpt: self.excerpt.clone(),
            cover_image: (!self.cover_image.is_empty()).then(|| self.cover_image.clone()),
            status,
            author_id: self.author_id,
            // stamped only when a post is born published; updates omit the
            // field so an existing stamp survives
            published_at: (status == PostStatus::Published && self.id.is_none())
                .then(Utc::now),
        };

        let result = match self.id {
            Some(id) => self.store.update_post(id, &draft).await,
            None => self.store.create_post(&draft).await,
        };

        match result {
            Ok(post) => {
                self.status = status;
                self.state = EditorState::Done;
                Ok(post)
            }
            Err(err) => {
                self.notice = Some(if err.is_conflict() {
                    conflict_notice("post")
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

    /// True while the session accepts edits and submissions - both before a
    /// write and after a failed one.
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
    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    #[must_use]
    pub const fn status(&self) -> PostStatus {
        self.status
    }

    /// The notice to surface: a validation message or the backend's error
    /// message verbatim (conflicts get their own wording).
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use quillpress_core::validate_slug;

    use crate::test_store::{StubStore, sample_post};

    use super::*;

    fn store() -> Arc<StubStore> {
        Arc::new(StubStore::default())
    }

    #[tokio::test]
    async fn test_title_drives_slug_until_manual_edit() {
        let mut editor = PostEditor::new(store(), None);

        editor.set_title("Getting Started with Headless CMS!");
        assert_eq!(editor.slug(), "getting-started-with-headless-cms");

        editor.set_title("Another Title");
        assert_eq!(editor.slug(), "another-title");

        // manual edit turns auto-slug off permanently
        editor.set_slug("my-own-slug");
        editor.set_title("Yet Another Title");
        assert_eq!(editor.slug(), "my-own-slug");
    }

    #[tokio::test]
    async fn test_open_existing_disables_auto_slug() {
        let stub = store();
        stub.posts.lock().unwrap().push(sample_post(7, "existing-post", PostStatus::Published));

        let mut editor = PostEditor::open(stub, PostId::new(7), None).await.unwrap();
        assert_eq!(editor.slug(), "existing-post");

        editor.set_title("Renamed");
        assert_eq!(editor.slug(), "existing-post");
    }

    #[tokio::test]
    async fn test_open_missing_post_is_terminal() {
        let err = PostEditor::open(store(), PostId::new(99), None)
            .await
            .err()
            .unwrap();
        assert!(matches!(err, EditorError::NotFound));
    }

    #[tokio::test]
    async fn test_validation_blocks_write_without_request() {
        let stub = store();
        let mut editor = PostEditor::new(Arc::clone(&stub) as Arc<dyn ContentStore>, None);
        editor.set_slug("has a space");
        editor.set_title("Valid Title");

        let err = editor.submit().await.err().unwrap();
        assert!(matches!(err, EditorError::Validation(_)));
        assert!(editor.is_editable());
        assert_eq!(stub.write_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_title_blocks_write() {
        let mut editor = PostEditor::new(store(), None);
        editor.set_slug("fine-slug");

        let err = editor.submit().await.err().unwrap();
        assert!(matches!(
            err,
            EditorError::Validation(ValidationError::MissingTitle)
        ));
    }

    #[tokio::test]
    async fn test_save_draft_and_publish_force_status() {
        let stub = store();

        let mut editor = PostEditor::new(Arc::clone(&stub) as Arc<dyn ContentStore>, None);
        editor.set_title("Hello World");
        editor.set_status(PostStatus::Archived);
        editor.save_draft().await.unwrap();
        assert_eq!(
            stub.posts.lock().unwrap().first().unwrap().status,
            PostStatus::Draft
        );

        let mut editor = PostEditor::new(Arc::clone(&stub) as Arc<dyn ContentStore>, None);
        editor.set_title("Second Post");
        editor.publish().await.unwrap();
        assert_eq!(
            stub.posts.lock().unwrap().get(1).unwrap().status,
            PostStatus::Published
        );
    }

    #[tokio::test]
    async fn test_publish_on_create_stamps_published_at() {
        let stub = store();

        let mut editor = PostEditor::new(Arc::clone(&stub) as Arc<dyn ContentStore>, None);
        editor.set_title("Born Published");
        let post = editor.publish().await.unwrap();
        assert!(post.published_at.is_some());

        // updates omit the stamp entirely
        let mut editor = PostEditor::open(Arc::clone(&stub) as Arc<dyn ContentStore>, post.id, None)
            .await
            .unwrap();
        editor.set_content("revised");
        editor.publish().await.unwrap();
        assert!(stub.last_post_draft().unwrap().published_at.is_none());
    }

    #[tokio::test]
    async fn test_write_failure_is_retryable_with_verbatim_message() {
        let stub = store();
        stub.fail_writes(401, "invalid token");

        let mut editor = PostEditor::new(Arc::clone(&stub) as Arc<dyn ContentStore>, None);
        editor.set_title("Hello");

        let err = editor.submit().await.err().unwrap();
        assert!(matches!(err, EditorError::Api(_)));
        assert_eq!(editor.state(), EditorState::Failed);
        assert!(editor.is_editable());
        assert_eq!(editor.notice(), Some("invalid token"));

        // retry succeeds once the backend recovers
        stub.clear_failures();
        editor.submit().await.unwrap();
        assert_eq!(editor.state(), EditorState::Done);
    }

    #[tokio::test]
    async fn test_conflict_gets_distinguished_notice() {
        let stub = store();
        stub.fail_writes(409, "duplicate key value violates unique constraint");

        let mut editor = PostEditor::new(Arc::clone(&stub) as Arc<dyn ContentStore>, None);
        editor.set_title("Hello");

        editor.submit().await.err().unwrap();
        assert_eq!(
            editor.notice(),
            Some("A post with this slug already exists. Please use a different slug.")
        );
    }

    #[tokio::test]
    async fn test_generated_slug_always_validates() {
        let stub = store();
        let mut editor = PostEditor::new(Arc::clone(&stub) as Arc<dyn ContentStore>, None);

        editor.set_title("  What's New?  (2025 Edition!)  ");
        assert!(validate_slug(editor.slug()));
        editor.submit().await.unwrap();
    }
}
