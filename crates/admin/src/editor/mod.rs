//! Editing sessions for posts and pages.
//!
//! Both editors share the same lifecycle: an optional load of an existing
//! record, local field edits with slug auto-fill, then a single validated
//! write. The two differ only in their field sets, so they live in parallel
//! modules.

pub mod page;
pub mod post;

pub use page::PageEditor;
pub use post::PostEditor;

use quillpress_client::ApiError;
use quillpress_core::SlugError;

/// Where an editing session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Fetching the record to edit. Only entered when an ID was supplied.
    Loading,
    /// Local edits in progress.
    Editing,
    /// One write request is in flight.
    Submitting,
    /// The write succeeded; the caller should return to the list view.
    Done,
    /// The last write failed. Not terminal: the session stays editable and
    /// the write may be retried.
    Failed,
}

/// A field problem caught before any request is sent.
///
/// Validation failures never leave the editing session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,
    #[error(transparent)]
    Slug(#[from] SlugError),
}

/// Why an editing operation failed.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// The record to edit does not exist. Terminal for the session.
    #[error("record not found")]
    NotFound,
    /// A field failed validation; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The backend rejected the write; the session stays retryable.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Notice shown when the backend reports a slug uniqueness conflict,
/// distinguished from other write failures.
pub(crate) fn conflict_notice(kind: &str) -> String {
    format!("A {kind} with this slug already exists. Please use a different slug.")
}
