//! Content record shapes shared with the backend.
//!
//! Two families of shapes exist:
//!
//! - The admin records ([`Post`], [`Page`]) and their write payloads
//!   ([`PostDraft`], [`PageDraft`]), exchanged with the authenticated
//!   endpoints using `snake_case` field names.
//! - The public read shapes ([`PublicPost`], [`PublicPage`]) returned by the
//!   unauthenticated endpoints using `camelCase` field names.
//!
//! IDs and the `created_at`/`updated_at` timestamps are assigned by the
//! backend and never written by the client. Slug uniqueness is enforced by
//! the backend; the client only guarantees the grammar.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::id::{PageId, PostId, UserId};
use super::status::{PageStatus, PostStatus};

/// A blog post as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub status: PostStatus,
    pub author_id: Option<UserId>,
    /// Stamped the first time the post is published; never overwritten.
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A standalone page as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub status: PageStatus,
    pub author_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Write payload for creating or updating a post.
///
/// Carries no ID (the path selects the record on update) and no
/// backend-assigned timestamps. `published_at` is present only when a post is
/// created directly in published status; update payloads omit it so an
/// existing stamp survives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub status: PostStatus,
    pub author_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Write payload for creating or updating a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub status: PageStatus,
    pub author_id: Option<UserId>,
}

/// A published post as served by the public read endpoints.
///
/// The public projection replaces the author ID with a display name and adds
/// tags; dates are calendar dates rather than timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPost {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub published_at: NaiveDate,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A published page as served by the public read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPage {
    pub id: PageId,
    pub slug: String,
    pub title: String,
    pub content: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserializes_backend_shape() {
        let json = r#"{
            "id": 3,
            "title": "Hello",
            "slug": "hello",
            "content": "body",
            "excerpt": "intro",
            "cover_image": null,
            "status": "draft",
            "author_id": null,
            "published_at": null,
            "created_at": "2025-01-15T09:30:00Z",
            "updated_at": "2025-01-16T10:00:00Z"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, PostId::new(3));
        assert_eq!(post.status, PostStatus::Draft);
        assert!(post.published_at.is_none());
        assert!(post.author_id.is_none());
    }

    #[test]
    fn test_draft_omits_unset_published_at() {
        let draft = PostDraft {
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            content: String::new(),
            excerpt: String::new(),
            cover_image: None,
            status: PostStatus::Draft,
            author_id: None,
            published_at: None,
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("published_at").is_none());
        // cover_image is an explicit null, not an omission
        assert!(value.get("cover_image").is_some_and(serde_json::Value::is_null));
    }

    #[test]
    fn test_public_post_uses_camel_case() {
        let json = r##"{
            "id": 1,
            "slug": "getting-started",
            "title": "Getting Started",
            "content": "# Hi",
            "excerpt": "Learn things.",
            "author": "Sarah Johnson",
            "publishedAt": "2025-01-15",
            "coverImage": "https://example.com/a.jpg",
            "tags": ["CMS"]
        }"##;

        let post: PublicPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.author, "Sarah Johnson");
        assert_eq!(post.published_at.to_string(), "2025-01-15");
        assert_eq!(post.tags, vec!["CMS".to_string()]);
    }

    #[test]
    fn test_public_post_optional_fields_default() {
        let json = r#"{
            "id": 2,
            "slug": "bare",
            "title": "Bare",
            "content": "",
            "excerpt": "",
            "author": "A",
            "publishedAt": "2025-02-01"
        }"#;

        let post: PublicPost = serde_json::from_str(json).unwrap();
        assert!(post.cover_image.is_none());
        assert!(post.tags.is_empty());
    }
}
