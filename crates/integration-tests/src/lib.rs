//! Integration tests for Quillpress.
//!
//! Every test runs the real client and flow code against a `wiremock`
//! backend; no live server or database is involved.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p quillpress-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session` - Sign-in, rehydration, and sign-out against the auth
//!   endpoints
//! - `editor_flow` - Create/edit submission, validation, and failure
//!   surfacing
//! - `list_delete` - Collection fetch, filtering, and confirm-then-commit
//!   deletion
//! - `public_fallback` - Public reads degrading to sample content

use quillpress_client::{ApiClient, ClientConfig};

/// A client pointed at a mock server, with an isolated state directory.
///
/// Keep the returned `TempDir` alive for the duration of the test; dropping
/// it deletes the credential file.
#[allow(clippy::missing_panics_doc)]
#[must_use]
pub fn client_for(server_uri: &str) -> (ApiClient, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("create temp state dir");
    let config = ClientConfig::new(server_uri, dir.path().to_path_buf())
        .expect("mock server URI is a valid base URL");
    (ApiClient::new(&config), dir)
}

/// Backend JSON for one post record.
#[must_use]
pub fn post_json(id: i64, slug: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": slug.replace('-', " "),
        "slug": slug,
        "content": "body",
        "excerpt": "excerpt",
        "cover_image": null,
        "status": status,
        "author_id": null,
        "published_at": if status == "published" { serde_json::json!("2025-01-15T12:00:00Z") } else { serde_json::Value::Null },
        "created_at": "2025-01-10T08:00:00Z",
        "updated_at": "2025-01-12T08:00:00Z"
    })
}

/// Backend JSON for one page record.
#[must_use]
pub fn page_json(id: i64, slug: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": slug.replace('-', " "),
        "slug": slug,
        "content": "body",
        "status": status,
        "author_id": null,
        "created_at": "2025-01-10T08:00:00Z",
        "updated_at": "2025-01-12T08:00:00Z"
    })
}

/// Backend JSON for the authenticated user.
#[must_use]
pub fn user_json() -> serde_json::Value {
    serde_json::json!({
        "id": "0a8ef3f6-2f0b-4a5e-9c8e-8a24d1f0b9aa",
        "email": "editor@example.com",
        "created_at": "2025-01-01T00:00:00Z"
    })
}
