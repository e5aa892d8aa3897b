//! Content counts for the admin landing view.

use quillpress_client::{ApiError, ContentStore};
use quillpress_core::PostStatus;

/// Aggregate content counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_posts: usize,
    pub published_posts: usize,
    pub draft_posts: usize,
    pub total_pages: usize,
}

/// Compute stats from full-collection fetches.
///
/// # Errors
///
/// Returns the first fetch error.
pub async fn load_stats(store: &dyn ContentStore) -> Result<DashboardStats, ApiError> {
    let posts = store.list_posts(None).await?;
    let pages = store.list_pages(None).await?;

    Ok(DashboardStats {
        total_posts: posts.len(),
        published_posts: posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
            .count(),
        draft_posts: posts
            .iter()
            .filter(|p| p.status == PostStatus::Draft)
            .count(),
        total_pages: pages.len(),
    })
}
