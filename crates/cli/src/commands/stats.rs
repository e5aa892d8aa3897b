//! Content count summary.

use quillpress_admin::load_stats;
use quillpress_client::{ApiClient, RestContentStore};

use super::CliError;

/// Print aggregate content counts.
#[allow(clippy::print_stdout)]
pub async fn run(client: ApiClient) -> Result<(), CliError> {
    let store = RestContentStore::new(client);
    let stats = load_stats(&store).await?;

    println!("Posts: {} total", stats.total_posts);
    println!("  published: {}", stats.published_posts);
    println!("  drafts:    {}", stats.draft_posts);
    println!("Pages: {} total", stats.total_pages);
    Ok(())
}
