//! Public content commands.
//!
//! These never require a session and never hard-fail on an unreachable
//! backend: the reader degrades to the built-in sample posts.
//!
//! # Usage
//!
//! ```bash
//! quill read posts
//! quill read post getting-started-with-headless-cms
//! quill read page about --html
//! ```

use clap::Subcommand;

use quillpress_client::render::{reading_time_minutes, render_markdown};
use quillpress_client::{ApiClient, PublicReader};

use super::CliError;

#[derive(Subcommand)]
pub enum ReadTarget {
    /// List published posts
    Posts,
    /// Show one post by slug
    Post {
        /// Post slug
        slug: String,

        /// Render the body as HTML instead of raw markdown
        #[arg(long)]
        html: bool,
    },
    /// Show one page by slug
    Page {
        /// Page slug
        slug: String,

        /// Render the body as HTML instead of raw markdown
        #[arg(long)]
        html: bool,
    },
}

pub async fn run(client: ApiClient, target: ReadTarget) -> Result<(), CliError> {
    let reader = PublicReader::new(client);
    match target {
        ReadTarget::Posts => posts(&reader).await,
        ReadTarget::Post { slug, html } => post(&reader, &slug, html).await,
        ReadTarget::Page { slug, html } => page(&reader, &slug, html).await,
    }
}

#[allow(clippy::print_stdout)]
async fn posts(reader: &PublicReader) -> Result<(), CliError> {
    let posts = reader.posts().await?;

    if posts.is_empty() {
        println!("No posts published yet");
        return Ok(());
    }

    for post in posts {
        println!(
            "{}  by {} ({}, {} min read)\n  /{}\n  {}\n",
            post.title,
            post.author,
            post.published_at,
            reading_time_minutes(&post.content),
            post.slug,
            post.excerpt
        );
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
async fn post(reader: &PublicReader, slug: &str, html: bool) -> Result<(), CliError> {
    let Some(post) = reader.post_by_slug(slug).await? else {
        println!("Post not found: {slug}");
        return Ok(());
    };

    println!("{}", post.title);
    println!(
        "by {} on {} ({} min read)",
        post.author,
        post.published_at,
        reading_time_minutes(&post.content)
    );
    if !post.tags.is_empty() {
        println!("tags: {}", post.tags.join(", "));
    }
    println!();
    if html {
        println!("{}", render_markdown(&post.content));
    } else {
        println!("{}", post.content);
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
async fn page(reader: &PublicReader, slug: &str, html: bool) -> Result<(), CliError> {
    let Some(page) = reader.page_by_slug(slug).await? else {
        println!("Page not found: {slug}");
        return Ok(());
    };

    println!("{}\n", page.title);
    if html {
        println!("{}", render_markdown(&page.content));
    } else {
        println!("{}", page.content);
    }
    Ok(())
}
