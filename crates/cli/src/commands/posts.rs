//! Post management commands.
//!
//! # Usage
//!
//! ```bash
//! quill posts list --status draft
//! quill posts create --title "Hello World" --content "Body" --publish
//! quill posts edit 12 --title "New Title" --publish
//! quill posts delete 12
//! ```

use std::sync::Arc;

use clap::Subcommand;

use quillpress_admin::{PostEditor, PostList};
use quillpress_client::{ApiClient, ContentStore, RestContentStore, SessionContext};
use quillpress_core::{PostId, PostStatus, UserId};

use super::{CliError, prompt};

#[derive(Subcommand)]
pub enum PostAction {
    /// List posts, optionally filtered by status
    List {
        /// Filter: draft, published, or archived
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Create a post
    Create {
        /// Post title
        #[arg(short, long)]
        title: String,

        /// Slug override (derived from the title when omitted)
        #[arg(long)]
        slug: Option<String>,

        /// Post body (markdown)
        #[arg(short, long, default_value = "")]
        content: String,

        /// Short description shown in listings
        #[arg(short, long, default_value = "")]
        excerpt: String,

        /// Cover image URL
        #[arg(long)]
        cover_image: Option<String>,

        /// Publish immediately instead of saving a draft
        #[arg(long)]
        publish: bool,
    },
    /// Edit an existing post
    Edit {
        /// Post ID
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(long)]
        slug: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        #[arg(short, long)]
        excerpt: Option<String>,

        #[arg(long)]
        cover_image: Option<String>,

        /// Status to write (`draft`, `published`, `archived`)
        #[arg(short, long)]
        status: Option<String>,

        /// Force draft status, regardless of --status
        #[arg(long, conflicts_with = "publish")]
        draft: bool,

        /// Force published status, regardless of --status
        #[arg(long)]
        publish: bool,
    },
    /// Delete a post
    Delete {
        /// Post ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(client: ApiClient, action: PostAction) -> Result<(), CliError> {
    match action {
        PostAction::List { status } => list(client, status).await,
        PostAction::Create {
            title,
            slug,
            content,
            excerpt,
            cover_image,
            publish,
        } => create(client, &title, slug, &content, &excerpt, cover_image, publish).await,
        PostAction::Edit {
            id,
            title,
            slug,
            content,
            excerpt,
            cover_image,
            status,
            draft,
            publish,
        } => {
            edit(
                client,
                id,
                title,
                slug,
                content,
                excerpt,
                cover_image,
                status,
                draft,
                publish,
            )
            .await
        }
        PostAction::Delete { id, yes } => delete(client, id, yes).await,
    }
}

fn parse_status(input: &str) -> Result<PostStatus, CliError> {
    input
        .parse()
        .map_err(|err: String| CliError::InvalidArg("status", err))
}

/// Active user's ID, for stamping into write payloads. Absent when signed
/// out - the server decides whether to accept anonymous writes.
async fn author_id(client: &ApiClient) -> Option<UserId> {
    let session = SessionContext::bootstrap(client.clone()).await;
    session.user().map(|user| user.id)
}

fn rest_store(client: ApiClient) -> Arc<dyn ContentStore> {
    Arc::new(RestContentStore::new(client))
}

/// Surface the editor's notice (conflicts get distinguished wording) when a
/// submission fails.
fn submit_error(editor: &PostEditor, err: quillpress_admin::EditorError) -> CliError {
    match editor.notice() {
        Some(notice) => CliError::Submit(notice.to_string()),
        None => CliError::Editor(err),
    }
}

#[allow(clippy::print_stdout)]
async fn list(client: ApiClient, status: Option<String>) -> Result<(), CliError> {
    let filter = status.as_deref().map(parse_status).transpose()?;
    let view = PostList::open_filtered(rest_store(client), filter).await?;

    if view.posts().is_empty() {
        println!("No posts found");
        return Ok(());
    }

    for post in view.posts() {
        println!(
            "{:>5}  {:<9}  {}  /{}  (updated {})",
            post.id,
            post.status.to_string(),
            post.title,
            post.slug,
            post.updated_at.date_naive()
        );
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
async fn create(
    client: ApiClient,
    title: &str,
    slug: Option<String>,
    content: &str,
    excerpt: &str,
    cover_image: Option<String>,
    publish: bool,
) -> Result<(), CliError> {
    let author = author_id(&client).await;
    let mut editor = PostEditor::new(rest_store(client), author);

    editor.set_title(title);
    if let Some(slug) = slug {
        editor.set_slug(&slug);
    }
    editor.set_content(content);
    editor.set_excerpt(excerpt);
    if let Some(url) = cover_image {
        editor.set_cover_image(&url);
    }

    let result = if publish {
        editor.publish().await
    } else {
        editor.save_draft().await
    };

    match result {
        Ok(post) => {
            println!("Created post {} ({}) as {}", post.id, post.slug, post.status);
            Ok(())
        }
        Err(err) => Err(submit_error(&editor, err)),
    }
}

#[allow(clippy::too_many_arguments, clippy::print_stdout)]
async fn edit(
    client: ApiClient,
    id: i64,
    title: Option<String>,
    slug: Option<String>,
    content: Option<String>,
    excerpt: Option<String>,
    cover_image: Option<String>,
    status: Option<String>,
    draft: bool,
    publish: bool,
) -> Result<(), CliError> {
    let author = author_id(&client).await;
    let mut editor = PostEditor::open(rest_store(client), PostId::new(id), author).await?;

    if let Some(title) = title {
        editor.set_title(&title);
    }
    if let Some(slug) = slug {
        editor.set_slug(&slug);
    }
    if let Some(content) = content {
        editor.set_content(&content);
    }
    if let Some(excerpt) = excerpt {
        editor.set_excerpt(&excerpt);
    }
    if let Some(url) = cover_image {
        editor.set_cover_image(&url);
    }
    if let Some(status) = status {
        editor.set_status(parse_status(&status)?);
    }

    let result = if publish {
        editor.publish().await
    } else if draft {
        editor.save_draft().await
    } else {
        editor.submit().await
    };

    match result {
        Ok(post) => {
            println!("Updated post {} ({}) as {}", post.id, post.slug, post.status);
            Ok(())
        }
        Err(err) => Err(submit_error(&editor, err)),
    }
}

#[allow(clippy::print_stdout)]
async fn delete(client: ApiClient, id: i64, yes: bool) -> Result<(), CliError> {
    let mut view = PostList::open(rest_store(client)).await?;

    let id = PostId::new(id);
    if !view.request_delete(id) {
        return Err(CliError::InvalidArg("id", format!("no post with id {id}")));
    }

    if !yes {
        let answer = prompt(&format!("Delete post {id}? [y/N] "))?;
        if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            view.cancel_delete();
            println!("Aborted");
            return Ok(());
        }
    }

    view.confirm_delete().await?;
    println!("Deleted post {id}");
    Ok(())
}
