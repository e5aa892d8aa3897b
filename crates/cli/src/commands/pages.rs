//! Page management commands.
//!
//! # Usage
//!
//! ```bash
//! quill pages list
//! quill pages create --title "About Us" --content "Who we are" --publish
//! quill pages edit 4 --content "Updated copy"
//! quill pages delete 4 --yes
//! ```

use std::sync::Arc;

use clap::Subcommand;

use quillpress_admin::{PageEditor, PageList};
use quillpress_client::{ApiClient, ContentStore, RestContentStore, SessionContext};
use quillpress_core::{PageId, PageStatus, UserId};

use super::{CliError, prompt};

#[derive(Subcommand)]
pub enum PageAction {
    /// List pages, optionally filtered by status
    List {
        /// Filter: draft or published
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Create a page
    Create {
        /// Page title
        #[arg(short, long)]
        title: String,

        /// Slug override (derived from the title when omitted)
        #[arg(long)]
        slug: Option<String>,

        /// Page body (markdown)
        #[arg(short, long, default_value = "")]
        content: String,

        /// Publish immediately instead of saving a draft
        #[arg(long)]
        publish: bool,
    },
    /// Edit an existing page
    Edit {
        /// Page ID
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(long)]
        slug: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        /// Status to write (`draft`, `published`)
        #[arg(short, long)]
        status: Option<String>,

        /// Force draft status, regardless of --status
        #[arg(long, conflicts_with = "publish")]
        draft: bool,

        /// Force published status, regardless of --status
        #[arg(long)]
        publish: bool,
    },
    /// Delete a page
    Delete {
        /// Page ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(client: ApiClient, action: PageAction) -> Result<(), CliError> {
    match action {
        PageAction::List { status } => list(client, status).await,
        PageAction::Create {
            title,
            slug,
            content,
            publish,
        } => create(client, &title, slug, &content, publish).await,
        PageAction::Edit {
            id,
            title,
            slug,
            content,
            status,
            draft,
            publish,
        } => edit(client, id, title, slug, content, status, draft, publish).await,
        PageAction::Delete { id, yes } => delete(client, id, yes).await,
    }
}

fn parse_status(input: &str) -> Result<PageStatus, CliError> {
    input
        .parse()
        .map_err(|err: String| CliError::InvalidArg("status", err))
}

async fn author_id(client: &ApiClient) -> Option<UserId> {
    let session = SessionContext::bootstrap(client.clone()).await;
    session.user().map(|user| user.id)
}

fn rest_store(client: ApiClient) -> Arc<dyn ContentStore> {
    Arc::new(RestContentStore::new(client))
}

fn submit_error(editor: &PageEditor, err: quillpress_admin::EditorError) -> CliError {
    match editor.notice() {
        Some(notice) => CliError::Submit(notice.to_string()),
        None => CliError::Editor(err),
    }
}

#[allow(clippy::print_stdout)]
async fn list(client: ApiClient, status: Option<String>) -> Result<(), CliError> {
    let filter = status.as_deref().map(parse_status).transpose()?;
    let view = PageList::open_filtered(rest_store(client), filter).await?;

    if view.pages().is_empty() {
        println!("No pages found");
        return Ok(());
    }

    for page in view.pages() {
        println!(
            "{:>5}  {:<9}  {}  /{}  (updated {})",
            page.id,
            page.status.to_string(),
            page.title,
            page.slug,
            page.updated_at.date_naive()
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
    publish: bool,
) -> Result<(), CliError> {
    let author = author_id(&client).await;
    let mut editor = PageEditor::new(rest_store(client), author);

    editor.set_title(title);
    if let Some(slug) = slug {
        editor.set_slug(&slug);
    }
    editor.set_content(content);

    let result = if publish {
        editor.publish().await
    } else {
        editor.save_draft().await
    };

    match result {
        Ok(page) => {
            println!("Created page {} ({}) as {}", page.id, page.slug, page.status);
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
    status: Option<String>,
    draft: bool,
    publish: bool,
) -> Result<(), CliError> {
    let author = author_id(&client).await;
    let mut editor = PageEditor::open(rest_store(client), PageId::new(id), author).await?;

    if let Some(title) = title {
        editor.set_title(&title);
    }
    if let Some(slug) = slug {
        editor.set_slug(&slug);
    }
    if let Some(content) = content {
        editor.set_content(&content);
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
        Ok(page) => {
            println!("Updated page {} ({}) as {}", page.id, page.slug, page.status);
            Ok(())
        }
        Err(err) => Err(submit_error(&editor, err)),
    }
}

#[allow(clippy::print_stdout)]
async fn delete(client: ApiClient, id: i64, yes: bool) -> Result<(), CliError> {
    let mut view = PageList::open(rest_store(client)).await?;

    let id = PageId::new(id);
    if !view.request_delete(id) {
        return Err(CliError::InvalidArg("id", format!("no page with id {id}")));
    }

    if !yes {
        let answer = prompt(&format!("Delete page {id}? [y/N] "))?;
        if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            view.cancel_delete();
            println!("Aborted");
            return Ok(());
        }
    }

    view.confirm_delete().await?;
    println!("Deleted page {id}");
    Ok(())
}
