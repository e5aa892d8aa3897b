//! Quillpress CLI - content workflow tools.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (token is stored under ~/.quillpress)
//! quill login -e editor@example.com
//!
//! # Create and publish a post
//! quill posts create --title "Hello World" --content "Body text" --publish
//!
//! # List drafts
//! quill posts list --status draft
//!
//! # Delete a post (prompts for confirmation)
//! quill posts delete 12
//!
//! # Read public content; falls back to sample posts when the backend
//! # is unreachable
//! quill read posts
//! ```
//!
//! # Commands
//!
//! - `login` / `register` / `logout` / `whoami` - session management
//! - `posts` / `pages` - authenticated content management
//! - `read` - public reads with sample-content fallback
//! - `stats` - content counts

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use quillpress_client::{ApiClient, ClientConfig};

mod commands;

#[derive(Parser)]
#[command(name = "quill")]
#[command(author, version, about = "Quillpress CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session token
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create an account and sign in
    Register {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out and discard the stored token
    Logout,
    /// Show the active session
    Whoami,
    /// Manage blog posts
    Posts {
        #[command(subcommand)]
        action: commands::posts::PostAction,
    },
    /// Manage pages
    Pages {
        #[command(subcommand)]
        action: commands::pages::PageAction,
    },
    /// Read public content (no sign-in required)
    Read {
        #[command(subcommand)]
        target: commands::read::ReadTarget,
    },
    /// Show content counts
    Stats,
}

#[tokio::main]
async fn main() {
    // Initialize tracing; defaults to warnings so command output stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let client = ApiClient::new(&config);

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(client, &email, password).await?;
        }
        Commands::Register { email, password } => {
            commands::auth::register(client, &email, password).await?;
        }
        Commands::Logout => commands::auth::logout(client).await,
        Commands::Whoami => commands::auth::whoami(client).await,
        Commands::Posts { action } => commands::posts::run(client, action).await?,
        Commands::Pages { action } => commands::pages::run(client, action).await?,
        Commands::Read { target } => commands::read::run(client, target).await?,
        Commands::Stats => commands::stats::run(client).await?,
    }
    Ok(())
}
