//! Command implementations for the `quill` binary.

pub mod auth;
pub mod pages;
pub mod posts;
pub mod read;
pub mod stats;

use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A command-line argument failed to parse.
    #[error("Invalid {0}: {1}")]
    InvalidArg(&'static str, String),

    /// A backend request failed.
    #[error(transparent)]
    Api(#[from] quillpress_client::ApiError),

    /// An editing operation failed.
    #[error(transparent)]
    Editor(#[from] quillpress_admin::EditorError),

    /// A submission failed; carries the editor's notice (conflicts get
    /// distinguished wording).
    #[error("{0}")]
    Submit(String),

    /// Reading from the terminal failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Prompt on stdout and read one trimmed line from stdin.
#[allow(clippy::print_stdout)]
pub(crate) fn prompt(message: &str) -> std::io::Result<String> {
    use std::io::Write;

    print!("{message}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
