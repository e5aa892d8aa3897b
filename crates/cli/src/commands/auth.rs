//! Session management commands.
//!
//! # Usage
//!
//! ```bash
//! quill login -e editor@example.com
//! quill whoami
//! quill logout
//! ```

use secrecy::SecretString;

use quillpress_client::{ApiClient, SessionContext};
use quillpress_core::Email;

use super::{CliError, prompt};

fn parse_email(input: &str) -> Result<Email, CliError> {
    Email::parse(input).map_err(|err| CliError::InvalidArg("email", err.to_string()))
}

fn resolve_password(flag: Option<String>) -> Result<SecretString, CliError> {
    match flag {
        Some(password) => Ok(SecretString::from(password)),
        None => Ok(SecretString::from(prompt("Password: ")?)),
    }
}

/// Sign in and persist the session token.
#[allow(clippy::print_stdout)]
pub async fn login(
    client: ApiClient,
    email: &str,
    password: Option<String>,
) -> Result<(), CliError> {
    let email = parse_email(email)?;
    let password = resolve_password(password)?;

    let mut session = SessionContext::signed_out(client);
    session.sign_in(&email, &password).await?;

    println!("Signed in as {email}");
    Ok(())
}

/// Create an account and persist the session token.
#[allow(clippy::print_stdout)]
pub async fn register(
    client: ApiClient,
    email: &str,
    password: Option<String>,
) -> Result<(), CliError> {
    let email = parse_email(email)?;
    let password = resolve_password(password)?;

    let mut session = SessionContext::signed_out(client);
    session.sign_up(&email, &password).await?;

    println!("Account created; signed in as {email}");
    Ok(())
}

/// Sign out, clearing the stored token.
#[allow(clippy::print_stdout)]
pub async fn logout(client: ApiClient) {
    let mut session = SessionContext::bootstrap(client).await;
    session.sign_out().await;
    println!("Signed out");
}

/// Show the active session, if any.
#[allow(clippy::print_stdout)]
pub async fn whoami(client: ApiClient) {
    let session = SessionContext::bootstrap(client).await;
    match session.user() {
        Some(user) => println!("{} (since {})", user.email, user.created_at.date_naive()),
        None => println!("Not signed in"),
    }
}
