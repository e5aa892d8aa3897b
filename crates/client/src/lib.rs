//! Quillpress Client - API access for the content workflow.
//!
//! This crate owns everything that talks to the backend:
//!
//! - [`config`] - Base URL and state directory resolution from environment
//! - [`credentials`] - The persisted bearer-token slot
//! - [`http`] - The request wrapper: JSON bodies, bearer auth, error
//!   normalization
//! - [`auth`] - The session context (bootstrap, sign-in/up/out)
//! - [`store`] - The `ContentStore` capability interface and its REST adapter
//! - [`public`] - Public reads with fallback to built-in sample content
//! - [`render`] - Markdown rendering for public content
//!
//! # Availability vs consistency
//!
//! Public reads never surface a hard error while a fallback source is
//! configured; authenticated paths always surface errors to the caller. See
//! [`public::PublicReader`] for the split.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod public;
pub mod render;
pub mod sample;
pub mod store;

pub use auth::SessionContext;
pub use config::{ClientConfig, ConfigError};
pub use credentials::CredentialStore;
pub use error::ApiError;
pub use http::ApiClient;
pub use public::{FallbackSource, PublicReader};
pub use sample::SamplePosts;
pub use store::{ContentStore, RestContentStore};
