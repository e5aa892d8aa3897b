//! Core types for Quillpress.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod content;
pub mod email;
pub mod id;
pub mod slug;
pub mod status;
pub mod user;

pub use content::{Page, PageDraft, Post, PostDraft, PublicPage, PublicPost};
pub use email::{Email, EmailError};
pub use id::*;
pub use slug::{Slug, SlugError, generate_slug, validate_slug};
pub use status::*;
pub use user::User;
