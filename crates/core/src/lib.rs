//! Quillpress Core - Shared types library.
//!
//! This crate provides common types used across all Quillpress components:
//! - `client` - API client, credential storage, and public content reader
//! - `admin` - Editor and list flows for posts and pages
//! - `cli` - The `quill` command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, slugs, emails, and
//!   statuses, plus the content record shapes shared with the backend

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
