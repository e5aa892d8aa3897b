//! URL slug generation and validation.
//!
//! Slugs are derived client-side from titles for editing ergonomics, but the
//! grammar is re-checked independently before any record is submitted, so the
//! contract holds even when the generator is bypassed by direct edits.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("slug may only contain lowercase letters, numbers, and hyphens")]
    InvalidCharacter,
    /// The input starts or ends with a hyphen, or contains a doubled hyphen.
    #[error("slug hyphens must separate non-empty segments")]
    MisplacedHyphen,
}

/// Derive a URL slug from free text.
///
/// Lowercases the input, trims surrounding whitespace, strips every character
/// that is not an ASCII word character, whitespace, or hyphen, collapses runs
/// of whitespace/underscores/hyphens into a single hyphen, and drops leading
/// and trailing hyphens.
///
/// Total and deterministic; the empty string maps to the empty string. Any
/// non-empty output satisfies [`validate_slug`].
///
/// # Examples
///
/// ```
/// use quillpress_core::generate_slug;
///
/// assert_eq!(
///     generate_slug("Getting Started with Headless CMS!"),
///     "getting-started-with-headless-cms"
/// );
/// assert_eq!(generate_slug("  Hello__World  "), "hello-world");
/// assert_eq!(generate_slug("!!!"), "");
/// ```
#[must_use]
pub fn generate_slug(input: &str) -> String {
    let lowered = input.to_lowercase();
    let trimmed = lowered.trim();

    let mut out = String::with_capacity(trimmed.len());
    let mut pending_hyphen = false;
    for c in trimmed.chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_hyphen = true;
        } else if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        }
        // all other characters are stripped
    }

    out
}

/// Check a candidate against the slug grammar.
///
/// True iff the candidate matches `[a-z0-9]+(-[a-z0-9]+)*` anchored at both
/// ends: non-empty, no doubled hyphen, no leading or trailing hyphen.
#[must_use]
pub fn validate_slug(candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }

    // Tracks whether the previous position was a hyphen (or the start),
    // which makes a hyphen at the current position illegal.
    let mut after_hyphen = true;
    for c in candidate.chars() {
        match c {
            'a'..='z' | '0'..='9' => after_hyphen = false,
            '-' => {
                if after_hyphen {
                    return false;
                }
                after_hyphen = true;
            }
            _ => return false,
        }
    }

    !after_hyphen
}

/// A validated URL slug.
///
/// Wraps a string known to match the slug grammar. Records carry their slug
/// as plain text while being edited; this type is the gate they pass through
/// before a write payload is built.
///
/// ## Examples
///
/// ```
/// use quillpress_core::Slug;
///
/// assert!(Slug::parse("a-b-c1").is_ok());
/// assert!(Slug::parse("a--b").is_err());  // doubled hyphen
/// assert!(Slug::parse("-ab").is_err());   // leading hyphen
/// assert!(Slug::parse("").is_err());      // empty
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Parse a `Slug` from a string, re-validating the grammar.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains a character outside
    /// `[a-z0-9-]`, or places a hyphen at the start, at the end, or adjacent
    /// to another hyphen.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }
        if s.chars().any(|c| !matches!(c, 'a'..='z' | '0'..='9' | '-')) {
            return Err(SlugError::InvalidCharacter);
        }
        if !validate_slug(s) {
            return Err(SlugError::MisplacedHyphen);
        }
        Ok(Self(s.to_owned()))
    }

    /// Generate a slug from a title.
    ///
    /// # Errors
    ///
    /// Returns [`SlugError::Empty`] when the title contains no usable
    /// characters.
    pub fn from_title(title: &str) -> Result<Self, SlugError> {
        Self::parse(&generate_slug(title))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Slug` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_basic() {
        assert_eq!(
            generate_slug("Getting Started with Headless CMS!"),
            "getting-started-with-headless-cms"
        );
    }

    #[test]
    fn test_generate_trims_and_lowercases() {
        assert_eq!(generate_slug("  My First Post  "), "my-first-post");
        assert_eq!(generate_slug("ALL CAPS"), "all-caps");
    }

    #[test]
    fn test_generate_collapses_separator_runs() {
        assert_eq!(generate_slug("a _-  b"), "a-b");
        assert_eq!(generate_slug("hello___world"), "hello-world");
    }

    #[test]
    fn test_generate_strips_punctuation() {
        assert_eq!(generate_slug("What's New? (2025)"), "whats-new-2025");
        assert_eq!(generate_slug("a!b"), "ab");
    }

    #[test]
    fn test_generate_strips_edge_hyphens() {
        assert_eq!(generate_slug("-leading"), "leading");
        assert_eq!(generate_slug("trailing-"), "trailing");
        assert_eq!(generate_slug("--both--"), "both");
    }

    #[test]
    fn test_generate_empty_and_all_stripped() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("!!!"), "");
        assert_eq!(generate_slug(" - _ - "), "");
    }

    #[test]
    fn test_generate_non_ascii_stripped() {
        // Non-ASCII letters cannot appear in a valid slug, so the
        // generator drops them rather than emit an unvalidatable result.
        assert_eq!(generate_slug("café bar"), "caf-bar");
        assert_eq!(generate_slug("日本語"), "");
    }

    #[test]
    fn test_generate_idempotent() {
        for input in [
            "Getting Started with Headless CMS!",
            "  Hello__World  ",
            "already-a-slug",
            "Mixed 123 Things?!",
        ] {
            let once = generate_slug(input);
            assert_eq!(generate_slug(&once), once);
        }
    }

    #[test]
    fn test_generated_slugs_validate() {
        for input in [
            "Getting Started with Headless CMS!",
            "   spaces   everywhere   ",
            "Ünïcödé Títle",
            "a!@#$%^&*()b",
            "_-_-_x_-_-_",
        ] {
            let slug = generate_slug(input);
            if !slug.is_empty() {
                assert!(validate_slug(&slug), "generated slug {slug:?} must validate");
            }
        }
    }

    #[test]
    fn test_validate_grammar() {
        assert!(validate_slug("a-b-c1"));
        assert!(validate_slug("a"));
        assert!(validate_slug("123"));

        assert!(!validate_slug(""));
        assert!(!validate_slug("a--b"));
        assert!(!validate_slug("-ab"));
        assert!(!validate_slug("ab-"));
        assert!(!validate_slug("A-b"));
        assert!(!validate_slug("a_b"));
        assert!(!validate_slug("a b"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Slug::parse(""), Err(SlugError::Empty));
        assert_eq!(Slug::parse("A"), Err(SlugError::InvalidCharacter));
        assert_eq!(Slug::parse("a--b"), Err(SlugError::MisplacedHyphen));
        assert_eq!(Slug::parse("-a"), Err(SlugError::MisplacedHyphen));
    }

    #[test]
    fn test_from_title() {
        let slug = Slug::from_title("Hello, World!").unwrap();
        assert_eq!(slug.as_str(), "hello-world");

        assert_eq!(Slug::from_title("???"), Err(SlugError::Empty));
    }

    #[test]
    fn test_serde_roundtrip() {
        let slug = Slug::parse("my-post").unwrap();
        let json = serde_json::to_string(&slug).unwrap();
        assert_eq!(json, "\"my-post\"");

        let parsed: Slug = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, slug);
    }
}
