//! Publication status enums for content records.

use serde::{Deserialize, Serialize};

/// Publication status of a blog post.
///
/// New records start in `Draft`. Transitions are one-directional in intent
/// (draft, then published, then archived) but nothing enforces monotonicity:
/// any status may be written at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// Publication status of a page.
///
/// Pages have no archive state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(format!("invalid post status: {s}")),
        }
    }
}

impl std::fmt::Display for PageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
        }
    }
}

impl std::str::FromStr for PageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            _ => Err(format!("invalid page status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_post_status_serde() {
        assert_eq!(
            serde_json::to_string(&PostStatus::Published).unwrap(),
            "\"published\""
        );
        let parsed: PostStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(parsed, PostStatus::Archived);
    }

    #[test]
    fn test_post_status_from_str() {
        assert_eq!("draft".parse::<PostStatus>().unwrap(), PostStatus::Draft);
        assert!("deleted".parse::<PostStatus>().is_err());
    }

    #[test]
    fn test_page_status_from_str() {
        assert_eq!(
            "published".parse::<PageStatus>().unwrap(),
            PageStatus::Published
        );
        assert!("archived".parse::<PageStatus>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for status in [PostStatus::Draft, PostStatus::Published, PostStatus::Archived] {
            assert_eq!(status.to_string().parse::<PostStatus>().unwrap(), status);
        }
    }
}
