//! Blog post entities and front matter parsing.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;
use crate::utils::text::parse_date;

pub use crate::utils::markdown::Heading;

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("valid regex"));

/// Returns `true` if `slug` can name a post file.
///
/// Anything else (dots, slashes, uppercase) is rejected before the
/// filesystem is touched.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

/// Metadata block at the top of every post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostFrontMatter {
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: String,
    #[serde(rename = "heroImage", skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
}

/// Loosely typed view of the YAML, before required fields are checked.
#[derive(Debug, Default, Deserialize)]
struct RawFrontMatter {
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    category: Option<String>,
    #[serde(rename = "heroImage", alias = "hero_image")]
    hero_image: Option<String>,
}

impl PostFrontMatter {
    /// Parses and checks the YAML front matter of the post `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the YAML is malformed or a required
    /// field (`title`, `description`, `date`, `category`) is missing or empty.
    pub fn parse(yaml: &str, slug: &str) -> Result<Self, AppError> {
        let raw: RawFrontMatter = if yaml.trim().is_empty() {
            RawFrontMatter::default()
        } else {
            serde_yaml_ng::from_str(yaml).map_err(|e| {
                AppError::bad_request(
                    format!("Invalid front matter for {slug}.mdx"),
                    json!({ "slug": slug, "reason": e.to_string() }),
                )
            })?
        };

        let require = |value: Option<String>, field: &str| -> Result<String, AppError> {
            match value {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(AppError::bad_request(
                    format!("Missing \"{field}\" in front matter for {slug}.mdx"),
                    json!({ "slug": slug, "field": field }),
                )),
            }
        };

        Ok(Self {
            title: require(raw.title, "title")?,
            description: require(raw.description, "description")?,
            date: require(raw.date, "date")?,
            category: require(raw.category, "category")?,
            hero_image: raw.hero_image.filter(|v| !v.trim().is_empty()),
        })
    }
}

/// A post as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub slug: String,
    #[serde(flatten)]
    pub front_matter: PostFrontMatter,
    pub reading_time: String,
}

impl PostSummary {
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

/// A fully rendered post.
#[derive(Debug, Clone)]
pub struct Post {
    pub slug: String,
    pub front_matter: PostFrontMatter,
    pub html: String,
    pub reading_time: String,
    pub headings: Vec<Heading>,
}

impl Post {
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            slug: self.slug.clone(),
            front_matter: self.front_matter.clone(),
            reading_time: self.reading_time.clone(),
        }
    }
}

/// Orders summaries newest first. Posts whose date does not parse go last,
/// keeping their relative order.
pub fn sort_newest_first(posts: &mut [PostSummary]) {
    posts.sort_by(|a, b| {
        let a = parse_date(&a.front_matter.date);
        let b = parse_date(&b.front_matter.date);
        match (a, b) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(slug: &str, date: &str) -> PostSummary {
        PostSummary {
            slug: slug.to_string(),
            front_matter: PostFrontMatter {
                title: slug.to_string(),
                description: "d".to_string(),
                date: date.to_string(),
                category: "Strategy".to_string(),
                hero_image: None,
            },
            reading_time: "1 min read".to_string(),
        }
    }

    #[test]
    fn test_parse_complete_front_matter() {
        let yaml = "title: Speed\ndescription: Why it matters\ndate: 2024-02-10\ncategory: Performance\nheroImage: /img/speed.png";
        let fm = PostFrontMatter::parse(yaml, "speed").unwrap();
        assert_eq!(fm.title, "Speed");
        assert_eq!(fm.date, "2024-02-10");
        assert_eq!(fm.hero_image.as_deref(), Some("/img/speed.png"));
    }

    #[test]
    fn test_parse_missing_field_names_it() {
        let yaml = "title: Speed\ndate: 2024-02-10\ncategory: Performance";
        let err = PostFrontMatter::parse(yaml, "speed").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing \"description\" in front matter for speed.mdx"
        );
    }

    #[test]
    fn test_parse_empty_field_is_missing() {
        let yaml = "title: ''\ndescription: d\ndate: 2024-02-10\ncategory: c";
        let err = PostFrontMatter::parse(yaml, "x").unwrap_err();
        assert!(err.to_string().contains("\"title\""));
    }

    #[test]
    fn test_parse_no_front_matter() {
        let err = PostFrontMatter::parse("", "bare").unwrap_err();
        assert_eq!(err.to_string(), "Missing \"title\" in front matter for bare.mdx");
    }

    #[test]
    fn test_sort_newest_first_unparseable_last() {
        let mut posts = vec![
            summary("old", "2023-01-01"),
            summary("broken", "someday"),
            summary("new", "2024-06-01"),
        ];
        sort_newest_first(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old", "broken"]);
    }
}
