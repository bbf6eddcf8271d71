//! Blog post loading, rendering, and listing rules.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::entities::{Post, PostFrontMatter, PostSummary, sort_newest_first};
pub use crate::domain::entities::post::is_valid_slug;
use crate::domain::repositories::{PostRepository, PostSource};
use crate::error::AppError;
use crate::utils::front_matter::split_front_matter;
use crate::utils::markdown::{extract_headings, render_markdown};
use crate::utils::text::reading_time;

/// Category that matches every post.
pub const ALL_CATEGORIES: &str = "All";

/// Number of related posts shown under an article.
pub const RELATED_LIMIT: usize = 3;

/// Result of checking one post's front matter.
#[derive(Debug)]
pub struct PostCheck {
    pub slug: String,
    pub result: Result<PostSummary, AppError>,
}

/// Listing after a category filter was applied.
#[derive(Debug)]
pub struct CategoryListing {
    pub categories: Vec<String>,
    pub active: String,
    pub posts: Vec<PostSummary>,
}

/// Service for reading posts from a [`PostRepository`].
pub struct BlogService<R: PostRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: PostRepository + ?Sized> BlogService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// All valid posts, newest first.
    ///
    /// Posts with broken front matter are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the content directory cannot be read.
    pub async fn list_posts(&self) -> Result<Vec<PostSummary>, AppError> {
        let sources = self.repository.list().await?;

        let mut posts: Vec<PostSummary> = sources
            .iter()
            .filter_map(|source| match parse_summary(source) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    tracing::warn!(slug = %source.slug, error = %e, "Skipping post with invalid front matter");
                    None
                }
            })
            .collect();

        sort_newest_first(&mut posts);
        Ok(posts)
    }

    /// Loads and renders a single post.
    ///
    /// Invalid slugs, missing files, and posts that fail to load or parse all
    /// yield `None`; failures are logged.
    pub async fn get_post(&self, slug: &str) -> Option<Post> {
        if !is_valid_slug(slug) {
            tracing::debug!(slug = %slug, "Rejected post slug");
            return None;
        }

        let source = match self.repository.find(slug).await {
            Ok(Some(source)) => source,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!(slug = %slug, error = %e, "Failed to load post");
                return None;
            }
        };

        match render_post(&source) {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::error!(slug = %slug, error = %e, "Failed to parse post");
                None
            }
        }
    }

    /// Filters the listing by category.
    ///
    /// Unknown or missing categories fall back to [`ALL_CATEGORIES`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the content directory cannot be read.
    pub async fn list_by_category(
        &self,
        requested: Option<&str>,
    ) -> Result<CategoryListing, AppError> {
        let posts = self.list_posts().await?;
        Ok(filter_by_category(posts, requested))
    }

    /// Up to [`RELATED_LIMIT`] other posts, same category first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the content directory cannot be read.
    pub async fn related_posts(&self, post: &Post) -> Result<Vec<PostSummary>, AppError> {
        let posts = self.list_posts().await?;
        Ok(related_posts(&posts, &post.slug, &post.front_matter.category))
    }

    /// Parses the front matter of every post, returning one result per file.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the content directory cannot be read.
    pub async fn check_posts(&self) -> Result<Vec<PostCheck>, AppError> {
        let mut sources = self.repository.list().await?;
        sources.sort_by(|a, b| a.slug.cmp(&b.slug));

        Ok(sources
            .iter()
            .map(|source| PostCheck {
                slug: source.slug.clone(),
                result: parse_summary(source),
            })
            .collect())
    }

    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the content store is unreachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.health_check().await
    }
}

fn parse_summary(source: &PostSource) -> Result<PostSummary, AppError> {
    let (yaml, body) = split_front_matter(&source.raw);
    let front_matter = PostFrontMatter::parse(yaml, &source.slug)?;

    Ok(PostSummary {
        slug: source.slug.clone(),
        front_matter,
        reading_time: reading_time(body),
    })
}

fn render_post(source: &PostSource) -> Result<Post, AppError> {
    let (yaml, body) = split_front_matter(&source.raw);
    let front_matter = PostFrontMatter::parse(yaml, &source.slug)?;

    Ok(Post {
        slug: source.slug.clone(),
        front_matter,
        html: render_markdown(body),
        reading_time: reading_time(body),
        headings: extract_headings(body),
    })
}

/// `All` followed by the sorted, de-duplicated categories.
pub fn categories(posts: &[PostSummary]) -> Vec<String> {
    let unique: BTreeSet<&str> = posts
        .iter()
        .map(|p| p.front_matter.category.as_str())
        .collect();

    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(unique.into_iter().map(str::to_string))
        .collect()
}

pub fn filter_by_category(posts: Vec<PostSummary>, requested: Option<&str>) -> CategoryListing {
    let categories = categories(&posts);
    let active = requested
        .filter(|c| categories.iter().any(|known| known == *c))
        .unwrap_or(ALL_CATEGORIES)
        .to_string();

    let posts = if active == ALL_CATEGORIES {
        posts
    } else {
        posts
            .into_iter()
            .filter(|p| p.front_matter.category == active)
            .collect()
    };

    CategoryListing {
        categories,
        active,
        posts,
    }
}

pub fn related_posts(posts: &[PostSummary], slug: &str, category: &str) -> Vec<PostSummary> {
    let others = || posts.iter().filter(|p| p.slug != slug);

    others()
        .filter(|p| p.front_matter.category == category)
        .chain(others().filter(|p| p.front_matter.category != category))
        .take(RELATED_LIMIT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPostRepository;
    use serde_json::json;

    fn source(slug: &str, category: &str, date: &str) -> PostSource {
        PostSource {
            slug: slug.to_string(),
            raw: format!(
                "---\ntitle: {slug}\ndescription: About {slug}\ndate: {date}\ncategory: {category}\n---\n\n## Intro\n\nHello there.\n"
            ),
        }
    }

    fn summaries(items: &[(&str, &str, &str)]) -> Vec<PostSummary> {
        items
            .iter()
            .map(|(slug, category, date)| parse_summary(&source(slug, category, date)).unwrap())
            .collect()
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("why-speed-matters"));
        assert!(is_valid_slug("2024-recap"));
        assert!(!is_valid_slug("../etc/passwd"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("Upper"));
        assert!(!is_valid_slug("a.mdx"));
        assert!(!is_valid_slug(""));
    }

    #[tokio::test]
    async fn test_list_posts_sorted_and_skips_invalid() {
        let mut mock_repo = MockPostRepository::new();
        mock_repo.expect_list().times(1).returning(|| {
            Ok(vec![
                source("older", "Strategy", "2023-05-01"),
                PostSource {
                    slug: "broken".to_string(),
                    raw: "---\ntitle: Broken\n---\nbody".to_string(),
                },
                source("newer", "Design", "2024-02-10"),
            ])
        });

        let service = BlogService::new(Arc::new(mock_repo));
        let posts = service.list_posts().await.unwrap();

        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newer", "older"]);
        assert_eq!(posts[0].reading_time, "1 min read");
    }

    #[tokio::test]
    async fn test_list_posts_propagates_directory_error() {
        let mut mock_repo = MockPostRepository::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(|| Err(AppError::internal("unreadable", json!({}))));

        let service = BlogService::new(Arc::new(mock_repo));
        assert!(matches!(
            service.list_posts().await,
            Err(AppError::Internal { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_post_renders_body() {
        let mut mock_repo = MockPostRepository::new();
        mock_repo
            .expect_find()
            .withf(|slug| slug == "hello")
            .times(1)
            .returning(|slug| Ok(Some(source(slug, "Design", "2024-01-01"))));

        let service = BlogService::new(Arc::new(mock_repo));
        let post = service.get_post("hello").await.unwrap();

        assert_eq!(post.front_matter.title, "hello");
        assert!(post.html.contains(r#"<h2 id="intro">"#));
        assert_eq!(post.headings.len(), 1);
        assert_eq!(post.headings[0].id, "intro");
    }

    #[tokio::test]
    async fn test_get_post_invalid_slug_never_reads() {
        let mut mock_repo = MockPostRepository::new();
        mock_repo.expect_find().times(0);

        let service = BlogService::new(Arc::new(mock_repo));
        assert!(service.get_post("../secrets").await.is_none());
        assert!(service.get_post("Post.MDX").await.is_none());
    }

    #[tokio::test]
    async fn test_get_post_missing_or_broken_is_none() {
        let mut mock_repo = MockPostRepository::new();
        mock_repo
            .expect_find()
            .withf(|slug| slug == "missing")
            .returning(|_| Ok(None));
        mock_repo
            .expect_find()
            .withf(|slug| slug == "broken")
            .returning(|slug| {
                Ok(Some(PostSource {
                    slug: slug.to_string(),
                    raw: "no front matter".to_string(),
                }))
            });
        mock_repo
            .expect_find()
            .withf(|slug| slug == "io-error")
            .returning(|_| Err(AppError::internal("boom", json!({}))));

        let service = BlogService::new(Arc::new(mock_repo));
        assert!(service.get_post("missing").await.is_none());
        assert!(service.get_post("broken").await.is_none());
        assert!(service.get_post("io-error").await.is_none());
    }

    #[test]
    fn test_categories_all_first_then_sorted() {
        let posts = summaries(&[
            ("a", "Strategy", "2024-01-01"),
            ("b", "Design", "2024-01-02"),
            ("c", "Strategy", "2024-01-03"),
        ]);
        assert_eq!(categories(&posts), vec!["All", "Design", "Strategy"]);
    }

    #[test]
    fn test_filter_by_category() {
        let posts = summaries(&[
            ("a", "Strategy", "2024-01-01"),
            ("b", "Design", "2024-01-02"),
        ]);

        let listing = filter_by_category(posts.clone(), Some("Design"));
        assert_eq!(listing.active, "Design");
        assert_eq!(listing.posts.len(), 1);
        assert_eq!(listing.posts[0].slug, "b");

        let listing = filter_by_category(posts.clone(), Some("Unknown"));
        assert_eq!(listing.active, "All");
        assert_eq!(listing.posts.len(), 2);

        let listing = filter_by_category(posts, None);
        assert_eq!(listing.active, "All");
    }

    #[test]
    fn test_related_posts_same_category_first() {
        let posts = summaries(&[
            ("current", "Design", "2024-05-01"),
            ("other-1", "Strategy", "2024-04-01"),
            ("design-1", "Design", "2024-03-01"),
            ("other-2", "Strategy", "2024-02-01"),
            ("design-2", "Design", "2024-01-01"),
        ]);

        let related = related_posts(&posts, "current", "Design");
        let slugs: Vec<_> = related.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["design-1", "design-2", "other-1"]);
    }

    #[test]
    fn test_related_posts_excludes_self_when_alone() {
        let posts = summaries(&[("only", "Design", "2024-01-01")]);
        assert!(related_posts(&posts, "only", "Design").is_empty());
    }

    #[tokio::test]
    async fn test_check_posts_reports_each_file() {
        let mut mock_repo = MockPostRepository::new();
        mock_repo.expect_list().returning(|| {
            Ok(vec![
                source("good", "Design", "2024-01-01"),
                PostSource {
                    slug: "bad".to_string(),
                    raw: "---\ntitle: Bad\ndescription: x\ndate: 2024-01-01\n---\n".to_string(),
                },
            ])
        });

        let service = BlogService::new(Arc::new(mock_repo));
        let checks = service.check_posts().await.unwrap();

        assert_eq!(checks[0].slug, "bad");
        let err = checks[0].result.as_ref().unwrap_err();
        assert_eq!(err.to_string(), "Missing \"category\" in front matter for bad.mdx");
        assert!(checks[1].result.is_ok());
    }
}
