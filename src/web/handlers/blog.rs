//! Blog ("Notes") index and post pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use url::form_urlencoded::byte_serialize;

use super::error::PageError;
use super::layout::Layout;
use crate::application::services::blog_service::ALL_CATEGORIES;
use crate::domain::entities::{Heading, Post, PostSummary};
use crate::seo::PageMeta;
use crate::seo::schema::{self, Crumb, HOME};
use crate::state::AppState;
use crate::utils::text::format_date;
use crate::utils::visual::prism_background;

#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    pub category: Option<String>,
}

/// A category filter chip.
#[derive(Debug)]
pub struct CategoryLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// A post card as rendered in listings.
#[derive(Debug)]
pub struct PostCard {
    pub href: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub reading_time: String,
    pub hero_image: Option<String>,
}

impl From<PostSummary> for PostCard {
    fn from(post: PostSummary) -> Self {
        Self {
            href: post.path(),
            date: format_date(&post.front_matter.date),
            title: post.front_matter.title,
            description: post.front_matter.description,
            category: post.front_matter.category,
            reading_time: post.reading_time,
            hero_image: post.front_matter.hero_image,
        }
    }
}

fn category_href(category: &str) -> String {
    if category == ALL_CATEGORIES {
        "/blog".to_string()
    } else {
        let encoded: String = byte_serialize(category.as_bytes()).collect();
        format!("/blog?category={encoded}")
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub layout: Layout,
    pub categories: Vec<CategoryLink>,
    pub active: String,
    pub posts: Vec<PostCard>,
    pub background: String,
}

/// Lists posts, optionally filtered by category.
///
/// # Endpoint
///
/// `GET /blog?category=<name>`
///
/// Unknown categories show every post.
///
/// # Errors
///
/// Renders a 500 page if the content directory cannot be read.
pub async fn blog_index_handler(
    State(state): State<AppState>,
    Query(query): Query<BlogQuery>,
) -> Result<BlogTemplate, PageError> {
    let listing = state
        .blog_service
        .list_by_category(query.category.as_deref())
        .await?;

    let meta = PageMeta::new(
        "Notes",
        "Field notes on web design, conversion, SEO, and running a site that actually brings in work.",
        "/blog",
    );

    let categories = listing
        .categories
        .iter()
        .map(|c| CategoryLink {
            label: c.clone(),
            href: category_href(c),
            active: *c == listing.active,
        })
        .collect();

    Ok(BlogTemplate {
        layout: Layout::new(meta, &[HOME, Crumb::new("Notes", "/blog")]),
        categories,
        active: listing.active,
        posts: listing.posts.into_iter().map(PostCard::from).collect(),
        background: prism_background("blog"),
    })
}

#[derive(Template, WebTemplate)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub layout: Layout,
    pub post: Post,
    pub date: String,
    pub toc: Vec<Heading>,
    pub related: Vec<PostCard>,
    pub newsletter_tag: String,
    pub background: String,
}

/// Renders a single post with its table of contents and related posts.
///
/// # Endpoint
///
/// `GET /blog/{slug}`
///
/// # Errors
///
/// Unknown, invalid, or unparseable posts render the 404 page.
pub async fn blog_post_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<PostTemplate, PageError> {
    let post = state
        .blog_service
        .get_post(&slug)
        .await
        .ok_or_else(|| PageError::not_found("Post", &format!("/blog/{slug}")))?;

    let related = match state.blog_service.related_posts(&post).await {
        Ok(posts) => posts.into_iter().map(PostCard::from).collect(),
        Err(e) => {
            tracing::warn!(slug = %post.slug, error = %e, "Could not load related posts");
            Vec::new()
        }
    };

    let fm = &post.front_matter;
    let path = format!("/blog/{}", post.slug);
    let mut meta = PageMeta::new(&fm.title, fm.description.clone(), &path).article(fm.date.clone());
    if let Some(image) = &fm.hero_image {
        meta = meta.with_image(image);
    }

    let layout = Layout::new(
        meta,
        &[HOME, Crumb::new("Notes", "/blog"), Crumb::new(&fm.title, &path)],
    )
    .with_schema(&schema::article(&post));

    Ok(PostTemplate {
        layout,
        date: format_date(&fm.date),
        toc: post.headings.clone(),
        related,
        newsletter_tag: format!("blog:{}", post.slug),
        background: prism_background(&post.slug),
        post,
    })
}
