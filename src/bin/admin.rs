//! CLI administration tool for the Multimedium.dev site.
//!
//! Works directly on the blog content directory, without the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # List published posts
//! cargo run --bin admin -- posts list
//!
//! # Validate the front matter of every post (non-zero exit on failure)
//! cargo run --bin admin -- posts check
//!
//! # Scaffold a new post interactively
//! cargo run --bin admin -- posts new
//!
//! # Print the sitemap
//! cargo run --bin admin -- sitemap
//! ```
//!
//! # Environment Variables
//!
//! - `CONTENT_DIR` (optional): blog directory, overridden by `--content-dir`

use multimedium_site::application::services::BlogService;
use multimedium_site::domain::entities::post::is_valid_slug;
use multimedium_site::infrastructure::content::FsPostRepository;
use multimedium_site::seo::sitemap;
use multimedium_site::utils::text::{format_date, slugify};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing site content.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Blog content directory (default: $CONTENT_DIR or content/blog)
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage blog posts
    Posts {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Print the XML sitemap
    Sitemap,
}

/// Post management subcommands.
#[derive(Subcommand)]
enum PostAction {
    /// List posts, newest first
    List,

    /// Validate every post's front matter
    Check,

    /// Scaffold a new post
    New {
        /// Post title
        #[arg(short, long)]
        title: Option<String>,

        /// Post category (e.g., "Design", "SEO")
        #[arg(short, long)]
        category: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let content_dir = cli
        .content_dir
        .or_else(|| std::env::var("CONTENT_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("content/blog"));

    let repo = Arc::new(FsPostRepository::new(content_dir));
    let service = BlogService::new(repo.clone());

    match cli.command {
        Commands::Posts { action } => match action {
            PostAction::List => list_posts(&service).await?,
            PostAction::Check => check_posts(&service).await?,
            PostAction::New {
                title,
                category,
                yes,
            } => new_post(&repo, title, category, yes).await?,
        },
        Commands::Sitemap => print_sitemap(&service).await?,
    }

    Ok(())
}

/// Lists posts in the order the blog shows them.
///
/// # Output Format
///
/// ```text
/// 📝 Posts
///
///   Date                Category        Slug
///   ──────────────────────────────────────────────────────────────
///   February 10, 2024   Performance     why-speed-matters
/// ```
async fn list_posts(service: &BlogService<FsPostRepository>) -> Result<()> {
    println!("{}", "📝 Posts".bright_blue().bold());
    println!();

    let posts = service
        .list_posts()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list posts: {}", e))?;

    if posts.is_empty() {
        println!("{}", "  No posts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin posts new",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<20} {:<16} {}",
        "Date".bright_white().bold(),
        "Category".bright_white().bold(),
        "Slug".bright_white().bold()
    );
    println!("  {}", "─".repeat(64).bright_black());

    for post in &posts {
        println!(
            "  {:<20} {:<16} {}",
            format_date(&post.front_matter.date).bright_black(),
            post.front_matter.category.cyan(),
            post.slug
        );
    }

    println!();
    println!("  Total: {}", posts.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Parses every post and reports the ones that would be skipped.
///
/// # Errors
///
/// Returns an error (and so a non-zero exit code) if any post fails.
async fn check_posts(service: &BlogService<FsPostRepository>) -> Result<()> {
    println!("{}", "🔍 Checking posts".bright_blue().bold());
    println!();

    let checks = service
        .check_posts()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read posts: {}", e))?;

    let mut failures = 0;
    for check in &checks {
        match &check.result {
            Ok(_) => println!("  {} {}", "✓".green(), check.slug),
            Err(e) => {
                failures += 1;
                println!("  {} {}: {}", "✗".red(), check.slug, e.to_string().red());
            }
        }
    }

    println!();
    if failures > 0 {
        anyhow::bail!("{} of {} posts failed validation", failures, checks.len());
    }

    println!(
        "{}",
        format!("✅ All {} posts are valid", checks.len()).green().bold()
    );
    Ok(())
}

/// Creates `<slug>.mdx` with front matter filled in from prompts.
///
/// # Flow
///
/// 1. Prompt for title, description and category (or use provided)
/// 2. Derive the slug from the title
/// 3. Confirm (unless `--yes` flag)
/// 4. Write the file, refusing to overwrite an existing post
async fn new_post(
    repo: &FsPostRepository,
    title: Option<String>,
    category: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "✏️  New post".bright_blue().bold());
    println!();

    let title = match title {
        Some(t) => t,
        None => Input::new().with_prompt("Title").interact_text()?,
    };

    let description: String = Input::new()
        .with_prompt("Description")
        .interact_text()?;

    let category = match category {
        Some(c) => c,
        None => Input::new()
            .with_prompt("Category")
            .with_initial_text("Strategy")
            .interact_text()?,
    };

    let slug = post_slug(&title)?;

    let date = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let path = repo.dir().join(format!("{slug}.mdx"));

    println!();
    println!("{}", "Post details:".bright_white().bold());
    println!("  Title:    {}", title.cyan());
    println!("  Slug:     {}", slug.bright_yellow());
    println!("  Category: {}", category.cyan());
    println!("  File:     {}", path.display().to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this post?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    if tokio::fs::try_exists(&path).await? {
        anyhow::bail!("{} already exists", path.display());
    }

    tokio::fs::create_dir_all(repo.dir())
        .await
        .with_context(|| format!("Failed to create {}", repo.dir().display()))?;

    let body = format!(
        "---\ntitle: {}\ndescription: {}\ndate: {}\ncategory: {}\n---\n\n## Overview\n\nStart writing here.\n",
        yaml_string(&title),
        yaml_string(&description),
        date,
        yaml_string(&category),
    );

    tokio::fs::write(&path, body)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{}", "✅ Post created!".green().bold());
    println!("  Preview at: {}", format!("/blog/{slug}").bright_cyan());
    println!();

    Ok(())
}

/// Derives the file slug for `title`, rejecting titles the blog could not serve.
fn post_slug(title: &str) -> Result<String> {
    let slug = slugify(title);
    anyhow::ensure!(!slug.is_empty(), "Title must contain letters or digits");
    anyhow::ensure!(
        is_valid_slug(&slug),
        "Title gives the slug '{}', which is not a valid post slug (use letters, digits and hyphens)",
        slug
    );
    Ok(slug)
}

/// Quotes a YAML scalar.
fn yaml_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

async fn print_sitemap(service: &BlogService<FsPostRepository>) -> Result<()> {
    let posts = service
        .list_posts()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list posts: {}", e))?;

    let today = chrono::Utc::now().date_naive();
    print!(
        "{}",
        sitemap::render_sitemap(&sitemap::sitemap_entries(&posts, today))
    );

    Ok(())
}
