//! Core domain entities.
//!
//! - [`Post`], [`PostSummary`], [`PostFrontMatter`] - Blog posts read from disk
//! - [`ContactInquiry`], [`NewsletterOptIn`] - Validated form submissions

pub mod post;
pub mod submission;

pub use post::{Heading, Post, PostFrontMatter, PostSummary, sort_newest_first};
pub use submission::{ContactInquiry, NewsletterOptIn};
