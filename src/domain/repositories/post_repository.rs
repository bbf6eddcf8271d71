//! Repository trait for reading blog post sources.

use crate::error::AppError;
use async_trait::async_trait;

/// Raw markdown of a post together with its slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSource {
    pub slug: String,
    pub raw: String,
}

/// Read-only access to blog post files.
///
/// # Implementations
///
/// - [`crate::infrastructure::content::FsPostRepository`] - Directory of `.md`/`.mdx` files
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Lists every post source, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the content directory cannot be read.
    async fn list(&self) -> Result<Vec<PostSource>, AppError>;

    /// Loads one post by slug. The slug has already been checked to be safe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on I/O errors other than a missing file.
    async fn find(&self, slug: &str) -> Result<Option<PostSource>, AppError>;

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if it is not.
    async fn health_check(&self) -> Result<(), AppError>;
}
