//! Filesystem-backed post repository.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::json;
use tokio::fs;

use crate::domain::entities::post::is_valid_slug;
use crate::domain::repositories::{PostRepository, PostSource};
use crate::error::AppError;

/// File extensions recognised as posts, in lookup order.
const EXTENSIONS: &[&str] = &["mdx", "md"];

/// Reads posts from a flat directory of `.mdx` / `.md` files.
///
/// The slug is the file stem. Files whose stem is not a valid slug are
/// ignored. When both `x.mdx` and `x.md` exist, `x.mdx` wins.
pub struct FsPostRepository {
    dir: PathBuf,
}

impl FsPostRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slug_of(path: &Path) -> Option<(String, usize)> {
        let ext = path.extension()?.to_str()?;
        let rank = EXTENSIONS.iter().position(|e| *e == ext)?;
        let stem = path.file_stem()?.to_str()?;
        is_valid_slug(stem).then(|| (stem.to_string(), rank))
    }

    fn read_error(&self, e: std::io::Error) -> AppError {
        tracing::error!(dir = %self.dir.display(), error = %e, "Failed to read content directory");
        AppError::internal(
            "Failed to read blog content",
            json!({ "dir": self.dir.display().to_string(), "reason": e.to_string() }),
        )
    }
}

#[async_trait]
impl PostRepository for FsPostRepository {
    async fn list(&self) -> Result<Vec<PostSource>, AppError> {
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| self.read_error(e))?;

        let mut chosen: BTreeMap<String, (usize, PathBuf)> = BTreeMap::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| self.read_error(e))? {
            let path = entry.path();
            let Some((slug, rank)) = Self::slug_of(&path) else {
                continue;
            };
            match chosen.get(&slug) {
                Some((existing, _)) if *existing <= rank => {}
                _ => {
                    chosen.insert(slug, (rank, path));
                }
            }
        }

        let mut sources = Vec::with_capacity(chosen.len());
        for (slug, (_, path)) in chosen {
            match fs::read_to_string(&path).await {
                Ok(raw) => sources.push(PostSource { slug, raw }),
                Err(e) => {
                    tracing::warn!(slug = %slug, path = %path.display(), error = %e, "Skipping unreadable post");
                }
            }
        }

        tracing::debug!(count = sources.len(), "Loaded post sources");
        Ok(sources)
    }

    async fn find(&self, slug: &str) -> Result<Option<PostSource>, AppError> {
        for ext in EXTENSIONS {
            let path = self.dir.join(format!("{slug}.{ext}"));
            match fs::read_to_string(&path).await {
                Ok(raw) => {
                    return Ok(Some(PostSource {
                        slug: slug.to_string(),
                        raw,
                    }));
                }
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(None)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        let metadata = fs::metadata(&self.dir)
            .await
            .map_err(|e| self.read_error(e))?;

        if metadata.is_dir() {
            Ok(())
        } else {
            Err(AppError::internal(
                "Content path is not a directory",
                json!({ "dir": self.dir.display().to_string() }),
            ))
        }
    }
}
