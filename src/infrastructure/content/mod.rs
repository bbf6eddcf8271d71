//! Content storage backends.

pub mod fs_post_repository;

pub use fs_post_repository::FsPostRepository;
