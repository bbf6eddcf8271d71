//! Trait definitions for the domain layer's data access.
//!
//! Traits define the contract; implementations live in `crate::infrastructure`.
//! Mock implementations are generated via `mockall` for unit tests.
//!
//! - [`PostRepository`] - Blog post sources
//! - [`SubmissionSink`] - Delivery of contact inquiries and newsletter opt-ins

pub mod post_repository;
pub mod submission_sink;

pub use post_repository::{PostRepository, PostSource};
pub use submission_sink::SubmissionSink;

#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use submission_sink::MockSubmissionSink;
