//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`content`] - Blog posts read from the filesystem
//! - [`notify`] - Destinations for validated form submissions

pub mod content;
pub mod notify;
