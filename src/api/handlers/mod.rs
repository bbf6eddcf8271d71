//! HTTP request handlers for API endpoints.

pub mod forms;
pub mod health;

pub use forms::{contact_handler, newsletter_handler};
pub use health::health_handler;
