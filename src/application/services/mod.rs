//! Business logic services for the application layer.

pub mod blog_service;
pub mod contact_service;
pub mod newsletter_service;

pub use blog_service::BlogService;
pub use contact_service::ContactService;
pub use newsletter_service::NewsletterService;
