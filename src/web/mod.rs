//! Server-rendered HTML pages.
//!
//! Every page extends `templates/base.html` through
//! [`handlers::layout::Layout`], which carries the head metadata, navigation,
//! JSON-LD and footer data.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page and form route configuration

pub mod handlers;
pub mod routes;
