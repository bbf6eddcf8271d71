//! JSON API layer: form endpoints, health check and shared middleware.
//!
//! # Modules
//!
//! - [`dto`] - Response shapes not owned by the domain
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
