//! Data Transfer Objects for JSON responses.
//!
//! Form submissions answer with [`crate::domain::forms::FormState`] directly;
//! only the health check needs its own shape.

pub mod health;
