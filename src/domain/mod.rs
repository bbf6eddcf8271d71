//! Domain layer: entities, form rules, and the traits infrastructure implements.
//!
//! - [`entities`] - Posts and validated submissions
//! - [`forms`] - Contact and newsletter payloads with their validation rules
//! - [`repositories`] - Data access and delivery traits
//!
//! The domain layer does not depend on the web or infrastructure layers.

pub mod entities;
pub mod forms;
pub mod repositories;
