//! Delivery of form submissions.

pub mod log_sink;

pub use log_sink::LogSink;
