//! Outbound form submission: destination configuration, the HTTP sink and
//! the per-batch dispatcher.

pub mod config;
pub mod dispatcher;
pub mod sink;

pub use config::FormConfig;
pub use dispatcher::SubmissionDispatcher;
pub use sink::{FormSink, HttpFormSink};
