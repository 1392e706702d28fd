//! ocat-client
//!
//! Typed HTTP client for the assessment service. This is the only way the
//! views reach the store.

pub mod error;
pub mod service;

pub use service::AssessmentService;
