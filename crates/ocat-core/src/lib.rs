//! ocat-core
//!
//! Pure domain types for the OCAT assessment system. No database or HTTP
//! dependency. This is the shared vocabulary of the service, the client
//! and the views.

pub mod error;
pub mod models;
