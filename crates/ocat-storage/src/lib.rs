//! ocat-storage
//!
//! Assessment persistence. A repository trait with the three operations the
//! service needs, backed by SQLite through sqlx. Soft delete is explicit:
//! every read filters on `deleted_at IS NULL`.

pub mod client;
pub mod error;
pub mod repository;
pub mod sqlite;
