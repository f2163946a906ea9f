//! Shared types for the member service
//!
//! Wire types used by the server and by any client: the member entity and
//! its payloads, the error model and its HTTP mapping.

pub mod error;
pub mod models;
