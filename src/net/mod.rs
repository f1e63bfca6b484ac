//! Typed HTTP client for the platform's REST API.
//!
//! ARCHITECTURE
//! ============
//! `http` holds the request pipeline (base URL, authorization stage,
//! response classification), `api` the endpoint surface, `types` the wire
//! DTOs, and `error` the failure taxonomy shared by all of them.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
