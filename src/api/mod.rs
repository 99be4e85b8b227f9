//! JSON endpoints and request middleware.
//!
//! # Modules
//!
//! - [`dto`] - Response serialization types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
pub mod dto;
pub mod handlers;
pub mod middleware;
