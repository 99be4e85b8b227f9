//! Server-rendered pages for managing links.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`dto`] - Form payloads
//! - [`handlers`] - Page and form handlers
//! - [`routes`] - Page route configuration

pub mod dto;
pub mod handlers;
pub mod routes;
