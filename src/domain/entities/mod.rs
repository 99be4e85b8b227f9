//! Core domain entities.
//!
//! - [`Link`] - A stored bookmark (id, title, url)
//! - [`LinkInput`] - Validated title/url pair used for create and update

pub mod link;

pub use link::{Link, LinkInput, MissingField};
