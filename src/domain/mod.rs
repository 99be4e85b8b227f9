//! Domain layer containing the link entity and the store contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; repository traits are implemented in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
