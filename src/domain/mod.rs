//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on infrastructure or presentation;
//! business logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
