//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A shortened URL mapping with its click counter
//! - [`AccessLogEntry`] - A single recorded access to a shortened URL
//! - [`VisitMeta`] - Client metadata captured on the redirect path
//!
//! Creation inputs use separate structs (`NewUrlRecord`) so identity and
//! timestamps stay storage-assigned.

pub mod access_log;
pub mod url_record;

pub use access_log::{AccessLogEntry, VisitMeta};
pub use url_record::{NewUrlRecord, UrlRecord};
