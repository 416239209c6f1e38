//! Infrastructure layer implementing domain contracts.
//!
//! - [`persistence`] - SQLite repository implementations

pub mod persistence;
