//! Business logic services for the application layer.

pub mod shortener_service;
pub mod stats_service;

pub use shortener_service::ShortenerService;
pub use stats_service::{StatsService, UrlStats};
