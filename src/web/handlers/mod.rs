//! HTML template rendering handlers.

pub mod error_page;
mod index;
mod list;
mod stats;

pub use index::index_handler;
pub use list::list_handler;
pub use stats::stats_page_handler;
