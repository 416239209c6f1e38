//! HTTP request handlers for the JSON/redirect endpoints.

pub mod redirect;
pub mod shorten;

pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
