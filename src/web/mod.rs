//! Web layer for the browser-facing pages.
//!
//! Server-side rendered HTML via Askama templates: the shorten form, the
//! listing view, and per-code statistics.

pub mod handlers;
