//! Shared utilities: code generation and URL normalization.

pub mod code_generator;
pub mod url_normalizer;
