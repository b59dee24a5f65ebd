//! Cross-cutting request handling helpers.

pub mod error;
