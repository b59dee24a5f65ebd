//! Custom actix middleware.

pub mod auth;
pub mod cors;
