//! # Woobly API
//!
//! HTTP layer for the Woobly backend: request/response DTOs, actix route
//! handlers, JWT middleware and the application factory. Exposed as a
//! library so integration tests can assemble the app against mock
//! repositories.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
