//! Authentication service module
//!
//! Registration and login flows: bcrypt password handling plus token
//! issuance via [`TokenService`](crate::services::token::TokenService).

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
