//! Product catalog route handlers
//!
//! All of these sit behind the JWT bearer guard:
//! - `POST /product`: create (duplicate titles rejected)
//! - `GET /product`: list with categories attached
//! - `GET /product/{id}`: fetch one
//! - `PATCH /product/{id}`: partial update
//! - `PUT /product/{id}`: full replacement
//! - `DELETE /product/{id}`: remove

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod replace;
pub mod update;
