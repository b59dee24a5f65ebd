//! Request and response data transfer objects.

pub mod auth_dto;
pub mod error_dto;
pub mod product_dto;
