//! Product catalog request and response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use wb_core::services::product::{CreateProduct, UpdateProduct};

/// Request body for POST /product and PUT /product/{id}
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub description: String,

    #[validate(length(min = 1, message = "Category name must not be empty"))]
    pub category_name: String,
}

impl From<CreateProductRequest> for CreateProduct {
    fn from(request: CreateProductRequest) -> Self {
        CreateProduct {
            title: request.title,
            price: request.price,
            description: request.description,
            category_name: request.category_name,
        }
    }
}

/// Request body for PATCH /product/{id}; every field optional
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    pub description: Option<String>,

    #[validate(length(min = 1, message = "Category name must not be empty"))]
    pub category_name: Option<String>,
}

impl From<UpdateProductRequest> for UpdateProduct {
    fn from(request: UpdateProductRequest) -> Self {
        UpdateProduct {
            title: request.title,
            price: request.price,
            description: request.description,
            category_name: request.category_name,
        }
    }
}

/// Response body for DELETE /product/{id}
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductResponse {
    pub message: String,
    pub status_code: u16,
}
