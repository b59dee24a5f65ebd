//! CORS configuration.

use actix_cors::Cors;
use actix_web::http::header;

/// Builds the CORS policy from the environment
///
/// Production restricts origins to the comma-separated
/// `CORS_ALLOWED_ORIGINS` list; anything else runs permissive for local
/// development.
pub fn create_cors() -> Cors {
    let environment =
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    if environment == "production" {
        let allowed = std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
            .max_age(3600);

        for origin in allowed.split(',').map(str::trim).filter(|o| !o.is_empty()) {
            cors = cors.allowed_origin(origin);
        }
        cors
    } else {
        Cors::permissive()
    }
}
