//! Application factory
//!
//! Assembles the actix application: middleware stack, route tree, health
//! check and default 404 handler. Generic over the repository types so the
//! same factory serves production wiring and mock-backed tests.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use wb_core::repositories::{CategoryRepository, ProductRepository, UserRepository};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{signin::signin, signup::signup};
use crate::routes::product::{
    create::create_product, delete::delete_product, get::get_product, list::list_products,
    replace::replace_product, update::update_product,
};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, P, C>(
    app_state: web::Data<AppState<U, P, C>>,
    jwt_secret: String,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody<Error = impl Into<actix_web::Error>>,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Auth routes (public)
        .service(
            web::scope("/auth")
                .route("/signup", web::post().to(signup::<U, P, C>))
                .route("/signin", web::post().to(signin::<U, P, C>)),
        )
        // Product routes, all behind the bearer guard
        .service(
            web::scope("/product")
                .wrap(JwtAuth::with_secret(jwt_secret))
                .route("", web::post().to(create_product::<U, P, C>))
                .route("", web::get().to(list_products::<U, P, C>))
                .route("/{id}", web::get().to(get_product::<U, P, C>))
                .route("/{id}", web::patch().to(update_product::<U, P, C>))
                .route("/{id}", web::put().to(replace_product::<U, P, C>))
                .route("/{id}", web::delete().to(delete_product::<U, P, C>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "woobly-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
