use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use wb_api::app::create_app;
use wb_api::routes::AppState;
use wb_core::services::auth::AuthService;
use wb_core::services::product::ProductService;
use wb_core::services::token::{TokenConfig, TokenService};
use wb_infra::database::connection::{create_pool, ping};
use wb_infra::{PostgresCategoryRepository, PostgresProductRepository, PostgresUserRepository};
use wb_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();
    info!("Starting Woobly API server on {}", bind_address);

    let pool = create_pool(&config.database).await?;
    ping(&pool).await?;

    let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
    let product_repository = Arc::new(PostgresProductRepository::new(pool.clone()));
    let category_repository = Arc::new(PostgresCategoryRepository::new(pool));

    let token_service = Arc::new(TokenService::new(TokenConfig::from(&config.jwt)));
    let auth_service = Arc::new(AuthService::new(user_repository, token_service));
    let product_service = Arc::new(ProductService::new(product_repository, category_repository));

    let state = web::Data::new(AppState {
        auth_service,
        product_service,
    });
    let jwt_secret = config.jwt.secret.clone();

    let mut server = HttpServer::new(move || create_app(state.clone(), jwt_secret.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;
    Ok(())
}
