//! Integration tests for the authentication endpoints, running the full
//! actix app against mock repositories.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web};

use wb_api::app::create_app;
use wb_api::routes::AppState;
use wb_core::repositories::{
    MockCategoryRepository, MockProductRepository, MockUserRepository,
};
use wb_core::services::auth::AuthService;
use wb_core::services::product::ProductService;
use wb_core::services::token::{TokenConfig, TokenService};

const TEST_SECRET: &str = "integration-test-secret";

type TestState = AppState<MockUserRepository, MockProductRepository, MockCategoryRepository>;

fn test_state() -> web::Data<TestState> {
    let users = Arc::new(MockUserRepository::new());
    let products = Arc::new(MockProductRepository::new());
    let categories = Arc::new(MockCategoryRepository::new());
    let token_service = Arc::new(TokenService::new(TokenConfig {
        jwt_secret: TEST_SECRET.to_string(),
        ..TokenConfig::default()
    }));

    web::Data::new(AppState {
        auth_service: Arc::new(AuthService::new(users, token_service)),
        product_service: Arc::new(ProductService::new(products, categories)),
    })
}

fn signup_body(email: &str) -> serde_json::Value {
    serde_json::json!({"email": email, "password": "hunter22"})
}

#[actix_rt::test]
async fn test_signup_returns_201_with_tokens() {
    let app = test::init_service(create_app(test_state(), TEST_SECRET.to_string())).await;

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(signup_body("user@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["statusCode"], 201);
    assert_eq!(body["user"]["email"], "user@example.com");
    assert_eq!(body["user"]["id"], 1);
    assert!(body["user"]["accessToken"].as_str().unwrap().contains('.'));
    assert!(body["user"]["refreshToken"].as_str().unwrap().contains('.'));
    // The password never appears in any form
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
}

#[actix_rt::test]
async fn test_signup_duplicate_email_returns_409() {
    let app = test::init_service(create_app(test_state(), TEST_SECRET.to_string())).await;

    let first = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(signup_body("user@example.com"))
        .to_request();
    assert_eq!(
        test::call_service(&app, first).await.status(),
        StatusCode::CREATED
    );

    let second = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(signup_body("user@example.com"))
        .to_request();
    let resp = test::call_service(&app, second).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["statusCode"], 409);
    assert_eq!(body["message"], "User with this email already exists");
}

#[actix_rt::test]
async fn test_signup_rejects_invalid_email() {
    let app = test::init_service(create_app(test_state(), TEST_SECRET.to_string())).await;

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(serde_json::json!({"email": "not-an-email", "password": "hunter22"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["statusCode"], 400);
    assert!(body.get("details").is_some());
}

#[actix_rt::test]
async fn test_signin_returns_fresh_access_token() {
    let app = test::init_service(create_app(test_state(), TEST_SECRET.to_string())).await;

    let signup = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(signup_body("user@example.com"))
        .to_request();
    let signup_resp: serde_json::Value =
        test::read_body_json(test::call_service(&app, signup).await).await;

    let signin = test::TestRequest::post()
        .uri("/auth/signin")
        .set_json(signup_body("user@example.com"))
        .to_request();
    let resp = test::call_service(&app, signin).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User logged in successfully");
    assert_eq!(body["statusCode"], 200);
    assert!(body["accessToken"].as_str().unwrap().contains('.'));
    // Signin hands back only the access token
    assert!(body.get("refreshToken").is_none());
    assert!(signup_resp["user"]["refreshToken"].as_str().is_some());
}

#[actix_rt::test]
async fn test_signin_unknown_email_returns_404() {
    let app = test::init_service(create_app(test_state(), TEST_SECRET.to_string())).await;

    let req = test::TestRequest::post()
        .uri("/auth/signin")
        .set_json(signup_body("nobody@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User with this email does not exist");
}

#[actix_rt::test]
async fn test_signin_wrong_password_returns_401() {
    let app = test::init_service(create_app(test_state(), TEST_SECRET.to_string())).await;

    let signup = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(signup_body("user@example.com"))
        .to_request();
    test::call_service(&app, signup).await;

    let req = test::TestRequest::post()
        .uri("/auth/signin")
        .set_json(serde_json::json!({"email": "user@example.com", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid credentials");
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let app = test::init_service(create_app(test_state(), TEST_SECRET.to_string())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "woobly-api");
}

#[actix_rt::test]
async fn test_unknown_route_returns_404_body() {
    let app = test::init_service(create_app(test_state(), TEST_SECRET.to_string())).await;

    let req = test::TestRequest::get().uri("/no-such-route").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}
