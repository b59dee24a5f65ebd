//! Unit tests for the authentication service.

use std::sync::Arc;

use crate::errors::{AuthError, DomainError};
use crate::repositories::user::mock::MockUserRepository;
use crate::repositories::UserRepository;
use crate::services::token::{TokenConfig, TokenService};

use super::AuthService;

fn auth_service() -> (AuthService<MockUserRepository>, Arc<MockUserRepository>) {
    let repository = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(TokenService::new(TokenConfig::default()));
    (AuthService::new(repository.clone(), tokens), repository)
}

#[tokio::test]
async fn test_register_persists_user_with_token_pair() {
    let (service, repository) = auth_service();

    let registered = service
        .register("user@example.com", "hunter22")
        .await
        .unwrap();

    assert_eq!(registered.email, "user@example.com");
    assert!(!registered.access_token.is_empty());
    assert!(!registered.refresh_token.is_empty());
    assert_ne!(registered.access_token, registered.refresh_token);

    let stored = repository
        .find_by_email("user@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, registered.id);
    assert_eq!(stored.access_token.as_deref(), Some(&*registered.access_token));
    assert_eq!(
        stored.refresh_token.as_deref(),
        Some(&*registered.refresh_token)
    );
    // Plaintext never stored
    assert_ne!(stored.password_hash, "hunter22");
    assert!(bcrypt::verify("hunter22", &stored.password_hash).unwrap());
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let (service, repository) = auth_service();

    let first = service
        .register("user@example.com", "hunter22")
        .await
        .unwrap();
    let err = service
        .register("user@example.com", "other-password")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::EmailAlreadyRegistered)
    ));

    // First registration untouched by the failed attempt
    assert_eq!(repository.len().await, 1);
    let stored = repository
        .find_by_email("user@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.access_token.as_deref(), Some(&*first.access_token));
}

#[tokio::test]
async fn test_login_replaces_access_token_only() {
    let (service, _) = auth_service();

    let registered = service
        .register("user@example.com", "hunter22")
        .await
        .unwrap();

    // Claims have second precision; step past the issuance second so the
    // replacement token cannot collide with the original.
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let user = service.login("user@example.com", "hunter22").await.unwrap();

    let access = user.access_token.expect("access token set");
    assert_ne!(access, registered.access_token);
    // Refresh token survives login unchanged
    assert_eq!(user.refresh_token.as_deref(), Some(&*registered.refresh_token));
}

#[tokio::test]
async fn test_login_unknown_email() {
    let (service, _) = auth_service();

    let err = service
        .login("nobody@example.com", "hunter22")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
}

#[tokio::test]
async fn test_login_wrong_password_leaves_tokens_untouched() {
    let (service, repository) = auth_service();

    let registered = service
        .register("user@example.com", "hunter22")
        .await
        .unwrap();
    let err = service
        .login("user@example.com", "wrong-password")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));

    let stored = repository
        .find_by_email("user@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.access_token.as_deref(), Some(&*registered.access_token));
    assert_eq!(
        stored.refresh_token.as_deref(),
        Some(&*registered.refresh_token)
    );
}
