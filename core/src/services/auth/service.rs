//! Registration and login use cases.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::user::{NewUser, User};
use crate::domain::value_objects::RegisteredUser;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// bcrypt work factor for password hashing
const PASSWORD_HASH_COST: u32 = 10;

/// Authentication service handling signup and signin
///
/// Generic over the user repository so handlers can run against the mock
/// in tests and the Postgres implementation in production.
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Registers a new account
    ///
    /// Hashes the password with bcrypt, issues an access/refresh token pair
    /// and persists both on the new user row.
    ///
    /// # Errors
    ///
    /// - [`AuthError::EmailAlreadyRegistered`] when the email is taken
    /// - [`AuthError::PasswordHashFailure`] when bcrypt fails
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<RegisteredUser> {
        if self.user_repository.exists_by_email(email).await? {
            debug!(email = %email, "signup rejected, email already registered");
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = bcrypt::hash(password, PASSWORD_HASH_COST)
            .map_err(|_| AuthError::PasswordHashFailure)?;

        let tokens = self.token_service.generate_token_pair(email)?;
        let user = self
            .user_repository
            .create(NewUser::new(
                email.to_string(),
                password_hash,
                tokens.access_token.clone(),
                tokens.refresh_token.clone(),
            ))
            .await?;

        info!(user_id = user.id, "user registered");
        Ok(RegisteredUser {
            id: user.id,
            email: user.email,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }

    /// Authenticates an existing account
    ///
    /// On success a fresh access token replaces the stored one. The refresh
    /// token is left untouched and keeps its original expiry.
    ///
    /// # Errors
    ///
    /// - [`AuthError::UserNotFound`] when no account matches the email
    /// - [`AuthError::InvalidCredentials`] when the password does not match
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<User> {
        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let password_matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;
        if !password_matches {
            debug!(user_id = user.id, "signin rejected, password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self.token_service.generate_access_token()?;
        user.set_access_token(access_token);

        let user = self.user_repository.update(user).await?;
        info!(user_id = user.id, "user logged in");
        Ok(user)
    }
}
