//! JWT issuance and verification.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::TokenPair;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenConfig;

/// Stateless JWT service signing with HS256.
///
/// Issued tokens are not persisted here; the caller stores them on the user
/// record. Verification only proves the signature and expiry.
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Creates a token service from the given configuration
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issues the access/refresh pair handed out at registration
    ///
    /// The refresh token embeds `email`; the access token carries no
    /// identifying claims.
    pub fn generate_token_pair(&self, email: &str) -> DomainResult<TokenPair> {
        let access_token = self.generate_access_token()?;
        let refresh_token = self.generate_refresh_token(email)?;
        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Issues a fresh access token (1-day expiry, anonymous claims)
    pub fn generate_access_token(&self) -> DomainResult<String> {
        let claims = Claims::new_access_token(self.config.access_token_expiry_hours);
        self.encode(&claims)
    }

    /// Issues a refresh token embedding the user's email (3-day expiry)
    pub fn generate_refresh_token(&self, email: &str) -> DomainResult<String> {
        let claims =
            Claims::new_refresh_token(email.to_string(), self.config.refresh_token_expiry_days);
        self.encode(&claims)
    }

    /// Verifies signature and expiry of a bearer token, returning its claims
    ///
    /// # Errors
    ///
    /// - [`TokenError::TokenExpired`] when past `exp`
    /// - [`TokenError::InvalidSignature`] when signed with a different secret
    /// - [`TokenError::InvalidTokenFormat`] for anything that is not a JWT
    pub fn verify_token(&self, token: &str) -> DomainResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| DomainError::Token(map_jwt_error(e)))
    }

    fn encode(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}

fn map_jwt_error(error: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::InvalidTokenFormat,
    }
}
