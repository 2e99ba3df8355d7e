//! Bearer token issuing and verification.
//!
//! Tokens are HS256 JWTs carrying the user ID and role. They are stateless: there is
//! no refresh or revocation, a token stays valid until `exp`.

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::UserRole;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError};

/// Claims embedded in every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// ID of the authenticated user.
    pub sub: i32,
    /// Role at issue time. Authorization re-reads the role from the database.
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signing and verification keys derived from `JWT_SECRET`.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    expires_in: Duration,
}

impl JwtKeys {
    /// Builds the keys for a secret and token lifetime.
    ///
    /// `expires_in_hours` must be within the range `Config::from_env` accepts.
    pub fn new(secret: &str, expires_in_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            expires_in: Duration::hours(expires_in_hours),
        }
    }

    /// Issues a signed token for the user.
    ///
    /// # Arguments
    /// - `user_id` - ID placed in the `sub` claim
    /// - `role` - Role placed in the `role` claim
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(InternalError::TokenEncode)` - Signing failed
    pub fn issue(&self, user_id: i32, role: UserRole) -> Result<String, InternalError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            role: role.to_value(),
            iat: now.timestamp(),
            exp: (now + self.expires_in).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(InternalError::TokenEncode)
    }

    /// Validates the signature and expiry of a token and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered or expired token
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    #[cfg(test)]
    pub fn encode_claims(&self, claims: &Claims) -> String {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies() {
        let keys = JwtKeys::new("test-secret", 1);

        let token = keys.issue(42, UserRole::Alumni).unwrap();
        let claims = keys.verify(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, "alumni");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let issuer = JwtKeys::new("secret-a", 1);
        let verifier = JwtKeys::new("secret-b", 1);

        let token = issuer.issue(1, UserRole::Student).unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn rejects_expired_token() {
        let keys = JwtKeys::new("test-secret", 1);
        let issued = Utc::now() - Duration::hours(3);
        let token = keys.encode_claims(&Claims {
            sub: 1,
            role: "student".to_string(),
            iat: issued.timestamp(),
            exp: (issued + Duration::hours(1)).timestamp(),
        });

        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn rejects_garbage() {
        let keys = JwtKeys::new("test-secret", 1);

        assert!(keys.verify("not-a-jwt").is_err());
    }
}
