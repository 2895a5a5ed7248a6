use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use content_store::Clock;

use crate::audit::SecurityAuditLog;
use crate::config::{AdminDirectory, AuthConfig};
use crate::error::{AuthError, Result};
use crate::models::{Claims, IssuedToken, PublicUser};

/// Issues and verifies the shared-secret admin tokens.
///
/// Constructed once per process and shared by reference. Expiry is checked
/// against the injected clock with zero leeway, so the 24-hour bound is
/// exact and testable.
pub struct TokenService {
    config: AuthConfig,
    directory: AdminDirectory,
    audit: Arc<SecurityAuditLog>,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(
        config: AuthConfig,
        directory: AdminDirectory,
        audit: Arc<SecurityAuditLog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { config, directory, audit, clock }
    }

    pub fn audit(&self) -> &SecurityAuditLog {
        &self.audit
    }

    /// Check credentials against the admin directory and mint a token.
    /// Exactly one audit entry per call, success or failure.
    pub fn issue_token(&self, email: &str, password: &str) -> Result<IssuedToken> {
        let user = match self.directory.find_by_email(email) {
            Some(user) if user.password == password => user,
            _ => {
                self.audit.record(
                    "authentication_attempt",
                    false,
                    format!("Failed login for {email}"),
                );
                return Err(AuthError::InvalidCredentials);
            }
        };

        let now = self.clock.now();
        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.config.token_ttl_hours)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )?;

        self.audit.record(
            "authentication_attempt",
            true,
            format!("Successful login for {email}"),
        );
        Ok(IssuedToken { token, user: PublicUser::from(user) })
    }

    /// Decode and verify a bearer token. Any signature or expiry problem
    /// collapses to [`AuthError::InvalidToken`]; missing-header handling is
    /// the HTTP layer's concern.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        // Expiry is validated against the injected clock below, not
        // jsonwebtoken's system clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|_| AuthError::InvalidToken)?;

        if data.claims.exp <= self.clock.now().timestamp() {
            return Err(AuthError::InvalidToken);
        }
        Ok(data.claims)
    }
}
