use axum::http::{header::AUTHORIZATION, HeaderMap};
use subtle::ConstantTimeEq;

use crate::server::error::{auth::AuthError, AppError};

/// Checks requests against the configured admin token.
pub struct AuthGuard<'a> {
    admin_token: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(admin_token: &'a str, headers: &'a HeaderMap) -> Self {
        Self {
            admin_token,
            headers,
        }
    }

    /// Requires an `Authorization: Bearer <token>` header matching the admin token.
    ///
    /// # Returns
    /// - `Ok(())` - Token present and valid
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken)` - Token does not match
    pub fn require(&self) -> Result<(), AppError> {
        let Some(token) = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
        else {
            return Err(AuthError::MissingToken.into());
        };

        // Compared in constant time.
        if !bool::from(token.as_bytes().ct_eq(self.admin_token.as_bytes())) {
            return Err(AuthError::InvalidToken.into());
        }

        Ok(())
    }
}
