//! Shared-secret gate for the scheduled capture trigger.

use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Checks the bearer token sent by the scheduler against `CRON_SECRET`.
///
/// Both sides are run through HMAC-SHA256 keyed by the secret and compared
/// with [`Mac::verify_slice`], so the comparison time does not depend on
/// where the token first differs. Without a configured secret the gate is
/// open.
pub struct CronAuth {
    secret: Option<String>,
}

impl CronAuth {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    /// Returns `true` when a secret is configured.
    pub fn is_enforced(&self) -> bool {
        self.secret.is_some()
    }

    fn mac(secret: &str, message: &str) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
        mac.update(message.as_bytes());
        mac
    }

    /// Authorizes a request carrying `token` (the bearer value, if any).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when a secret is configured and
    /// the token is missing or does not match.
    pub fn authorize(&self, token: Option<&str>) -> Result<(), AppError> {
        let Some(secret) = self.secret.as_deref() else {
            return Ok(());
        };

        let Some(token) = token else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            ));
        };

        let expected = Self::mac(secret, secret).finalize().into_bytes();
        Self::mac(secret, token)
            .verify_slice(&expected)
            .map_err(|_| {
                AppError::unauthorized("Unauthorized", json!({"reason": "Invalid cron secret"}))
            })
    }
}
