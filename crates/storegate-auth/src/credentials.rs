//! Secret resolution for signing services.
//!
//! The shared secret is a long-lived credential distributed out-of-band to
//! both sides; this module provides the seam through which the verifier
//! looks it up by service ID. Production deployments back this with their
//! secret store, tests use [`StaticSecretProvider`] with arbitrary secrets.

use std::collections::HashMap;

use crate::error::AuthError;

/// Resolves the shared signing secret for a service ID.
pub trait SecretProvider: Send + Sync {
    /// Look up the signing secret for the given service ID.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UnknownService`] if no secret is registered for
    /// the service.
    fn get_service_secret(&self, service_id: &str) -> Result<String, AuthError>;
}

/// In-memory secret provider backed by a fixed map.
#[derive(Debug, Clone, Default)]
pub struct StaticSecretProvider {
    secrets: HashMap<String, String>,
}

impl StaticSecretProvider {
    /// Create a provider from `(service_id, secret)` pairs.
    #[must_use]
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self {
            secrets: pairs.into_iter().collect(),
        }
    }
}

impl SecretProvider for StaticSecretProvider {
    fn get_service_secret(&self, service_id: &str) -> Result<String, AuthError> {
        self.secrets
            .get(service_id)
            .cloned()
            .ok_or_else(|| AuthError::UnknownService(service_id.to_owned()))
    }
}

/// Generate a fresh service secret for initial credential provisioning.
///
/// Produces a hex string of 64 characters (256 bits of entropy).
///
/// # Examples
///
/// ```
/// use storegate_auth::credentials::generate_service_secret;
///
/// let secret = generate_service_secret();
/// assert_eq!(secret.len(), 64);
/// assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn generate_service_secret() -> String {
    use rand::RngExt;

    let mut rng = rand::rng();
    let mut buf = [0u8; 32];
    rng.fill(&mut buf);
    hex::encode(buf)
}
