//! Configuration management for Storegate services.
//!
//! All configuration is driven by environment variables, loaded once at
//! process start. The shared signing secret is held here and passed into
//! the signer/verifier explicitly; nothing in the protocol layer reads the
//! environment on its own.

/// Authentication configuration for a Storegate service.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    /// Identifier this service presents when signing outbound requests.
    pub service_id: String,
    /// Default tenant attached to requests that carry none.
    pub tenant_id: String,
    /// Shared signing secret, distributed out-of-band.
    #[serde(skip_serializing, default)]
    pub service_secret: String,
    /// Log level.
    pub log_level: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            service_id: "storefront-cms".to_owned(),
            tenant_id: String::new(),
            service_secret: String::new(),
            log_level: "info".to_owned(),
        }
    }
}

impl AuthConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("SERVICE_ID") {
            config.service_id = v;
        }
        if let Ok(v) = std::env::var("TENANT_ID") {
            config.tenant_id = v;
        }
        if let Ok(v) = std::env::var("SERVICE_SECRET") {
            config.service_secret = v;
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Validate that the loaded configuration can produce meaningful
    /// signatures.
    ///
    /// The signer itself accepts any secret, including an empty one, so the
    /// presence check lives here with the caller.
    ///
    /// # Errors
    /// Returns an error if the signing secret is empty.
    pub fn validate(&self) -> Result<(), crate::StoregateError> {
        if self.service_secret.is_empty() {
            return Err(crate::StoregateError::Config(
                "SERVICE_SECRET is not set".to_owned(),
            ));
        }
        Ok(())
    }
}
