//! Identifier types shared across the Storegate authentication layer.
//!
//! Both identifiers participate verbatim in the signed canonical request,
//! which joins its fields with newlines. Constraining them to a safe
//! character set here keeps a crafted identifier from shifting field
//! boundaries inside the canonical string.

use std::fmt;

/// Tenant identifier carried on every CMS request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TenantId(String);

impl TenantId {
    /// Create a new tenant ID from a string.
    ///
    /// # Errors
    /// Returns an error if the ID is empty or contains whitespace or
    /// control characters.
    pub fn new(id: impl Into<String>) -> Result<Self, crate::StoregateError> {
        let id = id.into();
        if !is_safe_identifier(&id) {
            return Err(crate::StoregateError::InvalidTenantId(id));
        }
        Ok(Self(id))
    }

    /// Get the tenant ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a calling service, e.g. the storefront proxy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ServiceId(String);

impl ServiceId {
    /// Create a new service ID from a string.
    ///
    /// # Errors
    /// Returns an error if the ID is empty or contains whitespace or
    /// control characters.
    pub fn new(id: impl Into<String>) -> Result<Self, crate::StoregateError> {
        let id = id.into();
        if !is_safe_identifier(&id) {
            return Err(crate::StoregateError::InvalidServiceId(id));
        }
        Ok(Self(id))
    }

    /// Get the service ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check that an identifier is non-empty and free of whitespace and
/// control characters.
fn is_safe_identifier(id: &str) -> bool {
    !id.is_empty() && !id.chars().any(|c| c.is_whitespace() || c.is_control())
}
