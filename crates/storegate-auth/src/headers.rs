//! Wire conventions for signed requests.
//!
//! The signer output travels as three HTTP headers, with the tenant carried
//! in a fourth. Header names must match exactly between the proxy attaching
//! them and the CMS handler extracting them:
//!
//! - `x-service-id` - identifier of the signing service
//! - `x-service-timestamp` - signing time, decimal milliseconds
//! - `x-service-signature` - hex-encoded HMAC-SHA256 signature
//! - `x-tenant-id` - tenant the request is scoped to

use http::{HeaderMap, HeaderValue};

use crate::error::AuthError;
use crate::sign::SignedRequest;

/// Header carrying the signing service's identifier.
pub const X_SERVICE_ID: &str = "x-service-id";
/// Header carrying the signing timestamp in decimal milliseconds.
pub const X_SERVICE_TIMESTAMP: &str = "x-service-timestamp";
/// Header carrying the hex-encoded signature.
pub const X_SERVICE_SIGNATURE: &str = "x-service-signature";
/// Header carrying the tenant identifier.
pub const X_TENANT_ID: &str = "x-tenant-id";

impl SignedRequest {
    /// Attach the signing headers to an outbound request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidHeader`] if the service ID is not a valid
    /// header value.
    pub fn apply_headers(&self, headers: &mut HeaderMap) -> Result<(), AuthError> {
        let service_id = HeaderValue::from_str(&self.service_id)
            .map_err(|_| AuthError::InvalidHeader(X_SERVICE_ID.to_owned()))?;
        let timestamp = HeaderValue::from_str(&self.timestamp.to_string())
            .map_err(|_| AuthError::InvalidHeader(X_SERVICE_TIMESTAMP.to_owned()))?;
        let signature = HeaderValue::from_str(&self.signature)
            .map_err(|_| AuthError::InvalidHeader(X_SERVICE_SIGNATURE.to_owned()))?;

        headers.insert(X_SERVICE_ID, service_id);
        headers.insert(X_SERVICE_TIMESTAMP, timestamp);
        headers.insert(X_SERVICE_SIGNATURE, signature);
        Ok(())
    }
}

/// Authentication header values extracted from an inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// Claimed signing service.
    pub service_id: String,
    /// Tenant the request is scoped to.
    pub tenant_id: String,
    /// Claimed signing time in milliseconds since the epoch.
    pub timestamp: i64,
    /// Claimed hex-encoded signature.
    pub signature: String,
}

impl AuthHeaders {
    /// Extract and parse the four authentication headers from request parts.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingHeader`] if any header is absent or not
    /// valid UTF-8, and [`AuthError::InvalidHeader`] if the timestamp is not
    /// a decimal integer.
    pub fn from_parts(parts: &http::request::Parts) -> Result<Self, AuthError> {
        let service_id = required_header(parts, X_SERVICE_ID)?;
        let tenant_id = required_header(parts, X_TENANT_ID)?;
        let signature = required_header(parts, X_SERVICE_SIGNATURE)?;

        let timestamp: i64 = required_header(parts, X_SERVICE_TIMESTAMP)?
            .parse()
            .map_err(|_| AuthError::InvalidHeader(X_SERVICE_TIMESTAMP.to_owned()))?;

        Ok(Self {
            service_id: service_id.to_owned(),
            tenant_id: tenant_id.to_owned(),
            timestamp,
            signature: signature.to_owned(),
        })
    }
}

/// Extract a required header value, rejecting absent or non-UTF-8 values.
fn required_header<'a>(
    parts: &'a http::request::Parts,
    name: &str,
) -> Result<&'a str, AuthError> {
    parts
        .headers
        .get(name)
        .ok_or_else(|| AuthError::MissingHeader(name.to_owned()))?
        .to_str()
        .map_err(|_| AuthError::MissingHeader(name.to_owned()))
}
