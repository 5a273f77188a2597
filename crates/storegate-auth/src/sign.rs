//! Request signing for outbound service-to-service calls.
//!
//! The storefront proxy signs each GraphQL request before forwarding it to
//! the managed API. The signature covers the canonical request string (see
//! [`crate::canonical`]) keyed by the shared service secret, and travels in
//! three headers alongside the request (see [`crate::headers`]).

use chrono::Utc;
use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;

use crate::canonical::build_canonical_request;

type HmacSha256 = Hmac<Sha256>;

/// Input fields for signing a request.
///
/// All fields are borrowed; signing is a pure computation with no I/O. The
/// signer does not validate the secret — an empty secret yields a
/// well-formed but meaningless signature, so callers check secret presence
/// up front (e.g. `storegate_core::AuthConfig::validate`).
#[derive(Debug, Clone, Copy)]
pub struct SignRequest<'a> {
    /// HTTP method of the outbound request.
    pub method: &'a str,
    /// Request path, verbatim as sent.
    pub path: &'a str,
    /// Request body, if any.
    pub body: Option<&'a str>,
    /// Tenant the request is scoped to.
    pub tenant_id: &'a str,
    /// Identifier of the calling service.
    pub service_id: &'a str,
    /// Shared signing secret.
    pub secret: &'a str,
}

/// The output of signing: the values to attach as request headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Wall-clock signing time in milliseconds since the epoch.
    pub timestamp: i64,
    /// Lowercase hex-encoded HMAC-SHA256 signature.
    pub signature: String,
    /// Identifier of the signing service, echoed for the verifier.
    pub service_id: String,
}

/// Sign a request with HMAC-SHA256 over its canonical representation.
///
/// # Examples
///
/// ```
/// use storegate_auth::sign::{SignRequest, sign_request};
///
/// let signed = sign_request(&SignRequest {
///     method: "POST",
///     path: "/graphql",
///     body: Some("{\"query\":\"{ping}\"}"),
///     tenant_id: "tenant-1",
///     service_id: "svc-a",
///     secret: "test-secret",
/// });
/// assert_eq!(signed.signature.len(), 64);
/// assert_eq!(signed.service_id, "svc-a");
/// ```
#[must_use]
pub fn sign_request(request: &SignRequest<'_>) -> SignedRequest {
    let timestamp = Utc::now().timestamp_millis();

    let canonical = build_canonical_request(
        request.method,
        request.path,
        request.tenant_id,
        request.service_id,
        timestamp,
        request.body,
    );

    SignedRequest {
        timestamp,
        signature: compute_signature(request.secret, &canonical),
        service_id: request.service_id.to_owned(),
    }
}

/// Compute the hex-encoded HMAC-SHA256 signature over a canonical request.
pub(crate) fn compute_signature(secret: &str, canonical_request: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can accept any key length");
    mac.update(canonical_request.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
