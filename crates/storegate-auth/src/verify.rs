//! Signature verification for inbound service-to-service calls.
//!
//! The CMS handler rebuilds the canonical request from the inbound
//! invocation and recomputes the signature independently. Checks run in a
//! fixed order and short-circuit on the first failure:
//!
//! 1. Timestamp freshness (bounds replay exposure to a 5-minute window)
//! 2. Canonical reconstruction using the *claimed* timestamp
//! 3. Expected signature computation
//! 4. Decoded length comparison
//! 5. Constant-time byte equality
//!
//! A failed check is not an error: it is returned as a typed
//! [`VerificationResult`] so the authorization layer can uniformly map any
//! rejection to a denied request while keeping the reason for diagnostics.

use chrono::Utc;
use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::build_canonical_request;

type HmacSha256 = Hmac<Sha256>;

/// Maximum allowed skew between signing and verification, in milliseconds.
///
/// Requires loosely synchronized clocks between signer and verifier; within
/// the window, replay is not prevented.
pub const REPLAY_WINDOW_MS: i64 = 5 * 60 * 1000;

/// Why a signed request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// The claimed timestamp is outside the freshness window.
    #[error("Request timestamp too old")]
    StaleTimestamp,

    /// The claimed signature decodes to a different byte length than an
    /// HMAC-SHA256 output.
    #[error("Invalid signature length")]
    SignatureLengthMismatch,

    /// The signature is well-formed but does not match, or is not valid hex.
    #[error("Invalid signature")]
    SignatureMismatch,
}

/// The outcome of verifying a signed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationResult {
    /// Whether the signature verified.
    pub valid: bool,
    /// The rejection reason; populated exactly when `valid` is false.
    pub reason: Option<RejectReason>,
}

impl VerificationResult {
    /// A successful verification.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    /// A rejected verification with its diagnostic reason.
    #[must_use]
    pub fn rejected(reason: RejectReason) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }
}

/// Verify a signed request against the shared secret.
///
/// Rebuilds the canonical request from the supplied fields and the *claimed*
/// timestamp, recomputes the expected HMAC-SHA256 signature, and compares it
/// to the claimed signature in constant time. A claimed signature that is
/// not valid hex is treated as a plain verification failure, never as an
/// error.
///
/// # Examples
///
/// ```
/// use storegate_auth::sign::{SignRequest, sign_request};
/// use storegate_auth::verify::verify_request;
///
/// let signed = sign_request(&SignRequest {
///     method: "POST",
///     path: "/graphql",
///     body: None,
///     tenant_id: "tenant-1",
///     service_id: "svc-a",
///     secret: "test-secret",
/// });
///
/// let result = verify_request(
///     "POST",
///     "/graphql",
///     None,
///     "tenant-1",
///     "svc-a",
///     signed.timestamp,
///     &signed.signature,
///     "test-secret",
/// );
/// assert!(result.valid);
/// ```
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn verify_request(
    method: &str,
    path: &str,
    body: Option<&str>,
    tenant_id: &str,
    service_id: &str,
    timestamp: i64,
    signature: &str,
    secret: &str,
) -> VerificationResult {
    verify_request_at(
        Utc::now().timestamp_millis(),
        method,
        path,
        body,
        tenant_id,
        service_id,
        timestamp,
        signature,
        secret,
    )
}

/// Verification with an explicit "now", separated for deterministic tests.
#[allow(clippy::too_many_arguments)]
fn verify_request_at(
    now_ms: i64,
    method: &str,
    path: &str,
    body: Option<&str>,
    tenant_id: &str,
    service_id: &str,
    timestamp: i64,
    signature: &str,
    secret: &str,
) -> VerificationResult {
    if (now_ms - timestamp).abs() > REPLAY_WINDOW_MS {
        debug!(
            timestamp,
            now_ms, "rejecting request outside the freshness window"
        );
        return VerificationResult::rejected(RejectReason::StaleTimestamp);
    }

    let canonical = build_canonical_request(method, path, tenant_id, service_id, timestamp, body);

    debug!(canonical = ?canonical, "rebuilt canonical request");

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can accept any key length");
    mac.update(canonical.as_bytes());
    let expected = mac.finalize().into_bytes();

    let Ok(provided) = hex::decode(signature) else {
        debug!("claimed signature is not valid hex");
        return VerificationResult::rejected(RejectReason::SignatureMismatch);
    };

    // Length is public information; checking it up front keeps the
    // constant-time comparison over equal-length inputs only.
    if provided.len() != expected.len() {
        debug!(
            provided_len = provided.len(),
            expected_len = expected.len(),
            "signature length mismatch"
        );
        return VerificationResult::rejected(RejectReason::SignatureLengthMismatch);
    }

    if provided.ct_eq(expected.as_slice()).into() {
        VerificationResult::ok()
    } else {
        debug!(
            expected = %hex::encode(expected),
            provided = %signature,
            "signature mismatch"
        );
        VerificationResult::rejected(RejectReason::SignatureMismatch)
    }
}
