//! Canonical request construction for signed Storegate requests.
//!
//! Signer and verifier must compute the HMAC over identical bytes, so the
//! security-relevant fields of a request are serialized into a fixed,
//! deterministic string:
//!
//! ```text
//! HTTPRequestMethod\n
//! Path\n
//! TenantId\n
//! ServiceId\n
//! Timestamp\n
//! Body
//! ```
//!
//! The method is upper-cased; every other field is taken verbatim and the
//! timestamp is rendered as base-10 milliseconds. Fields must never be
//! reordered: the deployed signer on the storefront proxy uses this exact
//! layout.
//!
//! No per-field escaping is applied, so a field value containing a literal
//! newline can collide with the join delimiter. This is an accepted
//! limitation of the wire-compatible format; tenant and service identifiers
//! are constrained to a newline-free character set upstream
//! (`storegate_core::TenantId` / `storegate_core::ServiceId`).

/// Build the canonical request string from its components.
///
/// An absent body serializes as the empty string, making
/// `body: None` and `body: Some("")` indistinguishable under the signature.
///
/// # Examples
///
/// ```
/// use storegate_auth::canonical::build_canonical_request;
///
/// let canonical = build_canonical_request(
///     "post",
///     "/graphql",
///     "tenant-1",
///     "svc-a",
///     1_700_000_000_000,
///     None,
/// );
/// assert_eq!(canonical, "POST\n/graphql\ntenant-1\nsvc-a\n1700000000000\n");
/// ```
#[must_use]
pub fn build_canonical_request(
    method: &str,
    path: &str,
    tenant_id: &str,
    service_id: &str,
    timestamp: i64,
    body: Option<&str>,
) -> String {
    let method = method.to_uppercase();
    let body = body.unwrap_or("");

    format!("{method}\n{path}\n{tenant_id}\n{service_id}\n{timestamp}\n{body}")
}
