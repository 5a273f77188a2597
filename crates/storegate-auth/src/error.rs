//! Authentication error types.

use crate::verify::RejectReason;

/// Errors raised by the authentication layer around the verifier.
///
/// Note that signature verification failures themselves are not errors; the
/// verifier returns a [`crate::VerificationResult`] the caller inspects.
/// [`AuthError::AuthenticationFailed`] is the escalation of such a result
/// into a hard rejection by the authorizer.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A required authentication header is absent or not valid UTF-8.
    #[error("missing required authentication header: {0}")]
    MissingHeader(String),

    /// An authentication header is present but unparsable.
    #[error("invalid authentication header: {0}")]
    InvalidHeader(String),

    /// The claimed service ID has no registered secret.
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// The claimed tenant is not in the allowlist.
    #[error("unauthorized tenant: {0}")]
    UnauthorizedTenant(String),

    /// The signature or timestamp did not verify.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(RejectReason),
}
