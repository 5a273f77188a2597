//! Authorization wrapper around the signature verifier.
//!
//! The verifier returns typed results; this layer escalates any rejection
//! into a hard [`AuthError`] so transport integrations can deny the request
//! without per-reason branching. It also enforces the service and tenant
//! allowlists that sit in front of signature verification.
//!
//! The request body is taken as an argument: callers that re-derive it
//! server-side (e.g. from a resolver field name) own the responsibility of
//! reconstructing the exact bytes the client signed.

use std::sync::Arc;

use tracing::debug;

use storegate_core::{ServiceId, TenantId};

use crate::credentials::SecretProvider;
use crate::error::AuthError;
use crate::headers::{AuthHeaders, X_TENANT_ID};
use crate::verify::{RejectReason, verify_request};

/// The authenticated identity of a verified request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Tenant the request was verified for.
    pub tenant_id: TenantId,
    /// Service that signed the request.
    pub service_id: ServiceId,
}

/// Verifies inbound signed requests against registered services and tenants.
#[derive(Clone)]
pub struct ServiceAuthorizer {
    secret_provider: Arc<dyn SecretProvider>,
    allowed_tenants: Vec<String>,
}

impl std::fmt::Debug for ServiceAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAuthorizer")
            .field("allowed_tenants", &self.allowed_tenants)
            .finish_non_exhaustive()
    }
}

impl ServiceAuthorizer {
    /// Create an authorizer that admits any tenant.
    #[must_use]
    pub fn new(secret_provider: Arc<dyn SecretProvider>) -> Self {
        Self {
            secret_provider,
            allowed_tenants: Vec::new(),
        }
    }

    /// Restrict authorization to the given tenants.
    ///
    /// An empty list admits any tenant.
    #[must_use]
    pub fn with_allowed_tenants(mut self, tenants: Vec<String>) -> Self {
        self.allowed_tenants = tenants;
        self
    }

    /// Authorize an inbound request from its parts and body.
    ///
    /// Extracts the authentication headers, checks the tenant allowlist,
    /// resolves the claimed service's secret, and verifies the signature
    /// over the method and path from `parts` and the supplied body.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if headers are missing or malformed, the
    /// tenant or service is not recognized, or the signature does not
    /// verify.
    pub fn authorize(
        &self,
        parts: &http::request::Parts,
        body: &str,
    ) -> Result<AuthContext, AuthError> {
        let auth = AuthHeaders::from_parts(parts)?;

        debug!(
            service_id = %auth.service_id,
            tenant_id = %auth.tenant_id,
            timestamp = auth.timestamp,
            "authorizing signed request"
        );

        if !self.allowed_tenants.is_empty()
            && !self.allowed_tenants.iter().any(|t| t == &auth.tenant_id)
        {
            debug!(tenant_id = %auth.tenant_id, "tenant not in allowlist");
            return Err(AuthError::UnauthorizedTenant(auth.tenant_id));
        }

        let secret = self.secret_provider.get_service_secret(&auth.service_id)?;

        let result = verify_request(
            parts.method.as_str(),
            parts.uri.path(),
            Some(body),
            &auth.tenant_id,
            &auth.service_id,
            auth.timestamp,
            &auth.signature,
            &secret,
        );

        if !result.valid {
            let reason = result.reason.unwrap_or(RejectReason::SignatureMismatch);
            debug!(service_id = %auth.service_id, %reason, "signature verification rejected");
            return Err(AuthError::AuthenticationFailed(reason));
        }

        debug!(service_id = %auth.service_id, "signed request authorized");

        Ok(AuthContext {
            tenant_id: TenantId::new(auth.tenant_id)
                .map_err(|_| AuthError::InvalidHeader(X_TENANT_ID.to_owned()))?,
            service_id: ServiceId::new(auth.service_id)
                .map_err(|_| AuthError::InvalidHeader(crate::headers::X_SERVICE_ID.to_owned()))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::{X_SERVICE_ID, X_SERVICE_SIGNATURE, X_SERVICE_TIMESTAMP};
    use crate::sign::{SignRequest, sign_request};

    const SECRET: &str = "test-secret";
    const BODY: &str = "{\"query\":\"{ping}\"}";

    fn authorizer() -> ServiceAuthorizer {
        let provider = StaticTestProvider;
        ServiceAuthorizer::new(Arc::new(provider))
    }

    #[derive(Debug)]
    struct StaticTestProvider;

    impl SecretProvider for StaticTestProvider {
        fn get_service_secret(&self, service_id: &str) -> Result<String, AuthError> {
            if service_id == "svc-a" {
                Ok(SECRET.to_owned())
            } else {
                Err(AuthError::UnknownService(service_id.to_owned()))
            }
        }
    }

    fn signed_parts(tenant_id: &str, service_id: &str) -> http::request::Parts {
        let signed = sign_request(&SignRequest {
            method: "POST",
            path: "/graphql",
            body: Some(BODY),
            tenant_id,
            service_id,
            secret: SECRET,
        });

        let (parts, ()) = http::Request::builder()
            .method("POST")
            .uri("/graphql")
            .header(X_SERVICE_ID, service_id)
            .header(X_TENANT_ID, tenant_id)
            .header(X_SERVICE_TIMESTAMP, signed.timestamp.to_string())
            .header(X_SERVICE_SIGNATURE, &signed.signature)
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[test]
    fn test_should_authorize_valid_request() {
        let parts = signed_parts("tenant-1", "svc-a");
        let context = authorizer().authorize(&parts, BODY).unwrap();
        assert_eq!(context.tenant_id.as_str(), "tenant-1");
        assert_eq!(context.service_id.as_str(), "svc-a");
    }

    #[test]
    fn test_should_reject_unknown_service() {
        let parts = signed_parts("tenant-1", "svc-x");
        let result = authorizer().authorize(&parts, BODY);
        assert!(matches!(result, Err(AuthError::UnknownService(_))));
    }

    #[test]
    fn test_should_reject_tenant_outside_allowlist() {
        let parts = signed_parts("tenant-2", "svc-a");
        let result = authorizer()
            .with_allowed_tenants(vec!["tenant-1".to_owned()])
            .authorize(&parts, BODY);
        assert!(matches!(result, Err(AuthError::UnauthorizedTenant(_))));
    }

    #[test]
    fn test_should_accept_tenant_inside_allowlist() {
        let parts = signed_parts("tenant-1", "svc-a");
        let result = authorizer()
            .with_allowed_tenants(vec!["tenant-1".to_owned()])
            .authorize(&parts, BODY);
        assert!(result.is_ok());
    }

    #[test]
    fn test_should_reject_mismatched_body() {
        // A diverging server-side body reconstruction must fail verification.
        let parts = signed_parts("tenant-1", "svc-a");
        let result = authorizer().authorize(&parts, "{\"query\":\"{pong}\"}");
        assert!(matches!(
            result,
            Err(AuthError::AuthenticationFailed(
                RejectReason::SignatureMismatch
            ))
        ));
    }

    #[test]
    fn test_should_reject_request_without_auth_headers() {
        let (parts, ()) = http::Request::builder()
            .method("POST")
            .uri("/graphql")
            .body(())
            .unwrap()
            .into_parts();

        let result = authorizer().authorize(&parts, BODY);
        assert!(matches!(result, Err(AuthError::MissingHeader(_))));
    }
}
