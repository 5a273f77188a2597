//! End-to-end flow: the proxy signs a GraphQL request and attaches headers,
//! the handler extracts them and authorizes against the reconstructed body.

use std::sync::Arc;

use storegate_auth::headers::X_TENANT_ID;
use storegate_auth::sign::{SignRequest, sign_request};
use storegate_auth::verify::{RejectReason, verify_request};
use storegate_auth::{AuthError, ServiceAuthorizer, StaticSecretProvider};

const SECRET: &str = "test-secret";

fn graphql_body() -> String {
    serde_json::json!({
        "query": "query GetHeroSections($tenantId: String!) { getHeroSections(tenantId: $tenantId) { id headline } }",
        "variables": { "tenantId": "tenant-1" },
        "operationName": "GetHeroSections",
    })
    .to_string()
}

fn authorizer() -> ServiceAuthorizer {
    let provider =
        StaticSecretProvider::new(vec![("svc-a".to_owned(), SECRET.to_owned())]);
    ServiceAuthorizer::new(Arc::new(provider)).with_allowed_tenants(vec!["tenant-1".to_owned()])
}

#[test]
fn test_should_authorize_signed_graphql_request_end_to_end() {
    let body = graphql_body();

    // Proxy side: sign and attach headers.
    let signed = sign_request(&SignRequest {
        method: "POST",
        path: "/graphql",
        body: Some(&body),
        tenant_id: "tenant-1",
        service_id: "svc-a",
        secret: SECRET,
    });

    let mut builder = http::Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(X_TENANT_ID, "tenant-1");
    signed
        .apply_headers(builder.headers_mut().expect("valid builder"))
        .unwrap();
    let (parts, ()) = builder.body(()).unwrap().into_parts();

    // Handler side: extract headers and verify over the same body bytes.
    let context = authorizer().authorize(&parts, &body).unwrap();
    assert_eq!(context.tenant_id.as_str(), "tenant-1");
    assert_eq!(context.service_id.as_str(), "svc-a");
}

#[test]
fn test_should_verify_example_scenario_and_reject_shifted_timestamp() {
    let body = "{\"query\":\"{ping}\"}";

    let signed = sign_request(&SignRequest {
        method: "POST",
        path: "/graphql",
        body: Some(body),
        tenant_id: "tenant-1",
        service_id: "svc-a",
        secret: SECRET,
    });

    let result = verify_request(
        "POST",
        "/graphql",
        Some(body),
        "tenant-1",
        "svc-a",
        signed.timestamp,
        &signed.signature,
        SECRET,
    );
    assert!(result.valid);
    assert_eq!(result.reason, None);

    // Re-verify with the timestamp pushed 400s into the past.
    let stale = verify_request(
        "POST",
        "/graphql",
        Some(body),
        "tenant-1",
        "svc-a",
        signed.timestamp - 400_000,
        &signed.signature,
        SECRET,
    );
    assert!(!stale.valid);
    assert_eq!(stale.reason, Some(RejectReason::StaleTimestamp));
}

#[test]
fn test_should_reject_replayed_signature_under_other_tenant() {
    let body = graphql_body();

    let signed = sign_request(&SignRequest {
        method: "POST",
        path: "/graphql",
        body: Some(&body),
        tenant_id: "tenant-1",
        service_id: "svc-a",
        secret: SECRET,
    });

    // Replay the captured signature with a different tenant header. The
    // allowlist admits the tenant here to prove the signature itself binds
    // the tenant id.
    let mut builder = http::Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(X_TENANT_ID, "tenant-2");
    signed
        .apply_headers(builder.headers_mut().expect("valid builder"))
        .unwrap();
    let (parts, ()) = builder.body(()).unwrap().into_parts();

    let provider =
        StaticSecretProvider::new(vec![("svc-a".to_owned(), SECRET.to_owned())]);
    let result = ServiceAuthorizer::new(Arc::new(provider)).authorize(&parts, &body);

    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed(
            RejectReason::SignatureMismatch
        ))
    ));
}
