//! HMAC service-to-service request authentication for Storegate.
//!
//! This crate implements the signing protocol used between the storefront's
//! backend-for-frontend proxy and the CMS handler behind the managed GraphQL
//! API. The proxy signs each outbound request over a canonical string of its
//! security-relevant fields; the handler independently rebuilds that string
//! from the inbound invocation and verifies the signature before executing
//! anything.
//!
//! # Overview
//!
//! Signing and verification are pure, synchronous computations keyed by a
//! shared secret distributed out-of-band. The signature travels as three
//! HTTP headers alongside the request; a 5-minute freshness window bounds
//! replay exposure, and comparison is constant-time.
//!
//! # Usage
//!
//! ```rust
//! use storegate_auth::sign::{SignRequest, sign_request};
//! use storegate_auth::verify::verify_request;
//!
//! let signed = sign_request(&SignRequest {
//!     method: "POST",
//!     path: "/graphql",
//!     body: Some("{\"query\":\"{ping}\"}"),
//!     tenant_id: "tenant-1",
//!     service_id: "svc-a",
//!     secret: "test-secret",
//! });
//!
//! let result = verify_request(
//!     "POST",
//!     "/graphql",
//!     Some("{\"query\":\"{ping}\"}"),
//!     "tenant-1",
//!     "svc-a",
//!     signed.timestamp,
//!     &signed.signature,
//!     "test-secret",
//! );
//! assert!(result.valid);
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical request construction shared by both sides
//! - [`sign`] - Request signing for the outbound proxy
//! - [`verify`] - Signature verification for the inbound handler
//! - [`headers`] - Wire header conventions and extraction
//! - [`credentials`] - Secret provider trait and in-memory implementation
//! - [`authorizer`] - The authentication layer escalating rejections
//! - [`error`] - Authentication error types

pub mod authorizer;
pub mod canonical;
pub mod credentials;
pub mod error;
pub mod headers;
pub mod sign;
pub mod verify;

pub use authorizer::{AuthContext, ServiceAuthorizer};
pub use credentials::{SecretProvider, StaticSecretProvider, generate_service_secret};
pub use error::AuthError;
pub use headers::AuthHeaders;
pub use sign::{SignRequest, SignedRequest, sign_request};
pub use verify::{REPLAY_WINDOW_MS, RejectReason, VerificationResult, verify_request};
