//! Admin authentication for the tool directory control surface.
//!
//! Mutating endpoints are guarded by a single shared secret carried in the
//! `x-admin-password` request header. The expected value is injected once
//! at startup; a deployment with no secret configured is reported as a
//! distinct condition from a wrong secret, so a misconfigured server never
//! masquerades as an authorization failure.

mod secret;

pub use secret::{AdminSecret, AuthError, ADMIN_PASSWORD_HEADER};
