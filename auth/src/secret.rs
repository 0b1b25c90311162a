use subtle::ConstantTimeEq;

/// Request header carrying the shared admin secret.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Error type for admin secret verification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("admin password is not configured")]
    NotConfigured,

    #[error("invalid admin password")]
    InvalidSecret,
}

/// Expected admin secret, injected from configuration at startup.
///
/// An empty string counts as unset; an empty shared secret guards nothing.
#[derive(Clone, Default)]
pub struct AdminSecret {
    secret: Option<String>,
}

impl AdminSecret {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Verify a presented secret in constant time.
    ///
    /// `NotConfigured` takes precedence over `InvalidSecret`: with no
    /// expected value there is nothing a client could present that would
    /// be accepted, and the operator needs to know.
    pub fn verify(&self, presented: Option<&str>) -> Result<(), AuthError> {
        let expected = self.secret.as_deref().ok_or(AuthError::NotConfigured)?;
        let presented = presented.ok_or(AuthError::InvalidSecret)?;
        if bool::from(expected.as_bytes().ct_eq(presented.as_bytes())) {
            Ok(())
        } else {
            Err(AuthError::InvalidSecret)
        }
    }
}

// Never log the secret itself.
impl std::fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSecret")
            .field("configured", &self.is_configured())
            .finish()
    }
}
