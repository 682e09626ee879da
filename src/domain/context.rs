//! Operation Context
//!
//! Metadata about the current request, carried from the auth middleware to
//! the authorizer (for gateway credential forwarding) and to the audit
//! publisher.

/// Context for an operation.
#[derive(Debug, Clone)]
pub struct OperationContext {
    /// Raw bearer token, forwarded verbatim to the account service.
    /// Signature/expiry were already verified by upstream middleware.
    pub token: String,

    /// Verified subject id resolved from the token, when present
    pub subject: Option<String>,

    /// Caller-supplied correlation id, propagated across service calls
    pub correlation: Option<String>,

    /// Request path, recorded in audit events
    pub path: String,
}

impl OperationContext {
    pub fn new(token: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            subject: None,
            correlation: None,
            path: path.into(),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_correlation(mut self, correlation: impl Into<String>) -> Self {
        self.correlation = Some(correlation.into());
        self
    }
}
