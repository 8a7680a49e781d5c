use crate::headers::Headers;
use thiserror::Error;

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// No `Origin` header: the request is not a CORS request and is left untouched.
    NotCors,
    Preflight(Headers),
    Actual(Headers),
    /// The request must be aborted with a client error; downstream stages must not run.
    Rejected(RejectionReason),
}

impl CorsDecision {
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            Self::Preflight(headers) | Self::Actual(headers) => Some(headers),
            Self::NotCors | Self::Rejected(_) => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Reasons a CORS request is refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Origin not allowed according to CORS")]
    OriginNotAllowed,
    #[error("Method not allowed according to CORS")]
    MethodNotAllowed,
    #[error("The Access-Control-Request-Method header is missing from the request")]
    MissingRequestMethodHeader,
}

impl RejectionReason {
    /// HTTP status the surrounding pipeline answers with. Every rejection is a bad request.
    pub fn status_code(&self) -> u16 {
        400
    }
}
