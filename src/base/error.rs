use thiserror::Error;

/// Failures surfaced by the cookie store and its header plumbing.
///
/// Everything except [`CookieError::HeadersAlreadySent`] is an argument
/// validation failure raised before any table mutation or header emission.
/// `HeadersAlreadySent` originates in the host response layer and is
/// propagated unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CookieError {
    #[error("cookie name is empty")]
    EmptyName,

    #[error("cookie name {0:?} is not a valid token")]
    InvalidName(String),

    #[error("relative cookie expiration is negative")]
    NegativeExpiry,

    #[error("absolute cookie expiration predates the unix epoch")]
    PreEpochExpiry,

    #[error("cookie {0:?} does not render to a valid header value")]
    UnencodableValue(String),

    #[error("response headers already sent")]
    HeadersAlreadySent,
}

/// Result type alias for cookie operations.
pub type CookieResult<T> = Result<T, CookieError>;

impl CookieError {
    /// True for the validation family: errors raised synchronously before
    /// any mutation, as opposed to host-surfaced emission failures.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, CookieError::HeadersAlreadySent)
    }
}
