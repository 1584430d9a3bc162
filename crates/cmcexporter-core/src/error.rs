//! Shared error type across cmcexporter crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid configuration or extraction schema.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Transport failure or non-success upstream status.
    FetchFailed,
    /// Host outside the allowed domain set.
    DomainNotAllowed,
    /// Upstream answered with something other than HTML.
    NotHtml,
    /// A numeric field could not be coerced while rendering.
    InvalidNumber,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::FetchFailed => "FETCH_FAILED",
            ClientCode::DomainNotAllowed => "DOMAIN_NOT_ALLOWED",
            ClientCode::NotHtml => "NOT_HTML",
            ClientCode::InvalidNumber => "INVALID_NUMBER",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("domain not allowed: {0}")]
    DomainNotAllowed(String),
    #[error("not html: {0}")]
    NotHtml(String),
    #[error("invalid number for {metric}: {value:?}")]
    InvalidNumber { metric: &'static str, value: String },
    #[error("internal: {0}")]
    Internal(String),
}

impl ExporterError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ExporterError::BadRequest(_) => ClientCode::BadRequest,
            ExporterError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            ExporterError::Fetch(_) => ClientCode::FetchFailed,
            ExporterError::DomainNotAllowed(_) => ClientCode::DomainNotAllowed,
            ExporterError::NotHtml(_) => ClientCode::NotHtml,
            ExporterError::InvalidNumber { .. } => ClientCode::InvalidNumber,
            ExporterError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Whether this error only degrades a scrape (status metric 0) rather than
    /// failing the request.
    pub fn is_scrape_failure(&self) -> bool {
        matches!(
            self,
            ExporterError::Fetch(_) | ExporterError::DomainNotAllowed(_) | ExporterError::NotHtml(_)
        )
    }
}
