//! Error and handler contracts for catalog imports
//!
//! Every failure inside an import collapses into [`ImportError`], which keeps
//! the original cause reachable through `source()`. Handlers are modelled as
//! a named function type ([`ResponseHandler`]) resolved at compile time.

use std::future::Future;

use reqwest::Response;
use thiserror::Error;

/// Boxed error accepted as the cause of an [`ImportError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// Error Types
// ============================================================================

/// Failure of an import, whatever stage it came from
///
/// The message is the cause's own description. Request, handler and parse
/// failures are not distinguished.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ImportError {
    message: String,
    #[source]
    source: BoxError,
}

impl ImportError {
    /// Wrap an underlying cause
    pub fn new(cause: impl Into<BoxError>) -> Self {
        let source = cause.into();
        ImportError {
            message: source.to_string(),
            source,
        }
    }

    /// Description of the underlying cause
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the error and return the original cause
    pub fn into_cause(self) -> BoxError {
        self.source
    }
}

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;

/// Errors raised while building a fetcher
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Base URL must not carry a query or fragment: {0}")]
    BaseUrlHasQuery(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

// ============================================================================
// Response Handler
// ============================================================================

/// Pre-processing hook applied to the raw response before its body is parsed
///
/// Implemented for any `FnOnce(Response) -> Future<Output = Result<Response, E>>`,
/// so both `async fn` items and closures returning async blocks qualify.
pub trait ResponseHandler {
    /// Error reported by the handler
    type Error: Into<BoxError>;

    /// Future resolving to the response that will be parsed
    type Future: Future<Output = Result<Response, Self::Error>>;

    /// Inspect or replace the response
    fn handle(self, response: Response) -> Self::Future;
}

impl<F, Fut, E> ResponseHandler for F
where
    F: FnOnce(Response) -> Fut,
    Fut: Future<Output = Result<Response, E>>,
    E: Into<BoxError>,
{
    type Error = E;
    type Future = Fut;

    fn handle(self, response: Response) -> Self::Future {
        self(response)
    }
}
