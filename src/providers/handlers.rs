//! Stock response handlers

use std::convert::Infallible;

use reqwest::Response;
use tracing::debug;

/// Pass the response through untouched
pub async fn identity(response: Response) -> Result<Response, Infallible> {
    Ok(response)
}

/// Reject responses whose status is not 2xx
pub async fn ensure_success(response: Response) -> Result<Response, reqwest::Error> {
    debug!(status = response.status().as_u16(), "Checking response status");
    response.error_for_status()
}
