//! Error types for the API client.

/// Errors that can occur when building or dispatching API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A request URL could not be resolved from the configured base and path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The project id or key was empty.
    #[error("Missing project id or key")]
    MissingResourceId,
    /// The project id or key contains a character that would change the URL
    /// structure (`/`, `?` or `#`).
    #[error("Invalid project id or key: {0}")]
    InvalidResourceId(String),
    /// A 2xx response body was not valid JSON.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
}
