//! The seam between request construction and network dispatch.

use std::future::Future;

use url::Url;

use crate::{Error, RequestDescriptor};

/// Resolves API paths and executes [`RequestDescriptor`]s.
///
/// [`crate::JiraClient`] is the `reqwest`-backed implementation. Anything else
/// that can turn a descriptor into a JSON value (a recording fake, a proxy)
/// can be handed to [`crate::ProjectClient`] instead.
pub trait Transport {
    /// Resolves `path` (e.g. `/project/ABC`) against the API root.
    fn build_url(&self, path: &str) -> Result<Url, Error>;

    /// Executes the request and returns the decoded response body.
    fn make_request(
        &self,
        descriptor: &RequestDescriptor,
    ) -> impl Future<Output = Result<serde_json::Value, Error>> + Send;
}
