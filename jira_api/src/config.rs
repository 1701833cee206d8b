//! Connection settings for a Jira instance.

use std::time::Duration;

use url::Url;

use crate::Error;

/// Request timeout applied when none is configured.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the Jira REST API lives and how long to wait for it.
///
/// Resolved URLs have the shape
/// `<protocol>://<host>[:<port>]<path_prefix>rest/api/<api_version><path>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JiraConfig {
    /// URL scheme. Defaults to `https`.
    pub protocol: String,
    /// Host name or address, without scheme or port.
    pub host: String,
    /// Explicit port. `None` uses the scheme default.
    pub port: Option<u16>,
    /// Context root the instance is served under. Defaults to `/`.
    pub path_prefix: String,
    /// REST API version segment. Defaults to `2`.
    pub api_version: String,
    /// Per-request timeout. Defaults to 30 seconds.
    pub timeout: Duration,
}

impl JiraConfig {
    /// Creates a configuration for `host` with all other settings at their defaults.
    pub fn new(host: &str) -> Self {
        Self {
            protocol: "https".to_string(),
            host: host.to_string(),
            port: None,
            path_prefix: "/".to_string(),
            api_version: "2".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Derives protocol, host, port and path prefix from a full URL such as
    /// `https://jira.example.com:8443/jira`.
    ///
    /// URLs carrying credentials, a query or a fragment are rejected with
    /// [`Error::InvalidUrl`].
    pub fn from_url(url: &str) -> Result<Self, Error> {
        let parsed = Url::parse(url).map_err(|e| {
            tracing::error!("Invalid Jira URL {}: {}", url, e);
            Error::InvalidUrl(e.to_string())
        })?;
        let host = parsed
            .host_str()
            .ok_or_else(|| Error::InvalidUrl(format!("{} has no host", url)))?;
        if !parsed.username().is_empty() || parsed.password().is_some() {
            tracing::error!("Jira URL for {} carries credentials", host);
            return Err(Error::InvalidUrl(format!(
                "{} must not carry credentials",
                host
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            tracing::error!("Jira URL {} carries a query or fragment", url);
            return Err(Error::InvalidUrl(format!(
                "{} must not carry a query or fragment",
                url
            )));
        }

        let mut config = Self::new(host);
        config.protocol = parsed.scheme().to_string();
        config.port = parsed.port();
        config.path_prefix = parsed.path().to_string();
        Ok(config)
    }

    pub fn with_protocol(mut self, protocol: &str) -> Self {
        self.protocol = protocol.to_string();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_path_prefix(mut self, path_prefix: &str) -> Self {
        self.path_prefix = path_prefix.to_string();
        self
    }

    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Scheme, host and port, e.g. `https://jira.example.com:8443`.
    pub fn base_url(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.protocol, self.host, port),
            None => format!("{}://{}", self.protocol, self.host),
        }
    }

    /// Path of the REST API root, e.g. `/jira/rest/api/2`.
    pub fn api_base_path(&self) -> String {
        let prefix = self.path_prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("/rest/api/{}", self.api_version)
        } else {
            format!("/{}/rest/api/{}", prefix, self.api_version)
        }
    }
}
