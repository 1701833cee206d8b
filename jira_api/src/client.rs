//! HTTP client for the Jira REST API.

use reqwest::redirect::Policy;
use url::Url;

use crate::{
    config::JiraConfig, project::ProjectClient, request::HttpMethod, Error, RequestDescriptor,
    Transport,
};

/// Redirect hops followed when a descriptor asks for redirects.
const MAX_REDIRECTS: usize = 10;

/// `reqwest`-backed [`Transport`] for a single Jira instance.
///
/// Holds one connection pool per redirect policy so a descriptor's
/// `follow_redirects` flag can be honoured per request. Sends no
/// credentials and never retries.
pub struct JiraClient {
    config: JiraConfig,
    http: reqwest::Client,
    http_no_redirect: reqwest::Client,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Result<Self, Error> {
        let http = build_http(&config, Policy::limited(MAX_REDIRECTS))?;
        let http_no_redirect = build_http(&config, Policy::none())?;
        Ok(Self {
            config,
            http,
            http_no_redirect,
        })
    }

    /// Creates a client from a full instance URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(JiraConfig::from_url(base_url)?)
    }

    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    /// Operations under `/project`, dispatched through this client.
    pub fn project(&self) -> ProjectClient<'_, Self> {
        ProjectClient::new(self)
    }
}

impl Transport for JiraClient {
    fn build_url(&self, path: &str) -> Result<Url, Error> {
        let raw = format!(
            "{}{}{}",
            self.config.base_url(),
            self.config.api_base_path(),
            path
        );
        Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(format!("{}: {}", raw, e))
        })
    }

    async fn make_request(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<serde_json::Value, Error> {
        let url = descriptor.url_with_query();
        tracing::debug!("{} {}", descriptor.method, url);

        let http = if descriptor.follow_redirects {
            &self.http
        } else {
            &self.http_no_redirect
        };
        let mut request = http.request(to_reqwest_method(descriptor.method), url);
        if descriptor.expect_json {
            request = request.header("accept", "application/json");
        }
        // POST and PUT always carry a JSON body, `{}` when nothing was given.
        let sends_body = matches!(descriptor.method, HttpMethod::Post | HttpMethod::Put);
        if sends_body || !descriptor.body.is_empty() {
            request = request.json(&descriptor.body);
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to send {} request: {}", descriptor.method, e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        if !descriptor.expect_json {
            return Ok(serde_json::Value::String(body));
        }

        serde_json::from_str(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::ParseFailed(e.to_string())
        })
    }
}

fn build_http(config: &JiraConfig, redirect: Policy) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .redirect(redirect)
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::RequestFailed
        })
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
