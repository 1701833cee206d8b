//! Operations on the `/project` endpoints.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{
    request::{CallOptions, HttpMethod, RequestOptionsBuilder},
    Error, Transport,
};

/// Path segment every project endpoint lives under.
const RESOURCE_PREFIX: &str = "project";

/// Access to the endpoints under `/rest/api/<version>/project`.
///
/// Each operation builds a descriptor and forwards it to the transport it
/// was created with. Responses are returned as raw JSON; decode them into
/// [`crate::types`] where a typed view is wanted.
pub struct ProjectClient<'a, T: Transport> {
    transport: &'a T,
    builder: RequestOptionsBuilder<'a, T>,
}

impl<'a, T: Transport> ProjectClient<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            builder: RequestOptionsBuilder::new(transport, RESOURCE_PREFIX),
        }
    }

    /// Returns all projects visible to the current user, or to anonymous
    /// access when no user is logged in.
    pub async fn get_all_projects(&self) -> Result<Value, Error> {
        let options = self.builder.build_collection(HttpMethod::Get, None)?;
        self.transport.make_request(&options).await
    }

    /// Returns the full representation of one project. Project keys are only
    /// included with `expand=projectKeys`.
    pub async fn get_project(&self, opts: &CallOptions) -> Result<Value, Error> {
        let options = self.builder.build(opts, "", HttpMethod::Get, None, None)?;
        self.transport.make_request(&options).await
    }

    /// Creates a project from a JSON description (`key`, `name`,
    /// `projectTypeKey`, `lead`, ...).
    pub async fn create_project(&self, body: Map<String, Value>) -> Result<Value, Error> {
        let options = self.builder.build_collection(HttpMethod::Post, Some(body))?;
        self.transport.make_request(&options).await
    }

    /// Updates the fields present in `body`; omitted fields are left alone.
    pub async fn update_project(
        &self,
        opts: &CallOptions,
        body: Map<String, Value>,
    ) -> Result<Value, Error> {
        let options = self
            .builder
            .build(opts, "", HttpMethod::Put, Some(body), None)?;
        self.transport.make_request(&options).await
    }

    pub async fn delete_project(&self, opts: &CallOptions) -> Result<Value, Error> {
        let options = self.builder.build(opts, "", HttpMethod::Delete, None, None)?;
        self.transport.make_request(&options).await
    }

    pub async fn get_components(&self, opts: &CallOptions) -> Result<Value, Error> {
        let options = self
            .builder
            .build(opts, "/components", HttpMethod::Get, None, None)?;
        self.transport.make_request(&options).await
    }

    /// Returns every issue type of the project with the statuses it can take.
    pub async fn get_statuses(&self, opts: &CallOptions) -> Result<Value, Error> {
        let options = self
            .builder
            .build(opts, "/statuses", HttpMethod::Get, None, None)?;
        self.transport.make_request(&options).await
    }

    /// Returns all versions of the project, unpaginated.
    pub async fn get_versions(&self, opts: &CallOptions) -> Result<Value, Error> {
        let options = self
            .builder
            .build(opts, "/versions", HttpMethod::Get, None, None)?;
        self.transport.make_request(&options).await
    }

    /// Returns one page of the project's versions.
    pub async fn get_versions_paginated(
        &self,
        opts: &CallOptions,
        page: &VersionPage,
    ) -> Result<Value, Error> {
        let options = self.builder.build(
            opts,
            "/version",
            HttpMethod::Get,
            None,
            Some(page.to_querystring()),
        )?;
        self.transport.make_request(&options).await
    }

    /// Returns a map of role name to role URL.
    pub async fn get_roles(&self, opts: &CallOptions) -> Result<Value, Error> {
        let options = self
            .builder
            .build(opts, "/role", HttpMethod::Get, None, None)?;
        self.transport.make_request(&options).await
    }

    pub async fn get_role(&self, opts: &CallOptions, role_id: i64) -> Result<Value, Error> {
        let options = self.builder.build(
            opts,
            format!("/role/{}", role_id).as_str(),
            HttpMethod::Get,
            None,
            None,
        )?;
        self.transport.make_request(&options).await
    }
}

/// Paging and ordering for [`ProjectClient::get_versions_paginated`].
/// Unset values are left to the server defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct VersionPage {
    /// Zero-based index of the first version to return.
    pub start_at: Option<i64>,
    pub max_results: Option<i64>,
    pub order_by: Option<VersionOrderBy>,
    /// Reverses `order_by`. Ignored when no order is set.
    pub descending: bool,
}

impl VersionPage {
    pub fn with_start_at(mut self, start_at: i64) -> Self {
        self.start_at = Some(start_at);
        self
    }

    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn with_order_by(mut self, order_by: VersionOrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn with_descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }

    fn to_querystring(&self) -> BTreeMap<String, String> {
        let mut qs = BTreeMap::new();
        if let Some(start_at) = self.start_at {
            qs.insert("startAt".to_string(), start_at.to_string());
        }
        if let Some(max_results) = self.max_results {
            qs.insert("maxResults".to_string(), max_results.to_string());
        }
        if let Some(order_by) = self.order_by {
            qs.insert(
                "orderBy".to_string(),
                format!("{}{}", if self.descending { "-" } else { "" }, order_by),
            );
        }
        qs
    }
}

/// Sort field for paginated versions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VersionOrderBy {
    #[default]
    Sequence,
    Name,
    StartDate,
    ReleaseDate,
}
impl std::fmt::Display for VersionOrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VersionOrderBy::Sequence => "sequence",
                VersionOrderBy::Name => "name",
                VersionOrderBy::StartDate => "startDate",
                VersionOrderBy::ReleaseDate => "releaseDate",
            }
        )
    }
}
