//! Request construction: turns [`CallOptions`] into a [`RequestDescriptor`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::{Error, Transport};

/// HTTP method for a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller input for an operation on a single project.
///
/// `fields` and `expand` are sent as comma-joined querystring values. An
/// empty list means the parameter is not sent at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Numeric project id or project key, e.g. `10000` or `TEST`.
    pub resource_id_or_key: String,
    pub fields: Vec<String>,
    pub expand: Vec<String>,
}

impl CallOptions {
    pub fn new(resource_id_or_key: &str) -> Self {
        Self {
            resource_id_or_key: resource_id_or_key.to_string(),
            ..Default::default()
        }
    }

    pub fn with_field(mut self, field: &str) -> Self {
        self.fields.push(field.to_string());
        self
    }
    pub fn with_fields(mut self, fields: &[String]) -> Self {
        self.fields.extend_from_slice(fields);
        self
    }

    pub fn with_expand(mut self, expand: &str) -> Self {
        self.expand.push(expand.to_string());
        self
    }
    pub fn with_expands(mut self, expand: &[String]) -> Self {
        self.expand.extend_from_slice(expand);
        self
    }
}

/// A fully resolved request, described as plain data.
///
/// Built fresh for every call and handed to [`Transport::make_request`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDescriptor {
    pub uri: Url,
    pub method: HttpMethod,
    pub body: Map<String, Value>,
    pub querystring: BTreeMap<String, String>,
    pub follow_redirects: bool,
    pub expect_json: bool,
}

impl RequestDescriptor {
    /// Returns `uri` with the querystring appended, form-urlencoded.
    pub fn url_with_query(&self) -> Url {
        let mut url = self.uri.clone();
        if !self.querystring.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.querystring {
                pairs.append_pair(key, value);
            }
        }
        url
    }
}

/// Builds descriptors for the endpoints under `/<resource_prefix>`.
pub struct RequestOptionsBuilder<'a, T: Transport> {
    transport: &'a T,
    resource_prefix: &'static str,
}

impl<'a, T: Transport> RequestOptionsBuilder<'a, T> {
    pub fn new(transport: &'a T, resource_prefix: &'static str) -> Self {
        Self {
            transport,
            resource_prefix,
        }
    }

    /// Builds the descriptor for `/<resource_prefix>/<id or key><sub_path>`.
    ///
    /// `sub_path` is appended verbatim. Non-empty `opts.fields` and
    /// `opts.expand` are joined with `,` into the `fields` and `expand`
    /// querystring keys, replacing any same-named entries in `querystring`.
    pub fn build(
        &self,
        opts: &CallOptions,
        sub_path: &str,
        method: HttpMethod,
        body: Option<Map<String, Value>>,
        querystring: Option<BTreeMap<String, String>>,
    ) -> Result<RequestDescriptor, Error> {
        if opts.resource_id_or_key.trim().is_empty() {
            tracing::error!("Refusing to build {} {}: empty id or key", method, sub_path);
            return Err(Error::MissingResourceId);
        }
        if opts
            .resource_id_or_key
            .contains(|c| matches!(c, '/' | '?' | '#'))
        {
            tracing::error!(
                "Refusing to build {} {}: id or key {:?} contains a URL delimiter",
                method,
                sub_path,
                opts.resource_id_or_key
            );
            return Err(Error::InvalidResourceId(opts.resource_id_or_key.clone()));
        }
        let base_path = format!("/{}/{}", self.resource_prefix, opts.resource_id_or_key);

        let mut querystring = querystring.unwrap_or_default();
        if !opts.fields.is_empty() {
            querystring.insert("fields".to_string(), opts.fields.join(","));
        }
        if !opts.expand.is_empty() {
            querystring.insert("expand".to_string(), opts.expand.join(","));
        }

        Ok(RequestDescriptor {
            uri: self.transport.build_url(&format!("{}{}", base_path, sub_path))?,
            method,
            body: body.unwrap_or_default(),
            querystring,
            follow_redirects: true,
            expect_json: true,
        })
    }

    /// Builds the descriptor for the collection itself, `/<resource_prefix>`,
    /// with no querystring.
    pub fn build_collection(
        &self,
        method: HttpMethod,
        body: Option<Map<String, Value>>,
    ) -> Result<RequestDescriptor, Error> {
        Ok(RequestDescriptor {
            uri: self
                .transport
                .build_url(&format!("/{}", self.resource_prefix))?,
            method,
            body: body.unwrap_or_default(),
            querystring: BTreeMap::new(),
            follow_redirects: true,
            expect_json: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRoot;

    impl Transport for FixedRoot {
        fn build_url(&self, path: &str) -> Result<Url, Error> {
            Url::parse(&format!("https://jira.example.com/rest/api/2{}", path))
                .map_err(|e| Error::InvalidUrl(e.to_string()))
        }

        async fn make_request(&self, _descriptor: &RequestDescriptor) -> Result<Value, Error> {
            Ok(Value::Null)
        }
    }

    fn builder() -> RequestOptionsBuilder<'static, FixedRoot> {
        RequestOptionsBuilder::new(&FixedRoot, "project")
    }

    #[test]
    fn fields_are_comma_joined() {
        for fields in [
            vec!["summary"],
            vec!["summary", "status"],
            vec!["summary", "status", "assignee", "labels"],
        ] {
            let owned: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
            let opts = CallOptions::new("X").with_fields(&owned);
            let desc = builder().build(&opts, "", HttpMethod::Get, None, None).unwrap();
            let joined = &desc.querystring["fields"];
            assert_eq!(joined, &fields.join(","));
            assert!(!joined.ends_with(','));
        }
    }

    #[test]
    fn empty_lists_leave_keys_unset() {
        let desc = builder()
            .build(&CallOptions::new("X"), "", HttpMethod::Get, None, None)
            .unwrap();
        assert!(!desc.querystring.contains_key("fields"));
        assert!(!desc.querystring.contains_key("expand"));
        assert!(desc.querystring.is_empty());
    }

    #[test]
    fn sub_path_is_appended() {
        let desc = builder()
            .build(&CallOptions::new("ABC"), "/versions", HttpMethod::Get, None, None)
            .unwrap();
        assert!(desc.uri.as_str().ends_with("/project/ABC/versions"));
    }

    #[test]
    fn build_is_idempotent() {
        let opts = CallOptions::new("ABC")
            .with_field("summary")
            .with_expand("names");
        let first = builder().build(&opts, "/role", HttpMethod::Get, None, None).unwrap();
        let second = builder().build(&opts, "/role", HttpMethod::Get, None, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn full_descriptor() {
        let opts = CallOptions::new("TEST")
            .with_field("summary")
            .with_field("status")
            .with_expand("names");
        let desc = builder().build(&opts, "", HttpMethod::Get, None, None).unwrap();

        insta::assert_json_snapshot!(desc, @r###"
        {
          "uri": "https://jira.example.com/rest/api/2/project/TEST",
          "method": "GET",
          "body": {},
          "querystring": {
            "expand": "names",
            "fields": "summary,status"
          },
          "followRedirects": true,
          "expectJson": true
        }
        "###);
    }

    #[test]
    fn caller_querystring_is_kept_and_fields_override() {
        let mut qs = BTreeMap::new();
        qs.insert("startAt".to_string(), "50".to_string());
        qs.insert("fields".to_string(), "stale".to_string());

        let opts = CallOptions::new("ABC").with_field("name");
        let desc = builder()
            .build(&opts, "/version", HttpMethod::Get, None, Some(qs))
            .unwrap();
        assert_eq!(desc.querystring["startAt"], "50");
        assert_eq!(desc.querystring["fields"], "name");
    }

    #[test]
    fn body_defaults_to_empty_object() {
        let desc = builder()
            .build(&CallOptions::new("ABC"), "", HttpMethod::Put, None, None)
            .unwrap();
        assert!(desc.body.is_empty());

        let mut body = Map::new();
        body.insert("name".to_string(), Value::from("Renamed"));
        let desc = builder()
            .build(&CallOptions::new("ABC"), "", HttpMethod::Put, Some(body), None)
            .unwrap();
        assert_eq!(desc.method, HttpMethod::Put);
        assert_eq!(desc.body["name"], "Renamed");
    }

    #[test]
    fn values_pass_through_unescaped() {
        let opts = CallOptions::new("ABC").with_field("customfield_10000 & more");
        let desc = builder().build(&opts, "", HttpMethod::Get, None, None).unwrap();
        assert_eq!(desc.querystring["fields"], "customfield_10000 & more");
    }

    #[test]
    fn empty_key_is_rejected() {
        for key in ["", "   "] {
            let err = builder()
                .build(&CallOptions::new(key), "", HttpMethod::Get, None, None)
                .unwrap_err();
            assert!(matches!(err, Error::MissingResourceId));
        }
    }

    #[test]
    fn url_delimiters_in_key_are_rejected() {
        for key in ["A#B", "A?expand=x", "../admin", "A/B"] {
            let err = builder()
                .build(&CallOptions::new(key), "", HttpMethod::Get, None, None)
                .unwrap_err();
            match err {
                Error::InvalidResourceId(rejected) => assert_eq!(rejected, key),
                other => panic!("expected InvalidResourceId for {key:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn collection_has_no_querystring() {
        let desc = builder().build_collection(HttpMethod::Get, None).unwrap();
        assert!(desc.uri.as_str().ends_with("/rest/api/2/project"));
        assert!(desc.querystring.is_empty());
        assert!(desc.body.is_empty());
        assert!(desc.follow_redirects);
        assert!(desc.expect_json);
    }

    #[test]
    fn url_with_query_encodes_pairs() {
        let opts = CallOptions::new("TEST")
            .with_field("summary")
            .with_field("status")
            .with_expand("names");
        let desc = builder().build(&opts, "", HttpMethod::Get, None, None).unwrap();
        let url = desc.url_with_query();
        assert_eq!(url.query(), Some("expand=names&fields=summary%2Cstatus"));

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("fields".to_string(), "summary,status".to_string())));
    }

    #[test]
    fn url_with_query_without_pairs_has_no_question_mark() {
        let desc = builder().build_collection(HttpMethod::Get, None).unwrap();
        assert_eq!(desc.url_with_query().query(), None);
    }

    #[test]
    fn method_display() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(serde_json::to_value(HttpMethod::Post).unwrap(), "POST");
    }
}
