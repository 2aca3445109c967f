//! The abstracted invocation event handed to the gateway.
//!
//! The trigger front end (API Gateway, a test harness, a local router) is an
//! external collaborator; all the gateway sees is this struct.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single incoming request: path parameters, query parameters, and an
/// optional raw JSON body.
///
/// Field names serialize in camelCase so the struct can be deserialized
/// directly from an API-Gateway-style proxy event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Request {
    pub path_parameters: HashMap<String, String>,
    #[serde(rename = "queryStringParameters")]
    pub query_parameters: HashMap<String, String>,
    pub body: Option<String>,
}

impl Request {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a path parameter (e.g. the `id` segment of `/notes/{id}`).
    #[must_use]
    pub fn with_path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters.insert(name.into(), value.into());
        self
    }

    /// Adds a query-string parameter.
    #[must_use]
    pub fn with_query_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.query_parameters.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query_parameters.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_parameters_and_body() {
        let request = Request::new()
            .with_path_parameter("id", "n1")
            .with_query_parameter("limit", "10")
            .with_body(r#"{"title":"A"}"#);

        assert_eq!(request.path_parameter("id"), Some("n1"));
        assert_eq!(request.query_parameter("limit"), Some("10"));
        assert_eq!(request.body.as_deref(), Some(r#"{"title":"A"}"#));
        assert!(request.path_parameter("missing").is_none());
    }

    #[test]
    fn test_deserializes_from_proxy_event_shape() {
        let event = r#"{"pathParameters":{"id":"n1"},"body":"{}"}"#;
        let request: Request = serde_json::from_str(event).unwrap();
        assert_eq!(request.path_parameter("id"), Some("n1"));
        assert!(request.query_parameters.is_empty());
    }
}
