//! Lambda entry point for the NoteStore gateway.
//!
//! Builds the shared DynamoDB client once at cold start, then dispatches
//! API-Gateway-style events to the gateway by HTTP method. The gateway
//! always produces a well-formed envelope, so the service function only
//! fails on envelope-to-HTTP conversion.

use lambda_http::{run, service_fn, tracing, Body, Error, RequestExt};
use notestore_core::{DynamoStore, Gateway, GatewayConfig, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = GatewayConfig::from_env()?;
    let gateway = Gateway::new(DynamoStore::from_config(&config).await);

    run(service_fn(|event| handle_event(&gateway, event))).await
}

async fn handle_event(
    gateway: &Gateway<DynamoStore>,
    event: lambda_http::Request,
) -> Result<lambda_http::Response<Body>, Error> {
    let method = event.method().clone();
    let request = to_gateway_request(event);

    let response = match method.as_str() {
        "POST" => gateway.create(&request).await,
        "PUT" => gateway.update(&request).await,
        "DELETE" => gateway.delete(&request).await,
        "GET" => gateway.list(&request).await,
        other => Response::error(405, format!("unsupported method: {other}")),
    };

    to_lambda_response(response)
}

fn to_gateway_request(event: lambda_http::Request) -> Request {
    let mut request = Request::new();
    for (name, value) in event.path_parameters().iter() {
        request = request.with_path_parameter(name, value);
    }
    for (name, value) in event.query_string_parameters().iter() {
        request = request.with_query_parameter(name, value);
    }
    match event.body() {
        Body::Text(text) if !text.is_empty() => request.with_body(text.clone()),
        Body::Binary(bytes) => request.with_body(String::from_utf8_lossy(bytes).into_owned()),
        _ => request,
    }
}

fn to_lambda_response(response: Response) -> Result<lambda_http::Response<Body>, Error> {
    Ok(lambda_http::Response::builder()
        .status(response.status_code)
        .header("content-type", "application/json")
        .body(Body::Text(response.body))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_event_conversion_carries_parameters_and_body() {
        let event = lambda_http::http::Request::builder()
            .method("PUT")
            .uri("/notes/n1")
            .body(Body::Text(r#"{"title":"B","body":"y"}"#.to_string()))
            .unwrap()
            .with_path_parameters(HashMap::from([("id".to_string(), "n1".to_string())]))
            .with_query_string_parameters(HashMap::from([(
                "limit".to_string(),
                "10".to_string(),
            )]));

        let request = to_gateway_request(event);
        assert_eq!(request.path_parameter("id"), Some("n1"));
        assert_eq!(request.query_parameter("limit"), Some("10"));
        assert_eq!(request.body.as_deref(), Some(r#"{"title":"B","body":"y"}"#));
    }

    #[test]
    fn test_empty_event_body_stays_absent() {
        let event = lambda_http::http::Request::builder()
            .method("GET")
            .uri("/notes")
            .body(Body::Empty)
            .unwrap();

        let request = to_gateway_request(event);
        assert!(request.body.is_none());
        assert!(request.path_parameters.is_empty());
    }

    #[test]
    fn test_envelope_converts_to_http_response() {
        let response = to_lambda_response(Response::error(404, "Note not found: n1")).unwrap();
        assert_eq!(response.status().as_u16(), 404);

        let Body::Text(body) = response.body() else {
            panic!("expected a text body");
        };
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["error"], "Note not found: n1");
    }
}
