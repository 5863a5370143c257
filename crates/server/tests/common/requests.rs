//! Request helpers for driving the router in-process.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

pub const BOUNDARY: &str = "blazedesk-test-boundary";

/// A multipart form part.
#[allow(dead_code)]
pub enum Part<'a> {
    Text { name: &'a str, value: &'a str },
    File { name: &'a str, filename: &'a str, content: &'a [u8] },
}

/// Send a request and decode the response body as JSON (`Null` if empty or not JSON).
#[allow(dead_code)]
pub async fn send(router: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

#[allow(dead_code)]
pub async fn json_request(
    router: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(v) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&v).unwrap())
        }
        None => Body::empty(),
    };

    send(router, builder.body(body).unwrap()).await
}

#[allow(dead_code)]
pub async fn raw_request(
    router: &axum::Router,
    method: &str,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", content_type)
        .body(body.into())
        .unwrap();
    send(router, request).await
}

#[allow(dead_code)]
pub async fn form_request(router: &axum::Router, uri: &str, body: &str) -> (StatusCode, Value) {
    raw_request(
        router,
        "POST",
        uri,
        "application/x-www-form-urlencoded",
        body.to_string(),
    )
    .await
}

#[allow(dead_code)]
pub async fn multipart_request(
    router: &axum::Router,
    uri: &str,
    parts: &[Part<'_>],
) -> (StatusCode, Value) {
    raw_request(
        router,
        "POST",
        uri,
        &format!("multipart/form-data; boundary={BOUNDARY}"),
        multipart_body(parts),
    )
    .await
}

/// Encode parts as a multipart/form-data body using [`BOUNDARY`].
#[allow(dead_code)]
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                filename,
                content,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: text/turtle\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(content);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
