//! Request Body Extraction
//!
//! [`JsonBody`] parses the body as JSON only when the request says it is
//! JSON. Any other request (no `Content-Type`, a form, plain text, an
//! empty body) is read as `{}`, so every optional field comes out empty
//! instead of the request being refused.
//!
//! Use it behind `WithRejection<JsonBody<T>, AppError>` so that malformed
//! JSON still reaches the client in the error envelope.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};
use serde::de::DeserializeOwned;

const EMPTY_OBJECT: &[u8] = b"{}";

/// JSON body, or `{}` when the request carries none
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;

        let body: &[u8] = if is_json && !bytes.is_empty() {
            &bytes
        } else {
            EMPTY_OBJECT
        };

        let Json(value) = Json::<T>::from_bytes(body)?;
        Ok(Self(value))
    }
}

/// `application/json` and `application/*+json`, parameters ignored
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Form {
        name: Option<String>,
    }

    async fn extract(
        content_type: Option<&str>,
        body: &'static str,
    ) -> Result<Form, JsonRejection> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body)).unwrap();

        JsonBody::<Form>::from_request(req, &()).await.map(|JsonBody(form)| form)
    }

    #[tokio::test]
    async fn test_json_body_is_parsed() {
        let form = extract(Some("application/json"), r#"{"name":"A"}"#)
            .await
            .unwrap();
        assert_eq!(form.name.as_deref(), Some("A"));

        let form = extract(Some("application/json; charset=utf-8"), r#"{"name":"B"}"#)
            .await
            .unwrap();
        assert_eq!(form.name.as_deref(), Some("B"));
    }

    #[tokio::test]
    async fn test_missing_content_type_reads_as_empty_object() {
        let form = extract(None, r#"{"name":"A"}"#).await.unwrap();
        assert_eq!(form, Form { name: None });
    }

    #[tokio::test]
    async fn test_foreign_content_type_reads_as_empty_object() {
        let form = extract(Some("text/plain"), "name=A").await.unwrap();
        assert_eq!(form, Form { name: None });

        let form = extract(Some("application/x-www-form-urlencoded"), "name=A")
            .await
            .unwrap();
        assert_eq!(form, Form { name: None });
    }

    #[tokio::test]
    async fn test_empty_json_body_reads_as_empty_object() {
        let form = extract(Some("application/json"), "").await.unwrap();
        assert_eq!(form, Form { name: None });
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let rejection = extract(Some("application/json"), "{oops").await.unwrap_err();
        assert_eq!(rejection.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_content_type_matching() {
        let with = |value: &str| {
            let mut headers = HeaderMap::new();
            headers.insert(header::CONTENT_TYPE, value.parse().unwrap());
            is_json_content_type(&headers)
        };

        assert!(with("application/json"));
        assert!(with("Application/JSON; charset=utf-8"));
        assert!(with("application/vnd.api+json"));
        assert!(!with("text/json"));
        assert!(!with("text/plain"));
        assert!(!is_json_content_type(&HeaderMap::new()));
    }
}
