//! Custom Axum extractors
//!
//! Each extractor owns its rejection so handlers never see axum's
//! default plain-text rejections.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde_json::Value;

use super::error::ApiError;
use crate::models::{Page, QuestionsRequest, QuizRequest};

/// Integer id from the path. Anything else is an unknown route (404).
pub struct IdParam(pub i32);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found_id("path"))?;

        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| not_found_id(&raw))
    }
}

fn not_found_id(raw: &str) -> ApiError {
    ApiError::NotFound {
        resource: "route",
        id: raw.to_owned(),
    }
}

/// Requested page from the query string. Never rejects.
///
/// The first `page` value wins when the key repeats; a missing or
/// unparsable value means page 1.
pub struct PageQuery(pub Page);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        let raw = pairs
            .iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.as_str());

        Ok(Self(Page::from_query(raw)))
    }
}

/// Validated `POST /questions` body. Any failure is a 400.
pub struct QuestionsBody(pub QuestionsRequest);

impl<S> FromRequest<S> for QuestionsBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = json_value(req, state).await.map_err(ApiError::bad_request)?;
        Ok(Self(QuestionsRequest::from_value(value)?))
    }
}

/// Validated `POST /quiz` body. An absent body, malformed JSON, or a
/// missing category is a 422.
pub struct QuizBody(pub QuizRequest);

impl<S> FromRequest<S> for QuizBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = json_value(req, state)
            .await
            .map_err(ApiError::unprocessable)?;
        QuizRequest::from_value(value)
            .map(Self)
            .map_err(ApiError::unprocessable)
    }
}

/// Read the body as JSON. An empty body reads as `null`.
async fn json_value<S>(req: Request, state: &S) -> Result<Value, String>
where
    S: Send + Sync,
{
    let bytes = Bytes::from_request(req, state)
        .await
        .map_err(|e| e.body_text())?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(&bytes).map_err(|e| format!("invalid JSON body: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;

    fn post(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn page_of(uri: &'static str) -> Page {
        let (mut parts, _) = axum::http::Request::builder()
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts();
        match PageQuery::from_request_parts(&mut parts, &()).await {
            Ok(PageQuery(page)) => page,
            Err(never) => match never {},
        }
    }

    #[tokio::test]
    async fn page_query_takes_first_value() {
        assert_eq!(page_of("/questions?page=2&page=5").await, Page::new(2));
    }

    #[tokio::test]
    async fn page_query_is_lenient() {
        assert_eq!(page_of("/questions").await, Page::new(1));
        assert_eq!(page_of("/questions?page=abc").await, Page::new(1));
        assert_eq!(page_of("/questions?other=3").await, Page::new(1));
        assert_eq!(page_of("/questions?page=%ZZ").await, Page::new(1));
        assert_eq!(page_of("/questions?page=3").await, Page::new(3));
    }

    #[tokio::test]
    async fn quiz_body_empty_is_422() {
        let err = QuizBody::from_request(post(""), &()).await.err().unwrap();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn quiz_body_malformed_is_422() {
        let err = QuizBody::from_request(post("{not json"), &()).await.err().unwrap();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn quiz_body_parses() {
        let QuizBody(req) = QuizBody::from_request(post(r#"{"category": 2}"#), &())
            .await
            .ok()
            .unwrap();
        assert_eq!(req.category, 2);
    }

    #[tokio::test]
    async fn questions_body_malformed_is_400() {
        let err = QuestionsBody::from_request(post("[1,"), &()).await.err().unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn questions_body_empty_is_400() {
        let err = QuestionsBody::from_request(post(""), &()).await.err().unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
