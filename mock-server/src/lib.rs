use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put, trace};
use axum::{extract::Query, http::StatusCode, Json, Router};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

#[derive(Debug, Deserialize)]
pub struct HelloQuery {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FullNameQuery {
    pub first: Option<String>,
    pub last: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostPayload {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PutPayload {
    pub update: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/get", get(get_ok).options(options_ok))
        .route("/get_hello", get(get_hello))
        .route("/get_full", get(get_full))
        .route("/post", post(post_hello))
        .route("/empty_post_response", post(empty_post_response))
        .route("/put", put(put_update))
        .route("/delete", delete(delete_ok))
        .route("/trace", trace(trace_echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_ok() -> Json<serde_json::Value> {
    Json(json!({ "get": "ok" }))
}

async fn options_ok() -> StatusCode {
    StatusCode::OK
}

async fn get_hello(Query(query): Query<HelloQuery>) -> Json<serde_json::Value> {
    Json(json!({ "hello": query.name }))
}

async fn get_full(Query(query): Query<FullNameQuery>) -> Json<serde_json::Value> {
    Json(json!({ "first": query.first, "last": query.last }))
}

async fn post_hello(Json(payload): Json<PostPayload>) -> Json<serde_json::Value> {
    Json(json!({ "hello": payload.name }))
}

async fn empty_post_response() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn put_update(Json(payload): Json<PutPayload>) -> Json<serde_json::Value> {
    Json(json!({ "update": payload.update }))
}

async fn delete_ok() -> StatusCode {
    StatusCode::OK
}

async fn trace_echo(body: String) -> Response {
    ([(header::CONTENT_TYPE, "message/http")], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_query_name_is_optional() {
        let query: HelloQuery = serde_json::from_str(r#"{}"#).unwrap();
        assert!(query.name.is_none());

        let query: HelloQuery = serde_json::from_str(r#"{"name":"test"}"#).unwrap();
        assert_eq!(query.name.as_deref(), Some("test"));
    }

    #[test]
    fn full_name_query_fields_are_optional() {
        let query: FullNameQuery = serde_json::from_str(r#"{"first":"simple"}"#).unwrap();
        assert_eq!(query.first.as_deref(), Some("simple"));
        assert!(query.last.is_none());
    }

    #[test]
    fn post_payload_requires_name() {
        let payload: PostPayload = serde_json::from_str(r#"{"name":"test"}"#).unwrap();
        assert_eq!(payload.name, "test");

        let missing: Result<PostPayload, _> = serde_json::from_str(r#"{}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn put_payload_requires_update() {
        let payload: PutPayload = serde_json::from_str(r#"{"update":"test"}"#).unwrap();
        assert_eq!(payload.update, "test");

        let missing: Result<PutPayload, _> = serde_json::from_str(r#"{"title":"x"}"#);
        assert!(missing.is_err());
    }
}
