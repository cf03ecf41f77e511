//! HTTP front end for the items store.
//!
//! `/items` lists and creates, `/items/{id}` reads, replaces and deletes.
//! Everything after `/items/` is taken as the id and parsed before the method
//! is looked at, so `/items/1/2` or `POST /items/abc` are 400s. Bodies are
//! decoded by hand from the raw bytes so that any malformed body is a 400
//! carrying the decoder's message, whatever the content type.

pub mod config;
pub mod error;

use std::{future::Future, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use items_core::{Item, ItemId, ItemStore};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

/// The store shared by all handlers. Each operation holds the lock for its
/// whole scan-and-mutate.
pub type Db = Arc<RwLock<ItemStore>>;

/// Router over a fresh, empty store.
pub fn app() -> Router {
    router(Db::default())
}

/// Router over an existing store, so callers can inspect it after requests.
pub fn router(db: Db) -> Router {
    Router::new()
        .route(
            "/items",
            // axum answers HEAD with the GET handler unless HEAD has its own.
            get(list_items)
                .head(method_not_allowed)
                .post(create_item)
                .fallback(method_not_allowed),
        )
        .route("/items/", any(missing_id))
        .route("/items/{*id}", any(item_by_id))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve until `shutdown` resolves, then let in-flight requests finish.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}

fn parse_id(raw: &str) -> Result<ItemId, ApiError> {
    if raw.is_empty() {
        return Err(ApiError::MissingId);
    }
    raw.parse().map_err(|source| ApiError::InvalidId {
        raw: raw.to_string(),
        source,
    })
}

fn decode_item(body: &[u8]) -> Result<Item, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let store = db.read().await;
    Json(store.list().to_vec())
}

async fn create_item(
    State(db): State<Db>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let payload = decode_item(&body)?;
    let item = db.write().await.create(payload);
    tracing::debug!(item_id = item.id, name = %item.name, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Single entry point for `/items/{id}`. The id is parsed first, then the
/// method picks the operation.
async fn item_by_id(
    method: Method,
    State(db): State<Db>,
    Path(raw): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let id = parse_id(&raw)?;
    match method {
        Method::GET => get_item(&db, id).await.map(IntoResponse::into_response),
        Method::PUT => update_item(&db, id, &body)
            .await
            .map(IntoResponse::into_response),
        Method::DELETE => delete_item(&db, id)
            .await
            .map(IntoResponse::into_response),
        _ => Err(ApiError::MethodNotAllowed),
    }
}

async fn get_item(db: &Db, id: ItemId) -> Result<Json<Item>, ApiError> {
    let store = db.read().await;
    Ok(Json(store.get(id)?.clone()))
}

async fn update_item(db: &Db, id: ItemId, body: &[u8]) -> Result<Json<Item>, ApiError> {
    let replacement = decode_item(body)?;
    let mut store = db.write().await;
    let item = store.update(id, replacement)?.clone();
    tracing::debug!(item_id = id, stored_id = item.id, name = %item.name, "item replaced");
    Ok(Json(item))
}

async fn delete_item(db: &Db, id: ItemId) -> Result<StatusCode, ApiError> {
    let removed = db.write().await.delete(id)?;
    tracing::debug!(item_id = removed.id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn missing_id() -> ApiError {
    ApiError::MissingId
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_signed_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-3").unwrap(), -3);
        assert_eq!(parse_id("+7").unwrap(), 7);
    }

    #[test]
    fn parse_id_rejects_non_integers() {
        for raw in ["abc", "1.5", " 1", "1/2", "abc/", "99999999999999999999"] {
            assert!(
                matches!(parse_id(raw), Err(ApiError::InvalidId { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_id_reports_empty_segment_as_missing() {
        assert!(matches!(parse_id(""), Err(ApiError::MissingId)));
    }

    #[test]
    fn decode_item_defaults_missing_id() {
        let item = decode_item(br#"{"name":"foo"}"#).unwrap();
        assert_eq!(item, Item::new(0, "foo"));
    }

    #[test]
    fn decode_item_rejects_garbage() {
        assert!(matches!(
            decode_item(b"not json"),
            Err(ApiError::InvalidBody(_))
        ));
    }
}
