//! Endpoint handlers.
//!
//! Every collection shares the same four handlers, instantiated per record
//! type. Storage calls are blocking file I/O and run on the blocking pool.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::error::{noun, Action, ApiError};
use crate::content::{ContactInfo, Resource};
use crate::error::{Error, Result};
use crate::storage::{JsonCollection, JsonDocument};

const CONTACT_NOUN: &str = "contact info";

/// Query string of a DELETE request.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct IdQuery {
    id: Option<String>,
}

/// Run a storage call on the blocking pool.
async fn blocking<R, F>(f: F) -> Result<R>
where
    F: FnOnce() -> Result<R> + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::internal(format!("storage task failed: {e}")))?
}

/// Request body as received, or why axum refused to buffer it.
type RawBody = std::result::Result<Bytes, BytesRejection>;

fn parse_body<B: DeserializeOwned>(body: RawBody) -> std::result::Result<B, ApiError> {
    serde_json::from_slice(&body?)
        .map_err(|e| ApiError::bad_request(format!("Invalid request body: {e}")))
}

/// `GET`: the whole collection.
pub(crate) async fn list<T: Resource>(
    State(collection): State<Arc<JsonCollection<T>>>,
) -> std::result::Result<Json<Vec<T>>, ApiError> {
    let records = blocking(move || collection.list())
        .await
        .map_err(|e| ApiError::from_error(e, Action::Fetch, T::PLURAL))?;
    Ok(Json(records))
}

/// `POST`: append a record with a server-assigned id.
pub(crate) async fn create<T: Resource>(
    State(collection): State<Arc<JsonCollection<T>>>,
    body: RawBody,
) -> std::result::Result<(StatusCode, Json<T>), ApiError> {
    let draft: T = parse_body(body)?;
    let created = blocking(move || collection.create(draft))
        .await
        .map_err(|e| ApiError::from_error(e, Action::Create, &noun(T::LABEL)))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT`: update the record named by the body's `id`.
pub(crate) async fn update<T: Resource>(
    State(collection): State<Arc<JsonCollection<T>>>,
    body: RawBody,
) -> std::result::Result<Json<T>, ApiError> {
    let patch: Map<String, Value> = parse_body(body)?;
    let updated = blocking(move || collection.update(patch))
        .await
        .map_err(|e| ApiError::from_error(e, Action::Update, &noun(T::LABEL)))?;
    Ok(Json(updated))
}

/// `DELETE ?id=`: remove one record.
pub(crate) async fn remove<T: Resource>(
    State(collection): State<Arc<JsonCollection<T>>>,
    query: std::result::Result<Query<IdQuery>, QueryRejection>,
) -> std::result::Result<Json<Value>, ApiError> {
    let Query(query) = query?;
    let id = match query.id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ApiError::bad_request("ID parameter required")),
    };

    blocking(move || collection.delete(&id))
        .await
        .map_err(|e| ApiError::from_error(e, Action::Delete, &noun(T::LABEL)))?;
    Ok(Json(json!({
        "message": format!("{} deleted successfully", T::LABEL)
    })))
}

/// `GET /contact`.
pub(crate) async fn get_contact(
    State(document): State<Arc<JsonDocument<ContactInfo>>>,
) -> std::result::Result<Json<ContactInfo>, ApiError> {
    match blocking(move || document.load()).await {
        Ok(Some(info)) => Ok(Json(info)),
        Ok(None) => Err(ApiError::not_found("Contact info not found")),
        Err(e) => Err(ApiError::from_error(e, Action::Fetch, CONTACT_NOUN)),
    }
}

/// `PUT /contact`: overwrite the stored object and echo it back.
pub(crate) async fn put_contact(
    State(document): State<Arc<JsonDocument<ContactInfo>>>,
    body: RawBody,
) -> std::result::Result<Json<ContactInfo>, ApiError> {
    let info: ContactInfo = parse_body(body)?;
    let saved = info.clone();
    blocking(move || document.save(&saved))
        .await
        .map_err(|e| ApiError::from_error(e, Action::Update, CONTACT_NOUN))?;
    Ok(Json(info))
}

/// `GET /healthz`.
pub(crate) async fn healthz() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Fallback for unknown paths.
pub(crate) async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
