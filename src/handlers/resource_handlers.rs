//! Generic CRUD handlers shared by all three resources.
//!
//! The router instantiates each handler per entity; the entity's
//! [`Resource`] impl supplies the table layout and the response wording.
//! Every failure is converted to a JSON response at this boundary; nothing
//! propagates further and nothing is retried.

use crate::{
    errors::ApiError,
    services::{
        store::{Resource, Store, StoreError},
        upload::UPLOAD_FIELD,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Log a failure and wrap it as a 500 carrying the raw fault.
fn internal(context: &'static str, err: impl std::fmt::Display) -> ApiError {
    tracing::error!("{context}: {err}");
    ApiError::internal(context, err)
}

/// Map a store fault to the resource's 404 or a 500.
fn store_error<R: Resource>(err: StoreError, context: &'static str) -> ApiError {
    match err {
        StoreError::NotFound => ApiError::not_found(R::NOT_FOUND_MSG),
        other => internal(context, other),
    }
}

/// GET `/` — all records; an empty array is a successful result.
pub async fn list<R: Resource>(State(state): State<AppState>) -> Result<Json<Vec<R>>, ApiError> {
    let records = Store::<R>::new(state.db.clone())
        .list()
        .await
        .map_err(|err| internal(R::LIST_ERR, err))?;

    Ok(Json(records))
}

/// POST `/` for JSON-bodied resources.
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Json(fields): Json<R::Fields>,
) -> Result<Json<R>, ApiError> {
    let record = Store::<R>::new(state.db.clone())
        .create(&fields)
        .await
        .map_err(|err| internal(R::CREATE_ERR, err))?;

    Ok(Json(record))
}

/// POST `/` for resources that take an optional image: multipart text
/// fields plus at most one file under `img`. No file attached is a valid
/// outcome and leaves `img` null.
pub async fn create_with_upload<R: Resource>(
    State(state): State<AppState>,
    mut parts: Multipart,
) -> Result<Json<R>, ApiError> {
    let mut form = HashMap::new();
    let mut img = None;

    while let Some(field) = parts
        .next_field()
        .await
        .map_err(|err| internal(R::CREATE_ERR, err))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == UPLOAD_FIELD && field.file_name().is_some() {
            let path = state
                .uploads
                .save(field)
                .await
                .map_err(|err| internal(R::CREATE_ERR, err))?;
            img = Some(path);
        } else {
            let value = field
                .text()
                .await
                .map_err(|err| internal(R::CREATE_ERR, err))?;
            form.insert(name, value);
        }
    }

    let fields = R::fields_from_form(&mut form, img);
    let record = Store::<R>::new(state.db.clone())
        .create(&fields)
        .await
        .map_err(|err| internal(R::CREATE_ERR, err))?;

    Ok(Json(record))
}

/// PUT `/{id}` — full-field overwrite. `img` here is an already-stored
/// path, never a re-upload.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(fields): Json<R::Fields>,
) -> Result<Json<R>, ApiError> {
    let record = Store::<R>::new(state.db.clone())
        .update(id, &fields)
        .await
        .map_err(|err| store_error::<R>(err, R::UPDATE_ERR))?;

    Ok(Json(record))
}

/// DELETE `/{id}` — absence is reported as 404, not silent success.
pub async fn remove<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Store::<R>::new(state.db.clone())
        .delete(id)
        .await
        .map_err(|err| store_error::<R>(err, R::DELETE_ERR))?;

    Ok(Json(json!({ "message": R::REMOVED_MSG })))
}
