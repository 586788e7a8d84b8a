//! Route table for the adoption site API.
//!
//! ## Structure
//! - **Resource endpoints** — mounted by [`resource_routes`], four per
//!   resource:
//!   - `GET    /{recurso}` — list all records
//!   - `POST   /{recurso}` — create (multipart when the resource takes an
//!     image, JSON otherwise)
//!   - `PUT    /{recurso}/{id}` — full-field update
//!   - `DELETE /{recurso}/{id}` — remove
//! - `GET /uploads/{file}` — static retrieval of uploaded images
//! - `GET /healthz`, `GET /readyz` — probes
//!
//! The resource list below is the single routing table; adding a resource
//! means one `Resource` impl and one line here.

use crate::{
    handlers::{
        health_handlers::{healthz, readyz},
        resource_handlers::{create, create_with_upload, list, remove, update},
    },
    models::{donation::Donation, pet::Pet, volunteer::Volunteer},
    services::store::Resource,
    state::AppState,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, put},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// The four standard operations for one resource.
fn resource_routes<R: Resource>() -> Router<AppState> {
    let collection = if R::ACCEPTS_UPLOAD {
        get(list::<R>).post(create_with_upload::<R>)
    } else {
        get(list::<R>).post(create::<R>)
    };

    Router::new()
        .route("/", collection)
        .route("/{id}", put(update::<R>).delete(remove::<R>))
}

/// Build the full application router with middleware and state applied.
///
/// Shared by the binary and the integration tests so both exercise the
/// same stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest("/doacoes", resource_routes::<Donation>())
        .nest("/voluntarios", resource_routes::<Volunteer>())
        .nest("/pets", resource_routes::<Pet>())
        .nest_service("/uploads", ServeDir::new(&state.uploads.root))
        // uploads carry whole images; no request size cap
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
