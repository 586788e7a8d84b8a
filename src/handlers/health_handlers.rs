//! Health & readiness handlers.
//!
//! - GET /healthz  -> simple liveness ("ok")
//! - GET /readyz   -> readiness that checks the database and the upload dir

use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tokio::fs;
use uuid::Uuid;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct CheckStatus {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct ReadyResponse {
    status: &'static str,
    database: CheckStatus,
    uploads: CheckStatus,
}

/// `GET /healthz`
///
/// Cheap liveness probe; never performs I/O.
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}

/// `GET /readyz`
///
/// Runs `SELECT 1` against SQLite and a best-effort write/read/delete of a
/// probe file under the upload root. 200 when both pass, 503 otherwise.
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let database = match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&*state.db)
        .await
    {
        Ok(1) => CheckStatus {
            ok: true,
            error: None,
        },
        Ok(other) => CheckStatus {
            ok: false,
            error: Some(format!("unexpected result: {}", other)),
        },
        Err(err) => CheckStatus {
            ok: false,
            error: Some(err.to_string()),
        },
    };

    let uploads = match probe_upload_dir(&state).await {
        Ok(()) => CheckStatus {
            ok: true,
            error: None,
        },
        Err(err) => CheckStatus {
            ok: false,
            error: Some(err.to_string()),
        },
    };

    let ready = database.ok && uploads.ok;
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadyResponse {
            status: if ready { "ok" } else { "error" },
            database,
            uploads,
        }),
    )
}

/// Write, read back, and remove a probe file under the upload root.
async fn probe_upload_dir(state: &AppState) -> std::io::Result<()> {
    let path = state.uploads.root.join(format!(".readyz-{}", Uuid::new_v4()));

    fs::write(&path, b"readyz").await?;
    let bytes = fs::read(&path).await?;
    let _ = fs::remove_file(&path).await;

    if bytes != b"readyz" {
        return Err(std::io::Error::other("probe file content mismatch"));
    }
    Ok(())
}
