//! Submission, live form feedback and catalog CRUD.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use provet_catalog::ProductStatus;
use provet_core::ProductId;
use provet_pipeline::{SubmissionOutcome, SubmitError, quote};
use provet_store::ProductStore;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(submit_product).get(list_products))
        .route("/quote", post(quote_product))
        .route("/duplicate-check", post(duplicate_check))
        .route("/:id", get(get_product).delete(delete_product))
        .route("/:id/status", post(update_status))
}

/// Run the full submission pipeline.
pub async fn submit_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SubmitProductRequest>,
) -> axum::response::Response {
    let draft = match body.draft.into_draft() {
        Ok(draft) => draft,
        Err(msg) => return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
    };

    match services
        .orchestrator
        .submit(draft, body.override_similar)
        .await
    {
        Ok(SubmissionOutcome::Persisted(record)) => {
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Ok(SubmissionOutcome::BlockedExactDuplicate(existing)) => (
            StatusCode::CONFLICT,
            Json(json!({
                "error": "duplicate",
                "kind": "exact",
                "existing": existing,
            })),
        )
            .into_response(),
        Ok(SubmissionOutcome::BlockedSimilarPending(existing)) => (
            StatusCode::CONFLICT,
            Json(json!({
                "error": "duplicate",
                "kind": "similar",
                "existing": existing,
                "message": "resubmit with override_similar=true to proceed",
            })),
        )
            .into_response(),
        Ok(SubmissionOutcome::BlockedValidationFailed(validation)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "validation_failed",
                "reasons": validation.reasons,
                "checks": validation.checks,
            })),
        )
            .into_response(),
        Err(SubmitError::Domain(e)) => errors::domain_error_to_response(e),
        Err(SubmitError::Persistence(msg)) => {
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "persistence_error", msg)
        }
    }
}

/// Live recomputation for the submission form: pricing, shipping window and
/// admission checks for the draft as currently entered. Pure; no record is
/// created or mutated.
pub async fn quote_product(
    Json(body): Json<dto::ProductDraftRequest>,
) -> axum::response::Response {
    match body.into_draft() {
        Ok(draft) => (StatusCode::OK, Json(quote(&draft))).into_response(),
        Err(msg) => errors::json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
    }
}

/// Live duplicate feedback while the URL/name fields are edited.
pub async fn duplicate_check(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::DuplicateCheckRequest>,
) -> axum::response::Response {
    let verdict = services
        .orchestrator
        .check_duplicate(&body.source_url, &body.name);
    (StatusCode::OK, Json(verdict)).into_response()
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListProductsQuery>,
) -> axum::response::Response {
    let filter = match query.status.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<ProductStatus>() {
            Ok(status) => Some(status),
            Err(e) => return errors::domain_error_to_response(e),
        },
    };

    match services.store.list(filter) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.store.get(id) {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Manual lifecycle transition (kanban approve/reject/send-back-to-review).
pub async fn update_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateStatusRequest>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let status: ProductStatus = match body.status.parse() {
        Ok(status) => status,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.store.update_status(id, status) {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"id": id.to_string(), "status": status.as_str()})),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.store.delete(id) {
        Ok(()) => (StatusCode::OK, Json(json!({"deleted": id.to_string()}))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
