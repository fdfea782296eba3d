use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::domain::DriverId;
use super::filter::DriverListParams;
use super::repository::DriverRepository;
use super::service::{DriverAdminService, DriverServiceError};

/// Body accepted by the reject endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RejectRequest {
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

impl RejectRequest {
    /// Read the reject body. Only an empty body stands for "no reason supplied"; anything
    /// else must be JSON that parses, so a typed reason is never silently dropped.
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> Result<Self, RejectBodyError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if !is_json_content_type(content_type) {
            return Err(RejectBodyError::UnsupportedContentType(
                content_type.to_string(),
            ));
        }

        serde_json::from_slice(body).map_err(RejectBodyError::Malformed)
    }
}

/// Reject body that could not be read; the driver is left untouched.
#[derive(Debug, thiserror::Error)]
pub enum RejectBodyError {
    #[error("expected an application/json body, got `{0}`")]
    UnsupportedContentType(String),
    #[error("malformed reject body: {0}")]
    Malformed(#[source] serde_json::Error),
}

impl IntoResponse for RejectBodyError {
    fn into_response(self) -> Response {
        let status = match &self {
            RejectBodyError::UnsupportedContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RejectBodyError::Malformed(_) => StatusCode::BAD_REQUEST,
        };
        (status, axum::Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn is_json_content_type(value: &str) -> bool {
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Router builder exposing the driver listing and approval endpoints.
pub fn driver_router<R>(service: Arc<DriverAdminService<R>>) -> Router
where
    R: DriverRepository + 'static,
{
    Router::new()
        .route("/api/v1/admin/drivers", get(list_handler::<R>))
        .route("/api/v1/admin/drivers/pending", get(pending_handler::<R>))
        .route("/api/v1/admin/drivers/:driver_id", get(show_handler::<R>))
        .route(
            "/api/v1/admin/drivers/:driver_id/approve",
            post(approve_handler::<R>),
        )
        .route(
            "/api/v1/admin/drivers/:driver_id/reject",
            post(reject_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<DriverAdminService<R>>>,
    Query(params): Query<DriverListParams>,
) -> Response
where
    R: DriverRepository + 'static,
{
    match service.list(&params) {
        Ok(listing) => (StatusCode::OK, axum::Json(listing)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn pending_handler<R>(
    State(service): State<Arc<DriverAdminService<R>>>,
    Query(params): Query<DriverListParams>,
) -> Response
where
    R: DriverRepository + 'static,
{
    match service.pending(&params) {
        Ok(listing) => (StatusCode::OK, axum::Json(listing)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn show_handler<R>(
    State(service): State<Arc<DriverAdminService<R>>>,
    Path(driver_id): Path<u64>,
) -> Response
where
    R: DriverRepository + 'static,
{
    match service.get(&DriverId(driver_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn approve_handler<R>(
    State(service): State<Arc<DriverAdminService<R>>>,
    Path(driver_id): Path<u64>,
) -> Response
where
    R: DriverRepository + 'static,
{
    match service.approve(&DriverId(driver_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn reject_handler<R>(
    State(service): State<Arc<DriverAdminService<R>>>,
    Path(driver_id): Path<u64>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    R: DriverRepository + 'static,
{
    let request = match RejectRequest::from_body(&headers, &body) {
        Ok(request) => request,
        Err(err) => {
            warn!(driver_id, error = %err, "reject body refused");
            return err.into_response();
        }
    };
    let reason = request
        .rejection_reason
        .unwrap_or_else(|| service.default_rejection_reason().to_string());

    match service.reject(&DriverId(driver_id), &reason) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(error: DriverServiceError) -> Response {
    let status = match &error {
        DriverServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DriverServiceError::Conflict { .. } => StatusCode::CONFLICT,
        DriverServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        DriverServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let mut payload = json!({
        "error": error.to_string(),
    });
    if let DriverServiceError::Conflict { current, .. } = &error {
        payload["status"] = json!(current.label());
    }

    (status, axum::Json(payload)).into_response()
}
