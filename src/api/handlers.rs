//! HTTP request handlers
//!
//! Every creating endpoint hands out a fresh v4 UUID and logs one line;
//! nothing is stored, so repeated identical requests always produce new
//! identifiers and actions succeed against run ids that were never created.

use crate::api::models::{
    ActionData, CreateRunRequest, CreateRunResponse, ErrorResponse, HealthResponse, ProtocolData,
    RunActionRequest, RunActionResponse, RunData, UploadProtocolResponse,
};
use crate::error::AppError;
use crate::AppState;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, State};
use axum::Json;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// File name logged when an uploaded part carries none
const DEFAULT_PROTOCOL_NAME: &str = "protocol.py";

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        robot_server: state.settings.server.name.clone(),
        api: state.settings.server.api_version.clone(),
    })
}

/// Accept a protocol file upload and assign it a synthetic identifier
///
/// The file content is treated as an opaque blob and discarded; only the
/// presence of a file part matters.
#[utoipa::path(
    post,
    path = "/protocols",
    responses(
        (status = 200, description = "Protocol accepted", body = UploadProtocolResponse),
        (status = 400, description = "No file part in the form", body = ErrorResponse)
    ),
    tag = "Protocols"
)]
pub async fn upload_protocol(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadProtocolResponse>, AppError> {
    // A non-multipart body carries no file at all; report the missing upload
    // rather than surfacing the extractor's plain-text rejection.
    let mut multipart = multipart.map_err(|_| AppError::MissingUpload)?;

    // Take the first part that is a file upload; bare text fields don't count.
    let mut uploaded: Option<(String, usize)> = None;
    while let Some(field) = multipart.next_field().await? {
        let Some(raw_name) = field.file_name() else {
            continue;
        };
        let name = if raw_name.is_empty() {
            DEFAULT_PROTOCOL_NAME.to_string()
        } else {
            raw_name.to_string()
        };
        let size = field.bytes().await?.len();
        uploaded = Some((name, size));
        break;
    }

    let (file_name, size) = uploaded.ok_or(AppError::MissingUpload)?;

    let id = Uuid::new_v4().to_string();
    info!(file = %file_name, bytes = size, id = %id, "received protocol");

    Ok(Json(UploadProtocolResponse {
        data: ProtocolData { id },
    }))
}

/// Create a run from a previously uploaded protocol
///
/// The protocol id is echoed back without being checked against anything;
/// the run itself is never tracked after this response.
#[utoipa::path(
    post,
    path = "/runs",
    request_body = CreateRunRequest,
    responses(
        (status = 200, description = "Run created", body = CreateRunResponse),
        (status = 400, description = "protocolId missing", body = ErrorResponse)
    ),
    tag = "Runs"
)]
pub async fn create_run(
    Json(request): Json<CreateRunRequest>,
) -> Result<Json<CreateRunResponse>, AppError> {
    // An empty id counts as missing, same as no id at all.
    let protocol_id = request
        .data
        .and_then(|d| d.protocol_id)
        .filter(|id| !id.is_empty())
        .ok_or(AppError::MissingProtocolId)?;

    let run_id = Uuid::new_v4().to_string();
    info!(run_id = %run_id, protocol_id = %protocol_id, "created run");

    Ok(Json(CreateRunResponse {
        data: RunData {
            id: run_id,
            protocol_id,
        },
    }))
}

/// Record a control action (play/pause/stop) against a run
///
/// Neither the run id nor the action type is validated, so an action posted
/// against a run that was never created still succeeds.
#[utoipa::path(
    post,
    path = "/runs/{id}/actions",
    request_body = RunActionRequest,
    params(
        ("id" = String, Path, description = "Run identifier (not checked for existence)")
    ),
    responses(
        (status = 200, description = "Action recorded", body = RunActionResponse)
    ),
    tag = "Runs"
)]
pub async fn run_action(
    Path(id): Path<String>,
    Json(request): Json<RunActionRequest>,
) -> Json<RunActionResponse> {
    let action_type = request.data.and_then(|d| d.action_type);

    let action_id = Uuid::new_v4().to_string();
    info!(
        run_id = %id,
        action = action_type.as_deref().unwrap_or("<none>"),
        action_id = %action_id,
        "run action"
    );

    Json(RunActionResponse {
        data: ActionData {
            id: action_id,
            action_type,
        },
    })
}
