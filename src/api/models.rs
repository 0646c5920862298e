//! API request and response models
//!
//! Wire shapes mirror the real device API: creating endpoints wrap their
//! payloads in a `data` envelope, and identifiers are v4 UUID strings.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok"
    pub status: String,

    /// Server identifier ("mock")
    #[serde(rename = "robotServer")]
    pub robot_server: String,

    /// Control API version ("v2")
    pub api: String,
}

/// Identifier assigned to an uploaded protocol
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProtocolData {
    pub id: String,
}

/// Response for a protocol upload
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UploadProtocolResponse {
    pub data: ProtocolData,
}

/// Run creation request envelope
///
/// Both the envelope and the protocol id are optional on the wire; the
/// handler rejects the request when either is missing.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateRunRequest {
    #[serde(default)]
    pub data: Option<CreateRunPayload>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateRunPayload {
    #[serde(rename = "protocolId", default)]
    pub protocol_id: Option<String>,
}

/// Identifier for a created run, echoing the source protocol id
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RunData {
    pub id: String,

    #[serde(rename = "protocolId")]
    pub protocol_id: String,
}

/// Response for run creation
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateRunResponse {
    pub data: RunData,
}

/// Run action request envelope
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RunActionRequest {
    #[serde(default)]
    pub data: Option<RunActionPayload>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RunActionPayload {
    /// Control command such as "play", "pause", or "stop"; never validated
    #[serde(rename = "actionType", default)]
    pub action_type: Option<String>,
}

/// Identifier for a recorded action, echoing the action type
///
/// The field is dropped from the response when the request carried none.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ActionData {
    pub id: String,

    #[serde(rename = "actionType", skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
}

/// Response for a run action
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RunActionResponse {
    pub data: ActionData,
}

/// Error payload for rejected requests
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
