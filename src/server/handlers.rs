//! Request handlers for the tool directory API.
//!
//! Every mutation is one load-modify-save cycle over the full collection.
//! There is no locking between concurrent requests; two simultaneous
//! mutations can interleave at the storage layer and the last writer
//! wins. Accepted limitation, see the crate docs.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use tool_store::ToolStorageError;
use tooldir_auth::{AuthError, ADMIN_PASSWORD_HEADER};

use super::{error, AppState};
use crate::directory::{self, DirectoryError, NewTool, ToolUpdate};

fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), Response> {
    let presented = headers
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|v| v.to_str().ok());
    state.admin.verify(presented).map_err(|e| match e {
        AuthError::NotConfigured => {
            error!("Admin password is not configured, rejecting admin request");
            error::internal_error(
                "admin_password_not_configured",
                "Admin password is not configured on this server",
            )
        }
        AuthError::InvalidSecret => {
            error::unauthorized("invalid_admin_password", "Invalid admin password")
        }
    })
}

fn storage_error(err: ToolStorageError) -> Response {
    error!(error = %err, "Tool storage operation failed");
    error::internal_error("storage_failure", err.to_string())
}

fn directory_error(err: DirectoryError) -> Response {
    match err {
        DirectoryError::NotFound(id) => {
            error::not_found("tool_not_found", format!("Tool not found: {id}"))
        }
        DirectoryError::MissingField(field) => {
            error::bad_request("missing_field", format!("{field} is required"))
        }
        DirectoryError::InvalidOrder { requested, len } => error::bad_request(
            "invalid_order",
            format!("Order {requested} is out of range for {len} tools"),
        ),
    }
}

/// `GET /health`
pub async fn health() -> Response {
    Json(json!({"status": "ok"})).into_response()
}

/// `POST /api/auth` — verify the admin secret without mutating anything.
///
/// Lets the admin UI validate a password up front instead of discovering
/// a bad one on the first mutation.
pub async fn verify_admin(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    match require_admin(&state, &headers) {
        Ok(()) => Json(json!({"success": true})).into_response(),
        Err(resp) => resp,
    }
}

/// `GET /api/tools` — the full collection sorted by order ascending.
pub async fn list_tools(State(state): State<Arc<AppState>>) -> Response {
    let mut tools = match state.storage.load().await {
        Ok(tools) => tools,
        Err(e) => return storage_error(e),
    };
    tools.sort_by_key(|t| t.order);
    Json(tools).into_response()
}

/// `POST /api/tools` — append a new tool (admin).
pub async fn create_tool(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<NewTool>,
) -> Response {
    if let Err(resp) = require_admin(&state, &headers) {
        return resp;
    }

    let mut tools = match state.storage.load().await {
        Ok(tools) => tools,
        Err(e) => return storage_error(e),
    };

    let tool = match directory::insert_tool(&mut tools, body) {
        Ok(tool) => tool,
        Err(e) => return directory_error(e),
    };

    if let Err(e) = state.storage.save(&tools).await {
        return storage_error(e);
    }

    info!(id = %tool.id, order = tool.order, "Created tool");
    (StatusCode::CREATED, Json(tool)).into_response()
}

#[derive(Debug, Deserialize)]
pub struct UpdateToolRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub update: ToolUpdate,
}

/// `PUT /api/tools` — update fields and/or move a tool (admin).
///
/// A present `order` in the body moves the tool; other present fields
/// replace their current values.
pub async fn update_tool(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<UpdateToolRequest>,
) -> Response {
    if let Err(resp) = require_admin(&state, &headers) {
        return resp;
    }

    let Some(id) = body.id else {
        return error::bad_request("missing_id", "Tool ID is required");
    };

    let mut tools = match state.storage.load().await {
        Ok(tools) => tools,
        Err(e) => return storage_error(e),
    };

    let tool = match directory::update_tool(&mut tools, &id, body.update) {
        Ok(tool) => tool,
        Err(e) => return directory_error(e),
    };

    if let Err(e) = state.storage.save(&tools).await {
        return storage_error(e);
    }

    info!(id = %tool.id, order = tool.order, "Updated tool");
    Json(tool).into_response()
}

#[derive(Debug, Deserialize)]
pub struct DeleteToolParams {
    #[serde(default)]
    pub id: Option<String>,
}

/// `DELETE /api/tools?id=` — remove a tool (admin).
pub async fn delete_tool(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<DeleteToolParams>,
) -> Response {
    if let Err(resp) = require_admin(&state, &headers) {
        return resp;
    }

    let Some(id) = params.id else {
        return error::bad_request("missing_id", "Tool ID is required");
    };

    let mut tools = match state.storage.load().await {
        Ok(tools) => tools,
        Err(e) => return storage_error(e),
    };

    let removed = match directory::remove_tool(&mut tools, &id) {
        Ok(removed) => removed,
        Err(e) => return directory_error(e),
    };

    if let Err(e) = state.storage.save(&tools).await {
        return storage_error(e);
    }

    info!(id = %removed.id, "Deleted tool");
    Json(json!({"success": true})).into_response()
}
