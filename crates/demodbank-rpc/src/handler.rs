//! JSON-RPC request handlers.

use crate::server::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use demodbank_core::MonitorError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error};

/// JSON-RPC 2.0 request structure.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 error structure.
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
                data: None,
            }),
            id,
        }
    }
}

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Main JSON-RPC handler.
pub async fn handle_rpc(
    State(state): State<Arc<AppState>>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    let method = &request.method;
    let params = request.params.unwrap_or(Value::Object(Default::default()));
    let id = request.id.clone();

    debug!("RPC call: {}({:?})", method, params);

    // Handle built-in methods
    if method == "health_check" {
        return (
            StatusCode::OK,
            Json(JsonRpcResponse::success(id, json!({"status": "ok"}))),
        );
    }

    match dispatch_method(&state, method, &params).await {
        Ok(value) => (StatusCode::OK, Json(JsonRpcResponse::success(id, value))),
        Err(e) => {
            error!("RPC error for {}: {}", method, e);
            let code = e.to_rpc_error_code();
            (
                StatusCode::OK,
                Json(JsonRpcResponse::error(id, code, e.to_string())),
            )
        }
    }
}

/// Extract a required u64 parameter or return InvalidParams.
fn require_u64_param(params: &Value, name: &str) -> demodbank_core::Result<u64> {
    params
        .get(name)
        .and_then(|v| v.as_u64())
        .ok_or_else(|| MonitorError::InvalidParams {
            message: format!("Missing required parameter: {}", name),
        })
}

/// Dispatch a method call to the appropriate service operation.
async fn dispatch_method(
    state: &AppState,
    method: &str,
    params: &Value,
) -> demodbank_core::Result<Value> {
    match method {
        "get_info" => {
            let info = state.service.get_info();
            Ok(serde_json::to_value(info)?)
        }

        "list_channels" => {
            let handles = state.service.list_channels();
            let mut list = Vec::with_capacity(handles.len());
            for handle in handles {
                let index = handle.index();
                let id = state.handles.register(handle).await;
                list.push(json!({"handle": id, "index": index}));
            }
            Ok(json!({"list": list}))
        }

        "channel_get_info" => {
            let id = require_u64_param(params, "handle")?;
            let handle = state
                .handles
                .get(id)
                .await
                .ok_or(MonitorError::StaleHandle { handle: id })?;
            let info = handle.get_info()?;
            Ok(serde_json::to_value(info)?)
        }

        "channel_get_all_infos" => {
            let infos = state.service.all_infos();
            Ok(json!({"channels": infos}))
        }

        "release_channels" => {
            let ids: Vec<u64> = params
                .get("handles")
                .cloned()
                .map(serde_json::from_value)
                .transpose()
                .map_err(|e| MonitorError::InvalidParams {
                    message: format!("handles must be an array of ids: {}", e),
                })?
                .ok_or_else(|| MonitorError::InvalidParams {
                    message: "Missing required parameter: handles".to_string(),
                })?;
            let released = state.handles.release(&ids).await;
            Ok(json!({"released": released}))
        }

        _ => Err(MonitorError::MethodNotFound(method.to_string())),
    }
}
