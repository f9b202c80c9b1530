use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use common::types::ApiResponse;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateKeyValueInput {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateKeyValueInput {
    pub value: String,
}

#[utoipa::path(
    get, path = "/api/keys/{key}", tag = "keys",
    params(("key" = String, Path, description = "Record key")),
    responses(
        (status = 200, description = "Record found"),
        (status = 404, description = "Key does not exist")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<models::key_value::Model>>, JsonApiError> {
    let record = state.kv.get(&key).await?;
    Ok(Json(ApiResponse::success(
        StatusCode::OK.as_u16(),
        "Key-Value retrieved successfully.",
        record,
    )))
}

#[utoipa::path(
    post, path = "/api/keys", tag = "keys",
    request_body = crate::openapi::CreateKeyValueInputDoc,
    responses(
        (status = 200, description = "Record created"),
        (status = 409, description = "Key already exists")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateKeyValueInput>,
) -> Result<Json<ApiResponse<models::key_value::Model>>, JsonApiError> {
    let record = state.kv.create(&input.key, &input.value).await?;
    Ok(Json(ApiResponse::success(
        StatusCode::OK.as_u16(),
        "Key-Value added successfully.",
        record,
    )))
}

// The new value travels in the body rather than a path segment, so values
// containing structural characters need no escaping.
#[utoipa::path(
    patch, path = "/api/keys/{key}", tag = "keys",
    params(("key" = String, Path, description = "Record key")),
    request_body = crate::openapi::UpdateKeyValueInputDoc,
    responses(
        (status = 200, description = "Value updated"),
        (status = 404, description = "Key does not exist")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(key): Path<String>,
    Json(input): Json<UpdateKeyValueInput>,
) -> Result<Json<ApiResponse<models::key_value::Model>>, JsonApiError> {
    let record = state.kv.update(&key, &input.value).await?;
    Ok(Json(ApiResponse::success(
        StatusCode::OK.as_u16(),
        "Value updated successfully.",
        record,
    )))
}
