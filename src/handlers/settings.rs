// src/handlers/settings.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{
    common::error::AppError,
    config::AppState,
    models::settings::{UpdateSettingsRequest, UserSettings},
};

// GET /api/settings
//
// Lazily creates the default row (hourlyRate 75, USD, monthlyGoal 6000) on
// first read. A missing demo user yields an empty object rather than an
// error, matching the rest of the read-side leniency.
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Settings",
    responses(
        (status = 200, description = "Settings for the demo user", body = UserSettings)
    )
)]
pub async fn get_settings(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = match app_state.user_repo.resolve_or_demo(None).await {
        Ok(id) => id,
        Err(AppError::UserNotFound) => {
            return Ok((StatusCode::OK, Json(json!({}))).into_response());
        }
        Err(e) => return Err(e),
    };

    let settings = app_state
        .settings_repo
        .get_or_create_defaults(user_id)
        .await?;

    Ok((StatusCode::OK, Json(settings)).into_response())
}

// POST /api/settings
#[utoipa::path(
    post,
    path = "/api/settings",
    tag = "Settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Upserted settings", body = UserSettings),
        (status = 400, description = "Demo user unresolvable")
    )
)]
pub async fn update_settings(
    State(app_state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = app_state.user_repo.resolve_or_demo(None).await?;

    let saved = app_state.settings_repo.upsert(user_id, payload).await?;

    Ok((StatusCode::OK, Json(saved)))
}
