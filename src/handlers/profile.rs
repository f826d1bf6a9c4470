// src/handlers/profile.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    models::user::{DEMO_USER_EMAIL, UpdateProfileRequest, User},
};

// GET /api/profile
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "The demo user, or null when absent", body = Option<User>)
    )
)]
pub async fn get_profile(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let user = app_state.user_repo.find_by_email(DEMO_USER_EMAIL).await?;
    Ok((StatusCode::OK, Json(user)))
}

// POST /api/profile
#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "Profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Unknown user id")
    )
)]
// Partial update: omitted fields are left as they are.
pub async fn update_profile(
    State(app_state): State<AppState>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state
        .user_repo
        .update_profile(
            payload.id,
            payload.name.as_deref(),
            payload.company.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(user)))
}
