// src/handlers/scope_requests.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    db::scope_request_repo::NewScopeRequest,
    handlers::ListParams,
    models::scope_request::{ScopeRequest, ScopeRequestWithProject, ScopeStatus},
    services::search::any_field_matches,
};

// GET /api/scope-requests
#[utoipa::path(
    get,
    path = "/api/scope-requests",
    tag = "Scope Requests",
    params(ListParams),
    responses(
        (status = 200, description = "Scope requests newest first, with expanded project", body = Vec<ScopeRequestWithProject>)
    )
)]
pub async fn list_scope_requests(
    State(app_state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let requests = app_state.scope_request_repo.list_with_project().await?;

    let filtered: Vec<ScopeRequestWithProject> = requests
        .into_iter()
        .filter(|r| {
            params
                .status
                .as_deref()
                .is_none_or(|s| r.request.status.as_str() == s)
        })
        .filter(|r| {
            params.q.as_deref().is_none_or(|q| {
                any_field_matches(
                    &[&r.request.title, &r.request.description, &r.project.name],
                    q,
                )
            })
        })
        .collect();

    Ok((StatusCode::OK, Json(filtered)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScopeRequestPayload {
    pub project_id: Option<Uuid>,
    pub user_id: Option<Uuid>,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Custom Admin Dashboard")]
    pub title: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Analytics and reporting")]
    pub description: String,

    #[schema(example = 20.0)]
    pub estimated_hours: Option<f64>,

    #[schema(value_type = Option<f64>, example = 75.0)]
    pub hourly_rate: Option<Decimal>,

    pub status: Option<ScopeStatus>,

    #[serde(default)]
    pub client_approved: bool,
}

// Fixed at creation time; later edits to hours or rate do not recompute it.
fn total_cost(estimated_hours: f64, hourly_rate: Decimal) -> Result<Decimal, AppError> {
    let hours = Decimal::try_from(estimated_hours)
        .map_err(|_| AppError::MissingField("estimatedHours is invalid"))?;
    Ok(hours * hourly_rate)
}

// POST /api/scope-requests
#[utoipa::path(
    post,
    path = "/api/scope-requests",
    tag = "Scope Requests",
    request_body = CreateScopeRequestPayload,
    responses(
        (status = 201, description = "Scope request created", body = ScopeRequest),
        (status = 400, description = "Missing required fields, or demo user unresolvable")
    )
)]
pub async fn create_scope_request(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateScopeRequestPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let project_id = payload
        .project_id
        .ok_or(AppError::MissingField("projectId is required"))?;
    let estimated_hours = payload
        .estimated_hours
        .ok_or(AppError::MissingField("estimatedHours is required"))?;
    let hourly_rate = payload
        .hourly_rate
        .ok_or(AppError::MissingField("hourlyRate is required"))?;

    let user_id = app_state.user_repo.resolve_or_demo(payload.user_id).await?;

    let request = app_state
        .scope_request_repo
        .create(&NewScopeRequest {
            project_id,
            user_id,
            title: payload.title,
            description: payload.description,
            estimated_hours,
            hourly_rate,
            total_cost: total_cost(estimated_hours, hourly_rate)?,
            status: payload.status.unwrap_or(ScopeStatus::Pending),
            client_approved: payload.client_approved,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_cost_is_hours_times_rate() {
        let cost = total_cost(8.0, Decimal::from(75)).unwrap();
        assert_eq!(cost, Decimal::from(600));
    }

    #[test]
    fn total_cost_keeps_fractional_hours() {
        let cost = total_cost(2.5, Decimal::from(80)).unwrap();
        assert_eq!(cost, Decimal::from(200));
    }
}
