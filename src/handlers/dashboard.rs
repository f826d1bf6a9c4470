// src/handlers/dashboard.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    config::AppState,
    models::dashboard::DashboardResponse,
    services::dashboard_service,
};

// GET /api/dashboard
//
// Each collection is fetched independently; a failed fetch degrades to an
// empty one so partial backend failure never blocks the dashboard. The
// trade-off is that real errors only surface in the log.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Derived stats and recent activity", body = DashboardResponse)
    )
)]
pub async fn get_dashboard(State(app_state): State<AppState>) -> impl IntoResponse {
    let projects = app_state
        .project_repo
        .list_with_client()
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("dashboard: project fetch degraded to empty: {e}");
            Vec::new()
        });
    let logs = app_state
        .time_log_repo
        .list_with_project()
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("dashboard: time log fetch degraded to empty: {e}");
            Vec::new()
        });
    let requests = app_state
        .scope_request_repo
        .list_with_project()
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("dashboard: scope request fetch degraded to empty: {e}");
            Vec::new()
        });
    let invoices = app_state
        .invoice_repo
        .list_with_project()
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("dashboard: invoice fetch degraded to empty: {e}");
            Vec::new()
        });

    let monthly_goal = monthly_goal(&app_state).await.unwrap_or(Decimal::from(6000));

    let now = Utc::now();
    let response = DashboardResponse {
        stats: dashboard_service::stats(
            &projects,
            &logs,
            &requests,
            &invoices,
            monthly_goal,
            now,
        ),
        recent_activity: dashboard_service::recent_activity(&logs, &requests, &invoices),
    };

    (StatusCode::OK, Json(response))
}

async fn monthly_goal(app_state: &AppState) -> Result<Decimal, AppError> {
    let user_id = app_state.user_repo.resolve_or_demo(None).await?;
    let settings = app_state.settings_repo.find_for_user(user_id).await?;
    Ok(settings
        .map(|s| s.monthly_goal)
        .unwrap_or(Decimal::from(6000)))
}
