// src/handlers/time_logs.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    db::time_log_repo::NewTimeLog,
    handlers::ListParams,
    models::time_log::{TimeLog, TimeLogWithProject},
    services::search::any_field_matches,
};

// Status filter for logs, derived from is_running since logs carry no status
// column. Accepted values are "running" and "completed"; anything else
// matches no rows, like an unknown value on the enum-backed filters.
fn status_matches(log: &TimeLogWithProject, status: &str) -> bool {
    match status {
        "running" => log.log.is_running,
        "completed" => !log.log.is_running,
        _ => false,
    }
}

// GET /api/time-logs
#[utoipa::path(
    get,
    path = "/api/time-logs",
    tag = "Time Logs",
    params(ListParams),
    responses(
        (status = 200, description = "Time logs newest first, with expanded project", body = Vec<TimeLogWithProject>)
    )
)]
pub async fn list_time_logs(
    State(app_state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let logs = app_state.time_log_repo.list_with_project().await?;

    let filtered: Vec<TimeLogWithProject> = logs
        .into_iter()
        .filter(|l| params.status.as_deref().is_none_or(|s| status_matches(l, s)))
        .filter(|l| {
            params.q.as_deref().is_none_or(|q| {
                any_field_matches(
                    &[
                        l.log.description.as_deref().unwrap_or(""),
                        &l.project.name,
                        &l.project.client.name,
                    ],
                    q,
                )
            })
        })
        .collect();

    Ok((StatusCode::OK, Json(filtered)))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeLogPayload {
    pub project_id: Option<Uuid>,
    pub user_id: Option<Uuid>,

    #[schema(example = "Auth flow implementation")]
    pub description: Option<String>,

    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,

    #[schema(example = 120)]
    pub duration: Option<i32>,

    #[serde(default)]
    pub is_running: bool,
}

// POST /api/time-logs
#[utoipa::path(
    post,
    path = "/api/time-logs",
    tag = "Time Logs",
    request_body = CreateTimeLogPayload,
    responses(
        (status = 201, description = "Time log created", body = TimeLog),
        (status = 400, description = "Missing project or start time, or demo user unresolvable")
    )
)]
pub async fn create_time_log(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateTimeLogPayload>,
) -> Result<impl IntoResponse, AppError> {
    let project_id = payload
        .project_id
        .ok_or(AppError::MissingField("projectId is required"))?;
    let start_time = payload
        .start_time
        .ok_or(AppError::MissingField("startTime is required"))?;

    let user_id = app_state.user_repo.resolve_or_demo(payload.user_id).await?;

    let log = app_state
        .time_log_repo
        .create(&NewTimeLog {
            project_id,
            user_id,
            description: payload.description,
            start_time,
            end_time: payload.end_time,
            duration: payload.duration,
            is_running: payload.is_running,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(log)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{client::ClientRef, project::ProjectRef};

    fn log(is_running: bool) -> TimeLogWithProject {
        let now = Utc::now();
        TimeLogWithProject {
            log: TimeLog {
                id: Uuid::new_v4(),
                project_id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                description: None,
                start_time: now,
                end_time: None,
                duration: None,
                is_running,
                created_at: now,
            },
            project: ProjectRef {
                id: Uuid::new_v4(),
                name: "P".to_string(),
                client: ClientRef {
                    id: Uuid::new_v4(),
                    name: "C".to_string(),
                    company: None,
                },
            },
        }
    }

    #[test]
    fn running_filter_selects_open_logs() {
        assert!(status_matches(&log(true), "running"));
        assert!(!status_matches(&log(false), "running"));
    }

    #[test]
    fn completed_filter_selects_closed_logs() {
        assert!(status_matches(&log(false), "completed"));
        assert!(!status_matches(&log(true), "completed"));
    }

    #[test]
    fn unknown_status_matches_no_logs() {
        assert!(!status_matches(&log(true), "paused"));
        assert!(!status_matches(&log(false), ""));
    }
}
