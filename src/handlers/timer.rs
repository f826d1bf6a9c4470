// src/handlers/timer.rs
//
// HTTP surface of the unified timer. The session itself lives in AppState
// behind an async mutex: one demo user, one active timer at most.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    db::time_log_repo::NewTimeLog,
    models::time_log::TimeLog,
    services::timer_service::{TimerPhase, TimerSession},
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimerStatusResponse {
    pub phase: TimerPhase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    pub elapsed_seconds: i64,
}

impl TimerStatusResponse {
    fn idle() -> Self {
        Self {
            phase: TimerPhase::Idle,
            project_id: None,
            description: None,
            started_at: None,
            elapsed_seconds: 0,
        }
    }

    fn from_session(session: &TimerSession, now: DateTime<Utc>) -> Self {
        Self {
            phase: session.phase(),
            project_id: Some(session.project_id),
            description: session.description.clone(),
            started_at: Some(session.started_at),
            elapsed_seconds: session.elapsed(now).num_seconds(),
        }
    }
}

// GET /api/timer
#[utoipa::path(
    get,
    path = "/api/timer",
    tag = "Timer",
    responses(
        (status = 200, description = "Current timer session status", body = TimerStatusResponse)
    )
)]
pub async fn status(State(app_state): State<AppState>) -> impl IntoResponse {
    let guard = app_state.active_timer.lock().await;
    let response = match guard.as_ref() {
        Some(session) => TimerStatusResponse::from_session(session, Utc::now()),
        None => TimerStatusResponse::idle(),
    };
    (StatusCode::OK, Json(response))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartTimerPayload {
    pub project_id: Option<Uuid>,
    #[schema(example = "Checkout flow")]
    pub description: Option<String>,
}

// POST /api/timer/start
#[utoipa::path(
    post,
    path = "/api/timer/start",
    tag = "Timer",
    request_body = StartTimerPayload,
    responses(
        (status = 200, description = "Session started", body = TimerStatusResponse),
        (status = 400, description = "Missing project id"),
        (status = 409, description = "A session is already active")
    )
)]
pub async fn start(
    State(app_state): State<AppState>,
    Json(payload): Json<StartTimerPayload>,
) -> Result<impl IntoResponse, AppError> {
    let project_id = payload
        .project_id
        .ok_or(AppError::MissingField("projectId is required"))?;

    let mut guard = app_state.active_timer.lock().await;
    if guard.is_some() {
        return Err(AppError::TimerAlreadyRunning);
    }

    let now = Utc::now();
    let session = TimerSession::start(project_id, payload.description, now);
    let response = TimerStatusResponse::from_session(&session, now);
    *guard = Some(session);

    Ok((StatusCode::OK, Json(response)))
}

// POST /api/timer/pause
#[utoipa::path(
    post,
    path = "/api/timer/pause",
    tag = "Timer",
    responses(
        (status = 200, description = "Session paused", body = TimerStatusResponse),
        (status = 400, description = "No active session")
    )
)]
pub async fn pause(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut guard = app_state.active_timer.lock().await;
    let session = guard.as_mut().ok_or(AppError::NoActiveTimer)?;

    let now = Utc::now();
    session.pause(now);

    Ok((StatusCode::OK, Json(TimerStatusResponse::from_session(session, now))))
}

// POST /api/timer/resume
#[utoipa::path(
    post,
    path = "/api/timer/resume",
    tag = "Timer",
    responses(
        (status = 200, description = "Session resumed", body = TimerStatusResponse),
        (status = 400, description = "No active session")
    )
)]
pub async fn resume(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut guard = app_state.active_timer.lock().await;
    let session = guard.as_mut().ok_or(AppError::NoActiveTimer)?;

    let now = Utc::now();
    session.resume(now);

    Ok((StatusCode::OK, Json(TimerStatusResponse::from_session(session, now))))
}

// POST /api/timer/stop
//
// Closes the session and fixes its duration (floored minutes) into a new
// TimeLog. The duration is never recalculated afterwards.
#[utoipa::path(
    post,
    path = "/api/timer/stop",
    tag = "Timer",
    responses(
        (status = 201, description = "Session persisted as a time log", body = TimeLog),
        (status = 400, description = "No active session, or demo user unresolvable")
    )
)]
pub async fn stop(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    // Resolve the owner before consuming the session, so a missing demo
    // user leaves the timer intact.
    let user_id = app_state.user_repo.resolve_or_demo(None).await?;

    let mut guard = app_state.active_timer.lock().await;
    let session = guard.take().ok_or(AppError::NoActiveTimer)?;

    let finished = session.stop(Utc::now());
    let log = app_state
        .time_log_repo
        .create(&NewTimeLog {
            project_id: finished.project_id,
            user_id,
            description: finished.description,
            start_time: finished.started_at,
            end_time: Some(finished.ended_at),
            duration: Some(finished.duration_minutes),
            is_running: false,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(log)))
}
