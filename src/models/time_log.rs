// src/models/time_log.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::project::ProjectRef;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    pub id: Uuid,
    pub project_id: Uuid,
    pub user_id: Uuid,

    #[schema(example = "Frontend layouts and responsive design")]
    pub description: Option<String>,

    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,

    // Minutes, fixed at stop time and never recalculated.
    #[schema(example = 210)]
    pub duration: Option<i32>,

    pub is_running: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeLogWithProject {
    #[serde(flatten)]
    pub log: TimeLog,

    pub project: ProjectRef,
}
