// src/db/time_log_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        client::ClientRef,
        project::ProjectRef,
        time_log::{TimeLog, TimeLogWithProject},
    },
};

#[derive(Debug)]
pub struct NewTimeLog {
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: Option<i32>,
    pub is_running: bool,
}

#[derive(FromRow)]
struct TimeLogRow {
    id: Uuid,
    project_id: Uuid,
    user_id: Uuid,
    description: Option<String>,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    duration: Option<i32>,
    is_running: bool,
    created_at: DateTime<Utc>,
    project_name: String,
    client_id: Uuid,
    client_name: String,
    client_company: Option<String>,
}

impl From<TimeLogRow> for TimeLogWithProject {
    fn from(row: TimeLogRow) -> Self {
        TimeLogWithProject {
            log: TimeLog {
                id: row.id,
                project_id: row.project_id,
                user_id: row.user_id,
                description: row.description,
                start_time: row.start_time,
                end_time: row.end_time,
                duration: row.duration,
                is_running: row.is_running,
                created_at: row.created_at,
            },
            project: ProjectRef {
                id: row.project_id,
                name: row.project_name,
                client: ClientRef {
                    id: row.client_id,
                    name: row.client_name,
                    company: row.client_company,
                },
            },
        }
    }
}

#[derive(Clone)]
pub struct TimeLogRepository {
    pool: PgPool,
}

impl TimeLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_with_project(&self) -> Result<Vec<TimeLogWithProject>, AppError> {
        let rows = sqlx::query_as::<_, TimeLogRow>(
            r#"
            SELECT
                tl.id, tl.project_id, tl.user_id, tl.description,
                tl.start_time, tl.end_time, tl.duration, tl.is_running,
                tl.created_at,
                p.name AS project_name,
                c.id AS client_id, c.name AS client_name, c.company AS client_company
            FROM time_logs tl
            JOIN projects p ON p.id = tl.project_id
            JOIN clients c ON c.id = p.client_id
            ORDER BY tl.start_time DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TimeLogWithProject::from).collect())
    }

    pub async fn create(&self, input: &NewTimeLog) -> Result<TimeLog, AppError> {
        sqlx::query_as::<_, TimeLog>(
            r#"
            INSERT INTO time_logs (
                project_id, user_id, description, start_time, end_time,
                duration, is_running
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(input.project_id)
        .bind(input.user_id)
        .bind(input.description.as_deref())
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.duration)
        .bind(input.is_running)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
