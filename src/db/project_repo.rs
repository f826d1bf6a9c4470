// src/db/project_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, FromRow, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        client::ClientRef,
        project::{Project, ProjectStatus, ProjectType, ProjectWithClient},
    },
};

// Insert arguments, already defaulted and owner-resolved by the service.
#[derive(Debug)]
pub struct NewProject {
    pub client_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub project_type: ProjectType,
    pub hourly_rate: Option<Decimal>,
    pub fixed_price: Option<Decimal>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub estimated_hours: Option<f64>,
}

// Flat join row; reassembled into the nested response shape below.
#[derive(FromRow)]
struct ProjectClientRow {
    id: Uuid,
    client_id: Uuid,
    user_id: Uuid,
    name: String,
    description: Option<String>,
    status: ProjectStatus,
    project_type: ProjectType,
    hourly_rate: Option<Decimal>,
    fixed_price: Option<Decimal>,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    estimated_hours: Option<f64>,
    actual_hours: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    client_name: String,
    client_company: Option<String>,
}

impl From<ProjectClientRow> for ProjectWithClient {
    fn from(row: ProjectClientRow) -> Self {
        let project = Project {
            id: row.id,
            client_id: row.client_id,
            user_id: row.user_id,
            name: row.name,
            description: row.description,
            status: row.status,
            project_type: row.project_type,
            hourly_rate: row.hourly_rate,
            fixed_price: row.fixed_price,
            start_date: row.start_date,
            end_date: row.end_date,
            estimated_hours: row.estimated_hours,
            actual_hours: row.actual_hours,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };
        let progress = project.progress();
        ProjectWithClient {
            client: ClientRef {
                id: project.client_id,
                name: row.client_name,
                company: row.client_company,
            },
            progress,
            project,
        }
    }
}

#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_with_client(&self) -> Result<Vec<ProjectWithClient>, AppError> {
        let rows = sqlx::query_as::<_, ProjectClientRow>(
            r#"
            SELECT
                p.id, p.client_id, p.user_id, p.name, p.description,
                p.status, p.project_type, p.hourly_rate, p.fixed_price,
                p.start_date, p.end_date, p.estimated_hours, p.actual_hours,
                p.created_at, p.updated_at,
                c.name AS client_name, c.company AS client_company
            FROM projects p
            JOIN clients c ON c.id = p.client_id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProjectWithClient::from).collect())
    }

    pub async fn create<'e, E>(&self, executor: E, input: &NewProject) -> Result<Project, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                client_id, user_id, name, description, status, project_type,
                hourly_rate, fixed_price, start_date, end_date, estimated_hours
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(input.client_id)
        .bind(input.user_id)
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.status)
        .bind(input.project_type)
        .bind(input.hourly_rate)
        .bind(input.fixed_price)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.estimated_hours)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
    }
}
