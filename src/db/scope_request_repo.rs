// src/db/scope_request_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        client::ClientRef,
        project::ProjectRef,
        scope_request::{ScopeRequest, ScopeRequestWithProject, ScopeStatus},
    },
};

#[derive(Debug)]
pub struct NewScopeRequest {
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub estimated_hours: f64,
    pub hourly_rate: Decimal,
    pub total_cost: Decimal,
    pub status: ScopeStatus,
    pub client_approved: bool,
}

#[derive(FromRow)]
struct ScopeRequestRow {
    id: Uuid,
    project_id: Uuid,
    user_id: Uuid,
    title: String,
    description: String,
    estimated_hours: f64,
    hourly_rate: Decimal,
    total_cost: Decimal,
    status: ScopeStatus,
    client_approved: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    project_name: String,
    client_id: Uuid,
    client_name: String,
    client_company: Option<String>,
}

impl From<ScopeRequestRow> for ScopeRequestWithProject {
    fn from(row: ScopeRequestRow) -> Self {
        ScopeRequestWithProject {
            request: ScopeRequest {
                id: row.id,
                project_id: row.project_id,
                user_id: row.user_id,
                title: row.title,
                description: row.description,
                estimated_hours: row.estimated_hours,
                hourly_rate: row.hourly_rate,
                total_cost: row.total_cost,
                status: row.status,
                client_approved: row.client_approved,
                created_at: row.created_at,
                updated_at: row.updated_at,
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
pub struct ScopeRequestRepository {
    pool: PgPool,
}

impl ScopeRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_with_project(&self) -> Result<Vec<ScopeRequestWithProject>, AppError> {
        let rows = sqlx::query_as::<_, ScopeRequestRow>(
            r#"
            SELECT
                sr.id, sr.project_id, sr.user_id, sr.title, sr.description,
                sr.estimated_hours, sr.hourly_rate, sr.total_cost, sr.status,
                sr.client_approved, sr.created_at, sr.updated_at,
                p.name AS project_name,
                c.id AS client_id, c.name AS client_name, c.company AS client_company
            FROM scope_requests sr
            JOIN projects p ON p.id = sr.project_id
            JOIN clients c ON c.id = p.client_id
            ORDER BY sr.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ScopeRequestWithProject::from).collect())
    }

    pub async fn create(&self, input: &NewScopeRequest) -> Result<ScopeRequest, AppError> {
        sqlx::query_as::<_, ScopeRequest>(
            r#"
            INSERT INTO scope_requests (
                project_id, user_id, title, description, estimated_hours,
                hourly_rate, total_cost, status, client_approved
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(input.project_id)
        .bind(input.user_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.estimated_hours)
        .bind(input.hourly_rate)
        .bind(input.total_cost)
        .bind(input.status)
        .bind(input.client_approved)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
