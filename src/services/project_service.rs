// src/services/project_service.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ClientRepository, ProjectRepository, UserRepository, project_repo::NewProject},
    models::{
        client::ClientRef,
        project::{ProjectStatus, ProjectType, ProjectWithClient},
    },
    services::ClientService,
};

// How the caller points at the owning client: an existing record, or an
// inline find-or-create payload resolved inside the same transaction.
#[derive(Debug)]
pub enum ClientSelector {
    Existing(Uuid),
    Inline {
        name: String,
        email: String,
        company: Option<String>,
    },
}

// Project fields after handler-side defaulting, before owner resolution.
#[derive(Debug)]
pub struct ProjectDraft {
    pub user_id: Option<Uuid>,
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

#[derive(Clone)]
pub struct ProjectService {
    projects: ProjectRepository,
    clients: ClientRepository,
    client_service: ClientService,
    users: UserRepository,
}

impl ProjectService {
    pub fn new(
        projects: ProjectRepository,
        clients: ClientRepository,
        client_service: ClientService,
        users: UserRepository,
    ) -> Self {
        Self {
            projects,
            clients,
            client_service,
            users,
        }
    }

    // Client resolution and project insert share one transaction, so an
    // inline client is never left orphaned by a failed project insert.
    pub async fn create_project(
        &self,
        pool: &PgPool,
        selector: ClientSelector,
        draft: ProjectDraft,
    ) -> Result<ProjectWithClient, AppError> {
        let user_id = self.users.resolve_or_demo(draft.user_id).await?;

        let mut tx = pool.begin().await?;

        let client = match selector {
            ClientSelector::Existing(client_id) => self
                .clients
                .find_by_id(&mut *tx, client_id)
                .await?
                .ok_or(AppError::ClientNotFound)?,
            ClientSelector::Inline {
                name,
                email,
                company,
            } => {
                let (client, _created) = self
                    .client_service
                    .find_or_create(&mut *tx, &name, &email, company.as_deref())
                    .await?;
                client
            }
        };

        let project = self
            .projects
            .create(
                &mut *tx,
                &NewProject {
                    client_id: client.id,
                    user_id,
                    name: draft.name,
                    description: draft.description,
                    status: draft.status,
                    project_type: draft.project_type,
                    hourly_rate: draft.hourly_rate,
                    fixed_price: draft.fixed_price,
                    start_date: draft.start_date,
                    end_date: draft.end_date,
                    estimated_hours: draft.estimated_hours,
                },
            )
            .await?;

        tx.commit().await?;

        let progress = project.progress();
        Ok(ProjectWithClient {
            client: ClientRef {
                id: client.id,
                name: client.name,
                company: client.company,
            },
            progress,
            project,
        })
    }
}
