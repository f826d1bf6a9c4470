// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::sync::Mutex;

use crate::{
    db::{
        ClientRepository, InvoiceRepository, ProjectRepository, ScopeRequestRepository,
        SettingsRepository, TimeLogRepository, UserRepository,
    },
    services::{ClientService, ProjectService, timer_service::TimerSession},
};

// Shared state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,

    pub user_repo: UserRepository,
    pub client_repo: ClientRepository,
    pub project_repo: ProjectRepository,
    pub time_log_repo: TimeLogRepository,
    pub scope_request_repo: ScopeRequestRepository,
    pub invoice_repo: InvoiceRepository,
    pub settings_repo: SettingsRepository,

    pub client_service: ClientService,
    pub project_service: ProjectService,

    // One active timer session at most; the app has a single demo user.
    pub active_timer: Arc<Mutex<Option<TimerSession>>>,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await
            .context("failed to connect to the database")?;

        tracing::info!("database connection established");

        // Dependency graph: repositories first, then the services that
        // compose them.
        let user_repo = UserRepository::new(db_pool.clone());
        let client_repo = ClientRepository::new(db_pool.clone());
        let project_repo = ProjectRepository::new(db_pool.clone());
        let time_log_repo = TimeLogRepository::new(db_pool.clone());
        let scope_request_repo = ScopeRequestRepository::new(db_pool.clone());
        let invoice_repo = InvoiceRepository::new(db_pool.clone());
        let settings_repo = SettingsRepository::new(db_pool.clone());

        let client_service = ClientService::new(client_repo.clone());
        let project_service = ProjectService::new(
            project_repo.clone(),
            client_repo.clone(),
            client_service.clone(),
            user_repo.clone(),
        );

        Ok(Self {
            db_pool,
            user_repo,
            client_repo,
            project_repo,
            time_log_repo,
            scope_request_repo,
            invoice_repo,
            settings_repo,
            client_service,
            project_service,
            active_timer: Arc::new(Mutex::new(None)),
        })
    }
}
