// src/main.rs

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let app_state = AppState::new()
        .await
        .expect("failed to initialize application state");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("failed to run database migrations");
    tracing::info!("database migrations applied");

    // Every write without an explicit owner lands on the demo account, so
    // it has to exist (with settings) before the first request.
    let demo = app_state
        .user_repo
        .ensure_demo_user()
        .await
        .expect("failed to bootstrap the demo user");
    app_state
        .settings_repo
        .get_or_create_defaults(demo.id)
        .await
        .expect("failed to bootstrap demo user settings");

    let timer_routes = Router::new()
        .route("/", get(handlers::timer::status))
        .route("/start", post(handlers::timer::start))
        .route("/pause", post(handlers::timer::pause))
        .route("/resume", post(handlers::timer::resume))
        .route("/stop", post(handlers::timer::stop));

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/clients",
            get(handlers::clients::list_clients).post(handlers::clients::create_client),
        )
        .route(
            "/api/projects",
            get(handlers::projects::list_projects).post(handlers::projects::create_project),
        )
        .route(
            "/api/time-logs",
            get(handlers::time_logs::list_time_logs).post(handlers::time_logs::create_time_log),
        )
        .route(
            "/api/scope-requests",
            get(handlers::scope_requests::list_scope_requests)
                .post(handlers::scope_requests::create_scope_request),
        )
        .route(
            "/api/invoices",
            get(handlers::invoices::list_invoices).post(handlers::invoices::create_invoice),
        )
        .route(
            "/api/settings",
            get(handlers::settings::get_settings).post(handlers::settings::update_settings),
        )
        .route(
            "/api/profile",
            get(handlers::profile::get_profile).post(handlers::profile::update_profile),
        )
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        .nest("/api/timer", timer_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");
    tracing::info!("listening on {addr}");

    axum::serve(listener, app).await.expect("server error");
}
