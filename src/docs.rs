// src/docs.rs

use utoipa::OpenApi;

use crate::{handlers, models, services};

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Clients ---
        handlers::clients::list_clients,
        handlers::clients::create_client,

        // --- Projects ---
        handlers::projects::list_projects,
        handlers::projects::create_project,

        // --- Time Logs ---
        handlers::time_logs::list_time_logs,
        handlers::time_logs::create_time_log,

        // --- Scope Requests ---
        handlers::scope_requests::list_scope_requests,
        handlers::scope_requests::create_scope_request,

        // --- Invoices ---
        handlers::invoices::list_invoices,
        handlers::invoices::create_invoice,

        // --- Settings / Profile ---
        handlers::settings::get_settings,
        handlers::settings::update_settings,
        handlers::profile::get_profile,
        handlers::profile::update_profile,

        // --- Dashboard ---
        handlers::dashboard::get_dashboard,

        // --- Timer ---
        handlers::timer::status,
        handlers::timer::start,
        handlers::timer::pause,
        handlers::timer::resume,
        handlers::timer::stop,
    ),
    components(
        schemas(
            // --- Clients ---
            models::client::Client,
            models::client::ClientRef,
            handlers::clients::CreateClientPayload,

            // --- Projects ---
            models::project::ProjectStatus,
            models::project::ProjectType,
            models::project::Project,
            models::project::ProjectWithClient,
            models::project::ProjectRef,
            handlers::projects::InlineClientPayload,
            handlers::projects::CreateProjectPayload,

            // --- Time Logs ---
            models::time_log::TimeLog,
            models::time_log::TimeLogWithProject,
            handlers::time_logs::CreateTimeLogPayload,

            // --- Scope Requests ---
            models::scope_request::ScopeStatus,
            models::scope_request::ScopeRequest,
            models::scope_request::ScopeRequestWithProject,
            handlers::scope_requests::CreateScopeRequestPayload,

            // --- Invoices ---
            models::invoice::InvoiceStatus,
            models::invoice::Invoice,
            models::invoice::InvoiceWithProject,
            handlers::invoices::CreateInvoicePayload,

            // --- Users / Settings ---
            models::user::User,
            models::user::UpdateProfileRequest,
            models::settings::UserSettings,
            models::settings::UpdateSettingsRequest,

            // --- Dashboard ---
            models::dashboard::DashboardStats,
            models::dashboard::ActivityKind,
            models::dashboard::ActivityEntry,
            models::dashboard::DashboardResponse,

            // --- Timer ---
            services::timer_service::TimerPhase,
            handlers::timer::TimerStatusResponse,
            handlers::timer::StartTimerPayload,
        )
    ),
    tags(
        (name = "Clients", description = "Client directory"),
        (name = "Projects", description = "Project tracking"),
        (name = "Time Logs", description = "Logged work sessions"),
        (name = "Scope Requests", description = "Scope-change requests"),
        (name = "Invoices", description = "Invoicing"),
        (name = "Settings", description = "Per-user settings"),
        (name = "Profile", description = "Demo user profile"),
        (name = "Dashboard", description = "Derived statistics and activity feed"),
        (name = "Timer", description = "Work session timer")
    )
)]
pub struct ApiDoc;
