pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod project_repo;
pub use project_repo::ProjectRepository;
pub mod time_log_repo;
pub use time_log_repo::TimeLogRepository;
pub mod scope_request_repo;
pub use scope_request_repo::ScopeRequestRepository;
pub mod invoice_repo;
pub use invoice_repo::InvoiceRepository;
pub mod settings_repo;
pub use settings_repo::SettingsRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
