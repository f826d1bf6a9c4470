pub mod client_service;
pub use client_service::ClientService;
pub mod project_service;
pub use project_service::ProjectService;
pub mod dashboard_service;
pub mod search;
pub mod timer_service;
