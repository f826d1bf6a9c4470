pub mod client;
pub mod dashboard;
pub mod invoice;
pub mod project;
pub mod scope_request;
pub mod settings;
pub mod time_log;
pub mod user;
