pub mod clients;
pub mod dashboard;
pub mod invoices;
pub mod profile;
pub mod projects;
pub mod scope_requests;
pub mod settings;
pub mod time_logs;
pub mod timer;

use serde::Deserialize;
use utoipa::IntoParams;

// Optional list filters, applied in memory over the fetched rows: `q` is a
// case-insensitive substring over the view's display fields, `status` an
// equality match.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub q: Option<String>,
    pub status: Option<String>,
}
