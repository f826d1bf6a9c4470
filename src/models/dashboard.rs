// src/models/dashboard.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

// The cards at the top of the dashboard. Recomputed on every fetch,
// never cached or persisted.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_projects: usize,

    // Trailing 7x24h window, minutes summed then divided by 60.
    #[schema(example = 12.5)]
    pub weekly_hours: f64,

    pub pending_requests: usize,
    pub overdue_invoices: usize,

    #[schema(value_type = f64, example = 3187.5)]
    pub monthly_earnings: Decimal,

    #[schema(value_type = f64, example = 6000.0)]
    pub monthly_goal: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    TimeLog,
    ScopeRequest,
    Invoice,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    // Source-prefixed so ids stay unique across the merged feed.
    #[schema(example = "t-1f6a...")]
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ActivityKind,

    #[schema(example = "Work session completed")]
    pub title: String,
    pub description: String,

    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_activity: Vec<ActivityEntry>,
}
