// src/models/project.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::client::ClientRef;

// --- ENUMS ---

// Maps the CREATE TYPE project_status from the database
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "project_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Paused,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Paused => "paused",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "project_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Hourly,
    Fixed,
}

// --- RECORDS ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub client_id: Uuid,
    pub user_id: Uuid,

    #[schema(example = "E-commerce Website Redesign")]
    pub name: String,
    pub description: Option<String>,

    pub status: ProjectStatus,

    // Billing type; serialized as "type" to keep the original wire shape.
    #[serde(rename = "type")]
    pub project_type: ProjectType,

    // Relevant by billing type: hourly_rate for hourly, fixed_price for fixed.
    #[schema(value_type = Option<f64>, example = 75.0)]
    pub hourly_rate: Option<rust_decimal::Decimal>,
    #[schema(value_type = Option<f64>, example = 5000.0)]
    pub fixed_price: Option<rust_decimal::Decimal>,

    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,

    #[schema(example = 80.0)]
    pub estimated_hours: Option<f64>,
    pub actual_hours: f64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    // Completion ratio, clamped so overruns never read past 100%.
    // Undefined when no estimate was given.
    pub fn progress(&self) -> Option<f64> {
        match self.estimated_hours {
            Some(estimated) if estimated > 0.0 => {
                Some((self.actual_hours / estimated).min(1.0))
            }
            _ => None,
        }
    }
}

// Response shape for the project list: record + expanded client + derived
// completion ratio (0.0..=1.0, omitted when no estimate is set).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithClient {
    #[serde(flatten)]
    pub project: Project,

    pub client: ClientRef,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

// Compact shape embedded in time-log/scope-request/invoice responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub id: Uuid,
    pub name: String,
    pub client: ClientRef,
}
