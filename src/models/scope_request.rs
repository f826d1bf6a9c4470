// src/models/scope_request.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::project::ProjectRef;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "scope_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ScopeStatus {
    Pending,
    Approved,
    Rejected,
}

impl ScopeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeStatus::Pending => "pending",
            ScopeStatus::Approved => "approved",
            ScopeStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScopeRequest {
    pub id: Uuid,
    pub project_id: Uuid,
    pub user_id: Uuid,

    #[schema(example = "Additional Payment Gateway Integration")]
    pub title: String,
    #[schema(example = "Add PayPal and Apple Pay")]
    pub description: String,

    #[schema(example = 8.0)]
    pub estimated_hours: f64,
    #[schema(value_type = f64, example = 75.0)]
    pub hourly_rate: Decimal,

    // estimated_hours x hourly_rate, computed once at creation and not
    // recomputed if hours or rate change afterwards.
    #[schema(value_type = f64, example = 600.0)]
    pub total_cost: Decimal,

    pub status: ScopeStatus,
    pub client_approved: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScopeRequestWithProject {
    #[serde(flatten)]
    pub request: ScopeRequest,

    pub project: ProjectRef,
}
