// src/models/client.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,

    #[schema(example = "John Smith")]
    pub name: String,

    // Unique lookup key; client creation is find-or-create by email.
    #[schema(example = "john@techcorp.com")]
    pub email: String,

    #[schema(example = "TechCorp Inc.")]
    pub company: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Compact shape embedded in project/time-log/invoice responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientRef {
    pub id: Uuid,
    pub name: String,
    pub company: Option<String>,
}
