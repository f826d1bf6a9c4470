// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Single demo user stands in for authentication.
pub const DEMO_USER_EMAIL: &str = "demo@freelanceguard.dev";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,

    #[schema(example = "demo@freelanceguard.dev")]
    pub email: String,

    #[schema(example = "Demo User")]
    pub name: Option<String>,

    #[schema(example = "Freelance Guard")]
    pub company: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub id: Uuid,
    pub name: Option<String>,
    pub company: Option<String>,
}
