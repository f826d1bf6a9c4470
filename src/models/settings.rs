// src/models/settings.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub id: Uuid,
    pub user_id: Uuid,

    #[schema(value_type = f64, example = 75.0)]
    pub hourly_rate: Decimal,

    #[schema(example = "USD")]
    pub currency: String,

    #[schema(value_type = f64, example = 6000.0)]
    pub monthly_goal: Decimal,

    // Stored but unintegrated; payment processing is out of scope.
    pub stripe_secret_key: Option<String>,
    pub stripe_publishable_key: Option<String>,

    #[schema(example = "billing@freelanceguard.dev")]
    pub sender_email: Option<String>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[schema(value_type = Option<f64>, example = 90.0)]
    pub hourly_rate: Option<Decimal>,

    #[schema(example = "EUR")]
    pub currency: Option<String>,

    #[schema(value_type = Option<f64>, example = 7500.0)]
    pub monthly_goal: Option<Decimal>,

    pub stripe_secret_key: Option<String>,
    pub stripe_publishable_key: Option<String>,
    pub sender_email: Option<String>,
}
