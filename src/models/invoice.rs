// src/models/invoice.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::project::ProjectRef;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "invoice_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,
    pub project_id: Uuid,
    pub user_id: Uuid,

    #[schema(example = "INV-2024-001")]
    pub invoice_number: String,

    #[schema(value_type = f64, example = 3187.5)]
    pub amount: Decimal,
    #[schema(example = 42.5)]
    pub hours: f64,
    #[schema(value_type = f64, example = 600.0)]
    pub scope_charges: Decimal,

    pub status: InvoiceStatus,

    pub due_date: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,

    // External payment-link reference; stored, never acted upon here.
    pub payment_link: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceWithProject {
    #[serde(flatten)]
    pub invoice: Invoice,

    pub project: ProjectRef,
}
