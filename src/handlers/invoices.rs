// src/handlers/invoices.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    db::invoice_repo::NewInvoice,
    handlers::ListParams,
    models::invoice::{Invoice, InvoiceStatus, InvoiceWithProject},
    services::search::any_field_matches,
};

// GET /api/invoices
#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = "Invoices",
    params(ListParams),
    responses(
        (status = 200, description = "Invoices newest first, with expanded project", body = Vec<InvoiceWithProject>)
    )
)]
pub async fn list_invoices(
    State(app_state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let invoices = app_state.invoice_repo.list_with_project().await?;

    let filtered: Vec<InvoiceWithProject> = invoices
        .into_iter()
        .filter(|i| {
            params
                .status
                .as_deref()
                .is_none_or(|s| i.invoice.status.as_str() == s)
        })
        .filter(|i| {
            params.q.as_deref().is_none_or(|q| {
                any_field_matches(
                    &[
                        &i.invoice.invoice_number,
                        &i.project.name,
                        &i.project.client.name,
                    ],
                    q,
                )
            })
        })
        .collect();

    Ok((StatusCode::OK, Json(filtered)))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoicePayload {
    pub project_id: Option<Uuid>,
    pub user_id: Option<Uuid>,

    #[schema(example = "INV-2024-002")]
    pub invoice_number: Option<String>,

    #[schema(value_type = Option<f64>, example = 2100.0)]
    pub amount: Option<Decimal>,

    #[schema(example = 28.0)]
    pub hours: Option<f64>,

    #[schema(value_type = Option<f64>, example = 0.0)]
    pub scope_charges: Option<Decimal>,

    pub status: Option<InvoiceStatus>,

    pub due_date: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,

    pub payment_link: Option<String>,
}

// POST /api/invoices
#[utoipa::path(
    post,
    path = "/api/invoices",
    tag = "Invoices",
    request_body = CreateInvoicePayload,
    responses(
        (status = 201, description = "Invoice created", body = Invoice),
        (status = 400, description = "Missing required fields, or demo user unresolvable")
    )
)]
pub async fn create_invoice(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateInvoicePayload>,
) -> Result<impl IntoResponse, AppError> {
    let project_id = payload
        .project_id
        .ok_or(AppError::MissingField("projectId is required"))?;
    let invoice_number = payload
        .invoice_number
        .ok_or(AppError::MissingField("invoiceNumber is required"))?;
    let amount = payload
        .amount
        .ok_or(AppError::MissingField("amount is required"))?;
    let due_date = payload
        .due_date
        .ok_or(AppError::MissingField("dueDate is required"))?;

    let user_id = app_state.user_repo.resolve_or_demo(payload.user_id).await?;

    let invoice = app_state
        .invoice_repo
        .create(&NewInvoice {
            project_id,
            user_id,
            invoice_number,
            amount,
            hours: payload.hours.unwrap_or(0.0),
            scope_charges: payload.scope_charges.unwrap_or(Decimal::ZERO),
            status: payload.status.unwrap_or(InvoiceStatus::Draft),
            due_date,
            paid_at: payload.paid_at,
            payment_link: payload.payment_link,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(invoice)))
}
