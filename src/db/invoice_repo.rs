// src/db/invoice_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        client::ClientRef,
        invoice::{Invoice, InvoiceStatus, InvoiceWithProject},
        project::ProjectRef,
    },
};

#[derive(Debug)]
pub struct NewInvoice {
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub invoice_number: String,
    pub amount: Decimal,
    pub hours: f64,
    pub scope_charges: Decimal,
    pub status: InvoiceStatus,
    pub due_date: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
    pub payment_link: Option<String>,
}

#[derive(FromRow)]
struct InvoiceRow {
    id: Uuid,
    project_id: Uuid,
    user_id: Uuid,
    invoice_number: String,
    amount: Decimal,
    hours: f64,
    scope_charges: Decimal,
    status: InvoiceStatus,
    due_date: DateTime<Utc>,
    paid_at: Option<DateTime<Utc>>,
    payment_link: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    project_name: String,
    client_id: Uuid,
    client_name: String,
    client_company: Option<String>,
}

impl From<InvoiceRow> for InvoiceWithProject {
    fn from(row: InvoiceRow) -> Self {
        InvoiceWithProject {
            invoice: Invoice {
                id: row.id,
                project_id: row.project_id,
                user_id: row.user_id,
                invoice_number: row.invoice_number,
                amount: row.amount,
                hours: row.hours,
                scope_charges: row.scope_charges,
                status: row.status,
                due_date: row.due_date,
                paid_at: row.paid_at,
                payment_link: row.payment_link,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            project: ProjectRef {
                id: row.project_id,
                name: row.project_name,
                client: ClientRef {
                    id: row.client_id,
                    name: row.client_name,
                    company: row.client_company,
                },
            },
        }
    }
}

#[derive(Clone)]
pub struct InvoiceRepository {
    pool: PgPool,
}

impl InvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_with_project(&self) -> Result<Vec<InvoiceWithProject>, AppError> {
        let rows = sqlx::query_as::<_, InvoiceRow>(
            r#"
            SELECT
                i.id, i.project_id, i.user_id, i.invoice_number, i.amount,
                i.hours, i.scope_charges, i.status, i.due_date, i.paid_at,
                i.payment_link, i.created_at, i.updated_at,
                p.name AS project_name,
                c.id AS client_id, c.name AS client_name, c.company AS client_company
            FROM invoices i
            JOIN projects p ON p.id = i.project_id
            JOIN clients c ON c.id = p.client_id
            ORDER BY i.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(InvoiceWithProject::from).collect())
    }

    pub async fn create(&self, input: &NewInvoice) -> Result<Invoice, AppError> {
        sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (
                project_id, user_id, invoice_number, amount, hours,
                scope_charges, status, due_date, paid_at, payment_link
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(input.project_id)
        .bind(input.user_id)
        .bind(&input.invoice_number)
        .bind(input.amount)
        .bind(input.hours)
        .bind(input.scope_charges)
        .bind(input.status)
        .bind(input.due_date)
        .bind(input.paid_at)
        .bind(input.payment_link.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
