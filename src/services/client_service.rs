// src/services/client_service.rs

use sqlx::PgConnection;

use crate::{common::error::AppError, db::ClientRepository, models::client::Client};

#[derive(Clone)]
pub struct ClientService {
    repo: ClientRepository,
}

impl ClientService {
    pub fn new(repo: ClientRepository) -> Self {
        Self { repo }
    }

    // Idempotent creation keyed by email: an existing record is returned
    // as-is, a missing one is inserted. The bool reports whether an insert
    // happened, so the handler can pick 201 vs 200.
    //
    // Runs on a plain connection so it composes into the project-creation
    // transaction as well as the standalone endpoint.
    pub async fn find_or_create(
        &self,
        conn: &mut PgConnection,
        name: &str,
        email: &str,
        company: Option<&str>,
    ) -> Result<(Client, bool), AppError> {
        if let Some(existing) = self.repo.find_by_email(&mut *conn, email).await? {
            return Ok((existing, false));
        }

        match self.repo.create(&mut *conn, name, email, company).await {
            Ok(created) => Ok((created, true)),
            // Lost a race on the unique email index: someone else inserted
            // between our find and create. Return their record.
            Err(AppError::DatabaseError(e))
                if e.as_database_error()
                    .is_some_and(|db_err| db_err.is_unique_violation()) =>
            {
                let client = self
                    .repo
                    .find_by_email(&mut *conn, email)
                    .await?
                    .ok_or_else(|| AppError::InternalServerError(anyhow::anyhow!(
                        "client vanished after unique violation on {email}"
                    )))?;
                Ok((client, false))
            }
            Err(e) => Err(e),
        }
    }
}
